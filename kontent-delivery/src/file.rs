//! Schema source reading a saved Delivery API response.

use std::path::{Path, PathBuf};

use kontent_core::{ContentTypeSchema, Error, Result, SchemaSource};
use serde::Deserialize;

use crate::response::TypesResponse;

/// Reads content types from a JSON file.
///
/// Accepts either a full `GET /types` response body or a bare array of
/// content types.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    Response(TypesResponse),
    Types(Vec<ContentTypeSchema>),
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaSource for FileSource {
    async fn fetch_types(&self) -> Result<Vec<ContentTypeSchema>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::fetch_with(format!("failed to read '{}'", self.path.display()), e)
        })?;

        let file: SchemaFile = serde_json::from_str(&content).map_err(|e| {
            Error::fetch_with(
                format!("'{}' is not a content types document", self.path.display()),
                e,
            )
        })?;

        let types = match file {
            SchemaFile::Response(response) => response.types,
            SchemaFile::Types(types) => types,
        };
        tracing::debug!(path = %self.path.display(), count = types.len(), "loaded content types");

        Ok(types)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_reads_types_response() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.json");
        fs::write(
            &path,
            r#"{
                "types": [
                    { "system": { "codename": "article", "name": "Article" },
                      "elements": { "title": { "type": "text" } } }
                ],
                "pagination": { "next_page": "" }
            }"#,
        )
        .unwrap();

        let types = FileSource::new(&path).fetch_types().await.unwrap();

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].elements[0].codename, "title");
    }

    #[tokio::test]
    async fn test_reads_bare_array() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("types.json");
        fs::write(
            &path,
            r#"[ { "system": { "codename": "author" }, "elements": {} } ]"#,
        )
        .unwrap();

        let types = FileSource::new(&path).fetch_types().await.unwrap();

        assert_eq!(types[0].codename, "author");
        assert!(types[0].elements.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_failure() {
        let temp = TempDir::new().unwrap();
        let source = FileSource::new(temp.path().join("missing.json"));

        let err = source.fetch_types().await.unwrap_err();

        assert!(matches!(err, Error::FetchFailure { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
