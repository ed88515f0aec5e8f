use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Outcome of writing a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The file did not exist before
    Created,
    /// An existing file was replaced
    Overwritten,
}

/// A generated file waiting to be written.
///
/// Files are always overwritten; generated models carry no hand-written
/// content worth preserving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        let existed = self.path.exists();
        write_file(&self.path, &self.content).map_err(|source| Error::WriteFailure {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), existed, "wrote file");

        Ok(if existed {
            WriteResult::Overwritten
        } else {
            WriteResult::Created
        })
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("article.ts");

        let result = File::new(&path, "hello").write().unwrap();

        assert_eq!(result, WriteResult::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("article.ts");

        File::new(&path, "nested").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("article.ts");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_write_failure_names_the_path() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be written as a file
        let path = temp.path().join("taken");
        fs::create_dir(&path).unwrap();

        let err = File::new(&path, "x").write().unwrap_err();

        match err {
            Error::WriteFailure { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
