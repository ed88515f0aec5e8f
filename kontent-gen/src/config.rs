//! The optional `kontent-gen.toml` configuration file.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use kontent_codegen::FormatOptions;
use kontent_core::NameCase;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;
use toml::Spanned;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG: &str = "kontent-gen.toml";

pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(kontent_gen::io_error),
        help("pass --config with the path to an existing file")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(kontent_gen::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown name resolver '{value}'")]
    #[diagnostic(
        code(kontent_gen::unknown_resolver),
        help("valid resolvers are: camelCase, PascalCase, snake_case")
    )]
    UnknownResolver {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown resolver")]
        span: SourceSpan,
        value: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    project: ProjectSection,
    #[serde(default)]
    naming: RawNaming,
    #[serde(default)]
    output: OutputSection,
    #[serde(default)]
    format: FormatOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNaming {
    elements: Option<Spanned<String>>,
    files: Option<Spanned<String>>,
}

/// `[project]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub id: Option<String>,
    pub secure_access_key: Option<String>,
    pub base_url: Option<String>,
}

/// `[output]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub dir: Option<PathBuf>,
    pub add_timestamp: Option<bool>,
    pub strict: Option<bool>,
}

/// A parsed and validated configuration file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigFile {
    pub project: ProjectSection,
    pub element_case: Option<NameCase>,
    pub file_case: Option<NameCase>,
    pub output: OutputSection,
    pub format: FormatOptions,
}

impl ConfigFile {
    /// Load a configuration file.
    ///
    /// A missing file is only an error when the path was given explicitly;
    /// otherwise the defaults are returned.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
                tracing::debug!(path = %path.display(), "no configuration file");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Box::new(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }));
            }
        };

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
        Self::parse(&content, &filename)
    }

    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let named_source = || NamedSource::new(filename, content.to_string());

        let raw: RawConfig = toml::from_str(content).map_err(|source| {
            Box::new(ConfigError::Parse {
                filename: filename.to_string(),
                src: named_source(),
                span: source.span().map(SourceSpan::from),
                source,
            })
        })?;

        let name_case = |value: Option<Spanned<String>>| -> Result<Option<NameCase>> {
            let Some(value) = value else {
                return Ok(None);
            };
            NameCase::from_str(value.get_ref()).map(Some).map_err(|_| {
                Box::new(ConfigError::UnknownResolver {
                    src: named_source(),
                    span: SourceSpan::from(value.span()),
                    value: value.into_inner(),
                })
            })
        };

        Ok(Self {
            element_case: name_case(raw.naming.elements)?,
            file_case: name_case(raw.naming.files)?,
            project: raw.project,
            output: raw.output,
            format: raw.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config = ConfigFile::parse(
            r#"
            [project]
            id = "975bf280-fd91-488c-994c-2f04416e5ee3"
            secure_access_key = "key"

            [naming]
            elements = "camelCase"
            files = "snake_case"

            [output]
            dir = "src/models"
            add_timestamp = true
            strict = true

            [format]
            indent_width = 4
            single_quote = true
            "#,
            DEFAULT_CONFIG,
        )
        .unwrap();

        assert_eq!(
            config.project.id.as_deref(),
            Some("975bf280-fd91-488c-994c-2f04416e5ee3")
        );
        assert_eq!(config.project.secure_access_key.as_deref(), Some("key"));
        assert_eq!(config.project.base_url, None);
        assert_eq!(config.element_case, Some(NameCase::CamelCase));
        assert_eq!(config.file_case, Some(NameCase::SnakeCase));
        assert_eq!(config.output.dir, Some(PathBuf::from("src/models")));
        assert_eq!(config.output.add_timestamp, Some(true));
        assert_eq!(config.output.strict, Some(true));
        assert_eq!(config.format.indent_width, 4);
        assert!(config.format.single_quote);
        assert!(!config.format.use_tabs);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(
            ConfigFile::parse("", DEFAULT_CONFIG).unwrap(),
            ConfigFile::default()
        );
    }

    #[test]
    fn test_unknown_resolver_points_at_value() {
        let content = "[naming]\nelements = \"kebab-case\"\n";
        let err = ConfigFile::parse(content, DEFAULT_CONFIG).unwrap_err();

        match *err {
            ConfigError::UnknownResolver { span, value, .. } => {
                assert_eq!(value, "kebab-case");
                let labelled = &content[span.offset()..span.offset() + span.len()];
                assert!(labelled.contains("kebab-case"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = ConfigFile::parse("[output]\ndirectory = \"x\"\n", DEFAULT_CONFIG).unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_default_file_is_ok() {
        let temp = TempDir::new().unwrap();
        let config = ConfigFile::load(&temp.path().join(DEFAULT_CONFIG), false).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::load(&temp.path().join("custom.toml"), true).unwrap_err();
        assert!(matches!(*err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG);
        fs::write(&path, "[naming]\nfiles = \"PascalCase\"\n").unwrap();

        let config = ConfigFile::load(&path, false).unwrap();
        assert_eq!(config.file_case, Some(NameCase::PascalCase));
    }
}
