use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for model generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the source of fetch and render failures, whose
/// underlying errors come from crates this one does not depend on.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid configuration: {message}")]
    #[diagnostic(code(kontent::invalid_configuration))]
    InvalidConfiguration { message: String },

    #[error("failed to fetch content types: {message}")]
    #[diagnostic(
        code(kontent::fetch_failure),
        help("check the project id, the secure access key and the API base url")
    )]
    FetchFailure {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("failed to render model for content type '{codename}'")]
    #[diagnostic(code(kontent::render_failure))]
    RenderFailure {
        codename: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(kontent::write_failure))]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("element '{element}' of content type '{content_type}' has unsupported kind '{kind}'")]
    #[diagnostic(
        code(kontent::unsupported_element_kind),
        help("run without strict mode to skip unsupported elements")
    )]
    UnsupportedElementKind {
        content_type: String,
        element: String,
        kind: String,
    },
}

impl Error {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// A fetch failure without an underlying error (e.g. an HTTP status).
    pub fn fetch(message: impl Into<String>) -> Self {
        Error::FetchFailure {
            message: message.into(),
            source: None,
        }
    }

    pub fn fetch_with(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::FetchFailure {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn render(codename: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::RenderFailure {
            codename: codename.into(),
            source: source.into(),
        }
    }
}
