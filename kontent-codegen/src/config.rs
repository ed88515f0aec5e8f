//! Generation settings.

use std::{fmt, path::PathBuf};

use kontent_core::{ElementResolver, FileResolver};

use crate::format::FormatOptions;

/// What to do with elements whose kind has no TypeScript mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownElementPolicy {
    /// Leave the element out of the model and report a warning
    #[default]
    Skip,
    /// Abort generation with an `UnsupportedElementKind` error
    Fail,
}

/// Settings for one generation run.
#[derive(Clone)]
pub struct GenerationConfig {
    pub project_id: String,
    /// Key for projects with secured delivery
    pub secure_access_key: Option<String>,
    /// Delivery API base URL override
    pub base_url: Option<String>,
    pub element_resolver: Option<ElementResolver>,
    pub file_resolver: Option<FileResolver>,
    pub add_timestamp: bool,
    pub format: FormatOptions,
    pub unknown_elements: UnknownElementPolicy,
    pub output_dir: PathBuf,
    /// Print models instead of writing them
    pub dry_run: bool,
}

impl GenerationConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    pub fn element_resolver(mut self, resolver: impl Into<ElementResolver>) -> Self {
        self.element_resolver = Some(resolver.into());
        self
    }

    pub fn file_resolver(mut self, resolver: impl Into<FileResolver>) -> Self {
        self.file_resolver = Some(resolver.into());
        self
    }

    pub fn add_timestamp(mut self, add_timestamp: bool) -> Self {
        self.add_timestamp = add_timestamp;
        self
    }

    pub fn format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    pub fn unknown_elements(mut self, policy: UnknownElementPolicy) -> Self {
        self.unknown_elements = policy;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            secure_access_key: None,
            base_url: None,
            element_resolver: None,
            file_resolver: None,
            add_timestamp: false,
            format: FormatOptions::default(),
            unknown_elements: UnknownElementPolicy::default(),
            output_dir: PathBuf::from("."),
            dry_run: false,
        }
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("project_id", &self.project_id)
            .field(
                "secure_access_key",
                &self.secure_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field("base_url", &self.base_url)
            .field("element_resolver", &self.element_resolver)
            .field("file_resolver", &self.file_resolver)
            .field("add_timestamp", &self.add_timestamp)
            .field("format", &self.format)
            .field("unknown_elements", &self.unknown_elements)
            .field("output_dir", &self.output_dir)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}
