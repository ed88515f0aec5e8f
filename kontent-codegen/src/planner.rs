//! Output file naming.

use kontent_core::{ContentTypeSchema, FileResolver};

/// Extension of generated model files.
pub const TS_EXTENSION: &str = "ts";

/// File name for a content type's model.
///
/// Without a resolver the codename is used as-is.
pub fn plan_filename(schema: &ContentTypeSchema, resolver: Option<&FileResolver>) -> String {
    let stem = match resolver {
        Some(resolver) => resolver.resolve(schema),
        None => schema.codename.clone(),
    };
    format!("{}.{}", stem, TS_EXTENSION)
}
