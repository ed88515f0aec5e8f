//! Core types and utilities for the Kontent model generator.
//!
//! This crate holds the content type schema model, the known element kinds,
//! name resolution and the [`SchemaSource`] seam shared by the API client
//! and the code generator.

mod element;
mod error;
mod file;
mod naming;
mod schema;
mod source;
mod utils;

pub use element::ElementKind;
pub use error::{BoxError, Error, Result};
pub use file::{File, WriteResult};
pub use naming::{
    ElementNameFn, ElementResolver, FileNameFn, FileResolver, NameCase, resolve,
};
pub use schema::{ContentTypeSchema, ElementSchema};
pub use source::{SchemaSource, StaticSource};
// String utilities
pub use utils::{split_words, to_camel_case, to_pascal_case, to_snake_case};
