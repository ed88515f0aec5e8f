//! TypeScript model generator for Kontent.ai content types.
//!
//! Every content type returned by a [`SchemaSource`](kontent_core::SchemaSource)
//! becomes one `.ts` file exporting a type whose properties are the
//! content type's elements, typed with `@kontent-ai/delivery-sdk` element
//! types.
//!
//! ```ignore
//! use kontent_codegen::{GenerationConfig, Generator, TerminalOutput};
//! use kontent_core::NameCase;
//! use kontent_delivery::DeliveryClient;
//!
//! let config = GenerationConfig::new("975bf280-fd91-488c-994c-2f04416e5ee3")
//!     .element_resolver(NameCase::CamelCase)
//!     .output_dir("src/models");
//! let client = DeliveryClient::new(&config.project_id);
//!
//! Generator::new(&config)
//!     .run(&client, &mut TerminalOutput::new())
//!     .await?;
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`ast`] - TypeScript syntax nodes (Import, ObjectType)

mod code_file;
mod config;
mod format;
mod generator;
mod output;
mod planner;
mod renderer;
mod type_mapper;

pub mod ast;
pub mod builder;

pub use code_file::CodeFile;
pub use config::{GenerationConfig, UnknownElementPolicy};
pub use format::{FormatError, FormatOptions, Formatter, TypeScriptFormatter};
pub use generator::{FINISHED_MESSAGE, GeneratedModel, GenerationSummary, Generator};
pub use output::{BufferedOutput, Message, Output, TerminalOutput};
pub use planner::{TS_EXTENSION, plan_filename};
pub use renderer::{GENERATED_NOTICE, ModelRenderer, RenderedModel, SkippedElement};
pub use type_mapper::{MappedType, SDK_MODULE, TypeMapper, TypeScriptTypeMapper};
