//! TypeScript syntax nodes used by the model renderer.

mod imports;
mod types;

pub use imports::Import;
pub use types::{Field, ObjectType};
