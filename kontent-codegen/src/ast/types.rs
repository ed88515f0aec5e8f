//! TypeScript object type builder.

use crate::builder::{CodeFragment, Renderable};

/// A member of a TypeScript object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn to_line(&self) -> String {
        format!("{}: {};", self.name, self.ty)
    }
}

/// Builder for exported TypeScript object types (`export type Foo = { ... };`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "export type {} = {{}};",
                self.name
            ))];
        }

        vec![CodeFragment::Block {
            header: format!("export type {} = {{", self.name),
            body: self
                .fields
                .iter()
                .map(|f| CodeFragment::Line(f.to_line()))
                .collect(),
            close: Some("};".to_string()),
        }]
    }
}
