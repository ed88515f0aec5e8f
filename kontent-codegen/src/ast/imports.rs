//! TypeScript import builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for named TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_kw = if self.type_only { "type " } else { "" };

        let line = if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            )
        };

        vec![CodeFragment::Line(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn build(import: &Import) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(import);
        builder.build()
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("./utils").named("foo").named("bar");
        assert_eq!(build(&i), "import { foo, bar } from \"./utils\";\n");
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("@kontent-ai/delivery-sdk")
            .named_all(["IContentItem", "TextElement"])
            .type_only();
        assert_eq!(
            build(&i),
            "import type { IContentItem, TextElement } from \"@kontent-ai/delivery-sdk\";\n"
        );
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("./polyfill");
        assert!(i.is_empty());
        assert_eq!(build(&i), "import \"./polyfill\";\n");
    }
}
