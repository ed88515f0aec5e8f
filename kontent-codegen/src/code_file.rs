//! CodeFile abstraction for structured TypeScript file generation.

use crate::{
    ast::Import,
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// A structured representation of a TypeScript file.
///
/// Organizes code into three sections: a header comment, imports, and body.
/// Sections are separated by one blank line, as are body elements.
///
/// # Example
///
/// ```
/// use kontent_codegen::{CodeFile, ast::{Field, Import, ObjectType}};
///
/// let code = CodeFile::new()
///     .header("Generated file")
///     .import(Import::new("@kontent-ai/delivery-sdk").named("TextElement").type_only())
///     .add(ObjectType::new("Article").field(Field::new("title", "TextElement")))
///     .render();
///
/// assert!(code.starts_with("/**\n * Generated file\n */\n\nimport type"));
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the file header comment.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add an import statement. Imports without names are dropped.
    pub fn import(mut self, import: Import) -> Self {
        if !import.is_empty() {
            self.imports.push(import);
        }
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        if !self.header.is_empty() {
            builder.apply_fragment(CodeFragment::DocComment(self.header.clone()));
        }

        if !self.imports.is_empty() {
            if !builder.is_empty() {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
        }

        for fragments in &self.body {
            if !builder.is_empty() {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.imports.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Field, ObjectType};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_empty_import_is_dropped() {
        let file = CodeFile::new().import(Import::new("@kontent-ai/delivery-sdk").type_only());
        assert!(file.is_empty());
    }

    #[test]
    fn test_sections_are_separated() {
        let code = CodeFile::new()
            .header("Header")
            .import(Import::new("sdk").named("TextElement"))
            .add(ObjectType::new("A").field(Field::new("a", "TextElement")))
            .add(ObjectType::new("B"))
            .render();

        assert_eq!(
            code,
            "/**\n * Header\n */\n\nimport { TextElement } from \"sdk\";\n\nexport type A = {\n  a: TextElement;\n};\n\nexport type B = {};\n"
        );
    }

    #[test]
    fn test_body_without_header_or_imports() {
        let code = CodeFile::new().add(ObjectType::new("Empty")).render();
        assert_eq!(code, "export type Empty = {};\n");
    }
}
