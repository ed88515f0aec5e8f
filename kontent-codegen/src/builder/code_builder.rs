//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Line buffer that tracks an indentation level.
///
/// # Example
///
/// ```
/// use kontent_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export type Article = {")
///     .push_indent()
///     .push_line("title: TextElement;")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(
///     builder.build(),
///     "export type Article = {\n  title: TextElement;\n};\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent(self.indent_level);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a line at an explicit indentation level, leaving the current
    /// level untouched.
    pub fn push_line_at(&mut self, level: usize, s: &str) -> &mut Self {
        self.write_indent(level);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a line exactly as given, without indentation.
    pub fn push_verbatim(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::DocComment(lines) => {
                self.push_line("/**");
                for line in lines {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line.replace("*/", "*\\/")));
                    }
                }
                self.push_line(" */");
            }
        }
    }

    /// Check whether anything has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.buffer.push_str(&self.indent);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}
