//! Source formatting for generated TypeScript.
//!
//! The formatter does not parse TypeScript. It tokenizes just enough to
//! know when it is inside a string, template literal or comment, and
//! re-indents every line by the depth of the open `{`, `[` and `(`
//! delimiters. Unbalanced input is rejected.
//!
//! Its input is the output of [`CodeBuilder`], not arbitrary TypeScript.
//! Regex literals, JSX and comment text are not interpreted: comment
//! bodies pass through unchanged, so a `*/` inside doc text must already
//! be escaped (the builder does this for `DocComment` fragments).

use serde::Deserialize;
use thiserror::Error;

use crate::builder::{CodeBuilder, Indent};

/// Formatting options, as read from the `[format]` configuration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Spaces per indent level; ignored with `use_tabs`
    pub indent_width: u8,
    pub use_tabs: bool,
    /// Prefer `'` over `"` for string literals
    pub single_quote: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
            single_quote: false,
        }
    }
}

impl FormatOptions {
    pub fn indent(&self) -> Indent {
        if self.use_tabs {
            Indent::Tab
        } else {
            Indent::Spaces(self.indent_width)
        }
    }

    fn quote(&self) -> char {
        if self.single_quote { '\'' } else { '"' }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: unexpected '{found}'")]
    UnexpectedCloser { line: usize, found: char },

    #[error("line {line}: expected '{expected}' to close '{open}' from line {opened_at}, found '{found}'")]
    MismatchedCloser {
        line: usize,
        found: char,
        open: char,
        expected: char,
        opened_at: usize,
    },

    #[error("line {line}: '{open}' is never closed")]
    Unclosed { line: usize, open: char },

    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },

    #[error("line {line}: unterminated template literal")]
    UnterminatedTemplate { line: usize },

    #[error("line {line}: unterminated block comment")]
    UnterminatedComment { line: usize },
}

impl FormatError {
    /// 1-based line the error points at.
    pub fn line(&self) -> usize {
        match self {
            FormatError::UnexpectedCloser { line, .. }
            | FormatError::MismatchedCloser { line, .. }
            | FormatError::Unclosed { line, .. }
            | FormatError::UnterminatedString { line }
            | FormatError::UnterminatedTemplate { line }
            | FormatError::UnterminatedComment { line } => *line,
        }
    }
}

/// A source code formatter.
pub trait Formatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Formatter for generated TypeScript modules.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptFormatter {
    options: FormatOptions,
}

impl TypeScriptFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }
}

impl Formatter for TypeScriptFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut scanner = Scanner::new(self.options.quote());
        let mut builder = CodeBuilder::new(self.options.indent());
        let mut pending_blank = false;

        for (idx, raw) in source.lines().enumerate() {
            let line = scanner.scan(raw, idx + 1)?;

            if line.text.is_empty() && line.kind != LineKind::Verbatim {
                pending_blank = !builder.is_empty();
                continue;
            }
            if pending_blank {
                builder.push_blank();
                pending_blank = false;
            }

            match line.kind {
                LineKind::Code | LineKind::CommentBody => {
                    builder.push_line_at(line.depth, &line.text)
                }
                LineKind::Verbatim => builder.push_verbatim(&line.text),
            };
        }

        scanner.finish()?;
        Ok(builder.build())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Code,
    /// Continuation of a block comment, aligned under its opening `/*`
    CommentBody,
    /// Inside a template literal; emitted untouched
    Verbatim,
}

struct ScannedLine {
    text: String,
    depth: usize,
    kind: LineKind,
}

struct Scanner {
    quote: char,
    /// Open delimiters with the line they were opened on
    stack: Vec<(char, usize)>,
    block_comment: Option<usize>,
    template: Option<usize>,
}

impl Scanner {
    fn new(quote: char) -> Self {
        Self {
            quote,
            stack: Vec::new(),
            block_comment: None,
            template: None,
        }
    }

    fn scan(&mut self, raw: &str, line_no: usize) -> Result<ScannedLine, FormatError> {
        let kind = if self.template.is_some() {
            LineKind::Verbatim
        } else if self.block_comment.is_some() {
            LineKind::CommentBody
        } else {
            LineKind::Code
        };

        let src = match kind {
            LineKind::Verbatim => raw,
            _ => raw.trim(),
        };
        let chars: Vec<char> = src.chars().collect();
        let mut out = String::with_capacity(src.len());
        let mut line_depth: Option<usize> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if self.block_comment.is_some() {
                out.push(c);
                if c == '*' && chars.get(i + 1) == Some(&'/') {
                    out.push('/');
                    self.block_comment = None;
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            if self.template.is_some() {
                out.push(c);
                if c == '\\' {
                    if let Some(&escaped) = chars.get(i + 1) {
                        out.push(escaped);
                        i += 2;
                        continue;
                    }
                } else if c == '`' {
                    self.template = None;
                }
                i += 1;
                continue;
            }

            match c {
                '/' if chars.get(i + 1) == Some(&'/') => {
                    line_depth.get_or_insert(self.level());
                    out.extend(&chars[i..]);
                    i = chars.len();
                }
                '/' if chars.get(i + 1) == Some(&'*') => {
                    line_depth.get_or_insert(self.level());
                    self.block_comment = Some(line_no);
                    out.push_str("/*");
                    i += 2;
                }
                '"' | '\'' => {
                    line_depth.get_or_insert(self.level());
                    let end = string_end(&chars, i).ok_or(FormatError::UnterminatedString {
                        line: line_no,
                    })?;
                    let literal: String = chars[i..=end].iter().collect();
                    out.push_str(&requote(&literal, self.quote));
                    i = end + 1;
                }
                '`' => {
                    line_depth.get_or_insert(self.level());
                    self.template = Some(line_no);
                    out.push(c);
                    i += 1;
                }
                '{' | '[' | '(' => {
                    line_depth.get_or_insert(self.level());
                    self.stack.push((c, line_no));
                    out.push(c);
                    i += 1;
                }
                '}' | ']' | ')' => {
                    match self.stack.pop() {
                        Some((open, _)) if closer_for(open) == c => {}
                        Some((open, opened_at)) => {
                            return Err(FormatError::MismatchedCloser {
                                line: line_no,
                                found: c,
                                open,
                                expected: closer_for(open),
                                opened_at,
                            });
                        }
                        None => {
                            return Err(FormatError::UnexpectedCloser {
                                line: line_no,
                                found: c,
                            });
                        }
                    }
                    out.push(c);
                    i += 1;
                }
                _ => {
                    if !c.is_whitespace() {
                        line_depth.get_or_insert(self.level());
                    }
                    out.push(c);
                    i += 1;
                }
            }
        }

        let text = if self.template.is_some() || kind == LineKind::Verbatim {
            out
        } else {
            out.trim_end().to_string()
        };

        let text = match kind {
            LineKind::CommentBody if text.starts_with('*') => format!(" {}", text),
            _ => text,
        };

        Ok(ScannedLine {
            text,
            depth: line_depth.unwrap_or(self.level()),
            kind,
        })
    }

    /// Indent level: open delimiters count once per line they were opened
    /// on, so `f({` indents its body a single level.
    fn level(&self) -> usize {
        let mut lines: Vec<usize> = self.stack.iter().map(|&(_, line)| line).collect();
        lines.dedup();
        lines.len()
    }

    fn finish(&self) -> Result<(), FormatError> {
        if let Some(line) = self.block_comment {
            return Err(FormatError::UnterminatedComment { line });
        }
        if let Some(line) = self.template {
            return Err(FormatError::UnterminatedTemplate { line });
        }
        if let Some(&(open, line)) = self.stack.last() {
            return Err(FormatError::Unclosed { line, open });
        }
        Ok(())
    }
}

fn closer_for(open: char) -> char {
    match open {
        '{' => '}',
        '[' => ']',
        _ => ')',
    }
}

/// Index of the quote closing the string literal that starts at `start`.
fn string_end(chars: &[char], start: usize) -> Option<usize> {
    let quote = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == quote => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Switch a string literal to the preferred quote when no escaping is
/// involved either way.
fn requote(literal: &str, quote: char) -> String {
    if literal.starts_with(quote) {
        return literal.to_string();
    }
    let inner = &literal[1..literal.len() - 1];
    if inner.contains(quote) || inner.contains('\\') {
        return literal.to_string();
    }
    format!("{quote}{inner}{quote}")
}
