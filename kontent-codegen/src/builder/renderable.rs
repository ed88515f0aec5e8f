/// A piece of generated code, independent of indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line at the current indentation
    Line(String),
    /// A header line, an indented body and an optional closing line
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `/** ... */` comment, one entry per line
    DocComment(Vec<String>),
}

/// Types that render to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
