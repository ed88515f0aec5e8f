//! Content element kinds.

use std::fmt;

/// Element kinds the Delivery API reports in an element's `type` field.
///
/// This is the closed set the generator knows how to type. Anything else is
/// kept as a raw string on [`ElementSchema`](crate::ElementSchema) and
/// reported as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Number,
    DateTime,
    Asset,
    RichText,
    MultipleChoice,
    UrlSlug,
    Taxonomy,
    /// Linked items (`modular_content` in the Delivery API)
    LinkedItems,
    Custom,
}

impl ElementKind {
    /// All known kinds, in the order the Delivery API documents them.
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Text,
        ElementKind::Number,
        ElementKind::DateTime,
        ElementKind::Asset,
        ElementKind::RichText,
        ElementKind::MultipleChoice,
        ElementKind::UrlSlug,
        ElementKind::Taxonomy,
        ElementKind::LinkedItems,
        ElementKind::Custom,
    ];

    /// Get the canonical kind string used by the Delivery API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Number => "number",
            ElementKind::DateTime => "date_time",
            ElementKind::Asset => "asset",
            ElementKind::RichText => "rich_text",
            ElementKind::MultipleChoice => "multiple_choice",
            ElementKind::UrlSlug => "url_slug",
            ElementKind::Taxonomy => "taxonomy",
            ElementKind::LinkedItems => "modular_content",
            ElementKind::Custom => "custom",
        }
    }

    /// Parse a raw kind string, ignoring ASCII case.
    ///
    /// Returns `None` for kinds outside the known set.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_kind() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(ElementKind::parse("TEXT"), Some(ElementKind::Text));
        assert_eq!(ElementKind::parse("Rich_Text"), Some(ElementKind::RichText));
        assert_eq!(
            ElementKind::parse("MODULAR_CONTENT"),
            Some(ElementKind::LinkedItems)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ElementKind::parse("guidelines"), None);
        assert_eq!(ElementKind::parse(""), None);
    }
}
