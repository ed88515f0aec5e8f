//! Element kind to TypeScript type mapping.

use kontent_core::ElementKind;

/// Module the generated models import their element types from.
pub const SDK_MODULE: &str = "@kontent-ai/delivery-sdk";

/// A target type for an element, with the SDK names it needs imported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedType {
    pub ty: &'static str,
    pub imports: &'static [&'static str],
}

impl MappedType {
    const fn simple(name: &'static [&'static str; 1]) -> Self {
        Self {
            ty: name[0],
            imports: name,
        }
    }
}

/// Trait for mapping element kinds to language-specific type strings.
pub trait TypeMapper {
    /// Map a known element kind to its target type
    fn map_element_kind(&self, kind: ElementKind) -> MappedType;

    /// Map a raw kind string, ignoring case. `None` for unknown kinds.
    fn map_kind(&self, raw: &str) -> Option<MappedType> {
        ElementKind::parse(raw).map(|kind| self.map_element_kind(kind))
    }
}

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn map_element_kind(&self, kind: ElementKind) -> MappedType {
        match kind {
            ElementKind::Text => MappedType::simple(&["TextElement"]),
            ElementKind::Number => MappedType::simple(&["NumberElement"]),
            ElementKind::DateTime => MappedType::simple(&["DateTimeElement"]),
            ElementKind::Asset => MappedType::simple(&["AssetsElement"]),
            ElementKind::RichText => MappedType::simple(&["RichTextElement"]),
            ElementKind::MultipleChoice => MappedType::simple(&["MultipleChoiceElement"]),
            ElementKind::UrlSlug => MappedType::simple(&["UrlSlugElement"]),
            ElementKind::Taxonomy => MappedType::simple(&["TaxonomyElement"]),
            ElementKind::LinkedItems => MappedType {
                ty: "LinkedItemsElement<IContentItem>",
                imports: &["IContentItem", "LinkedItemsElement"],
            },
            ElementKind::Custom => MappedType::simple(&["CustomElement"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_element_types() {
        let mapper = TypeScriptTypeMapper;
        let table = [
            ("text", "TextElement"),
            ("number", "NumberElement"),
            ("date_time", "DateTimeElement"),
            ("asset", "AssetsElement"),
            ("rich_text", "RichTextElement"),
            ("multiple_choice", "MultipleChoiceElement"),
            ("url_slug", "UrlSlugElement"),
            ("taxonomy", "TaxonomyElement"),
            ("modular_content", "LinkedItemsElement<IContentItem>"),
            ("custom", "CustomElement"),
        ];

        for (kind, ty) in table {
            assert_eq!(mapper.map_kind(kind).map(|m| m.ty), Some(ty), "kind {kind}");
        }
    }

    #[test]
    fn test_every_kind_is_mapped() {
        let mapper = TypeScriptTypeMapper;
        for kind in ElementKind::ALL {
            let mapped = mapper.map_element_kind(kind);
            assert!(
                mapped.imports.iter().any(|name| mapped.ty.starts_with(name)),
                "{kind} does not import its own type"
            );
        }
    }

    #[test]
    fn test_map_kind_ignores_case() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.map_kind("TEXT"), mapper.map_kind("text"));
        assert_eq!(mapper.map_kind("Date_Time"), mapper.map_kind("date_time"));
    }

    #[test]
    fn test_unknown_kind_is_unmapped() {
        let mapper = TypeScriptTypeMapper;
        assert_eq!(mapper.map_kind("guidelines"), None);
        assert_eq!(mapper.map_kind("snippet"), None);
    }

    #[test]
    fn test_linked_items_imports_content_item() {
        let mapped = TypeScriptTypeMapper.map_element_kind(ElementKind::LinkedItems);
        assert_eq!(mapped.imports, &["IContentItem", "LinkedItemsElement"]);
    }
}
