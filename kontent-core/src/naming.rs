//! Name resolution for element identifiers and file names.
//!
//! A resolver is either one of the built-in [`NameCase`] conventions or a
//! caller-supplied function. Custom functions own their output completely;
//! nothing is applied on top of what they return.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{ContentTypeSchema, Error, to_camel_case, to_pascal_case, to_snake_case};

/// Built-in naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameCase {
    CamelCase,
    PascalCase,
    SnakeCase,
}

impl NameCase {
    /// Keywords accepted by [`FromStr`], as shown in error messages.
    pub const VALID_KEYWORDS: &'static str = "camelCase, PascalCase, snake_case";

    pub fn as_str(&self) -> &'static str {
        match self {
            NameCase::CamelCase => "camelCase",
            NameCase::PascalCase => "PascalCase",
            NameCase::SnakeCase => "snake_case",
        }
    }

    /// Convert a raw codename with this convention.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            NameCase::CamelCase => to_camel_case(raw),
            NameCase::PascalCase => to_pascal_case(raw),
            NameCase::SnakeCase => to_snake_case(raw),
        }
    }
}

impl FromStr for NameCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "camelCase" => Ok(NameCase::CamelCase),
            "PascalCase" | "pascalCase" => Ok(NameCase::PascalCase),
            "snake_case" | "snakeCase" => Ok(NameCase::SnakeCase),
            other => Err(Error::invalid_configuration(format!(
                "unknown name resolver '{}', expected one of: {}",
                other,
                NameCase::VALID_KEYWORDS
            ))),
        }
    }
}

impl fmt::Display for NameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a raw identifier with a built-in convention.
pub fn resolve(raw: &str, case: NameCase) -> String {
    case.apply(raw)
}

/// Custom element naming: `(type codename, element codename) -> name`.
pub type ElementNameFn = dyn Fn(&str, &str) -> String + Send + Sync;

/// Custom file naming: receives the whole content type.
pub type FileNameFn = dyn Fn(&ContentTypeSchema) -> String + Send + Sync;

/// Resolver for element identifiers in generated models.
#[derive(Clone)]
pub enum ElementResolver {
    Convention(NameCase),
    Custom(Arc<ElementNameFn>),
}

impl ElementResolver {
    pub fn custom(f: impl Fn(&str, &str) -> String + Send + Sync + 'static) -> Self {
        ElementResolver::Custom(Arc::new(f))
    }

    pub fn resolve(&self, type_codename: &str, element_codename: &str) -> String {
        match self {
            ElementResolver::Convention(case) => case.apply(element_codename),
            ElementResolver::Custom(f) => f(type_codename, element_codename),
        }
    }
}

impl fmt::Debug for ElementResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementResolver::Convention(case) => f.debug_tuple("Convention").field(case).finish(),
            ElementResolver::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl fmt::Display for ElementResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementResolver::Convention(case) => write!(f, "'{}'", case),
            ElementResolver::Custom(_) => f.write_str("custom"),
        }
    }
}

impl From<NameCase> for ElementResolver {
    fn from(case: NameCase) -> Self {
        ElementResolver::Convention(case)
    }
}

/// Resolver for generated file names (without extension).
#[derive(Clone)]
pub enum FileResolver {
    Convention(NameCase),
    Custom(Arc<FileNameFn>),
}

impl FileResolver {
    pub fn custom(f: impl Fn(&ContentTypeSchema) -> String + Send + Sync + 'static) -> Self {
        FileResolver::Custom(Arc::new(f))
    }

    pub fn resolve(&self, schema: &ContentTypeSchema) -> String {
        match self {
            FileResolver::Convention(case) => case.apply(&schema.codename),
            FileResolver::Custom(f) => f(schema),
        }
    }
}

impl fmt::Debug for FileResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileResolver::Convention(case) => f.debug_tuple("Convention").field(case).finish(),
            FileResolver::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl fmt::Display for FileResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileResolver::Convention(case) => write!(f, "'{}'", case),
            FileResolver::Custom(_) => f.write_str("custom"),
        }
    }
}

impl From<NameCase> for FileResolver {
    fn from(case: NameCase) -> Self {
        FileResolver::Convention(case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("camelCase".parse::<NameCase>().unwrap(), NameCase::CamelCase);
        assert_eq!("PascalCase".parse::<NameCase>().unwrap(), NameCase::PascalCase);
        assert_eq!("pascalCase".parse::<NameCase>().unwrap(), NameCase::PascalCase);
        assert_eq!("snake_case".parse::<NameCase>().unwrap(), NameCase::SnakeCase);
        assert_eq!("snakeCase".parse::<NameCase>().unwrap(), NameCase::SnakeCase);
    }

    #[test]
    fn test_parse_rejects_unknown_keyword() {
        let err = "kebab-case".parse::<NameCase>().unwrap_err();

        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        let message = err.to_string();
        assert!(message.contains("kebab-case"));
        assert!(message.contains("camelCase, PascalCase, snake_case"));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for case in [NameCase::CamelCase, NameCase::PascalCase, NameCase::SnakeCase] {
            assert_eq!(resolve("hero_banner", case), resolve("hero_banner", case));
        }
        assert_eq!(resolve("hero_banner", NameCase::CamelCase), "heroBanner");
        assert_eq!(resolve("hero_banner", NameCase::PascalCase), "HeroBanner");
        assert_eq!(resolve("heroBanner", NameCase::SnakeCase), "hero_banner");
    }

    #[test]
    fn test_custom_element_resolver_gets_type_context() {
        let resolver = ElementResolver::custom(|ty, el| format!("{}__{}", ty, el));
        assert_eq!(resolver.resolve("article", "title"), "article__title");
    }

    #[test]
    fn test_custom_element_resolver_output_is_untouched() {
        let resolver = ElementResolver::custom(|_, el| format!("CUSTOM_{}", el));
        assert_eq!(resolver.resolve("article", "body_copy"), "CUSTOM_body_copy");
    }

    #[test]
    fn test_file_resolver() {
        let schema = ContentTypeSchema::new("hero_banner", "Hero banner");

        assert_eq!(
            FileResolver::Convention(NameCase::PascalCase).resolve(&schema),
            "HeroBanner"
        );
        let custom = FileResolver::custom(|s| format!("{}-{}", s.codename, s.elements.len()));
        assert_eq!(custom.resolve(&schema), "hero_banner-0");
    }

    #[test]
    fn test_resolver_display() {
        assert_eq!(
            ElementResolver::from(NameCase::CamelCase).to_string(),
            "'camelCase'"
        );
        assert_eq!(FileResolver::custom(|s| s.codename.clone()).to_string(), "custom");
    }
}
