//! Renders one content type into a TypeScript model module.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use kontent_core::{ContentTypeSchema, ElementSchema, Error, Result, to_pascal_case};

use crate::{
    CodeFile,
    ast::{Field, Import, ObjectType},
    config::{GenerationConfig, UnknownElementPolicy},
    format::{Formatter, TypeScriptFormatter},
    type_mapper::{SDK_MODULE, TypeMapper, TypeScriptTypeMapper},
};

/// First line of every generated file.
pub const GENERATED_NOTICE: &str =
    "This file has been auto-generated by kontent-gen. Do not edit it by hand.";

/// An element left out of a model because its kind has no mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedElement {
    pub codename: String,
    pub kind: String,
}

/// The rendered source of one content type model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModel {
    pub type_name: String,
    pub content: String,
    pub skipped: Vec<SkippedElement>,
}

/// Renders content types with the naming and formatting of a
/// [`GenerationConfig`].
pub struct ModelRenderer<'a> {
    config: &'a GenerationConfig,
    mapper: TypeScriptTypeMapper,
    formatter: Box<dyn Formatter + Send + Sync + 'a>,
    timestamp: Option<DateTime<Utc>>,
}

impl<'a> ModelRenderer<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            config,
            mapper: TypeScriptTypeMapper,
            formatter: Box::new(TypeScriptFormatter::new(config.format)),
            timestamp: None,
        }
    }

    /// Replace the built-in formatter.
    pub fn with_formatter(mut self, formatter: impl Formatter + Send + Sync + 'a) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Stamp files with a fixed time instead of the current one.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Model type name for a content type. Always PascalCase, whatever the
    /// configured element and file conventions are.
    pub fn type_name(schema: &ContentTypeSchema) -> String {
        to_pascal_case(&schema.codename)
    }

    fn element_name(&self, schema: &ContentTypeSchema, element: &ElementSchema) -> String {
        match &self.config.element_resolver {
            Some(resolver) => resolver.resolve(&schema.codename, &element.codename),
            None => element.codename.clone(),
        }
    }

    pub fn render(&self, schema: &ContentTypeSchema) -> Result<RenderedModel> {
        let type_name = Self::type_name(schema);
        let mut fields = Vec::with_capacity(schema.elements.len());
        let mut imports = BTreeSet::new();
        let mut skipped = Vec::new();

        for element in &schema.elements {
            let Some(mapped) = self.mapper.map_kind(&element.kind) else {
                if self.config.unknown_elements == UnknownElementPolicy::Fail {
                    return Err(Error::UnsupportedElementKind {
                        content_type: schema.codename.clone(),
                        element: element.codename.clone(),
                        kind: element.kind.clone(),
                    });
                }
                tracing::debug!(
                    content_type = %schema.codename,
                    element = %element.codename,
                    kind = %element.kind,
                    "skipping element with unsupported kind"
                );
                skipped.push(SkippedElement {
                    codename: element.codename.clone(),
                    kind: element.kind.clone(),
                });
                continue;
            };

            imports.extend(mapped.imports.iter().copied());
            fields.push(Field::new(self.element_name(schema, element), mapped.ty));
        }

        let mut file = CodeFile::new()
            .header(GENERATED_NOTICE)
            .header(format!("Content type: {} ({})", schema.name, schema.codename));
        if self.config.add_timestamp {
            let timestamp = self.timestamp.unwrap_or_else(Utc::now);
            file = file.header(format!(
                "Generated at: {}",
                timestamp.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        let source = file
            .import(Import::new(SDK_MODULE).named_all(imports).type_only())
            .add(ObjectType::new(&type_name).fields(fields))
            .render();

        let content = self
            .formatter
            .format(&source)
            .map_err(|e| Error::render(&schema.codename, e))?;

        Ok(RenderedModel {
            type_name,
            content,
            skipped,
        })
    }
}
