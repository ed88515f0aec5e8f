//! Content type schema as served by the Delivery API.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::ElementKind;

/// A content type: a codename, a display name, and its elements in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawContentType")]
pub struct ContentTypeSchema {
    pub codename: String,
    pub name: String,
    pub elements: Vec<ElementSchema>,
}

impl ContentTypeSchema {
    pub fn new(codename: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            codename: codename.into(),
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Append an element.
    pub fn element(mut self, element: ElementSchema) -> Self {
        self.elements.push(element);
        self
    }
}

/// One typed element of a content type.
///
/// `kind` is the raw `type` string from the API so that kinds this
/// generator does not know about can still be reported by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSchema {
    pub codename: String,
    pub name: String,
    pub kind: String,
}

impl ElementSchema {
    pub fn new(codename: impl Into<String>, kind: impl Into<String>) -> Self {
        let codename = codename.into();
        Self {
            name: codename.clone(),
            codename,
            kind: kind.into(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The parsed kind, if it is one of the known kinds.
    pub fn known_kind(&self) -> Option<ElementKind> {
        ElementKind::parse(&self.kind)
    }
}

#[derive(Deserialize)]
struct RawContentType {
    system: RawSystem,
    #[serde(default)]
    elements: IndexMap<String, RawElement>,
}

#[derive(Deserialize)]
struct RawSystem {
    codename: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawElement {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: Option<String>,
}

impl From<RawContentType> for ContentTypeSchema {
    fn from(raw: RawContentType) -> Self {
        let elements = raw
            .elements
            .into_iter()
            .map(|(codename, element)| ElementSchema {
                name: element.name.unwrap_or_else(|| codename.clone()),
                codename,
                kind: element.kind,
            })
            .collect();

        Self {
            name: raw.system.name.unwrap_or_else(|| raw.system.codename.clone()),
            codename: raw.system.codename,
            elements,
        }
    }
}
