//! Where content type schemas come from.

use std::future::Future;

use crate::{ContentTypeSchema, Result};

/// A provider of content type schemas.
///
/// Implementations return every content type in the order the backing
/// store declares them. Paging, if any, happens inside the implementation.
pub trait SchemaSource {
    fn fetch_types(&self) -> impl Future<Output = Result<Vec<ContentTypeSchema>>> + Send;
}

/// Schemas supplied directly by the caller.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    types: Vec<ContentTypeSchema>,
}

impl StaticSource {
    pub fn new(types: Vec<ContentTypeSchema>) -> Self {
        Self { types }
    }
}

impl SchemaSource for StaticSource {
    async fn fetch_types(&self) -> Result<Vec<ContentTypeSchema>> {
        Ok(self.types.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_keeps_order() {
        let source = StaticSource::new(vec![
            ContentTypeSchema::new("b", "B"),
            ContentTypeSchema::new("a", "A"),
        ]);

        let types = source.fetch_types().await.unwrap();

        let codenames: Vec<_> = types.iter().map(|t| t.codename.as_str()).collect();
        assert_eq!(codenames, vec!["b", "a"]);
    }
}
