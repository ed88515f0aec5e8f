//! Delivery API response bodies.

use kontent_core::ContentTypeSchema;
use serde::Deserialize;

/// Body of `GET /{project_id}/types`.
#[derive(Debug, Deserialize)]
pub(crate) struct TypesResponse {
    pub types: Vec<ContentTypeSchema>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl TypesResponse {
    /// Absolute URL of the next page, if there is one.
    pub fn next_page(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .map(|p| p.next_page.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub next_page: String,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page() {
        let last: TypesResponse = serde_json::from_str(
            r#"{ "types": [], "pagination": { "skip": 0, "limit": 0, "count": 0, "next_page": "" } }"#,
        )
        .unwrap();
        assert_eq!(last.next_page(), None);

        let more: TypesResponse = serde_json::from_str(
            r#"{ "types": [], "pagination": { "next_page": "https://deliver.kontent.ai/p/types?skip=10" } }"#,
        )
        .unwrap();
        assert_eq!(
            more.next_page(),
            Some("https://deliver.kontent.ai/p/types?skip=10")
        );
    }

    #[test]
    fn test_pagination_is_optional() {
        let response: TypesResponse = serde_json::from_str(r#"{ "types": [] }"#).unwrap();
        assert_eq!(response.next_page(), None);
    }
}
