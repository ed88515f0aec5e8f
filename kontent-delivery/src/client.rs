//! HTTP client for listing content types.

use std::{collections::HashSet, fmt};

use kontent_core::{ContentTypeSchema, Error, Result, SchemaSource};
use reqwest::Client;

use crate::response::{ApiError, TypesResponse};

/// Production Delivery API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://deliver.kontent.ai";

/// Value of the `X-KC-SOURCE` tracking header.
const SOURCE_HEADER: &str = concat!("kontent-gen;", env!("CARGO_PKG_VERSION"));

/// Lists the content types of one project.
///
/// With a secure access key the requests are authenticated with a bearer
/// token, which is required when the project has secured delivery enabled.
#[derive(Clone)]
pub struct DeliveryClient {
    client: Client,
    base_url: String,
    project_id: String,
    secure_access_key: Option<String>,
}

impl DeliveryClient {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: project_id.into(),
            secure_access_key: None,
        }
    }

    /// Override the API base URL (e.g. a proxy or a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn secure_access_key(mut self, key: impl Into<String>) -> Self {
        self.secure_access_key = Some(key.into());
        self
    }

    /// Use an existing HTTP client (connection pool, proxy settings, ...).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn types_url(&self) -> String {
        format!(
            "{}/{}/types",
            self.base_url.trim_end_matches('/'),
            self.project_id
        )
    }

    /// Fetch every content type, following `pagination.next_page`.
    pub async fn list_types(&self) -> Result<Vec<ContentTypeSchema>> {
        if self.project_id.trim().is_empty() {
            return Err(Error::invalid_configuration(
                "a project id is required to fetch content types",
            ));
        }

        let mut types = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(self.types_url());

        while let Some(url) = next.take() {
            let page = self.fetch_page(&url).await?;
            tracing::debug!(url = %url, count = page.types.len(), "fetched content types page");

            visited.insert(url);

            next = page
                .next_page()
                .filter(|next_url| {
                    let repeated = visited.contains(*next_url);
                    if repeated {
                        tracing::warn!(url = %next_url, "next page was already fetched, stopping");
                    }
                    !repeated
                })
                .map(str::to_string);
            types.extend(page.types);
        }

        Ok(types)
    }

    async fn fetch_page(&self, url: &str) -> Result<TypesResponse> {
        let mut request = self.client.get(url).header("X-KC-SOURCE", SOURCE_HEADER);
        if let Some(key) = &self.secure_access_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::fetch_with(format!("request to {} failed", url), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch_with(format!("failed to read response from {}", url), e))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(Error::fetch(format!("{} returned {}: {}", url, status, detail)));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::fetch_with(format!("invalid content types response from {}", url), e))
    }
}

impl fmt::Debug for DeliveryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryClient")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field(
                "secure_access_key",
                &self.secure_access_key.as_ref().map(|_| "<redacted>"),
            )
            .finish_non_exhaustive()
    }
}

impl SchemaSource for DeliveryClient {
    async fn fetch_types(&self) -> Result<Vec<ContentTypeSchema>> {
        self.list_types().await
    }
}
