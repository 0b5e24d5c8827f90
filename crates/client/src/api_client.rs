//! HTTP API client for the randomuser.me user service.

use reqwest::Client;
use serde::de::DeserializeOwned;
use userfeed_shared::{try_api_error_detail, ApiError, UserRecord, UsersPage, PAGE_SIZE};

/// Public endpoint the feed reads from.
pub const DEFAULT_BASE_URL: &str = "https://randomuser.me/api";

/// HTTP client for fetching paginated user records.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at the public endpoint.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (dev servers, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path_and_query: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let rest = path_and_query.trim_start_matches('/');
        if rest.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{rest}")
        }
    }

    /// Query string for one page of the feed.
    fn page_query(page: u32) -> String {
        format!("?page={page}&results={PAGE_SIZE}")
    }

    /// Make a GET request and decode the JSON response.
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            let body = try_api_error_detail(&text).unwrap_or(text);
            return Err(ApiError::Http { status, body });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Fetch one page of user records.
    ///
    /// The service keys pages off a seed it assigns per client, so the
    /// same page number is stable within a session but not across them.
    pub async fn fetch_users(&self, page: u32) -> Result<Vec<UserRecord>, ApiError> {
        let page: UsersPage = self.get_json(&Self::page_query(page)).await?;
        Ok(page.results)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
