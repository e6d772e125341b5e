//! Provider traits and request/response types

use crate::error::SearchError;
use crate::search::SearchResult;
use std::collections::HashMap;

/// HTTP request to be made against the provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub params: HashMap<String, String>,
    /// Form-encoded POST body
    pub form: Option<HashMap<String, String>>,
}

impl ProviderRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: HashMap::new(),
            params: HashMap::new(),
            form: None,
        }
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers: HashMap::new(),
            params: HashMap::new(),
            form: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add form data (sets content-type to form-urlencoded)
    pub fn form(mut self, data: HashMap<String, String>) -> Self {
        self.form = Some(data);
        self
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// HTTP response from a provider request
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ProviderResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if response indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// Upstream search provider: turns a query into an HTTP request and the
/// response into result records.
///
/// Providers report how many records the upstream produced without limiting
/// them; bounding the result set is the executor's responsibility. Missing
/// fields in upstream records surface as `None` on [`SearchResult`], never
/// as invented text.
pub trait SearchProvider: Send + Sync {
    /// Provider name, used in diagnostics
    fn name(&self) -> &str;

    /// Build the HTTP request for a query
    fn request(&self, query: &str) -> Result<ProviderRequest, SearchError>;

    /// Parse the HTTP response into result records
    fn parse(&self, response: ProviderResponse) -> Result<Vec<SearchResult>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_builder() {
        let request = ProviderRequest::get("https://example.com/search")
            .param("q", "rust")
            .header("X-Test", "1");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.params.get("q").map(String::as_str), Some("rust"));
        assert_eq!(request.headers.get("X-Test").map(String::as_str), Some("1"));
        assert!(request.form.is_none());
    }

    #[test]
    fn post_request_with_form() {
        let mut data = HashMap::new();
        data.insert("q".to_string(), "rust".to_string());
        let request = ProviderRequest::post("https://example.com/search").form(data);

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.form.is_some());
    }

    #[test]
    fn response_status_checks() {
        let response = ProviderResponse {
            status: 429,
            headers: HashMap::new(),
            text: String::new(),
            url: "https://example.com".into(),
        };
        assert!(!response.is_success());
        assert!(response.is_rate_limited());
    }
}
