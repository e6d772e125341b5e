//! HTTP client for making requests to the search provider

use super::user_agent::{accept_html, accept_language, generate_user_agent};
use crate::config::OutgoingSettings;
use crate::error::SearchError;
use crate::provider::{HttpMethod, ProviderRequest, ProviderResponse};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

/// HTTP client wrapper with Seekbot-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SearchError> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self, SearchError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .cookie_store(true)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| SearchError::ProviderUnavailable(e.to_string()))?,
            );
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(
                    reqwest::Proxy::http(http)
                        .map_err(|e| SearchError::ProviderUnavailable(e.to_string()))?,
                );
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(
                    reqwest::Proxy::https(https)
                        .map_err(|e| SearchError::ProviderUnavailable(e.to_string()))?,
                );
            }
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::ProviderUnavailable(e.to_string()))?;

        let user_agent = settings
            .user_agent
            .clone()
            .unwrap_or_else(generate_user_agent);

        Ok(Self { client, user_agent })
    }

    /// Execute a provider request
    pub async fn execute(&self, request: ProviderRequest) -> Result<ProviderResponse, SearchError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        // Set default headers
        req_builder = req_builder
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language())
            .header("DNT", "1")
            .header("Connection", "keep-alive")
            .header("Upgrade-Insecure-Requests", "1");

        // Add custom headers
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query parameters
        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        // Add form body
        if let Some(ref form) = request.form {
            req_builder = req_builder.form(form);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        Self::parse_response(response).await
    }

    /// Parse a reqwest response into a ProviderResponse
    async fn parse_response(response: Response) -> Result<ProviderResponse, SearchError> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let text = response
            .text()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        Ok(ProviderResponse {
            status,
            headers,
            text,
            url,
        })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
