//! DuckDuckGo search provider implementation
//!
//! Scrapes the JavaScript-free endpoint at `https://html.duckduckgo.com/html/`
//! via POST and CSS selectors.

use super::traits::{ProviderRequest, ProviderResponse, SearchProvider};
use crate::error::SearchError;
use crate::search::SearchResult;
use scraper::{Html, Selector};
use std::collections::HashMap;
use url::Url;

/// DuckDuckGo web search provider
pub struct DuckDuckGo {
    html_url: String,
}

impl DuckDuckGo {
    pub fn new() -> Self {
        Self {
            html_url: "https://html.duckduckgo.com/html/".to_string(),
        }
    }

    /// Point the provider at a different endpoint, e.g. a self-hosted mirror
    pub fn with_endpoint(url: impl Into<String>) -> Self {
        Self {
            html_url: url.into(),
        }
    }

    /// Extract the target URL from DuckDuckGo's redirect wrapper.
    ///
    /// Result links look like `//duckduckgo.com/l/?uddg=https%3A%2F%2F...`;
    /// the real URL is the decoded `uddg` query parameter.
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{}", href)
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }

    fn parse_html_results(&self, html: &str) -> Result<Vec<SearchResult>, SearchError> {
        let document = Html::parse_document(html);

        let result_selector = Selector::parse("div.result")
            .map_err(|e| SearchError::Parse(format!("invalid result selector: {:?}", e)))?;
        let title_selector = Selector::parse("a.result__a")
            .map_err(|e| SearchError::Parse(format!("invalid title selector: {:?}", e)))?;
        let snippet_selector = Selector::parse("a.result__snippet")
            .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {:?}", e)))?;

        let mut results = Vec::new();

        for element in document.select(&result_selector) {
            let title_elem = element.select(&title_selector).next();

            let title = title_elem
                .map(|t| t.text().collect::<String>().trim().to_string())
                .filter(|t| !t.is_empty());

            let url = title_elem
                .and_then(|t| t.value().attr("href"))
                .and_then(Self::extract_url)
                .filter(|u| !u.is_empty() && !u.contains("duckduckgo.com"));

            let snippet = element
                .select(&snippet_selector)
                .next()
                .map(|s| s.text().collect::<String>().trim().to_string())
                .filter(|s| !s.is_empty());

            // Ad slots and layout rows have none of the three fields
            if title.is_none() && url.is_none() && snippet.is_none() {
                continue;
            }

            results.push(SearchResult {
                title,
                url,
                snippet,
            });
        }

        Ok(results)
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProvider for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    fn request(&self, query: &str) -> Result<ProviderRequest, SearchError> {
        let mut form_data = HashMap::new();
        form_data.insert("q".to_string(), query.to_string());
        form_data.insert("b".to_string(), String::new());
        form_data.insert("kl".to_string(), "us-en".to_string());

        Ok(ProviderRequest::post(&self.html_url).form(form_data))
    }

    fn parse(&self, response: ProviderResponse) -> Result<Vec<SearchResult>, SearchError> {
        if response.is_rate_limited() {
            return Err(SearchError::Http(format!(
                "rate limited by {}",
                response.url
            )));
        }

        if !response.is_success() {
            return Err(SearchError::Http(format!(
                "HTTP {} from {}",
                response.status, response.url
            )));
        }

        self.parse_html_results(&response.text)
    }
}
