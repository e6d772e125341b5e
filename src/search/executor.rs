//! Bounded, failure-isolated search execution

use super::models::SearchResult;
use crate::config::Settings;
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::provider::{DuckDuckGo, SearchProvider};
use crate::ratelimit::RateLimiter;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes one rate-limited search invocation against the upstream provider
/// and bounds its output.
///
/// `search` never fails: any provider error is caught at this boundary,
/// reported through the logging channel, and converted into an empty result
/// set. The calling reasoning loop treats "no results" uniformly whether the
/// cause was "nothing found" or "provider failed".
pub struct SearchExecutor {
    provider: Arc<dyn SearchProvider>,
    /// `None` when client construction failed at startup; every search then
    /// returns no results for the executor's lifetime.
    client: Option<HttpClient>,
    limiter: Arc<RateLimiter>,
    max_results: usize,
}

impl SearchExecutor {
    /// Create an executor from settings, with the default DuckDuckGo provider.
    ///
    /// If the HTTP client cannot be constructed the executor enters a
    /// permanently degraded state, logged once here.
    pub fn new(settings: &Settings) -> Self {
        let client = match HttpClient::with_settings(&settings.outgoing) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!(error = %e, "could not initialize search client; all searches will return no results");
                None
            }
        };

        Self {
            provider: Arc::new(DuckDuckGo::new()),
            client,
            limiter: Arc::new(RateLimiter::from_secs_f64(settings.search.rate_limit_delay)),
            max_results: settings.search.max_results,
        }
    }

    /// Replace the upstream provider
    pub fn with_provider(mut self, provider: Arc<dyn SearchProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Share a rate limiter with other executors coordinating on the same
    /// upstream
    pub fn with_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = limiter;
        self
    }

    /// The rate limiter coordinating this executor's provider calls
    pub fn limiter(&self) -> Arc<RateLimiter> {
        Arc::clone(&self.limiter)
    }

    /// Maximum number of results per search
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Perform one search invocation.
    ///
    /// Returns at most `max_results` records in upstream relevance order, or
    /// an empty vector on any failure. Query semantics are not validated;
    /// empty or garbage queries pass through to the provider.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let Some(ref client) = self.client else {
            debug!(query, "search skipped: provider unavailable");
            return Vec::new();
        };

        self.limiter.await_turn().await;

        match self.try_search(client, query).await {
            Ok(mut results) => {
                results.truncate(self.max_results);
                debug!(query, count = results.len(), "search completed");
                results
            }
            Err(e) => {
                warn!(
                    query,
                    provider = self.provider.name(),
                    error = %e,
                    "search failed, returning no results"
                );
                Vec::new()
            }
        }
    }

    async fn try_search(
        &self,
        client: &HttpClient,
        query: &str,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let request = self.provider.request(query)?;
        let response = client.execute(request).await?;
        self.provider.parse(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderRequest, ProviderResponse};

    /// Provider yielding a fixed number of canned results
    struct CannedProvider {
        count: usize,
        url: String,
    }

    impl SearchProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        fn request(&self, query: &str) -> Result<ProviderRequest, SearchError> {
            Ok(ProviderRequest::get(&self.url).param("q", query))
        }

        fn parse(&self, _response: ProviderResponse) -> Result<Vec<SearchResult>, SearchError> {
            Ok((0..self.count)
                .map(|i| {
                    SearchResult::new(
                        format!("Result {}", i + 1),
                        format!("https://example.com/{}", i + 1),
                        "snippet",
                    )
                })
                .collect())
        }
    }

    /// Provider that fails on every invocation
    struct BrokenProvider;

    impl SearchProvider for BrokenProvider {
        fn name(&self) -> &str {
            "broken"
        }

        fn request(&self, _query: &str) -> Result<ProviderRequest, SearchError> {
            Err(SearchError::Http("provider exploded".into()))
        }

        fn parse(&self, _response: ProviderResponse) -> Result<Vec<SearchResult>, SearchError> {
            unreachable!("request never succeeds")
        }
    }

    fn test_settings() -> Settings {
        let mut settings = Settings::default();
        settings.search.rate_limit_delay = 0.0;
        settings
    }

    async fn mock_server() -> wiremock::MockServer {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn search_truncates_to_max_results() {
        let server = mock_server().await;
        let mut settings = test_settings();
        settings.search.max_results = 3;

        let executor = SearchExecutor::new(&settings).with_provider(Arc::new(CannedProvider {
            count: 10,
            url: server.uri(),
        }));

        let results = executor.search("anything").await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title.as_deref(), Some("Result 1"));
    }

    #[tokio::test]
    async fn search_keeps_short_result_sets_unpadded() {
        let server = mock_server().await;
        let settings = test_settings();

        let executor = SearchExecutor::new(&settings).with_provider(Arc::new(CannedProvider {
            count: 2,
            url: server.uri(),
        }));

        let results = executor.search("anything").await;
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn failing_provider_yields_empty_results_every_time() {
        let settings = test_settings();
        let executor = SearchExecutor::new(&settings).with_provider(Arc::new(BrokenProvider));

        for _ in 0..3 {
            assert!(executor.search("any query").await.is_empty());
        }
    }

    #[tokio::test]
    async fn http_failure_yields_empty_results() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let settings = test_settings();
        let executor = SearchExecutor::new(&settings).with_provider(Arc::new(
            crate::provider::DuckDuckGo::with_endpoint(format!("{}/html/", server.uri())),
        ));

        // DuckDuckGo provider treats non-2xx as an error; executor absorbs it
        assert!(executor.search("query").await.is_empty());
    }

    #[tokio::test]
    async fn executors_sharing_a_limiter_are_spaced_apart() {
        let mut settings = test_settings();
        settings.search.rate_limit_delay = 0.2;

        let first = SearchExecutor::new(&settings).with_provider(Arc::new(BrokenProvider));
        let second = SearchExecutor::new(&Settings::default())
            .with_provider(Arc::new(BrokenProvider))
            .with_limiter(first.limiter());

        let start = std::time::Instant::now();
        first.search("one").await;
        second.search("two").await;

        // The second call waits out the shared minimum interval
        assert!(start.elapsed() >= std::time::Duration::from_millis(200));
    }

    #[tokio::test]
    async fn empty_query_passes_through_unvalidated() {
        let server = mock_server().await;
        let settings = test_settings();

        let executor = SearchExecutor::new(&settings).with_provider(Arc::new(CannedProvider {
            count: 1,
            url: server.uri(),
        }));

        assert_eq!(executor.search("").await.len(), 1);
    }
}
