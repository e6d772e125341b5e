//! Error types for search invocation.
//!
//! Everything below the web-search capability boundary reports failures
//! through [`SearchError`]; the executor absorbs them and degrades to an
//! empty result set, so these errors never cross into calling code.

use thiserror::Error;

/// Errors that can occur while invoking the upstream search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The HTTP client could not be constructed; the executor stays
    /// permanently degraded for its lifetime.
    #[error("search provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// An HTTP request to the search provider failed or returned a
    /// non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider response could not be parsed into results.
    #[error("parse error: {0}")]
    Parse(String),
}
