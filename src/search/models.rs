//! Search result data model

use serde::{Deserialize, Serialize};

/// A single retrieved search result.
///
/// All three fields are optional because upstream records routinely omit
/// them; the formatter substitutes placeholder text so downstream consumers
/// always see a stable shape. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title
    pub title: Option<String>,
    /// Result URL
    pub url: Option<String>,
    /// Content snippet/description
    pub snippet: Option<String>,
}

impl SearchResult {
    /// Create a result with all three fields present
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            snippet: Some(snippet.into()),
        }
    }
}
