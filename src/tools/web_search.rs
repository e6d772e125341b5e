//! Web search capability

use super::traits::Tool;
use crate::format::format_results;
use crate::search::SearchExecutor;
use async_trait::async_trait;
use std::sync::Arc;

/// Stable name the web search capability is registered under
pub const WEB_SEARCH_TOOL_NAME: &str = "web_search";

/// The externally exposed search capability: executor output piped through
/// the formatter. Total function over query strings; never fails.
pub struct WebSearchTool {
    executor: Arc<SearchExecutor>,
}

impl WebSearchTool {
    pub fn new(executor: Arc<SearchExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        WEB_SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        "Perform a general web search. Use this tool to find information on the internet. \
         Takes a search query and returns a numbered list of results with titles, URLs \
         and snippets."
    }

    async fn invoke(&self, input: &str) -> String {
        let results = self.executor.search(input).await;
        format_results(input, &results)
    }
}
