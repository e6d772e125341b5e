//! Reasoning collaborator seam
//!
//! The language-model loop that decides when to call tools and how to phrase
//! answers lives outside this crate. It is consumed through [`Responder`]:
//! one opaque, possibly-failing operation per inbound request, with no
//! intermediate checkpoints visible to the dispatch loop. Implementations
//! are composed with a [`crate::tools::ToolRegistry`] at construction time
//! and may call registered capabilities any number of times per response.

use async_trait::async_trait;

/// Behavioural contract handed to collaborator implementations. The
/// subsystem itself never interprets this text; it only carries it so
/// composition has one authoritative copy.
pub const SYSTEM_INSTRUCTIONS: &str = "\
You are a web search assistant. Your purpose is to answer user queries based \
*only* on the information you find on the web.

CRITICAL INSTRUCTIONS:
1. DO NOT USE YOUR OWN KNOWLEDGE. You must not answer from memory or your \
pre-trained knowledge.
2. ALWAYS USE THE `web_search` TOOL. For any user query, you must first use \
the `web_search` tool to find relevant information.
3. GATHER SUFFICIENT INFORMATION. Before providing an answer, gather \
information from at least 5 sources. Use the search tool multiple times if \
necessary.
4. BASE YOUR ANSWER ON THE SEARCH RESULTS. Your final answer must be \
directly based on the information provided by the search tool.
5. CITE YOUR SOURCES. Include the URL from the search result in your answer.
6. DO NOT MAKE UP INFORMATION. If the search tool does not provide an \
answer, state that you could not find the information.";

/// The reasoning collaborator: takes a request text, produces a final
/// answer.
///
/// Failures are opaque to the caller; the dispatch loop retries the whole
/// invocation a bounded number of times.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce the final answer for one inbound request
    async fn respond(&self, input: &str) -> anyhow::Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::WEB_SEARCH_TOOL_NAME;

    #[test]
    fn instructions_reference_the_registered_tool_name() {
        // Composition hands the collaborator these instructions plus the
        // registry; the names must stay in sync.
        assert!(SYSTEM_INSTRUCTIONS.contains(WEB_SEARCH_TOOL_NAME));
    }

    struct CannedResponder(String);

    #[async_trait]
    impl Responder for CannedResponder {
        async fn respond(&self, _input: &str) -> anyhow::Result<String> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn responder_is_object_safe() {
        let responder: Box<dyn Responder> = Box::new(CannedResponder("42".into()));
        assert_eq!(responder.respond("q").await.unwrap(), "42");
    }
}
