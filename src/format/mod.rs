//! Citation-bearing result formatting
//!
//! Converts raw result records into the text block handed to the reasoning
//! collaborator. Pure functions, no side effects.

use crate::search::SearchResult;

/// Maximum snippet length in characters before the ellipsis marker
pub const SNIPPET_MAX_LEN: usize = 250;

const NO_TITLE: &str = "No title";
const NO_LINK: &str = "No link";
const NO_DESCRIPTION: &str = "No description";

/// Format a result set into a numbered, newline-delimited text block.
///
/// An empty result set yields the fixed "no results" message; this is the
/// only caller-visible signal, and it deliberately does not distinguish
/// "nothing found" from "provider failed". Missing fields render as explicit
/// placeholder text rather than being omitted, so consumers always see a
/// stable shape.
pub fn format_results(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("No results found for: {}", query);
    }

    let formatted: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "{}. {}\n   URL: {}\n   Snippet: {}...\n",
                i + 1,
                result.title.as_deref().unwrap_or(NO_TITLE),
                result.url.as_deref().unwrap_or(NO_LINK),
                truncate_chars(
                    result.snippet.as_deref().unwrap_or(NO_DESCRIPTION),
                    SNIPPET_MAX_LEN
                ),
            )
        })
        .collect();

    format!(
        "Web search results for '{}':\n\n{}",
        query,
        formatted.join("\n")
    )
}

/// Truncate to at most `max` characters, respecting char boundaries
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
