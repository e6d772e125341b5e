//! Capability registry module
//!
//! Defines the Tool trait, the registry handed to the reasoning
//! collaborator at composition time, and the web search capability.

mod registry;
mod traits;
mod web_search;

pub use registry::ToolRegistry;
pub use traits::Tool;
pub use web_search::{WebSearchTool, WEB_SEARCH_TOOL_NAME};
