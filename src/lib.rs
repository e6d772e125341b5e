//! Seekbot: a retrieval-grounded web search assistant written in Rust
//!
//! The crate implements the search-invocation subsystem of a conversational
//! agent that answers from live web evidence rather than memorized
//! knowledge: a rate-limited, failure-isolating search executor, a
//! citation-bearing result formatter, a capability registry for the
//! reasoning collaborator, and a retry-resilient dispatch loop that
//! delivers answers back to requesters.

pub mod agent;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod network;
pub mod provider;
pub mod ratelimit;
pub mod search;
pub mod tools;

pub use config::Settings;
pub use dispatch::{DispatchLoop, InboundMessage, Messenger};
pub use error::SearchError;
pub use format::format_results;
pub use ratelimit::RateLimiter;
pub use search::{SearchExecutor, SearchResult};
pub use tools::{Tool, ToolRegistry, WebSearchTool};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum delay between provider calls in seconds
pub const DEFAULT_RATE_LIMIT_DELAY: f64 = 1.0;

/// Default maximum number of results per search
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default total attempts per inbound request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default fixed wait between dispatch attempts in seconds
pub const DEFAULT_RETRY_DELAY: f64 = 2.0;
