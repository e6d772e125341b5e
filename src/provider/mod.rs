//! Search provider module
//!
//! Defines the SearchProvider trait and the shipped DuckDuckGo
//! implementation.

mod traits;

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGo;
pub use traits::*;
