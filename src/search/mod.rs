//! Search invocation module
//!
//! Executes one bounded, failure-isolated search against the upstream
//! provider and exposes the result record shape.

mod executor;
mod models;

pub use executor::SearchExecutor;
pub use models::SearchResult;
