//! Configuration module for Seekbot
//!
//! Handles loading and validating settings from YAML files and environment
//! variables. Settings are owned by whoever composes the pipeline and are
//! passed down explicitly; there is no process-global settings instance.

mod settings;

pub use settings::*;
