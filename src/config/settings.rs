//! Settings structures for Seekbot configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub dispatch: DispatchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SEEKBOT_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEEKBOT_RATE_LIMIT_DELAY") {
            if let Ok(delay) = val.parse() {
                self.search.rate_limit_delay = delay;
            }
        }
        if let Ok(val) = std::env::var("SEEKBOT_MAX_RESULTS") {
            if let Ok(max) = val.parse() {
                self.search.max_results = max;
            }
        }
        if let Ok(val) = std::env::var("SEEKBOT_MAX_RETRIES") {
            if let Ok(retries) = val.parse() {
                self.dispatch.max_retries = retries;
            }
        }
        if let Ok(val) = std::env::var("SEEKBOT_RETRY_DELAY") {
            if let Ok(delay) = val.parse() {
                self.dispatch.retry_delay = delay;
            }
        }
        if let Ok(val) = std::env::var("SEEKBOT_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
    }
}

/// Search invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Minimum delay between consecutive provider calls (seconds)
    pub rate_limit_delay: f64,
    /// Maximum number of results returned per search
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            rate_limit_delay: crate::DEFAULT_RATE_LIMIT_DELAY,
            max_results: crate::DEFAULT_MAX_RESULTS,
        }
    }
}

/// Dispatch loop retry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Total attempts per inbound request
    pub max_retries: u32,
    /// Fixed wait between attempts (seconds); no backoff growth
    pub retry_delay: f64,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            max_retries: crate::DEFAULT_MAX_RETRIES,
            retry_delay: crate::DEFAULT_RETRY_DELAY,
        }
    }
}

/// Outgoing HTTP request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Maximum idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Custom User-Agent; rotates through realistic browser strings if unset
    pub user_agent: Option<String>,
    /// Proxy configuration
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 10,
            verify_ssl: true,
            user_agent: None,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings for outgoing requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    /// Proxy for all traffic
    pub all: Option<String>,
    /// HTTP-only proxy
    pub http: Option<String>,
    /// HTTPS-only proxy
    pub https: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_documented_policy() {
        let settings = Settings::default();
        assert_eq!(settings.search.rate_limit_delay, 1.0);
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.dispatch.max_retries, 3);
        assert_eq!(settings.dispatch.retry_delay, 2.0);
        assert!(settings.outgoing.verify_ssl);
    }

    #[test]
    fn settings_parse_from_yaml() {
        let yaml = r#"
search:
  rate_limit_delay: 0.5
  max_results: 3
dispatch:
  max_retries: 5
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.search.rate_limit_delay, 0.5);
        assert_eq!(settings.search.max_results, 3);
        assert_eq!(settings.dispatch.max_retries, 5);
        // Unspecified sections fall back to defaults
        assert_eq!(settings.dispatch.retry_delay, 2.0);
        assert_eq!(settings.outgoing.request_timeout, 10.0);
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings.search.max_results, 5);
    }
}
