/// Runtime configuration
///
/// Everything is read from the environment once at startup:
/// - `LOOKALIKE_API_URL` - base URL of the search API
/// - `LOOKALIKE_REQUEST_TIMEOUT_SECS` - request timeout, `0` disables it

use std::time::Duration;

/// Base URL used when `LOOKALIKE_API_URL` is unset or empty
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Request timeout used when `LOOKALIKE_REQUEST_TIMEOUT_SECS` is unset
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_URL_VAR: &str = "LOOKALIKE_API_URL";
const TIMEOUT_VAR: &str = "LOOKALIKE_REQUEST_TIMEOUT_SECS";

/// Path of the search endpoint relative to the base URL
const SEARCH_PATH: &str = "/api/v1/search";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the similarity-search API (e.g. "http://localhost:8000")
    pub api_base_url: String,
    /// Upper bound for every HTTP request (None = wait forever)
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl Config {
    /// Load the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            let url = url.trim();
            if !url.is_empty() {
                config.api_base_url = url.to_string();
            }
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.request_timeout = None,
                Ok(secs) => config.request_timeout = Some(Duration::from_secs(secs)),
                Err(_) => log::warn!(
                    "⚠️  Ignoring {}={:?}, using {}s",
                    TIMEOUT_VAR,
                    raw,
                    DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        config
    }

    /// Full URL of the search endpoint
    pub fn search_endpoint(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), SEARCH_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.search_endpoint(), "http://localhost:8000/api/v1/search");
    }

    #[test]
    fn test_empty_url_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[(API_URL_VAR, "  ")]));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_url_override_and_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[(API_URL_VAR, "https://lens.example.com/")]));
        assert_eq!(config.search_endpoint(), "https://lens.example.com/api/v1/search");
    }

    #[test]
    fn test_timeout_parsing() {
        let config = Config::from_lookup(lookup_from(&[(TIMEOUT_VAR, "5")]));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));

        let config = Config::from_lookup(lookup_from(&[(TIMEOUT_VAR, "0")]));
        assert_eq!(config.request_timeout, None);

        let config = Config::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
    }
}
