use std::time::Duration;

use thiserror::Error;

/// Default upstream base URL.
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8080";

/// Default timeout for forwarded tool calls (30 seconds).
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub upstream_url: String,
    pub request_timeout: Duration,
    pub debug: bool,
}

/// A configuration value that could not be used as given.
///
/// None of these stop startup: the server logs them and carries on with the
/// default or the raw value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigWarning {
    #[error("MCP_SERVER_URL '{0}' is not an absolute http(s) URL; upstream calls will fail")]
    InvalidBaseUrl(String),
    #[error("HTTP_TIMEOUT '{0}' is not a positive number of milliseconds; using the 30000 ms default")]
    InvalidTimeout(String),
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `MCP_SERVER_URL` (optional, default `http://localhost:8080`): upstream base URL
    /// - `HTTP_TIMEOUT` (optional, default 30000): max milliseconds per upstream call
    /// - `DEBUG` / `MCP_DEBUG` (optional): exactly `true` enables verbose logging
    pub fn from_env() -> (Self, Vec<ConfigWarning>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unusable values are reported alongside the config rather than rejected.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigWarning>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        let upstream_url = lookup("MCP_SERVER_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        if !is_http_url(&upstream_url) {
            warnings.push(ConfigWarning::InvalidBaseUrl(upstream_url.clone()));
        }

        let timeout_ms = match lookup("HTTP_TIMEOUT") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warnings.push(ConfigWarning::InvalidTimeout(raw));
                    DEFAULT_REQUEST_TIMEOUT_MS
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        let debug = ["DEBUG", "MCP_DEBUG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .any(|value| value == "true");

        let config = Self {
            upstream_url: upstream_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(timeout_ms),
            debug,
        };
        (config, warnings)
    }

    /// Configuration pointing at `upstream_url` with default timeout and logging.
    pub fn with_upstream_url(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            debug: false,
        }
    }
}

fn is_http_url(raw: &str) -> bool {
    matches!(
        reqwest::Url::parse(raw),
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host()
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn parse_defaults() {
        let (config, warnings) = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.upstream_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
        assert!(!config.debug);
        assert!(warnings.is_empty());
    }

    #[test]
    fn parse_overrides() {
        let (config, warnings) = ServerConfig::from_lookup(lookup_from(&[
            ("MCP_SERVER_URL", "https://forms.example.com:9000/"),
            ("HTTP_TIMEOUT", "1500"),
            ("MCP_DEBUG", "true"),
        ]));

        assert_eq!(config.upstream_url, "https://forms.example.com:9000");
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert!(config.debug);
        assert!(warnings.is_empty());
    }

    #[test]
    fn debug_flag_requires_exact_true() {
        let (config, _) = ServerConfig::from_lookup(lookup_from(&[("DEBUG", "true")]));
        assert!(config.debug);

        for value in ["1", "TRUE", "True", " true"] {
            let (config, _) = ServerConfig::from_lookup(lookup_from(&[("MCP_DEBUG", value)]));
            assert!(!config.debug, "{value:?}");
        }
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        for raw in ["soon", "0", "-5", ""] {
            let (config, warnings) =
                ServerConfig::from_lookup(lookup_from(&[("HTTP_TIMEOUT", raw)]));
            assert_eq!(config.request_timeout, Duration::from_millis(30_000), "{raw:?}");
            assert_eq!(warnings, vec![ConfigWarning::InvalidTimeout(raw.into())]);
        }
    }

    #[test]
    fn invalid_base_url_is_kept_with_warning() {
        for bad in ["localhost:8080", "ftp://files.example.com", "not a url"] {
            let (config, warnings) =
                ServerConfig::from_lookup(lookup_from(&[("MCP_SERVER_URL", bad)]));
            assert_eq!(config.upstream_url, bad);
            assert_eq!(warnings, vec![ConfigWarning::InvalidBaseUrl(bad.into())]);
        }
    }

    #[test]
    fn blank_base_url_uses_default() {
        let (config, warnings) =
            ServerConfig::from_lookup(lookup_from(&[("MCP_SERVER_URL", "  ")]));
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert!(warnings.is_empty());
    }
}
