//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got `{value}`")]
    Invalid { var: &'static str, expected: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    pub proxy_timeout: Duration,
}

impl PortalConfig {
    /// Build the host config from the process environment, after loading
    /// `.env` when one is present.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PGR_API_URL`: default `http://127.0.0.1:8000`
    /// - `PGR_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the host config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match value("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", expected: "a port number", value: raw })?,
            None => DEFAULT_PORT,
        };

        let api_url = match value("PGR_API_URL") {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                raw.trim_end_matches('/').to_owned()
            }
            Some(raw) => {
                return Err(ConfigError::Invalid { var: "PGR_API_URL", expected: "an http(s) URL", value: raw });
            }
            None => DEFAULT_API_URL.to_owned(),
        };

        let timeout_secs = match value("PGR_PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "PGR_PROXY_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value: raw,
                    });
                }
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        Ok(Self { port, api_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}
