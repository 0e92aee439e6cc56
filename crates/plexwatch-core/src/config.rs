//! Server connection configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one Plex server.
///
/// Arguments are accepted as given; presence is the only validation and
/// anything else fails at the connection attempt.
#[derive(Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server address, e.g. `http://localhost:32400`
    pub base_url: String,
    /// Access token sent as `X-Plex-Token` on every request
    pub token: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Display-safe version of the access token
    pub fn masked_token(&self) -> String {
        mask_token(&self.token)
    }
}

// Manual Debug keeps the token out of logs and panic messages.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.masked_token())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn mask_token(token: &str) -> String {
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = token.chars().take(4).collect();
        format!("{prefix}****")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ServerConfig::new("http://localhost:32400/", "tok");
        assert_eq!(config.base_url, "http://localhost:32400");
    }

    #[test]
    fn timeout_defaults_and_overrides() {
        let config = ServerConfig::new("http://h", "tok");
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let config = config.with_timeout_secs(5);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn debug_output_masks_the_token() {
        let config = ServerConfig::new("http://h", "supersecrettoken");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("supersecrettoken"));
        assert!(rendered.contains("supe****"));
    }

    #[test]
    fn short_tokens_are_fully_masked() {
        assert_eq!(mask_token("abc"), "****");
    }
}
