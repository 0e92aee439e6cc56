//! Error types for plexwatch operations

use thiserror::Error;

/// Result type alias for plexwatch operations
pub type PlexResult<T> = Result<T, PlexError>;

/// Main error type for plexwatch
///
/// Every fallible operation in this crate returns [`PlexResult`]. The
/// binary renders any variant uniformly through its `Display` string, so
/// the variants exist for construction-site clarity rather than for
/// caller dispatch.
#[derive(Error, Debug, Clone)]
pub enum PlexError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The server could not be reached or the request never completed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The server answered with a non-success status
    #[error("Plex API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The server's response could not be decoded
    #[error("Response decode error: {message}")]
    Decode { message: String },

    /// Serialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl PlexError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a new API status error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new response decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for PlexError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
