//! Core library for the plexwatch session reporter.
//!
//! This crate provides the server configuration, the Plex HTTP API
//! client, the session domain model, and the report projection consumed
//! by the `plexwatch` binary.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod reporter;

// Re-export commonly used types
pub use client::{MediaServer, PlexClient};
pub use config::ServerConfig;
pub use error::{PlexError, PlexResult};
pub use model::{LibrarySection, Player, ServerIdentity, Session};
pub use report::{ErrorReport, LibraryReport, SessionDetail, SessionReport};
pub use reporter::collect_report;
