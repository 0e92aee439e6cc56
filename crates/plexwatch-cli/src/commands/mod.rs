//! Command implementations
//!
//! Each command connects, queries, and prints exactly one JSON line on
//! standard output. Progress goes to standard error via `tracing`.

pub mod libraries;
pub mod server_info;
pub mod sessions;
