//! Domain model for sessions, players, and library sections

use serde::{Deserialize, Serialize};

/// One active playback instance on the media server.
///
/// `usernames` and `players` are sequences even though the server
/// reports at most one of each per session today; the report projection
/// only ever reads the first element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Media kind, e.g. `movie`, `episode`, `track`
    pub media_type: String,
    /// Title of the item being played, when the server reports one
    pub title: Option<String>,
    /// Accounts attached to the session
    pub usernames: Vec<String>,
    /// Devices rendering the session
    pub players: Vec<Player>,
}

/// The client device/application rendering a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub title: String,
    pub state: String,
}

/// Identity attributes reported by the server root endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerIdentity {
    pub friendly_name: Option<String>,
    pub version: Option<String>,
    pub machine_identifier: Option<String>,
    pub platform: Option<String>,
}

/// One library section with its total item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySection {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u64,
}
