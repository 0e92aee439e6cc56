//! Serde mappings of the Plex `MediaContainer` JSON surface.
//!
//! Only the fields this crate reads are modeled; everything else in the
//! documents is ignored. These types never leave the client module.

use crate::model::{Player, ServerIdentity, Session};
use serde::Deserialize;

/// Envelope wrapping every Plex API response document.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(rename = "MediaContainer")]
    pub media_container: T,
}

/// `/status/sessions` container. `Metadata` is absent entirely when no
/// sessions are active.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SessionsContainer {
    #[serde(rename = "Metadata", default)]
    pub metadata: Vec<SessionMetadata>,
}

/// One session entry as the server reports it.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionMetadata {
    #[serde(rename = "type", default)]
    pub media_type: String,
    pub title: Option<String>,
    #[serde(rename = "User")]
    pub user: Option<UserTag>,
    #[serde(rename = "Player")]
    pub player: Option<PlayerTag>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserTag {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerTag {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: String,
}

impl SessionMetadata {
    /// Convert to the domain session. The wire surface carries at most
    /// one user and one player per session; both become sequences.
    pub fn into_session(self) -> Session {
        let usernames = self.user.and_then(|u| u.title).into_iter().collect();
        let players = self
            .player
            .map(|p| Player {
                title: p.title,
                state: p.state,
            })
            .into_iter()
            .collect();
        Session {
            media_type: self.media_type,
            title: self.title,
            usernames,
            players,
        }
    }
}

/// Server root container attributes captured at connect time.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServerRootContainer {
    pub friendly_name: Option<String>,
    pub version: Option<String>,
    pub machine_identifier: Option<String>,
    pub platform: Option<String>,
}

impl From<ServerRootContainer> for ServerIdentity {
    fn from(root: ServerRootContainer) -> Self {
        Self {
            friendly_name: root.friendly_name,
            version: root.version,
            machine_identifier: root.machine_identifier,
            platform: root.platform,
        }
    }
}

/// `/library/sections` container.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SectionsContainer {
    #[serde(rename = "Directory", default)]
    pub directories: Vec<SectionDirectory>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionDirectory {
    pub key: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Paged listing probe; only the total is read.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PagedContainer {
    #[serde(rename = "totalSize", default)]
    pub total_size: u64,
}
