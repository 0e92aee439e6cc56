//! Output documents and the session display projection

use crate::model::{LibrarySection, Session};
use serde::{Deserialize, Serialize};

/// Flat display record derived from one [`Session`].
///
/// Fields the server did not report degrade to the literal fallbacks
/// `"Unknown"` (titles, user, player) and `"unknown"` (playback state);
/// projection itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDetail {
    #[serde(rename = "type")]
    pub media_type: String,
    pub title: String,
    pub user: String,
    pub player: String,
    pub state: String,
}

impl SessionDetail {
    /// Project a session into its display record.
    pub fn from_session(session: &Session) -> Self {
        let (player, state) = match session.players.first() {
            Some(player) => (player.title.clone(), player.state.clone()),
            None => ("Unknown".to_string(), "unknown".to_string()),
        };
        Self {
            media_type: session.media_type.clone(),
            title: session
                .title
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            user: session
                .usernames
                .first()
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string()),
            player,
            state,
        }
    }
}

impl From<&Session> for SessionDetail {
    fn from(session: &Session) -> Self {
        Self::from_session(session)
    }
}

/// Success document printed on standard output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub active_streams: usize,
    pub session_details: Vec<SessionDetail>,
}

impl SessionReport {
    /// Build a report from projected details; the stream count is always
    /// the length of the detail list.
    pub fn new(session_details: Vec<SessionDetail>) -> Self {
        Self {
            active_streams: session_details.len(),
            session_details,
        }
    }
}

/// Failure document printed on standard output, mutually exclusive with
/// [`SessionReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Library summary document printed by the `libraries` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryReport {
    pub libraries: Vec<LibrarySection>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Player;

    fn movie_session() -> Session {
        Session {
            media_type: "movie".to_string(),
            title: Some("Inception".to_string()),
            usernames: vec!["alice".to_string()],
            players: vec![Player {
                title: "Living Room TV".to_string(),
                state: "playing".to_string(),
            }],
        }
    }

    fn bare_session() -> Session {
        Session {
            media_type: "movie".to_string(),
            title: None,
            usernames: vec![],
            players: vec![],
        }
    }

    #[test]
    fn empty_session_list_reports_zero_streams() {
        let report = SessionReport::new(vec![]);
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"activeStreams":0,"sessionDetails":[]}"#
        );
    }

    #[test]
    fn populated_session_projects_field_for_field() {
        let report = SessionReport::new(vec![SessionDetail::from_session(&movie_session())]);
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"activeStreams":1,"sessionDetails":[{"type":"movie","title":"Inception","user":"alice","player":"Living Room TV","state":"playing"}]}"#
        );
    }

    #[test]
    fn missing_fields_degrade_to_fallbacks() {
        let detail = SessionDetail::from_session(&bare_session());
        assert_eq!(detail.title, "Unknown");
        assert_eq!(detail.user, "Unknown");
        assert_eq!(detail.player, "Unknown");
        assert_eq!(detail.state, "unknown");
    }

    #[test]
    fn fallbacks_apply_only_when_sequences_are_empty() {
        let detail = SessionDetail::from_session(&movie_session());
        assert_eq!(detail.user, "alice");
        assert_eq!(detail.player, "Living Room TV");
        assert_eq!(detail.state, "playing");

        let mut session = movie_session();
        session.usernames.clear();
        let detail = SessionDetail::from_session(&session);
        assert_eq!(detail.user, "Unknown");
        assert_eq!(detail.player, "Living Room TV");
    }

    #[test]
    fn stream_count_always_matches_detail_count() {
        for n in 0..4 {
            let details: Vec<SessionDetail> = (0..n)
                .map(|_| SessionDetail::from_session(&movie_session()))
                .collect();
            let report = SessionReport::new(details);
            assert_eq!(report.active_streams, report.session_details.len());
            assert_eq!(report.active_streams, n);
        }
    }

    #[test]
    fn success_and_error_documents_never_share_keys() {
        let success = serde_json::to_value(SessionReport::new(vec![])).unwrap();
        let failure = serde_json::to_value(ErrorReport::new("boom")).unwrap();

        assert!(success.get("activeStreams").is_some());
        assert!(success.get("error").is_none());
        assert!(failure.get("error").is_some());
        assert!(failure.get("activeStreams").is_none());
    }
}
