//! Session report collection

use crate::client::MediaServer;
use crate::error::PlexResult;
use crate::report::{SessionDetail, SessionReport};
use tracing::info;

/// Fetch the active sessions and project them into a report.
///
/// Emits one trace line with the session count and one per projected
/// detail. Never writes to standard output; the caller decides how the
/// report is emitted.
pub async fn collect_report(server: &impl MediaServer) -> PlexResult<SessionReport> {
    let sessions = server.list_sessions().await?;
    info!("Found {} active sessions", sessions.len());

    let mut details = Vec::with_capacity(sessions.len());
    for session in &sessions {
        let detail = SessionDetail::from_session(session);
        info!("Session detail: {}", serde_json::to_string(&detail)?);
        details.push(detail);
    }

    Ok(SessionReport::new(details))
}
