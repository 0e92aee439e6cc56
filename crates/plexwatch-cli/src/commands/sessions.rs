//! Session report command

use plexwatch_core::{collect_report, PlexClient, PlexResult, ServerConfig};
use tracing::info;

/// Connect, collect the session report, and print it as one JSON line.
pub async fn run(base_url: String, token: String) -> PlexResult<()> {
    info!("Connecting to Plex server at {base_url}");
    let client = PlexClient::connect(ServerConfig::new(base_url, token)).await?;

    let report = collect_report(&client).await?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
