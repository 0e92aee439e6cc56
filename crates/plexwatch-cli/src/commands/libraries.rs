//! Library section summary command

use plexwatch_core::{LibraryReport, PlexClient, PlexResult, ServerConfig};
use tracing::info;

/// Connect and print the library sections with their item counts.
pub async fn run(base_url: String, token: String) -> PlexResult<()> {
    info!("Connecting to Plex server at {base_url}");
    let client = PlexClient::connect(ServerConfig::new(base_url, token)).await?;

    let libraries = client.library_sections().await?;
    info!("Found {} library sections", libraries.len());

    let report = LibraryReport { libraries };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
