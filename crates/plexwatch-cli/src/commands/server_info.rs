//! Server identity command

use plexwatch_core::{PlexClient, PlexResult, ServerConfig};
use tracing::info;

/// Connect and print the server's identity attributes.
pub async fn run(base_url: String, token: String) -> PlexResult<()> {
    info!("Connecting to Plex server at {base_url}");
    let client = PlexClient::connect(ServerConfig::new(base_url, token)).await?;

    let identity = client.identity();
    if let Some(version) = identity.version.as_deref() {
        info!("Server reports version {version}");
    }

    println!("{}", serde_json::to_string(identity)?);
    Ok(())
}
