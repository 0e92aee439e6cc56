//! Plex HTTP API client

mod wire;

use crate::config::ServerConfig;
use crate::error::{PlexError, PlexResult};
use crate::model::{LibrarySection, ServerIdentity, Session};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Capability consumed by the reporting path: enumerate the server's
/// active playback sessions.
#[async_trait]
pub trait MediaServer {
    /// Current sessions, in whatever order the server returns them.
    async fn list_sessions(&self) -> PlexResult<Vec<Session>>;
}

/// Typed client bound to one Plex server.
///
/// Every request carries the access token and asks for JSON. The server
/// identity is captured once at connect time.
#[derive(Debug)]
pub struct PlexClient {
    http: Client,
    config: ServerConfig,
    identity: ServerIdentity,
}

impl PlexClient {
    /// Connect to the server, validating the address and token by
    /// fetching the server root.
    ///
    /// An unreachable address and a rejected token both surface here,
    /// as a connection or API status error respectively.
    pub async fn connect(config: ServerConfig) -> PlexResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("X-Plex-Product", HeaderValue::from_static("plexwatch"));
        headers.insert(
            "X-Plex-Version",
            HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
        );
        let mut token = HeaderValue::from_str(&config.token).map_err(|_| {
            PlexError::config("access token contains characters not allowed in a header")
        })?;
        token.set_sensitive(true);
        headers.insert("X-Plex-Token", token);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| PlexError::connection(format!("failed to build HTTP client: {e}")))?;

        let root: wire::ServerRootContainer =
            fetch(&http, &format!("{}/", config.base_url)).await?;

        Ok(Self {
            http,
            config,
            identity: root.into(),
        })
    }

    /// Identity attributes captured at connect time.
    pub fn identity(&self) -> &ServerIdentity {
        &self.identity
    }

    /// Address this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Active playback sessions, in server order.
    pub async fn sessions(&self) -> PlexResult<Vec<Session>> {
        let container: wire::SessionsContainer =
            fetch(&self.http, &self.url("/status/sessions")).await?;
        Ok(container
            .metadata
            .into_iter()
            .map(wire::SessionMetadata::into_session)
            .collect())
    }

    /// Library sections with their total item counts.
    ///
    /// Counts come from a zero-sized page probe per section, so no item
    /// metadata is transferred.
    pub async fn library_sections(&self) -> PlexResult<Vec<LibrarySection>> {
        let container: wire::SectionsContainer =
            fetch(&self.http, &self.url("/library/sections")).await?;

        let mut sections = Vec::with_capacity(container.directories.len());
        for directory in container.directories {
            let probe = self.url(&format!(
                "/library/sections/{}/all?X-Plex-Container-Start=0&X-Plex-Container-Size=0",
                directory.key
            ));
            let paged: wire::PagedContainer = fetch(&self.http, &probe).await?;
            sections.push(LibrarySection {
                title: directory.title,
                kind: directory.kind,
                count: paged.total_size,
            });
        }
        Ok(sections)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

#[async_trait]
impl MediaServer for PlexClient {
    async fn list_sessions(&self) -> PlexResult<Vec<Session>> {
        self.sessions().await
    }
}

/// Issue one GET request and decode the `MediaContainer` envelope.
async fn fetch<T: DeserializeOwned>(http: &Client, url: &str) -> PlexResult<T> {
    tracing::debug!("GET {url}");

    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| PlexError::connection(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(PlexError::api(status.as_u16(), body));
    }

    let envelope: wire::Envelope<T> = response
        .json()
        .await
        .map_err(|e| PlexError::decode(format!("failed to decode response from {url}: {e}")))?;
    Ok(envelope.media_container)
}
