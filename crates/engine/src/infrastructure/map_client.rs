//! Map service client
//!
//! Implements the MapPort trait with outbound REST requests to the Game On map
//! service. The endpoint is resolved once when the client is built; the client
//! is immutable afterwards and can be shared freely.

use async_trait::async_trait;
use gameon_room_domain::MapData;
use reqwest::{header, Client, Url};

use crate::config::AppConfig;
use crate::infrastructure::ports::{MapError, MapFetch, MapPort};

/// Default map service sites endpoint.
pub const DEFAULT_MAP_URL: &str = "https://game-on.org/map/v1/sites";

/// Marker left in the configured value when `MAP_URL` was never substituted.
pub const MAP_URL_PLACEHOLDER: &str = "MAP_URL";

/// Pick the map location to use.
///
/// Falls back to [`DEFAULT_MAP_URL`] when nothing usable was configured:
/// unset, blank, or still carrying the unresolved placeholder.
pub fn resolve_map_location(configured: Option<&str>) -> String {
    match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(location) if !location.contains(MAP_URL_PLACEHOLDER) => location.to_string(),
        _ => {
            tracing::debug!(
                fallback = DEFAULT_MAP_URL,
                "No MAP_URL environment variable provided, using default"
            );
            DEFAULT_MAP_URL.to_string()
        }
    }
}

#[derive(Clone)]
struct MapTarget {
    client: Client,
    base_url: Url,
}

impl MapTarget {
    fn new(location: &str) -> Result<Self, MapError> {
        let base_url =
            Url::parse(location).map_err(|e| MapError::InvalidConfiguration(e.to_string()))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(MapError::InvalidConfiguration(format!(
                "{} is not an http(s) base URL",
                location
            )));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| MapError::InvalidConfiguration(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn room_url(&self, room_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // Only fails for cannot-be-a-base URLs, which `new` rejects.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(room_id);
        }
        url
    }
}

/// Client for the map service
#[derive(Clone)]
pub struct MapClient {
    target: Option<MapTarget>,
}

impl MapClient {
    /// Build a client for the configured map location.
    ///
    /// Never fails: if no endpoint can be established the error is logged and
    /// the client reports `is_ready() == false`.
    pub fn new(map_url: Option<&str>) -> Self {
        let location = resolve_map_location(map_url);
        match MapTarget::new(&location) {
            Ok(target) => {
                tracing::info!(map_url = %target.base_url, "Map client initialized");
                Self {
                    target: Some(target),
                }
            }
            Err(e) => {
                tracing::error!(
                    map_url = %location,
                    error = %e,
                    "Unable to initialize map client"
                );
                Self { target: None }
            }
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.map_url.as_deref())
    }

    /// Full URL for a room, or `None` when the client has no endpoint.
    pub fn room_url(&self, room_id: &str) -> Option<Url> {
        self.target.as_ref().map(|t| t.room_url(room_id))
    }

    /// Single GET for a room, reporting exactly what went wrong.
    pub async fn try_fetch(&self, room_id: &str) -> Result<MapData, MapError> {
        let target = self.target.as_ref().ok_or(MapError::NotConfigured)?;
        let url = target.room_url(room_id);
        tracing::debug!(url = %url, "Making request to map for room");

        let response = target
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| MapError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<MapData>()
            .await
            .map_err(|e| MapError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl MapPort for MapClient {
    fn is_ready(&self) -> bool {
        self.target.is_some()
    }

    async fn fetch_room(&self, room_id: &str) -> MapFetch {
        match self.try_fetch(room_id).await {
            Ok(data) => MapFetch::Found(data),
            Err(e) => {
                tracing::warn!(
                    room_id = %room_id,
                    url = ?self.room_url(room_id).map(|u| u.to_string()),
                    error = %e,
                    "Unable to fetch room from map"
                );
                MapFetch::NoData
            }
        }
    }
}
