//! Application state and composition.

use std::sync::Arc;

use gameon_room_domain::DomainError;

use crate::config::AppConfig;
use crate::entities::Room;
use crate::infrastructure::{map_client::MapClient, ports::MapPort};
use crate::use_cases;

/// Custom command every sample room offers.
pub const SAMPLE_COMMAND: &str = "/ping";
pub const SAMPLE_COMMAND_DESCRIPTION: &str = "Hear an echo";

/// Item lying around in every sample room.
pub const SAMPLE_ITEM: &str = "note";

/// Main application state.
///
/// Built once at startup; the map client inside is immutable and shared by
/// every use case.
pub struct App {
    pub config: AppConfig,
    pub map: Arc<dyn MapPort>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub refresh_room: Arc<use_cases::RefreshRoom>,
}

impl App {
    /// Compose the application against the real map service.
    pub fn new(config: AppConfig) -> Self {
        let map: Arc<dyn MapPort> = Arc::new(MapClient::from_config(&config));
        Self::with_map(config, map)
    }

    /// Compose the application around any map port implementation.
    pub fn with_map(config: AppConfig, map: Arc<dyn MapPort>) -> Self {
        let use_cases = UseCases {
            refresh_room: Arc::new(use_cases::RefreshRoom::new(map.clone())),
        };

        Self {
            config,
            map,
            use_cases,
        }
    }

    /// A fresh room carrying the sample room's custom command and item.
    pub async fn sample_room() -> Result<Room, DomainError> {
        let room = Room::new();
        room.add_command(SAMPLE_COMMAND, Some(SAMPLE_COMMAND_DESCRIPTION))
            .await?;
        room.add_item(SAMPLE_ITEM).await;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_sample_room_has_command_and_item() {
        let room = App::sample_room().await.unwrap();

        assert_eq!(
            *room.commands_view().await,
            json!({"/ping": "Hear an echo"})
        );
        assert_eq!(*room.inventory_view().await, json!(["note"]));
    }
}
