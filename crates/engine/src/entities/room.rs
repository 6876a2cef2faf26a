//! Room entity operations.

use std::sync::Arc;

use gameon_room_domain::{self as domain, DomainError, MapData};
use serde_json::Value;
use tokio::sync::RwLock;

/// Shared handle to one room's description.
///
/// Every access goes through a single per-room lock, so commands, items and
/// their cached views are never observed half-updated. Cloning the handle
/// shares the same room.
#[derive(Clone, Default)]
pub struct Room {
    description: Arc<RwLock<domain::RoomDescription>>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_description(description: domain::RoomDescription) -> Self {
        Self {
            description: Arc::new(RwLock::new(description)),
        }
    }

    /// Copy of the room as it is right now.
    pub async fn snapshot(&self) -> domain::RoomDescription {
        self.description.read().await.clone()
    }

    // =========================================================================
    // Names and description
    // =========================================================================

    pub async fn update_from(&self, data: &MapData) {
        self.description.write().await.update_from(data);
    }

    pub async fn set_full_name(&self, full_name: impl Into<String>) {
        self.description.write().await.set_full_name(full_name);
    }

    pub async fn set_description(&self, description: impl Into<String>) {
        self.description.write().await.set_description(description);
    }

    // =========================================================================
    // Commands and inventory
    // =========================================================================

    pub async fn add_command(
        &self,
        command: impl Into<String>,
        description: Option<&str>,
    ) -> Result<(), DomainError> {
        self.description
            .write()
            .await
            .add_command(command, description)
    }

    pub async fn remove_command(&self, command: &str) {
        self.description.write().await.remove_command(command);
    }

    pub async fn add_item(&self, item: impl Into<String>) {
        self.description.write().await.add_item(item);
    }

    pub async fn remove_item(&self, item: &str) {
        self.description.write().await.remove_item(item);
    }

    // =========================================================================
    // Derived views
    // =========================================================================

    pub async fn commands_view(&self) -> Arc<Value> {
        self.description.read().await.commands_view()
    }

    pub async fn inventory_view(&self) -> Arc<Value> {
        self.description.read().await.inventory_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_clones_share_the_same_room() {
        let room = Room::new();
        let other = room.clone();

        other.set_full_name("The Vault").await;
        other.set_description("Cold steel walls.").await;

        let snapshot = room.snapshot().await;
        assert_eq!(snapshot.full_name(), "The Vault");
        assert_eq!(snapshot.description(), "Cold steel walls.");
    }

    #[tokio::test]
    async fn test_add_command_without_description_is_rejected() {
        let room = Room::new();

        let result = room.add_command("look", None).await;

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        assert_eq!(*room.commands_view().await, json!({}));
    }

    #[tokio::test]
    async fn test_views_follow_mutations() {
        let room = Room::from_description(domain::RoomDescription::new());

        room.add_command("/ping", Some("Says pong")).await.unwrap();
        room.add_item("lamp").await;
        assert_eq!(*room.commands_view().await, json!({"/ping": "Says pong"}));
        assert_eq!(*room.inventory_view().await, json!(["lamp"]));

        room.remove_command("/ping").await;
        room.remove_item("lamp").await;
        assert_eq!(*room.commands_view().await, json!({}));
        assert_eq!(*room.inventory_view().await, json!([]));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_and_readers_see_consistent_views() {
        let room = Room::new();
        let mut handles = Vec::new();

        for i in 0..16 {
            let room = room.clone();
            handles.push(tokio::spawn(async move {
                let command = format!("/cmd{}", i);
                let description = format!("Command number {}", i);
                room
                    .add_command(command, Some(description.as_str()))
                    .await
                    .unwrap();
                room.add_item(format!("item{}", i)).await;

                // Every view must be a complete object/array, whatever
                // interleaving happened.
                let commands = room.commands_view().await;
                let items = room.inventory_view().await;
                assert!(commands.is_object());
                assert!(items.is_array());
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let commands = room.commands_view().await;
        let items = room.inventory_view().await;
        assert_eq!(commands.as_object().map(|o| o.len()), Some(16));
        assert_eq!(items.as_array().map(|a| a.len()), Some(16));
        for i in 0..16 {
            assert_eq!(
                commands[format!("/cmd{}", i)],
                json!(format!("Command number {}", i))
            );
        }
    }
}
