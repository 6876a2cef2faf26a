//! Refresh a room's description from the map service.

use std::sync::Arc;

use crate::entities::Room;
use crate::infrastructure::ports::{MapFetch, MapPort};

/// Pulls a room's descriptive fields from the map and merges them in.
///
/// This is the only path by which map data reaches a room. A failed lookup
/// is not an error: the room simply keeps its current text until the next
/// refresh.
pub struct RefreshRoom {
    map: Arc<dyn MapPort>,
}

impl RefreshRoom {
    pub fn new(map: Arc<dyn MapPort>) -> Self {
        Self { map }
    }

    /// Whether the map client has an endpoint to talk to.
    pub fn is_ready(&self) -> bool {
        self.map.is_ready()
    }

    pub async fn fetch_room_record(&self, room_id: &str) -> MapFetch {
        self.map.fetch_room(room_id).await
    }

    /// Fetch the room's record and apply it.
    ///
    /// The room lock is only taken after the request completes, never held
    /// across the network call.
    pub async fn execute(&self, room_id: &str, room: &Room) -> MapFetch {
        let outcome = self.fetch_room_record(room_id).await;

        match &outcome {
            MapFetch::Found(data) => {
                room.update_from(data).await;
                tracing::debug!(room_id = %room_id, "Room refreshed from map");
            }
            MapFetch::NoData => {
                tracing::debug!(room_id = %room_id, "No map data, room left unchanged");
            }
        }

        outcome
    }
}
