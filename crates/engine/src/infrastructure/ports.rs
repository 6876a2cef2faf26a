//! Port traits for infrastructure boundaries.
//!
//! The map service is the only external system the room talks to, so it is the
//! only port. Everything else is concrete types.

use async_trait::async_trait;
use gameon_room_domain::MapData;

// =============================================================================
// Error Types
// =============================================================================

/// Why a map request produced no room data.
///
/// These never leave the map adapter: `MapPort::fetch_room` logs them and
/// reports [`MapFetch::NoData`] instead.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Map client is not configured")]
    NotConfigured,
    #[error("Invalid map configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Map request failed: {0}")]
    RequestFailed(String),
    #[error("Map service responded {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("Invalid map response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Infrastructure Types
// =============================================================================

/// Outcome of one map lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapFetch {
    /// The map answered with data for the room
    Found(MapData),
    /// Nothing to apply this round; the room keeps what it has
    NoData,
}

impl MapFetch {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_data(self) -> Option<MapData> {
        match self {
            Self::Found(data) => Some(data),
            Self::NoData => None,
        }
    }
}

// =============================================================================
// Map Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MapPort: Send + Sync {
    /// Whether an endpoint was established when the client was built.
    fn is_ready(&self) -> bool;

    /// Look up a room by id. Failures of any kind come back as `NoData`.
    async fn fetch_room(&self, room_id: &str) -> MapFetch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_fetch_into_data() {
        let data = MapData::new().with_full_name("The Vault");

        assert!(MapFetch::Found(data.clone()).is_found());
        assert_eq!(MapFetch::Found(data.clone()).into_data(), Some(data));
        assert!(!MapFetch::NoData.is_found());
        assert_eq!(MapFetch::NoData.into_data(), None);
    }

    #[test]
    fn test_status_error_message() {
        let err = MapError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Map service responded 500 Internal Server Error"
        );
    }
}
