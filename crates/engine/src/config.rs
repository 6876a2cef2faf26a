//! Runtime configuration read from the environment.

use std::path::Path;

/// Room id looked up on the map when `ROOM_ID` is not set.
pub const DEFAULT_ROOM_ID: &str = "RecRoom";

/// Settings the room needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the map service's sites endpoint, as configured.
    ///
    /// Left unresolved here; the map client decides whether to fall back to
    /// its default.
    pub map_url: Option<String>,
    /// Id of the room this process describes
    pub room_id: String,
}

impl AppConfig {
    pub fn new(map_url: Option<String>, room_id: impl Into<String>) -> Self {
        Self {
            map_url,
            room_id: room_id.into(),
        }
    }

    /// Read configuration from `MAP_URL` and `ROOM_ID`.
    pub fn from_env() -> Self {
        let map_url = std::env::var("MAP_URL").ok();
        let room_id = std::env::var("ROOM_ID")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOM_ID.to_string());
        Self::new(map_url, room_id)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_ROOM_ID)
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
