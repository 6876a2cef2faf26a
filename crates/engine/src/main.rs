//! Game On sample room - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gameon_room_engine::config::{load_dotenv_from_repo_root, AppConfig};
use gameon_room_engine::infrastructure::ports::MapFetch;
use gameon_room_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gameon_room_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Game On sample room");

    let config = AppConfig::from_env();
    let app = App::new(config);
    let room_id = app.config.room_id.clone();

    let room = App::sample_room().await?;

    if app.use_cases.refresh_room.is_ready() {
        match app.use_cases.refresh_room.execute(&room_id, &room).await {
            MapFetch::Found(_) => tracing::info!(room_id = %room_id, "Room data fetched from map"),
            MapFetch::NoData => {
                tracing::warn!(room_id = %room_id, "Map returned no data, using defaults")
            }
        }
    } else {
        tracing::warn!(room_id = %room_id, "Map client not ready, room keeps its defaults");
    }

    let snapshot = room.snapshot().await;
    tracing::info!(room = %snapshot, "Room ready");
    tracing::info!(
        commands = %room.commands_view().await,
        inventory = %room.inventory_view().await,
        "Room views"
    );

    Ok(())
}
