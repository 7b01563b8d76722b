use std::path::Path;

use anyhow::{Context, Result};
use lobby_config::AppConfig;
use lobby_rooms::CreateRoomRequest;
use lobby_runtime::BackendServices;
use tempfile::TempDir;

fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}", path.to_string_lossy())
}

fn build_config(database_url: String, seed: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.database.url = database_url;
    config.database.max_connections = 2;
    config.seed.on_startup = seed;
    config
}

async fn initialise(config: &AppConfig) -> Result<BackendServices> {
    BackendServices::initialise(config)
        .await
        .context("failed to initialise backend services")
}

#[tokio::test(flavor = "multi_thread")]
async fn initialise_runs_migrations_and_wires_room_service() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("runtime/init.db");
    let config = build_config(sqlite_url(&db_path), false);

    let services = initialise(&config).await?;
    let table: String = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'user_rooms'",
    )
    .fetch_one(&services.db_pool)
    .await?;
    assert_eq!("user_rooms", table);

    let room = services
        .rooms
        .create_room(CreateRoomRequest {
            username: "alice".into(),
            name: "Lobby".into(),
            description: "General chat".into(),
        })
        .await?;
    assert_eq!(services.rooms.get_room_by_id(&room.id).await?.name, "Lobby");

    services.close().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn initialise_seeds_demo_users_when_enabled() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = build_config(sqlite_url(&temp_dir.path().join("seeded.db")), true);

    let services = initialise(&config).await?;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&services.db_pool)
        .await?;
    assert_eq!(users, 2);
    services.close().await;

    // A second start against the same file must not duplicate the demo users.
    let services = initialise(&config).await?;
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&services.db_pool)
        .await?;
    assert_eq!(users, 2);
    services.close().await;
    Ok(())
}
