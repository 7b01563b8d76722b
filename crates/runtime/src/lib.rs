use std::sync::Arc;

use anyhow::{Context, Result};
use lobby_config::AppConfig;
use lobby_database::{initialize_database, seed_database};
use lobby_rooms::{RoomService, SqliteRoomStore};
use sqlx::SqlitePool;
use tracing::info;

pub mod telemetry {
    use anyhow::Result;
    use lobby_config::LogConfig;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    /// Install the global subscriber. `RUST_LOG` wins over the configured filter.
    pub fn init_tracing(log: &LogConfig) -> Result<()> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&log.filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

#[derive(Clone)]
pub struct BackendServices {
    pub db_pool: SqlitePool,
    pub rooms: Arc<RoomService<SqliteRoomStore>>,
}

impl BackendServices {
    pub async fn initialise(config: &AppConfig) -> Result<Self> {
        let db_pool = initialize_database(&config.database)
            .await
            .context("failed to initialise database")?;

        if config.seed.on_startup {
            let outcome = seed_database(&db_pool)
                .await
                .context("failed to seed database")?;
            info!(?outcome, "startup seeding finished");
        }

        let rooms = Arc::new(RoomService::new(SqliteRoomStore::new(db_pool.clone())));

        info!(url = %config.database.url, "room services ready");
        Ok(Self { db_pool, rooms })
    }

    pub async fn close(self) {
        self.db_pool.close().await;
    }
}
