//! Lobby Database Crate
//!
//! Connection management, migrations and repositories for rooms, memberships,
//! users and messages.

use lobby_config::DatabaseConfig;
use sqlx::SqlitePool;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod seed;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use connection::{ping, prepare_database};
pub use migrations::run_migrations;
pub use seed::{seed_database, SeedOutcome};

pub use repos::{MembershipRepository, MessageRepository, RoomRepository, UserRepository};

pub use entities::{CreateMessageRequest, CreateUserRequest, Membership, Message, Room, User};

pub use types::{DatabaseError, DatabaseResult};

pub use sqlx::SqlitePool as Pool;

/// Connect and bring the schema up to date
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("{e:#}")))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("{e:#}")))?;

    Ok(pool)
}
