//! Temporary database fixtures shared by the repository tests.

use lobby_config::DatabaseConfig;
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::entities::{CreateUserRequest, Room, User};
use crate::repos::{RoomRepository, UserRepository};

pub struct TestDatabase {
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("test.db").display()),
            max_connections: 1,
        };
        let pool = crate::initialize_database(&config)
            .await
            .expect("failed to initialise test database");
        Self { pool, _dir: dir }
    }

    pub async fn user(&self, name: &str) -> User {
        UserRepository::new(self.pool.clone())
            .create(&CreateUserRequest {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
            })
            .await
            .expect("failed to create test user")
    }

    pub async fn room(&self, name: &str) -> Room {
        let room = Room::new(name, format!("{name} description"));
        RoomRepository::new(self.pool.clone())
            .create(&room)
            .await
            .expect("failed to create test room");
        room
    }
}
