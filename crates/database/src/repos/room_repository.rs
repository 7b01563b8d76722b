//! Repository for room data access operations.

use crate::entities::Room;
use crate::types::{DatabaseError, DatabaseResult};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

const ROOM_COLUMNS: &str = "room_id, name, description, created_at, deleted_at";

/// Repository for room database operations
#[derive(Clone)]
pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new room. A taken name surfaces as [`DatabaseError::Duplicate`].
    pub async fn create(&self, room: &Room) -> DatabaseResult<()> {
        sqlx::query(
            "INSERT INTO rooms (room_id, name, description, created_at, deleted_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&room.id)
        .bind(&room.name)
        .bind(&room.description)
        .bind(&room.created_at)
        .bind(&room.deleted_at)
        .execute(&self.pool)
        .await?;

        info!(room_id = %room.id, name = %room.name, "created room");
        Ok(())
    }

    pub async fn find_by_id(&self, room_id: &str) -> DatabaseResult<Option<Room>> {
        let row = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE room_id = ?"))
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_room).transpose()
    }

    pub async fn find_by_name(&self, name: &str) -> DatabaseResult<Option<Room>> {
        let row = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_room).transpose()
    }

    pub async fn exists_by_id(&self, room_id: &str) -> DatabaseResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rooms WHERE room_id = ?)")
            .bind(room_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn exists_by_name(&self, name: &str) -> DatabaseResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rooms WHERE name = ?)")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// All rooms in store order
    pub async fn list_all(&self) -> DatabaseResult<Vec<Room>> {
        let rows = sqlx::query(&format!("SELECT {ROOM_COLUMNS} FROM rooms"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_room).collect()
    }

    /// Overwrite the mutable columns of an existing room
    pub async fn update(&self, room: &Room) -> DatabaseResult<()> {
        let result = sqlx::query("UPDATE rooms SET name = ?, description = ? WHERE room_id = ?")
            .bind(&room.name)
            .bind(&room.description)
            .bind(&room.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("room {}", room.id)));
        }

        debug!(room_id = %room.id, "updated room");
        Ok(())
    }
}

fn map_room(row: &SqliteRow) -> DatabaseResult<Room> {
    Ok(Room {
        id: row.try_get("room_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at: row.try_get("created_at")?,
        deleted_at: row.try_get("deleted_at")?,
    })
}
