//! Repository for room messages.

use crate::entities::{CreateMessageRequest, Message};
use crate::types::DatabaseResult;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

#[derive(Clone)]
pub struct MessageRepository {
    pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateMessageRequest) -> DatabaseResult<Message> {
        let message = Message::from_request(request);

        sqlx::query(
            "INSERT INTO messages (id, room_id, user_id, content, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&message.id)
        .bind(&message.room_id)
        .bind(&message.user_id)
        .bind(&message.content)
        .bind(&message.created_at)
        .execute(&self.pool)
        .await?;

        debug!(message_id = %message.id, room_id = %message.room_id, "stored message");
        Ok(message)
    }

    /// Every message tagged with `room_id`, unpaginated
    pub async fn find_by_room(&self, room_id: &str) -> DatabaseResult<Vec<Message>> {
        let rows = sqlx::query(
            "SELECT id, room_id, user_id, content, created_at FROM messages WHERE room_id = ?",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_message).collect()
    }
}

fn map_message(row: &SqliteRow) -> DatabaseResult<Message> {
    Ok(Message {
        id: row.try_get("id")?,
        room_id: row.try_get("room_id")?,
        user_id: row.try_get("user_id")?,
        content: row.try_get("content")?,
        created_at: row.try_get("created_at")?,
    })
}
