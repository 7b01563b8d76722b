//! Repository for room membership (user_rooms) operations.

use crate::entities::Membership;
use crate::types::{DatabaseError, DatabaseResult};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for membership database operations
#[derive(Clone)]
pub struct MembershipRepository {
    pool: SqlitePool,
}

impl MembershipRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a membership row. The `(room_id, user_id)` key makes a second
    /// insert for the same pair fail with [`DatabaseError::Duplicate`].
    pub async fn create(&self, membership: &Membership) -> DatabaseResult<()> {
        sqlx::query(
            "INSERT INTO user_rooms (room_id, user_id, username, created_at, deleted_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&membership.room_id)
        .bind(&membership.user_id)
        .bind(&membership.username)
        .bind(&membership.created_at)
        .bind(&membership.deleted_at)
        .execute(&self.pool)
        .await?;

        info!(
            room_id = %membership.room_id,
            user_id = %membership.user_id,
            "added user to room"
        );
        Ok(())
    }

    pub async fn exists(&self, room_id: &str, user_id: &str) -> DatabaseResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM user_rooms WHERE room_id = ? AND user_id = ?)",
        )
        .bind(room_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn find_by_room(&self, room_id: &str) -> DatabaseResult<Vec<Membership>> {
        let rows = sqlx::query(
            "SELECT room_id, user_id, username, created_at, deleted_at FROM user_rooms WHERE room_id = ?",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_membership).collect()
    }

    pub async fn delete(&self, room_id: &str, user_id: &str) -> DatabaseResult<()> {
        let result = sqlx::query("DELETE FROM user_rooms WHERE room_id = ? AND user_id = ?")
            .bind(room_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!(
                "membership {room_id}/{user_id}"
            )));
        }

        info!(room_id, user_id, "removed user from room");
        Ok(())
    }
}

fn map_membership(row: &SqliteRow) -> DatabaseResult<Membership> {
    Ok(Membership {
        room_id: row.try_get("room_id")?,
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        created_at: row.try_get("created_at")?,
        deleted_at: row.try_get("deleted_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDatabase;

    #[tokio::test]
    async fn test_membership_lifecycle() {
        let db = TestDatabase::new().await;
        let repo = MembershipRepository::new(db.pool.clone());
        let room = db.room("Lobby").await;
        let user = db.user("Alice").await;

        assert!(!repo.exists(&room.id, &user.user_id).await.unwrap());

        repo.create(&Membership::new(&room.id, &user.user_id, "alice"))
            .await
            .unwrap();
        assert!(repo.exists(&room.id, &user.user_id).await.unwrap());

        let members = repo.find_by_room(&room.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].username, "alice");

        repo.delete(&room.id, &user.user_id).await.unwrap();
        assert!(repo.find_by_room(&room.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_rejected_by_storage() {
        let db = TestDatabase::new().await;
        let repo = MembershipRepository::new(db.pool.clone());
        let room = db.room("Lobby").await;
        let user = db.user("Alice").await;

        repo.create(&Membership::new(&room.id, &user.user_id, "alice"))
            .await
            .unwrap();
        let error = repo
            .create(&Membership::new(&room.id, &user.user_id, "alice-again"))
            .await
            .unwrap_err();

        assert!(matches!(error, DatabaseError::Duplicate(_)), "got {error:?}");
        assert_eq!(repo.find_by_room(&room.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_membership_requires_existing_room() {
        let db = TestDatabase::new().await;
        let repo = MembershipRepository::new(db.pool.clone());
        let user = db.user("Alice").await;

        let error = repo
            .create(&Membership::new("missing-room", &user.user_id, "alice"))
            .await
            .unwrap_err();
        assert!(matches!(error, DatabaseError::QueryError(_)), "got {error:?}");
    }

    #[tokio::test]
    async fn test_delete_missing_pair_reports_not_found() {
        let db = TestDatabase::new().await;
        let repo = MembershipRepository::new(db.pool.clone());

        let error = repo.delete("room", "user").await.unwrap_err();
        assert!(error.is_not_found());
    }
}
