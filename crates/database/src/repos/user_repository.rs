//! Repository for user records.

use crate::entities::{CreateUserRequest, User};
use crate::types::DatabaseResult;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateUserRequest) -> DatabaseResult<User> {
        let user = User::from_request(request);

        sqlx::query(
            "INSERT INTO users (user_id, name, email, created_at, deleted_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.user_id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.created_at)
        .bind(&user.deleted_at)
        .execute(&self.pool)
        .await?;

        info!(user_id = %user.user_id, "created user");
        Ok(user)
    }

    pub async fn exists(&self, user_id: &str) -> DatabaseResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = ?)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    pub async fn find_by_email(&self, email: &str) -> DatabaseResult<Option<User>> {
        let row = sqlx::query(
            "SELECT user_id, name, email, created_at, deleted_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_user).transpose()
    }

    pub async fn list_all(&self) -> DatabaseResult<Vec<User>> {
        let rows = sqlx::query("SELECT user_id, name, email, created_at, deleted_at FROM users")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_user).collect()
    }

    pub async fn count(&self) -> DatabaseResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn map_user(row: &SqliteRow) -> DatabaseResult<User> {
    Ok(User {
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at: row.try_get("created_at")?,
        deleted_at: row.try_get("deleted_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDatabase;
    use crate::types::DatabaseError;

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let db = TestDatabase::new().await;
        let repo = UserRepository::new(db.pool.clone());

        let user = repo
            .create(&CreateUserRequest {
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            })
            .await
            .unwrap();

        assert!(repo.exists(&user.user_id).await.unwrap());
        assert!(!repo.exists("someone-else").await.unwrap());
        assert_eq!(
            repo.find_by_email("john@example.com").await.unwrap(),
            Some(user)
        );
        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let db = TestDatabase::new().await;
        let repo = UserRepository::new(db.pool.clone());
        let request = CreateUserRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        };

        repo.create(&request).await.unwrap();
        let error = repo.create(&request).await.unwrap_err();
        assert!(matches!(error, DatabaseError::Duplicate(_)), "got {error:?}");
    }
}
