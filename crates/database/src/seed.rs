//! Demo data for local development.

use sqlx::SqlitePool;
use tracing::info;

use crate::entities::CreateUserRequest;
use crate::repos::UserRepository;
use crate::types::DatabaseResult;

const SENTINEL_EMAIL: &str = "john@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { users: usize },
    AlreadySeeded,
}

fn demo_users() -> Vec<CreateUserRequest> {
    vec![
        CreateUserRequest {
            name: "John Doe".to_string(),
            email: SENTINEL_EMAIL.to_string(),
        },
        CreateUserRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}

/// Insert the demo users unless the first one is already present.
pub async fn seed_database(pool: &SqlitePool) -> DatabaseResult<SeedOutcome> {
    let users = UserRepository::new(pool.clone());

    if users.find_by_email(SENTINEL_EMAIL).await?.is_some() {
        info!("users already exist, skipping seeding");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let requests = demo_users();
    for request in &requests {
        users.create(request).await?;
    }

    info!(users = requests.len(), "seeded demo users");
    Ok(SeedOutcome::Seeded {
        users: requests.len(),
    })
}
