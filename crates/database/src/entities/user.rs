//! User entity definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::now_rfc3339;

/// User record. Owned by the account side of the system; rooms only check existence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub deleted_at: Option<String>,
}

/// Request for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn from_request(request: &CreateUserRequest) -> Self {
        Self {
            user_id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
            created_at: now_rfc3339(),
            deleted_at: None,
        }
    }
}
