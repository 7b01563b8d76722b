//! Membership (user_rooms) entity definitions

use serde::{Deserialize, Serialize};

use super::now_rfc3339;

/// Association between one user and one room, keyed by `(room_id, user_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub room_id: String,
    pub user_id: String,
    /// Username as it was when the user joined.
    pub username: String,
    pub created_at: String,
    pub deleted_at: Option<String>,
}

impl Membership {
    pub fn new(
        room_id: impl Into<String>,
        user_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            user_id: user_id.into(),
            username: username.into(),
            created_at: now_rfc3339(),
            deleted_at: None,
        }
    }

    /// Key-only record, enough to address a row for deletion.
    pub fn key(room_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::new(room_id, user_id, String::new())
    }
}
