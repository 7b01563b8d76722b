//! Room entity definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::now_rfc3339;

/// A named container that users can join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "room_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    /// Soft-delete marker. Present in the schema, never written.
    pub deleted_at: Option<String>,
}

impl Room {
    /// Create a room with a fresh UUID and creation timestamp
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            created_at: now_rfc3339(),
            deleted_at: None,
        }
    }
}
