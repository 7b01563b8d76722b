//! Request types for room operations.

use serde::{Deserialize, Serialize};

use super::errors::{RoomError, RoomResult};

/// Request to create a new room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    /// Username of the creator. Recorded in logs only; the creator is not joined.
    pub username: String,
    pub name: String,
    pub description: String,
}

impl CreateRoomRequest {
    pub fn validate(&self) -> RoomResult<()> {
        required("name", &self.name)?;
        required("description", &self.description)
    }
}

/// Request to add a user to a room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    pub username: String,
    pub room_id: String,
    pub user_id: String,
}

impl JoinRoomRequest {
    pub fn validate(&self) -> RoomResult<()> {
        required("username", &self.username)
    }
}

/// Replacement name and description for an existing room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub name: String,
    pub description: String,
}

fn required(field: &str, value: &str) -> RoomResult<()> {
    if value.trim().is_empty() {
        return Err(RoomError::validation(format!("{field} is required")));
    }
    Ok(())
}
