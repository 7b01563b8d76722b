//! Message entity definitions

use serde::{Deserialize, Serialize};

use super::now_rfc3339;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub room_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub room_id: String,
    pub user_id: String,
    pub content: String,
}

impl Message {
    pub fn from_request(request: &CreateMessageRequest) -> Self {
        Self {
            id: cuid2::cuid(),
            room_id: request.room_id.clone(),
            user_id: request.user_id.clone(),
            content: request.content.clone(),
            created_at: now_rfc3339(),
        }
    }
}
