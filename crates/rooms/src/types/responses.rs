//! Response types for room operations.

use lobby_database::Room;
use serde::{Deserialize, Serialize};

/// Transport-neutral outcome of a room update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusHint {
    Ok,
    NotFound,
    Internal,
}

/// Fresh copy of an updated room, re-read from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedRoom {
    pub room: Room,
    pub status: StatusHint,
}
