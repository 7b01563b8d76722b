//! Error types for room and membership operations.

use lobby_database::DatabaseError;
use thiserror::Error;

use super::responses::StatusHint;

/// Result type alias for room operations
pub type RoomResult<T> = Result<T, RoomError>;

/// Coarse classification callers map onto their own status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Persistence,
}

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("room not found: {key}")]
    RoomNotFound { key: String },

    #[error("user does not exist: {id}")]
    UserNotFound { id: String },

    #[error("user {user_id} already in room {room_id}")]
    AlreadyMember { room_id: String, user_id: String },

    #[error("user {user_id} not in room {room_id}")]
    NotMember { room_id: String, user_id: String },

    /// Raised by the message gate rather than by membership changes.
    #[error("user not in room")]
    NotInRoom { room_id: String, user_id: String },

    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: DatabaseError,
    },
}

impl RoomError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn room_not_found(key: impl Into<String>) -> Self {
        Self::RoomNotFound { key: key.into() }
    }

    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    pub fn already_member(room_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::AlreadyMember {
            room_id: room_id.into(),
            user_id: user_id.into(),
        }
    }

    pub fn not_member(room_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::NotMember {
            room_id: room_id.into(),
            user_id: user_id.into(),
        }
    }

    pub fn not_in_room(room_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::NotInRoom {
            room_id: room_id.into(),
            user_id: user_id.into(),
        }
    }

    pub fn persistence(message: impl Into<String>, source: DatabaseError) -> Self {
        Self::Persistence {
            message: message.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::RoomNotFound { .. }
            | Self::UserNotFound { .. }
            | Self::NotMember { .. }
            | Self::NotInRoom { .. } => ErrorKind::NotFound,
            Self::AlreadyMember { .. } => ErrorKind::Conflict,
            Self::Persistence { .. } => ErrorKind::Persistence,
        }
    }

    pub fn status_hint(&self) -> StatusHint {
        match self.kind() {
            ErrorKind::NotFound => StatusHint::NotFound,
            _ => StatusHint::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(RoomError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(RoomError::room_not_found("r").kind(), ErrorKind::NotFound);
        assert_eq!(RoomError::user_not_found("u").kind(), ErrorKind::NotFound);
        assert_eq!(RoomError::not_member("r", "u").kind(), ErrorKind::NotFound);
        assert_eq!(RoomError::not_in_room("r", "u").kind(), ErrorKind::NotFound);
        assert_eq!(RoomError::already_member("r", "u").kind(), ErrorKind::Conflict);

        let persistence =
            RoomError::persistence("could not add user to room", DatabaseError::QueryError("io".into()));
        assert_eq!(persistence.kind(), ErrorKind::Persistence);
        assert_eq!(persistence.to_string(), "could not add user to room");
    }

    #[test]
    fn test_status_hints() {
        assert_eq!(RoomError::room_not_found("r").status_hint(), StatusHint::NotFound);
        assert_eq!(
            RoomError::persistence("boom", DatabaseError::QueryError("io".into())).status_hint(),
            StatusHint::Internal
        );
    }

    #[test]
    fn test_not_in_room_message() {
        assert_eq!(RoomError::not_in_room("r", "u").to_string(), "user not in room");
    }
}
