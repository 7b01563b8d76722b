//! Persisted record shapes
//!
//! Plain data records; behaviour lives in the repositories and services.

pub mod membership;
pub mod message;
pub mod room;
pub mod user;

pub use membership::Membership;
pub use message::{CreateMessageRequest, Message};
pub use room::Room;
pub use user::{CreateUserRequest, User};

pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
