//! Database repository implementations

pub mod membership_repository;
pub mod message_repository;
pub mod room_repository;
pub mod user_repository;

pub use membership_repository::*;
pub use message_repository::*;
pub use room_repository::*;
pub use user_repository::*;
