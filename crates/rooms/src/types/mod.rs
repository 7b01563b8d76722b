//! Shared types for the rooms crate.

pub mod errors;
pub mod requests;
pub mod responses;

pub use errors::{ErrorKind, RoomError, RoomResult};
pub use requests::*;
pub use responses::*;
