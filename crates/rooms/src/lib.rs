//! # Lobby Rooms Crate
//!
//! Room lifecycle and membership rules: creating and renaming rooms, joining
//! and leaving them, and gating message access on membership.
//!
//! ## Architecture
//!
//! - **Services**: [`RoomService`], the rules
//! - **Repositories**: the [`RoomStore`] contract and its SQLite implementation
//! - **Types**: requests, responses and [`RoomError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! # async fn demo(pool: sqlx::SqlitePool) -> Result<(), lobby_rooms::RoomError> {
//! use lobby_rooms::{CreateRoomRequest, RoomService, SqliteRoomStore};
//!
//! let service = RoomService::new(SqliteRoomStore::new(pool));
//! let room = service
//!     .create_room(CreateRoomRequest {
//!         username: "alice".into(),
//!         name: "Lobby".into(),
//!         description: "General chat".into(),
//!     })
//!     .await?;
//! println!("{}", room.id);
//! # Ok(())
//! # }
//! ```

pub mod repositories;
pub mod services;
pub mod types;

pub use lobby_database::{Membership, Message, Room};
pub use repositories::{RoomFilter, RoomStore, SqliteRoomStore};
pub use services::RoomService;
pub use types::{
    CreateRoomRequest, ErrorKind, JoinRoomRequest, RoomError, RoomResult,
    StatusHint, UpdateRoomRequest, UpdatedRoom,
};
