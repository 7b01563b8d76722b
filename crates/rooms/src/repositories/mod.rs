//! Data access contract for the room service.
//!
//! [`RoomStore`] is the only way the service touches persistence. Each method
//! maps onto one primitive of the record store: an existence check, a single
//! insert, a fetch of exactly one row, an unfiltered or room-filtered fetch of
//! many rows, a delete, or a full update.

pub mod sqlite_store;

pub use sqlite_store::SqliteRoomStore;

use async_trait::async_trait;
use lobby_database::{DatabaseResult, Membership, Message, Room};

/// Predicate selecting a single room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomFilter {
    Id(String),
    Name(String),
}

impl std::fmt::Display for RoomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomFilter::Id(id) => write!(f, "id {id}"),
            RoomFilter::Name(name) => write!(f, "name {name}"),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn room_exists(&self, filter: &RoomFilter) -> DatabaseResult<bool>;

    async fn user_exists(&self, user_id: &str) -> DatabaseResult<bool>;

    async fn membership_exists(&self, room_id: &str, user_id: &str) -> DatabaseResult<bool>;

    async fn insert_room(&self, room: &Room) -> DatabaseResult<()>;

    /// Must reject a second row for the same `(room_id, user_id)` pair.
    async fn insert_membership(&self, membership: &Membership) -> DatabaseResult<()>;

    /// Fails with `DatabaseError::NotFound` when no row matches.
    async fn fetch_room(&self, filter: &RoomFilter) -> DatabaseResult<Room>;

    async fn fetch_rooms(&self) -> DatabaseResult<Vec<Room>>;

    async fn fetch_memberships(&self, room_id: &str) -> DatabaseResult<Vec<Membership>>;

    async fn fetch_messages(&self, room_id: &str) -> DatabaseResult<Vec<Message>>;

    async fn delete_membership(&self, membership: &Membership) -> DatabaseResult<()>;

    /// Overwrites name and description of the room with the same id.
    async fn update_room(&self, room: &Room) -> DatabaseResult<()>;
}
