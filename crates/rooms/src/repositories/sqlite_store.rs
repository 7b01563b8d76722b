//! [`RoomStore`] backed by the SQLite repositories.

use async_trait::async_trait;
use lobby_database::{
    DatabaseError, DatabaseResult, Membership, MembershipRepository, Message, MessageRepository,
    Room, RoomRepository, UserRepository,
};
use sqlx::SqlitePool;

use super::{RoomFilter, RoomStore};

#[derive(Clone)]
pub struct SqliteRoomStore {
    rooms: RoomRepository,
    memberships: MembershipRepository,
    users: UserRepository,
    messages: MessageRepository,
}

impl SqliteRoomStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            rooms: RoomRepository::new(pool.clone()),
            memberships: MembershipRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            messages: MessageRepository::new(pool),
        }
    }
}

#[async_trait]
impl RoomStore for SqliteRoomStore {
    async fn room_exists(&self, filter: &RoomFilter) -> DatabaseResult<bool> {
        match filter {
            RoomFilter::Id(id) => self.rooms.exists_by_id(id).await,
            RoomFilter::Name(name) => self.rooms.exists_by_name(name).await,
        }
    }

    async fn user_exists(&self, user_id: &str) -> DatabaseResult<bool> {
        self.users.exists(user_id).await
    }

    async fn membership_exists(&self, room_id: &str, user_id: &str) -> DatabaseResult<bool> {
        self.memberships.exists(room_id, user_id).await
    }

    async fn insert_room(&self, room: &Room) -> DatabaseResult<()> {
        self.rooms.create(room).await
    }

    async fn insert_membership(&self, membership: &Membership) -> DatabaseResult<()> {
        self.memberships.create(membership).await
    }

    async fn fetch_room(&self, filter: &RoomFilter) -> DatabaseResult<Room> {
        let room = match filter {
            RoomFilter::Id(id) => self.rooms.find_by_id(id).await?,
            RoomFilter::Name(name) => self.rooms.find_by_name(name).await?,
        };
        room.ok_or_else(|| DatabaseError::NotFound(format!("room with {filter}")))
    }

    async fn fetch_rooms(&self) -> DatabaseResult<Vec<Room>> {
        self.rooms.list_all().await
    }

    async fn fetch_memberships(&self, room_id: &str) -> DatabaseResult<Vec<Membership>> {
        self.memberships.find_by_room(room_id).await
    }

    async fn fetch_messages(&self, room_id: &str) -> DatabaseResult<Vec<Message>> {
        self.messages.find_by_room(room_id).await
    }

    async fn delete_membership(&self, membership: &Membership) -> DatabaseResult<()> {
        self.memberships
            .delete(&membership.room_id, &membership.user_id)
            .await
    }

    async fn update_room(&self, room: &Room) -> DatabaseResult<()> {
        self.rooms.update(room).await
    }
}
