//! Room service: room lifecycle and membership rules.

use lobby_database::{Membership, Message, Room};
use tracing::{debug, info, warn};

use crate::repositories::{RoomFilter, RoomStore};
use crate::types::{
    CreateRoomRequest, JoinRoomRequest, RoomError, RoomResult, StatusHint, UpdateRoomRequest,
    UpdatedRoom,
};

/// Service enforcing room and membership invariants on top of a [`RoomStore`]
pub struct RoomService<S> {
    store: S,
}

impl<S: RoomStore> RoomService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a room. The creator is not added as a member.
    pub async fn create_room(&self, request: CreateRoomRequest) -> RoomResult<Room> {
        request.validate()?;

        let room = Room::new(request.name, request.description);
        self.store
            .insert_room(&room)
            .await
            .map_err(|e| RoomError::persistence("could not create room", e))?;

        info!(room_id = %room.id, creator = %request.username, "room created");
        Ok(room)
    }

    pub async fn get_room_by_id(&self, room_id: &str) -> RoomResult<Room> {
        self.fetch_room(RoomFilter::Id(room_id.to_string())).await
    }

    pub async fn get_room_by_name(&self, name: &str) -> RoomResult<Room> {
        let filter = RoomFilter::Name(name.to_string());
        if !self.room_exists(&filter).await? {
            return Err(RoomError::room_not_found(name));
        }
        self.fetch_room(filter).await
    }

    pub async fn list_rooms(&self) -> RoomResult<Vec<Room>> {
        self.store
            .fetch_rooms()
            .await
            .map_err(|e| RoomError::persistence("could not list rooms", e))
    }

    /// Members of a room. An unknown room yields an empty list, same as an empty room.
    pub async fn list_members(&self, room_id: &str) -> RoomResult<Vec<Membership>> {
        self.store
            .fetch_memberships(room_id)
            .await
            .map_err(|e| RoomError::persistence("could not list room members", e))
    }

    /// Messages of a room, visible only to its members.
    pub async fn list_messages(&self, user_id: &str, room_id: &str) -> RoomResult<Vec<Message>> {
        if !self.membership_exists(room_id, user_id).await? {
            debug!(room_id, user_id, "message access denied");
            return Err(RoomError::not_in_room(room_id, user_id));
        }

        self.store
            .fetch_messages(room_id)
            .await
            .map_err(|e| RoomError::persistence("could not list room messages", e))
    }

    /// Add a user to a room.
    ///
    /// Preconditions are checked in order and the first failure wins: the user
    /// exists, the room exists, the user is not yet a member.
    pub async fn join_room(&self, request: JoinRoomRequest) -> RoomResult<()> {
        request.validate()?;
        let JoinRoomRequest {
            username,
            room_id,
            user_id,
        } = request;

        let user_exists = self
            .store
            .user_exists(&user_id)
            .await
            .map_err(|e| RoomError::persistence("could not look up user", e))?;
        if !user_exists {
            return Err(RoomError::user_not_found(user_id));
        }

        if !self.room_exists(&RoomFilter::Id(room_id.clone())).await? {
            return Err(RoomError::room_not_found(room_id));
        }

        if self.membership_exists(&room_id, &user_id).await? {
            return Err(RoomError::already_member(room_id, user_id));
        }

        let membership = Membership::new(room_id, user_id, username);
        self.store
            .insert_membership(&membership)
            .await
            .map_err(|e| {
                warn!(
                    room_id = %membership.room_id,
                    user_id = %membership.user_id,
                    error = %e,
                    "membership insert failed"
                );
                RoomError::persistence("could not add user to room", e)
            })?;

        info!(
            room_id = %membership.room_id,
            user_id = %membership.user_id,
            "user joined room"
        );
        Ok(())
    }

    pub async fn leave_room(&self, room_id: &str, user_id: &str) -> RoomResult<()> {
        if !self.membership_exists(room_id, user_id).await? {
            return Err(RoomError::not_member(room_id, user_id));
        }

        self.store
            .delete_membership(&Membership::key(room_id, user_id))
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    RoomError::not_member(room_id, user_id)
                } else {
                    RoomError::persistence("could not remove user from room", e)
                }
            })?;

        info!(room_id, user_id, "user left room");
        Ok(())
    }

    pub async fn count_members(&self, room_id: &str) -> RoomResult<usize> {
        if !self.room_exists(&RoomFilter::Id(room_id.to_string())).await? {
            return Err(RoomError::room_not_found(room_id));
        }

        let members = self
            .store
            .fetch_memberships(room_id)
            .await
            .map_err(|e| RoomError::persistence("could not count room members", e))?;
        Ok(members.len())
    }

    /// Overwrite name and description, then return the row as stored.
    ///
    /// Errors carry their own hint through [`RoomError::status_hint`].
    pub async fn update_room(
        &self,
        room_id: &str,
        request: UpdateRoomRequest,
    ) -> RoomResult<UpdatedRoom> {
        let mut room = self.fetch_room(RoomFilter::Id(room_id.to_string())).await?;
        room.name = request.name;
        room.description = request.description;

        self.store.update_room(&room).await.map_err(|e| {
            if e.is_not_found() {
                RoomError::room_not_found(room_id)
            } else {
                RoomError::persistence("could not update room", e)
            }
        })?;

        let room = self
            .store
            .fetch_room(&RoomFilter::Id(room_id.to_string()))
            .await
            .map_err(|e| RoomError::persistence("could not reload updated room", e))?;

        info!(room_id, "room updated");
        Ok(UpdatedRoom {
            room,
            status: StatusHint::Ok,
        })
    }

    async fn fetch_room(&self, filter: RoomFilter) -> RoomResult<Room> {
        self.store.fetch_room(&filter).await.map_err(|e| {
            if e.is_not_found() {
                let key = match filter {
                    RoomFilter::Id(id) => id,
                    RoomFilter::Name(name) => name,
                };
                RoomError::room_not_found(key)
            } else {
                RoomError::persistence("could not load room", e)
            }
        })
    }

    async fn room_exists(&self, filter: &RoomFilter) -> RoomResult<bool> {
        self.store
            .room_exists(filter)
            .await
            .map_err(|e| RoomError::persistence("could not look up room", e))
    }

    async fn membership_exists(&self, room_id: &str, user_id: &str) -> RoomResult<bool> {
        self.store
            .membership_exists(room_id, user_id)
            .await
            .map_err(|e| RoomError::persistence("could not look up membership", e))
    }
}
