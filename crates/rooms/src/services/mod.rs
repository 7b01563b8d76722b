//! Business logic services for rooms.

pub mod room_service;

pub use room_service::RoomService;
