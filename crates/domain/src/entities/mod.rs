//! Domain entities - Core business objects with identity

mod room;

pub use room::{
    RoomDescription, DEFAULT_ROOM_DESCRIPTION, DEFAULT_ROOM_FULL_NAME, DEFAULT_ROOM_NAME,
};
