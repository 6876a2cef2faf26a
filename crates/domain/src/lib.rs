//! Game On sample room domain.
//!
//! Pure types with no I/O: the room description and the records exchanged
//! with the map service.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    RoomDescription, DEFAULT_ROOM_DESCRIPTION, DEFAULT_ROOM_FULL_NAME, DEFAULT_ROOM_NAME,
};
pub use error::DomainError;
pub use value_objects::{ConnectionDetails, MapData};
