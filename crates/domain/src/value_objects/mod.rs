//! Value objects - Immutable objects defined by their attributes

mod connection_details;
mod map_data;

pub use connection_details::ConnectionDetails;
pub use map_data::MapData;
