//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.

pub mod room;

pub use room::Room;
