//! Use cases - User story orchestration.
//!
//! Use cases orchestrate across entity modules and ports to fulfill user
//! stories.

pub mod refresh_room;

pub use refresh_room::RefreshRoom;
