//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod map_client;
pub mod ports;
