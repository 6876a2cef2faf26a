//! Game On sample room engine.
//!
//! Keeps a room's description in sync with the map service.
//!
//! ## Structure
//!
//! - `entities/` - Shared, lock-guarded room handle
//! - `use_cases/` - Refreshing a room from the map
//! - `infrastructure/` - Map port and its HTTP implementation
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit and integration tests.
#[cfg(test)]
pub(crate) mod test_fixtures;

/// End-to-end tests against an in-process map service.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
