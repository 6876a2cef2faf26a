//! End-to-end tests.
//!
//! These tests compose the full `App` with the real `MapClient` and run it
//! against the in-process map service from `test_fixtures`.
//!
//! # Running E2E Tests
//!
//! ```bash
//! cargo test -p gameon-room-engine --lib e2e_tests
//! ```
