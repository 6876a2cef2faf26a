//! Unified error types for the domain layer
//!
//! Room operations report failures through [`DomainError`] so callers never
//! have to deal with `String` errors or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required argument was missing or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Creates an invalid argument error.
    ///
    /// Use this when a caller supplies input the room model cannot accept,
    /// e.g. a custom command without a description.
    ///
    /// # Example
    /// ```ignore
    /// let Some(description) = description else {
    ///     return Err(DomainError::invalid_argument("description is required"));
    /// };
    /// ```
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
