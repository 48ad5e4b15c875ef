//! Shared error definitions for configuration primitives.

use thiserror::Error;

/// Result alias used throughout the configuration containers.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The provided option name failed validation.
    #[error("option name must be a valid string: {reason}")]
    InvalidKey {
        /// The offending option name.
        key: String,
        /// Human-readable reason for rejection.
        reason: &'static str,
    },
}

impl Error {
    /// Helper to construct key validation errors.
    #[must_use]
    pub fn invalid_key(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason,
        }
    }
}
