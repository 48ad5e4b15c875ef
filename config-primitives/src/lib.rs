//! Core shared types for fluent configuration containers.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod key;
mod options;
mod value;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Validated option name.
pub use key::OptionKey;
/// Insertion-ordered mapping from option names to values.
pub use options::Options;
/// Scalar-or-list option value.
pub use value::Value;
