//! Fluent configuration container.
//!
//! A [`FluentConfig`] maps option names to values. Its fluent operations either
//! edit the container in place or leave it untouched and return an edited
//! duplicate, depending on [`FluentConfig::preserve_instance`]. Types that embed
//! a container gain the same operations by implementing [`Configurable`].

#![warn(missing_docs, clippy::pedantic)]

mod configurable;
mod container;
mod fluent;

/// Embedding trait providing the fluent and queue operations.
pub use configurable::{Configurable, MergeOrder};
/// The configuration container and its builder.
pub use container::{FluentConfig, FluentConfigBuilder};
/// Handles returned by fluent operations.
pub use fluent::{Fluent, Popped, Pushed};

pub use config_primitives::{Error, OptionKey, Options, Result, Value};
