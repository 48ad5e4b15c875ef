//! Fluent configuration containers.
//!
//! Depend on this crate via `cargo add fluent-config`. It bundles the workspace
//! crates behind feature flags: the primitives are always available, the
//! container itself sits behind the default `container` feature.
//!
//! ```
//! use fluent_config::prelude::*;
//!
//! let mut config = FluentConfig::builder().preserve_instance(true).build();
//! let _ = config.push("queue", ["a", "b"])?;
//! assert_eq!(config.pop("queue")?.into_value(), Some(Value::from("b")));
//! # Ok::<(), fluent_config::primitives::Error>(())
//! ```

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use config_primitives as primitives;

/// The configuration container (enabled by `container` feature).
#[cfg(feature = "container")]
pub use config_container as container;

/// Commonly used types and traits.
pub mod prelude {
    pub use config_primitives::{Error, OptionKey, Options, Result, Value};

    #[cfg(feature = "container")]
    pub use config_container::{
        Configurable, Fluent, FluentConfig, FluentConfigBuilder, MergeOrder, Popped, Pushed,
    };
}
