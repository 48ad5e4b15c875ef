//! Fluent operations shared by every type embedding a [`FluentConfig`].

use config_primitives::{Options, Result, Value};

use crate::container::{FluentConfig, checked_key};
use crate::fluent::{Fluent, Popped, Pushed};

/// Which side wins when merged option sets share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeOrder {
    /// Incoming values replace existing ones.
    #[default]
    Override,
    /// Existing values are kept; only new names are taken from the incoming set.
    Preserve,
}

impl From<bool> for MergeOrder {
    /// Maps an `invert` flag: `true` keeps existing values.
    fn from(invert: bool) -> Self {
        if invert { Self::Preserve } else { Self::Override }
    }
}

/// Types carrying a [`FluentConfig`] and exposing its fluent operations.
///
/// Implementors only provide access to the embedded container. Every provided
/// method follows the container's
/// [`preserve_instance`](FluentConfig::preserve_instance) policy: when it is
/// set, the implementor itself is edited and handed back as
/// [`Fluent::InPlace`]; otherwise the implementor is cloned, the clone is
/// edited and returned as [`Fluent::Detached`], and the receiver is left as it
/// was. Option names are validated before anything is cloned or edited.
///
/// # Examples
///
/// ```
/// use config_container::{Configurable, FluentConfig};
///
/// #[derive(Clone, Default)]
/// struct MapBuilder {
///     config: FluentConfig,
/// }
///
/// impl Configurable for MapBuilder {
///     fn fluent_config(&self) -> &FluentConfig {
///         &self.config
///     }
///
///     fn fluent_config_mut(&mut self) -> &mut FluentConfig {
///         &mut self.config
///     }
/// }
///
/// let mut builder = MapBuilder::default();
/// let typed = builder.option("map.type", "user")?.into_owned();
/// assert!(typed.fluent_config().has_option("map.type"));
/// assert!(!builder.fluent_config().has_option("map.type"));
/// # Ok::<(), config_container::Error>(())
/// ```
pub trait Configurable: Clone {
    /// Returns the embedded container.
    fn fluent_config(&self) -> &FluentConfig;

    /// Returns the embedded container for editing.
    fn fluent_config_mut(&mut self) -> &mut FluentConfig;

    /// Merges `values` into the options.
    ///
    /// With [`MergeOrder::Override`] (or `false`) incoming values win on
    /// conflict; with [`MergeOrder::Preserve`] (or `true`) existing ones do.
    fn merge(&mut self, values: Options, order: impl Into<MergeOrder>) -> Fluent<'_, Self> {
        target(self).merge(values, order)
    }

    /// Removes every option named in `keys`. Unknown names are ignored.
    fn discard<I, K>(&mut self, keys: I) -> Fluent<'_, Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        target(self).discard(keys)
    }

    /// Adds or overrides a single option.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    fn option(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Fluent<'_, Self>> {
        let key = checked_key(key)?;
        Ok(target(self).put(key, value.into()))
    }

    /// Appends `value` to the slot named `key`.
    ///
    /// An absent slot becomes a one-element list; a scalar slot is first
    /// promoted to a list holding the scalar.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    fn append(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Fluent<'_, Self>> {
        let key = checked_key(key)?;
        Ok(target(self).extend_slot(key, vec![value.into()]))
    }

    /// Appends `value` followed by every element of `more`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    fn append_all<V, I>(&mut self, key: impl Into<String>, value: V, more: I) -> Result<Fluent<'_, Self>>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let key = checked_key(key)?;
        let values = std::iter::once(value).chain(more).map(Into::into).collect();
        Ok(target(self).extend_slot(key, values))
    }

    /// Pushes `values` onto the slot named `key`.
    ///
    /// Behaves like [`append_all`](Self::append_all) but accepts an empty
    /// sequence, in which case nothing is cloned or edited and
    /// [`Pushed::Nothing`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    fn push<V, I>(&mut self, key: impl Into<String>, values: I) -> Result<Pushed<'_, Self>>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let key = checked_key(key)?;
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Ok(Pushed::Nothing);
        }
        Ok(Pushed::Applied(target(self).extend_slot(key, values)))
    }

    /// Pops the last value of the slot named `key`.
    ///
    /// A list slot loses its last element and stays present even once empty.
    /// A scalar slot is removed entirely and its value returned. An absent
    /// slot yields no value.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    fn pop(&mut self, key: impl Into<String>) -> Result<Popped<'_, Self>> {
        let key = checked_key(key)?;
        Ok(target(self).take_last(&key))
    }
}

/// Resolves the instance a fluent operation edits.
fn target<T: Configurable>(this: &mut T) -> Fluent<'_, T> {
    if this.fluent_config().preserve_instance() {
        Fluent::InPlace(this)
    } else {
        Fluent::Detached(this.clone())
    }
}
