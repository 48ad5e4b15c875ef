//! Handles returned by fluent operations.

use std::ops::{Deref, DerefMut};

use config_primitives::{OptionKey, Options, Result, Value};
use tracing::{debug, trace};

use crate::configurable::{Configurable, MergeOrder};
use crate::container::{FluentConfig, checked_key};

/// Result of a fluent operation: the edited instance.
///
/// [`Fluent::InPlace`] borrows the receiver, which was edited directly.
/// [`Fluent::Detached`] owns an edited duplicate; the receiver is unchanged.
/// Both dereference to the instance, and chaining further operations on the
/// handle keeps editing that same instance.
#[derive(Debug)]
pub enum Fluent<'a, T> {
    /// The receiver itself was edited.
    InPlace(&'a mut T),
    /// An edited duplicate of the receiver.
    Detached(T),
}

impl<'a, T: Configurable> Fluent<'a, T> {
    /// Returns `true` when the handle refers to the receiver of the operation.
    #[must_use]
    pub fn is_in_place(&self) -> bool {
        matches!(self, Self::InPlace(_))
    }

    /// Returns the edited instance, cloning it if it is the receiver.
    #[must_use]
    pub fn into_owned(self) -> T {
        match self {
            Self::InPlace(this) => this.clone(),
            Self::Detached(this) => this,
        }
    }

    /// Continues the chain with [`Configurable::merge`].
    #[must_use]
    pub fn merge(self, values: Options, order: impl Into<MergeOrder>) -> Self {
        let order = order.into();
        debug!(
            incoming = values.len(),
            ?order,
            in_place = self.is_in_place(),
            "merging options"
        );
        self.edit(|config| config.merge_options(values, order))
    }

    /// Continues the chain with [`Configurable::discard`].
    #[must_use]
    pub fn discard<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let in_place = self.is_in_place();
        let mut removed = 0;
        let this = self.edit(|config| removed = config.discard_options(keys));
        debug!(removed, in_place, "discarded options");
        this
    }

    /// Continues the chain with [`Configurable::option`].
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    pub fn option(self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = checked_key(key)?;
        Ok(self.put(key, value.into()))
    }

    /// Continues the chain with [`Configurable::append`].
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    pub fn append(self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = checked_key(key)?;
        Ok(self.extend_slot(key, vec![value.into()]))
    }

    /// Continues the chain with [`Configurable::append_all`].
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    pub fn append_all<V, I>(self, key: impl Into<String>, value: V, more: I) -> Result<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let key = checked_key(key)?;
        let values = std::iter::once(value).chain(more).map(Into::into).collect();
        Ok(self.extend_slot(key, values))
    }

    pub(crate) fn put(self, key: OptionKey, value: Value) -> Self {
        trace!(%key, in_place = self.is_in_place(), "option applied");
        self.edit(|config| config.put_option(key, value))
    }

    pub(crate) fn extend_slot(self, key: OptionKey, values: Vec<Value>) -> Self {
        trace!(
            %key,
            appended = values.len(),
            in_place = self.is_in_place(),
            "values appended"
        );
        self.edit(|config| config.append_values(key, values))
    }

    pub(crate) fn take_last(mut self, key: &OptionKey) -> Popped<'a, T> {
        let value = self.fluent_config_mut().pop_value(key.as_str());
        trace!(
            %key,
            found = value.is_some(),
            in_place = self.is_in_place(),
            "value popped"
        );
        Popped {
            value,
            config: self,
        }
    }

    fn edit(mut self, apply: impl FnOnce(&mut FluentConfig)) -> Self {
        apply(self.fluent_config_mut());
        self
    }
}

impl<T> Deref for Fluent<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Self::InPlace(this) => this,
            Self::Detached(this) => this,
        }
    }
}

impl<T> DerefMut for Fluent<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self {
            Self::InPlace(this) => this,
            Self::Detached(this) => this,
        }
    }
}

/// Result of [`Configurable::push`].
#[derive(Debug)]
pub enum Pushed<'a, T> {
    /// No values were supplied; nothing was cloned or edited.
    Nothing,
    /// Values were pushed onto the returned instance.
    Applied(Fluent<'a, T>),
}

impl<'a, T> Pushed<'a, T> {
    /// Returns `true` when the push was a no-op.
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the edited instance, if any values were pushed.
    #[must_use]
    pub fn into_fluent(self) -> Option<Fluent<'a, T>> {
        match self {
            Self::Nothing => None,
            Self::Applied(fluent) => Some(fluent),
        }
    }
}

/// Result of [`Configurable::pop`]: the popped value and the instance it was
/// taken from.
#[derive(Debug)]
pub struct Popped<'a, T> {
    value: Option<Value>,
    config: Fluent<'a, T>,
}

impl<'a, T> Popped<'a, T> {
    /// Returns the popped value, or `None` when there was nothing to pop.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Consumes the result, keeping only the popped value.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    /// Returns the instance the value was popped from.
    #[must_use]
    pub fn config(&self) -> &Fluent<'a, T> {
        &self.config
    }

    /// Splits the result into the popped value and the edited instance.
    #[must_use]
    pub fn into_parts(self) -> (Option<Value>, Fluent<'a, T>) {
        (self.value, self.config)
    }
}
