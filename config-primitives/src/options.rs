//! Insertion-ordered option mapping.

use std::mem;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys, Values};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{OptionKey, Value};

/// Mapping from option names to values.
///
/// Iteration follows insertion order. Overwriting an existing option keeps its
/// position; removing an option shifts the ones after it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(IndexMap<OptionKey, Value>);

impl Options {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builds a mapping from name/value pairs, validating every name.
    ///
    /// Later pairs overwrite earlier pairs with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidKey`] for the first empty name encountered.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Inserts a value under an already validated name, returning the previous value.
    pub fn insert(&mut self, key: OptionKey, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Validates `key` and stores `value` under it, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidKey`] if `key` is empty.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = OptionKey::new(key)?;
        Ok(self.insert(key, value.into()))
    }

    /// Builder-style variant of [`Options::set`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidKey`] if `key` is empty.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable handle to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Returns `true` if an option named `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, preserving the order of the remaining options.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Number of options stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no options are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over name/value pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, OptionKey, Value> {
        self.0.iter()
    }

    /// Iterates over option names in insertion order.
    pub fn keys(&self) -> Keys<'_, OptionKey, Value> {
        self.0.keys()
    }

    /// Iterates over option values in insertion order.
    pub fn values(&self) -> Values<'_, OptionKey, Value> {
        self.0.values()
    }

    /// Merges `incoming` on top of the current options.
    ///
    /// Incoming values win on conflict. Existing options keep their position
    /// and options only present in `incoming` are appended in its order.
    pub fn overlay(&mut self, incoming: Options) {
        self.0.extend(incoming.0);
    }

    /// Merges `incoming` underneath the current options.
    ///
    /// Existing values win on conflict. The result lists the incoming options
    /// first, in their order, followed by options only present in `self`.
    pub fn underlay(&mut self, incoming: Options) {
        let existing = mem::replace(&mut self.0, incoming.0);
        self.0.extend(existing);
    }
}

impl FromIterator<(OptionKey, Value)> for Options {
    fn from_iter<I: IntoIterator<Item = (OptionKey, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(OptionKey, Value)> for Options {
    fn extend<I: IntoIterator<Item = (OptionKey, Value)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Options {
    type Item = (OptionKey, Value);
    type IntoIter = IntoIter<OptionKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a OptionKey, &'a Value);
    type IntoIter = Iter<'a, OptionKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
