//! The configuration container.

use std::mem;

use config_primitives::{OptionKey, Options, Result, Value};
use tracing::{debug, trace};

use crate::configurable::{Configurable, MergeOrder};

/// Mapping from option names to values with a copy-on-write policy.
///
/// The raw accessors ([`set_config`](Self::set_config),
/// [`set_option`](Self::set_option)) always edit the receiver. The fluent
/// operations provided by [`Configurable`] consult
/// [`preserve_instance`](Self::preserve_instance): when set they edit the
/// receiver and hand it back, otherwise they edit and return a duplicate.
///
/// # Examples
///
/// ```
/// use config_container::{Configurable, FluentConfig, Value};
///
/// let mut base = FluentConfig::new();
/// base.set_option("x", 1)?;
///
/// let derived = base.option("y", 2)?.into_owned();
/// assert!(!base.has_option("y"));
/// assert_eq!(derived.get_option("y")?, Some(&Value::from(2)));
/// # Ok::<(), config_container::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FluentConfig {
    options: Options,
    preserve_instance: bool,
}

impl FluentConfig {
    /// Creates an empty container that duplicates itself on fluent edits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container holding `options`.
    #[must_use]
    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            preserve_instance: false,
        }
    }

    /// Starts building a container.
    #[must_use]
    pub fn builder() -> FluentConfigBuilder {
        FluentConfigBuilder {
            options: Options::new(),
            preserve_instance: false,
        }
    }

    /// Returns `true` when fluent operations edit the receiver in place.
    #[must_use]
    pub const fn preserve_instance(&self) -> bool {
        self.preserve_instance
    }

    /// Switches between in-place and copy-on-write fluent edits.
    pub fn set_preserve_instance(&mut self, preserve_instance: bool) {
        self.preserve_instance = preserve_instance;
    }

    /// Builder-style variant of [`set_preserve_instance`](Self::set_preserve_instance).
    #[must_use]
    pub fn with_preserve_instance(mut self, preserve_instance: bool) -> Self {
        self.preserve_instance = preserve_instance;
        self
    }

    /// Replaces every option. Always edits the receiver.
    pub fn set_config(&mut self, options: Options) {
        debug!(options = options.len(), "configuration replaced");
        self.options = options;
    }

    /// Returns the current options.
    #[must_use]
    pub fn config(&self) -> &Options {
        &self.options
    }

    /// Consumes the container, returning its options.
    #[must_use]
    pub fn into_options(self) -> Options {
        self.options
    }

    /// Stores `value` under `key`. Always edits the receiver.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty; the
    /// container is left untouched.
    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = checked_key(key)?;
        trace!(%key, "option set");
        self.options.insert(key, value.into());
        Ok(())
    }

    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    pub fn get_option(&self, key: &str) -> Result<Option<&Value>> {
        OptionKey::validate(key).inspect_err(|err| debug!(%err, "rejected option name"))?;
        Ok(self.options.get(key))
    }

    /// Returns `true` if an option named `key` is present.
    ///
    /// Never fails: an empty name is simply never present.
    #[must_use]
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub(crate) fn merge_options(&mut self, values: Options, order: MergeOrder) {
        match order {
            MergeOrder::Override => self.options.overlay(values),
            MergeOrder::Preserve => self.options.underlay(values),
        }
    }

    pub(crate) fn discard_options<I, K>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        keys.into_iter()
            .filter(|key| self.options.remove(key.as_ref()).is_some())
            .count()
    }

    pub(crate) fn put_option(&mut self, key: OptionKey, value: Value) {
        self.options.insert(key, value);
    }

    /// Appends `values` to the slot named `key`, promoting a scalar to a list.
    pub(crate) fn append_values(&mut self, key: OptionKey, values: Vec<Value>) {
        match self.options.get_mut(key.as_str()) {
            Some(slot) => {
                let mut items = mem::take(slot).into_list();
                items.extend(values);
                *slot = Value::List(items);
            }
            None => {
                self.options.insert(key, Value::List(values));
            }
        }
    }

    /// Removes the last list element, or the whole option when it holds a scalar.
    ///
    /// An exhausted list stays behind as an empty list.
    pub(crate) fn pop_value(&mut self, key: &str) -> Option<Value> {
        if self.options.get(key)?.is_list() {
            self.options
                .get_mut(key)
                .and_then(Value::as_list_mut)
                .and_then(Vec::pop)
        } else {
            self.options.remove(key)
        }
    }
}

impl Configurable for FluentConfig {
    fn fluent_config(&self) -> &FluentConfig {
        self
    }

    fn fluent_config_mut(&mut self) -> &mut FluentConfig {
        self
    }
}

impl From<Options> for FluentConfig {
    fn from(options: Options) -> Self {
        Self::from_options(options)
    }
}

pub(crate) fn checked_key(key: impl Into<String>) -> Result<OptionKey> {
    OptionKey::new(key).inspect_err(|err| debug!(%err, "rejected option name"))
}

/// Builder for [`FluentConfig`].
#[derive(Debug)]
pub struct FluentConfigBuilder {
    options: Options,
    preserve_instance: bool,
}

impl FluentConfigBuilder {
    /// Sets whether fluent operations edit the container in place.
    #[must_use]
    pub fn preserve_instance(mut self, preserve_instance: bool) -> Self {
        self.preserve_instance = preserve_instance;
        self
    }

    /// Adds a single initial option.
    ///
    /// # Errors
    ///
    /// Returns [`config_primitives::Error::InvalidKey`] if `key` is empty.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        self.options.set(key, value)?;
        Ok(self)
    }

    /// Adds initial options, overriding earlier ones with the same name.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options.overlay(options);
        self
    }

    /// Finalises the container.
    #[must_use]
    pub fn build(self) -> FluentConfig {
        FluentConfig {
            options: self.options,
            preserve_instance: self.preserve_instance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> FluentConfig {
        FluentConfig::builder().option("a", 1).expect("option").build()
    }

    #[test]
    fn set_option_is_visible_to_get_and_has() {
        let mut config = fixture();
        config.set_option("boolean_val", true).unwrap();
        config.set_option("int_val", 100).unwrap();
        config.set_option("float_val", 2.35).unwrap();
        config.set_option("str_val", "config").unwrap();

        assert!(config.has_option("boolean_val"));
        assert_eq!(config.get_option("boolean_val").unwrap(), Some(&Value::Bool(true)));
        assert_eq!(config.get_option("int_val").unwrap(), Some(&Value::Int(100)));
        assert_eq!(config.get_option("float_val").unwrap(), Some(&Value::Float(2.35)));
        assert_eq!(
            config.get_option("str_val").unwrap().and_then(Value::as_str),
            Some("config")
        );
    }

    #[test]
    fn absent_option_is_none() {
        let config = fixture();
        assert_eq!(config.get_option("b").unwrap(), None);
        assert!(!config.has_option("not_available"));
    }

    #[test]
    fn empty_name_is_rejected_without_mutation() {
        let mut config = fixture();
        let before = config.clone();

        assert!(config.set_option("", true).is_err());
        assert!(config.get_option("").is_err());
        assert!(!config.has_option(""));
        assert_eq!(config, before);
    }

    #[test]
    fn raw_setters_ignore_preserve_policy() {
        let mut config = fixture();
        assert!(!config.preserve_instance());

        config.set_option("b", 2).unwrap();
        assert!(config.has_option("b"));

        config.set_config(Options::from_pairs([("z", 3)]).unwrap());
        assert!(!config.has_option("a"));
        assert_eq!(config.config().len(), 1);
    }

    #[test]
    fn pop_scalar_removes_option() {
        let mut config = fixture();
        assert_eq!(config.pop_value("a"), Some(Value::from(1)));
        assert!(!config.has_option("a"));
        assert_eq!(config.pop_value("a"), None);
    }

    #[test]
    fn pop_exhausted_list_leaves_empty_list() {
        let mut config = FluentConfig::new();
        config.append_values(OptionKey::new("queue").unwrap(), vec![Value::from("only")]);

        assert_eq!(config.pop_value("queue"), Some(Value::from("only")));
        assert_eq!(config.get_option("queue").unwrap(), Some(&Value::List(Vec::new())));
        assert_eq!(config.pop_value("queue"), None);
    }

    #[test]
    fn discard_counts_removed_options() {
        let mut config = FluentConfig::from(Options::from_pairs([("x", 1), ("y", 2)]).unwrap());
        assert_eq!(config.discard_options(["x", "missing"]), 1);
        assert_eq!(config.config().len(), 1);
    }

    #[test]
    fn builder_sets_policy() {
        let config = FluentConfig::builder()
            .preserve_instance(true)
            .options(Options::from_pairs([("x", 1)]).unwrap())
            .build();
        assert!(config.preserve_instance());
        assert!(config.has_option("x"));
        assert!(!FluentConfig::new().with_preserve_instance(false).preserve_instance());
    }
}
