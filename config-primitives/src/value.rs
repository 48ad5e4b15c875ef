//! Option values.

use serde::{Deserialize, Serialize};

/// Value stored under an option name.
///
/// A slot holds either a scalar or a list of values. Queue operations rely on
/// the distinction: appending to a scalar first promotes it into a
/// single-element list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Explicitly empty value. Distinct from an absent option.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Ordered list of values, possibly nested.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` when the value is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` when the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the list elements when the value is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a mutable handle to the list when the value is a list.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text when the value is [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer when the value is [`Value::Int`].
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number when the value is numeric.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the flag when the value is [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Converts the value into a list.
    ///
    /// Lists are returned unchanged; any other value becomes the single
    /// element of a new list.
    #[must_use]
    pub fn into_list(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            scalar => vec![scalar],
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_promotes_to_single_element_list() {
        assert_eq!(Value::from("first").into_list(), vec![Value::from("first")]);
        assert_eq!(Value::Null.into_list(), vec![Value::Null]);
    }

    #[test]
    fn list_stays_list() {
        let list = Value::from(vec!["a", "b"]);
        assert!(list.is_list());
        assert_eq!(list.into_list(), vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn nested_lists_are_values() {
        let nested = Value::List(vec![Value::from(1), Value::from(vec![2, 3])]);
        let items = nested.as_list().expect("list");
        assert_eq!(items[1].as_list().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(100).as_i64(), Some(100));
        assert_eq!(Value::from(2.35).as_f64(), Some(2.35));
        assert_eq!(Value::from("config").as_str(), Some("config"));
        assert!(Value::from(None::<i32>).is_null());
    }

    #[test]
    fn untagged_serde_shape() {
        let value = Value::from(vec![Value::from(1), Value::from("x"), Value::Null]);
        let json = serde_json::to_string(&value).expect("serialize");
        assert_eq!(json, r#"[1,"x",null]"#);
        let back: Value = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, value);
    }
}
