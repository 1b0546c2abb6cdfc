//! # Value Conversions
//!
//! `FromValue` converts a stored [`Value`] into a concrete Rust type. A
//! conversion returning `None` is reported by the store as
//! `PropertyError::CannotAssign`.
//!
//! Conversions are strict per kind: a `Str` never becomes an integer and an
//! `Int` never becomes a `bool`. Integers are range-checked against the
//! receiver type, so `300` does not fit a `u8`. Likewise a finite float too
//! large for an `f32` does not fit one.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::value::Value;

/// A type a stored [`Value`] can be assigned into.
pub trait FromValue: Sized {
    /// Convert `value`, or return `None` if its kind does not fit `Self`.
    fn from_value(value: &Value) -> Option<Self>;
}

/// Accepts any stored value, like an untyped receiver.
impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

macro_rules! impl_from_value_int {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    value.as_i64().and_then(|i| <$t>::try_from(i).ok())
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        let f = value.as_f64()?;
        let narrowed = f as f32;
        if f.is_finite() && !narrowed.is_finite() {
            return None;
        }
        Some(narrowed)
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Map(entries) => entries
                .iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k.clone(), v)))
                .collect(),
            _ => None,
        }
    }
}

/// `Null` becomes `None`; anything else must convert to `T`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Receiver for struct values stored with [`Value::from_serialize`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the decoded value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> FromValue for Json<T> {
    fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.to_json()).ok().map(Json)
    }
}
