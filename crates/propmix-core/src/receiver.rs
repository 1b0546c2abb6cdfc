//! # Receivers — Out-Parameters for Property Reads
//!
//! A read assigns the stored value into a caller-provided receiver. A
//! receiver is either `&mut T` or `Option<&mut T>`, where `None` plays the
//! role of a null out-parameter and is rejected with
//! `PropertyError::NotAPointer` before the store is consulted.
//!
//! Conversion failures surface as `PropertyError::CannotAssign`. This also
//! covers a `FromValue` implementation that panics: the panic is caught here
//! and never unwinds through the store.

use std::any::type_name;
use std::panic::{self, AssertUnwindSafe};

use crate::convert::FromValue;
use crate::error::PropertyError;
use crate::value::Value;

/// An assignable target for a property read.
pub trait Receiver {
    /// False for a null receiver.
    fn is_assignable(&self) -> bool;

    /// Assign `value`, read from property `name`, into the receiver.
    ///
    /// # Errors
    ///
    /// `NotAPointer` for a null receiver, `CannotAssign` if the value does
    /// not convert to the receiver's type.
    fn assign(self, name: &str, value: &Value) -> Result<(), PropertyError>;
}

impl<T: FromValue> Receiver for &mut T {
    fn is_assignable(&self) -> bool {
        true
    }

    fn assign(self, name: &str, value: &Value) -> Result<(), PropertyError> {
        *self = convert_value(name, value)?;
        Ok(())
    }
}

impl<T: FromValue> Receiver for Option<&mut T> {
    fn is_assignable(&self) -> bool {
        self.is_some()
    }

    fn assign(self, name: &str, value: &Value) -> Result<(), PropertyError> {
        match self {
            Some(target) => target.assign(name, value),
            None => Err(PropertyError::NotAPointer),
        }
    }
}

/// Convert the value stored under `name` into `T`.
///
/// # Errors
///
/// Returns `PropertyError::CannotAssign` if the conversion yields `None` or
/// panics.
pub fn convert_value<T: FromValue>(name: &str, value: &Value) -> Result<T, PropertyError> {
    let cannot_assign = || PropertyError::CannotAssign {
        name: name.to_string(),
        stored: value.kind(),
        target: type_name::<T>(),
    };
    match panic::catch_unwind(AssertUnwindSafe(|| T::from_value(value))) {
        Ok(Some(converted)) => Ok(converted),
        Ok(None) => Err(cannot_assign()),
        Err(_) => {
            tracing::warn!(
                property = name,
                target = type_name::<T>(),
                "value conversion panicked; reporting as unassignable"
            );
            Err(cannot_assign())
        }
    }
}
