//! # Error Types — Property Error Taxonomy
//!
//! Every failure a property store can report, as a single `thiserror` enum.
//!
//! ## Kinds
//!
//! - **Lookup** (`NotAvailable`): the name was never set. Recoverable;
//!   callers usually fall back to a default.
//! - **Receiver** (`NotAPointer`, `CannotAssign`): the caller handed in a
//!   null receiver or one whose type cannot hold the stored value. These are
//!   programmer errors and are never retried.
//! - **Validation** (`NotABoolean`, `NotAString`, `Immutable`, ...): produced
//!   by a validator bound to the name. The store is left unchanged and the
//!   caller may retry with a corrected value.
//! - **Store** (`EmptyName`, `Serialization`): structural failures raised by
//!   the store itself.

use thiserror::Error;

use crate::value::ValueKind;

/// Error returned by property reads, writes, and serialization adapters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// The requested property has never been set.
    #[error("property {name:?} is not available")]
    NotAvailable {
        /// The property that was looked up.
        name: String,
    },

    /// The receiver is null and cannot be assigned to.
    #[error("receiver is not a pointer")]
    NotAPointer,

    /// The stored value cannot be assigned to the provided receiver.
    #[error("cannot assign {stored} value of property {name:?} to a receiver of type {target}")]
    CannotAssign {
        /// The property that was read.
        name: String,
        /// Kind of the stored value.
        stored: ValueKind,
        /// Rust type name of the receiver.
        target: &'static str,
    },

    /// The candidate value is not a boolean.
    #[error("value for property {name:?} is not a boolean")]
    NotABoolean {
        /// The property being written.
        name: String,
    },

    /// The candidate value is not a string.
    #[error("value for property {name:?} is not a string")]
    NotAString {
        /// The property being written.
        name: String,
    },

    /// The property already holds a value and cannot be changed.
    #[error("value of property {name:?} cannot be changed")]
    Immutable {
        /// The property being written.
        name: String,
    },

    /// The candidate value is not an integer.
    #[error("value for property {name:?} is not an integer")]
    NotAnInteger {
        /// The property being written.
        name: String,
    },

    /// The candidate integer falls outside the permitted inclusive range.
    #[error("value {value} for property {name:?} is outside [{min}, {max}]")]
    OutOfRange {
        /// The property being written.
        name: String,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// The candidate value is not one of the permitted values.
    #[error("value {value} is not allowed for property {name:?}")]
    NotAllowed {
        /// The property being written.
        name: String,
        /// JSON rendering of the rejected value.
        value: String,
    },

    /// A custom validator rejected the candidate value.
    #[error("value for property {name:?} rejected: {reason}")]
    Rejected {
        /// The property being written.
        name: String,
        /// Human-readable rejection reason.
        reason: String,
    },

    /// Property names must be non-empty.
    #[error("property name must not be empty")]
    EmptyName,

    /// Encoding or decoding a serialized store failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PropertyError {
    /// True if the property was simply never set.
    pub fn is_not_available(&self) -> bool {
        matches!(self, Self::NotAvailable { .. })
    }

    /// True if the error came from a validator rejecting a write.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::NotABoolean { .. }
                | Self::NotAString { .. }
                | Self::Immutable { .. }
                | Self::NotAnInteger { .. }
                | Self::OutOfRange { .. }
                | Self::NotAllowed { .. }
                | Self::Rejected { .. }
        )
    }

    /// The property name the error refers to, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::NotAvailable { name }
            | Self::CannotAssign { name, .. }
            | Self::NotABoolean { name }
            | Self::NotAString { name }
            | Self::Immutable { name }
            | Self::NotAnInteger { name }
            | Self::OutOfRange { name, .. }
            | Self::NotAllowed { name, .. }
            | Self::Rejected { name, .. } => Some(name),
            Self::NotAPointer | Self::EmptyName | Self::Serialization(_) => None,
        }
    }
}

impl From<serde_json::Error> for PropertyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_is_recoverable_not_validation() {
        let err = PropertyError::NotAvailable {
            name: "color".to_string(),
        };
        assert!(err.is_not_available());
        assert!(!err.is_validation_failure());
        assert_eq!(err.property(), Some("color"));
    }

    #[test]
    fn validation_kinds_are_classified() {
        let errs = [
            PropertyError::NotABoolean { name: "a".into() },
            PropertyError::NotAString { name: "a".into() },
            PropertyError::Immutable { name: "a".into() },
            PropertyError::NotAnInteger { name: "a".into() },
            PropertyError::OutOfRange {
                name: "a".into(),
                value: 11,
                min: 0,
                max: 10,
            },
            PropertyError::NotAllowed {
                name: "a".into(),
                value: "\"x\"".into(),
            },
            PropertyError::Rejected {
                name: "a".into(),
                reason: "nope".into(),
            },
        ];
        for err in &errs {
            assert!(err.is_validation_failure(), "{err} should be a validation failure");
            assert!(!err.is_not_available());
        }
    }

    #[test]
    fn receiver_errors_are_not_validation_failures() {
        assert!(!PropertyError::NotAPointer.is_validation_failure());
        let err = PropertyError::CannotAssign {
            name: "n".into(),
            stored: ValueKind::Str,
            target: "i64",
        };
        assert!(!err.is_validation_failure());
        assert_eq!(
            err.to_string(),
            "cannot assign string value of property \"n\" to a receiver of type i64"
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            PropertyError::Immutable { name: "id".into() }.to_string(),
            "value of property \"id\" cannot be changed"
        );
        assert_eq!(PropertyError::NotAPointer.to_string(), "receiver is not a pointer");
        assert_eq!(
            PropertyError::EmptyName.to_string(),
            "property name must not be empty"
        );
    }

    #[test]
    fn serde_json_errors_convert_to_serialization() {
        let err: PropertyError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, PropertyError::Serialization(_)));
        assert_eq!(err.property(), None);
    }
}
