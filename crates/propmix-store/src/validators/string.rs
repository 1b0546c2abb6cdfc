use propmix_core::{PropertyError, Value};

use crate::validator::{StoreView, Validator};

/// Rejects any candidate that is not a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringValidator(String);

impl StringValidator {
    /// Bind to `property`.
    pub fn new(property: impl Into<String>) -> Self {
        Self(property.into())
    }
}

impl Validator for StringValidator {
    fn property(&self) -> &str {
        &self.0
    }

    fn validate(&self, _: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError> {
        match candidate {
            Value::Str(_) => Ok(()),
            _ => Err(PropertyError::NotAString {
                name: self.0.clone(),
            }),
        }
    }
}
