use propmix_core::{PropertyError, Value};

use crate::validator::{StoreView, Validator};

/// Rejects any candidate that is not a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanValidator(String);

impl BooleanValidator {
    /// Bind to `property`.
    pub fn new(property: impl Into<String>) -> Self {
        Self(property.into())
    }
}

impl Validator for BooleanValidator {
    fn property(&self) -> &str {
        &self.0
    }

    fn validate(&self, _: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError> {
        match candidate {
            Value::Bool(_) => Ok(()),
            _ => Err(PropertyError::NotABoolean {
                name: self.0.clone(),
            }),
        }
    }
}
