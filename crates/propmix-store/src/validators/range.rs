use propmix_core::{PropertyError, Value};

use crate::validator::{StoreView, Validator};

/// Requires an integer candidate within `[min, max]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerRangeValidator {
    property: String,
    min: i64,
    max: i64,
}

impl IntegerRangeValidator {
    /// Bounds are inclusive. `min > max` rejects every integer.
    pub fn new(property: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            property: property.into(),
            min,
            max,
        }
    }
}

impl Validator for IntegerRangeValidator {
    fn property(&self) -> &str {
        &self.property
    }

    fn validate(&self, _: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError> {
        let value = candidate.as_i64().ok_or_else(|| PropertyError::NotAnInteger {
            name: self.property.clone(),
        })?;
        if value < self.min || value > self.max {
            return Err(PropertyError::OutOfRange {
                name: self.property.clone(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
