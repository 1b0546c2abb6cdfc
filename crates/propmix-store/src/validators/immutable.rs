use propmix_core::{PropertyError, Value};

use crate::validator::{StoreView, Validator};

/// Permits the first write to a property and rejects every later one,
/// whatever the candidate value.
///
/// The check reads the property back through the store view: only a
/// `NotAvailable` lookup lets the write through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableValidator(String);

impl ImmutableValidator {
    /// Bind to `property`. The first successful write under it is final.
    pub fn new(property: impl Into<String>) -> Self {
        Self(property.into())
    }
}

impl Validator for ImmutableValidator {
    fn property(&self) -> &str {
        &self.0
    }

    fn validate(&self, store: &StoreView<'_>, _: &Value) -> Result<(), PropertyError> {
        let mut existing = Value::Null;
        match store.get_property(&self.0, &mut existing) {
            Err(err) if err.is_not_available() => Ok(()),
            _ => Err(PropertyError::Immutable {
                name: self.0.clone(),
            }),
        }
    }
}
