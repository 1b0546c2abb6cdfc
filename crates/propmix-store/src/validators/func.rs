use propmix_core::{PropertyError, Value};

use crate::validator::{StoreView, Validator};

type Check = dyn Fn(&StoreView<'_>, &Value) -> Result<(), String> + Send + Sync;

/// Adapts a closure into a validator, for custom and cross-field policies.
///
/// The closure returns a rejection reason on failure, which surfaces as
/// `PropertyError::Rejected`.
pub struct FnValidator {
    property: String,
    check: Box<Check>,
}

impl FnValidator {
    /// Bind `check` to `property`. An `Err(reason)` from `check` rejects the write.
    pub fn new<F>(property: impl Into<String>, check: F) -> Self
    where
        F: Fn(&StoreView<'_>, &Value) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            property: property.into(),
            check: Box::new(check),
        }
    }
}

impl Validator for FnValidator {
    fn property(&self) -> &str {
        &self.property
    }

    fn validate(&self, store: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError> {
        (self.check)(store, candidate).map_err(|reason| PropertyError::Rejected {
            name: self.property.clone(),
            reason,
        })
    }
}

impl std::fmt::Debug for FnValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnValidator")
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}
