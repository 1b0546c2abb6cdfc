use propmix_core::{PropertyError, Value};

use crate::validator::{StoreView, Validator};

/// Restricts a property to a fixed set of permitted values.
#[derive(Debug, Clone, PartialEq)]
pub struct OneOfValidator {
    property: String,
    allowed: Vec<Value>,
}

impl OneOfValidator {
    /// Bind to `property`, accepting only values equal to one of `allowed`.
    pub fn new<I, V>(property: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            property: property.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for OneOfValidator {
    fn property(&self) -> &str {
        &self.property
    }

    fn validate(&self, _: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError> {
        if self.allowed.contains(candidate) {
            Ok(())
        } else {
            Err(PropertyError::NotAllowed {
                name: self.property.clone(),
                value: candidate.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PropertyStore;

    #[test]
    fn membership() {
        let store = PropertyStore::builder()
            .bind(OneOfValidator::new("size", ["S", "M", "L"]))
            .build();
        store.set_property("size", "M").unwrap();
        assert_eq!(
            store.set_property("size", "XL"),
            Err(PropertyError::NotAllowed {
                name: "size".into(),
                value: "\"XL\"".into(),
            })
        );
        // Kind matters: 1 is not "1".
        let numeric = OneOfValidator::new("level", [1, 2, 3]);
        assert!(numeric.validate(&store.view(), &Value::from("1")).is_err());
    }
}
