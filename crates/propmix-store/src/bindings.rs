//! # Validator Bindings
//!
//! The registry mapping each property name to its ordered validator chain.
//! It is assembled once, when the store is constructed, and offers no way to
//! add or remove validators afterwards: bindings describe a fixed schema.

use std::collections::HashMap;
use std::sync::Arc;

use crate::validator::Validator;

/// Immutable name → validator-chain mapping.
#[derive(Clone, Default)]
pub struct ValidatorBindings {
    by_property: HashMap<String, Vec<Arc<dyn Validator>>>,
}

impl ValidatorBindings {
    /// Build bindings from validators in the order they should run.
    ///
    /// Several validators may target the same property; they are invoked in
    /// the order supplied here.
    pub fn new<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Validator>>,
    {
        let mut by_property: HashMap<String, Vec<Arc<dyn Validator>>> = HashMap::new();
        for validator in validators {
            by_property
                .entry(validator.property().to_string())
                .or_default()
                .push(validator);
        }
        Self { by_property }
    }

    /// The validator chain for `property`, empty if none is bound.
    pub fn for_property(&self, property: &str) -> &[Arc<dyn Validator>] {
        self.by_property
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if at least one validator gates `property`.
    pub fn is_bound(&self, property: &str) -> bool {
        self.by_property.contains_key(property)
    }

    /// Number of distinct bound properties.
    pub fn len(&self) -> usize {
        self.by_property.len()
    }

    /// True if no validators are bound.
    pub fn is_empty(&self) -> bool {
        self.by_property.is_empty()
    }
}

impl<V: Validator + 'static> FromIterator<V> for ValidatorBindings {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|v| Arc::new(v) as Arc<dyn Validator>))
    }
}

impl std::fmt::Debug for ValidatorBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<(&str, usize)> = self
            .by_property
            .iter()
            .map(|(name, chain)| (name.as_str(), chain.len()))
            .collect();
        names.sort_unstable();
        f.debug_map().entries(names).finish()
    }
}
