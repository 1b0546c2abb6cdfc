//! # Serialization Views
//!
//! A store is rendered as a JSON object mapping property names to values.
//! This view backs display (`Serialize`), embedding into larger documents
//! (`to_json_object`), and column storage (`to_column_value` /
//! `load_column_value`).
//!
//! Object keys are emitted in sorted order so the same store always renders
//! to the same bytes.
//!
//! Loading a column payload runs every entry through the same checks as
//! `set_property`, so restored data is gated by the same validators as live
//! writes. A load commits all of its entries or none of them.

use std::collections::BTreeMap;

use propmix_core::{PropertyError, Value};
use serde::{Serialize, Serializer};

use crate::store::PropertyStore;

impl PropertyStore {
    /// All current properties as a JSON object.
    pub fn to_json_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.sorted_snapshot()
            .into_iter()
            .map(|(name, value)| (name, value.to_json()))
            .collect()
    }

    /// JSON bytes of all current properties, for storage in a single column.
    ///
    /// # Errors
    ///
    /// `PropertyError::Serialization` if encoding fails.
    pub fn to_column_value(&self) -> Result<Vec<u8>, PropertyError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Apply a payload produced by [`Self::to_column_value`] to this store.
    ///
    /// Every entry is validated, in sorted name order, against the store as
    /// it is before the load. Only when all entries pass are they committed;
    /// otherwise the store is left unchanged and the first failure is
    /// returned.
    ///
    /// # Errors
    ///
    /// - `PropertyError::Serialization` if `bytes` is not a JSON object.
    /// - Any validator error raised by an entry.
    pub fn load_column_value(&self, bytes: &[u8]) -> Result<(), PropertyError> {
        let payload: serde_json::Value = serde_json::from_slice(bytes)?;
        let entries: BTreeMap<String, Value> = match payload {
            serde_json::Value::Object(entries) => entries
                .into_iter()
                .map(|(name, value)| (name, Value::from(value)))
                .collect(),
            other => {
                return Err(PropertyError::Serialization(format!(
                    "expected a JSON object of properties, found {}",
                    Value::from(other).kind()
                )))
            }
        };
        tracing::debug!(entries = entries.len(), "loading properties from column value");
        for (name, value) in &entries {
            self.validate_write(name, value)?;
        }
        self.commit_all(entries);
        Ok(())
    }

    fn sorted_snapshot(&self) -> BTreeMap<String, Value> {
        self.snapshot().into_iter().collect()
    }
}

impl Serialize for PropertyStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sorted_snapshot().serialize(serializer)
    }
}
