//! # Property Store
//!
//! `PropertyStore` owns the name → value map behind a single
//! `parking_lot::Mutex` and the [`ValidatorBindings`] consulted on every
//! write.
//!
//! ## Locking
//!
//! The lock is held only for the map access of a single call. The validator
//! chain of `set_property` runs with the lock released, so a validator that
//! reads the same store re-acquires it independently. Reads clone the value
//! out of the map and convert it after the lock is dropped.
//!
//! A write that passes validation is committed unconditionally; two writers
//! racing on the same name may both pass validation against the same prior
//! state, and the later commit wins.
//!
//! ## Enumeration
//!
//! `range` snapshots the map under the lock and visits the snapshot with the
//! lock released. A visitor may therefore read or write the store it is
//! enumerating; writes made during the visit are not observed by it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use propmix_core::{convert_value, FromValue, PropertyError, Receiver, Value};

use crate::bindings::ValidatorBindings;
use crate::validator::{StoreView, Validator};

/// Thread-safe property store with per-name validation.
///
/// `PropertyStore` is `Send + Sync`; share it across threads with `Arc`.
#[derive(Debug, Default)]
pub struct PropertyStore {
    storage: Mutex<HashMap<String, Value>>,
    bindings: ValidatorBindings,
}

impl PropertyStore {
    /// Create an empty store gated by `bindings`.
    pub fn new(bindings: ValidatorBindings) -> Self {
        Self {
            storage: Mutex::new(HashMap::new()),
            bindings,
        }
    }

    /// Create an empty store from a list of validators, in invocation order.
    pub fn with_validators<I>(validators: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Validator>>,
    {
        Self::new(ValidatorBindings::new(validators))
    }

    /// Start assembling a store's validator bindings.
    pub fn builder() -> PropertyStoreBuilder {
        PropertyStoreBuilder::default()
    }

    /// The bindings this store was constructed with.
    pub fn bindings(&self) -> &ValidatorBindings {
        &self.bindings
    }

    /// Read-only handle onto this store.
    pub fn view(&self) -> StoreView<'_> {
        StoreView::new(self)
    }

    /// Assign the value stored under `name` into `recv`.
    ///
    /// The receiver is checked before the lookup, so a null receiver yields
    /// `NotAPointer` whether or not `name` exists.
    ///
    /// # Errors
    ///
    /// - `NotAPointer` if `recv` is `None`.
    /// - `NotAvailable` if `name` was never set.
    /// - `CannotAssign` if the stored value does not fit the receiver type.
    pub fn get_property<R: Receiver>(&self, name: &str, recv: R) -> Result<(), PropertyError> {
        if !recv.is_assignable() {
            return Err(PropertyError::NotAPointer);
        }
        let value = self.lookup(name)?;
        recv.assign(name, &value)
    }

    /// Read the value stored under `name` as `T`.
    ///
    /// # Errors
    ///
    /// `NotAvailable` or `CannotAssign`, as for [`Self::get_property`].
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, PropertyError> {
        let value = self.lookup(name)?;
        convert_value(name, &value)
    }

    /// Store `value` under `name`, replacing any previous value.
    ///
    /// Every validator bound to `name` runs first, in binding order, against
    /// the store as it is before this write. The first rejection aborts the
    /// write and is returned unchanged.
    ///
    /// # Errors
    ///
    /// `EmptyName` for `""`, otherwise the first validator error.
    pub fn set_property(&self, name: &str, value: impl Into<Value>) -> Result<(), PropertyError> {
        let value = value.into();
        self.validate_write(name, &value)?;

        let previous = self.storage.lock().insert(name.to_string(), value);
        tracing::trace!(property = name, replaced = previous.is_some(), "property committed");
        Ok(())
    }

    /// Run the checks `set_property` applies to a write, without committing.
    pub(crate) fn validate_write(&self, name: &str, value: &Value) -> Result<(), PropertyError> {
        if name.is_empty() {
            return Err(PropertyError::EmptyName);
        }
        let view = self.view();
        for validator in self.bindings.for_property(name) {
            if let Err(err) = validator.validate(&view, value) {
                tracing::debug!(property = name, error = %err, "validator rejected property write");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Commit already-validated entries under a single lock acquisition.
    pub(crate) fn commit_all(&self, entries: impl IntoIterator<Item = (String, Value)>) {
        let mut storage = self.storage.lock();
        for (name, value) in entries {
            storage.insert(name, value);
        }
    }

    /// Visit every stored property until `visit` returns `false`.
    ///
    /// Order is unspecified. The visitor sees a snapshot taken at the start
    /// of the call.
    pub fn range<F>(&self, mut visit: F)
    where
        F: FnMut(&str, &Value) -> bool,
    {
        for (name, value) in self.snapshot() {
            if !visit(&name, &value) {
                break;
            }
        }
    }

    /// True if `name` has been set.
    pub fn contains(&self, name: &str) -> bool {
        self.storage.lock().contains_key(name)
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.storage.lock().len()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all stored properties, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.storage.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Copy of every stored (name, value) pair.
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.storage
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<Value, PropertyError> {
        self.storage
            .lock()
            .get(name)
            .cloned()
            .ok_or_else(|| PropertyError::NotAvailable {
                name: name.to_string(),
            })
    }
}

/// Collects validators for a [`PropertyStore`].
#[derive(Default)]
pub struct PropertyStoreBuilder {
    validators: Vec<Arc<dyn Validator>>,
}

impl PropertyStoreBuilder {
    /// Append a validator. Validators for the same property run in the order
    /// they were bound.
    pub fn bind<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Finish construction. The bindings are frozen from here on.
    pub fn build(self) -> PropertyStore {
        PropertyStore::with_validators(self.validators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{BooleanValidator, ImmutableValidator, StringValidator};
    use propmix_core::ValueKind;

    fn store_with_foo_and_answer() -> PropertyStore {
        let store = PropertyStore::default();
        store.set_property("foo", "bar").unwrap();
        store.set_property("answer", 42).unwrap();
        store
    }

    #[test]
    fn set_stores_values() {
        let store = store_with_foo_and_answer();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get::<String>("foo").unwrap(), "bar");
        assert_eq!(store.get::<i64>("answer").unwrap(), 42);
    }

    #[test]
    fn get_missing_is_not_available() {
        let store = store_with_foo_and_answer();
        let mut s = String::new();
        assert_eq!(
            store.get_property("bar", &mut s),
            Err(PropertyError::NotAvailable { name: "bar".into() })
        );
    }

    #[test]
    fn null_receiver_is_not_a_pointer_even_when_missing() {
        let store = store_with_foo_and_answer();
        assert_eq!(
            store.get_property("foo", None::<&mut String>),
            Err(PropertyError::NotAPointer)
        );
        assert_eq!(
            store.get_property("missing", None::<&mut String>),
            Err(PropertyError::NotAPointer)
        );
    }

    #[test]
    fn incompatible_receiver_cannot_assign() {
        let store = store_with_foo_and_answer();
        let mut num = 0i64;
        let err = store.get_property("foo", &mut num).unwrap_err();
        assert_eq!(
            err,
            PropertyError::CannotAssign {
                name: "foo".into(),
                stored: ValueKind::Str,
                target: "i64",
            }
        );
        assert_eq!(num, 0);
    }

    #[test]
    fn compatible_receivers_get_values() {
        let store = store_with_foo_and_answer();
        let mut s = String::new();
        let mut n = 0i32;
        store.get_property("foo", &mut s).unwrap();
        store.get_property("answer", Some(&mut n)).unwrap();
        assert_eq!(s, "bar");
        assert_eq!(n, 42);
    }

    #[test]
    fn float_too_large_for_f32_receiver_cannot_assign() {
        let store = PropertyStore::default();
        store.set_property("big", 1e300).unwrap();
        let mut narrow = 0f32;
        assert_eq!(
            store.get_property("big", &mut narrow),
            Err(PropertyError::CannotAssign {
                name: "big".into(),
                stored: ValueKind::Float,
                target: "f32",
            })
        );
        assert_eq!(narrow, 0.0);
        assert_eq!(store.get::<f64>("big").unwrap(), 1e300);
    }

    #[test]
    fn wide_integers_are_written_through_try_from() {
        let store = PropertyStore::default();
        store
            .set_property("count", Value::try_from(7usize).unwrap())
            .unwrap();
        assert_eq!(store.get::<usize>("count").unwrap(), 7);
        assert!(Value::try_from(u64::MAX).is_err());
    }

    #[test]
    fn set_overwrites_unbound_names() {
        let store = PropertyStore::default();
        store.set_property("k", 1).unwrap();
        store.set_property("k", "now a string").unwrap();
        assert_eq!(store.get::<String>("k").unwrap(), "now a string");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_name_rejected() {
        let store = PropertyStore::default();
        assert_eq!(store.set_property("", true), Err(PropertyError::EmptyName));
        assert!(store.is_empty());
    }

    #[test]
    fn first_failing_validator_wins() {
        let store = PropertyStore::builder()
            .bind(StringValidator::new("title"))
            .bind(ImmutableValidator::new("title"))
            .build();
        store.set_property("title", "first").unwrap();
        // Both validators reject this; the string check is bound first.
        assert_eq!(
            store.set_property("title", 7),
            Err(PropertyError::NotAString { name: "title".into() })
        );
        assert_eq!(
            store.set_property("title", "second"),
            Err(PropertyError::Immutable { name: "title".into() })
        );
        assert_eq!(store.get::<String>("title").unwrap(), "first");
    }

    #[test]
    fn validators_only_gate_their_own_name() {
        let store = PropertyStore::builder()
            .bind(BooleanValidator::new("enabled"))
            .build();
        store.set_property("other", "anything").unwrap();
        assert!(store.set_property("enabled", "yes").is_err());
        assert!(!store.contains("enabled"));
    }

    #[test]
    fn range_visits_each_once() {
        let store = PropertyStore::default();
        for (k, v) in [("a", 1), ("b", 2), ("c", 3)] {
            store.set_property(k, v).unwrap();
        }
        let mut seen = Vec::new();
        store.range(|name, value| {
            seen.push((name.to_string(), value.as_i64().unwrap()));
            true
        });
        seen.sort();
        assert_eq!(
            seen,
            vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)]
        );
    }

    #[test]
    fn range_stops_when_visitor_returns_false() {
        let store = PropertyStore::default();
        for (k, v) in [("a", 1), ("b", 2), ("c", 3)] {
            store.set_property(k, v).unwrap();
        }
        let mut visited = 0;
        store.range(|_, _| {
            visited += 1;
            false
        });
        assert_eq!(visited, 1);
    }

    #[test]
    fn range_visitor_may_write_to_store() {
        let store = PropertyStore::default();
        store.set_property("a", 1).unwrap();
        store.set_property("b", 2).unwrap();
        let mut visited = 0;
        store.range(|name, value| {
            visited += 1;
            let doubled = value.as_i64().unwrap_or(0) * 2;
            store.set_property(&format!("{name}_x2"), doubled).unwrap();
            true
        });
        assert_eq!(visited, 2);
        assert_eq!(store.get::<i64>("b_x2").unwrap(), 4);
        assert_eq!(store.names(), vec!["a", "a_x2", "b", "b_x2"]);
    }

    #[test]
    fn range_on_empty_store_never_calls_visitor() {
        let store = PropertyStore::default();
        store.range(|_, _| panic!("visitor should not run"));
    }
}
