//! # Validator Contract
//!
//! A validator is bound to one property name and gates every write to it.
//! It receives a [`StoreView`] of the store being written, reflecting the
//! state *before* the pending write, so it can consult existing properties
//! (its own previous value, or other fields) while deciding.
//!
//! The view is read-only. Validators run without the store lock held; a read
//! through the view takes the lock independently and cannot deadlock.

use std::sync::Arc;

use propmix_core::{FromValue, PropertyError, Receiver, Value};

use crate::store::PropertyStore;

/// A named check invoked before a property write is committed.
pub trait Validator: Send + Sync {
    /// The property this validator is bound to.
    fn property(&self) -> &str;

    /// Accept or reject `candidate` as the new value of [`Self::property`].
    ///
    /// # Errors
    ///
    /// The returned error is handed back verbatim from `set_property`.
    fn validate(&self, store: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError>;
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn property(&self) -> &str {
        (**self).property()
    }

    fn validate(&self, store: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError> {
        (**self).validate(store, candidate)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn property(&self) -> &str {
        (**self).property()
    }

    fn validate(&self, store: &StoreView<'_>, candidate: &Value) -> Result<(), PropertyError> {
        (**self).validate(store, candidate)
    }
}

/// Read-only handle onto a [`PropertyStore`].
#[derive(Clone, Copy)]
pub struct StoreView<'a> {
    store: &'a PropertyStore,
}

impl<'a> StoreView<'a> {
    pub(crate) fn new(store: &'a PropertyStore) -> Self {
        Self { store }
    }

    /// See [`PropertyStore::get_property`].
    pub fn get_property<R: Receiver>(&self, name: &str, recv: R) -> Result<(), PropertyError> {
        self.store.get_property(name, recv)
    }

    /// See [`PropertyStore::get`].
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, PropertyError> {
        self.store.get(name)
    }

    /// See [`PropertyStore::contains`].
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains(name)
    }

    /// See [`PropertyStore::range`].
    pub fn range<F: FnMut(&str, &Value) -> bool>(&self, visit: F) {
        self.store.range(visit)
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl std::fmt::Debug for StoreView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreView")
            .field("len", &self.store.len())
            .finish()
    }
}
