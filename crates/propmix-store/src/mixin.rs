//! # Embedding — Property Mixin
//!
//! A host type gains dynamically-named properties by owning a
//! [`PropertyStore`] and implementing [`PropertyMixin`]. The blanket impl
//! then provides [`Properties`], so hosts expose `get_property`,
//! `set_property`, and `range` without writing any delegation.
//!
//! ```
//! use propmix_store::{Properties, PropertyMixin, PropertyStore};
//! use propmix_store::validators::ImmutableValidator;
//!
//! struct Document {
//!     properties: PropertyStore,
//! }
//!
//! impl PropertyMixin for Document {
//!     fn property_store(&self) -> &PropertyStore {
//!         &self.properties
//!     }
//! }
//!
//! let doc = Document {
//!     properties: PropertyStore::builder()
//!         .bind(ImmutableValidator::new("id"))
//!         .build(),
//! };
//! doc.set_property("id", "doc-1").unwrap();
//! assert!(doc.set_property("id", "doc-2").is_err());
//! ```

use propmix_core::{PropertyError, Receiver, Value};

use crate::store::PropertyStore;

/// Read/write/enumerate contract for objects carrying properties.
pub trait Properties {
    /// Assign the value stored under `name` into `recv`.
    fn get_property<R: Receiver>(&self, name: &str, recv: R) -> Result<(), PropertyError>;

    /// Validate and store `value` under `name`.
    fn set_property<V: Into<Value>>(&self, name: &str, value: V) -> Result<(), PropertyError>;

    /// Visit stored properties until `visit` returns `false`.
    fn range<F: FnMut(&str, &Value) -> bool>(&self, visit: F);
}

/// Implemented by types that embed a [`PropertyStore`].
pub trait PropertyMixin {
    /// The embedded store.
    fn property_store(&self) -> &PropertyStore;
}

impl PropertyMixin for PropertyStore {
    fn property_store(&self) -> &PropertyStore {
        self
    }
}

impl<M: PropertyMixin + ?Sized> Properties for M {
    fn get_property<R: Receiver>(&self, name: &str, recv: R) -> Result<(), PropertyError> {
        self.property_store().get_property(name, recv)
    }

    fn set_property<V: Into<Value>>(&self, name: &str, value: V) -> Result<(), PropertyError> {
        self.property_store().set_property(name, value)
    }

    fn range<F: FnMut(&str, &Value) -> bool>(&self, visit: F) {
        self.property_store().range(visit)
    }
}
