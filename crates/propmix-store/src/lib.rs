#![deny(missing_docs)]

//! # propmix-store — Embeddable Validated Property Store
//!
//! A thread-safe name → value store that other types embed to gain
//! dynamically-named, validated attributes without a static schema.
//!
//! ## Components
//!
//! - **Store** (`store.rs`): the map behind a single lock, with
//!   `get_property` / `set_property` / `range`.
//! - **Bindings** (`bindings.rs`): the per-name validator chains, fixed at
//!   construction.
//! - **Validator contract** (`validator.rs`): validators receive a read-only
//!   [`StoreView`] of the store they gate, reflecting the state before the
//!   pending write. This is what makes policies such as immutability
//!   expressible.
//! - **Validators** (`validators/`): boolean, string, immutable, integer
//!   range, enum membership, and closure validators.
//! - **Mixin** (`mixin.rs`): [`PropertyMixin`] + [`Properties`] for host types.
//! - **Serialization** (`persist.rs`): JSON object and column-value views.
//!
//! ## Example
//!
//! ```
//! use propmix_store::PropertyStore;
//! use propmix_store::validators::{BooleanValidator, ImmutableValidator};
//!
//! let store = PropertyStore::builder()
//!     .bind(BooleanValidator::new("enabled"))
//!     .bind(ImmutableValidator::new("owner"))
//!     .build();
//!
//! store.set_property("enabled", true).unwrap();
//! store.set_property("owner", "ops").unwrap();
//! assert!(store.set_property("enabled", "yes").unwrap_err().is_validation_failure());
//! assert!(store.set_property("owner", "dev").is_err());
//!
//! let mut owner = String::new();
//! store.get_property("owner", &mut owner).unwrap();
//! assert_eq!(owner, "ops");
//! ```

pub mod bindings;
pub mod mixin;
mod persist;
pub mod store;
pub mod validator;
pub mod validators;

pub use bindings::ValidatorBindings;
pub use mixin::{Properties, PropertyMixin};
pub use store::{PropertyStore, PropertyStoreBuilder};
pub use validator::{StoreView, Validator};

// Core types most callers need alongside the store.
pub use propmix_core::{FromValue, Json, PropertyError, Receiver, Value, ValueKind};
