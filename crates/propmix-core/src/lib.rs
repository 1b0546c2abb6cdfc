#![deny(missing_docs)]

//! # propmix-core — Foundational Types for Property Stores
//!
//! The leaf crate of the propmix workspace. It defines what a property value
//! is, how a stored value is read back into a typed receiver, and the error
//! taxonomy shared by every store and validator.
//!
//! ## Key Design Principles
//!
//! 1. **Explicit sum type at rest.** Properties are stored as [`Value`], not
//!    as `Box<dyn Any>`. Reads convert through [`FromValue`], so an
//!    incompatible receiver is a returned `CannotAssign` error, never a fault.
//!
//! 2. **Null receivers are representable.** [`Receiver`] is implemented for
//!    `&mut T` and `Option<&mut T>`; `None` is rejected with `NotAPointer`.
//!
//! 3. **One error enum.** [`PropertyError`] covers lookup, receiver,
//!    validation, and serialization failures.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `propmix-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod convert;
pub mod error;
pub mod receiver;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use convert::{FromValue, Json};
pub use error::PropertyError;
pub use receiver::{convert_value, Receiver};
pub use value::{Value, ValueKind};
