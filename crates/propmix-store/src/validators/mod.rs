//! # Concrete Validators
//!
//! | Validator | Rule | Error |
//! |-----------|------|-------|
//! | [`BooleanValidator`] | candidate must be a boolean | `NotABoolean` |
//! | [`StringValidator`] | candidate must be a string | `NotAString` |
//! | [`ImmutableValidator`] | property must not already be set | `Immutable` |
//! | [`IntegerRangeValidator`] | candidate must be an integer within inclusive bounds | `NotAnInteger` / `OutOfRange` |
//! | [`OneOfValidator`] | candidate must equal one of a fixed set of values | `NotAllowed` |
//! | [`FnValidator`] | arbitrary closure over the store view and candidate | `Rejected` |

mod boolean;
mod func;
mod immutable;
mod one_of;
mod range;
mod string;

pub use boolean::BooleanValidator;
pub use func::FnValidator;
pub use immutable::ImmutableValidator;
pub use one_of::OneOfValidator;
pub use range::IntegerRangeValidator;
pub use string::StringValidator;
