//! Typed argument slots.
//!
//! An [`Argument`] is a named binding target with a value kind and a
//! [`Multiplicity`]. Every command invocation owns one [`ArgumentBundle`];
//! the parser engine is the only writer, downstream code only reads.

mod bundle;
mod error;
mod keys;
mod kind;
mod value;

#[cfg(test)]
mod kind_tests;

pub use bundle::{Argument, ArgumentBundle, Count, Multiplicity, Requiredness};
pub use error::{BundleError, TypeError};
pub use keys::{KEY_NAMES, MODIFIER_NAMES};
pub use kind::ArgumentKind;
pub use value::{KeyChord, Value};
