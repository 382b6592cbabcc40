//! Runtime engine for matching token streams against grammar graphs.
//!
//! The VM walks the grammar with an explicit continuation stack, producing a
//! binding log that is committed to the argument bundle on success.

mod binding;
mod checkpoint;
mod completion;
mod error;
mod failure;
mod frame;
mod trace;
mod vm;

#[cfg(test)]
mod engine_tests;

pub use binding::{Binding, BindingLog};
pub use completion::Completions;
pub use error::RuntimeError;
pub use failure::{ClusterProblem, FailureReason, ParseFailure};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use vm::{ParseLimits, ParseMatch, VM, VMBuilder, complete, parse};
