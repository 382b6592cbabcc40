//! Parser engine for argot grammar graphs.
//!
//! This crate provides the virtual machine that searches a resolved grammar
//! for a derivation of a token stream, binding tokens to argument slots.

pub mod engine;

pub use engine::{
    Binding, BindingLog, ClusterProblem, Completions, FailureReason, NoopTracer, ParseFailure,
    ParseLimits, ParseMatch, PrintTracer, RuntimeError, Tracer, VM, VMBuilder, Verbosity, complete,
    parse,
};
