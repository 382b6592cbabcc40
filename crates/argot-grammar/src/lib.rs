//! Grammar graph for argot command syntax.
//!
//! This crate contains:
//! - The node arena ([`Grammar`]) and its builder ([`GrammarBuilder`])
//! - Back-reference resolution, which turns named placeholders into direct
//!   edges and may close cycles
//! - A stable text dump used by tests and the CLI
//!
//! Nodes live in a flat `Vec` addressed by [`NodeId`], so cycles created by
//! resolution are just indices pointing backwards.

mod builder;
mod dump;
mod error;
mod grammar;
mod node;

#[cfg(test)]
mod builder_tests;

pub use builder::GrammarBuilder;
pub use error::GrammarError;
pub use grammar::Grammar;
pub use node::{ClusterEntry, NodeData, NodeId, NodeKind};
