#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Surface syntax combinators and their lowering to grammar graphs.
//!
//! Command authors describe a command with [`Syntax`] values (or a JSON
//! [`CommandDefinition`]); [`Compiler`] turns them into an unresolved
//! [`argot_grammar::Grammar`] that shares slot names with the command's
//! [`argot_core::ArgumentBundle`].

mod compile;
mod default;
mod json;
mod syntax;

#[cfg(test)]
mod compile_tests;

pub use compile::{CompileError, Compiler, compile};
pub use default::default_syntax;
pub use json::{CommandDefinition, DefinitionError};
pub use syntax::{OptionSyntax, Syntax, SyntaxBundle};
