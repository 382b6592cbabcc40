//! argot: declarative command-line syntax.
//!
//! A command declares typed argument slots and the shapes its invocations may
//! take. This crate ties the pieces together: it tokenizes a raw line,
//! compiles and resolves the command's syntax once, and parses lines into
//! bound argument values or a caret diagnostic.
//!
//! # Example
//!
//! ```
//! use argot_lib::{CommandLine, CommandSyntax, TokenizerFlags};
//!
//! let syntax = CommandSyntax::from_json(r#"{
//!     "alias": "greet",
//!     "arguments": { "name": { "type": "string", "requiredness": "mandatory" } },
//!     "syntaxes": [{ "type": "argument", "name": "name" }]
//! }"#).expect("valid definition");
//!
//! let line = CommandLine::parse("'Ada Lovelace'", TokenizerFlags::new());
//! let bundle = syntax.invoke(&line).expect("line matches");
//! assert_eq!(bundle.values("name")[0].to_string(), "Ada Lovelace");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod command;
pub mod diagnostics;
mod line;


pub use argot_compiler::{
    CommandDefinition, CompileError, DefinitionError, OptionSyntax, Syntax, SyntaxBundle,
};
pub use argot_core::{
    Argument, ArgumentBundle, ArgumentKind, Colors, Multiplicity, Token, TokenKind,
    TokenizerFlags, Value,
};
pub use argot_vm::{ParseLimits, RuntimeError, Verbosity};
pub use command::{CommandSyntax, Completion, Parsed};
pub use diagnostics::{Diagnostic, DiagnosticPrinter};
pub use line::CommandLine;

/// Errors that can occur while building a command syntax or parsing a line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line does not fit the command's syntax.
    #[error("{0}")]
    Syntax(Diagnostic),

    /// The search gave up; the grammar is too ambiguous for the input.
    #[error("parse exceeded the step limit of {0}")]
    StepLimitExceeded(u32),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// Internal inconsistency between the grammar and its bundle.
    #[error("internal parser error: {0}")]
    Runtime(RuntimeError),
}

impl Error {
    /// The diagnostic for lines that do not match.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Syntax(d) => Some(d),
            _ => None,
        }
    }
}

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Error>;
