#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for argot command-line syntax.
//!
//! Two layers, neither of which knows anything about grammars:
//! - **Lexical layer**: [`Token`], [`tokenize`] and [`TokenCursor`]
//! - **Argument layer**: typed, named slots ([`Argument`]) grouped into an
//!   [`ArgumentBundle`] owned by a single command invocation

pub mod args;
mod colors;
mod cursor;
mod escape;
mod token;
mod tokenizer;

#[cfg(test)]
mod escape_tests;

pub use args::{
    Argument, ArgumentBundle, ArgumentKind, BundleError, Count, KeyChord, Multiplicity,
    Requiredness, TypeError, Value,
};
pub use colors::Colors;
pub use cursor::{SeekError, TokenCursor};
pub use escape::escape_word;
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenizerFlags, tokenize};
