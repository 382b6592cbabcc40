//! Errors that can occur during a parse.

use argot_core::{BundleError, SeekError};

use super::failure::ParseFailure;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// The tokens do not satisfy the grammar.
    #[error("{0}")]
    NoMatch(ParseFailure),

    /// The search took more steps than allowed; the grammar is too complex
    /// or expands without consuming tokens.
    #[error("parse exceeded the step limit of {0}")]
    StepLimitExceeded(u32),

    /// The grammar was handed over without resolving its back-references.
    #[error("back-reference `{0}` reached during parsing; resolve the grammar first")]
    UnresolvedBackReference(String),

    /// The grammar names a slot the bundle does not have.
    #[error("grammar refers to unknown argument `{0}`")]
    UnknownArgument(String),

    #[error(transparent)]
    Seek(#[from] SeekError),

    #[error(transparent)]
    Bundle(#[from] BundleError),

    /// Internal control flow: a checkpoint was restored.
    #[doc(hidden)]
    #[error("backtracked")]
    Backtracked,

    /// Internal control flow: the continuation accepted.
    #[doc(hidden)]
    #[error("accepted")]
    Accept,
}

impl RuntimeError {
    /// True for ordinary "input does not match" failures.
    pub fn is_no_match(&self) -> bool {
        matches!(self, RuntimeError::NoMatch(_))
    }

    pub fn failure(&self) -> Option<&ParseFailure> {
        match self {
            RuntimeError::NoMatch(f) => Some(f),
            _ => None,
        }
    }
}
