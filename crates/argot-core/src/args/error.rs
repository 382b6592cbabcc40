//! Errors raised by argument slots and bundles.

/// A token that does not convert to the slot's value kind.
///
/// Carries what was expected and the literal offending text so the message
/// is actionable on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}: '{text}' (expected {expected})")]
pub struct TypeError {
    pub expected: String,
    pub reason: String,
    pub text: String,
}

impl TypeError {
    pub fn new(expected: impl Into<String>, reason: impl Into<String>, text: &str) -> Self {
        Self {
            expected: expected.into(),
            reason: reason.into(),
            text: text.to_string(),
        }
    }
}

/// Malformed bundle, or a write that breaks a slot's multiplicity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    #[error("argument name must not be empty")]
    EmptyName,

    #[error("duplicate argument `{0}`")]
    DuplicateName(String),

    #[error("unknown argument `{0}`")]
    UnknownArgument(String),

    #[error("argument `{0}` accepts a single value")]
    TooManyValues(String),

    #[error("missing mandatory argument `{0}`")]
    MissingMandatory(String),
}
