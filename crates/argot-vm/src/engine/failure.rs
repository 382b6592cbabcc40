//! Diagnostics for failed parses.
//!
//! Every dead branch reports why it died. The VM keeps only the most useful
//! report: conversion problems beat shape problems, and among equals the
//! one that got furthest into the input wins.

use std::cmp::Ordering;
use std::fmt;

use argot_core::{Token, TypeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterProblem {
    UnknownLetter,
    TakesValue,
}

/// Why a branch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The token did not convert to the slot's kind.
    Rejected { argument: String, error: TypeError },
    /// A short-option cluster contained a letter it cannot take.
    Cluster { letter: char, problem: ClusterProblem },
    /// The slot already holds all the values it may.
    TooManyValues { argument: String },
    /// The grammar was satisfied but a mandatory slot stayed empty.
    MissingMandatory { argument: String },
    /// The token (or end of input) matched none of `expected`.
    Unexpected { expected: Vec<String> },
}

impl FailureReason {
    fn rank(&self) -> u8 {
        match self {
            FailureReason::Rejected { .. } | FailureReason::Cluster { .. } => 2,
            FailureReason::TooManyValues { .. } | FailureReason::MissingMandatory { .. } => 1,
            FailureReason::Unexpected { .. } => 0,
        }
    }
}

/// The best diagnostic of a failed parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// Token index where the failure happened (may equal the token count).
    pub position: usize,
    /// The offending token; `None` at end of input.
    pub token: Option<Token>,
    pub reason: FailureReason,
}

impl ParseFailure {
    pub fn new(position: usize, token: Option<Token>, reason: FailureReason) -> Self {
        Self {
            position,
            token,
            reason,
        }
    }

    /// Folds `other` into `self`, keeping the more useful of the two.
    ///
    /// Unexpected-token failures at the same position merge their
    /// expectations.
    pub fn merge(&mut self, other: ParseFailure) {
        let ours = (self.reason.rank(), self.position);
        let theirs = (other.reason.rank(), other.position);
        match theirs.cmp(&ours) {
            Ordering::Greater => *self = other,
            Ordering::Less => {}
            Ordering::Equal => {
                if let (
                    FailureReason::Unexpected { expected },
                    FailureReason::Unexpected { expected: more },
                ) = (&mut self.reason, other.reason)
                {
                    for item in more {
                        if !expected.contains(&item) {
                            expected.push(item);
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for ClusterProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClusterProblem::UnknownLetter => "is not a known flag",
            ClusterProblem::TakesValue => "takes a value and cannot be combined",
        })
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            FailureReason::Rejected { argument, error } => {
                write!(f, "invalid value for `{argument}`: {error}")
            }
            FailureReason::Cluster { letter, problem } => {
                write!(f, "option `-{letter}` {problem}")
            }
            FailureReason::TooManyValues { argument } => {
                write!(f, "argument `{argument}` accepts a single value")
            }
            FailureReason::MissingMandatory { argument } => {
                write!(f, "missing mandatory argument `{argument}`")
            }
            FailureReason::Unexpected { expected } => {
                match &self.token {
                    Some(token) => write!(f, "unexpected `{}`", token.text)?,
                    None => f.write_str("unexpected end of input")?,
                }
                if let Some((last, rest)) = expected.split_last() {
                    f.write_str(", expected ")?;
                    if !rest.is_empty() {
                        write!(f, "{} or ", rest.join(", "))?;
                    }
                    f.write_str(last)?;
                }
                Ok(())
            }
        }
    }
}
