//! Caret diagnostics for lines that do not match their syntax.

mod printer;


use std::fmt;
use std::ops::Range;

use argot_vm::{FailureReason, ParseFailure};

use crate::line::CommandLine;

pub use printer::DiagnosticPrinter;

/// A parse failure located in the source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    message: String,
    label: String,
    range: Range<usize>,
    failure: ParseFailure,
}

impl Diagnostic {
    /// Locates `failure` in `line`.
    ///
    /// Failures at the end of input point just past the last character.
    pub fn from_failure(failure: ParseFailure, line: &CommandLine) -> Self {
        let range = match &failure.token {
            Some(token) => token.span(),
            None => line.source().len()..line.source().len(),
        };
        Self {
            message: failure.to_string(),
            label: label(&failure),
            range,
            failure,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short text shown under the caret.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Byte range in the source line.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn failure(&self) -> &ParseFailure {
        &self.failure
    }

    pub fn printer<'d, 's>(&'d self, source: &'s str) -> DiagnosticPrinter<'d, 's> {
        DiagnosticPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn label(failure: &ParseFailure) -> String {
    match &failure.reason {
        FailureReason::Rejected { error, .. } => error.reason.clone(),
        FailureReason::Cluster { letter, problem } => format!("`{letter}` {problem}"),
        FailureReason::TooManyValues { .. } => "value already given".to_string(),
        FailureReason::MissingMandatory { argument } => format!("`{argument}` is required"),
        FailureReason::Unexpected { expected } => match expected.split_last() {
            Some((last, [])) => format!("expected {last}"),
            Some((last, rest)) => format!("expected {} or {last}", rest.join(", ")),
            None if failure.token.is_some() => "not expected here".to_string(),
            None => "input ends here".to_string(),
        },
    }
}
