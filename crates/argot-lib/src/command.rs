//! Compiled command syntax, ready to parse lines.

use argot_compiler::{CommandDefinition, CompileError};
use argot_core::{ArgumentBundle, Colors, Token};
use argot_grammar::Grammar;
use argot_vm::{NoopTracer, ParseLimits, PrintTracer, RuntimeError, Tracer, VM, Verbosity};
use serde::Serialize;

use crate::diagnostics::Diagnostic;
use crate::line::CommandLine;
use crate::{Error, Result};

/// A command's argument slots and its resolved grammar.
///
/// Compilation and back-reference resolution happen once in
/// [`new`](Self::new). The value is immutable afterwards and can be shared
/// between threads; every parse works on its own bundle.
#[derive(Debug, Clone)]
pub struct CommandSyntax {
    alias: String,
    description: Option<String>,
    bundle: ArgumentBundle,
    grammar: Grammar,
}

/// Outcome of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    /// Index of the first token not consumed.
    pub end: usize,
    /// Steps the search took.
    pub steps: u32,
}

impl Parsed {
    /// Tokens left over when trailing input was allowed.
    pub fn trailing<'l>(&self, line: &'l CommandLine) -> &'l [Token] {
        let tokens = line.tokens();
        &tokens[self.end.min(tokens.len())..]
    }
}

/// Candidates for the word under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Byte offset where the completed word starts.
    pub start: usize,
    /// What was already typed of it.
    pub partial: String,
    pub candidates: Vec<String>,
}

impl CommandSyntax {
    pub fn new(definition: CommandDefinition) -> Result<Self> {
        let mut grammar = definition.compile()?;
        grammar
            .resolve_back_references()
            .map_err(CompileError::from)?;

        Ok(Self {
            alias: definition.syntax.alias,
            description: definition.syntax.description,
            bundle: definition.bundle,
            grammar,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(CommandDefinition::from_json(json)?)
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The declared slots, all unbound.
    pub fn bundle(&self) -> &ArgumentBundle {
        &self.bundle
    }

    /// A fresh, unbound copy of the slots for one invocation.
    pub fn new_bundle(&self) -> ArgumentBundle {
        let mut bundle = self.bundle.clone();
        bundle.clear();
        bundle
    }

    /// Parses `line` into `bundle`.
    ///
    /// On success the bundle holds exactly the values of this line. On
    /// failure it is left as it was.
    pub fn parse(
        &self,
        line: &CommandLine,
        bundle: &mut ArgumentBundle,
        limits: ParseLimits,
    ) -> Result<Parsed> {
        self.parse_with(line, bundle, limits, &mut NoopTracer)
    }

    pub fn parse_with<T: Tracer>(
        &self,
        line: &CommandLine,
        bundle: &mut ArgumentBundle,
        limits: ParseLimits,
        tracer: &mut T,
    ) -> Result<Parsed> {
        let mut cursor = line.cursor().clone();
        let matched = VM::builder(&self.grammar, bundle, &mut cursor)
            .limits(limits)
            .build()
            .execute_with(tracer)
            .map_err(|e| runtime_error(e, line))?;

        matched
            .commit(bundle)
            .map_err(|e| Error::Runtime(e.into()))?;

        Ok(Parsed {
            end: matched.end,
            steps: matched.steps,
        })
    }

    /// Parses `line` with default limits into a new bundle.
    pub fn invoke(&self, line: &CommandLine) -> Result<ArgumentBundle> {
        let mut bundle = self.new_bundle();
        self.parse(line, &mut bundle, ParseLimits::default())?;
        Ok(bundle)
    }

    /// Parses `line` while recording a readable trace of the search.
    pub fn trace(
        &self,
        line: &CommandLine,
        limits: ParseLimits,
        verbosity: Verbosity,
        colors: Colors,
    ) -> (Result<ArgumentBundle>, Vec<String>) {
        let mut bundle = self.new_bundle();
        let mut tracer = PrintTracer::new(&self.grammar, verbosity, colors);
        let result = self
            .parse_with(line, &mut bundle, limits, &mut tracer)
            .map(|_| bundle);
        (result, tracer.lines().to_vec())
    }

    /// Completion candidates for the last word of `line`.
    pub fn complete(&self, line: &CommandLine, limits: ParseLimits) -> Result<Completion> {
        let mut cursor = line.cursor().clone();
        let completions = argot_vm::complete(&self.grammar, &self.bundle, &mut cursor, limits)
            .map_err(|e| runtime_error(e, line))?;

        let start = line
            .tokens()
            .get(completions.position)
            .map_or(line.source().len(), |t| t.start);

        Ok(Completion {
            start,
            partial: completions.partial,
            candidates: completions.candidates.into_iter().collect(),
        })
    }
}

fn runtime_error(error: RuntimeError, line: &CommandLine) -> Error {
    match error {
        RuntimeError::NoMatch(failure) => Error::Syntax(Diagnostic::from_failure(failure, line)),
        RuntimeError::StepLimitExceeded(limit) => Error::StepLimitExceeded(limit),
        other => Error::Runtime(other),
    }
}
