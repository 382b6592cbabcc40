//! Virtual machine for matching token streams against grammar graphs.

use argot_core::{Argument, ArgumentBundle, BundleError, TokenCursor, Value};
use argot_grammar::{ClusterEntry, Grammar, NodeId, NodeKind};

use super::binding::{Binding, BindingLog};
use super::checkpoint::{Checkpoint, CheckpointStack};
use super::completion::Completions;
use super::error::RuntimeError;
use super::failure::{ClusterProblem, FailureReason, ParseFailure};
use super::frame::FrameArena;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for a parse.
#[derive(Clone, Copy, Debug)]
pub struct ParseLimits {
    /// Maximum total steps (default: 10,000).
    pub(crate) step_limit: u32,
    /// Accept a derivation that leaves tokens unconsumed (default: false).
    pub(crate) allow_trailing: bool,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            step_limit: 10_000,
            allow_trailing: false,
        }
    }
}

impl ParseLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the search at `steps` node visits. Zero fails every parse
    /// before the first visit.
    pub fn step_limit(mut self, steps: u32) -> Self {
        self.step_limit = steps;
        self
    }

    /// With trailing tokens allowed, the caller checks the returned end
    /// position itself.
    pub fn allow_trailing(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }

    pub fn get_step_limit(&self) -> u32 {
        self.step_limit
    }

    pub fn get_allow_trailing(&self) -> bool {
        self.allow_trailing
    }
}

/// A successful parse, not yet written to the bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseMatch {
    /// Cursor position after the last consumed token.
    pub end: usize,
    pub bindings: BindingLog,
    /// Steps the search took.
    pub steps: u32,
}

impl ParseMatch {
    pub fn commit(&self, bundle: &mut ArgumentBundle) -> Result<(), BundleError> {
        self.bindings.commit(bundle)
    }
}

/// Search state for one parse.
///
/// The grammar and the bundle are only read; all tentative bindings go to
/// the binding log.
pub struct VM<'a> {
    grammar: &'a Grammar,
    bundle: &'a ArgumentBundle,
    cursor: &'a mut TokenCursor,
    frames: FrameArena,
    checkpoints: CheckpointStack,
    log: BindingLog,
    steps: u32,
    limits: ParseLimits,
    best: Option<ParseFailure>,
    /// Set in completion mode.
    completions: Option<Completions>,
}

/// Builder for VM instances.
pub struct VMBuilder<'a> {
    grammar: &'a Grammar,
    bundle: &'a ArgumentBundle,
    cursor: &'a mut TokenCursor,
    limits: ParseLimits,
}

impl<'a> VMBuilder<'a> {
    pub fn new(grammar: &'a Grammar, bundle: &'a ArgumentBundle, cursor: &'a mut TokenCursor) -> Self {
        Self {
            grammar,
            bundle,
            cursor,
            limits: ParseLimits::default(),
        }
    }

    pub fn limits(mut self, limits: ParseLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Caps the search at `steps` node visits. Zero fails every parse
    /// before the first visit.
    pub fn step_limit(mut self, steps: u32) -> Self {
        self.limits = self.limits.step_limit(steps);
        self
    }

    pub fn allow_trailing(mut self, allow: bool) -> Self {
        self.limits = self.limits.allow_trailing(allow);
        self
    }

    pub fn build(self) -> VM<'a> {
        VM {
            grammar: self.grammar,
            bundle: self.bundle,
            cursor: self.cursor,
            frames: FrameArena::new(),
            checkpoints: CheckpointStack::new(),
            log: BindingLog::new(),
            steps: 0,
            limits: self.limits,
            best: None,
            completions: None,
        }
    }
}

impl<'a> VM<'a> {
    pub fn builder(
        grammar: &'a Grammar,
        bundle: &'a ArgumentBundle,
        cursor: &'a mut TokenCursor,
    ) -> VMBuilder<'a> {
        VMBuilder::new(grammar, bundle, cursor)
    }

    /// Matches the tokens from the cursor's position to the end.
    ///
    /// On success the cursor is left after the last consumed token; on
    /// failure it is put back where it started.
    pub fn execute(self) -> Result<ParseMatch, RuntimeError> {
        self.execute_with(&mut NoopTracer)
    }

    /// Like [`execute`](Self::execute), reporting every step to `tracer`.
    pub fn execute_with<T: Tracer>(mut self, tracer: &mut T) -> Result<ParseMatch, RuntimeError> {
        let start = self.cursor.tell();
        self.frames.push(self.grammar.root());

        if let Err(e) = self.run(tracer) {
            self.cursor.seek(start)?;
            return Err(e);
        }

        Ok(ParseMatch {
            end: self.cursor.tell(),
            bindings: self.log,
            steps: self.steps,
        })
    }

    /// Collects every word that could stand at the last position.
    ///
    /// Explores all alternatives instead of stopping at the first
    /// derivation. The cursor is left where it started.
    pub fn complete(self) -> Result<Completions, RuntimeError> {
        self.complete_with(&mut NoopTracer)
    }

    pub fn complete_with<T: Tracer>(mut self, tracer: &mut T) -> Result<Completions, RuntimeError> {
        let start = self.cursor.tell();
        let completions = match self.cursor.last() {
            Some(last) if !self.cursor.whitespace_after_last() => {
                Completions::new(self.cursor.len() - 1, last.text.clone())
            }
            _ => Completions::new(self.cursor.len(), ""),
        };
        self.completions = Some(completions);
        self.frames.push(self.grammar.root());

        let result = self.run(tracer);
        self.cursor.seek(start)?;
        result?;

        Ok(self.completions.unwrap_or_default())
    }

    fn run<T: Tracer>(&mut self, tracer: &mut T) -> Result<(), RuntimeError> {
        loop {
            if self.steps == self.limits.step_limit {
                return Err(RuntimeError::StepLimitExceeded(self.limits.step_limit));
            }
            self.steps += 1;

            let result = match self.frames.pop() {
                Some(node) => {
                    self.frames.prune(self.checkpoints.max_frame_ref());
                    self.exec_node(node, tracer)
                }
                None => self.exec_accept(tracer),
            };

            match result {
                Ok(()) | Err(RuntimeError::Backtracked) => continue,
                Err(RuntimeError::Accept) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    fn exec_node<T: Tracer>(&mut self, id: NodeId, tracer: &mut T) -> Result<(), RuntimeError> {
        let grammar = self.grammar;
        tracer.trace_node(id, self.cursor.tell());

        match &grammar.node(id).kind {
            NodeKind::Symbol(text) => self.exec_symbol(text, tracer),
            NodeKind::Sequence(children) => {
                for &child in children.iter().rev() {
                    self.frames.push(child);
                }
                Ok(())
            }
            NodeKind::Alternation(children) => self.branch(children, tracer),
            NodeKind::Argument(name) => self.exec_argument(name, tracer),
            NodeKind::Preset { argument, value } => self.exec_preset(argument, value, tracer),
            NodeKind::Cluster(entries) => self.exec_cluster(entries, tracer),
            NodeKind::AtMostOnce(child) => {
                if self.log.visited(id) {
                    tracer.trace_mismatch(self.cursor.peek());
                    return self.backtrack(tracer);
                }
                self.log.push(Binding::Visit(id));
                self.frames.push(*child);
                Ok(())
            }
            NodeKind::BackReference(label) => {
                Err(RuntimeError::UnresolvedBackReference(label.clone()))
            }
        }
    }

    fn exec_symbol<T: Tracer>(&mut self, text: &str, tracer: &mut T) -> Result<(), RuntimeError> {
        if let Some(partial) = self.completion_target() {
            if text.starts_with(partial.as_str()) {
                self.offer(text, tracer);
            }
            return self.backtrack(tracer);
        }

        match self.cursor.peek() {
            Some(token) if token.text == text => {
                tracer.trace_match(token);
                self.cursor.next();
                Ok(())
            }
            token => {
                tracer.trace_mismatch(token);
                let expected = vec![format!("`{text}`")];
                self.fail(FailureReason::Unexpected { expected }, tracer)
            }
        }
    }

    fn exec_argument<T: Tracer>(&mut self, name: &str, tracer: &mut T) -> Result<(), RuntimeError> {
        let (slot, argument) = self.slot(name)?;
        if !argument.multiplicity().allows_another(self.log.count(slot)) {
            let argument = name.to_string();
            return self.fail(FailureReason::TooManyValues { argument }, tracer);
        }

        if let Some(partial) = self.completion_target() {
            for candidate in argument.kind().complete(&partial) {
                self.offer(&candidate, tracer);
            }
            return self.backtrack(tracer);
        }

        // Redirection punctuation is never an argument value.
        let Some(token) = self.cursor.peek().filter(|t| !t.is_special()).cloned() else {
            tracer.trace_mismatch(self.cursor.peek());
            let expected = vec![format!("<{name}>")];
            return self.fail(FailureReason::Unexpected { expected }, tracer);
        };

        match argument.accept(&token.text) {
            Ok(value) => {
                tracer.trace_match(&token);
                tracer.trace_bind(name, &value);
                let position = self.cursor.tell();
                self.cursor.next();
                self.log.push(Binding::Value {
                    slot,
                    value,
                    position,
                });
                Ok(())
            }
            Err(error) => {
                tracer.trace_mismatch(Some(&token));
                let argument = name.to_string();
                self.fail(FailureReason::Rejected { argument, error }, tracer)
            }
        }
    }

    fn exec_preset<T: Tracer>(
        &mut self,
        name: &str,
        text: &str,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        let (slot, argument) = self.slot(name)?;
        if !argument.multiplicity().allows_another(self.log.count(slot)) {
            let argument = name.to_string();
            return self.fail(FailureReason::TooManyValues { argument }, tracer);
        }

        match argument.accept(text) {
            Ok(value) => {
                tracer.trace_bind(name, &value);
                self.log.push(Binding::Value {
                    slot,
                    value,
                    position: self.cursor.tell(),
                });
                Ok(())
            }
            Err(error) => {
                let argument = name.to_string();
                self.fail(FailureReason::Rejected { argument, error }, tracer)
            }
        }
    }

    /// `-xyz` binds `true` to the flags behind `x`, `y` and `z`.
    fn exec_cluster<T: Tracer>(
        &mut self,
        entries: &[ClusterEntry],
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        if self.completion_target().is_some() {
            return self.backtrack(tracer);
        }

        let letters = self
            .cursor
            .peek()
            .filter(|t| !t.is_special())
            .and_then(|t| cluster_letters(&t.text));
        let Some(letters) = letters else {
            tracer.trace_mismatch(self.cursor.peek());
            return self.fail(FailureReason::Unexpected { expected: Vec::new() }, tracer);
        };

        let position = self.cursor.tell();
        for letter in letters.chars() {
            let Some(entry) = entries.iter().find(|e| e.letter == letter) else {
                let problem = ClusterProblem::UnknownLetter;
                return self.fail(FailureReason::Cluster { letter, problem }, tracer);
            };
            if entry.takes_value {
                let problem = ClusterProblem::TakesValue;
                return self.fail(FailureReason::Cluster { letter, problem }, tracer);
            }

            let (slot, argument) = self.slot(&entry.argument)?;
            if !argument.multiplicity().allows_another(self.log.count(slot)) {
                let argument = entry.argument.clone();
                return self.fail(FailureReason::TooManyValues { argument }, tracer);
            }
            let value = Value::Bool(true);
            tracer.trace_bind(&entry.argument, &value);
            self.log.push(Binding::Value {
                slot,
                value,
                position,
            });
        }

        if let Some(token) = self.cursor.next() {
            tracer.trace_match(token);
        }
        Ok(())
    }

    /// Runs the first alternative now and saves a checkpoint for each other.
    fn branch<T: Tracer>(
        &mut self,
        children: &[Option<NodeId>],
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        let Some((first, rest)) = children.split_first() else {
            return self.backtrack(tracer);
        };

        // Reverse order so the second alternative is restored first.
        for &branch in rest.iter().rev() {
            self.checkpoints.push(Checkpoint {
                position: self.cursor.tell(),
                watermark: self.log.len(),
                frame_index: self.frames.current(),
                branch,
            });
            tracer.trace_checkpoint_created(branch);
        }

        if let Some(node) = first {
            self.frames.push(*node);
        }
        Ok(())
    }

    /// The continuation is empty: the grammar matched.
    fn exec_accept<T: Tracer>(&mut self, tracer: &mut T) -> Result<(), RuntimeError> {
        if self.completions.is_some() {
            return self.backtrack(tracer);
        }

        if !self.limits.allow_trailing && self.cursor.has_next() {
            tracer.trace_mismatch(self.cursor.peek());
            return self.fail(FailureReason::Unexpected { expected: Vec::new() }, tracer);
        }

        let bundle = self.bundle;
        for (slot, argument) in bundle.iter().enumerate() {
            if argument.multiplicity().is_mandatory() && self.log.count(slot) == 0 {
                let argument = argument.name().to_string();
                return self.fail(FailureReason::MissingMandatory { argument }, tracer);
            }
        }

        tracer.trace_accept(self.cursor.tell());
        Err(RuntimeError::Accept)
    }

    /// Records why the current branch died, then backtracks.
    fn fail<T: Tracer>(&mut self, reason: FailureReason, tracer: &mut T) -> Result<(), RuntimeError> {
        if self.completions.is_none() {
            let failure = ParseFailure::new(self.cursor.tell(), self.cursor.peek().cloned(), reason);
            tracer.trace_failure(&failure);
            match &mut self.best {
                Some(best) => best.merge(failure),
                None => self.best = Some(failure),
            }
        }
        self.backtrack(tracer)
    }

    fn backtrack<T: Tracer>(&mut self, tracer: &mut T) -> Result<(), RuntimeError> {
        let Some(cp) = self.checkpoints.pop() else {
            return Err(self.exhausted());
        };
        self.cursor.seek(cp.position)?;
        self.log.truncate(cp.watermark);
        self.frames.restore(cp.frame_index);
        tracer.trace_backtrack(cp.position);

        if let Some(node) = cp.branch {
            self.frames.push(node);
        }
        Err(RuntimeError::Backtracked)
    }

    /// No checkpoint left to try.
    fn exhausted(&mut self) -> RuntimeError {
        if self.completions.is_some() {
            return RuntimeError::Accept;
        }
        let failure = self.best.take().unwrap_or_else(|| {
            let expected = Vec::new();
            ParseFailure::new(
                self.cursor.tell(),
                self.cursor.peek().cloned(),
                FailureReason::Unexpected { expected },
            )
        });
        RuntimeError::NoMatch(failure)
    }

    fn slot(&self, name: &str) -> Result<(usize, &'a Argument), RuntimeError> {
        let bundle = self.bundle;
        bundle
            .index_of(name)
            .and_then(|i| bundle.get_index(i).map(|a| (i, a)))
            .ok_or_else(|| RuntimeError::UnknownArgument(name.to_string()))
    }

    /// In completion mode, the partial word when the cursor stands on it.
    fn completion_target(&self) -> Option<String> {
        let completions = self.completions.as_ref()?;
        (completions.position == self.cursor.tell()).then(|| completions.partial.clone())
    }

    fn offer<T: Tracer>(&mut self, candidate: &str, tracer: &mut T) {
        if let Some(completions) = self.completions.as_mut()
            && !completions.candidates.contains(candidate)
        {
            tracer.trace_candidate(candidate);
            completions.add(candidate);
        }
    }
}

/// Letters of a `-xyz` cluster: at least two ASCII letters after one dash.
fn cluster_letters(text: &str) -> Option<String> {
    let letters = text.strip_prefix('-')?;
    (letters.len() >= 2 && letters.bytes().all(|b| b.is_ascii_alphabetic()))
        .then(|| letters.to_string())
}

/// Parses the rest of `cursor` and writes the bindings to `bundle`.
///
/// Returns the end position, which equals the token count unless
/// `limits` allow trailing tokens.
pub fn parse(
    grammar: &Grammar,
    bundle: &mut ArgumentBundle,
    cursor: &mut TokenCursor,
    limits: ParseLimits,
) -> Result<usize, RuntimeError> {
    let matched = VM::builder(grammar, bundle, cursor)
        .limits(limits)
        .build()
        .execute()?;
    matched.commit(bundle)?;
    Ok(matched.end)
}

/// Completion candidates for the last word of `cursor`.
pub fn complete(
    grammar: &Grammar,
    bundle: &ArgumentBundle,
    cursor: &mut TokenCursor,
    limits: ParseLimits,
) -> Result<Completions, RuntimeError> {
    VM::builder(grammar, bundle, cursor)
        .limits(limits)
        .build()
        .complete()
}
