//! Tracing infrastructure for debugging parses.
//!
//! # Design: Zero-Cost Abstraction
//!
//! When `NoopTracer` is used every trait method is an `#[inline(always)]`
//! empty function, so the calls and their arguments compile away.
//!
//! # Design: Tracer-Owned State
//!
//! Tracing-only state (which branch a checkpoint will resume, a step counter
//! for display) lives in the tracer, not in `Checkpoint` or the VM.

use argot_core::{Colors, Token, Value};
use argot_grammar::{Grammar, NodeId, NodeKind};

use super::failure::ParseFailure;

const MATCH: &str = "✓";
const MISMATCH: &str = "✗";
const BIND: &str = "⬥";
const FAILURE: &str = "!";
const CHECKPOINT: &str = "⋯";
const BACKTRACK: &str = "❮❮❮";
const ACCEPT: &str = "◼";
const CANDIDATE: &str = "→";

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Token-consuming nodes, matches, backtracks and the verdict.
    #[default]
    Default,
    /// Verbose (-v): every node and every binding.
    Verbose,
    /// Very verbose (-vv): also checkpoints and per-branch failures.
    VeryVerbose,
}

/// Tracer trait for VM instrumentation.
///
/// All methods receive raw data (ids, tokens) that the VM already has.
/// Formatting happens in the tracer implementation.
pub trait Tracer {
    /// Called before running a node at token `position`.
    fn trace_node(&mut self, node: NodeId, position: usize);

    /// Called after a token was consumed.
    fn trace_match(&mut self, token: &Token);

    /// Called when the next token (or end of input) does not fit.
    fn trace_mismatch(&mut self, token: Option<&Token>);

    /// Called after a value was logged for a slot.
    fn trace_bind(&mut self, argument: &str, value: &Value);

    /// Called when a branch dies with a diagnostic.
    fn trace_failure(&mut self, failure: &ParseFailure);

    /// Called when a checkpoint is pushed.
    fn trace_checkpoint_created(&mut self, branch: Option<NodeId>);

    /// Called when a checkpoint is restored.
    fn trace_backtrack(&mut self, position: usize);

    /// Called when the whole grammar matched.
    fn trace_accept(&mut self, position: usize);

    /// Called when completion finds a candidate.
    fn trace_candidate(&mut self, candidate: &str);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_node(&mut self, _node: NodeId, _position: usize) {}

    #[inline(always)]
    fn trace_match(&mut self, _token: &Token) {}

    #[inline(always)]
    fn trace_mismatch(&mut self, _token: Option<&Token>) {}

    #[inline(always)]
    fn trace_bind(&mut self, _argument: &str, _value: &Value) {}

    #[inline(always)]
    fn trace_failure(&mut self, _failure: &ParseFailure) {}

    #[inline(always)]
    fn trace_checkpoint_created(&mut self, _branch: Option<NodeId>) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_candidate(&mut self, _candidate: &str) {}
}

/// Tracer that collects a readable log of the search.
pub struct PrintTracer<'g> {
    grammar: &'g Grammar,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Parallel stack of checkpoint branches (for backtrack display).
    checkpoint_branches: Vec<Option<NodeId>>,
    step: usize,
}

impl<'g> PrintTracer<'g> {
    pub fn new(grammar: &'g Grammar, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            grammar,
            verbosity,
            colors,
            lines: Vec::new(),
            checkpoint_branches: Vec::new(),
            step: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn add_subline(&mut self, symbol: &str, content: &str) {
        self.lines.push(format!("        {symbol} {content}"));
    }

    fn branch_name(&self, branch: Option<NodeId>) -> String {
        let c = self.colors;
        match branch {
            Some(id) => format!("{}{id}{}", c.blue, c.reset),
            None => "ε".to_string(),
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_node(&mut self, node: NodeId, position: usize) {
        self.step += 1;
        let data = self.grammar.node(node);
        let consumes = matches!(
            data.kind,
            NodeKind::Symbol(_) | NodeKind::Argument(_) | NodeKind::Preset { .. } | NodeKind::Cluster(_)
        );
        if !consumes && self.verbosity == Verbosity::Default {
            return;
        }

        let c = self.colors;
        let label = match data.label() {
            Some(label) => format!(" {}[{label}]{}", c.dim, c.reset),
            None => String::new(),
        };
        self.lines.push(format!(
            "{:>4} {}@{position}{} {}{node}{}{label} {}",
            self.step,
            c.dim,
            c.reset,
            c.blue,
            c.reset,
            data.summary()
        ));
    }

    fn trace_match(&mut self, token: &Token) {
        let c = self.colors;
        let content = format!("{}{}{}", c.green, token.text, c.reset);
        self.add_subline(MATCH, &content);
    }

    fn trace_mismatch(&mut self, token: Option<&Token>) {
        let c = self.colors;
        let text = token.map_or("<end>", |t| t.text.as_str());
        let content = format!("{}{text}{}", c.red, c.reset);
        self.add_subline(MISMATCH, &content);
    }

    fn trace_bind(&mut self, argument: &str, value: &Value) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let c = self.colors;
        let content = format!("{}{argument}{} = {}{value}{}", c.blue, c.reset, c.green, c.reset);
        self.add_subline(BIND, &content);
    }

    fn trace_failure(&mut self, failure: &ParseFailure) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        let content = format!("{}{failure}{}", c.red, c.reset);
        self.add_subline(FAILURE, &content);
    }

    fn trace_checkpoint_created(&mut self, branch: Option<NodeId>) {
        self.checkpoint_branches.push(branch);
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let content = format!("checkpoint {}", self.branch_name(branch));
        self.add_subline(CHECKPOINT, &content);
    }

    fn trace_backtrack(&mut self, position: usize) {
        let branch = self.checkpoint_branches.pop().flatten();
        let c = self.colors;
        let line = format!(
            "     {}{BACKTRACK} @{position}{} {}",
            c.dim,
            c.reset,
            self.branch_name(branch)
        );
        self.lines.push(line);
    }

    fn trace_accept(&mut self, position: usize) {
        let c = self.colors;
        self.lines
            .push(format!("     {}{ACCEPT} accept @{position}{}", c.green, c.reset));
    }

    fn trace_candidate(&mut self, candidate: &str) {
        let c = self.colors;
        let content = format!("{}{candidate}{}", c.green, c.reset);
        self.add_subline(CANDIDATE, &content);
    }
}
