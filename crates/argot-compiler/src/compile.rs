//! Lowering of surface syntax to a grammar graph.
//!
//! Every combinator maps to a fixed node pattern:
//!
//! ```text
//! Option        seq(alt('--long' | '-s'), <arg>)      flags: <arg> = true
//! Repeat 2..4   seq(item, item, alt(seq(item, alt(item | ε)) | ε))
//! Repeat 1..    seq(item, L: alt(seq(item, ref(L)) | ε))
//! OptionSet     L: alt(seq(alt(opt.. | cluster), ref(L)) | ε)
//! Powerset      L: alt(seq(alt(once(item)..), ref(L)) | ε)
//! ```
//!
//! Lazy repeats swap the branch order so `ε` is tried first. Loop labels are
//! generated with a `%` prefix, which user labels may not use. The output is
//! not resolved: callers run [`Grammar::resolve_back_references`] before parsing.

use argot_core::{Argument, ArgumentBundle};
use argot_grammar::{ClusterEntry, Grammar, GrammarBuilder, GrammarError, NodeId};

use crate::default::default_syntax;
use crate::syntax::{OptionSyntax, Syntax, SyntaxBundle};

const GENERATED_LABEL_PREFIX: char = '%';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("syntax refers to unknown argument `{0}`")]
    UnknownArgument(String),

    #[error("option for `{0}` has neither a long nor a short form")]
    OptionWithoutName(String),

    #[error("short option `-{0}` is declared twice")]
    DuplicateShortOption(char),

    #[error("invalid repeat bounds {min}..={max}")]
    InvalidRepeat { min: u32, max: u32 },

    #[error("unbounded repeat over an item that can match nothing")]
    EmptyLoop,

    #[error("{0} needs at least one member")]
    EmptyCombinator(&'static str),

    #[error("label `{0}` is reserved for generated loops")]
    ReservedLabel(String),
}

/// Compiles `syntax` against the slots of `bundle`.
pub fn compile(syntax: &Syntax, bundle: &ArgumentBundle) -> Result<Grammar, CompileError> {
    Compiler::new(bundle).compile(syntax)
}

/// One-shot lowering state: the arena being filled plus a label counter.
pub struct Compiler<'b> {
    bundle: &'b ArgumentBundle,
    builder: GrammarBuilder,
    next_label: u32,
}

impl<'b> Compiler<'b> {
    pub fn new(bundle: &'b ArgumentBundle) -> Self {
        Self {
            bundle,
            builder: GrammarBuilder::new(),
            next_label: 0,
        }
    }

    pub fn compile(mut self, syntax: &Syntax) -> Result<Grammar, CompileError> {
        let root = self.emit(syntax)?;
        Ok(self.builder.finish(root)?)
    }

    /// Compiles every syntax of a command into one alternation.
    ///
    /// A bundle with no syntaxes gets the default syntax of the arguments.
    pub fn compile_bundle(mut self, syntaxes: &SyntaxBundle) -> Result<Grammar, CompileError> {
        let root = match syntaxes.syntaxes.as_slice() {
            [] => self.emit(&default_syntax(self.bundle))?,
            [only] => self.emit(only)?,
            many => {
                let mut children = Vec::with_capacity(many.len());
                for syntax in many {
                    children.push(Some(self.emit(syntax)?));
                }
                self.builder.alternation(children)?
            }
        };
        Ok(self.builder.finish(root)?)
    }

    fn emit(&mut self, syntax: &Syntax) -> Result<NodeId, CompileError> {
        match syntax {
            Syntax::Empty => Ok(self.builder.sequence(Vec::new())),
            Syntax::Symbol(text) => Ok(self.builder.symbol(text.as_str())),
            Syntax::Argument(name) => {
                lookup(self.bundle, name)?;
                Ok(self.builder.argument(name.as_str()))
            }
            Syntax::Sequence(items) => {
                if let [only] = items.as_slice() {
                    return self.emit(only);
                }
                let children = self.emit_all(items)?;
                Ok(self.builder.sequence(children))
            }
            Syntax::Alternatives(items) => {
                if items.len() < 2 {
                    return Err(GrammarError::TooFewAlternatives(items.len()).into());
                }
                let children = self.emit_all(items)?;
                Ok(self.builder.alternation(children.into_iter().map(Some).collect())?)
            }
            Syntax::Option(option) => self.emit_option(option),
            Syntax::OptionSet(options) => self.emit_option_set(options),
            Syntax::Powerset(items) => self.emit_powerset(items),
            Syntax::Repeat {
                item,
                min,
                max,
                eager,
            } => self.emit_repeat(item, *min, *max, *eager),
            Syntax::Labeled { label, item } => self.emit_labeled(label, item),
            Syntax::Ref(label) => Ok(self.builder.back_reference(label.as_str())),
        }
    }

    fn emit_all(&mut self, items: &[Syntax]) -> Result<Vec<NodeId>, CompileError> {
        items.iter().map(|item| self.emit(item)).collect()
    }

    fn emit_option(&mut self, option: &OptionSyntax) -> Result<NodeId, CompileError> {
        let argument = lookup(self.bundle, &option.argument)?;

        let trigger = match (&option.long, option.short) {
            (Some(long), Some(short)) => {
                let long = self.builder.symbol(format!("--{long}"));
                let short = self.builder.symbol(format!("-{short}"));
                self.builder.alternation(vec![Some(long), Some(short)])?
            }
            (Some(long), None) => self.builder.symbol(format!("--{long}")),
            (None, Some(short)) => self.builder.symbol(format!("-{short}")),
            (None, None) => return Err(CompileError::OptionWithoutName(option.argument.clone())),
        };

        let value = if argument.is_flag() {
            self.builder.preset(argument.name(), "true")
        } else {
            self.builder.argument(argument.name())
        };

        Ok(self.builder.sequence(vec![trigger, value]))
    }

    fn emit_option_set(&mut self, options: &[OptionSyntax]) -> Result<NodeId, CompileError> {
        if options.is_empty() {
            return Err(CompileError::EmptyCombinator("option set"));
        }

        let mut entries: Vec<ClusterEntry> = Vec::new();
        for option in options {
            let Some(letter) = option.short else {
                continue;
            };
            if entries.iter().any(|e| e.letter == letter) {
                return Err(CompileError::DuplicateShortOption(letter));
            }
            let argument = lookup(self.bundle, &option.argument)?;
            entries.push(ClusterEntry {
                letter,
                argument: argument.name().to_string(),
                takes_value: !argument.is_flag(),
            });
        }

        let mut choices = Vec::with_capacity(options.len() + 1);
        for option in options {
            choices.push(self.emit_option(option)?);
        }
        if entries.iter().any(|e| !e.takes_value) {
            choices.push(self.builder.cluster(entries));
        }

        let body = self.choose(choices)?;
        self.close_loop(body, true)
    }

    fn emit_powerset(&mut self, items: &[Syntax]) -> Result<NodeId, CompileError> {
        if items.is_empty() {
            return Err(CompileError::EmptyCombinator("powerset"));
        }

        let mut choices = Vec::with_capacity(items.len());
        for item in items {
            let node = self.emit(item)?;
            choices.push(self.builder.at_most_once(node));
        }

        let body = self.choose(choices)?;
        self.close_loop(body, true)
    }

    fn emit_repeat(
        &mut self,
        item: &Syntax,
        min: u32,
        max: Option<u32>,
        eager: bool,
    ) -> Result<NodeId, CompileError> {
        if let Some(max) = max
            && max < min
        {
            return Err(CompileError::InvalidRepeat { min, max });
        }
        if max.is_none() && item.matches_empty() {
            return Err(CompileError::EmptyLoop);
        }

        let mut parts = Vec::new();
        for _ in 0..min {
            parts.push(self.emit(item)?);
        }

        match max {
            Some(max) => {
                // Optional copies nest inside out: alt(seq(item, alt(item | ε)) | ε)
                let mut tail: Option<NodeId> = None;
                for _ in min..max {
                    let copy = self.emit(item)?;
                    let step = match tail {
                        Some(rest) => self.builder.sequence(vec![copy, rest]),
                        None => copy,
                    };
                    tail = Some(self.builder.alternation(branches(step, eager))?);
                }
                parts.extend(tail);
            }
            None => {
                let body = self.emit(item)?;
                parts.push(self.close_loop(body, eager)?);
            }
        }

        Ok(match parts.as_slice() {
            [only] => *only,
            _ => self.builder.sequence(parts),
        })
    }

    fn emit_labeled(&mut self, label: &str, item: &Syntax) -> Result<NodeId, CompileError> {
        if label.starts_with(GENERATED_LABEL_PREFIX) {
            return Err(CompileError::ReservedLabel(label.to_string()));
        }

        let mut node = self.emit(item)?;
        if self.builder.label_of(node).is_some() {
            node = self.builder.sequence(vec![node]);
        }
        self.builder.label(node, label)?;
        Ok(node)
    }

    /// A single choice stands alone; several become an alternation.
    fn choose(&mut self, choices: Vec<NodeId>) -> Result<NodeId, CompileError> {
        match choices.as_slice() {
            [only] => Ok(*only),
            _ => Ok(self
                .builder
                .alternation(choices.into_iter().map(Some).collect())?),
        }
    }

    /// `L: alt(seq(body, ref(L)) | ε)`, with the branches swapped when lazy.
    fn close_loop(&mut self, body: NodeId, eager: bool) -> Result<NodeId, CompileError> {
        let label = format!("{GENERATED_LABEL_PREFIX}loop{}", self.next_label);
        self.next_label += 1;

        let back = self.builder.back_reference(label.as_str());
        let step = self.builder.sequence(vec![body, back]);
        let node = self.builder.alternation(branches(step, eager))?;
        self.builder.label(node, label)?;
        Ok(node)
    }
}

fn branches(step: NodeId, eager: bool) -> Vec<Option<NodeId>> {
    if eager {
        vec![Some(step), None]
    } else {
        vec![None, Some(step)]
    }
}

fn lookup<'b>(bundle: &'b ArgumentBundle, name: &str) -> Result<&'b Argument, CompileError> {
    bundle
        .get(name)
        .ok_or_else(|| CompileError::UnknownArgument(name.to_string()))
}
