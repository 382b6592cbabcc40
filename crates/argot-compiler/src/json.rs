//! JSON command definitions.
//!
//! A definition declares the argument slots and the syntaxes of one command:
//!
//! ```json
//! {
//!   "alias": "cat",
//!   "arguments": {
//!     "number": { "type": "flag" },
//!     "file": { "type": "file", "requiredness": "mandatory", "count": "multiple" }
//!   },
//!   "syntaxes": [
//!     { "type": "sequence", "items": [
//!       { "type": "option_set", "options": [{ "argument": "number", "long": "number", "short": "n" }] },
//!       { "type": "repeat", "min": 1, "item": { "type": "argument", "name": "file" } }
//!     ]}
//!   ]
//! }
//! ```

use argot_core::{
    Argument, ArgumentBundle, ArgumentKind, BundleError, Count, Multiplicity, Requiredness,
};
use argot_grammar::Grammar;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::compile::{CompileError, Compiler};
use crate::syntax::{OptionSyntax, Syntax, SyntaxBundle};

#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("invalid definition JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bundle(#[from] BundleError),
}

/// Argument slots plus the syntaxes that bind them.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDefinition {
    pub bundle: ArgumentBundle,
    pub syntax: SyntaxBundle,
}

impl CommandDefinition {
    pub fn new(bundle: ArgumentBundle, syntax: SyntaxBundle) -> Self {
        Self { bundle, syntax }
    }

    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let raw: RawDefinition = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Compiles all syntaxes into one unresolved grammar.
    pub fn compile(&self) -> Result<Grammar, CompileError> {
        Compiler::new(&self.bundle).compile_bundle(&self.syntax)
    }
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    alias: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    arguments: IndexMap<String, RawArgument>,
    #[serde(default)]
    syntaxes: Vec<RawSyntax>,
}

impl TryFrom<RawDefinition> for CommandDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let arguments = raw.arguments.into_iter().map(|(name, arg)| {
            let argument = Argument::new(
                name,
                arg.kind,
                Multiplicity::new(arg.requiredness, arg.count),
            );
            match arg.description {
                Some(text) => argument.description(text),
                None => argument,
            }
        });
        let bundle = ArgumentBundle::new(arguments)?;

        let syntax = SyntaxBundle {
            alias: raw.alias,
            description: raw.description,
            syntaxes: raw.syntaxes.into_iter().map(Into::into).collect(),
        };
        Ok(Self { bundle, syntax })
    }
}

#[derive(Debug, Deserialize)]
struct RawArgument {
    #[serde(flatten)]
    kind: ArgumentKind,
    #[serde(default)]
    requiredness: Requiredness,
    #[serde(default)]
    count: Count,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    argument: String,
    #[serde(default)]
    long: Option<String>,
    #[serde(default)]
    short: Option<char>,
}

impl From<RawOption> for OptionSyntax {
    fn from(raw: RawOption) -> Self {
        Self {
            argument: raw.argument,
            long: raw.long,
            short: raw.short,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RawSyntax {
    Empty,
    Symbol {
        text: String,
    },
    Argument {
        name: String,
    },
    Sequence {
        items: Vec<RawSyntax>,
    },
    Alternatives {
        items: Vec<RawSyntax>,
    },
    Option(RawOption),
    OptionSet {
        options: Vec<RawOption>,
    },
    Powerset {
        items: Vec<RawSyntax>,
    },
    Repeat {
        item: Box<RawSyntax>,
        #[serde(default)]
        min: u32,
        #[serde(default)]
        max: Option<u32>,
        #[serde(default = "default_eager")]
        eager: bool,
    },
    Optional {
        item: Box<RawSyntax>,
    },
    Labeled {
        label: String,
        item: Box<RawSyntax>,
    },
    Ref {
        label: String,
    },
}

fn default_eager() -> bool {
    true
}

fn conv(items: Vec<RawSyntax>) -> Vec<Syntax> {
    items.into_iter().map(Into::into).collect()
}

impl From<RawSyntax> for Syntax {
    fn from(raw: RawSyntax) -> Self {
        match raw {
            RawSyntax::Empty => Syntax::Empty,
            RawSyntax::Symbol { text } => Syntax::Symbol(text),
            RawSyntax::Argument { name } => Syntax::Argument(name),
            RawSyntax::Sequence { items } => Syntax::Sequence(conv(items)),
            RawSyntax::Alternatives { items } => Syntax::Alternatives(conv(items)),
            RawSyntax::Option(option) => Syntax::Option(option.into()),
            RawSyntax::OptionSet { options } => {
                Syntax::OptionSet(options.into_iter().map(Into::into).collect())
            }
            RawSyntax::Powerset { items } => Syntax::Powerset(conv(items)),
            RawSyntax::Repeat {
                item,
                min,
                max,
                eager,
            } => Syntax::Repeat {
                item: Box::new((*item).into()),
                min,
                max,
                eager,
            },
            RawSyntax::Optional { item } => Syntax::optional((*item).into()),
            RawSyntax::Labeled { label, item } => Syntax::labeled(label, (*item).into()),
            RawSyntax::Ref { label } => Syntax::Ref(label),
        }
    }
}
