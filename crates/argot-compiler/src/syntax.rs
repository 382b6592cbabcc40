//! Surface syntax: the combinators command authors write.
//!
//! Pure data. Nothing here touches a grammar until [`Compiler`](crate::Compiler)
//! lowers it.

/// `--long` and/or `-s` followed by the argument's value.
///
/// Flag arguments take no value: the option word alone binds `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSyntax {
    pub argument: String,
    pub long: Option<String>,
    pub short: Option<char>,
}

impl OptionSyntax {
    pub fn new(argument: impl Into<String>) -> Self {
        Self {
            argument: argument.into(),
            long: None,
            short: None,
        }
    }

    pub fn long(mut self, name: impl Into<String>) -> Self {
        self.long = Some(name.into());
        self
    }

    pub fn short(mut self, letter: char) -> Self {
        self.short = Some(letter);
        self
    }
}

/// A surface combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Syntax {
    /// Matches zero tokens.
    Empty,
    /// One literal word.
    Symbol(String),
    /// One word converted by the named argument slot.
    Argument(String),
    /// Items in order.
    Sequence(Vec<Syntax>),
    /// Exactly one of at least two items; earlier items are tried first.
    Alternatives(Vec<Syntax>),
    Option(OptionSyntax),
    /// Any subset of the options in any order, repeats allowed, with
    /// short-flag clustering (`-xyz` is `-x -y -z`).
    OptionSet(Vec<OptionSyntax>),
    /// Any subset of the items in any order, each at most once.
    Powerset(Vec<Syntax>),
    /// `min..=max` repetitions of the item; `max: None` is unbounded.
    ///
    /// `max` must not be below `min`; `0..=0` matches zero tokens. An
    /// unbounded repeat needs an item that always consumes a token.
    ///
    /// Eager repeats try one more repetition before what follows; lazy
    /// repeats try what follows first.
    Repeat {
        item: Box<Syntax>,
        min: u32,
        max: Option<u32>,
        eager: bool,
    },
    /// Names the item so a [`Syntax::Ref`] inside or beside it can point back.
    Labeled { label: String, item: Box<Syntax> },
    /// Recursion point, resolved to the nearest enclosing label.
    Ref(String),
}

impl Syntax {
    pub fn symbol(text: impl Into<String>) -> Self {
        Syntax::Symbol(text.into())
    }

    pub fn argument(name: impl Into<String>) -> Self {
        Syntax::Argument(name.into())
    }

    pub fn sequence(items: impl IntoIterator<Item = Syntax>) -> Self {
        Syntax::Sequence(items.into_iter().collect())
    }

    pub fn alternatives(items: impl IntoIterator<Item = Syntax>) -> Self {
        Syntax::Alternatives(items.into_iter().collect())
    }

    pub fn option(option: OptionSyntax) -> Self {
        Syntax::Option(option)
    }

    pub fn option_set(options: impl IntoIterator<Item = OptionSyntax>) -> Self {
        Syntax::OptionSet(options.into_iter().collect())
    }

    pub fn powerset(items: impl IntoIterator<Item = Syntax>) -> Self {
        Syntax::Powerset(items.into_iter().collect())
    }

    pub fn repeat(item: Syntax, min: u32, max: Option<u32>) -> Self {
        Syntax::Repeat {
            item: Box::new(item),
            min,
            max,
            eager: true,
        }
    }

    pub fn lazy_repeat(item: Syntax, min: u32, max: Option<u32>) -> Self {
        Syntax::Repeat {
            item: Box::new(item),
            min,
            max,
            eager: false,
        }
    }

    /// Zero or one occurrence.
    pub fn optional(item: Syntax) -> Self {
        Self::repeat(item, 0, Some(1))
    }

    pub fn labeled(label: impl Into<String>, item: Syntax) -> Self {
        Syntax::Labeled {
            label: label.into(),
            item: Box::new(item),
        }
    }

    pub fn reference(label: impl Into<String>) -> Self {
        Syntax::Ref(label.into())
    }

    /// True when the item can succeed without consuming a token.
    ///
    /// References count as consuming; they are not followed.
    pub fn matches_empty(&self) -> bool {
        match self {
            Syntax::Empty | Syntax::OptionSet(_) | Syntax::Powerset(_) => true,
            Syntax::Symbol(_) | Syntax::Argument(_) | Syntax::Option(_) | Syntax::Ref(_) => false,
            Syntax::Sequence(items) => items.iter().all(Syntax::matches_empty),
            Syntax::Alternatives(items) => items.iter().any(Syntax::matches_empty),
            Syntax::Repeat { item, min, .. } => *min == 0 || item.matches_empty(),
            Syntax::Labeled { item, .. } => item.matches_empty(),
        }
    }
}

/// All syntaxes registered for one command alias.
///
/// Several syntaxes are alternatives of each other, tried in declaration
/// order. With none, the command falls back to
/// [`default_syntax`](crate::default_syntax).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxBundle {
    pub alias: String,
    pub description: Option<String>,
    pub syntaxes: Vec<Syntax>,
}

impl SyntaxBundle {
    pub fn new(alias: impl Into<String>, syntaxes: impl IntoIterator<Item = Syntax>) -> Self {
        Self {
            alias: alias.into(),
            description: None,
            syntaxes: syntaxes.into_iter().collect(),
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
}
