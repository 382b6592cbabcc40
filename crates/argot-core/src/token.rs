//! Token records produced by the tokenizer.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Plain unquoted text.
    Literal,
    /// Text that was (at least partly) quoted, with every quote closed.
    ClosedString,
    /// Text with an unmatched quote or a trailing backslash.
    ///
    /// Not an error: interactive callers use it to keep completing a word.
    UnclosedString,
    /// Redirection punctuation (`<`, `>`, `|`), only when redirects are enabled.
    Special,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Literal => "literal",
            TokenKind::ClosedString => "string",
            TokenKind::UnclosedString => "unclosed",
            TokenKind::Special => "special",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One word of a command line.
///
/// `text` is the unquoted, unescaped content. `start..end` is the byte range
/// the word occupied in the raw line, quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Range<usize>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            start: span.start,
            end: span.end,
            kind,
        }
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn is_special(&self) -> bool {
        self.kind == TokenKind::Special
    }

    #[inline]
    pub fn is_unclosed(&self) -> bool {
        self.kind == TokenKind::UnclosedString
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}..{}", self.kind, self.text, self.start, self.end)
    }
}
