//! A raw command line together with its tokens.

use argot_core::{Token, TokenCursor, TokenizerFlags, tokenize};

/// Source text plus the tokens it splits into.
///
/// Diagnostics point into [`source`](Self::source) using the tokens' byte
/// offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    source: String,
    cursor: TokenCursor,
}

impl CommandLine {
    /// Tokenizes `line`.
    pub fn parse(line: &str, flags: TokenizerFlags) -> Self {
        Self {
            source: line.to_string(),
            cursor: tokenize(line, flags),
        }
    }

    /// Wraps words that were already split, e.g. process arguments.
    ///
    /// Every word becomes one literal token; the source is the words joined
    /// by single spaces.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        Self {
            source: words.join(" "),
            cursor: TokenCursor::from_words(words),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        self.cursor.tokens()
    }

    pub fn cursor(&self) -> &TokenCursor {
        &self.cursor
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    pub fn whitespace_after_last(&self) -> bool {
        self.cursor.whitespace_after_last()
    }

    /// True if a quote was left open or the line ends in a backslash.
    pub fn is_unclosed(&self) -> bool {
        self.tokens().iter().any(Token::is_unclosed)
    }
}
