//! Seekable cursor over a tokenized command line.

use crate::token::{Token, TokenKind};

/// Cursor position outside `0..=len`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeekError {
    #[error("cursor position {position} is out of range 0..={len}")]
    OutOfRange { position: usize, len: usize },
}

/// Ordered tokens plus a read position.
///
/// The parser records positions with [`tell`](Self::tell) and returns to
/// them with [`seek`](Self::seek) when it backtracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
    whitespace_after_last: bool,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>, whitespace_after_last: bool) -> Self {
        Self {
            tokens,
            position: 0,
            whitespace_after_last,
        }
    }

    /// Builds a cursor from words that were split by someone else.
    ///
    /// Offsets are synthesized as if the words had been joined by single
    /// spaces, so diagnostics can still point at a word.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = Vec::new();
        let mut offset = 0;
        for word in words {
            let text: String = word.into();
            let end = offset + text.len();
            tokens.push(Token::new(text, offset..end, TokenKind::Literal));
            offset = end + 1;
        }
        let empty = tokens.is_empty();
        Self::new(tokens, empty)
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Returns the token at the cursor and advances past it.
    pub fn next(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    #[inline]
    pub fn tell(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `position`, which may equal `len()` (end of input).
    pub fn seek(&mut self, position: usize) -> Result<(), SeekError> {
        if position > self.tokens.len() {
            return Err(SeekError::OutOfRange {
                position,
                len: self.tokens.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// True when the line is blank or ends in whitespace after its last word.
    ///
    /// Completion uses this to decide between finishing the last word and
    /// proposing a new one.
    #[inline]
    pub fn whitespace_after_last(&self) -> bool {
        self.whitespace_after_last
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[Token] {
        &self.tokens[self.position..]
    }

    pub fn get(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
