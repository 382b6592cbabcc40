//! Tokenizer for raw command lines.
//!
//! Logos splits the line into lexical pieces (runs of plain text, quoted
//! runs, escapes, whitespace, punctuation). A second pass glues adjacent
//! pieces into words, so `a'b c'd` is one token with text `ab cd`.
//!
//! ## Unclosed input
//!
//! An unmatched quote or a trailing backslash never fails: the word that
//! contains it is emitted as [`TokenKind::UnclosedString`]. Interactive
//! callers rely on this to complete half-typed words.

use logos::Logos;

use crate::cursor::TokenCursor;
use crate::token::{Token, TokenKind};

/// Options that change how punctuation is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenizerFlags {
    pub(crate) redirects: bool,
    pub(crate) comments: bool,
}

impl TokenizerFlags {
    /// Whitespace and quoting only.
    pub const NONE: Self = Self {
        redirects: false,
        comments: false,
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Split unquoted `<`, `>` and `|` into their own special tokens.
    pub fn redirects(mut self, enabled: bool) -> Self {
        self.redirects = enabled;
        self
    }

    /// Treat an unquoted `#` as the start of a comment running to end of line.
    pub fn comments(mut self, enabled: bool) -> Self {
        self.comments = enabled;
        self
    }
}

/// Lexical pieces of a command line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[regex(r"'[^']*", allow_greedy = true)]
    UnclosedSingle,

    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    #[regex(r#""[^"]*"#, allow_greedy = true)]
    UnclosedDouble,

    #[regex(r"\\.")]
    #[token("\\\n")]
    Escape,

    /// A backslash with nothing after it.
    #[token("\\")]
    DanglingBackslash,

    #[token("<")]
    #[token(">")]
    #[token("|")]
    Punct,

    #[token("#")]
    Hash,

    #[regex(r#"[^ \t\r\n\x0C'"\\<>|#]+"#, allow_greedy = true)]
    Text,
}

/// Word under construction.
struct WordBuilder {
    text: String,
    start: usize,
    end: usize,
    quoted: bool,
    unclosed: bool,
}

impl WordBuilder {
    fn new(start: usize) -> Self {
        Self {
            text: String::new(),
            start,
            end: start,
            quoted: false,
            unclosed: false,
        }
    }

    fn finish(self) -> Token {
        let kind = match (self.quoted, self.unclosed) {
            (_, true) => TokenKind::UnclosedString,
            (true, false) => TokenKind::ClosedString,
            (false, false) => TokenKind::Literal,
        };
        Token::new(self.text, self.start..self.end, kind)
    }
}

/// Tokenizes a raw command line.
///
/// Byte offsets on the produced tokens refer to `line`. The returned cursor
/// is positioned before the first token.
pub fn tokenize(line: &str, flags: TokenizerFlags) -> TokenCursor {
    let mut tokens = Vec::new();
    let mut word: Option<WordBuilder> = None;
    let mut trailing_whitespace = false;
    let mut lexer = Piece::lexer(line);

    while let Some(piece) = lexer.next() {
        let span = lexer.span();
        let slice = &line[span.clone()];
        trailing_whitespace = false;

        let piece = match piece {
            Ok(piece) => piece,
            // Every character is covered by some piece; keep the text if not.
            Err(()) => Piece::Text,
        };

        match piece {
            Piece::Whitespace => {
                if let Some(w) = word.take() {
                    tokens.push(w.finish());
                }
                trailing_whitespace = true;
                continue;
            }
            Piece::Punct if flags.redirects => {
                if let Some(w) = word.take() {
                    tokens.push(w.finish());
                }
                tokens.push(Token::new(slice, span, TokenKind::Special));
                continue;
            }
            Piece::Hash if flags.comments => {
                if let Some(w) = word.take() {
                    tokens.push(w.finish());
                }
                // Whitespace before the comment still counts as trailing.
                trailing_whitespace = line[..span.start]
                    .chars()
                    .next_back()
                    .is_some_and(is_separator);
                break;
            }
            _ => {}
        }

        let w = word.get_or_insert_with(|| WordBuilder::new(span.start));
        w.end = span.end;

        match piece {
            Piece::SingleQuoted | Piece::DoubleQuoted => {
                w.text.push_str(&slice[1..slice.len() - 1]);
                w.quoted = true;
            }
            Piece::UnclosedSingle | Piece::UnclosedDouble => {
                w.text.push_str(&slice[1..]);
                w.quoted = true;
                w.unclosed = true;
            }
            Piece::Escape => {
                let escaped = slice[1..].chars().next().unwrap_or('\\');
                w.text.push(unescape(escaped));
            }
            Piece::DanglingBackslash => {
                w.unclosed = true;
            }
            Piece::Punct | Piece::Hash | Piece::Text => {
                w.text.push_str(slice);
            }
            Piece::Whitespace => unreachable!("whitespace flushed above"),
        }
    }

    if let Some(w) = word.take() {
        tokens.push(w.finish());
    }

    let whitespace_after_last = tokens.is_empty() || trailing_whitespace;
    TokenCursor::new(tokens, whitespace_after_last)
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Maps the character after a backslash to the character it stands for.
fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'b' => '\x08',
        other => other,
    }
}
