//! Candidates for the word being typed.

use indexmap::IndexSet;
use serde::Serialize;

/// What may replace the word at `position`.
///
/// When the line ends in whitespace the word is a new, empty one at the
/// end of the input; otherwise it is the last token, whose text is
/// `partial`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Completions {
    /// Token index of the word being completed.
    pub position: usize,
    /// Text already typed for that word.
    pub partial: String,
    /// Candidates in the order the grammar produced them, without duplicates.
    pub candidates: IndexSet<String>,
}

impl Completions {
    pub(crate) fn new(position: usize, partial: impl Into<String>) -> Self {
        Self {
            position,
            partial: partial.into(),
            candidates: IndexSet::new(),
        }
    }

    pub(crate) fn add(&mut self, candidate: impl Into<String>) {
        self.candidates.insert(candidate.into());
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(String::as_str)
    }
}
