//! Converted argument values.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Modifier set plus a virtual key, e.g. `ctrl+alt+DELETE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyChord {
    /// Canonical (upper-case) modifier names in the order given.
    pub modifiers: Vec<String>,
    /// Canonical key name without the `VK_` prefix.
    pub key: String,
    /// Virtual key code from the name table.
    pub code: u16,
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{m}+")?;
        }
        f.write_str(&self.key)
    }
}

/// A token after conversion by its slot's [`ArgumentKind`](super::ArgumentKind).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    String(String),
    Integer(i64),
    Path(PathBuf),
    Url(url::Url),
    KeyChord(KeyChord),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Path(p) => write!(f, "{}", p.display()),
            Value::Url(u) => f.write_str(u.as_str()),
            Value::KeyChord(k) => write!(f, "{k}"),
        }
    }
}
