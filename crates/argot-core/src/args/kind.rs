//! Value kinds and their token conversions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::TypeError;
use super::keys::{KEY_NAMES, MODIFIER_NAMES, lookup_key, lookup_modifier};
use super::value::{KeyChord, Value};

/// Words accepted as a true flag value.
const TRUE_WORDS: &[&str] = &["true", "yes", "on"];
/// Words accepted as a false flag value.
const FALSE_WORDS: &[&str] = &["false", "no", "off"];

/// Closed set of argument value kinds.
///
/// Each variant converts exactly one token through [`accept`](Self::accept).
/// Bounds on the numeric kinds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArgumentKind {
    /// Presence-only switch. The triggering option supplies `true` itself.
    Flag,
    String,
    Integer {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    /// Hexadecimal number with an optional `0x` prefix.
    Hex {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    Enum {
        labels: Vec<String>,
    },
    File {
        #[serde(default)]
        must_exist: bool,
    },
    Url,
    /// `modifier+...+key`, e.g. `ctrl+alt+DELETE`.
    KeyChord,
}

impl ArgumentKind {
    pub fn integer() -> Self {
        ArgumentKind::Integer {
            min: None,
            max: None,
        }
    }

    pub fn integer_range(min: i64, max: i64) -> Self {
        ArgumentKind::Integer {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn hex() -> Self {
        ArgumentKind::Hex {
            min: None,
            max: None,
        }
    }

    pub fn enumeration<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgumentKind::Enum {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn file() -> Self {
        ArgumentKind::File { must_exist: false }
    }

    pub fn existing_file() -> Self {
        ArgumentKind::File { must_exist: true }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, ArgumentKind::Flag)
    }

    /// Short description of what the kind accepts, used in messages.
    pub fn describe(&self) -> String {
        match self {
            ArgumentKind::Flag => "a flag value".to_string(),
            ArgumentKind::String => "a string".to_string(),
            ArgumentKind::Integer { .. } => "an integer".to_string(),
            ArgumentKind::Hex { .. } => "a hexadecimal number".to_string(),
            ArgumentKind::Enum { labels } => format!("one of {}", labels.join(", ")),
            ArgumentKind::File { must_exist: true } => "an existing file".to_string(),
            ArgumentKind::File { must_exist: false } => "a file name".to_string(),
            ArgumentKind::Url => "a URL".to_string(),
            ArgumentKind::KeyChord => "a key chord".to_string(),
        }
    }

    /// Converts one token's text into a value.
    pub fn accept(&self, text: &str) -> Result<Value, TypeError> {
        let reject = |reason: &str| TypeError::new(self.describe(), reason, text);

        match self {
            ArgumentKind::Flag => {
                if TRUE_WORDS.contains(&text) {
                    Ok(Value::Bool(true))
                } else if FALSE_WORDS.contains(&text) {
                    Ok(Value::Bool(false))
                } else {
                    Err(reject("not a flag value"))
                }
            }
            ArgumentKind::String => Ok(Value::String(text.to_string())),
            ArgumentKind::Integer { min, max } => {
                let n = parse_decimal(text).ok_or_else(|| reject("not a valid integer"))?;
                check_range(n, *min, *max).map_err(|reason| reject(&reason))?;
                Ok(Value::Integer(n))
            }
            ArgumentKind::Hex { min, max } => {
                let n = parse_hex(text).map_err(|reason| reject(reason))?;
                check_range(n, *min, *max).map_err(|reason| reject(&reason))?;
                Ok(Value::Integer(n))
            }
            ArgumentKind::Enum { labels } => {
                if labels.iter().any(|l| l == text) {
                    Ok(Value::String(text.to_string()))
                } else {
                    Err(reject("unknown label"))
                }
            }
            ArgumentKind::File { must_exist } => {
                if text.is_empty() {
                    return Err(reject("empty file name"));
                }
                let path = PathBuf::from(text);
                if *must_exist && !path.exists() {
                    return Err(reject("file does not exist"));
                }
                Ok(Value::Path(path))
            }
            ArgumentKind::Url => url::Url::parse(text)
                .map(Value::Url)
                .map_err(|e| reject(&format!("not a valid URL ({e})"))),
            ArgumentKind::KeyChord => parse_key_chord(text)
                .map(Value::KeyChord)
                .map_err(|reason| reject(reason)),
        }
    }

    /// Candidate completions of a partially typed token, sorted.
    pub fn complete(&self, partial: &str) -> Vec<String> {
        let mut out = match self {
            ArgumentKind::Flag => TRUE_WORDS
                .iter()
                .chain(FALSE_WORDS)
                .filter(|w| w.starts_with(partial))
                .map(|w| w.to_string())
                .collect(),
            ArgumentKind::Enum { labels } => labels
                .iter()
                .filter(|l| l.starts_with(partial))
                .cloned()
                .collect(),
            ArgumentKind::File { .. } => complete_path(partial),
            ArgumentKind::KeyChord => complete_key_chord(partial),
            ArgumentKind::String
            | ArgumentKind::Integer { .. }
            | ArgumentKind::Hex { .. }
            | ArgumentKind::Url => Vec::new(),
        };
        out.sort();
        out.dedup();
        out
    }
}

/// Locale-independent decimal: optional sign, ASCII digits only.
fn parse_decimal(text: &str) -> Option<i64> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_hex(text: &str) -> Result<i64, &'static str> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err("missing hexadecimal digits");
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("not a valid hexadecimal character");
    }
    i64::from_str_radix(digits, 16).map_err(|_| "hexadecimal number too large")
}

fn check_range(n: i64, min: Option<i64>, max: Option<i64>) -> Result<(), String> {
    match (min, max) {
        (Some(lo), _) if n < lo => Err(format!("value below minimum {lo}")),
        (_, Some(hi)) if n > hi => Err(format!("value above maximum {hi}")),
        _ => Ok(()),
    }
}

fn parse_key_chord(text: &str) -> Result<KeyChord, &'static str> {
    let mut parts: Vec<&str> = text.split('+').collect();
    let key = parts.pop().unwrap_or_default();
    if key.is_empty() {
        return Err("missing key name");
    }

    let mut modifiers = Vec::with_capacity(parts.len());
    for part in parts {
        let m = lookup_modifier(part).ok_or("unknown modifier name")?;
        if modifiers.contains(&m.to_string()) {
            return Err("repeated modifier");
        }
        modifiers.push(m.to_string());
    }

    let (name, code) = lookup_key(key).ok_or("unknown virtual key name")?;
    Ok(KeyChord {
        modifiers,
        key: name.to_string(),
        code,
    })
}

fn complete_key_chord(partial: &str) -> Vec<String> {
    let (head, last) = match partial.rfind('+') {
        Some(i) => partial.split_at(i + 1),
        None => ("", partial),
    };
    let upper = last.to_ascii_uppercase();

    let modifiers = MODIFIER_NAMES
        .iter()
        .filter(|m| m.starts_with(&upper))
        .map(|m| format!("{head}{m}+"));
    let keys = KEY_NAMES
        .iter()
        .filter(|(k, _)| k.starts_with(&upper))
        .map(|(k, _)| format!("{head}{k}"));
    modifiers.chain(keys).collect()
}

/// Lists directory entries matching the partial path. Directories end in `/`.
fn complete_path(partial: &str) -> Vec<String> {
    let (dir, prefix) = match partial.rfind('/') {
        Some(i) => partial.split_at(i + 1),
        None => ("", partial),
    };
    let search = if dir.is_empty() { Path::new(".") } else { Path::new(dir) };

    let Ok(entries) = std::fs::read_dir(search) else {
        return Vec::new();
    };

    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if !name.starts_with(prefix) || (prefix.is_empty() && name.starts_with('.')) {
                return None;
            }
            let suffix = if entry.path().is_dir() { "/" } else { "" };
            Some(format!("{dir}{name}{suffix}"))
        })
        .collect()
}
