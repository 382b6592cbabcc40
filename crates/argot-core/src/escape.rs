//! Quoting words so they tokenize back to themselves.

/// Characters that need protection outside quotes.
fn is_plain(c: char) -> bool {
    !matches!(
        c,
        ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x08' | '\'' | '"' | '\\' | '<' | '>' | '|' | '#'
    )
}

/// Returns a word that [`tokenize`](crate::tokenize) reads back as `text`,
/// whatever tokenizer flags are in effect.
///
/// Plain words come back unchanged. Words with whitespace or punctuation are
/// single-quoted when that is enough; anything holding a single quote or a
/// control character is backslash-escaped character by character.
pub fn escape_word(text: &str) -> String {
    if text.is_empty() {
        return "''".to_string();
    }

    if text.chars().all(is_plain) {
        return text.to_string();
    }

    let quotable = !text
        .chars()
        .any(|c| matches!(c, '\'' | '\n' | '\r' | '\t' | '\x08' | '\x0C'));
    if quotable {
        return format!("'{text}'");
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x08' => out.push_str("\\b"),
            c if is_plain(c) => out.push(c),
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }
    out
}
