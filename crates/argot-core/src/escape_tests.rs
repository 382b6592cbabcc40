use super::*;

fn reparse(word: &str) -> Vec<String> {
    let flags = TokenizerFlags::new().redirects(true).comments(true);
    tokenize(word, flags)
        .into_tokens()
        .into_iter()
        .map(|t| t.text)
        .collect()
}

#[test]
fn plain_words_unchanged() {
    assert_eq!(escape_word("ls"), "ls");
    assert_eq!(escape_word("--file=a.txt"), "--file=a.txt");
}

#[test]
fn empty_word_is_quoted() {
    assert_eq!(escape_word(""), "''");
    assert_eq!(reparse("''"), vec![String::new()]);
}

#[test]
fn spaces_and_specials_are_single_quoted() {
    assert_eq!(escape_word("a b"), "'a b'");
    assert_eq!(escape_word("x|y"), "'x|y'");
    assert_eq!(escape_word(r#"say "hi""#), r#"'say "hi"'"#);
}

#[test]
fn single_quotes_and_controls_are_backslashed() {
    assert_eq!(escape_word("it's"), r"it\'s");
    assert_eq!(escape_word("a\tb c"), r"a\tb\ c");
}

#[test]
fn escaped_words_tokenize_back() {
    let words = [
        "plain",
        "two words",
        "it's #1",
        "tab\there",
        "back\\slash",
        "<in>",
        "line\nbreak\x08",
        "",
    ];

    for word in words {
        let escaped = escape_word(word);
        assert_eq!(reparse(&escaped), vec![word.to_string()], "{escaped}");
    }
}
