use std::fs;

use super::*;

fn reject(kind: &ArgumentKind, text: &str) -> String {
    kind.accept(text).unwrap_err().to_string()
}

#[test]
fn flag_words() {
    let kind = ArgumentKind::Flag;

    assert_eq!(kind.accept("true"), Ok(Value::Bool(true)));
    assert_eq!(kind.accept("off"), Ok(Value::Bool(false)));
    insta::assert_snapshot!(reject(&kind, "maybe"), @"not a flag value: 'maybe' (expected a flag value)");
}

#[test]
fn integer_is_locale_independent() {
    let kind = ArgumentKind::integer();

    assert_eq!(kind.accept("42"), Ok(Value::Integer(42)));
    assert_eq!(kind.accept("-7"), Ok(Value::Integer(-7)));
    assert_eq!(kind.accept("+7"), Ok(Value::Integer(7)));
    assert!(kind.accept("1,000").is_err());
    assert!(kind.accept("١٢").is_err());
    assert!(kind.accept(" 1").is_err());
    insta::assert_snapshot!(reject(&kind, "12abc"), @"not a valid integer: '12abc' (expected an integer)");
}

#[test]
fn integer_range_is_inclusive() {
    let kind = ArgumentKind::integer_range(1, 10);

    assert!(kind.accept("1").is_ok());
    assert!(kind.accept("10").is_ok());
    insta::assert_snapshot!(reject(&kind, "0"), @"value below minimum 1: '0' (expected an integer)");
    insta::assert_snapshot!(reject(&kind, "11"), @"value above maximum 10: '11' (expected an integer)");
}

#[test]
fn integer_overflow_is_rejected() {
    let kind = ArgumentKind::integer();

    assert!(kind.accept("99999999999999999999").is_err());
}

#[test]
fn hex_numbers() {
    let kind = ArgumentKind::hex();

    assert_eq!(kind.accept("ff"), Ok(Value::Integer(255)));
    assert_eq!(kind.accept("0x1F"), Ok(Value::Integer(31)));
    insta::assert_snapshot!(reject(&kind, "0xfg"), @"not a valid hexadecimal character: '0xfg' (expected a hexadecimal number)");
    insta::assert_snapshot!(reject(&kind, "0x"), @"missing hexadecimal digits: '0x' (expected a hexadecimal number)");
}

#[test]
fn enum_is_case_sensitive() {
    let kind = ArgumentKind::enumeration(["red", "green"]);

    assert_eq!(kind.accept("red"), Ok(Value::String("red".into())));
    insta::assert_snapshot!(reject(&kind, "Red"), @"unknown label: 'Red' (expected one of red, green)");
}

#[test]
fn file_existence_only_when_demanded() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.txt");
    fs::write(&present, "x").unwrap();
    let missing = dir.path().join("missing.txt");

    let loose = ArgumentKind::file();
    let strict = ArgumentKind::existing_file();

    assert!(loose.accept(missing.to_str().unwrap()).is_ok());
    assert!(strict.accept(present.to_str().unwrap()).is_ok());
    let err = strict.accept(missing.to_str().unwrap()).unwrap_err();
    assert_eq!(err.reason, "file does not exist");
    assert_eq!(err.text, missing.to_str().unwrap());
}

#[test]
fn url_must_be_absolute() {
    let kind = ArgumentKind::Url;

    let value = kind.accept("http://example.org/a?b=c").unwrap();
    assert_eq!(value.to_string(), "http://example.org/a?b=c");

    let err = kind.accept("example.org").unwrap_err();
    assert!(err.reason.starts_with("not a valid URL"));
    assert_eq!(err.text, "example.org");
}

#[test]
fn key_chords() {
    let kind = ArgumentKind::KeyChord;

    let Ok(Value::KeyChord(chord)) = kind.accept("ctrl+alt+VK_delete") else {
        panic!("expected a key chord");
    };
    assert_eq!(chord.modifiers, vec!["CTRL", "ALT"]);
    assert_eq!(chord.key, "DELETE");
    assert_eq!(chord.code, 127);
    assert_eq!(chord.to_string(), "CTRL+ALT+DELETE");

    insta::assert_snapshot!(reject(&kind, "ctrl+NOPE"), @"unknown virtual key name: 'ctrl+NOPE' (expected a key chord)");
    insta::assert_snapshot!(reject(&kind, "hyper+A"), @"unknown modifier name: 'hyper+A' (expected a key chord)");
    insta::assert_snapshot!(reject(&kind, "ctrl+"), @"missing key name: 'ctrl+' (expected a key chord)");
}

#[test]
fn complete_enum_and_flag() {
    let kind = ArgumentKind::enumeration(["green", "grey", "red"]);
    assert_eq!(kind.complete("gr"), vec!["green", "grey"]);
    assert!(kind.complete("x").is_empty());

    assert_eq!(ArgumentKind::Flag.complete("o"), vec!["off", "on"]);
    assert!(ArgumentKind::String.complete("").is_empty());
}

#[test]
fn complete_key_chord_after_modifier() {
    let got = ArgumentKind::KeyChord.complete("ctrl+f1");

    assert_eq!(got, vec!["ctrl+F1", "ctrl+F10", "ctrl+F11", "ctrl+F12"]);
}

#[test]
fn complete_files_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("alpha.txt"), "").unwrap();
    fs::write(dir.path().join("beta.txt"), "").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();

    let base = format!("{}/", dir.path().display());
    let got = ArgumentKind::file().complete(&format!("{base}a"));

    assert_eq!(got, vec![format!("{base}alpha.txt"), format!("{base}assets/")]);
}
