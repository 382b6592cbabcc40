use argot_compiler::{OptionSyntax, Syntax, compile};
use argot_core::{
    Argument, ArgumentBundle, ArgumentKind, Multiplicity, Token, TokenCursor, TokenKind, Value,
};
use argot_grammar::{Grammar, GrammarBuilder};

use super::{ParseLimits, RuntimeError, VM, parse};

fn grammar(syntax: &Syntax, bundle: &ArgumentBundle) -> Grammar {
    let mut grammar = compile(syntax, bundle).unwrap();
    grammar.resolve_back_references().unwrap();
    grammar
}

fn run(syntax: &Syntax, bundle: &mut ArgumentBundle, words: &[&str]) -> Result<usize, RuntimeError> {
    let grammar = grammar(syntax, bundle);
    let mut cursor = TokenCursor::from_words(words.iter().copied());
    parse(&grammar, bundle, &mut cursor, ParseLimits::default())
}

fn message(syntax: &Syntax, bundle: &mut ArgumentBundle, words: &[&str]) -> String {
    run(syntax, bundle, words).unwrap_err().to_string()
}

/// Bound slots as `name = v1, v2` lines.
fn show(bundle: &ArgumentBundle) -> String {
    bundle
        .iter()
        .filter(|a| a.is_set())
        .map(|a| {
            let values: Vec<String> = a.values().iter().map(ToString::to_string).collect();
            format!("{} = {}", a.name(), values.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn strings(names: &[&str], multiplicity: Multiplicity) -> ArgumentBundle {
    ArgumentBundle::new(
        names
            .iter()
            .map(|n| Argument::new(*n, ArgumentKind::String, multiplicity)),
    )
    .unwrap()
}

fn file_option() -> Syntax {
    Syntax::option(OptionSyntax::new("file").long("file").short('f'))
}

#[test]
fn option_binds_value() {
    let mut bundle = strings(&["file"], Multiplicity::OPTIONAL_SINGLE);

    let end = run(&file_option(), &mut bundle, &["-f", "F1"]).unwrap();

    assert_eq!(end, 2);
    insta::assert_snapshot!(show(&bundle), @"file = F1");
}

#[test]
fn option_reports_both_triggers() {
    let mut bundle = strings(&["file"], Multiplicity::OPTIONAL_SINGLE);

    insta::assert_snapshot!(
        message(&file_option(), &mut bundle, &["-g", "F1"]),
        @"unexpected `-g`, expected `--file` or `-f`"
    );
    assert!(!bundle.get("file").unwrap().is_set());
}

#[test]
fn missing_option_value() {
    let mut bundle = strings(&["file"], Multiplicity::OPTIONAL_SINGLE);

    insta::assert_snapshot!(
        message(&file_option(), &mut bundle, &["--file"]),
        @"unexpected end of input, expected <file>"
    );
}

#[test]
fn left_recursion_hits_step_limit() {
    // top ::= 'b' | top top
    let syntax = Syntax::labeled(
        "top",
        Syntax::alternatives([
            Syntax::symbol("b"),
            Syntax::sequence([Syntax::reference("top"), Syntax::reference("top")]),
        ]),
    );
    let mut bundle = ArgumentBundle::empty();

    assert_eq!(run(&syntax, &mut bundle, &["b"]), Ok(1));
    assert_eq!(run(&syntax, &mut bundle, &["b", "b"]), Ok(2));
    assert_eq!(
        run(&syntax, &mut bundle, &["a"]),
        Err(RuntimeError::StepLimitExceeded(10_000))
    );
}

#[test]
fn unresolved_back_reference_is_an_error() {
    let syntax = Syntax::labeled(
        "top",
        Syntax::alternatives([
            Syntax::symbol("b"),
            Syntax::sequence([Syntax::reference("top"), Syntax::reference("top")]),
        ]),
    );
    let bundle = ArgumentBundle::empty();
    let grammar = compile(&syntax, &bundle).unwrap();
    let mut cursor = TokenCursor::from_words(["b", "b"]);

    let result = VM::builder(&grammar, &bundle, &mut cursor).build().execute();

    assert_eq!(
        result,
        Err(RuntimeError::UnresolvedBackReference("top".into()))
    );
}

#[test]
fn unknown_slot_is_an_error() {
    let mut b = GrammarBuilder::new();
    let root = b.argument("ghost");
    let grammar = b.finish(root).unwrap();
    let mut bundle = ArgumentBundle::empty();
    let mut cursor = TokenCursor::from_words(["x"]);

    let result = parse(&grammar, &mut bundle, &mut cursor, ParseLimits::default());

    assert_eq!(result, Err(RuntimeError::UnknownArgument("ghost".into())));
}

#[test]
fn alternatives_are_exclusive() {
    let mut bundle = ArgumentBundle::new([
        Argument::new("count", ArgumentKind::integer(), Multiplicity::OPTIONAL_SINGLE),
        Argument::new("file", ArgumentKind::String, Multiplicity::OPTIONAL_SINGLE),
        Argument::flag("force"),
    ])
    .unwrap();
    let syntax = Syntax::alternatives([
        Syntax::option(OptionSyntax::new("count").short('i')),
        Syntax::option(OptionSyntax::new("file").short('f')),
        Syntax::option(OptionSyntax::new("force").short('x')),
    ]);

    run(&syntax, &mut bundle, &["-i", "3"]).unwrap();
    insta::assert_snapshot!(show(&bundle), @"count = 3");

    run(&syntax, &mut bundle, &["-x"]).unwrap();
    insta::assert_snapshot!(show(&bundle), @"force = true");

    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["-i", "3", "-x"]),
        @"unexpected `-x`"
    );
    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["-f", "a", "-f", "b"]),
        @"unexpected `-f`"
    );
}

#[test]
fn first_alternative_wins() {
    let mut bundle = strings(&["first", "second"], Multiplicity::OPTIONAL_SINGLE);
    let syntax = Syntax::alternatives([Syntax::argument("first"), Syntax::argument("second")]);

    run(&syntax, &mut bundle, &["v"]).unwrap();

    insta::assert_snapshot!(show(&bundle), @"first = v");
}

#[test]
fn bounded_repeat() {
    let mut bundle = strings(&["item"], Multiplicity::OPTIONAL_MULTIPLE);
    let syntax = Syntax::repeat(Syntax::argument("item"), 3, Some(6));

    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["a", "b"]),
        @"unexpected end of input, expected <item>"
    );

    run(&syntax, &mut bundle, &["a", "b", "c"]).unwrap();
    insta::assert_snapshot!(show(&bundle), @"item = a, b, c");

    run(&syntax, &mut bundle, &["a", "b", "c", "d", "e", "f"]).unwrap();
    insta::assert_snapshot!(show(&bundle), @"item = a, b, c, d, e, f");

    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["a", "b", "c", "d", "e", "f", "g"]),
        @"unexpected `g`"
    );
}

#[test]
fn eager_repeat_takes_as_much_as_possible() {
    let mut bundle = strings(&["head", "tail"], Multiplicity::OPTIONAL_MULTIPLE);
    let syntax = Syntax::sequence([
        Syntax::repeat(Syntax::argument("head"), 0, None),
        Syntax::optional(Syntax::argument("tail")),
    ]);

    run(&syntax, &mut bundle, &["a", "b"]).unwrap();

    insta::assert_snapshot!(show(&bundle), @"head = a, b");
}

#[test]
fn lazy_repeat_takes_as_little_as_possible() {
    let mut bundle = strings(&["head", "tail"], Multiplicity::OPTIONAL_MULTIPLE);
    let syntax = Syntax::sequence([
        Syntax::lazy_repeat(Syntax::argument("head"), 0, None),
        Syntax::optional(Syntax::argument("tail")),
    ]);

    run(&syntax, &mut bundle, &["a", "b"]).unwrap();

    insta::assert_snapshot!(show(&bundle), @r"
    head = a
    tail = b
    ");
}

#[test]
fn single_slot_rejects_second_value() {
    let mut bundle = ArgumentBundle::new([Argument::flag("verbose")]).unwrap();
    let syntax = Syntax::option_set([OptionSyntax::new("verbose").long("verbose").short('v')]);

    run(&syntax, &mut bundle, &["-v"]).unwrap();
    insta::assert_snapshot!(show(&bundle), @"verbose = true");

    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["-v", "--verbose"]),
        @"argument `verbose` accepts a single value"
    );
}

#[test]
fn option_set_in_any_order() {
    let mut bundle = ArgumentBundle::new([
        Argument::flag("verbose"),
        Argument::new("file", ArgumentKind::String, Multiplicity::OPTIONAL_SINGLE),
    ])
    .unwrap();
    let syntax = Syntax::option_set([
        OptionSyntax::new("verbose").long("verbose").short('v'),
        OptionSyntax::new("file").long("file").short('f'),
    ]);

    run(&syntax, &mut bundle, &["--file", "x", "-v"]).unwrap();
    insta::assert_snapshot!(show(&bundle), @r"
    verbose = true
    file = x
    ");

    assert_eq!(run(&syntax, &mut bundle, &[]), Ok(0));
    assert_eq!(show(&bundle), "");
}

#[test]
fn short_flag_cluster() {
    let mut bundle = ArgumentBundle::new([
        Argument::flag("verbose"),
        Argument::flag("all"),
        Argument::new("file", ArgumentKind::String, Multiplicity::OPTIONAL_SINGLE),
    ])
    .unwrap();
    let syntax = Syntax::option_set([
        OptionSyntax::new("verbose").short('v'),
        OptionSyntax::new("all").short('a'),
        OptionSyntax::new("file").short('f'),
    ]);

    run(&syntax, &mut bundle, &["-va"]).unwrap();
    insta::assert_snapshot!(show(&bundle), @r"
    verbose = true
    all = true
    ");

    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["-vf", "x"]),
        @"option `-f` takes a value and cannot be combined"
    );
    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["-vz"]),
        @"option `-z` is not a known flag"
    );
    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["-vav"]),
        @"argument `verbose` accepts a single value"
    );
}

#[test]
fn powerset_allows_each_item_once() {
    let mut bundle = ArgumentBundle::empty();
    let syntax = Syntax::powerset([Syntax::symbol("a"), Syntax::symbol("b")]);

    assert_eq!(run(&syntax, &mut bundle, &["b", "a"]), Ok(2));
    assert_eq!(run(&syntax, &mut bundle, &["a"]), Ok(1));
    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["a", "a"]),
        @"unexpected `a`, expected `b`"
    );
}

#[test]
fn missing_mandatory_argument() {
    let mut bundle = strings(&["file"], Multiplicity::MANDATORY_SINGLE);
    let syntax = Syntax::optional(Syntax::argument("file"));

    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &[]),
        @"missing mandatory argument `file`"
    );
}

#[test]
fn conversion_failure_names_the_slot() {
    let mut bundle = ArgumentBundle::new([Argument::new(
        "count",
        ArgumentKind::integer_range(1, 10),
        Multiplicity::OPTIONAL_SINGLE,
    )])
    .unwrap();
    let syntax = Syntax::argument("count");

    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["ten"]),
        @"invalid value for `count`: not a valid integer: 'ten' (expected an integer)"
    );
    insta::assert_snapshot!(
        message(&syntax, &mut bundle, &["11"]),
        @"invalid value for `count`: value above maximum 10: '11' (expected an integer)"
    );

    run(&syntax, &mut bundle, &["7"]).unwrap();
    assert_eq!(bundle.values("count"), &[Value::Integer(7)]);
}

#[test]
fn special_tokens_only_match_symbols() {
    let mut bundle = strings(&["file"], Multiplicity::OPTIONAL_SINGLE);
    let redirect = || {
        TokenCursor::new(
            vec![
                Token::new(">", 0..1, TokenKind::Special),
                Token::new("out", 2..5, TokenKind::Literal),
            ],
            false,
        )
    };

    let two_files = grammar(
        &Syntax::sequence([Syntax::argument("file"), Syntax::argument("file")]),
        &bundle,
    );
    let result = parse(&two_files, &mut bundle, &mut redirect(), ParseLimits::default());
    insta::assert_snapshot!(result.unwrap_err().to_string(), @"unexpected `>`, expected <file>");

    let redirected = grammar(
        &Syntax::sequence([Syntax::symbol(">"), Syntax::argument("file")]),
        &bundle,
    );
    let end = parse(&redirected, &mut bundle, &mut redirect(), ParseLimits::default()).unwrap();
    assert_eq!(end, 2);
    insta::assert_snapshot!(show(&bundle), @"file = out");
}

#[test]
fn failed_parse_restores_cursor() {
    let bundle = ArgumentBundle::empty();
    let grammar = grammar(&Syntax::symbol("ls"), &bundle);
    let mut cursor = TokenCursor::from_words(["sudo", "rm"]);
    cursor.seek(1).unwrap();

    let result = VM::builder(&grammar, &bundle, &mut cursor).build().execute();

    assert!(result.unwrap_err().is_no_match());
    assert_eq!(cursor.tell(), 1);
}

#[test]
fn parse_starts_at_cursor_position() {
    let mut bundle = ArgumentBundle::empty();
    let grammar = grammar(&Syntax::symbol("ls"), &bundle);
    let mut cursor = TokenCursor::from_words(["sudo", "ls"]);
    cursor.seek(1).unwrap();

    let end = parse(&grammar, &mut bundle, &mut cursor, ParseLimits::default()).unwrap();

    assert_eq!(end, 2);
    assert_eq!(cursor.tell(), 2);
}

#[test]
fn trailing_tokens_when_allowed() {
    let mut bundle = ArgumentBundle::empty();
    let grammar = grammar(&Syntax::symbol("ls"), &bundle);
    let mut cursor = TokenCursor::from_words(["ls", "extra"]);
    let limits = ParseLimits::new().allow_trailing(true);

    assert_eq!(parse(&grammar, &mut bundle, &mut cursor, limits), Ok(1));
}

#[test]
fn step_limit_counts_every_node() {
    let bundle = ArgumentBundle::empty();
    let syntax = Syntax::sequence([Syntax::symbol("a"), Syntax::symbol("b"), Syntax::symbol("c")]);
    let grammar = grammar(&syntax, &bundle);

    // seq, three symbols, accept
    let mut cursor = TokenCursor::from_words(["a", "b", "c"]);
    let matched = VM::builder(&grammar, &bundle, &mut cursor)
        .step_limit(5)
        .build()
        .execute()
        .unwrap();
    assert_eq!(matched.steps, 5);
    assert_eq!(matched.end, 3);

    let mut cursor = TokenCursor::from_words(["a", "b", "c"]);
    let result = VM::builder(&grammar, &bundle, &mut cursor)
        .step_limit(4)
        .build()
        .execute();
    assert_eq!(result, Err(RuntimeError::StepLimitExceeded(4)));
    assert_eq!(cursor.tell(), 0);

    let mut cursor = TokenCursor::from_words(["a", "b", "c"]);
    let result = VM::builder(&grammar, &bundle, &mut cursor)
        .step_limit(0)
        .build()
        .execute();
    assert_eq!(result, Err(RuntimeError::StepLimitExceeded(0)));
}

#[test]
fn failed_parse_leaves_bundle_untouched() {
    let mut bundle = strings(&["file"], Multiplicity::OPTIONAL_SINGLE);
    run(&file_option(), &mut bundle, &["-f", "kept"]).unwrap();

    run(&file_option(), &mut bundle, &["-f"]).unwrap_err();

    insta::assert_snapshot!(show(&bundle), @"file = kept");
}

#[test]
fn match_is_committed_explicitly() {
    let mut bundle = strings(&["file"], Multiplicity::OPTIONAL_SINGLE);
    let grammar = grammar(&file_option(), &bundle);
    let mut cursor = TokenCursor::from_words(["--file", "x"]);

    let matched = VM::builder(&grammar, &bundle, &mut cursor)
        .build()
        .execute()
        .unwrap();
    assert!(!bundle.get("file").unwrap().is_set());

    matched.commit(&mut bundle).unwrap();
    insta::assert_snapshot!(show(&bundle), @"file = x");
}
