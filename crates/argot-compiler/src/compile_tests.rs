use argot_core::{Argument, ArgumentBundle, ArgumentKind, Multiplicity};
use argot_grammar::GrammarError;

use crate::{CompileError, Compiler, OptionSyntax, Syntax, SyntaxBundle, compile};

fn bundle() -> ArgumentBundle {
    ArgumentBundle::new([
        Argument::flag("verbose"),
        Argument::new("file", ArgumentKind::String, Multiplicity::OPTIONAL_SINGLE),
    ])
    .unwrap()
}

fn dump(syntax: &Syntax) -> String {
    compile(syntax, &bundle()).unwrap().dump()
}

fn dump_resolved(syntax: &Syntax) -> String {
    let mut grammar = compile(syntax, &bundle()).unwrap();
    grammar.resolve_back_references().unwrap();
    grammar.dump()
}

#[test]
fn empty_is_empty_sequence() {
    insta::assert_snapshot!(dump(&Syntax::Empty), @r"
    root: N0
    N0: seq()
    ");
}

#[test]
fn single_item_sequence_collapses() {
    let syntax = Syntax::sequence([Syntax::symbol("ls")]);

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N0
    N0: 'ls'
    ");
}

#[test]
fn option_with_both_forms() {
    let syntax = Syntax::option(OptionSyntax::new("file").long("file").short('f'));

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N4
    N0: '--file'
    N1: '-f'
    N2: alt(N0 | N1)
    N3: <file>
    N4: seq(N2, N3)
    ");
}

#[test]
fn flag_option_presets_true() {
    let syntax = Syntax::option(OptionSyntax::new("verbose").long("verbose"));

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N2
    N0: '--verbose'
    N1: <verbose> = true
    N2: seq(N0, N1)
    ");
}

#[test]
fn bounded_repeat_nests_optional_copies() {
    let syntax = Syntax::repeat(Syntax::symbol("x"), 2, Some(4));

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N7
    N0: 'x'
    N1: 'x'
    N2: 'x'
    N3: alt(N2 | ε)
    N4: 'x'
    N5: seq(N4, N3)
    N6: alt(N5 | ε)
    N7: seq(N0, N1, N6)
    ");
}

#[test]
fn lazy_repeat_tries_empty_first() {
    let syntax = Syntax::lazy_repeat(Syntax::symbol("x"), 0, Some(2));

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N4
    N0: 'x'
    N1: alt(ε | N0)
    N2: 'x'
    N3: seq(N2, N1)
    N4: alt(ε | N3)
    ");
}

#[test]
fn unbounded_repeat_loops_through_label() {
    let syntax = Syntax::repeat(Syntax::symbol("x"), 1, None);

    insta::assert_snapshot!(dump_resolved(&syntax), @r"
    root: N5
    N0: 'x'
    N1: 'x'
    N2: ref(%loop0)
    N3: seq(N1, N4)
    N4 [%loop0]: alt(N3 | ε)
    N5: seq(N0, N4)
    ");
}

#[test]
fn zero_width_repeat_is_empty_sequence() {
    let syntax = Syntax::repeat(Syntax::symbol("x"), 0, Some(0));

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N0
    N0: seq()
    ");
}

#[test]
fn unbounded_repeat_over_consuming_alternatives_compiles() {
    let syntax = Syntax::repeat(
        Syntax::alternatives([Syntax::symbol("a"), Syntax::sequence([Syntax::symbol("b")])]),
        0,
        None,
    );

    assert!(compile(&syntax, &bundle()).is_ok());
}

#[test]
fn long_bounded_repeat_resolves() {
    let syntax = Syntax::labeled(
        "top",
        Syntax::sequence([
            Syntax::symbol("s"),
            Syntax::repeat(Syntax::reference("top"), 0, Some(10_000)),
        ]),
    );
    let mut grammar = compile(&syntax, &bundle()).unwrap();

    grammar.resolve_back_references().unwrap();

    assert!(grammar.is_resolved());
}

#[test]
fn option_set_adds_cluster_for_short_flags() {
    let syntax = Syntax::option_set([
        OptionSyntax::new("verbose").long("verbose").short('v'),
        OptionSyntax::new("file").long("file").short('f'),
    ]);

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N14
    N0: '--verbose'
    N1: '-v'
    N2: alt(N0 | N1)
    N3: <verbose> = true
    N4: seq(N2, N3)
    N5: '--file'
    N6: '-f'
    N7: alt(N5 | N6)
    N8: <file>
    N9: seq(N7, N8)
    N10: cluster(v=verbose f=<file>)
    N11: alt(N4 | N9 | N10)
    N12: ref(%loop0)
    N13: seq(N11, N12)
    N14 [%loop0]: alt(N13 | ε)
    ");
}

#[test]
fn option_set_without_short_flags_has_no_cluster() {
    let syntax = Syntax::option_set([OptionSyntax::new("file").short('f')]);

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N5
    N0: '-f'
    N1: <file>
    N2: seq(N0, N1)
    N3: ref(%loop0)
    N4: seq(N2, N3)
    N5 [%loop0]: alt(N4 | ε)
    ");
}

#[test]
fn powerset_wraps_items_in_once() {
    let syntax = Syntax::powerset([Syntax::symbol("a"), Syntax::symbol("b")]);

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N7
    N0: 'a'
    N1: once(N0)
    N2: 'b'
    N3: once(N2)
    N4: alt(N1 | N3)
    N5: ref(%loop0)
    N6: seq(N4, N5)
    N7 [%loop0]: alt(N6 | ε)
    ");
}

#[test]
fn labeled_recursion_resolves_to_cycle() {
    // top ::= 'b' | top top
    let syntax = Syntax::labeled(
        "top",
        Syntax::alternatives([
            Syntax::symbol("b"),
            Syntax::sequence([Syntax::reference("top"), Syntax::reference("top")]),
        ]),
    );

    insta::assert_snapshot!(dump_resolved(&syntax), @r"
    root: N4
    N0: 'b'
    N1: ref(top)
    N2: ref(top)
    N3: seq(N4, N4)
    N4 [top]: alt(N0 | N3)
    ");
}

#[test]
fn relabeling_wraps_in_sequence() {
    let syntax = Syntax::labeled("outer", Syntax::labeled("inner", Syntax::symbol("a")));

    insta::assert_snapshot!(dump(&syntax), @r"
    root: N1
    N0 [inner]: 'a'
    N1 [outer]: seq(N0)
    ");
}

#[test]
fn several_syntaxes_become_alternatives() {
    let syntaxes = SyntaxBundle::new(
        "service",
        [Syntax::symbol("start"), Syntax::symbol("stop")],
    );

    let grammar = Compiler::new(&bundle()).compile_bundle(&syntaxes).unwrap();

    insta::assert_snapshot!(grammar.dump(), @r"
    root: N2
    N0: 'start'
    N1: 'stop'
    N2: alt(N0 | N1)
    ");
}

#[test]
fn bundle_without_syntaxes_uses_default() {
    let bundle = ArgumentBundle::new([
        Argument::flag("verbose"),
        Argument::new("file", ArgumentKind::String, Multiplicity::MANDATORY_SINGLE),
    ])
    .unwrap();

    let grammar = Compiler::new(&bundle)
        .compile_bundle(&SyntaxBundle::new("cat", Vec::new()))
        .unwrap();

    insta::assert_snapshot!(grammar.dump(), @r"
    root: N7
    N0: '--verbose'
    N1: <verbose> = true
    N2: seq(N0, N1)
    N3: ref(%loop0)
    N4: seq(N2, N3)
    N5 [%loop0]: alt(N4 | ε)
    N6: <file>
    N7: seq(N5, N6)
    ");
}

#[test]
fn errors() {
    let b = bundle();
    let err = |syntax: Syntax| compile(&syntax, &b).unwrap_err();

    assert_eq!(
        err(Syntax::argument("nope")),
        CompileError::UnknownArgument("nope".into())
    );
    assert_eq!(
        err(Syntax::option(OptionSyntax::new("file"))),
        CompileError::OptionWithoutName("file".into())
    );
    assert_eq!(
        err(Syntax::repeat(Syntax::symbol("x"), 3, Some(2))),
        CompileError::InvalidRepeat { min: 3, max: 2 }
    );
    assert_eq!(
        err(Syntax::repeat(Syntax::optional(Syntax::symbol("a")), 0, None)),
        CompileError::EmptyLoop
    );
    assert_eq!(
        err(Syntax::lazy_repeat(Syntax::Empty, 1, None)),
        CompileError::EmptyLoop
    );
    assert_eq!(
        err(Syntax::option_set(Vec::<OptionSyntax>::new())),
        CompileError::EmptyCombinator("option set")
    );
    assert_eq!(
        err(Syntax::powerset(Vec::new())),
        CompileError::EmptyCombinator("powerset")
    );
    assert_eq!(
        err(Syntax::labeled("%mine", Syntax::Empty)),
        CompileError::ReservedLabel("%mine".into())
    );
    assert_eq!(
        err(Syntax::alternatives([Syntax::symbol("a")])),
        CompileError::Grammar(GrammarError::TooFewAlternatives(1))
    );
    assert_eq!(
        err(Syntax::option_set([
            OptionSyntax::new("verbose").short('x'),
            OptionSyntax::new("file").short('x'),
        ])),
        CompileError::DuplicateShortOption('x')
    );
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        CompileError::InvalidRepeat { min: 3, max: 2 }.to_string(),
        @"invalid repeat bounds 3..=2"
    );
    insta::assert_snapshot!(
        CompileError::Grammar(GrammarError::TooFewAlternatives(1)).to_string(),
        @"alternation needs at least two alternatives, got 1"
    );
    insta::assert_snapshot!(
        CompileError::EmptyLoop.to_string(),
        @"unbounded repeat over an item that can match nothing"
    );
    insta::assert_snapshot!(
        CompileError::OptionWithoutName("file".into()).to_string(),
        @"option for `file` has neither a long nor a short form"
    );
}
