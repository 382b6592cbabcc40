//! Tests for arena construction and the text dump.

use super::*;

#[test]
fn single_symbol() {
    let mut b = GrammarBuilder::new();
    let s = b.symbol("ls");

    let g = b.finish(s).unwrap();

    insta::assert_snapshot!(g.dump(), @r"
    root: N0
    N0: 'ls'
    ");
}

#[test]
fn empty_sequence() {
    let mut b = GrammarBuilder::new();
    let s = b.sequence(vec![]);

    let g = b.finish(s).unwrap();

    insta::assert_snapshot!(g.dump(), @r"
    root: N0
    N0: seq()
    ");
}

#[test]
fn option_shape() {
    let mut b = GrammarBuilder::new();
    let long = b.symbol("--file");
    let short = b.symbol("-f");
    let trigger = b.alternation(vec![Some(long), Some(short)]).unwrap();
    let value = b.argument("fileArg");
    let root = b.sequence(vec![trigger, value]);

    let g = b.finish(root).unwrap();

    insta::assert_snapshot!(g.dump(), @r"
    root: N4
    N0: '--file'
    N1: '-f'
    N2: alt(N0 | N1)
    N3: <fileArg>
    N4: seq(N2, N3)
    ");
}

#[test]
fn every_node_kind_dumps() {
    let mut b = GrammarBuilder::new();
    let flag = b.preset("verbose", "true");
    let cluster = b.cluster(vec![
        ClusterEntry {
            letter: 'v',
            argument: "verbose".into(),
            takes_value: false,
        },
        ClusterEntry {
            letter: 'f',
            argument: "file".into(),
            takes_value: true,
        },
    ]);
    let once = b.at_most_once(flag);
    let back = b.back_reference("top");
    let alt = b.alternation(vec![Some(once), Some(cluster), Some(back), None]).unwrap();
    b.label(alt, "top").unwrap();

    let g = b.finish(alt).unwrap();

    insta::assert_snapshot!(g.dump(), @r"
    root: N4
    N0: <verbose> = true
    N1: cluster(v=verbose f=<file>)
    N2: once(N0)
    N3: ref(top)
    N4 [top]: alt(N2 | N1 | N3 | ε)
    ");
}

#[test]
fn alternation_needs_two_branches() {
    let mut b = GrammarBuilder::new();
    let a = b.symbol("a");

    assert_eq!(
        b.alternation(vec![Some(a)]),
        Err(GrammarError::TooFewAlternatives(1))
    );
    assert_eq!(
        b.alternation(vec![]),
        Err(GrammarError::TooFewAlternatives(0))
    );
    // an epsilon branch still counts as an alternative
    assert!(b.alternation(vec![Some(a), None]).is_ok());
}

#[test]
fn empty_label_rejected() {
    let mut b = GrammarBuilder::new();
    let a = b.symbol("a");

    assert_eq!(b.label(a, ""), Err(GrammarError::EmptyLabel));
    assert!(b.label_of(a).is_none());
}

#[test]
fn foreign_ids_rejected() {
    let mut other = GrammarBuilder::new();
    other.symbol("x");
    other.symbol("y");
    let foreign = other.symbol("z");

    let mut b = GrammarBuilder::new();
    let seq = b.sequence(vec![foreign]);

    let err = b.finish(seq).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"N0 points at N2, which is not in this grammar");
}

#[test]
fn grammar_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grammar>();
}
