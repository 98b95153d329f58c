//! Compiler output shape and the malformed-pattern error taxonomy.

use remask::ast::{Node, Repeat, SymbolKind};
use remask::syntax::compile;

fn symbol(kind: SymbolKind, repeat: Repeat) -> Node {
    Node::Symbol { kind, repeat }
}

#[test]
fn single_fragment_symbols() {
    let mask = compile("A0-x").unwrap();
    assert_eq!(mask.fragments.len(), 1);
    assert!(mask.separators.is_empty());
    assert_eq!(
        mask.fragments[0],
        vec![
            symbol(SymbolKind::Letter, Repeat::ONCE),
            symbol(SymbolKind::Digit, Repeat::ONCE),
            symbol(SymbolKind::Literal('-'), Repeat::ONCE),
            symbol(SymbolKind::Literal('x'), Repeat::ONCE),
        ]
    );
}

#[test]
fn quantifier_suffixes() {
    let mask = compile("A{3}0{+}").unwrap();
    assert_eq!(
        mask.fragments[0],
        vec![
            symbol(SymbolKind::Letter, Repeat::exactly(3)),
            symbol(SymbolKind::Digit, Repeat::at_least_one()),
        ]
    );
}

#[test]
fn separators_split_fragments() {
    let mask = compile("0{4}:-:0{4}:-:0{4}:-:0{4}").unwrap();
    assert_eq!(mask.fragments.len(), 4);
    assert_eq!(mask.separators, ["-", "-", "-"]);
}

#[test]
fn multi_char_separator() {
    let mask = compile("0{2}: / :0{2}").unwrap();
    assert_eq!(mask.separators, [" / "]);
}

#[test]
fn group_alternatives() {
    let mask = compile("[[A{2}|0]]").unwrap();
    assert_eq!(
        mask.fragments[0],
        vec![Node::Group {
            alternatives: vec![
                vec![symbol(SymbolKind::Letter, Repeat::exactly(2))],
                vec![symbol(SymbolKind::Digit, Repeat::ONCE)],
            ],
        }]
    );
}

#[test]
fn nested_group_inside_alternative() {
    let mask = compile("[[A[[0|-]]|x]]").unwrap();
    let Node::Group { alternatives } = &mask.fragments[0][0] else {
        panic!("expected a group node");
    };
    assert_eq!(alternatives.len(), 2);
    assert!(matches!(alternatives[0][1], Node::Group { .. }));
    assert_eq!(
        alternatives[1],
        vec![symbol(SymbolKind::Literal('x'), Repeat::ONCE)]
    );
}

#[test]
fn implicit_repeat_is_one() {
    assert_eq!(compile("A{1}").unwrap(), compile("A").unwrap());
}

#[test]
fn malformed_patterns_fail() {
    let cases = [
        "",
        "A{0}",
        "A{}",
        "A{01}",
        "A{x}",
        "A{3",
        "{3}",
        "}",
        "[[A|]]",
        "[[|A]]",
        "[[A]]{2}",
        "[[A",
        "A]]",
        "]",
        "|",
        "[",
        "a:-:",
        "a:-",
        ":x:a",
        "a:-::+:b",
        "[[a:b:c]]",
    ];
    for pattern in cases {
        assert!(
            compile(pattern).is_err(),
            "should reject malformed pattern: {pattern:?}"
        );
    }
}

#[test]
fn error_messages_name_the_violation() {
    let cases = [
        ("[[A|]]", "empty alternative"),
        ("A{0}", "invalid quantifier"),
        ("A{3", "unclosed quantifier"),
        ("[[A", "unclosed group"),
        ("A]]", "unmatched closing"),
        ("a:-:", "empty fragment"),
        ("a:-", "separator not closed"),
        ("[[a:b:c]]", "separator inside group"),
        ("[[A]]{+}", "group"),
        ("", "empty mask pattern"),
    ];
    for (pattern, expected) in cases {
        let err = compile(pattern).unwrap_err();
        assert!(
            err.message.contains(expected),
            "pattern {pattern:?}: expected {expected:?} in {:?}",
            err.message
        );
    }
}

#[test]
fn compile_is_deterministic() {
    for pattern in ["0{3}:-:0{2}", "[[A|0]]x{+}", "A: - :0{2}"] {
        assert_eq!(compile(pattern).unwrap(), compile(pattern).unwrap());
    }
}

#[test]
fn pretty_output_reparses_to_the_same_mask() {
    for pattern in ["0{3}:-:0{2}", "[[A|0{2}]]x{+}", "A: - :0{2}", "A{1}0"] {
        let mask = compile(pattern).unwrap();
        let reparsed = compile(&mask.pretty()).unwrap();
        assert_eq!(mask, reparsed, "round trip failed for {pattern:?}");
    }
}
