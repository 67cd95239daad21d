mod support;

use std::collections::{BTreeMap, BTreeSet};

use cfg_normalize::binarized::binarize;
use cfg_normalize::terminals::isolate_terminals;
use cfg_normalize::{Alternative, Grammar, Pipeline, Symbol, Synthetic};
use test_case::test_case;

use support::{grammar, is_chomsky_normal_form, language, sym};

#[test]
fn test_cnf_palindrome() {
    let cfg = grammar(&[('S', "aSa | b")]);
    let result = Pipeline::chomsky_normal_form().apply(&cfg);

    assert!(is_chomsky_normal_form(&result));
    assert_eq!(
        result.to_string(),
        "S -> a# S_0:1 | b ;;\nS_0:1 -> S a# ;;\na# -> a ;;\n"
    );
    assert_eq!(language(&result, 7), language(&cfg, 7));
}

#[test]
fn test_cnf_nullable_start() {
    let cfg = grammar(&[('S', "aSb | %")]);
    let result = cfg.chomsky_normal_form();

    assert!(is_chomsky_normal_form(&result));
    assert_eq!(result.start(), &Symbol::start_prime(&sym('S')));
    assert!(result.has_alternative(result.start(), &[]));
    assert_eq!(language(&result, 8), language(&cfg, 8));
}

#[test]
fn test_binarize_long_alternative() {
    let cfg = grammar(&[('S', "abcde")]);
    let result = binarize(&cfg);

    let link = |position| Symbol::link(&sym('S'), 0, position);
    assert!(result.has_alternative(&sym('S'), &[sym('a'), link(1)]));
    assert!(result.has_alternative(&link(1), &[sym('b'), link(2)]));
    assert!(result.has_alternative(&link(2), &[sym('c'), link(3)]));
    assert!(result.has_alternative(&link(3), &[sym('d'), sym('e')]));
    assert_eq!(result.num_alternatives(), 4);
    assert_eq!(language(&result, 5), language(&cfg, 5));
}

#[test]
fn test_link_symbols_never_collide() {
    // `S_0:1` printed, but named by the user.
    let cfg = grammar(&[('S', "abc")]);
    let named = Symbol::named("S_0:1");
    let result = binarize(&cfg);
    let link = Symbol::link(&sym('S'), 0, 1);
    assert_eq!(named.to_string(), link.to_string());
    assert!(result.is_nonterminal(&link));
    assert!(!result.is_nonterminal(&named));
    assert_eq!(
        link.synthetic(),
        Some(&Synthetic::Link {
            lhs: sym('S'),
            alternative: 0,
            position: 1
        })
    );
}

#[test]
fn test_isolate_terminals_leaves_single_terminals() {
    let cfg = grammar(&[('S', "AB | a"), ('A', "a"), ('B', "bA")]);
    let result = isolate_terminals(&cfg);
    let b = Symbol::terminal_of(&sym('b'));
    let rules: BTreeMap<Symbol, BTreeSet<Alternative>> = BTreeMap::from([
        (sym('S'), BTreeSet::from([vec![sym('A'), sym('B')], vec![sym('a')]])),
        (sym('A'), BTreeSet::from([vec![sym('a')]])),
        (sym('B'), BTreeSet::from([vec![b.clone(), sym('A')]])),
        (b, BTreeSet::from([vec![sym('b')]])),
    ]);
    support::assert_eq(&result, &Grammar::new(sym('S'), rules));
}

#[test_case(&[('S', "aSb | %")])]
#[test_case(&[('S', "aSa | b")])]
#[test_case(&[('E', "E+T | T"), ('T', "T*F | F"), ('F', "(E) | a")])]
#[test_case(&[('S', "ASB"), ('A', "aAS | a | %"), ('B', "SbS | A | bb")])]
#[test_case(&[('S', "AB | C"), ('A', "aA | %"), ('B', "bB | b"), ('C', "cC"), ('D', "d")])]
#[test_case(&[('S', "SS | (S) | %")])]
#[test_case(&[('S', "abcdef | A"), ('A', "S | x")])]
fn test_cnf_shape_and_language(rules: &[(char, &str)]) {
    let cfg = grammar(rules);
    let result = Pipeline::chomsky_normal_form().apply(&cfg);
    assert!(is_chomsky_normal_form(&result), "not in CNF:\n{}", result);
    assert_eq!(language(&result, 6), language(&cfg, 6));
}
