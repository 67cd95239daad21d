mod support;

use cfg_normalize::analysis::{productive, reachable};
use cfg_normalize::nulling::eliminate_epsilon;
use cfg_normalize::usefulness::{keep_productive, keep_reachable, keep_useful};
use cfg_normalize::Pipeline;
use test_case::test_case;

use support::{grammar, language, sym, syms};

#[test]
fn test_keep_productive() {
    let cfg = grammar(&[('S', "AB | a"), ('A', "aA"), ('B', "b")]);
    let result = keep_productive(&cfg);
    support::assert_eq(&result, &grammar(&[('S', "a"), ('B', "b")]));
}

#[test]
fn test_keep_reachable() {
    let cfg = grammar(&[('S', "aA"), ('A', "b"), ('B', "Bc | d")]);
    let result = keep_reachable(&cfg);
    support::assert_eq(&result, &grammar(&[('S', "aA"), ('A', "b")]));
}

// `N -> %` leaves `N` without alternatives. It must stay a nonterminal, or `S -> a N` would
// derive the string `a N`.
#[test]
fn test_reachable_keeps_rules_without_alternatives() {
    let cfg = grammar(&[('S', "aN"), ('N', "%")]);
    let without_epsilon = eliminate_epsilon(&cfg);
    assert_eq!(without_epsilon.alternatives(&sym('N')).map(|alts| alts.len()), Some(0));

    let result = keep_reachable(&without_epsilon);
    assert_eq!(result.nonterminals(), &syms("NS"));
    assert_eq!(result.terminals(), &syms("a"));
    assert_eq!(language(&result, 3), language(&cfg, 3));
    support::assert_eq(&result, &without_epsilon);

    support::assert_eq(&keep_useful(&without_epsilon), &grammar(&[('S', "a")]));
}

// `A` is reachable only through `S -> AB`, which dies with the unproductive `B`.
#[test]
fn test_productive_filter_runs_first() {
    let cfg = grammar(&[('S', "AB | a"), ('A', "a"), ('B', "bB")]);

    let useful = keep_useful(&cfg);
    support::assert_eq(&useful, &grammar(&[('S', "a")]));
    support::assert_eq(&Pipeline::useful_symbols().apply(&cfg), &useful);

    let reversed = keep_productive(&keep_reachable(&cfg));
    assert!(reversed.is_nonterminal(&sym('A')));
    assert_ne!(reversed, useful);
}

#[test_case(&[('S', "AB | a"), ('A', "a"), ('B', "bB")])]
#[test_case(&[('S', "aS | A | C"), ('A', "a"), ('B', "aa"), ('C', "aCb")])]
#[test_case(&[('S', "SS | %"), ('T', "S")])]
#[test_case(&[('S', "Sa")])]
fn test_keep_useful_minimal_and_idempotent(rules: &[(char, &str)]) {
    let cfg = grammar(rules);
    let once = keep_useful(&cfg);
    let twice = keep_useful(&once);
    support::assert_eq(&twice, &once);

    let productive = productive(&once);
    let reachable = reachable(&once);
    for nonterminal in once.nonterminals() {
        if nonterminal != once.start() {
            assert!(productive.contains(nonterminal), "{} unproductive", nonterminal);
            assert!(reachable.contains(nonterminal), "{} unreachable", nonterminal);
        }
    }
    assert_eq!(language(&once, 6), language(&cfg, 6));
}

#[test]
fn test_keep_useful_empty_language() {
    let cfg = grammar(&[('S', "aS | A"), ('A', "bA")]);
    let result = keep_useful(&cfg);
    assert_eq!(result.num_alternatives(), 0);
    assert_eq!(result.start(), &sym('S'));
    assert!(language(&result, 4).is_empty());
}
