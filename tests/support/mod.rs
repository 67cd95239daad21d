#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use cfg_normalize::{Grammar, Symbol};

/// Builds a grammar from rules written as `('S', "aSb | %")`. Symbols are single characters,
/// `%` is the empty alternative. The first rule's left-hand side is the start symbol.
pub fn grammar(rules: &[(char, &str)]) -> Grammar {
    let mut builder = Grammar::builder(rules[0].0);
    for &(lhs, alternatives) in rules {
        builder = builder.rule(lhs);
        for alternative in alternatives.split('|') {
            let alternative = alternative.trim();
            builder = if alternative == "%" {
                builder.rhs_str("")
            } else {
                builder.rhs_str(alternative)
            };
        }
    }
    builder.build()
}

pub fn sym(name: char) -> Symbol {
    Symbol::from(name)
}

pub fn syms(names: &str) -> BTreeSet<Symbol> {
    names.chars().map(Symbol::from).collect()
}

/// Returns all terminal strings of length at most `max_len` derived from `sym`.
///
/// Computed as a fixpoint over all nonterminals at once, so it terminates for grammars with
/// empty alternatives and cycles.
pub fn language_of(grammar: &Grammar, sym: &Symbol, max_len: usize) -> BTreeSet<Vec<Symbol>> {
    let mut languages: BTreeMap<&Symbol, BTreeSet<Vec<Symbol>>> = BTreeMap::new();
    loop {
        let mut changed = false;
        for (lhs, alternatives) in grammar.rules() {
            let mut derived = languages.get(lhs).cloned().unwrap_or_default();
            for alternative in alternatives {
                let mut strings: BTreeSet<Vec<Symbol>> = BTreeSet::from([vec![]]);
                for rhs_sym in alternative {
                    let suffixes = if grammar.is_nonterminal(rhs_sym) {
                        languages.get(rhs_sym).cloned().unwrap_or_default()
                    } else {
                        BTreeSet::from([vec![rhs_sym.clone()]])
                    };
                    let mut next = BTreeSet::new();
                    for prefix in &strings {
                        for suffix in &suffixes {
                            if prefix.len() + suffix.len() <= max_len {
                                let mut string = prefix.clone();
                                string.extend(suffix.iter().cloned());
                                next.insert(string);
                            }
                        }
                    }
                    strings = next;
                }
                derived.extend(strings);
            }
            let previous_len = languages.get(lhs).map_or(0, BTreeSet::len);
            if derived.len() != previous_len {
                changed = true;
                languages.insert(lhs, derived);
            }
        }
        if !changed {
            break;
        }
    }
    if grammar.is_nonterminal(sym) {
        languages.remove(sym).unwrap_or_default()
    } else {
        BTreeSet::from([vec![sym.clone()]])
    }
}

/// Returns all terminal strings of length at most `max_len` in the grammar's language.
pub fn language(grammar: &Grammar, max_len: usize) -> BTreeSet<Vec<Symbol>> {
    language_of(grammar, grammar.start(), max_len)
}

/// Checks that every alternative is a single terminal or a pair of nonterminals. Only the start
/// symbol may have the empty alternative.
pub fn is_chomsky_normal_form(grammar: &Grammar) -> bool {
    grammar.rules().all(|(lhs, alternatives)| {
        alternatives.iter().all(|alternative| match &alternative[..] {
            [] => lhs == grammar.start(),
            [terminal] => grammar.is_terminal(terminal),
            [left, right] => grammar.is_nonterminal(left) && grammar.is_nonterminal(right),
            _ => false,
        })
    })
}

pub fn assert_eq(left: &Grammar, right: &Grammar) {
    if left != right {
        eprintln!("Left:\n{}\nRight:\n{}", left, right);
        panic!("Grammars expected to be equal");
    }
}
