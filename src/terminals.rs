//! Isolation of terminals into their own unit rules, the last step towards Chomsky normal form.

use std::collections::{BTreeMap, BTreeSet};

use crate::grammar::{Alternative, Grammar};
use crate::symbol::Symbol;

/// Replaces every terminal `t` inside a two-symbol alternative with a nonterminal `t#` that has
/// the sole alternative `t# -> t`.
///
/// Each terminal gets one such nonterminal, shared by all its occurrences. Alternatives that
/// are a single terminal already satisfy the normal form and stay untouched. Only terminals
/// that occur in two-symbol alternatives get a `t#`: a terminal that appears only alone gets
/// none, since its helper would be unreachable. Expects a binarized grammar.
pub fn isolate_terminals(grammar: &Grammar) -> Grammar {
    let mut rules: BTreeMap<Symbol, BTreeSet<Alternative>> = BTreeMap::new();
    let mut isolated: BTreeSet<&Symbol> = BTreeSet::new();

    for (lhs, alternatives) in grammar.rules() {
        let new_alternatives = rules.entry(lhs.clone()).or_default();
        for alternative in alternatives {
            if alternative.len() < 2 {
                new_alternatives.insert(alternative.clone());
                continue;
            }
            let new_alternative = alternative
                .iter()
                .map(|sym| {
                    if grammar.is_terminal(sym) {
                        isolated.insert(sym);
                        Symbol::terminal_of(sym)
                    } else {
                        sym.clone()
                    }
                })
                .collect();
            new_alternatives.insert(new_alternative);
        }
    }

    for &terminal in &isolated {
        rules.insert(
            Symbol::terminal_of(terminal),
            BTreeSet::from([vec![terminal.clone()]]),
        );
    }

    Grammar::new(grammar.start().clone(), rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_helper_per_terminal() {
        let grammar = Grammar::builder('S')
            .rule('S')
            .rhs_str("aa")
            .rhs_str("Sa")
            .rhs_str("b")
            .build();
        let result = isolate_terminals(&grammar);
        assert_eq!(result.to_string(), "S -> S a# | a# a# | b ;;\na# -> a ;;\n");
    }
}
