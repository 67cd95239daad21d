//! Elimination of unit rules, which have the form `A -> B`.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::analysis;
use crate::grammar::{Alternative, Grammar};
use crate::symbol::Symbol;

/// Returns an equivalent grammar without alternatives that consist of a single nonterminal.
///
/// For every unit pair `(X, Y)`, the alternative `X -> Y` is removed, and `X` takes over all of
/// `Y`'s remaining alternatives. All removals happen before any alternative is taken over.
pub fn eliminate_unit(grammar: &Grammar) -> Grammar {
    let unit_pairs = analysis::unit_pairs(grammar);

    let mut rules: BTreeMap<Symbol, BTreeSet<Alternative>> = grammar.rule_map().clone();
    for (lhs, rhs) in &unit_pairs {
        if let Some(alternatives) = rules.get_mut(lhs) {
            alternatives.remove(std::slice::from_ref(rhs));
        }
    }

    let remaining = rules.clone();
    for (lhs, rhs) in &unit_pairs {
        let Some(taken_over) = remaining.get(rhs) else { continue };
        trace!("{} takes over {} alternatives of {}", lhs, taken_over.len(), rhs);
        rules
            .entry(lhs.clone())
            .or_default()
            .extend(taken_over.iter().cloned());
    }

    Grammar::new(grammar.start().clone(), rules)
}
