//! Elimination of useless symbols. Useful symbols are both reachable and productive.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::analysis;
use crate::grammar::{Alternative, Grammar};
use crate::symbol::Symbol;

/// Restricts the grammar to the given symbols.
///
/// A rule survives if its left-hand side is in `symbols`, even when it loses all of its
/// alternatives, so that it stays a nonterminal. An alternative survives if all its symbols are
/// in `symbols`. The start symbol is never dropped.
pub fn retain_symbols(grammar: &Grammar, symbols: &BTreeSet<Symbol>) -> Grammar {
    let mut rules: BTreeMap<Symbol, BTreeSet<Alternative>> = BTreeMap::new();
    for (lhs, alternatives) in grammar.rules() {
        if !symbols.contains(lhs) {
            debug!("dropping rule for {}", lhs);
            continue;
        }
        let kept: BTreeSet<Alternative> = alternatives
            .iter()
            .filter(|alternative| alternative.iter().all(|sym| symbols.contains(sym)))
            .cloned()
            .collect();
        rules.insert(lhs.clone(), kept);
    }
    Grammar::new(grammar.start().clone(), rules)
}

/// Removes unproductive nonterminals, and all alternatives that mention them.
pub fn keep_productive(grammar: &Grammar) -> Grammar {
    retain_symbols(grammar, &analysis::productive(grammar))
}

/// Removes unreachable symbols, and all alternatives that mention them.
pub fn keep_reachable(grammar: &Grammar) -> Grammar {
    retain_symbols(grammar, &analysis::reachable(grammar))
}

/// Removes useless symbols. Unproductive symbols must go first: their removal can make
/// other symbols unreachable.
pub fn keep_useful(grammar: &Grammar) -> Grammar {
    keep_reachable(&keep_productive(grammar))
}
