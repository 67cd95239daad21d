//! Elimination of null rules, which have the form `A -> %`.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::analysis;
use crate::grammar::{Alternative, Grammar};
use crate::symbol::Symbol;

/// Returns an equivalent grammar without empty alternatives.
///
/// Every alternative is kept, and for every proper subset of its nullable positions, an
/// alternative that keeps only that subset of nullable symbols is added. The results that are
/// empty, or consist of the rule's own left-hand side, are skipped.
///
/// If the start symbol is nullable, a new start symbol `S'` with alternatives `S' -> % | S` is
/// the only rule that keeps an empty alternative.
///
/// # Panics
///
/// Panics if an alternative has 64 or more nullable symbols. Such an alternative would expand
/// to more than 2^63 alternatives.
pub fn eliminate_epsilon(grammar: &Grammar) -> Grammar {
    let nullable = analysis::nullable(grammar);
    let mut rules: BTreeMap<Symbol, BTreeSet<Alternative>> = BTreeMap::new();

    for (lhs, alternatives) in grammar.rules() {
        let new_alternatives = rules.entry(lhs.clone()).or_default();
        for alternative in alternatives {
            if alternative.is_empty() {
                continue;
            }
            new_alternatives.insert(alternative.clone());

            let positions: Vec<usize> = alternative
                .iter()
                .enumerate()
                .filter(|&(_, sym)| nullable.contains(sym))
                .map(|(pos, _)| pos)
                .collect();
            for kept in ProperSubsets::new(positions.len()) {
                let new_alternative: Alternative = alternative
                    .iter()
                    .enumerate()
                    .filter(|&(pos, sym)| match positions.binary_search(&pos) {
                        Ok(nth) => kept & (1u64 << nth) != 0,
                        Err(_) => {
                            debug_assert!(!nullable.contains(sym));
                            true
                        }
                    })
                    .map(|(_, sym)| sym.clone())
                    .collect();
                let is_self_loop = new_alternative.len() == 1 && new_alternative[0] == *lhs;
                if new_alternative.is_empty() || is_self_loop {
                    continue;
                }
                trace!("{} -> {:?} yields {:?}", lhs, alternative, new_alternative);
                new_alternatives.insert(new_alternative);
            }
        }
    }

    let mut start = grammar.start().clone();
    if nullable.contains(&start) {
        let new_start = Symbol::start_prime(&start);
        let alternatives = BTreeSet::from([vec![], vec![start]]);
        rules.insert(new_start.clone(), alternatives);
        start = new_start;
    }

    Grammar::new(start, rules)
}

/// Iterates over bit masks of all proper subsets of `n` positions.
struct ProperSubsets {
    next: u64,
    end: u64,
}

impl ProperSubsets {
    fn new(n: usize) -> Self {
        assert!(
            n < 64,
            "alternative has {} nullable symbols, more than the supported 63",
            n
        );
        ProperSubsets {
            next: 0,
            end: (1u64 << n) - 1,
        }
    }
}

impl Iterator for ProperSubsets {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next < self.end {
            self.next += 1;
            Some(self.next - 1)
        } else {
            None
        }
    }
}
