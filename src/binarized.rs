//! Binarized rules are rules that have at most two symbols on the right-hand side.
//! A binarized grammar contains only such rules.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::grammar::{Alternative, Grammar};
use crate::symbol::Symbol;

/// Returns a weak equivalent of the grammar where every alternative has at most two symbols.
///
/// The alternative `X -> s1 s2 ... sn` with `n > 2`, found at position `i` among the sorted
/// alternatives of `X`, becomes a chain through fresh link symbols `X_i:1` to `X_i:n-2`:
///
/// ```text
/// X -> s1 X_i:1
/// X_i:1 -> s2 X_i:2
/// ...
/// X_i:n-2 -> sn-1 sn
/// ```
///
/// Shorter alternatives are kept as they are.
pub fn binarize(grammar: &Grammar) -> Grammar {
    let mut rules: BTreeMap<Symbol, BTreeSet<Alternative>> = BTreeMap::new();

    for (lhs, alternatives) in grammar.rules() {
        rules.entry(lhs.clone()).or_default();
        for (i, alternative) in alternatives.iter().enumerate() {
            let n = alternative.len();
            if n <= 2 {
                rules.entry(lhs.clone()).or_default().insert(alternative.clone());
                continue;
            }
            trace!("binarizing {} -> {:?}", lhs, alternative);
            let mut link_lhs = lhs.clone();
            for (position, sym) in alternative[..n - 2].iter().enumerate() {
                let link = Symbol::link(lhs, i, position + 1);
                rules
                    .entry(link_lhs)
                    .or_default()
                    .insert(vec![sym.clone(), link.clone()]);
                link_lhs = link;
            }
            rules
                .entry(link_lhs)
                .or_default()
                .insert(alternative[n - 2..].to_vec());
        }
    }

    Grammar::new(grammar.start().clone(), rules)
}
