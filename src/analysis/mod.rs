//! Fixpoint analyses of a grammar: nullable, productive and reachable symbols, and unit pairs.
//!
//! Each analysis numbers the grammar's symbols densely and computes a least fixpoint over bit
//! sets or bit relations, then translates the result back to symbols.

mod derivation;
mod rhs_closure;

use std::collections::BTreeSet;

use log::debug;

use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolBitSet, SymbolIndex};

pub use self::derivation::{direct_derivation_matrix, reachability_matrix, unit_derivation_matrix};
pub use self::rhs_closure::RhsClosure;

/// Returns the set of nonterminals that derive the empty string.
pub fn nullable(grammar: &Grammar) -> BTreeSet<Symbol> {
    let index = SymbolIndex::new(grammar);
    let mut nullable = SymbolBitSet::nulling(&index, grammar);
    RhsClosure::new(grammar, &index).rhs_closure(nullable.bit_vec_mut());
    let result = nullable.to_symbols(&index);
    debug!("nullable nonterminals: {}", DisplaySet(&result));
    result
}

/// Returns the set of symbols that derive some finite string of terminals. Every terminal is
/// productive.
pub fn productive(grammar: &Grammar) -> BTreeSet<Symbol> {
    let index = SymbolIndex::new(grammar);
    let mut productive = SymbolBitSet::terminal(&index, grammar);
    RhsClosure::new(grammar, &index).rhs_closure(productive.bit_vec_mut());
    let result = productive.to_symbols(&index);
    debug!("productive symbols: {}", DisplaySet(&result));
    result
}

/// Returns the set of symbols that appear in some sentential form derived from the start symbol,
/// including the start symbol itself.
pub fn reachable(grammar: &Grammar) -> BTreeSet<Symbol> {
    let index = SymbolIndex::new(grammar);
    let reachability = reachability_matrix(grammar, &index);
    let mut result = BTreeSet::new();
    result.insert(grammar.start().clone());
    if let Some(start) = index.id(grammar.start()) {
        for sym in 0..index.num_syms() {
            if reachability[(start, sym)] {
                result.insert(index.symbol(sym).clone());
            }
        }
    }
    debug!("reachable symbols: {}", DisplaySet(&result));
    result
}

/// Returns all pairs `(X, Y)` of nonterminals such that `X` derives `Y` through a chain of
/// alternatives that consist of a single nonterminal.
///
/// A pair `(X, X)` is present only when such a chain leads from `X` back to itself.
pub fn unit_pairs(grammar: &Grammar) -> BTreeSet<(Symbol, Symbol)> {
    let index = SymbolIndex::new(grammar);
    let unit_derivation = unit_derivation_matrix(grammar, &index);
    let mut result = BTreeSet::new();
    for lhs in grammar.nonterminals() {
        let Some(row) = index.id(lhs) else { continue };
        for rhs in grammar.nonterminals() {
            let Some(col) = index.id(rhs) else { continue };
            if unit_derivation[(row, col)] {
                result.insert((lhs.clone(), rhs.clone()));
            }
        }
    }
    debug!(
        "unit pairs: {{{}}}",
        result
            .iter()
            .map(|(lhs, rhs)| format!("({}, {})", lhs, rhs))
            .collect::<Vec<_>>()
            .join(", ")
    );
    result
}

struct DisplaySet<'a>(&'a BTreeSet<Symbol>);

impl std::fmt::Display for DisplaySet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, sym) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", sym)?;
        }
        f.write_str("}")
    }
}
