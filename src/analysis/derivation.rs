use bit_matrix::BitMatrix;

use crate::grammar::Grammar;
use crate::symbol::SymbolIndex;

/// Returns the direct derivation matrix. Row `A` has column `B` set when `B` appears in an
/// alternative of `A`.
pub fn direct_derivation_matrix(grammar: &Grammar, index: &SymbolIndex) -> BitMatrix {
    let num_syms = index.num_syms();
    let mut derivation = BitMatrix::new(num_syms, num_syms);

    for (lhs, alternatives) in grammar.rules() {
        let Some(lhs) = index.id(lhs) else { continue };
        for alternative in alternatives {
            for sym in index.ids(alternative) {
                derivation.set(lhs, sym, true);
            }
        }
    }
    derivation
}

/// Returns the reachability matrix, the transitive closure of direct derivation.
pub fn reachability_matrix(grammar: &Grammar, index: &SymbolIndex) -> BitMatrix {
    let mut result = direct_derivation_matrix(grammar, index);
    result.transitive_closure();
    result
}

/// Returns the unit derivation matrix.
///
/// Row `A` has column `B` set when `A` derives `B` through unit alternatives only. The rule
/// `A -> A` is kept as a self-loop.
pub fn unit_derivation_matrix(grammar: &Grammar, index: &SymbolIndex) -> BitMatrix {
    let num_syms = index.num_syms();
    let mut unit_derivation = BitMatrix::new(num_syms, num_syms);

    for (lhs, alternatives) in grammar.rules() {
        let Some(lhs) = index.id(lhs) else { continue };
        for alternative in alternatives {
            if let [sym] = &alternative[..] {
                if grammar.is_nonterminal(sym) {
                    if let Some(sym) = index.id(sym) {
                        unit_derivation.set(lhs, sym, true);
                    }
                }
            }
        }
    }

    unit_derivation.transitive_closure();
    unit_derivation
}
