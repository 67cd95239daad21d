use std::cmp::Ordering::{Greater, Less};

use bit_vec::BitVec;

use crate::grammar::Grammar;
use crate::symbol::SymbolIndex;

/// Rhs closure. In some sense, it is a reverse of breadth first search (reverse BFS).
///
/// A left-hand side gains the property once all symbols of one of its alternatives have it.
/// Empty alternatives satisfy this vacuously.
pub struct RhsClosure {
    rules: Vec<IndexedRule>,
    inverse_derivation: Vec<(usize, usize)>,
    work_stack: Vec<usize>,
}

struct IndexedRule {
    lhs: usize,
    rhs: Vec<usize>,
}

impl RhsClosure {
    /// Records information which is needed to calculate the RHS transitive closure.
    pub fn new(grammar: &Grammar, index: &SymbolIndex) -> Self {
        let mut rules = Vec::with_capacity(grammar.num_alternatives());
        for (lhs, alternatives) in grammar.rules() {
            let Some(lhs) = index.id(lhs) else { continue };
            for alternative in alternatives {
                rules.push(IndexedRule {
                    lhs,
                    rhs: index.ids(alternative).collect(),
                });
            }
        }

        let mut inverse_derivation = Vec::with_capacity(2 * rules.len());
        for (rule_id, rule) in rules.iter().enumerate() {
            inverse_derivation.extend(rule.rhs.iter().map(|&sym| (sym, rule_id)));
        }
        inverse_derivation.sort();

        RhsClosure {
            rules,
            inverse_derivation,
            work_stack: vec![],
        }
    }

    /// Calculates the RHS transitive closure.
    pub fn rhs_closure(&mut self, property: &mut BitVec) {
        for rule in &self.rules {
            if rule.rhs.is_empty() {
                property.set(rule.lhs, true);
            }
        }
        for (sym_id, sym_has_property) in property.iter().enumerate() {
            if sym_has_property {
                self.work_stack.push(sym_id);
            }
        }

        let rules = &self.rules[..];
        let inverse_derivation = &self.inverse_derivation[..];
        while let Some(work_sym) = self.work_stack.pop() {
            for &(_, rule_id) in find(inverse_derivation, work_sym) {
                let rule = &rules[rule_id];
                if !property[rule.lhs] && rule.rhs.iter().all(|&sym| property[sym]) {
                    property.set(rule.lhs, true);
                    self.work_stack.push(rule.lhs);
                }
            }
        }
    }
}

fn find(inverse_derivation: &[(usize, usize)], key_sym: usize) -> &[(usize, usize)] {
    match inverse_derivation.binary_search_by(|&(sym, _)| (sym, Greater).cmp(&(key_sym, Less))) {
        Err(idx) => {
            let len = inverse_derivation[idx..]
                .iter()
                .take_while(|&&(sym, _)| sym == key_sym)
                .count();
            &inverse_derivation[idx..idx + len]
        }
        Ok(_) => unreachable!(),
    }
}
