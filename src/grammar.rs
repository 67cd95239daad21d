//! Definitions of the context-free grammar type and its rules.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rule_builder::RuleBuilder;
use crate::symbol::Symbol;
use crate::{analysis, binarized, nulling, terminals, unit, usefulness, Pipeline};

/// One candidate right-hand side of a rule. The empty sequence is the epsilon alternative.
pub type Alternative = Vec<Symbol>;

/// Context-free grammar type.
///
/// A grammar maps every nonterminal to the set of its alternatives. It is an immutable value:
/// transformations take a reference and return a new grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawGrammar", into = "RawGrammar"))]
pub struct Grammar {
    /// The start symbol. Always a key in `rules`.
    start: Symbol,
    /// Alternatives by left-hand side.
    rules: BTreeMap<Symbol, BTreeSet<Alternative>>,
    /// Left-hand sides.
    nonterminals: BTreeSet<Symbol>,
    /// Symbols which appear only on right-hand sides.
    terminals: BTreeSet<Symbol>,
}

#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
struct RawGrammar {
    start: Symbol,
    rules: BTreeMap<Symbol, BTreeSet<Alternative>>,
}

#[cfg(feature = "serde")]
impl From<RawGrammar> for Grammar {
    fn from(raw: RawGrammar) -> Self {
        Grammar::new(raw.start, raw.rules)
    }
}

#[cfg(feature = "serde")]
impl From<Grammar> for RawGrammar {
    fn from(grammar: Grammar) -> Self {
        RawGrammar {
            start: grammar.start,
            rules: grammar.rules,
        }
    }
}

impl Grammar {
    /// Creates a grammar from a rule mapping and a start symbol.
    ///
    /// The start symbol becomes a key even if the mapping has no rule for it.
    pub fn new(start: Symbol, mut rules: BTreeMap<Symbol, BTreeSet<Alternative>>) -> Self {
        rules.entry(start.clone()).or_default();
        let nonterminals: BTreeSet<Symbol> = rules.keys().cloned().collect();
        let terminals = rules
            .values()
            .flatten()
            .flatten()
            .filter(|sym| !nonterminals.contains(*sym))
            .cloned()
            .collect();
        Grammar {
            start,
            rules,
            nonterminals,
            terminals,
        }
    }

    /// Starts building a grammar with the given start symbol.
    pub fn builder(start: impl Into<Symbol>) -> RuleBuilder {
        RuleBuilder::new(start.into())
    }

    /// Returns the start symbol.
    pub fn start(&self) -> &Symbol {
        &self.start
    }

    /// Returns an iterator over left-hand sides and their alternatives, in symbol order.
    pub fn rules(&self) -> btree_map::Iter<'_, Symbol, BTreeSet<Alternative>> {
        self.rules.iter()
    }

    /// Returns the rule mapping.
    pub fn rule_map(&self) -> &BTreeMap<Symbol, BTreeSet<Alternative>> {
        &self.rules
    }

    /// Returns the alternatives of a nonterminal, or `None` for other symbols.
    pub fn alternatives(&self, lhs: &Symbol) -> Option<&BTreeSet<Alternative>> {
        self.rules.get(lhs)
    }

    /// Checks whether the grammar has the alternative `rhs` for `lhs`.
    pub fn has_alternative(&self, lhs: &Symbol, rhs: &[Symbol]) -> bool {
        self.rules
            .get(lhs)
            .map_or(false, |alternatives| alternatives.contains(rhs))
    }

    /// Returns the set of nonterminals.
    pub fn nonterminals(&self) -> &BTreeSet<Symbol> {
        &self.nonterminals
    }

    /// Returns the set of terminals.
    pub fn terminals(&self) -> &BTreeSet<Symbol> {
        &self.terminals
    }

    /// Checks whether the symbol is a nonterminal.
    pub fn is_nonterminal(&self, sym: &Symbol) -> bool {
        self.nonterminals.contains(sym)
    }

    /// Checks whether the symbol is a terminal.
    pub fn is_terminal(&self, sym: &Symbol) -> bool {
        self.terminals.contains(sym)
    }

    /// Returns the total number of alternatives.
    pub fn num_alternatives(&self) -> usize {
        self.rules.values().map(BTreeSet::len).sum()
    }

    /// Returns rules in canonical order: the start rule first, then other rules sorted by their
    /// printed left-hand side. Alternatives are sorted by their printed symbols.
    pub fn canonical_rules(&self) -> Vec<(&Symbol, Vec<&Alternative>)> {
        let mut others: Vec<(&Symbol, &BTreeSet<Alternative>)> = self
            .rules
            .iter()
            .filter(|&(lhs, _)| *lhs != self.start)
            .collect();
        others.sort_by_cached_key(|&(lhs, _)| (lhs.to_string(), lhs.clone()));

        let mut result = Vec::with_capacity(self.rules.len());
        result.push((&self.start, sorted_alternatives(&self.rules[&self.start])));
        for (lhs, alternatives) in others {
            result.push((lhs, sorted_alternatives(alternatives)));
        }
        result
    }
}

/// Transformations, as methods.
impl Grammar {
    /// Returns the set of nullable nonterminals.
    pub fn nullable(&self) -> BTreeSet<Symbol> {
        analysis::nullable(self)
    }

    /// Eliminates null rules. See [`nulling::eliminate_epsilon`].
    pub fn without_epsilon_rules(&self) -> Grammar {
        nulling::eliminate_epsilon(self)
    }

    /// Eliminates unit rules. See [`unit::eliminate_unit`].
    pub fn without_unit_rules(&self) -> Grammar {
        unit::eliminate_unit(self)
    }

    /// Eliminates unproductive symbols. See [`usefulness::keep_productive`].
    pub fn with_productive_symbols(&self) -> Grammar {
        usefulness::keep_productive(self)
    }

    /// Eliminates unreachable symbols. See [`usefulness::keep_reachable`].
    pub fn with_reachable_symbols(&self) -> Grammar {
        usefulness::keep_reachable(self)
    }

    /// Eliminates useless symbols. See [`usefulness::keep_useful`].
    pub fn with_useful_symbols(&self) -> Grammar {
        usefulness::keep_useful(self)
    }

    /// Splits long alternatives into pairs. See [`binarized::binarize`].
    pub fn with_pair_rules(&self) -> Grammar {
        binarized::binarize(self)
    }

    /// Isolates terminals in pair alternatives. See [`terminals::isolate_terminals`].
    pub fn with_unit_terminals(&self) -> Grammar {
        terminals::isolate_terminals(self)
    }

    /// Converts the grammar to Chomsky normal form.
    pub fn chomsky_normal_form(&self) -> Grammar {
        Pipeline::chomsky_normal_form().apply(self)
    }
}

fn sorted_alternatives(alternatives: &BTreeSet<Alternative>) -> Vec<&Alternative> {
    let mut sorted: Vec<&Alternative> = alternatives.iter().collect();
    sorted.sort_by_cached_key(|alternative| printed(alternative));
    sorted
}

fn printed(alternative: &[Symbol]) -> (Vec<String>, Alternative) {
    (
        alternative.iter().map(Symbol::to_string).collect(),
        alternative.to_vec(),
    )
}

/// Writes the alternative in notation, with `%` for the empty alternative.
pub(crate) fn write_alternative(f: &mut impl fmt::Write, alternative: &[Symbol]) -> fmt::Result {
    if alternative.is_empty() {
        return f.write_char('%');
    }
    for (i, sym) in alternative.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{}", sym)?;
    }
    Ok(())
}

impl fmt::Display for Grammar {
    /// Prints the grammar in canonical notation, one rule per line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (lhs, alternatives) in self.canonical_rules() {
            write!(f, "{} -> ", lhs)?;
            for (i, alternative) in alternatives.iter().enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                write_alternative(f, alternative)?;
            }
            f.write_str(" ;;\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_sets() {
        let grammar = Grammar::builder('S')
            .rule('S')
            .rhs_str("aA")
            .rule('A')
            .rhs_str("b")
            .rhs_str("")
            .build();
        let nonterminals: Vec<_> = grammar.nonterminals().iter().map(Symbol::to_string).collect();
        let terminals: Vec<_> = grammar.terminals().iter().map(Symbol::to_string).collect();
        assert_eq!(nonterminals, ["A", "S"]);
        assert_eq!(terminals, ["a", "b"]);
    }

    #[test]
    fn test_start_is_always_a_key() {
        let grammar = Grammar::new(Symbol::from('S'), BTreeMap::new());
        assert!(grammar.is_nonterminal(&Symbol::from('S')));
        assert_eq!(grammar.num_alternatives(), 0);
        assert_eq!(grammar.to_string(), "S ->  ;;\n");
    }

    #[test]
    fn test_display_is_canonical() {
        let grammar = Grammar::builder('S')
            .rule('B')
            .rhs_str("b")
            .rule('S')
            .rhs_str("BA")
            .rhs_str("")
            .rule('A')
            .rhs_str("a")
            .build();
        assert_eq!(
            grammar.to_string(),
            "S -> % | B A ;;\nA -> a ;;\nB -> b ;;\n"
        );
    }
}
