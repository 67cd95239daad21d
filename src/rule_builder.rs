//! Grammars can be built with the builder pattern.

use std::collections::{BTreeMap, BTreeSet};

use crate::grammar::{Alternative, Grammar};
use crate::symbol::Symbol;

/// The rule builder.
#[derive(Clone, Debug)]
pub struct RuleBuilder {
    start: Symbol,
    lhs: Option<Symbol>,
    rules: BTreeMap<Symbol, BTreeSet<Alternative>>,
}

impl RuleBuilder {
    /// Creates a rule builder for a grammar with the given start symbol.
    pub fn new(start: Symbol) -> Self {
        RuleBuilder {
            start,
            lhs: None,
            rules: BTreeMap::new(),
        }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: impl Into<Symbol>) -> Self {
        let lhs = lhs.into();
        self.rules.entry(lhs.clone()).or_default();
        self.lhs = Some(lhs);
        self
    }

    /// Adds a rule alternative to the grammar.
    ///
    /// # Panics
    ///
    /// Panics if called before `rule`.
    pub fn rhs<I>(mut self, syms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        let lhs = self.lhs.clone().expect("`rhs` called before `rule`");
        let alternative = syms.into_iter().map(Into::into).collect();
        self.rules.entry(lhs).or_default().insert(alternative);
        self
    }

    /// Adds a rule alternative made of single-character symbols. Whitespace is skipped, and the
    /// empty string adds the empty alternative.
    pub fn rhs_str(self, syms: &str) -> Self {
        self.rhs(syms.chars().filter(|ch| !ch.is_whitespace()))
    }

    /// Finishes building the grammar.
    pub fn build(self) -> Grammar {
        Grammar::new(self.start, self.rules)
    }
}
