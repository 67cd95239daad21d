//! Dense numbering of a grammar's symbols, and sets of symbols in the form of bit vectors.

use std::collections::{BTreeMap, BTreeSet};

use bit_vec::BitVec;

use crate::grammar::Grammar;
use crate::symbol::Symbol;

/// Contains maps for translation between symbols and their dense IDs.
///
/// Nonterminals are numbered first, followed by terminals.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    to_id: BTreeMap<Symbol, usize>,
    to_symbol: Vec<Symbol>,
}

impl SymbolIndex {
    /// Numbers all symbols that appear in the grammar.
    pub fn new(grammar: &Grammar) -> Self {
        let mut index = SymbolIndex::default();
        for sym in grammar.nonterminals().iter().chain(grammar.terminals()) {
            index.insert(sym);
        }
        index
    }

    fn insert(&mut self, sym: &Symbol) -> usize {
        if let Some(&id) = self.to_id.get(sym) {
            return id;
        }
        let id = self.to_symbol.len();
        self.to_id.insert(sym.clone(), id);
        self.to_symbol.push(sym.clone());
        id
    }

    /// Returns the ID of a symbol.
    pub fn id(&self, sym: &Symbol) -> Option<usize> {
        self.to_id.get(sym).copied()
    }

    /// Returns the symbol with the given ID.
    pub fn symbol(&self, id: usize) -> &Symbol {
        &self.to_symbol[id]
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.to_symbol.len()
    }

    /// Translates a sequence of symbols to IDs. Symbols must belong to the indexed grammar.
    pub fn ids<'a>(&'a self, syms: &'a [Symbol]) -> impl Iterator<Item = usize> + 'a {
        syms.iter().filter_map(move |sym| self.id(sym))
    }
}

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet` for the indexed symbols.
    pub fn new(index: &SymbolIndex) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(index.num_syms(), false),
        }
    }

    /// Gathers information about whether symbols are terminal or nonterminal.
    /// Constructs a set of terminal symbols.
    pub fn terminal(index: &SymbolIndex, grammar: &Grammar) -> Self {
        let mut set = SymbolBitSet::new(index);
        for sym in grammar.terminals() {
            set.insert(index, sym);
        }
        set
    }

    /// Constructs the set of nonterminals that have an empty alternative.
    pub fn nulling(index: &SymbolIndex, grammar: &Grammar) -> Self {
        let mut set = SymbolBitSet::new(index);
        for (lhs, alternatives) in grammar.rules() {
            if alternatives.iter().any(|alternative| alternative.is_empty()) {
                set.insert(index, lhs);
            }
        }
        set
    }

    /// Adds a symbol to the set.
    pub fn insert(&mut self, index: &SymbolIndex, sym: &Symbol) {
        if let Some(id) = index.id(sym) {
            self.bit_vec.set(id, true);
        }
    }

    /// Returns a mutable reference to the underlying bit vector.
    pub fn bit_vec_mut(&mut self) -> &mut BitVec {
        &mut self.bit_vec
    }

    /// Translates the set back to symbols.
    pub fn to_symbols(&self, index: &SymbolIndex) -> BTreeSet<Symbol> {
        self.bit_vec
            .iter()
            .enumerate()
            .filter(|&(_, present)| present)
            .map(|(id, _)| index.symbol(id).clone())
            .collect()
    }
}
