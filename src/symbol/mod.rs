//! A type that can represent symbols in a context-free grammar. Symbols are either named by the
//! user or synthesized by a grammar transformation.

pub mod set;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::set::{SymbolBitSet, SymbolIndex};

/// A common grammar symbol type.
///
/// Symbols synthesized by transformations never compare equal to named symbols, even when
/// their printed forms coincide.
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// A symbol supplied by the user.
    Named(String),
    /// A symbol created by a grammar transformation.
    Synthetic(Box<Synthetic>),
}

/// Provenance of a synthesized symbol.
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Synthetic {
    /// A new start symbol that derives the empty string or the old start symbol.
    Start(Symbol),
    /// A link in the chain of binary rules that replaces a long alternative.
    Link {
        /// The rule's left-hand side.
        lhs: Symbol,
        /// Position of the alternative among the sorted alternatives of `lhs`.
        alternative: usize,
        /// One-based position of the link in the chain.
        position: usize,
    },
    /// A nonterminal that derives exactly one terminal.
    Terminal(Symbol),
}

impl Symbol {
    /// Creates a named symbol.
    pub fn named(name: impl Into<String>) -> Self {
        Symbol::Named(name.into())
    }

    /// Creates a start symbol for `start`.
    pub fn start_prime(start: &Symbol) -> Self {
        Synthetic::Start(start.clone()).into()
    }

    /// Creates a link symbol for a binarized alternative.
    pub fn link(lhs: &Symbol, alternative: usize, position: usize) -> Self {
        Synthetic::Link {
            lhs: lhs.clone(),
            alternative,
            position,
        }
        .into()
    }

    /// Creates a nonterminal that stands for the terminal `terminal`.
    pub fn terminal_of(terminal: &Symbol) -> Self {
        Synthetic::Terminal(terminal.clone()).into()
    }

    /// Returns the provenance of a synthesized symbol.
    pub fn synthetic(&self) -> Option<&Synthetic> {
        match self {
            Symbol::Synthetic(synthetic) => Some(synthetic),
            Symbol::Named(_) => None,
        }
    }
}

impl From<Synthetic> for Symbol {
    fn from(synthetic: Synthetic) -> Self {
        Symbol::Synthetic(Box::new(synthetic))
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::named(name)
    }
}

impl From<char> for Symbol {
    fn from(name: char) -> Self {
        Symbol::Named(name.to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Named(name) => f.write_str(name),
            Symbol::Synthetic(synthetic) => fmt::Display::fmt(synthetic, f),
        }
    }
}

impl fmt::Display for Synthetic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Synthetic::Start(start) => write!(f, "{}'", start),
            Synthetic::Link {
                lhs,
                alternative,
                position,
            } => write!(f, "{}_{}:{}", lhs, alternative, position),
            Synthetic::Terminal(terminal) => write!(f, "{}#", terminal),
        }
    }
}
