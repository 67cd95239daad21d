//! Allows us to load context-free grammars from a string in the `S -> a S b | % ;;` notation,
//! and to print them back.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod basic;

use std::fmt;

use cfg_normalize::Grammar;

pub use crate::basic::{load, stringify};

/// Represents an error when loading a grammar string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoadError {
    /// Reason for the error.
    pub reason: LoadErrorKind,
    /// Record where the error happened.
    ///
    /// Zero-indexed, counting every `;;`-separated record, including blank ones.
    pub record: usize,
    /// Raw text of the record, without surrounding whitespace.
    pub text: String,
}

/// Reasons for failing to load a grammar string.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LoadErrorKind {
    /// The record has no `->` separator.
    MissingArrow,
    /// The record has nothing before `->`.
    EmptyLhs,
    /// The record has nothing after `->`.
    EmptyRhs,
    /// The string contains no records, so it has no start symbol.
    NoRules,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            LoadErrorKind::MissingArrow => "contains no \"->\"",
            LoadErrorKind::EmptyLhs => "has no left-hand side",
            LoadErrorKind::EmptyRhs => "has no right-hand side",
            LoadErrorKind::NoRules => "grammar has no rules",
        })
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError {
                reason: LoadErrorKind::NoRules,
                ..
            } => write!(f, "Load error: {}", self.reason),
            LoadError {
                reason,
                record,
                text,
            } => {
                write!(f, "Load error: record {} <<< {} >>> {}", record, text, reason)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Extension trait for loading and printing grammars.
pub trait GrammarLoadExt: Sized {
    /// Loads a grammar from a string.
    fn load(text: &str) -> Result<Self, LoadError>;

    /// Prints the grammar in canonical notation.
    fn stringify(&self) -> String;
}

impl GrammarLoadExt for Grammar {
    fn load(text: &str) -> Result<Self, LoadError> {
        basic::load(text)
    }

    fn stringify(&self) -> String {
        basic::stringify(self)
    }
}
