//! The basic notation.
//!
//! ```text
//! S -> a S b | % ;;
//! ```
//!
//! Records end with `;;`. Alternatives are separated by `|`, and `%` is the empty alternative.
//! Every other character, except whitespace, is a symbol. The left-hand side of the first record
//! is the start symbol.

use std::collections::{BTreeMap, BTreeSet};

use cfg_normalize::{Alternative, Grammar, Symbol};
use log::debug;

use crate::{LoadError, LoadErrorKind};

const RECORD_TERMINATOR: &str = ";;";
const ARROW: &str = "->";
const EMPTY: &str = "%";

/// Loads a grammar from a string.
pub fn load(text: &str) -> Result<Grammar, LoadError> {
    let mut rules: BTreeMap<Symbol, BTreeSet<Alternative>> = BTreeMap::new();
    let mut start = None;

    for (i, record) in text.split(RECORD_TERMINATOR).enumerate() {
        let record = record.trim();
        if record.is_empty() {
            continue;
        }
        let error = |reason| LoadError {
            reason,
            record: i,
            text: record.to_string(),
        };

        let (lhs, rhs) = record
            .split_once(ARROW)
            .ok_or_else(|| error(LoadErrorKind::MissingArrow))?;
        let (lhs, rhs) = (lhs.trim(), rhs.trim());
        if lhs.is_empty() {
            return Err(error(LoadErrorKind::EmptyLhs));
        }
        if rhs.is_empty() {
            return Err(error(LoadErrorKind::EmptyRhs));
        }

        let lhs = Symbol::named(lhs);
        if start.is_none() {
            start = Some(lhs.clone());
        }
        let alternatives = rules.entry(lhs).or_default();
        for alternative in rhs.split('|') {
            alternatives.insert(parse_alternative(alternative.trim()));
        }
    }

    let start = start.ok_or(LoadError {
        reason: LoadErrorKind::NoRules,
        record: 0,
        text: String::new(),
    })?;
    let grammar = Grammar::new(start, rules);
    debug!(
        "loaded {} rules with {} alternatives",
        grammar.nonterminals().len(),
        grammar.num_alternatives()
    );
    Ok(grammar)
}

fn parse_alternative(alternative: &str) -> Alternative {
    if alternative == EMPTY {
        return vec![];
    }
    alternative
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(Symbol::from)
        .collect()
}

/// Prints the grammar in canonical notation: the start rule first, then the other rules sorted
/// by their left-hand side, one rule per line. Alternatives are sorted.
pub fn stringify(grammar: &Grammar) -> String {
    grammar.to_string()
}
