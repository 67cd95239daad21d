//! Library for normalizing context-free grammars. Transformations eliminate null rules, unit
//! rules and useless symbols, and convert grammars to Chomsky normal form.
//!
//! Every transformation takes a grammar by reference and returns a new grammar.
//!
//! ```
//! use cfg_normalize::{Grammar, Pipeline};
//!
//! let grammar = Grammar::builder('S')
//!     .rule('S')
//!     .rhs_str("aSb")
//!     .rhs_str("")
//!     .build();
//! let cnf = Pipeline::chomsky_normal_form().apply(&grammar);
//! assert!(cnf
//!     .rules()
//!     .flat_map(|(_, alternatives)| alternatives)
//!     .all(|alternative| alternative.len() <= 2));
//! ```

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, allow(missing_docs))]

pub mod analysis;
pub mod binarized;
mod grammar;
pub mod nulling;
pub mod pipeline;
mod rule_builder;
pub mod symbol;
pub mod terminals;
pub mod unit;
pub mod usefulness;

pub use crate::grammar::{Alternative, Grammar};
pub use crate::pipeline::{Pipeline, PipelineOptions, Rewrite, Run, Step, TraceEntry};
pub use crate::rule_builder::RuleBuilder;
pub use crate::symbol::{Symbol, Synthetic};
