//! Ordered composition of rewrites.
//!
//! A pipeline threads one grammar through its steps. Pipelines nest: a pipeline can be a step
//! of another, and nested steps run in order as if they were written in place.

use log::debug;

use crate::binarized::binarize;
use crate::grammar::Grammar;
use crate::nulling::eliminate_epsilon;
use crate::terminals::isolate_terminals;
use crate::unit::eliminate_unit;
use crate::usefulness::{keep_productive, keep_reachable};

/// A single grammar rewrite.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rewrite {
    /// See [`eliminate_epsilon`](crate::nulling::eliminate_epsilon).
    EliminateEpsilon,
    /// See [`eliminate_unit`](crate::unit::eliminate_unit).
    EliminateUnit,
    /// See [`keep_productive`](crate::usefulness::keep_productive).
    KeepProductive,
    /// See [`keep_reachable`](crate::usefulness::keep_reachable).
    KeepReachable,
    /// See [`binarize`](crate::binarized::binarize).
    Binarize,
    /// See [`isolate_terminals`](crate::terminals::isolate_terminals).
    IsolateTerminals,
}

impl Rewrite {
    /// Applies the rewrite, returning a new grammar.
    pub fn apply(self, grammar: &Grammar) -> Grammar {
        match self {
            Rewrite::EliminateEpsilon => eliminate_epsilon(grammar),
            Rewrite::EliminateUnit => eliminate_unit(grammar),
            Rewrite::KeepProductive => keep_productive(grammar),
            Rewrite::KeepReachable => keep_reachable(grammar),
            Rewrite::Binarize => binarize(grammar),
            Rewrite::IsolateTerminals => isolate_terminals(grammar),
        }
    }

    /// Returns the title of the step.
    pub fn name(self) -> &'static str {
        match self {
            Rewrite::EliminateEpsilon => "Without Epsilon Rules",
            Rewrite::EliminateUnit => "Without Unit Rules",
            Rewrite::KeepProductive => "With Productive Symbols",
            Rewrite::KeepReachable => "With Reachable Symbols",
            Rewrite::Binarize => "With Pair Rules",
            Rewrite::IsolateTerminals => "With Unit Terminals",
        }
    }
}

/// A step of a pipeline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// A named rewrite.
    Rewrite(Rewrite),
    /// A nested pipeline.
    Nested(Pipeline),
}

impl From<Rewrite> for Step {
    fn from(rewrite: Rewrite) -> Self {
        Step::Rewrite(rewrite)
    }
}

impl From<Pipeline> for Step {
    fn from(pipeline: Pipeline) -> Self {
        Step::Nested(pipeline)
    }
}

/// Options for a single pipeline run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PipelineOptions {
    /// Record the grammar after every named step.
    pub trace: bool,
}

/// The grammar after a named step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TraceEntry {
    /// Title of the step.
    pub step: &'static str,
    /// The grammar in canonical notation.
    pub grammar: String,
}

/// The outcome of a pipeline run.
#[derive(Clone, Debug)]
pub struct Run {
    /// The final grammar.
    pub grammar: Grammar,
    /// Grammars after every named step, or empty if tracing was off.
    pub trace: Vec<TraceEntry>,
}

/// An ordered list of rewrite steps.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Creates an empty pipeline, which returns its input unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn then(mut self, step: impl Into<Step>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Returns the steps, as they were added.
    pub fn steps(&self) -> &[Step] {
        &self.steps[..]
    }

    /// Returns the sequence of rewrites that a run performs, with nested pipelines expanded.
    pub fn flatten(&self) -> Vec<Rewrite> {
        let mut result = vec![];
        self.flatten_into(&mut result);
        result
    }

    fn flatten_into(&self, result: &mut Vec<Rewrite>) {
        for step in &self.steps {
            match step {
                Step::Rewrite(rewrite) => result.push(*rewrite),
                Step::Nested(pipeline) => pipeline.flatten_into(result),
            }
        }
    }

    /// Runs the pipeline on the grammar.
    pub fn run(&self, grammar: &Grammar, options: &PipelineOptions) -> Run {
        let mut trace = vec![];
        let mut current = grammar.clone();
        for rewrite in self.flatten() {
            current = rewrite.apply(&current);
            debug!(
                "{}: {} rules, {} alternatives",
                rewrite.name(),
                current.nonterminals().len(),
                current.num_alternatives()
            );
            if options.trace {
                trace.push(TraceEntry {
                    step: rewrite.name(),
                    grammar: current.to_string(),
                });
            }
        }
        Run {
            grammar: current,
            trace,
        }
    }

    /// Runs the pipeline without tracing, returning the final grammar.
    pub fn apply(&self, grammar: &Grammar) -> Grammar {
        self.run(grammar, &PipelineOptions::default()).grammar
    }

    /// A pipeline that eliminates null rules.
    pub fn without_epsilon_rules() -> Self {
        Pipeline::new().then(Rewrite::EliminateEpsilon)
    }

    /// A pipeline that eliminates unit rules.
    pub fn without_unit_rules() -> Self {
        Pipeline::new().then(Rewrite::EliminateUnit)
    }

    /// A pipeline that eliminates unproductive symbols.
    pub fn with_productive_symbols() -> Self {
        Pipeline::new().then(Rewrite::KeepProductive)
    }

    /// A pipeline that eliminates unreachable symbols.
    pub fn with_reachable_symbols() -> Self {
        Pipeline::new().then(Rewrite::KeepReachable)
    }

    /// A pipeline that splits long alternatives into pairs.
    pub fn with_pair_rules() -> Self {
        Pipeline::new().then(Rewrite::Binarize)
    }

    /// A pipeline that isolates terminals in pair alternatives.
    pub fn with_unit_terminals() -> Self {
        Pipeline::new().then(Rewrite::IsolateTerminals)
    }

    /// A pipeline that eliminates useless symbols: unproductive ones first, then unreachable
    /// ones.
    pub fn useful_symbols() -> Self {
        Pipeline::new()
            .then(Pipeline::with_productive_symbols())
            .then(Pipeline::with_reachable_symbols())
    }

    /// A pipeline that converts a grammar to Chomsky normal form.
    pub fn chomsky_normal_form() -> Self {
        Pipeline::new()
            .then(Pipeline::without_epsilon_rules())
            .then(Pipeline::without_unit_rules())
            .then(Pipeline::useful_symbols())
            .then(Pipeline::with_pair_rules())
            .then(Pipeline::with_unit_terminals())
    }
}

impl Extend<Step> for Pipeline {
    fn extend<I: IntoIterator<Item = Step>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}
