use std::path::PathBuf;

use cfg_normalize::{Pipeline, Step};
use clap::Parser;

/// Normalize context-free grammars
///
/// Prints the original grammar and the result. With --verbose, also prints the grammar after
/// every step, and logs nullable, productive and reachable symbols and unit pairs to stderr.
/// RUST_LOG overrides the log level.
#[derive(Parser, Debug)]
#[command(name = "cfgnorm", version)]
pub struct Cli {
    /// File containing the grammar
    pub file: PathBuf,

    /// Eliminate nonproductive nonterminals
    #[arg(short, long)]
    pub prod: bool,

    /// Eliminate unreachable symbols
    #[arg(short, long)]
    pub reach: bool,

    /// Eliminate useless symbols
    #[arg(short = 'l', long)]
    pub useless: bool,

    /// Eliminate null rules
    #[arg(short, long)]
    pub null: bool,

    /// Eliminate unit rules
    #[arg(short, long)]
    pub unit: bool,

    /// Convert to Chomsky normal form
    #[arg(short, long)]
    pub cnf: bool,

    /// Print the grammar after every step, and log analysis results to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the pipeline for the selected flags.
    ///
    /// Flag order on the command line does not matter.
    pub fn pipeline(&self) -> Pipeline {
        let selected = [
            (self.null, Pipeline::without_epsilon_rules as fn() -> Pipeline),
            (self.unit, Pipeline::without_unit_rules),
            (self.reach, Pipeline::with_reachable_symbols),
            (self.prod, Pipeline::with_productive_symbols),
            (self.useless, Pipeline::useful_symbols),
            (self.cnf, Pipeline::chomsky_normal_form),
        ];
        let mut pipeline = Pipeline::new();
        pipeline.extend(
            selected
                .into_iter()
                .filter(|&(enabled, _)| enabled)
                .map(|(_, make)| Step::from(make())),
        );
        pipeline
    }
}
