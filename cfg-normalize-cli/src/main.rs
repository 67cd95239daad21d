mod cli;

use std::error::Error;
use std::fs;

use cfg_normalize::{Grammar, PipelineOptions};
use cfg_normalize_load::GrammarLoadExt;
use clap::Parser;
use log::debug;

use crate::cli::Cli;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));

    let text = fs::read_to_string(&cli.file)?;
    let grammar = Grammar::load(&text)?;
    debug!("read {}", cli.file.display());

    let pipeline = cli.pipeline();
    let run = pipeline.run(
        &grammar,
        &PipelineOptions {
            trace: cli.verbose,
        },
    );

    println!("Original");
    print!("{}", grammar.stringify());
    for entry in &run.trace {
        println!("{}", entry.step);
        print!("{}", entry.grammar);
    }
    println!("Result");
    print!("{}", run.grammar.stringify());
    Ok(())
}
