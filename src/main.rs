//! bitevo CLI - evolves a random bit-string population toward a hidden target.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use bitevo::{SearchConfig, SearchRunner, Termination};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parallel evolutionary search over packed bit strings
#[derive(Parser, Debug)]
#[command(name = "bitevo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of bits per individual
    nb_bits: usize,

    /// Number of individuals in the population
    population_size: usize,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generation budget (default: 1000000)
    #[arg(short = 'g', long, default_value = "1000000")]
    max_generations: usize,

    /// Write the final population report to this file
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Run single-threaded
    #[arg(long)]
    sequential: bool,

    /// Suppress per-generation progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<(), String> {
    let mut config = SearchConfig::new(args.nb_bits, args.population_size)
        .with_max_generations(args.max_generations)
        .with_parallel(!args.sequential);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let quiet = args.quiet;
    let result = SearchRunner::run_with_progress(&config, |p| {
        if !quiet {
            println!("Gen : {}. Best : {}", p.generation, p.best_fitness);
        }
    });

    match result.termination {
        Termination::Found => {
            println!("Found the target after {} generations.", result.generations);
        }
        Termination::GenerationLimit => {
            println!(
                "Generation budget exhausted; best distance {}.",
                result.best_fitness
            );
        }
    }

    let file = File::create(&args.output)
        .map_err(|e| format!("cannot create {}: {e}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    bitevo::write_report(&mut writer, &result)
        .and_then(|()| writer.flush())
        .map_err(|e| format!("cannot write {}: {e}", args.output.display()))?;

    Ok(())
}
