//! exprga CLI - evolve an arithmetic expression that hits a target value.

use clap::Parser;
use exprga::expr::GeneTable;
use exprga::ga::{GaConfig, GaRunner, Individual};
use std::process::ExitCode;

/// Evolve 4-bit-gene chromosomes into arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "exprga")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of generations to run
    #[arg(short, long, default_value = "100")]
    generations: usize,

    /// Candidates per generation (positive multiple of 4)
    #[arg(short, long, default_value = "100")]
    population_size: usize,

    /// Bits per gene (the built-in table only accepts 4)
    #[arg(long, default_value = "4")]
    gene_width: usize,

    /// Bits per chromosome (positive multiple of the gene width)
    #[arg(short, long, default_value = "28")]
    chromosome_length: usize,

    /// Value the expressions should evaluate to
    #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
    target: i64,

    /// Redraws allowed when both parents share a chromosome
    #[arg(long, default_value = "256")]
    max_parent_retries: usize,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Score candidates on all cores (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

impl Args {
    fn to_config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_generations(self.generations)
            .with_population_size(self.population_size)
            .with_gene_width(self.gene_width)
            .with_chromosome_length(self.chromosome_length)
            .with_target(self.target)
            .with_max_parent_retries(self.max_parent_retries)
            .with_parallel(self.parallel);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = args.to_config();
    if let Err(e) = config.validate() {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    if config.parallel && !cfg!(feature = "parallel") {
        log::warn!("built without the `parallel` feature; scoring sequentially");
    }

    let table = GeneTable::arithmetic();
    let result = GaRunner::run_with_observer(&config, &table, |stats| {
        println!(
            "Mean fitness for generation{} is {}",
            stats.generation, stats.mean_fitness
        );
    });

    match result {
        Ok(result) => {
            let expression = table
                .decode_chromosome(result.best.chromosome())
                .map(|symbols| exprga::expr::render_symbols(&symbols))
                .unwrap_or_default();
            log::info!(
                "best expression {expression} (fitness {})",
                result.best.fitness()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("run aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
