//! Generational loop.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → (scoring → breeding) × generations.
//!
//! Breeding fills the next population four slots at a time: two parents
//! chosen by [`roulette`], two gene-crossover children, then both parents
//! unchanged. No mutation step exists.

use super::config::GaConfig;
use super::operators::gene_crossover;
use super::selection::roulette;
use super::types::{Candidate, Individual};
use crate::error::{ExprGaError, Result};
use crate::expr::{assign_fitness, mean_fitness, render_symbols, GeneTable};
use crate::random::create_rng;
use rand::Rng;

/// Summary of one scored generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 0-based generation index.
    pub generation: usize,

    /// Sum of fitness divided by population size.
    pub mean_fitness: f64,

    /// Highest fitness in the generation.
    pub best_fitness: f64,

    /// Decoded expression of the fittest candidate, e.g. `2+3+5`.
    pub best_expression: String,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Population bred by the last generation (not yet scored).
    pub population: Vec<Candidate>,

    /// The fittest candidate scored during the entire run.
    pub best: Candidate,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Mean fitness of each scored generation.
    pub mean_fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use exprga::expr::GeneTable;
/// use exprga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_generations(3).with_seed(42);
/// let result = GaRunner::run_with_observer(&config, &GeneTable::arithmetic(), |stats| {
///     println!("Mean fitness for generation{} is {}", stats.generation, stats.mean_fitness);
/// })
/// .unwrap();
/// assert_eq!(result.generations, 3);
/// ```
#[derive(Debug)]
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA without observing individual generations.
    ///
    /// # Errors
    /// See [`run_with_rng`](Self::run_with_rng).
    pub fn run(config: &GaConfig, table: &GeneTable) -> Result<GaResult> {
        Self::run_with_observer(config, table, |_| {})
    }

    /// Runs the GA, calling `observer` once per generation after scoring.
    ///
    /// Uses `config.seed` or, when unset, a random seed. The seed is logged
    /// at info level so any run can be replayed.
    ///
    /// # Errors
    /// See [`run_with_rng`](Self::run_with_rng).
    pub fn run_with_observer<F>(config: &GaConfig, table: &GeneTable, observer: F) -> Result<GaResult>
    where
        F: FnMut(&GenerationStats),
    {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("using seed {seed}");
        let mut rng = create_rng(seed);
        Self::run_with_rng(config, table, &mut rng, observer)
    }

    /// Runs the GA with a caller-supplied random source.
    ///
    /// # Errors
    /// - [`ExprGaError::InvalidConfig`] if `config` fails validation or its
    ///   gene width differs from `table.width()`; nothing runs in that case
    /// - [`ExprGaError::UnknownGene`] if a chromosome ever fails to decode
    pub fn run_with_rng<R, F>(
        config: &GaConfig,
        table: &GeneTable,
        rng: &mut R,
        observer: F,
    ) -> Result<GaResult>
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;
        if config.gene_width != table.width() {
            return Err(ExprGaError::InvalidConfig(format!(
                "gene_width {} does not match gene table width {}",
                config.gene_width,
                table.width()
            )));
        }

        log::info!(
            "evolving {} candidates of {} genes for {} generations (target {})",
            config.population_size,
            config.gene_count(),
            config.generations,
            config.target
        );

        let population: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::new(table.build_chromosome(config.gene_count(), rng)))
            .collect();

        evolve(config, table, population, rng, observer)
    }
}

/// Scores and breeds `population` for `config.generations` rounds.
fn evolve<R, F>(
    config: &GaConfig,
    table: &GeneTable,
    mut population: Vec<Candidate>,
    rng: &mut R,
    mut observer: F,
) -> Result<GaResult>
where
    R: Rng,
    F: FnMut(&GenerationStats),
{
    let mut best = population[0].clone();
    let mut mean_fitness_history = Vec::with_capacity(config.generations);

    for generation in 0..config.generations {
        assign_fitness(table, &mut population, config.target, config.parallel)?;

        let gen_best = find_best(&population);
        if generation == 0 || gen_best.fitness() > best.fitness() {
            best = gen_best.clone();
        }

        let stats = GenerationStats {
            generation,
            mean_fitness: mean_fitness(&population),
            best_fitness: gen_best.fitness(),
            best_expression: render_symbols(&table.decode_chromosome(gen_best.chromosome())?),
        };
        log::debug!(
            "generation {}: mean {:.4}, best {:.4} ({})",
            stats.generation,
            stats.mean_fitness,
            stats.best_fitness,
            stats.best_expression
        );

        let (next, stalemates) = breed(&population, config.max_parent_retries, rng);
        if stalemates > 0 {
            log::warn!(
                "generation {generation}: {stalemates} pairing(s) kept duplicate parents after {} retries",
                config.max_parent_retries
            );
        }
        population = next;

        mean_fitness_history.push(stats.mean_fitness);
        observer(&stats);
    }

    log::info!(
        "best candidate {} with fitness {}",
        best.chromosome(),
        best.fitness()
    );

    Ok(GaResult {
        population,
        best_fitness: best.fitness(),
        best,
        generations: config.generations,
        mean_fitness_history,
    })
}

/// Builds the next population from a scored one.
///
/// Returns the new population and how many pairings gave up on finding a
/// second parent distinct from the first.
fn breed<R: Rng>(
    population: &[Candidate],
    max_parent_retries: usize,
    rng: &mut R,
) -> (Vec<Candidate>, usize) {
    let mut next = Vec::with_capacity(population.len());
    let mut stalemates = 0usize;

    for _ in 0..population.len() / 4 {
        let p1 = &population[roulette(population, rng)];
        let mut p2 = &population[roulette(population, rng)];

        // Redraw so a parent is not crossed with its own chromosome.
        let mut retries = 0;
        while p2.chromosome() == p1.chromosome() && retries < max_parent_retries {
            p2 = &population[roulette(population, rng)];
            retries += 1;
        }
        if p2.chromosome() == p1.chromosome() {
            stalemates += 1;
        }

        for _ in 0..2 {
            next.push(Candidate::new(gene_crossover(
                p1.chromosome(),
                p2.chromosome(),
                rng,
            )));
        }
        next.push(p1.clone());
        next.push(p2.clone());
    }

    (next, stalemates)
}

/// Fittest candidate; the earliest one wins ties.
fn find_best(population: &[Candidate]) -> &Candidate {
    population.iter().fold(&population[0], |best, c| {
        if c.fitness() > best.fitness() {
            c
        } else {
            best
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
