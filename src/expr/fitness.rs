//! Three-tier fitness policy.
//!
//! Structure is rewarded before value so that the population gets a
//! gradient long before any expression is fully valid:
//!
//! | Decoded expression                  | Fitness              |
//! |-------------------------------------|----------------------|
//! | starts with an operator             | `0.0`                |
//! | valid alternating prefix of `k`     | `0.1 × k`            |
//! | fully valid, equals the target      | [`MAX_FITNESS`]      |
//! | fully valid, off by `d`             | `MAX_FITNESS / d`    |
//!
//! Higher is better.

use super::codec::{render_symbols, GeneTable, Symbol};
use super::eval::{check_form, evaluate};
use crate::error::{ExprGaError, Result};
use crate::ga::{Candidate, Individual};

/// Fitness of an expression that hits the target exactly.
pub const MAX_FITNESS: f64 = 5.0;

/// Credit per symbol of a valid alternating prefix.
pub const PREFIX_CREDIT: f64 = 0.1;

/// Scores one decoded expression against `target`.
///
/// Division by zero and `i64` overflow score `0.0`; one bad candidate never
/// aborts a run. A sequence that alternates to the end but finishes on an
/// operator has no value, so its dangling operator is not credited.
pub fn score(symbols: &[Symbol], target: i64) -> f64 {
    let matched = check_form(symbols);
    if matched == 0 {
        return 0.0;
    }
    if matched < symbols.len() {
        return PREFIX_CREDIT * matched as f64;
    }

    match evaluate(symbols) {
        Ok(value) if value == target => MAX_FITNESS,
        // integer distance first: large i64s collapse when cast to f64
        Ok(value) => MAX_FITNESS / value.abs_diff(target) as f64,
        Err(ExprGaError::MalformedExpression { .. }) => {
            PREFIX_CREDIT * (symbols.len() - 1) as f64
        }
        Err(err) => {
            log::debug!("{} scored 0: {err}", render_symbols(symbols));
            0.0
        }
    }
}

/// Decodes and scores every candidate in place.
///
/// With the `parallel` feature enabled and `parallel` set, candidates are
/// scored on the rayon pool; the result is identical to the sequential
/// path.
///
/// # Errors
/// [`ExprGaError::UnknownGene`] if any chromosome holds an illegal gene.
/// This is fatal for the run.
pub fn assign_fitness(
    table: &GeneTable,
    population: &mut [Candidate],
    target: i64,
    parallel: bool,
) -> Result<()> {
    if parallel {
        return score_parallel(table, population, target);
    }
    population
        .iter_mut()
        .try_for_each(|candidate| score_candidate(table, candidate, target))
}

#[cfg(feature = "parallel")]
fn score_parallel(table: &GeneTable, population: &mut [Candidate], target: i64) -> Result<()> {
    use rayon::prelude::*;

    population
        .par_iter_mut()
        .try_for_each(|candidate| score_candidate(table, candidate, target))
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(table: &GeneTable, population: &mut [Candidate], target: i64) -> Result<()> {
    population
        .iter_mut()
        .try_for_each(|candidate| score_candidate(table, candidate, target))
}

fn score_candidate(table: &GeneTable, candidate: &mut Candidate, target: i64) -> Result<()> {
    let symbols = table.decode_chromosome(candidate.chromosome())?;
    candidate.set_fitness(score(&symbols, target));
    Ok(())
}

/// Sum of fitness divided by population size; `0.0` when empty.
pub fn mean_fitness<I: Individual>(population: &[I]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|c| c.fitness()).sum::<f64>() / population.len() as f64
}
