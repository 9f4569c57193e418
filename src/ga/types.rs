//! Candidate solutions.
//!
//! [`Individual`] is the contract selection and statistics work against;
//! [`Candidate`] is the concrete chromosome-plus-fitness value the runner
//! evolves.

use crate::expr::Chromosome;

/// Anything that carries a fitness score.
///
/// Fitness is `f64` and **higher is better**. Roulette selection needs
/// non-negative values.
pub trait Individual: Clone + Send + Sync {
    /// Returns the current fitness of this individual.
    fn fitness(&self) -> f64;

    /// Sets the fitness of this individual.
    ///
    /// Called by [`assign_fitness`](crate::expr::assign_fitness) once per
    /// generation.
    fn set_fitness(&mut self, fitness: f64);
}

/// A chromosome and its score.
///
/// New candidates start with fitness `0.0`. Candidates are cloned, never
/// shared, when they move into the next population.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    chromosome: Chromosome,
    fitness: f64,
}

impl Candidate {
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: 0.0,
        }
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }
}

impl Individual for Candidate {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
