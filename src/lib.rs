//! Genetic algorithm that evolves arithmetic expressions.
//!
//! Candidates are fixed-length bit strings. Every 4-bit gene decodes to a
//! digit or an operator, so a chromosome reads as an expression such as
//! `7*2-4`. The engine rewards chromosomes that first form a valid
//! digit/operator alternation and then evaluate close to a target value.
//!
//! - [`expr`]: gene table, chromosome codec, expression evaluation and the
//!   three-tier fitness policy
//! - [`ga`]: candidates, roulette selection, gene-aligned crossover and the
//!   generational loop
//!
//! # Example
//!
//! ```
//! use exprga::expr::GeneTable;
//! use exprga::ga::{GaConfig, GaRunner};
//!
//! let config = GaConfig::default()
//!     .with_generations(5)
//!     .with_population_size(20)
//!     .with_seed(7);
//! let result = GaRunner::run(&config, &GeneTable::arithmetic()).unwrap();
//! assert_eq!(result.population.len(), 20);
//! assert_eq!(result.mean_fitness_history.len(), 5);
//! ```

pub mod error;
pub mod expr;
pub mod ga;
pub mod random;

pub use error::{ExprGaError, Result};
