//! Genetic algorithm engine.
//!
//! Evolves a fixed-size population of [`Candidate`]s. Each generation is
//! scored with [`assign_fitness`](crate::expr::assign_fitness), then the
//! next one is bred with roulette selection and gene-aligned crossover.
//!
//! # Core Traits
//!
//! - [`Individual`]: anything with a fitness score (higher is better)
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters with validation
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: final population, best candidate and mean fitness history
//!
//! # Submodules
//!
//! - [`operators`]: gene-aligned uniform crossover
//! - [`selection`]: roulette wheel selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use operators::gene_crossover;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::roulette;
pub use types::{Candidate, Individual};
