//! Expression encoding and scoring.
//!
//! Chromosomes are read through a [`GeneTable`] into a row of
//! [`Symbol`]s, checked for digit/operator alternation by [`check_form`],
//! folded left to right by [`evaluate`], and scored by [`score`].
//!
//! # Key Types
//!
//! - [`GeneTable`]: checked gene → symbol lookup and random legal genes
//! - [`Chromosome`]: immutable row of fixed-width genes
//! - [`Symbol`]: a digit or an [`Operator`]

mod codec;
mod eval;
mod fitness;

pub use codec::{render_symbols, Chromosome, Gene, GeneTable, Operator, Symbol, MAX_GENE_WIDTH};
pub use eval::{check_form, evaluate, parse_symbols};
pub use fitness::{assign_fitness, mean_fitness, score, MAX_FITNESS, PREFIX_CREDIT};
