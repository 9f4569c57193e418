//! Error types shared by the codec, the evaluator and the runner.

use thiserror::Error;

/// Errors produced while decoding, evaluating or running the GA.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprGaError {
    /// A gene bit pattern has no entry in the gene table.
    ///
    /// Fatal: both initialization and crossover only ever produce legal
    /// genes, so this means an invariant was broken upstream.
    #[error("unknown gene {gene} at position {position}")]
    UnknownGene { gene: String, position: usize },

    /// A `/` operator was followed by a zero operand.
    #[error("division by zero")]
    DivideByZero,

    /// An intermediate value left the `i64` range.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,

    /// [`evaluate`](crate::expr::evaluate) was called on a sequence that
    /// does not fully alternate digit/operator.
    #[error("malformed expression: only {matched} of {len} symbols alternate")]
    MalformedExpression { matched: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid chromosome: {0}")]
    InvalidChromosome(String),

    #[error("invalid gene table: {0}")]
    InvalidGeneTable(String),
}

pub type Result<T> = std::result::Result<T, ExprGaError>;
