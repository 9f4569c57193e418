//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{ExprGaError, Result};
use crate::expr::MAX_GENE_WIDTH;

/// Configuration for the expression GA.
///
/// # Defaults
///
/// ```
/// use exprga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.chromosome_length, 28);
/// assert_eq!(config.target, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use exprga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_chromosome_length(36)
///     .with_target(42)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of scoring/breeding rounds.
    pub generations: usize,

    /// Number of candidates in every generation.
    ///
    /// Must be a positive multiple of 4: each breeding step emits two
    /// offspring and carries both parents forward.
    pub population_size: usize,

    /// Bits per gene. Must match the gene table's width.
    pub gene_width: usize,

    /// Bits per chromosome. Must be a positive multiple of `gene_width`.
    pub chromosome_length: usize,

    /// Value the evolved expressions should evaluate to.
    pub target: i64,

    /// How many times the second parent is redrawn while it equals the
    /// first before a duplicate pairing is accepted.
    pub max_parent_retries: usize,

    /// Whether to score candidates in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 100,
            gene_width: 4,
            chromosome_length: 28,
            target: 10,
            max_parent_retries: 256,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the gene width in bits.
    pub fn with_gene_width(mut self, bits: usize) -> Self {
        self.gene_width = bits;
        self
    }

    /// Sets the chromosome length in bits.
    pub fn with_chromosome_length(mut self, bits: usize) -> Self {
        self.chromosome_length = bits;
        self
    }

    /// Sets the target value.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Sets the duplicate-parent retry budget.
    pub fn with_max_parent_retries(mut self, retries: usize) -> Self {
        self.max_parent_retries = retries;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Genes per chromosome.
    pub fn gene_count(&self) -> usize {
        if self.gene_width == 0 {
            0
        } else {
            self.chromosome_length / self.gene_width
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`ExprGaError::InvalidConfig`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.generations == 0 {
            return Err(invalid("generations must be at least 1"));
        }
        if self.population_size == 0 || self.population_size % 4 != 0 {
            return Err(invalid(format!(
                "population_size must be a positive multiple of 4, got {}",
                self.population_size
            )));
        }
        if self.gene_width == 0 || self.gene_width > MAX_GENE_WIDTH {
            return Err(invalid(format!(
                "gene_width must be in 1..={MAX_GENE_WIDTH}, got {}",
                self.gene_width
            )));
        }
        if self.chromosome_length == 0 || self.chromosome_length % self.gene_width != 0 {
            return Err(invalid(format!(
                "chromosome_length must be a positive multiple of gene_width ({}), got {}",
                self.gene_width, self.chromosome_length
            )));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ExprGaError {
    ExprGaError::InvalidConfig(msg.into())
}
