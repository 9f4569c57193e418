//! Gene-aligned crossover.
//!
//! Every gene position is inherited whole from one parent or the other.
//! Because no gene is ever split at the bit level, a child of two legal
//! chromosomes only holds patterns that already exist in a parent and
//! therefore always decodes.
//!
//! A cut-point crossover on raw bits would be the usual choice when every
//! bit pattern is meaningful; here two patterns are illegal, so the cut
//! must fall on gene boundaries.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

use crate::expr::Chromosome;

/// Uniform crossover at gene granularity.
///
/// For each position a uniform draw below `0.5` takes the gene from
/// `parent_a`, otherwise from `parent_b`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents differ in gene count or gene width.
pub fn gene_crossover<R: Rng>(
    parent_a: &Chromosome,
    parent_b: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    assert_eq!(
        parent_a.gene_count(),
        parent_b.gene_count(),
        "parents must have equal length"
    );
    assert_eq!(
        parent_a.gene_width(),
        parent_b.gene_width(),
        "parents must have equal gene width"
    );

    let genes = parent_a
        .genes()
        .iter()
        .zip(parent_b.genes())
        .map(|(&a, &b)| if rng.random::<f64>() < 0.5 { a } else { b })
        .collect();

    Chromosome::new(genes, parent_a.gene_width())
}
