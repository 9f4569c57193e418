//! Gene table and chromosome codec.
//!
//! A chromosome is a row of fixed-width genes. Each legal gene maps to one
//! [`Symbol`] through a [`GeneTable`]; patterns missing from the table are
//! illegal and are never produced by [`GeneTable::random_legal_gene`].
//!
//! Lookups are checked: decoding an illegal gene yields
//! [`ExprGaError::UnknownGene`] instead of a placeholder symbol.

use std::fmt;

use rand::Rng;

use crate::error::{ExprGaError, Result};

/// Widest gene a table can hold.
pub const MAX_GENE_WIDTH: usize = 16;

/// One gene, stored as its bit pattern.
///
/// The width is not part of the value; it belongs to the table and the
/// chromosome that hold the gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gene(u16);

impl Gene {
    pub const fn new(bits: u16) -> Self {
        Gene(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Zero-padded binary form, e.g. `1010` for width 4.
    pub fn to_bit_string(self, width: usize) -> String {
        format!("{:0width$b}", self.0, width = width)
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    /// Truncating integer division.
    Div,
}

impl Operator {
    pub fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// A decoded gene: a single digit or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// Always in `0..=9`.
    Digit(u8),
    Op(Operator),
}

impl Symbol {
    /// Parses `0`-`9`, `+`, `-`, `*` or `/`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Symbol::Digit(d as u8)),
            '+' => Some(Symbol::Op(Operator::Add)),
            '-' => Some(Symbol::Op(Operator::Sub)),
            '*' => Some(Symbol::Op(Operator::Mul)),
            '/' => Some(Symbol::Op(Operator::Div)),
            _ => None,
        }
    }

    pub fn is_digit(self) -> bool {
        matches!(self, Symbol::Digit(_))
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Digit(d) => char::from(b'0' + d),
            Symbol::Op(op) => op.as_char(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Renders a decoded sequence as text, e.g. `2+3-1`.
pub fn render_symbols(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}

/// An ordered row of genes of one width.
///
/// Chromosomes are never edited in place; crossover and initialization
/// always build a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Gene>,
    gene_width: usize,
}

impl Chromosome {
    /// Callers guarantee every gene fits in `gene_width` bits.
    pub(crate) fn new(genes: Vec<Gene>, gene_width: usize) -> Self {
        Self { genes, gene_width }
    }

    /// Parses a string of `0`/`1` characters into genes of `gene_width`
    /// bits.
    ///
    /// No table check happens here; an illegal pattern only surfaces when
    /// the chromosome is decoded.
    ///
    /// # Errors
    /// [`ExprGaError::InvalidChromosome`] if the string is empty, holds a
    /// character other than `0`/`1`, or its length is not a multiple of
    /// `gene_width`.
    pub fn from_bit_str(bits: &str, gene_width: usize) -> Result<Self> {
        if gene_width == 0 || gene_width > MAX_GENE_WIDTH {
            return Err(ExprGaError::InvalidChromosome(format!(
                "gene width must be in 1..={MAX_GENE_WIDTH}, got {gene_width}"
            )));
        }
        if bits.is_empty() || bits.len() % gene_width != 0 {
            return Err(ExprGaError::InvalidChromosome(format!(
                "length {} is not a positive multiple of gene width {gene_width}",
                bits.len()
            )));
        }
        if let Some(bad) = bits.chars().find(|c| *c != '0' && *c != '1') {
            return Err(ExprGaError::InvalidChromosome(format!(
                "unexpected character {bad:?}"
            )));
        }

        let genes = bits
            .as_bytes()
            .chunks(gene_width)
            .map(|chunk| {
                Gene(
                    chunk
                        .iter()
                        .fold(0u16, |acc, &b| (acc << 1) | u16::from(b == b'1')),
                )
            })
            .collect();
        Ok(Self { genes, gene_width })
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn gene_width(&self) -> usize {
        self.gene_width
    }

    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    /// Total length in bits.
    pub fn bit_len(&self) -> usize {
        self.genes.len() * self.gene_width
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            f.write_str(&gene.to_bit_string(self.gene_width))?;
        }
        Ok(())
    }
}

/// Read-only mapping from gene patterns to symbols.
///
/// Indexed directly by bit pattern; `None` marks an illegal gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneTable {
    width: usize,
    slots: Vec<Option<Symbol>>,
}

impl GeneTable {
    /// Builds a table of `width`-bit genes.
    ///
    /// # Errors
    /// [`ExprGaError::InvalidGeneTable`] if the width is outside
    /// `1..=MAX_GENE_WIDTH`, `entries` is empty, a pattern does not fit the
    /// width, or a pattern appears twice.
    pub fn new(width: usize, entries: &[(u16, Symbol)]) -> Result<Self> {
        if width == 0 || width > MAX_GENE_WIDTH {
            return Err(ExprGaError::InvalidGeneTable(format!(
                "width must be in 1..={MAX_GENE_WIDTH}, got {width}"
            )));
        }
        if entries.is_empty() {
            return Err(ExprGaError::InvalidGeneTable(
                "table must contain at least one gene".into(),
            ));
        }

        let mut slots = vec![None; 1usize << width];
        for &(bits, symbol) in entries {
            let slot = slots.get_mut(usize::from(bits)).ok_or_else(|| {
                ExprGaError::InvalidGeneTable(format!(
                    "pattern {bits:#b} does not fit in {width} bits"
                ))
            })?;
            if slot.is_some() {
                return Err(ExprGaError::InvalidGeneTable(format!(
                    "pattern {} listed twice",
                    Gene(bits).to_bit_string(width)
                )));
            }
            *slot = Some(symbol);
        }

        Ok(Self { width, slots })
    }

    /// The 4-bit digit/operator table.
    ///
    /// `1011` and `1101` both decode to `-`, nothing decodes to `/`, and
    /// `1110`/`1111` are illegal.
    pub fn arithmetic() -> Self {
        use Operator::*;
        use Symbol::*;

        let mut slots = vec![None; 16];
        for d in 0..10u8 {
            slots[usize::from(d)] = Some(Digit(d));
        }
        slots[0b1010] = Some(Op(Add));
        slots[0b1011] = Some(Op(Sub));
        slots[0b1100] = Some(Op(Mul));
        slots[0b1101] = Some(Op(Sub));

        Self { width: 4, slots }
    }

    /// Gene width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_legal(&self, gene: Gene) -> bool {
        matches!(self.slots.get(usize::from(gene.0)), Some(Some(_)))
    }

    /// All legal genes in ascending pattern order.
    pub fn legal_genes(&self) -> impl Iterator<Item = Gene> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(bits, _)| Gene(bits as u16))
    }

    /// Looks up one gene.
    ///
    /// # Errors
    /// [`ExprGaError::UnknownGene`] (with position 0) when the pattern is
    /// not in the table.
    pub fn decode(&self, gene: Gene) -> Result<Symbol> {
        self.decode_at(gene, 0)
    }

    fn decode_at(&self, gene: Gene, position: usize) -> Result<Symbol> {
        self.slots
            .get(usize::from(gene.0))
            .copied()
            .flatten()
            .ok_or_else(|| ExprGaError::UnknownGene {
                gene: gene.to_bit_string(self.width),
                position,
            })
    }

    /// Decodes every gene of `chromosome` in order.
    ///
    /// # Errors
    /// [`ExprGaError::UnknownGene`] for the first illegal gene, or
    /// [`ExprGaError::InvalidChromosome`] if the chromosome's gene width
    /// differs from the table's.
    pub fn decode_chromosome(&self, chromosome: &Chromosome) -> Result<Vec<Symbol>> {
        if chromosome.gene_width() != self.width {
            return Err(ExprGaError::InvalidChromosome(format!(
                "gene width {} does not match table width {}",
                chromosome.gene_width(),
                self.width
            )));
        }
        chromosome
            .genes()
            .iter()
            .enumerate()
            .map(|(position, &gene)| self.decode_at(gene, position))
            .collect()
    }

    /// Draws a uniformly random pattern of the table's width, redrawing
    /// until it is legal.
    pub fn random_legal_gene<R: Rng>(&self, rng: &mut R) -> Gene {
        let span = 1u32 << self.width;
        loop {
            let gene = Gene(rng.random_range(0..span) as u16);
            if self.is_legal(gene) {
                return gene;
            }
        }
    }

    /// Concatenates `gene_count` random legal genes.
    pub fn build_chromosome<R: Rng>(&self, gene_count: usize, rng: &mut R) -> Chromosome {
        let genes = (0..gene_count).map(|_| self.random_legal_gene(rng)).collect();
        Chromosome::new(genes, self.width)
    }
}

impl Default for GeneTable {
    fn default() -> Self {
        Self::arithmetic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_arithmetic_table_mapping() {
        let table = GeneTable::arithmetic();
        let decoded: String = (0..14u16)
            .map(|b| table.decode(Gene::new(b)).unwrap().as_char())
            .collect();
        assert_eq!(decoded, "0123456789+-*-");
        assert_eq!(table.legal_genes().count(), 14);
    }

    #[test]
    fn test_no_pattern_decodes_to_division() {
        let table = GeneTable::arithmetic();
        assert!(table
            .legal_genes()
            .all(|g| table.decode(g).unwrap() != Symbol::Op(Operator::Div)));
    }

    #[test]
    fn test_decode_is_stable() {
        let table = GeneTable::arithmetic();
        for gene in table.legal_genes() {
            assert_eq!(table.decode(gene).unwrap(), table.decode(gene).unwrap());
        }
    }

    #[test]
    fn test_reserved_patterns_are_unknown() {
        let table = GeneTable::arithmetic();
        for bits in [0b1110, 0b1111] {
            let err = table.decode(Gene::new(bits)).unwrap_err();
            assert!(matches!(err, ExprGaError::UnknownGene { .. }));
        }
        assert_eq!(
            table.decode(Gene::new(0b1111)),
            Err(ExprGaError::UnknownGene {
                gene: "1111".into(),
                position: 0
            })
        );
    }

    #[test]
    fn test_random_legal_gene_skips_reserved_patterns() {
        let table = GeneTable::arithmetic();
        let mut rng = create_rng(42);
        let mut seen = [0u32; 16];
        for _ in 0..20_000 {
            let gene = table.random_legal_gene(&mut rng);
            assert!(gene.bits() != 0b1110 && gene.bits() != 0b1111);
            seen[usize::from(gene.bits())] += 1;
        }
        // Every legal pattern should show up with a fair draw.
        for (bits, &count) in seen.iter().enumerate().take(14) {
            assert!(count > 1000, "pattern {bits:04b} drawn only {count} times");
        }
    }

    #[test]
    fn test_build_chromosome_length() {
        let table = GeneTable::arithmetic();
        let mut rng = create_rng(1);
        let chromo = table.build_chromosome(7, &mut rng);
        assert_eq!(chromo.gene_count(), 7);
        assert_eq!(chromo.bit_len(), 28);
        assert_eq!(chromo.to_string().len(), 28);
        assert!(table.decode_chromosome(&chromo).is_ok());
    }

    #[test]
    fn test_bit_string_round_trip() {
        let chromo = Chromosome::from_bit_str("0010101000111011", 4).unwrap();
        assert_eq!(chromo.gene_count(), 4);
        assert_eq!(chromo.to_string(), "0010101000111011");

        let symbols = GeneTable::arithmetic().decode_chromosome(&chromo).unwrap();
        assert_eq!(render_symbols(&symbols), "2+3-");
    }

    #[test]
    fn test_built_chromosome_round_trips_through_bits() {
        let table = GeneTable::arithmetic();
        let mut rng = create_rng(8);
        for _ in 0..100 {
            let chromo = table.build_chromosome(9, &mut rng);
            let text = chromo.to_string();
            assert_eq!(text.len(), chromo.bit_len());
            assert_eq!(Chromosome::from_bit_str(&text, 4).unwrap(), chromo);
        }
    }

    #[test]
    fn test_from_bit_str_rejects_bad_input() {
        assert!(Chromosome::from_bit_str("", 4).is_err());
        assert!(Chromosome::from_bit_str("00101", 4).is_err());
        assert!(Chromosome::from_bit_str("0020", 4).is_err());
        assert!(Chromosome::from_bit_str("0010", 0).is_err());
    }

    #[test]
    fn test_decode_chromosome_reports_position() {
        let chromo = Chromosome::from_bit_str("000100101110", 4).unwrap();
        let err = GeneTable::arithmetic().decode_chromosome(&chromo).unwrap_err();
        assert_eq!(
            err,
            ExprGaError::UnknownGene {
                gene: "1110".into(),
                position: 2
            }
        );
    }

    #[test]
    fn test_decode_chromosome_width_mismatch() {
        let chromo = Chromosome::from_bit_str("010101", 3).unwrap();
        let err = GeneTable::arithmetic().decode_chromosome(&chromo).unwrap_err();
        assert!(matches!(err, ExprGaError::InvalidChromosome(_)));
    }

    #[test]
    fn test_custom_table() {
        let table = GeneTable::new(
            2,
            &[
                (0b00, Symbol::Digit(1)),
                (0b01, Symbol::Op(Operator::Add)),
                (0b10, Symbol::Digit(2)),
            ],
        )
        .unwrap();
        assert_eq!(table.width(), 2);
        assert!(!table.is_legal(Gene::new(0b11)));

        let mut rng = create_rng(3);
        for _ in 0..500 {
            assert_ne!(table.random_legal_gene(&mut rng).bits(), 0b11);
        }
    }

    #[test]
    fn test_custom_table_errors() {
        assert!(GeneTable::new(0, &[(0, Symbol::Digit(0))]).is_err());
        assert!(GeneTable::new(17, &[(0, Symbol::Digit(0))]).is_err());
        assert!(GeneTable::new(4, &[]).is_err());
        assert!(GeneTable::new(2, &[(0b100, Symbol::Digit(0))]).is_err());
        assert!(GeneTable::new(2, &[(1, Symbol::Digit(0)), (1, Symbol::Digit(1))]).is_err());
    }

    #[test]
    fn test_symbol_from_char() {
        assert_eq!(Symbol::from_char('7'), Some(Symbol::Digit(7)));
        assert_eq!(Symbol::from_char('/'), Some(Symbol::Op(Operator::Div)));
        assert_eq!(Symbol::from_char('x'), None);
        assert_eq!(Symbol::Op(Operator::Mul).to_string(), "*");
    }

    proptest! {
        #[test]
        fn prop_built_chromosomes_always_decode(seed in any::<u64>(), genes in 1usize..40) {
            let table = GeneTable::arithmetic();
            let mut rng = create_rng(seed);
            let chromo = table.build_chromosome(genes, &mut rng);
            let symbols = table.decode_chromosome(&chromo).unwrap();
            prop_assert_eq!(symbols.len(), genes);
        }

        #[test]
        fn prop_bit_string_parse_matches_display(bits in "[01]{4,64}") {
            let usable = bits.len() - bits.len() % 4;
            let chromo = Chromosome::from_bit_str(&bits[..usable], 4).unwrap();
            prop_assert_eq!(chromo.to_string(), &bits[..usable]);
        }
    }
}
