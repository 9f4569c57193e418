//! Fitness-proportionate (roulette wheel) selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Roulette wheel selection on raw (non-negative, maximized) fitness.
///
/// Draws `r` uniformly from `(0, 1]`, sets `target = r × total`, then walks
/// the population in order subtracting each fitness and returns the first
/// index where `target <= 0`. If rounding leaves `target` positive after
/// the last individual, the last index is returned, so the call always
/// terminates with a valid index, including when every fitness is zero.
///
/// # Complexity
/// O(n) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let total: f64 = population.iter().map(|ind| ind.fitness()).sum();

    // 1 - [0, 1) gives (0, 1]
    let ratio = 1.0 - rng.random::<f64>();
    let mut remaining = ratio * total;

    for (i, ind) in population.iter().enumerate() {
        remaining -= ind.fitness();
        if remaining <= 0.0 {
            return i;
        }
    }

    population.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_roulette_favors_fittest() {
        let pop = make_population(&[1.0, 5.0, 0.5, 2.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[roulette(&pop, &mut rng)] += 1;
        }
        // Index 1 owns 5/8.5 of the wheel
        assert!(
            counts[1] > 5000,
            "expected fittest to be selected most, got {counts:?}"
        );
        assert!(counts[1] > counts[3] && counts[3] > counts[0] && counts[0] > counts[2]);
    }

    #[test]
    fn test_roulette_proportions() {
        let pop = make_population(&[1.0, 3.0]);
        let mut rng = create_rng(7);

        let n = 20000;
        let hits = (0..n).filter(|_| roulette(&pop, &mut rng) == 1).count();
        let share = hits as f64 / n as f64;
        assert!((share - 0.75).abs() < 0.02, "share was {share}");
    }

    #[test]
    fn test_zero_fitness_never_selected_when_others_positive() {
        let pop = make_population(&[0.0, 0.0, 1.0, 0.0]);
        let mut rng = create_rng(3);
        for _ in 0..1000 {
            assert_eq!(roulette(&pop, &mut rng), 2);
        }
    }

    #[test]
    fn test_all_zero_fitness_still_selects() {
        let pop = make_population(&[0.0, 0.0, 0.0]);
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert!(roulette(&pop, &mut rng) < pop.len());
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(roulette(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        roulette(&pop, &mut rng);
    }
}
