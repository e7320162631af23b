//! Population container
//!
//! This module provides the Population type: one generation's worth of
//! candidates, with evaluation and ranking. A generational transition never
//! mutates a population in place; the optimizer builds a fresh one and
//! replaces the old wholesale.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::candidate::Candidate;
use crate::catalog::Catalog;
use crate::objective::Objective;

/// A population of candidates
#[derive(Clone, Debug, Default)]
pub struct Population {
    candidates: Vec<Candidate>,
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from a vector of candidates
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            generation: 0,
        }
    }

    /// Create `size` random candidates of `sequence_length` genes each
    pub fn random<R: Rng>(
        size: usize,
        sequence_length: usize,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Self {
        let candidates = (0..size)
            .map(|_| Candidate::random(sequence_length, catalog, rng))
            .collect();
        Self {
            candidates,
            generation: 0,
        }
    }

    /// Get the current generation number
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get a candidate by index
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Add a candidate
    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Iterate over the candidates
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// The candidates as a slice
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Take the candidates out of this population
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }

    /// Check if every candidate carries a valid evaluation
    pub fn all_evaluated(&self) -> bool {
        self.candidates.iter().all(|c| c.is_evaluated())
    }

    /// Evaluate every candidate that lacks a valid evaluation (sequential)
    ///
    /// Candidates carried forward unchanged keep their cached evaluation;
    /// re-evaluating them would produce the same result.
    pub fn evaluate<O: Objective>(&mut self, objective: &O, catalog: &Catalog) {
        for candidate in &mut self.candidates {
            if !candidate.is_evaluated() {
                let evaluation = objective.evaluate(candidate.genes(), catalog);
                candidate.set_evaluation(evaluation);
            }
        }
    }

    /// Sort candidates by score, best first
    ///
    /// Stable: equal scores keep their relative order. Unevaluated candidates
    /// sink to the end.
    pub fn sort_by_score(&mut self) {
        self.candidates.sort_by(|a, b| {
            b.score_or_neg_infinity()
                .partial_cmp(&a.score_or_neg_infinity())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Get the best evaluated candidate
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates
            .iter()
            .filter(|c| c.is_evaluated())
            .max_by(|a, b| {
                a.score_or_neg_infinity()
                    .partial_cmp(&b.score_or_neg_infinity())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Parallel evaluation support (requires the `parallel` feature)
#[cfg(feature = "parallel")]
impl Population {
    /// Evaluate every candidate that lacks a valid evaluation (parallel)
    ///
    /// Evaluation draws no randomness, so the result is identical to the
    /// sequential path.
    pub fn evaluate_parallel<O: Objective + Sync>(&mut self, objective: &O, catalog: &Catalog) {
        self.candidates
            .par_iter_mut()
            .filter(|c| !c.is_evaluated())
            .for_each(|candidate| {
                let evaluation = objective.evaluate(candidate.genes(), catalog);
                candidate.set_evaluation(evaluation);
            });
    }
}

/// Sequential fallback (when the `parallel` feature is disabled)
#[cfg(not(feature = "parallel"))]
impl Population {
    /// Evaluate every candidate that lacks a valid evaluation
    pub fn evaluate_parallel<O: Objective>(&mut self, objective: &O, catalog: &Catalog) {
        self.evaluate(objective, catalog);
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.candidates[index]
    }
}

impl IntoIterator for Population {
    type Item = Candidate;
    type IntoIter = std::vec::IntoIter<Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl FromIterator<Candidate> for Population {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self::from_candidates(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::candidate::Evaluation;
    use crate::catalog::Gene;
    use crate::objective::CapacityObjective;

    fn catalog() -> Catalog {
        Catalog::from_sizes(&[100, 200, 400]).unwrap()
    }

    fn candidate_with_score(score: f64) -> Candidate {
        let mut candidate = Candidate::new(vec![Gene::Item(0)]);
        candidate.set_evaluation(Evaluation {
            score,
            filled_size: score as u64,
            distinct_count: 1,
        });
        candidate
    }

    #[test]
    fn test_population_random() {
        let mut rng = StdRng::seed_from_u64(11);
        let pop = Population::random(10, 4, &catalog(), &mut rng);

        assert_eq!(pop.len(), 10);
        assert!(pop.iter().all(|c| c.len() == 4));
        assert!(!pop.all_evaluated());
    }

    #[test]
    fn test_population_evaluate() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut pop = Population::random(10, 4, &catalog(), &mut rng);
        pop.evaluate(&CapacityObjective::new(500), &catalog());

        assert!(pop.all_evaluated());
    }

    #[test]
    fn test_population_evaluate_skips_cached() {
        let mut pop = Population::from_candidates(vec![candidate_with_score(999.0)]);
        pop.evaluate(&CapacityObjective::new(500), &catalog());

        // The cached evaluation is kept, not recomputed
        assert_eq!(pop[0].evaluation().unwrap().score, 999.0);
    }

    #[test]
    fn test_population_evaluate_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(11);
        let objective = CapacityObjective::new(500);
        let seed = Population::random(32, 6, &catalog(), &mut rng);

        let mut sequential = seed.clone();
        sequential.evaluate(&objective, &catalog());
        let mut parallel = seed;
        parallel.evaluate_parallel(&objective, &catalog());

        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.evaluation(), b.evaluation());
        }
    }

    #[test]
    fn test_population_sort_by_score() {
        let mut pop = Population::from_candidates(vec![
            candidate_with_score(10.0),
            candidate_with_score(50.0),
            candidate_with_score(30.0),
        ]);
        pop.sort_by_score();

        let scores: Vec<f64> = pop
            .iter()
            .map(|c| c.evaluation().unwrap().score)
            .collect();
        assert_eq!(scores, vec![50.0, 30.0, 10.0]);
    }

    #[test]
    fn test_population_sort_unevaluated_last() {
        let mut pop = Population::from_candidates(vec![
            Candidate::new(vec![Gene::Filler]),
            candidate_with_score(10.0),
        ]);
        pop.sort_by_score();

        assert!(pop[0].is_evaluated());
        assert!(!pop[1].is_evaluated());
    }

    #[test]
    fn test_population_best() {
        let pop = Population::from_candidates(vec![
            candidate_with_score(10.0),
            candidate_with_score(50.0),
            candidate_with_score(30.0),
        ]);
        assert_eq!(pop.best().unwrap().evaluation().unwrap().score, 50.0);
    }

    #[test]
    fn test_population_best_empty() {
        let pop = Population::new();
        assert!(pop.best().is_none());
    }

    #[test]
    fn test_population_generation_counter() {
        let mut pop = Population::new();
        assert_eq!(pop.generation(), 0);
        pop.set_generation(17);
        assert_eq!(pop.generation(), 17);
    }

    #[test]
    fn test_population_from_iterator() {
        let pop: Population = (0..3).map(|_| Candidate::new(vec![Gene::Filler])).collect();
        assert_eq!(pop.len(), 3);
    }
}
