//! Operator traits
//!
//! This module defines the operator seams of the generational loop.

use rand::Rng;

use crate::candidate::Candidate;
use crate::catalog::Catalog;

/// Crossover operator trait
///
/// Combines two parent sequences into one child candidate. The child carries
/// no evaluation; the caller re-evaluates before relying on its score.
pub trait CrossoverOperator {
    /// Produce a child from two parents
    fn crossover<R: Rng>(&self, father: &Candidate, mother: &Candidate, rng: &mut R)
        -> Candidate;
}

/// Mutation operator trait
///
/// Applies random changes to a candidate in place.
pub trait MutationOperator {
    /// Mutate a candidate
    fn mutate<R: Rng>(&self, candidate: &mut Candidate, catalog: &Catalog, rng: &mut R);

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64 {
        1.0
    }
}

/// Parent selection trait
///
/// Sizes the parent pool from a ranked population and picks parent pairs
/// out of it by pool position.
pub trait SelectionOperator {
    /// Number of top-ranked candidates that form the parent pool
    fn pool_size(&self, population_size: usize) -> usize;

    /// Pick a father/mother pair of pool positions
    fn select_pair<R: Rng>(&self, pool_len: usize, rng: &mut R) -> (usize, usize);
}
