//! Crossover operators
//!
//! This module provides crossover for fixed-length gene sequences.

use rand::Rng;

use crate::candidate::Candidate;
use crate::operators::traits::CrossoverOperator;

/// Single-point crossover at the sequence midpoint
///
/// The child takes the first `floor(N/2)` genes from the father and the
/// remaining genes from the mother. Deterministic; the randomness of
/// reproduction lives entirely in parent selection and mutation.
#[derive(Clone, Copy, Debug, Default)]
pub struct MidpointCrossover;

impl MidpointCrossover {
    /// Create a new midpoint crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for MidpointCrossover {
    fn crossover<R: Rng>(
        &self,
        father: &Candidate,
        mother: &Candidate,
        _rng: &mut R,
    ) -> Candidate {
        let middle = father.len() / 2;
        let genes = father.genes()[..middle]
            .iter()
            .chain(mother.genes()[middle..].iter())
            .copied()
            .collect();
        Candidate::new(genes)
    }
}
