//! Selection operators
//!
//! This module provides parent selection for the generational loop.

use rand::Rng;

use crate::operators::traits::SelectionOperator;

/// Truncation selection with elitism
///
/// The top `ceil(elite_fraction * population_size)` ranked candidates form
/// the parent pool, and the same pool is carried unchanged into the next
/// generation. Parent pairs are drawn uniformly from the pool at distinct
/// positions; equal content at different positions is still a valid pair.
#[derive(Clone, Copy, Debug)]
pub struct TruncationSelection {
    /// Fraction of the population retained as parents and elites (0, 1]
    pub elite_fraction: f64,
}

impl TruncationSelection {
    /// Create a new truncation selection
    pub fn new(elite_fraction: f64) -> Self {
        assert!(
            elite_fraction > 0.0 && elite_fraction <= 1.0,
            "Elite fraction must be in (0, 1]"
        );
        Self { elite_fraction }
    }
}

impl SelectionOperator for TruncationSelection {
    fn pool_size(&self, population_size: usize) -> usize {
        let pool = (self.elite_fraction * population_size as f64).ceil() as usize;
        pool.min(population_size)
    }

    /// Two distinct pool positions; a pool of one pairs a parent with itself
    fn select_pair<R: Rng>(&self, pool_len: usize, rng: &mut R) -> (usize, usize) {
        assert!(pool_len > 0, "Parent pool cannot be empty");
        let father = rng.gen_range(0..pool_len);
        if pool_len == 1 {
            return (father, father);
        }
        let mut mother = rng.gen_range(0..pool_len);
        while mother == father {
            mother = rng.gen_range(0..pool_len);
        }
        (father, mother)
    }
}
