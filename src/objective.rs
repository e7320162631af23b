//! Fitness objectives
//!
//! This module defines the scoring of candidate packings: capacity
//! utilization with a soft overflow penalty, blended with a bonus for each
//! distinct item packed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::candidate::Evaluation;
use crate::catalog::{Catalog, Gene};

/// Scores a gene sequence against a catalog (higher is better)
pub trait Objective {
    /// Evaluate one sequence
    fn evaluate(&self, genes: &[Gene], catalog: &Catalog) -> Evaluation;
}

/// The container-filling objective
///
/// Each distinct item id contributes its size exactly once: a sequence
/// cannot store the same file twice, so repeats add nothing. A sequence that
/// fits scores its filled size; a sequence that overflows scores
/// `capacity / filled_size`, which is strictly below 1 and ranks smaller
/// overflows higher. The number of distinct items packed is added on top as
/// a secondary objective.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapacityObjective {
    /// Container capacity in size units
    pub capacity: u64,
}

impl CapacityObjective {
    /// Create an objective for the given capacity
    pub fn new(capacity: u64) -> Self {
        Self { capacity }
    }

    /// The utilization term alone, before the distinct-item bonus
    ///
    /// `filled_size == 0` fits any capacity, including zero, so the overflow
    /// ratio never divides by zero.
    pub fn utilization(&self, filled_size: u64) -> f64 {
        if filled_size > self.capacity {
            self.capacity as f64 / filled_size as f64
        } else {
            filled_size as f64
        }
    }
}

impl Objective for CapacityObjective {
    fn evaluate(&self, genes: &[Gene], catalog: &Catalog) -> Evaluation {
        let mut seen: HashSet<u32> = HashSet::with_capacity(genes.len());
        let mut filled_size: u64 = 0;
        for gene in genes {
            if let Gene::Item(index) = *gene {
                if seen.insert(index) {
                    filled_size += catalog.size_of(*gene);
                }
            }
        }
        let distinct_count = seen.len();
        Evaluation {
            score: self.utilization(filled_size) + distinct_count as f64,
            filled_size,
            distinct_count,
        }
    }
}
