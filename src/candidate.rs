//! Candidate solutions
//!
//! This module provides the Candidate type: one fixed-length gene sequence
//! together with the cached outcome of its last evaluation.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Gene, Item};

/// Outcome of evaluating one candidate against the container capacity
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Blended fitness: capacity utilization plus the distinct-item bonus
    pub score: f64,
    /// Total size of the distinct items referenced by the sequence
    pub filled_size: u64,
    /// Number of distinct non-filler items in the sequence
    pub distinct_count: usize,
}

/// A fixed-length candidate packing
///
/// The sequence length never changes after construction. Any structural
/// change drops the cached evaluation, so a stale score can never be read.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Candidate {
    genes: Vec<Gene>,
    evaluation: Option<Evaluation>,
}

impl Candidate {
    /// Create an unevaluated candidate from a gene sequence
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            evaluation: None,
        }
    }

    /// Create a candidate by sampling `length` genes uniformly from the catalog
    pub fn random<R: Rng>(length: usize, catalog: &Catalog, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| catalog.sample(rng)).collect();
        Self::new(genes)
    }

    /// The gene sequence
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Sequence length
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Replace the gene at `index`, dropping any cached evaluation
    pub fn set_gene(&mut self, index: usize, gene: Gene) {
        self.genes[index] = gene;
        self.evaluation = None;
    }

    /// Check if this candidate carries a valid evaluation
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }

    /// The cached evaluation, if any
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Store an evaluation
    pub fn set_evaluation(&mut self, evaluation: Evaluation) {
        self.evaluation = Some(evaluation);
    }

    /// The cached score as f64; unevaluated candidates rank below everything
    pub fn score_or_neg_infinity(&self) -> f64 {
        self.evaluation
            .map_or(f64::NEG_INFINITY, |evaluation| evaluation.score)
    }

    /// Check if this candidate scores higher than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (&self.evaluation, &other.evaluation) {
            (Some(a), Some(b)) => a.score > b.score,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// The distinct items referenced by the sequence, in first-occurrence
    /// order
    ///
    /// Each identity appears once however often the sequence repeats it, and
    /// the filler never appears.
    pub fn distinct_items(&self, catalog: &Catalog) -> Vec<Item> {
        let mut seen: HashSet<u32> = HashSet::with_capacity(self.genes.len());
        let mut items = Vec::new();
        for gene in &self.genes {
            if let Gene::Item(index) = *gene {
                if seen.insert(index) {
                    if let Some(item) = catalog.get(index) {
                        items.push(item.clone());
                    }
                }
            }
        }
        items
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes && self.evaluation == other.evaluation
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.score_or_neg_infinity()
            .partial_cmp(&other.score_or_neg_infinity())
    }
}
