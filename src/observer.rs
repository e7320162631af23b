//! Per-generation reporting
//!
//! This module defines the seam between the optimizer and whatever consumes
//! its progress, such as a console printer or a replay recorder. The core
//! pushes one report per generation and never depends on what the observer
//! does with it.

use serde::Serialize;

use crate::catalog::{Gene, Item};

/// Snapshot of the fittest candidate of one generation
#[derive(Clone, Debug, Serialize)]
pub struct FittestSnapshot {
    /// The full gene sequence, fillers included
    pub sequence: Vec<Gene>,
    /// Blended fitness score
    pub score: f64,
    /// Total size of the distinct items in the sequence
    pub filled_size: u64,
}

/// What an observer receives after each generation
#[derive(Clone, Debug, Serialize)]
pub struct GenerationReport {
    /// Zero-based generation index
    pub generation: usize,
    /// Distinct items of the fittest candidate, filler excluded
    pub distinct_items: Vec<Item>,
    /// Snapshot of the fittest candidate
    pub fittest: FittestSnapshot,
}

/// Error type observers may return
///
/// A failing observer is logged and skipped; it never aborts the
/// optimization loop (see [`Optimizer::run_with_observer`]).
///
/// [`Optimizer::run_with_observer`]: crate::optimizer::Optimizer::run_with_observer
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

/// Receives per-generation reports during an optimization run
///
/// Called synchronously, once per generation, before the next generation
/// begins.
pub trait Observer {
    /// Handle one generation's report
    fn on_generation(&mut self, report: &GenerationReport) -> Result<(), ObserverError>;
}

/// An observer that discards every report
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn on_generation(&mut self, _report: &GenerationReport) -> Result<(), ObserverError> {
        Ok(())
    }
}

/// Adapter turning a closure into an observer
pub struct FnObserver<F> {
    f: F,
}

impl<F> FnObserver<F>
where
    F: FnMut(&GenerationReport),
{
    /// Wrap a closure
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Observer for FnObserver<F>
where
    F: FnMut(&GenerationReport),
{
    fn on_generation(&mut self, report: &GenerationReport) -> Result<(), ObserverError> {
        (self.f)(report);
        Ok(())
    }
}
