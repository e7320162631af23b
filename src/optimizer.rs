//! Optimizer driver
//!
//! This module implements the generational loop: configuration and
//! validation, one evaluate/rank/select/reproduce transition per generation,
//! and the budget-bounded run that reports each generation's fittest to an
//! observer.

use rand::Rng;
use tracing::{debug, warn};

use crate::candidate::{Candidate, Evaluation};
use crate::catalog::{Catalog, Item};
use crate::error::ConfigError;
use crate::objective::CapacityObjective;
use crate::observer::{FittestSnapshot, GenerationReport, NoopObserver, Observer};
use crate::operators::crossover::MidpointCrossover;
use crate::operators::mutation::ResampleMutation;
use crate::operators::selection::TruncationSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::Population;

/// Configuration for the optimizer
#[derive(Clone, Debug)]
pub struct OptimizerConfig {
    /// Candidates per generation (default 100)
    pub population_size: usize,
    /// Fraction of the population retained as parents and elites
    /// (default 0.3)
    pub elite_fraction: f64,
    /// Per-gene probability of random replacement during mutation
    /// (default 0.2)
    pub mutation_rate: f64,
    /// Generations to run; `None` means `50 * max_sequence_length`
    /// (default `None`)
    pub max_generations: Option<usize>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_fraction: 0.3,
            mutation_rate: 0.2,
            max_generations: None,
        }
    }
}

/// Genetic-algorithm search for a near-optimal container filling
///
/// Holds the item catalog, the capacity objective, and the configured
/// operators. A single optimizer can drive any number of independent runs;
/// each run owns its population and its source of randomness.
pub struct Optimizer {
    catalog: Catalog,
    objective: CapacityObjective,
    sequence_length: usize,
    config: OptimizerConfig,
    selection: TruncationSelection,
    crossover: MidpointCrossover,
    mutation: ResampleMutation,
}

impl Optimizer {
    /// Create an optimizer with the default configuration
    pub fn new(
        capacity: u64,
        items: Vec<Item>,
        max_sequence_length: usize,
    ) -> Result<Self, ConfigError> {
        Self::with_config(capacity, items, max_sequence_length, OptimizerConfig::default())
    }

    /// Create an optimizer with an explicit configuration
    ///
    /// Rejects a zero sequence length, an empty or duplicate-id catalog, a
    /// population below two, out-of-range rates, and any elite fraction whose
    /// parent pool could not supply two distinct parents.
    pub fn with_config(
        capacity: u64,
        items: Vec<Item>,
        max_sequence_length: usize,
        config: OptimizerConfig,
    ) -> Result<Self, ConfigError> {
        if max_sequence_length == 0 {
            return Err(ConfigError::ZeroSequenceLength);
        }
        if config.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(config.population_size));
        }
        if !(0.0..=1.0).contains(&config.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(config.mutation_rate));
        }
        if !(config.elite_fraction > 0.0 && config.elite_fraction <= 1.0) {
            return Err(ConfigError::EliteFractionOutOfRange(config.elite_fraction));
        }

        let catalog = Catalog::new(items)?;
        let selection = TruncationSelection::new(config.elite_fraction);
        let pool = selection.pool_size(config.population_size);
        if pool < 2 {
            return Err(ConfigError::ParentPoolTooSmall {
                pool,
                population: config.population_size,
                elite_fraction: config.elite_fraction,
            });
        }

        let mutation = ResampleMutation::new(config.mutation_rate);
        Ok(Self {
            catalog,
            objective: CapacityObjective::new(capacity),
            sequence_length: max_sequence_length,
            config,
            selection,
            crossover: MidpointCrossover::new(),
            mutation,
        })
    }

    /// The container capacity
    pub fn capacity(&self) -> u64 {
        self.objective.capacity
    }

    /// The working catalog (filler slot excluded from the item list)
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configured candidate sequence length
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// The active configuration
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// The generation budget: the configured value, or `50 *
    /// max_sequence_length` when none was set
    pub fn max_generations(&self) -> usize {
        self.config
            .max_generations
            .unwrap_or(50 * self.sequence_length)
    }

    /// One generational transition
    ///
    /// Evaluates and ranks the current population, carries the parent pool
    /// forward unchanged, breeds the remainder from randomly paired parents,
    /// and replaces the population wholesale. Returns the fittest of the
    /// generation just evaluated, before reproduction.
    fn step<R: Rng>(&self, population: &mut Population, rng: &mut R) -> Candidate {
        population.evaluate_parallel(&self.objective, &self.catalog);
        population.sort_by_score();
        let fittest = population[0].clone();

        let pool = self.selection.pool_size(population.len());
        let mut next = Population::with_capacity(population.len());
        for elite in population.iter().take(pool) {
            next.push(elite.clone());
        }
        while next.len() < population.len() {
            let (father, mother) = self.selection.select_pair(pool, rng);
            let mut child =
                self.crossover
                    .crossover(&population[father], &population[mother], rng);
            self.mutation.mutate(&mut child, &self.catalog, rng);
            next.push(child);
        }
        next.set_generation(population.generation() + 1);
        *population = next;

        fittest
    }

    /// Run the full generation budget and return the distinct items of the
    /// final generation's fittest candidate
    pub fn run<R: Rng>(&self, rng: &mut R) -> Vec<Item> {
        self.run_with_observer(rng, &mut NoopObserver)
    }

    /// Run the full generation budget, reporting each generation's fittest
    ///
    /// The observer is invoked synchronously after every generation, before
    /// the next one begins. An observer error is logged at WARN and the
    /// optimization continues; observer results never affect the loop. The
    /// loop always runs exactly [`max_generations`](Self::max_generations)
    /// iterations; there is no adaptive early exit. A budget of zero yields
    /// an empty result.
    pub fn run_with_observer<R: Rng, O: Observer>(
        &self,
        rng: &mut R,
        observer: &mut O,
    ) -> Vec<Item> {
        let mut population = Population::random(
            self.config.population_size,
            self.sequence_length,
            &self.catalog,
            rng,
        );

        let mut overall_fittest: Option<Candidate> = None;
        for generation in 0..self.max_generations() {
            let fittest = self.step(&mut population, rng);
            let evaluation = fittest
                .evaluation()
                .expect("fittest candidate is evaluated after ranking");
            debug!(
                generation,
                score = evaluation.score,
                filled_size = evaluation.filled_size,
                distinct = evaluation.distinct_count,
                "generation complete"
            );

            let report = self.report(generation, &fittest, evaluation);
            if let Err(error) = observer.on_generation(&report) {
                warn!(generation, error = %error, "observer failed; continuing");
            }
            overall_fittest = Some(fittest);
        }

        overall_fittest
            .map(|fittest| fittest.distinct_items(&self.catalog))
            .unwrap_or_default()
    }

    fn report(
        &self,
        generation: usize,
        fittest: &Candidate,
        evaluation: Evaluation,
    ) -> GenerationReport {
        GenerationReport {
            generation,
            distinct_items: fittest.distinct_items(&self.catalog),
            fittest: FittestSnapshot {
                sequence: fittest.genes().to_vec(),
                score: evaluation.score,
                filled_size: evaluation.filled_size,
            },
        }
    }
}
