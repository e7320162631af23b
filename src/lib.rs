//! # pack-evo
//!
//! A genetic-algorithm library for filling a fixed-capacity container with
//! sized items.
//!
//! Given a catalog of items and a capacity, the optimizer evolves fixed-length
//! candidate sequences (item references with repetition, padded by a
//! zero-size filler) toward a selection that fills the container as
//! completely as possible without overflowing it. The classic use case:
//! picking at most N files to fill a storage device.
//!
//! ## Core Concepts
//!
//! - **Distinct counting**: a sequence may repeat an item, but each identity
//!   contributes its size once; you cannot store the same file twice
//! - **Soft overflow penalty**: overflowing candidates stay comparable among
//!   themselves but never outrank a valid fit on the utilization term
//! - **Elitism**: the top fraction of every generation survives unchanged, so
//!   the per-generation fittest never regresses
//! - **Explicit randomness**: every sampling, selection, and mutation step
//!   draws from a caller-supplied `rand::Rng`, so a seeded run replays
//!   exactly
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pack_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let items = vec![
//!     Item::new(0, 100),
//!     Item::new(1, 200),
//!     Item::new(2, 400),
//! ];
//! let optimizer = Optimizer::new(500, items, 3)?;
//! let packed = optimizer.run(&mut rng);
//! ```

pub mod candidate;
pub mod catalog;
pub mod error;
pub mod objective;
pub mod observer;
pub mod operators;
pub mod optimizer;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::candidate::{Candidate, Evaluation};
    pub use crate::catalog::{Catalog, Gene, Item, ItemId};
    pub use crate::error::{CatalogError, ConfigError};
    pub use crate::objective::{CapacityObjective, Objective};
    pub use crate::observer::{
        FittestSnapshot, FnObserver, GenerationReport, NoopObserver, Observer, ObserverError,
    };
    pub use crate::operators::prelude::*;
    pub use crate::optimizer::{Optimizer, OptimizerConfig};
    pub use crate::population::Population;
}
