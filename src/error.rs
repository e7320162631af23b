//! Error types for pack-evo
//!
//! Everything that can go wrong is rejected up front, at catalog or optimizer
//! construction; a run that has started cannot fail.

use thiserror::Error;

use crate::catalog::ItemId;

/// Error type for catalog construction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The catalog holds no items besides the filler sentinel
    #[error("catalog has no items")]
    Empty,

    /// Two items share an identity
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// Error type for optimizer configuration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Candidate sequences must hold at least one gene
    #[error("max sequence length must be at least 1")]
    ZeroSequenceLength,

    /// Fewer than two candidates cannot form a parent pair
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Mutation probability outside [0, 1]
    #[error("mutation rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    /// Elite fraction outside (0, 1]
    #[error("elite fraction must be within (0, 1], got {0}")]
    EliteFractionOutOfRange(f64),

    /// The configured elite fraction yields a parent pool that cannot supply
    /// two distinct parents
    #[error(
        "parent pool of {pool} cannot supply two distinct parents \
         (population {population}, elite fraction {elite_fraction})"
    )]
    ParentPoolTooSmall {
        pool: usize,
        population: usize,
        elite_fraction: f64,
    },

    /// Catalog construction failed
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(CatalogError::Empty.to_string(), "catalog has no items");
        assert_eq!(
            CatalogError::DuplicateId(ItemId(7)).to_string(),
            "duplicate item id: item#7"
        );
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::PopulationTooSmall(1).to_string(),
            "population size must be at least 2, got 1"
        );
        assert_eq!(
            ConfigError::MutationRateOutOfRange(1.5).to_string(),
            "mutation rate must be within [0, 1], got 1.5"
        );
        let err = ConfigError::ParentPoolTooSmall {
            pool: 1,
            population: 3,
            elite_fraction: 0.1,
        };
        assert_eq!(
            err.to_string(),
            "parent pool of 1 cannot supply two distinct parents \
             (population 3, elite fraction 0.1)"
        );
    }

    #[test]
    fn test_config_error_from_catalog_error() {
        let err: ConfigError = CatalogError::Empty.into();
        assert!(matches!(err, ConfigError::Catalog(CatalogError::Empty)));
    }
}
