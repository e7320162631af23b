//! Item catalog
//!
//! This module provides the immutable set of sized items the optimizer draws
//! from, together with the zero-size filler sentinel used to pad candidate
//! sequences.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Opaque identity of a catalog item
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A sized, uniquely identified unit available for packing
///
/// Items are immutable once the catalog is built; candidates refer to them by
/// catalog index and never own or modify them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identity, unique within a catalog
    pub id: ItemId,
    /// Size in capacity units
    pub size: u64,
}

impl Item {
    /// Create a new item
    pub fn new(id: u64, size: u64) -> Self {
        Self {
            id: ItemId(id),
            size,
        }
    }
}

/// One position of a candidate sequence: a catalog item or the filler
///
/// The filler sentinel pads sequences that pack fewer than the maximum number
/// of items. It has size zero and never appears in distinct-item reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gene {
    /// Index into the owning catalog's item list
    Item(u32),
    /// Zero-size padding
    Filler,
}

impl Gene {
    /// Check whether this gene is the filler sentinel
    pub fn is_filler(&self) -> bool {
        matches!(self, Gene::Filler)
    }
}

/// Immutable ordered collection of items
///
/// The filler occupies one extra sampling slot after the items, so every
/// catalog contains it exactly once and uniform sampling can produce it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from caller-supplied items
    ///
    /// Rejects an empty item list and duplicate ids; duplicate ids would
    /// corrupt distinctness accounting during evaluation.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Build a catalog from bare sizes, assigning sequential ids
    pub fn from_sizes(sizes: &[u64]) -> Result<Self, CatalogError> {
        Self::new(
            sizes
                .iter()
                .enumerate()
                .map(|(index, &size)| Item::new(index as u64, size))
                .collect(),
        )
    }

    /// Number of items, the filler excluded
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items
    ///
    /// Always false for a constructed catalog; construction rejects emptiness.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of sampling slots: the items plus the filler
    pub fn slot_count(&self) -> usize {
        self.items.len() + 1
    }

    /// The items in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by catalog index
    pub fn get(&self, index: u32) -> Option<&Item> {
        self.items.get(index as usize)
    }

    /// Resolve a gene to its item; the filler resolves to `None`
    pub fn item(&self, gene: Gene) -> Option<&Item> {
        match gene {
            Gene::Item(index) => self.get(index),
            Gene::Filler => None,
        }
    }

    /// Size contributed by a gene; the filler contributes zero
    pub fn size_of(&self, gene: Gene) -> u64 {
        self.item(gene).map_or(0, |item| item.size)
    }

    /// Draw one gene uniformly at random, the filler slot included
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Gene {
        let slot = rng.gen_range(0..self.slot_count());
        if slot == self.items.len() {
            Gene::Filler
        } else {
            Gene::Item(slot as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_catalog_rejects_empty() {
        assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let items = vec![Item::new(1, 100), Item::new(2, 200), Item::new(1, 300)];
        assert_eq!(
            Catalog::new(items),
            Err(CatalogError::DuplicateId(ItemId(1)))
        );
    }

    #[test]
    fn test_catalog_from_sizes() {
        let catalog = Catalog::from_sizes(&[100, 200, 400, 400]).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.slot_count(), 5);
        assert_eq!(catalog.items()[2], Item::new(2, 400));
        // Equal sizes keep distinct identities
        assert_ne!(catalog.items()[2].id, catalog.items()[3].id);
    }

    #[test]
    fn test_catalog_size_of() {
        let catalog = Catalog::from_sizes(&[100, 200]).unwrap();
        assert_eq!(catalog.size_of(Gene::Item(0)), 100);
        assert_eq!(catalog.size_of(Gene::Item(1)), 200);
        assert_eq!(catalog.size_of(Gene::Filler), 0);
    }

    #[test]
    fn test_catalog_item_resolution() {
        let catalog = Catalog::from_sizes(&[100]).unwrap();
        assert_eq!(catalog.item(Gene::Item(0)), Some(&Item::new(0, 100)));
        assert_eq!(catalog.item(Gene::Filler), None);
    }

    #[test]
    fn test_sample_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = Catalog::from_sizes(&[10, 20, 30]).unwrap();
        for _ in 0..1000 {
            match catalog.sample(&mut rng) {
                Gene::Item(index) => assert!((index as usize) < catalog.len()),
                Gene::Filler => {}
            }
        }
    }

    #[test]
    fn test_sample_produces_filler() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = Catalog::from_sizes(&[10]).unwrap();
        // Two slots, so roughly half the draws are fillers
        let fillers = (0..1000)
            .filter(|_| catalog.sample(&mut rng).is_filler())
            .count();
        assert!(fillers > 300 && fillers < 700);
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(42).to_string(), "item#42");
    }
}
