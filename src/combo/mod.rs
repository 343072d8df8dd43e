//! Cross-category combo pairs and their deterministic ranking.
//!
//! Every unordered pair of items from different categories is enumerated once
//! per catalog snapshot and sorted by `(total, first id, second id)`. Within a
//! pair, `first` is the item that sorts lower by `(price, id)`.
//!
//! Enumeration is all-pairs-then-filter, O(n²) in time and memory. That is fine
//! for menus in the tens to low hundreds of items; larger catalogs would want
//! to cross-join per category bucket instead.

mod selection;

pub use selection::{DiverseSelection, SelectedCombo};

use crate::catalog::{Catalog, MenuItem};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ComboError {
    #[error("Unable to build combos from the current menu.")]
    NoCombosAvailable,

    #[error("Unable to assemble diverse combos with the current items.")]
    NoDiverseSelectionPossible,
}

/// Two items from different categories with their combined price
#[derive(Debug, Clone, PartialEq)]
pub struct ComboPair {
    pub first: MenuItem,
    pub second: MenuItem,
    pub total: f64,
}

impl ComboPair {
    pub fn item_ids(&self) -> (i64, i64) {
        (self.first.id(), self.second.id())
    }

    /// Ranking order: cheapest total first, then ids
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.total.total_cmp(&other.total)
            .then_with(|| self.first.id().cmp(&other.first.id()))
            .then_with(|| self.second.id().cmp(&other.second.id()))
    }
}

/// All valid combo pairs of a catalog in ranking order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedComboList {
    pairs: Vec<ComboPair>,
}

impl RankedComboList {
    pub fn build(catalog: &Catalog) -> Self {
        let mut items: Vec<&MenuItem> = catalog.items().iter().collect();
        items.sort_by(|a, b| a.price().total_cmp(&b.price()).then_with(|| a.id().cmp(&b.id())));

        let mut pairs = Vec::new();
        for (a, first) in items.iter().enumerate() {
            for second in &items[a + 1..] {
                if first.category() == second.category() {
                    continue;
                }
                pairs.push(ComboPair {
                    first: (*first).clone(),
                    second: (*second).clone(),
                    total: first.price() + second.price(),
                });
            }
        }

        pairs.sort_by(ComboPair::rank_cmp);

        Self { pairs }
    }

    pub fn pairs(&self) -> &[ComboPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
