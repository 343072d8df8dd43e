use super::{ComboError, ComboPair, RankedComboList};
use serde::Serialize;
use std::collections::HashSet;

/// A combo as reported to callers, total rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedCombo {
    pub items: (i64, i64),
    pub categories: (String, String),
    pub total: f64,
}

impl From<&ComboPair> for SelectedCombo {
    fn from(pair: &ComboPair) -> Self {
        Self {
            items: pair.item_ids(),
            categories: (
                pair.first.category().to_string(),
                pair.second.category().to_string(),
            ),
            total: round_cents(pair.total),
        }
    }
}

/// Non-overlapping combos picked greedily from a ranked list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiverseSelection {
    pub combos: Vec<SelectedCombo>,
}

impl DiverseSelection {
    pub fn count(&self) -> usize {
        self.combos.len()
    }
}

impl RankedComboList {
    /// Scan pairs in rank order, keeping each pair whose items are both unused,
    /// until `count` pairs are kept or the list runs out. No backtracking.
    pub fn select_diverse(&self, count: usize) -> Result<DiverseSelection, ComboError> {
        if self.is_empty() {
            return Err(ComboError::NoCombosAvailable);
        }

        let mut used: HashSet<i64> = HashSet::new();
        let mut combos = Vec::new();

        for pair in self.pairs() {
            if combos.len() >= count {
                break;
            }
            let (first, second) = pair.item_ids();
            if used.contains(&first) || used.contains(&second) {
                continue;
            }
            used.insert(first);
            used.insert(second);
            combos.push(SelectedCombo::from(pair));
        }

        if combos.is_empty() {
            return Err(ComboError::NoDiverseSelectionPossible);
        }

        Ok(DiverseSelection { combos })
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
