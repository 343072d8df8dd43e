//! HTTP service for a restaurant menu loaded from CSV, with greedy
//! "diverse combo" suggestions: cheapest pairs of items from different
//! categories, no item used twice.

pub mod api;
pub mod catalog;
pub mod combo;
pub mod config;
pub mod menu;
pub mod storage;

pub use api::{build_router, AppState};
pub use catalog::{Catalog, CatalogError, MenuFilter, MenuItem};
pub use combo::{ComboError, ComboPair, DiverseSelection, RankedComboList, SelectedCombo};
pub use menu::MenuSnapshot;
