use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while building or mutating a catalog
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("ID {0} already exists.")]
    DuplicateId(i64),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },
}

/// Upper bound on a single price; keeps every combo total finite.
pub const MAX_PRICE: f64 = 1_000_000_000.0;

/// A single dish on the menu. Validated on construction and immutable after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    id: i64,
    name: String,
    price: f64,
    category: String,
}

impl MenuItem {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let category = category.into();

        let invalid = |reason: &str| CatalogError::InvalidRecord {
            id,
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(invalid("category cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(invalid("price must be a non-negative number"));
        }
        if price > MAX_PRICE {
            return Err(invalid("price is too large"));
        }

        Ok(Self {
            id,
            name,
            // -0.0 becomes 0.0 so it orders equal to zero
            price: price + 0.0,
            category,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Optional filters for [`Catalog::search`]. Empty strings are ignored.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Ordered in-memory collection of menu items with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose category matches, ignoring case
    pub fn by_category(&self, category: &str) -> Vec<&MenuItem> {
        let wanted = category.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.category.to_lowercase() == wanted)
            .collect()
    }

    /// Name substring and category equality, both case-insensitive
    pub fn search(&self, filter: &MenuFilter) -> Vec<&MenuItem> {
        let name = non_empty_lowercase(filter.name.as_deref());
        let category = non_empty_lowercase(filter.category.as_deref());

        self.items
            .iter()
            .filter(|item| match &name {
                Some(needle) => item.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .filter(|item| match &category {
                Some(wanted) => item.category.to_lowercase() == *wanted,
                None => true,
            })
            .collect()
    }

    pub fn append(&mut self, item: MenuItem) -> Result<(), CatalogError> {
        if self.get(item.id).is_some() {
            return Err(CatalogError::DuplicateId(item.id));
        }
        self.items.push(item);
        Ok(())
    }
}

fn non_empty_lowercase(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}
