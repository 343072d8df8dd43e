use crate::catalog::{Catalog, MenuItem};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One row of the menu CSV. Portuguese headers from the legacy dataset are accepted.
#[derive(Debug, Deserialize)]
struct MenuRecord {
    id: i64,
    #[serde(alias = "nome")]
    name: String,
    #[serde(alias = "preco")]
    price: f64,
    #[serde(alias = "categoria")]
    category: String,
}

/// Read-only CSV source for the menu catalog
pub struct CsvMenuStore {
    path: PathBuf,
}

impl CsvMenuStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the catalog. A missing file yields an empty catalog.
    pub fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "Menu CSV not found, starting with an empty menu");
            return Ok(Catalog::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let catalog = parse_catalog(&content)?;
        info!(path = %self.path.display(), items = catalog.len(), "Loaded menu");

        Ok(catalog)
    }
}

/// Parse CSV text with a header row into a validated catalog
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let content = content.trim_start_matches('\u{feff}');
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let mut items = Vec::new();
    for (index, row) in reader.deserialize::<MenuRecord>().enumerate() {
        // header is line 1
        let line = index + 2;
        let record = row.with_context(|| format!("Malformed menu row at line {line}"))?;
        let item = MenuItem::new(record.id, record.name, record.price, record.category)
            .with_context(|| format!("Invalid menu row at line {line}"))?;
        items.push(item);
    }

    Ok(Catalog::new(items)?)
}
