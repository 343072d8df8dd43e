use crate::catalog::{Catalog, CatalogError, MenuItem};
use crate::combo::RankedComboList;
use tracing::debug;

/// A catalog together with the combo ranking derived from it.
///
/// The ranking is only ever built from the catalog it sits next to, so a
/// snapshot can be swapped in whole after a write.
#[derive(Debug, Clone, Default)]
pub struct MenuSnapshot {
    catalog: Catalog,
    combos: RankedComboList,
}

impl MenuSnapshot {
    pub fn new(catalog: Catalog) -> Self {
        let combos = RankedComboList::build(&catalog);
        debug!(items = catalog.len(), pairs = combos.len(), "Ranked combo pairs");
        Self { catalog, combos }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn combos(&self) -> &RankedComboList {
        &self.combos
    }

    /// Next snapshot with `item` appended and combos re-ranked
    pub fn with_item(&self, item: MenuItem) -> Result<Self, CatalogError> {
        let mut catalog = self.catalog.clone();
        catalog.append(item)?;
        Ok(Self::new(catalog))
    }
}
