// 📚 Catalog - Immutable, ordered collection of entities
//
// Built once by the loader, read-only for the rest of the process.
// Order is the tie-break order for equal scores, so it is kept exactly as loaded.
// No interior mutability: share it with `&Catalog` or `Arc<Catalog>`, no locks needed.

use crate::entity::Entity;

/// One catalog slot: the entity plus its case-folded fields
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    entity: Entity,
    symbol_folded: String,
    name_folded: String,
}

impl CatalogEntry {
    fn new(entity: Entity) -> Self {
        CatalogEntry {
            symbol_folded: entity.symbol.to_lowercase(),
            name_folded: entity.name.to_lowercase(),
            entity,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Lower-cased symbol
    pub fn symbol_folded(&self) -> &str {
        &self.symbol_folded
    }

    /// Lower-cased name
    pub fn name_folded(&self) -> &str {
        &self.name_folded
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the catalog from loader output, preserving order.
    ///
    /// Duplicate symbols are kept; they produce duplicate candidates.
    pub fn new(entities: Vec<Entity>) -> Self {
        Catalog {
            entries: entities.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Entities in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter().map(CatalogEntry::entity)
    }

    /// Check whether a symbol is listed (case-insensitive).
    ///
    /// Returns the first entity in catalog order when symbols repeat.
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Entity> {
        let folded = symbol.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.symbol_folded == folded)
            .map(CatalogEntry::entity)
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.find_by_symbol(symbol).is_some()
    }
}

impl From<Vec<Entity>> for Catalog {
    fn from(entities: Vec<Entity>) -> Self {
        Catalog::new(entities)
    }
}

impl FromIterator<Entity> for Catalog {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Entity::new(1, "JKH.N0000", "JOHN KEELLS HOLDINGS PLC"),
            Entity::new(2, "JKL.N0000", "JOHN KEELLS HOTELS PLC"),
            Entity::new(3, "JKPL.N0000", "JOHN KEELLS PLC"),
        ])
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = sample_catalog();
        let ids: Vec<i64> = catalog.iter().map(|e| e.id).collect();

        assert_eq!(catalog.len(), 3);
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_catalog_folds_fields_once() {
        let catalog = sample_catalog();
        let first = &catalog.entries()[0];

        assert_eq!(first.symbol_folded(), "jkh.n0000");
        assert_eq!(first.name_folded(), "john keells holdings plc");
        assert_eq!(first.entity().symbol, "JKH.N0000");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();

        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
        assert!(catalog.find_by_symbol("JKH.N0000").is_none());
    }

    #[test]
    fn test_find_by_symbol() {
        let catalog = sample_catalog();

        let found = catalog.find_by_symbol("jkl.n0000");
        assert_eq!(found.map(|e| e.id), Some(2));

        assert!(catalog.contains_symbol("JKPL.N0000"));
        assert!(!catalog.contains_symbol("JKPL"));
    }

    #[test]
    fn test_duplicate_symbols_are_kept() {
        let catalog: Catalog = vec![
            Entity::new(10, "DUP.N0000", "FIRST LISTING"),
            Entity::new(11, "DUP.N0000", "SECOND LISTING"),
        ]
        .into_iter()
        .collect();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_symbol("DUP.N0000").map(|e| e.id), Some(10));
    }
}
