// 📂 Loader - Company database file → ordered entities
// Header row required; columns id, symbol, name (common capitalisations accepted)

use crate::catalog::Catalog;
use crate::entity::Entity;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Load entities from a CSV file, in file order
pub fn load_csv(csv_path: &Path) -> Result<Vec<Entity>> {
    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open company file: {:?}", csv_path))?;

    let entities = read_entities(rdr)?;
    info!(path = %csv_path.display(), count = entities.len(), "loaded company file");

    Ok(entities)
}

/// Load entities from any reader (stdin, in-memory buffers, tests)
pub fn load_reader<R: Read>(reader: R) -> Result<Vec<Entity>> {
    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    read_entities(rdr)
}

/// Load a CSV file straight into an immutable catalog
pub fn load_catalog(csv_path: &Path) -> Result<Catalog> {
    Ok(Catalog::new(load_csv(csv_path)?))
}

fn read_entities<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Entity>> {
    let mut entities = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // +2: one for the header row, one for 1-based numbering
        let entity: Entity = result
            .with_context(|| format!("Failed to parse company record on line {}", index + 2))?;
        entities.push(entity);
    }

    Ok(entities)
}

// ============================================================================
// TESTS
// ============================================================================
