// 🏢 Entity - One listed organization in the catalog
// Identity is the opaque `id` from the source data; symbol and name are what users type

use serde::{Deserialize, Serialize};

/// A listed organization as read from the company database file.
///
/// `symbol` is expected to be unique but nothing here enforces it.
/// Duplicates are legal and simply show up as duplicate candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Opaque identifier from the source data (not dense, not sequential)
    #[serde(alias = "ID", alias = "Id")]
    pub id: i64,

    /// Ticker symbol, e.g. "JKH.N0000"
    #[serde(alias = "SYMBOL", alias = "Symbol")]
    pub symbol: String,

    /// Registered name, e.g. "JOHN KEELLS HOLDINGS PLC"
    #[serde(alias = "NAME", alias = "Name")]
    pub name: String,
}

impl Entity {
    pub fn new(id: i64, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Entity {
            id,
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_new() {
        let entity = Entity::new(1, "JKH.N0000", "JOHN KEELLS HOLDINGS PLC");

        assert_eq!(entity.id, 1);
        assert_eq!(entity.symbol, "JKH.N0000");
        assert_eq!(entity.name, "JOHN KEELLS HOLDINGS PLC");
    }

    #[test]
    fn test_entity_json_shape() {
        let entity = Entity::new(7, "ABC.N0000", "ABC COMPANY PLC");
        let json = serde_json::to_value(&entity).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "symbol": "ABC.N0000", "name": "ABC COMPANY PLC" })
        );
    }
}
