// Symbol Search - Core Library
// Resolves free-text company queries to catalog entries; used by the CLI, API server, and tests

pub mod entity;
pub mod distance;
pub mod scoring;
pub mod catalog;
pub mod ranker;
pub mod loader;
pub mod config;

// Re-export commonly used types
pub use entity::Entity;
pub use distance::levenshtein_distance;
pub use scoring::{classify, classify_folded, score, MatchTier};
pub use catalog::{Catalog, CatalogEntry};
pub use ranker::{rank, search, search_scored, Match, MAX_RESULTS};
pub use loader::{load_catalog, load_csv, load_reader};
pub use crate::config::{init_tracing, AppConfig, LogOutput};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
