// 🏆 Ranker - Score every entity, keep the best few
//
// Stable sort by score: equal scores keep catalog order.
// Never returns "no match"; a poor best score is the caller's quality signal.

use crate::catalog::Catalog;
use crate::entity::Entity;
use crate::scoring::{classify_folded, MatchTier};
use tracing::debug;

/// How many candidates `search` returns at most
pub const MAX_RESULTS: usize = 3;

// ============================================================================
// MATCH
// ============================================================================

/// A scored candidate. Borrowed from the catalog, lives only for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub entity: &'a Entity,
    pub tier: MatchTier,
}

impl Match<'_> {
    pub fn score(&self) -> usize {
        self.tier.score()
    }
}

// ============================================================================
// RANKING
// ============================================================================

/// Score every entity against the query, best first.
///
/// The returned list has one match per catalog entry. Entities with equal
/// scores stay in catalog order.
pub fn rank<'a>(catalog: &'a Catalog, query: &str) -> Vec<Match<'a>> {
    let query = query.to_lowercase();

    let mut matches: Vec<Match<'a>> = catalog
        .entries()
        .iter()
        .map(|entry| Match {
            entity: entry.entity(),
            tier: classify_folded(&query, entry.symbol_folded(), entry.name_folded()),
        })
        .collect();

    // `sort_by_key` is stable
    matches.sort_by_key(|m| m.score());
    matches
}

/// Top `MAX_RESULTS` matches with their scores, for presentation layers.
pub fn search_scored<'a>(catalog: &'a Catalog, query: &str) -> Vec<Match<'a>> {
    let mut matches = rank(catalog, query);
    matches.truncate(MAX_RESULTS);

    debug!(query, results = matches.len(), "search");
    matches
}

/// Resolve free text to at most `MAX_RESULTS` entities, most relevant first.
///
/// Returns exactly `min(MAX_RESULTS, catalog.len())` entities.
pub fn search(catalog: &Catalog, query: &str) -> Vec<Entity> {
    search_scored(catalog, query)
        .into_iter()
        .map(|m| m.entity.clone())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
