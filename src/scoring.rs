// 🎯 Scoring Policy - Tiered similarity score for (query, entity)
// Three tiers, first that applies wins: Exact → Substring → Fuzzy

use crate::distance::levenshtein_distance;
use crate::entity::Entity;

// ============================================================================
// MATCH TIER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Query equals the symbol or the name (case-insensitive)
    Exact,

    /// Query appears inside the symbol or the name
    Substring,

    /// Neither; carries the smallest edit distance found
    Fuzzy(usize),
}

impl MatchTier {
    /// Score for ranking, lower is better
    pub fn score(&self) -> usize {
        match self {
            MatchTier::Exact => 0,
            MatchTier::Substring => 1,
            MatchTier::Fuzzy(distance) => *distance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Substring => "substring",
            MatchTier::Fuzzy(_) => "fuzzy",
        }
    }
}

// ============================================================================
// POLICY
// ============================================================================

/// Classify a query against an entity, lower-casing both sides first.
pub fn classify(query: &str, entity: &Entity) -> MatchTier {
    classify_folded(
        &query.to_lowercase(),
        &entity.symbol.to_lowercase(),
        &entity.name.to_lowercase(),
    )
}

/// Score a query against an entity. Equivalent to `classify(..).score()`.
pub fn score(query: &str, entity: &Entity) -> usize {
    classify(query, entity).score()
}

/// Classify with every input already lower-cased.
///
/// The catalog folds symbol and name once at build time and the ranker folds
/// the query once per search, so this is the per-entity hot path.
pub fn classify_folded(query: &str, symbol: &str, name: &str) -> MatchTier {
    // Tier 1: exact
    if query == symbol || query == name {
        return MatchTier::Exact;
    }

    // Tier 2: substring
    if symbol.contains(query) || name.contains(query) {
        return MatchTier::Substring;
    }

    // Tier 3: fuzzy - best of symbol, whole name, and each word of the name
    let best_word = name
        .split_whitespace()
        .map(|word| levenshtein_distance(query, word))
        .min();

    let distance = levenshtein_distance(query, symbol)
        .min(levenshtein_distance(query, name));

    MatchTier::Fuzzy(best_word.map_or(distance, |w| w.min(distance)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn jkh() -> Entity {
        Entity::new(1, "JKH.N0000", "JOHN KEELLS HOLDINGS PLC")
    }

    #[test]
    fn test_exact_symbol_match() {
        assert_eq!(classify("JKH.N0000", &jkh()), MatchTier::Exact);
        assert_eq!(classify("jkh.n0000", &jkh()), MatchTier::Exact);
        assert_eq!(score("Jkh.N0000", &jkh()), 0);
    }

    #[test]
    fn test_exact_name_match() {
        assert_eq!(classify("john keells holdings plc", &jkh()), MatchTier::Exact);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(classify("john keells", &jkh()), MatchTier::Substring);
        assert_eq!(classify("JKH", &jkh()), MatchTier::Substring);
        assert_eq!(classify("holdings", &jkh()), MatchTier::Substring);
        assert_eq!(score("keells", &jkh()), 1);
    }

    #[test]
    fn test_empty_query_is_substring() {
        assert_eq!(classify("", &jkh()), MatchTier::Substring);
    }

    #[test]
    fn test_fuzzy_uses_best_word() {
        // "keels" is one edit away from the word "keells"
        assert_eq!(classify("keels", &jkh()), MatchTier::Fuzzy(1));
    }

    #[test]
    fn test_fuzzy_uses_symbol() {
        // one substitution away from the symbol, far from every word
        assert_eq!(classify("jkx.n0000", &jkh()), MatchTier::Fuzzy(1));
    }

    #[test]
    fn test_fuzzy_prefers_closer_word_over_whole_name() {
        let entity = Entity::new(9, "ABC.N0000", "ABC COMPANY PLC");

        // whole name costs 5 (1 sub + 4 inserts), the word "company" costs 4
        assert_eq!(classify("abd company", &entity), MatchTier::Fuzzy(4));
    }

    #[test]
    fn test_fuzzy_uses_whole_name() {
        let entity = Entity::new(3, "JKPL.N0000", "JOHN KEELLS PLC");

        // one missing 'h' against the full name; symbol and every word are far off
        assert_eq!(classify("jon keells plc", &entity), MatchTier::Fuzzy(1));
        assert!(levenshtein_distance("jon keells plc", "jkpl.n0000") > 1);
        assert!("john keells plc"
            .split_whitespace()
            .all(|word| levenshtein_distance("jon keells plc", word) > 1));
    }

    #[test]
    fn test_fuzzy_with_empty_name() {
        let entity = Entity::new(3, "XYZ", "");

        assert_eq!(classify("xya", &entity), MatchTier::Fuzzy(1));
    }

    #[test]
    fn test_tier_scores() {
        assert_eq!(MatchTier::Exact.score(), 0);
        assert_eq!(MatchTier::Substring.score(), 1);
        assert_eq!(MatchTier::Fuzzy(7).score(), 7);
        assert_eq!(MatchTier::Fuzzy(7).as_str(), "fuzzy");
    }

    #[test]
    fn test_classify_folded_matches_classify() {
        let entity = jkh();
        for query in ["JKH", "john", "jon keels", "xyz", ""] {
            assert_eq!(
                classify(query, &entity),
                classify_folded(
                    &query.to_lowercase(),
                    &entity.symbol.to_lowercase(),
                    &entity.name.to_lowercase()
                )
            );
        }
    }
}
