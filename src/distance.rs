// 📏 Distance Engine - Levenshtein edit distance
// Pure function: no side effects, no failure modes

/// Calculate Levenshtein distance between two strings
///
/// Levenshtein distance = minimum number of single-character edits
/// (insertions, deletions, substitutions) to change one string into another.
///
/// Lengths are counted in Unicode scalar values, so `"é"` is one character.
/// Case folding is the caller's job; this compares characters as given.
///
/// Example:
/// - levenshtein_distance("kitten", "sitting") = 3
/// - levenshtein_distance("", "abc") = 3
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Keep only two rows of the (len(b)+1) x (len(a)+1) matrix.
    // Rows walk `b`, columns walk `a`, the full matrix is still evaluated.
    let mut prev: Vec<usize> = (0..=a_chars.len()).collect();
    let mut curr = vec![0; a_chars.len() + 1];

    for (i, cb) in b_chars.iter().enumerate() {
        curr[0] = i + 1;

        for (j, ca) in a_chars.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j]              // substitution
                    .min(curr[j])        // insertion
                    .min(prev[j + 1])    // deletion
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a_chars.len()]
}

// ============================================================================
// TESTS
// ============================================================================
