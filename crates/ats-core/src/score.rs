//! Scorer — overlap between a candidate token sequence and a keyword set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::keywords::KeywordSet;

/// Result of matching a candidate against a keyword set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Keywords present at least once in the candidate; always a subset of
    /// the input keyword set.
    pub matched_keywords: BTreeSet<String>,
    /// Percentage of keywords matched, 0.0–100.0.
    pub score: f64,
}

/// Scores a candidate token sequence against a keyword set: exact,
/// case-normalized token equality, no stemming or fuzzy matching.
///
/// Pure and deterministic. An empty keyword set scores 0 rather than dividing
/// by zero; an empty candidate scores 0 with no matches.
pub fn score(candidate_tokens: &[String], keywords: &KeywordSet) -> MatchResult {
    let distinct: BTreeSet<&str> = candidate_tokens.iter().map(String::as_str).collect();
    let matched_keywords: BTreeSet<String> = keywords
        .iter()
        .filter(|k| distinct.contains(k.as_str()))
        .cloned()
        .collect();

    let score = if keywords.is_empty() {
        0.0
    } else {
        100.0 * matched_keywords.len() as f64 / keywords.len() as f64
    };

    MatchResult {
        matched_keywords,
        score,
    }
}
