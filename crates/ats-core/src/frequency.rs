//! FrequencyCounter — per-keyword occurrence counts within a candidate's
//! full token sequence.

use std::collections::{BTreeMap, HashMap};

use crate::keywords::KeywordSet;

/// Per-keyword occurrence counts. Keyed by exactly the input keyword set,
/// zero counts included, ready for bar-chart rendering.
pub type FrequencyTable = BTreeMap<String, u64>;

/// Counts, for each keyword, the positions in `candidate_tokens` holding that
/// exact token. Keywords are matched against single tokens only, so a
/// hyphenated keyword never matches when the tokenizer split it apart.
pub fn frequencies(candidate_tokens: &[String], keywords: &KeywordSet) -> FrequencyTable {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for token in candidate_tokens {
        if keywords.contains(token) {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    keywords
        .iter()
        .map(|k| (k.clone(), counts.get(k.as_str()).copied().unwrap_or(0)))
        .collect()
}
