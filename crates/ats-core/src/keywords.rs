//! KeywordSetBuilder — derives the set of distinct keywords to evaluate a
//! candidate against, from a reference document or a fixed vocabulary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::tokenize::{tokenize, TokenPolicy};

/// Distinct lowercase keywords. Ordered for deterministic serialization;
/// consumers must not rely on any particular iteration order semantically.
pub type KeywordSet = BTreeSet<String>;

/// Builds a keyword set from a reference document (typically a job
/// description): tokenize, then deduplicate. Empty reference text yields an
/// empty set — the scorer's zero-division guard handles that downstream.
pub fn keywords_from_reference(reference_text: &str, policy: TokenPolicy) -> KeywordSet {
    tokenize(reference_text, policy).into_iter().collect()
}

/// Fixed ATS vocabulary used when no reference document is supplied
/// (skill extraction). Immutable once built; passed explicitly into the
/// analysis rather than living as a process-wide global.
///
/// Note on hyphenated terms: under [`TokenPolicy::WordBoundary`] a candidate's
/// "problem-solving" tokenizes as two tokens, so the single vocabulary entry
/// "problem-solving" never matches. This mirrors the published vocabulary and
/// is kept as documented behavior rather than silently rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: KeywordSet,
}

/// Default ATS vocabulary for skill extraction.
const DEFAULT_TERMS: [&str; 13] = [
    "python",
    "data",
    "analysis",
    "machine",
    "learning",
    "sql",
    "excel",
    "communication",
    "teamwork",
    "project",
    "management",
    "problem-solving",
    "leadership",
];

impl Vocabulary {
    /// Builds a vocabulary from arbitrary terms, lowercasing each and
    /// discarding blanks.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &KeywordSet {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TERMS)
    }
}
