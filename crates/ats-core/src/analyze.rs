//! Analysis pipeline — ties the tokenizer, keyword builder, scorer, and
//! frequency counter together under a single tokenization policy so that
//! matched-keyword sets and frequency counts stay mutually consistent.

use serde::{Deserialize, Serialize};

use crate::frequency::{frequencies, FrequencyTable};
use crate::keywords::{keywords_from_reference, KeywordSet};
use crate::score::{score, MatchResult};
use crate::tokenize::{tokenize, TokenPolicy};

/// A candidate document: raw extracted text plus an identifying label
/// (filename, or a caller-chosen name for pasted text). Owned by the caller
/// and borrowed for the duration of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// One document's combined analysis against a keyword set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub label: String,
    /// Percentage of keywords matched, 0.0–100.0.
    pub score: f64,
    pub matched_keywords: KeywordSet,
    pub frequencies: FrequencyTable,
}

/// Configured analysis pipeline. Holds the tokenization policy only —
/// configuration, not state; every method is a pure function of its inputs,
/// so one `Analyzer` may serve any number of concurrent analyses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    policy: TokenPolicy,
}

impl Analyzer {
    pub fn new(policy: TokenPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> TokenPolicy {
        self.policy
    }

    /// Scores candidate text against keywords derived from a reference
    /// document (job-description-driven ATS scoring).
    pub fn compute_match(&self, candidate_text: &str, reference_text: &str) -> MatchResult {
        let keywords = keywords_from_reference(reference_text, self.policy);
        let tokens = tokenize(candidate_text, self.policy);
        score(&tokens, &keywords)
    }

    /// Counts per-keyword occurrences in candidate text.
    pub fn compute_frequencies(
        &self,
        candidate_text: &str,
        keywords: &KeywordSet,
    ) -> FrequencyTable {
        let tokens = tokenize(candidate_text, self.policy);
        frequencies(&tokens, keywords)
    }

    /// Full per-document report: score, matched keywords, and frequency table
    /// against one keyword set, all computed from a single tokenization pass.
    pub fn analyze(&self, document: &Document, keywords: &KeywordSet) -> AnalysisReport {
        let tokens = tokenize(&document.text, self.policy);
        let result = score(&tokens, keywords);
        let frequencies = frequencies(&tokens, keywords);

        AnalysisReport {
            label: document.label.clone(),
            score: result.score,
            matched_keywords: result.matched_keywords,
            frequencies,
        }
    }

    /// Convenience for the reference-document flow: build the keyword set
    /// from `reference_text`, then run [`Analyzer::analyze`].
    pub fn analyze_against_reference(
        &self,
        document: &Document,
        reference_text: &str,
    ) -> AnalysisReport {
        let keywords = keywords_from_reference(reference_text, self.policy);
        self.analyze(document, &keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::Vocabulary;

    #[test]
    fn test_compute_match_reference_scenario() {
        let analyzer = Analyzer::default();
        let result = analyzer.compute_match("I know Python and Excel.", "Python SQL Excel");

        let expected: KeywordSet = ["python", "excel"].iter().map(|s| s.to_string()).collect();
        assert_eq!(result.matched_keywords, expected);
        assert!((result.score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_reference_scores_zero_for_any_candidate() {
        let analyzer = Analyzer::default();
        let result = analyzer.compute_match("a rich and lengthy resume", "");
        assert_eq!(result.score, 0.0);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_compute_match_is_idempotent() {
        let analyzer = Analyzer::default();
        let first = analyzer.compute_match("Rust and Python", "rust go python");
        let second = analyzer.compute_match("Rust and Python", "rust go python");
        assert_eq!(first, second);
    }

    #[test]
    fn test_compute_frequencies_against_fixed_vocabulary() {
        let analyzer = Analyzer::default();
        let vocab = Vocabulary::new(["python", "data"]);
        let table = analyzer.compute_frequencies("data data python", vocab.terms());
        assert_eq!(table.get("python"), Some(&1));
        assert_eq!(table.get("data"), Some(&2));
    }

    #[test]
    fn test_empty_candidate_full_zero_table_and_zero_score() {
        let analyzer = Analyzer::default();
        let keywords: KeywordSet = ["python"].iter().map(|s| s.to_string()).collect();

        let table = analyzer.compute_frequencies("", &keywords);
        assert_eq!(table.get("python"), Some(&0));

        let result = analyzer.compute_match("", "");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_analyze_report_is_internally_consistent() {
        let analyzer = Analyzer::default();
        let document = Document::new("resume.txt", "Python, SQL, python again");
        let report = analyzer.analyze_against_reference(&document, "Python SQL Excel");

        assert_eq!(report.label, "resume.txt");
        // Every matched keyword has a positive count; every unmatched keyword
        // is present with a zero count.
        for (keyword, count) in &report.frequencies {
            let matched = report.matched_keywords.contains(keyword);
            assert_eq!(matched, *count > 0, "keyword {keyword} count {count}");
        }
        assert_eq!(report.frequencies.len(), 3);
    }

    #[test]
    fn test_analyze_score_matches_compute_match() {
        let analyzer = Analyzer::default();
        let document = Document::new("r", "excel python");
        let report = analyzer.analyze_against_reference(&document, "python sql excel");
        let result = analyzer.compute_match("excel python", "python sql excel");
        assert_eq!(report.score, result.score);
        assert_eq!(report.matched_keywords, result.matched_keywords);
    }

    #[test]
    fn test_alpha_only_pipeline_ignores_digit_keywords() {
        let analyzer = Analyzer::new(TokenPolicy::AlphaOnly);
        // "k8s" disappears from both the reference set and the candidate, so
        // the score is computed over the surviving alphabetic keywords only.
        let result = analyzer.compute_match("kubernetes and k8s", "kubernetes k8s");
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matched_keywords.len(), 1);
    }

    #[test]
    fn test_report_serializes_with_stable_keys() {
        let analyzer = Analyzer::default();
        let document = Document::new("resume", "python");
        let report = analyzer.analyze_against_reference(&document, "python sql");
        let json = serde_json::to_string(&report).unwrap();
        // BTree collections serialize in lexicographic key order.
        assert!(json.contains(r#""frequencies":{"python":1,"sql":0}"#));
    }
}
