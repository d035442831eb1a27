//! Tokenizer — converts raw text into a normalized sequence of word tokens.

use serde::{Deserialize, Serialize};

/// Tokenization policy. An analysis pipeline picks one policy and uses it for
/// both scoring and frequency counting; mixing policies within one analysis
/// produces matched-keyword sets and counts that disagree with each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPolicy {
    /// Maximal runs of word characters (alphanumeric or underscore).
    /// Digit-containing tokens are kept; hyphenated words split into their
    /// parts ("problem-solving" → "problem", "solving").
    #[default]
    WordBoundary,
    /// Wordpunct-style split, after which any token containing a
    /// non-alphabetic character is discarded.
    AlphaOnly,
}

/// Lowercases `text` and splits it into an ordered token sequence.
/// Duplicates are preserved (the frequency counter needs them); empty input
/// yields an empty sequence.
pub fn tokenize(text: &str, policy: TokenPolicy) -> Vec<String> {
    match policy {
        TokenPolicy::WordBoundary => word_boundary_tokens(text),
        TokenPolicy::AlphaOnly => alpha_only_tokens(text),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_boundary_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn alpha_only_tokens(text: &str) -> Vec<String> {
    // Wordpunct splits into word runs and punctuation runs; a punctuation run
    // can never be all-alphabetic, so only filtered word runs survive.
    word_boundary_tokens(text)
        .into_iter()
        .filter(|t| t.chars().all(char::is_alphabetic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_whitespace() {
        let tokens = tokenize("Rust Engineer", TokenPolicy::WordBoundary);
        assert_eq!(tokens, vec!["rust", "engineer"]);
    }

    #[test]
    fn test_word_boundary_keeps_digit_tokens() {
        let tokens = tokenize("5+ years of k8s", TokenPolicy::WordBoundary);
        assert_eq!(tokens, vec!["5", "years", "of", "k8s"]);
    }

    #[test]
    fn test_alpha_only_drops_digit_tokens() {
        let tokens = tokenize("5+ years of k8s", TokenPolicy::AlphaOnly);
        assert_eq!(tokens, vec!["years", "of"]);
    }

    #[test]
    fn test_hyphenated_word_splits_into_parts() {
        let tokens = tokenize("problem-solving", TokenPolicy::WordBoundary);
        assert_eq!(tokens, vec!["problem", "solving"]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let tokens = tokenize("data, data; python data", TokenPolicy::WordBoundary);
        assert_eq!(tokens, vec!["data", "data", "python", "data"]);
    }

    #[test]
    fn test_empty_input_yields_empty_sequence() {
        assert!(tokenize("", TokenPolicy::WordBoundary).is_empty());
        assert!(tokenize("", TokenPolicy::AlphaOnly).is_empty());
    }

    #[test]
    fn test_punctuation_only_input_yields_empty_sequence() {
        assert!(tokenize("... --- !!!", TokenPolicy::WordBoundary).is_empty());
        assert!(tokenize("... --- !!!", TokenPolicy::AlphaOnly).is_empty());
    }

    #[test]
    fn test_underscore_is_a_word_char() {
        let tokens = tokenize("snake_case name", TokenPolicy::WordBoundary);
        assert_eq!(tokens, vec!["snake_case", "name"]);
        // But an underscore token is not alphabetic.
        let tokens = tokenize("snake_case name", TokenPolicy::AlphaOnly);
        assert_eq!(tokens, vec!["name"]);
    }

    #[test]
    fn test_policy_default_is_word_boundary() {
        assert_eq!(TokenPolicy::default(), TokenPolicy::WordBoundary);
    }
}
