use anyhow::{Context, Result};
use ats_core::Vocabulary;

/// Application configuration loaded from environment variables.
/// Every variable has a sensible default; the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixed ATS vocabulary for the skill-extraction endpoint. Defaults to the
    /// built-in term list; override with a comma-separated ATS_VOCABULARY.
    pub vocabulary: Vocabulary,
    /// Upper bound on resume files accepted by one bulk analysis request.
    pub max_bulk_resumes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let vocabulary = match std::env::var("ATS_VOCABULARY") {
            Ok(raw) => parse_vocabulary(&raw)?,
            Err(_) => Vocabulary::default(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            vocabulary,
            max_bulk_resumes: std::env::var("MAX_BULK_RESUMES")
                .unwrap_or_else(|_| "3".to_string())
                .parse::<usize>()
                .context("MAX_BULK_RESUMES must be a positive integer")?,
        })
    }
}

fn parse_vocabulary(raw: &str) -> Result<Vocabulary> {
    let vocabulary = Vocabulary::new(raw.split(','));
    if vocabulary.is_empty() {
        anyhow::bail!("ATS_VOCABULARY is set but contains no terms");
    }
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vocabulary_trims_and_lowercases() {
        let vocab = parse_vocabulary("Rust, Tokio , sql").unwrap();
        assert_eq!(vocab.len(), 3);
        assert!(vocab.terms().contains("tokio"));
    }

    #[test]
    fn test_parse_vocabulary_rejects_blank_list() {
        assert!(parse_vocabulary(" , ,").is_err());
    }
}
