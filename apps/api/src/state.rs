use ats_core::Analyzer;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The analyzer is pure configuration (a tokenization policy),
/// so cloning per request is free and needs no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub analyzer: Analyzer,
}
