//! ATS résumé matching core: tokenization, keyword-set construction, overlap
//! scoring, and per-keyword frequency counting.
//!
//! Everything here is pure and stateless — no I/O, no async, no shared mutable
//! state. Independent analyses may run in parallel without coordination; within
//! one analysis the scorer and the frequency counter read the same materialized
//! token sequence and keyword set and never mutate either.

pub mod analyze;
pub mod frequency;
pub mod keywords;
pub mod score;
pub mod tokenize;

pub use analyze::{AnalysisReport, Analyzer, Document};
pub use frequency::{frequencies, FrequencyTable};
pub use keywords::{keywords_from_reference, KeywordSet, Vocabulary};
pub use score::{score, MatchResult};
pub use tokenize::{tokenize, TokenPolicy};
