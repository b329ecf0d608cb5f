//! VADER core: rule-based sentiment intensity scoring for single sentences.
//!
//! - `resources`: lexicon, idiom, booster and negation tables
//! - `token`: tokens and the punctuation filter
//! - `modifiers` / `negation`: context lookups used while scoring a word
//! - `valence`: per-token valence cascade
//! - `aggregate`: sentence-level reweighting, emphasis and normalization
//! - `analyzer`: the scoring entry point
//! - `config` / `observability`: env-based settings and tracing setup

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod modifiers;
pub mod negation;
pub mod observability;
pub mod resources;
pub mod score;
pub mod token;
pub mod valence;

pub use analyzer::{SentenceAnalysis, SentimentAnalyzer};
pub use error::{ResourceKind, Result, VaderError};
pub use resources::{LoadReport, ResourcePaths, ResourceTables};
pub use score::VScore;
pub use token::Token;
