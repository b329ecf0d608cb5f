//! Text pipeline that turns raw prose into tokenized, tagged sentences for
//! the scorer: sentence splitting, word tokenization and coarse tagging.
//!
//! Rule-based only. No statistical models, no external NLP crates.

pub mod error;
pub mod pipeline;
pub mod sentence;
pub mod tagger;
pub mod tokenize;

pub use error::NlpError;
pub use pipeline::TextPipeline;
pub use sentence::SentenceSplitter;
pub use tokenize::WordTokenizer;
