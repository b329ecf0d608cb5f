//! Environment variable keys. Primary keys use the `VADER_*` prefix.

/// Resource file locations
pub mod resources {
    /// Full path of the lexicon file.
    pub const VADER_LEXICON: &str = "VADER_LEXICON";
    pub const LEXICON_ALIASES: &[&str] = &["VADER_LEXICON_PATH"];

    /// Full path of the idiom file.
    pub const VADER_IDIOMS: &str = "VADER_IDIOMS";
    pub const IDIOMS_ALIASES: &[&str] = &["VADER_IDIOMS_PATH"];

    /// Directory searched for both files when no explicit path is set.
    pub const VADER_RESOURCE_DIR: &str = "VADER_RESOURCE_DIR";
}

/// Observability and logging
pub mod observability {
    pub const VADER_QUIET: &str = "VADER_QUIET";

    pub const VADER_LOG_LEVEL: &str = "VADER_LOG_LEVEL";
    pub const LOG_LEVEL_ALIASES: &[&str] = &["VADER_LOG"];

    pub const VADER_LOG_JSON: &str = "VADER_LOG_JSON";

    /// JSONL file that receives one record per completed analysis run.
    pub const VADER_RESULTS_LOG: &str = "VADER_RESULTS_LOG";
}

/// Scoring runtime
pub mod runtime {
    /// Worker threads for batch scoring; unset means rayon's default.
    pub const VADER_THREADS: &str = "VADER_THREADS";

    /// `text` or `json`.
    pub const VADER_OUTPUT_FORMAT: &str = "VADER_OUTPUT_FORMAT";
}
