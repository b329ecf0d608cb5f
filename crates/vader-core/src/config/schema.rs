//! Configuration structs grouped by concern, loaded from the environment.

use std::fmt;
use std::str::FromStr;

use super::env_keys::{observability as obv_keys, resources as res_keys, runtime as rt_keys};
use super::loader::{env_bool, env_optional, env_or};

/// Resource file locations as configured in the environment.
#[derive(Debug, Clone, Default)]
pub struct ResourceConfig {
    pub lexicon: Option<String>,
    pub idioms: Option<String>,
    pub resource_dir: Option<String>,
}

impl ResourceConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        Self {
            lexicon: env_optional(res_keys::VADER_LEXICON, res_keys::LEXICON_ALIASES),
            idioms: env_optional(res_keys::VADER_IDIOMS, res_keys::IDIOMS_ALIASES),
            resource_dir: env_optional(res_keys::VADER_RESOURCE_DIR, &[]),
        }
    }
}

/// Observability: quiet, log_level, log_json, results_log
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub results_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| {
            super::loader::load_dotenv();
            Self {
                quiet: env_bool(obv_keys::VADER_QUIET, &[], false),
                log_level: env_or(
                    obv_keys::VADER_LOG_LEVEL,
                    obv_keys::LOG_LEVEL_ALIASES,
                    || "vader=info,vader_core=info".to_string(),
                ),
                log_json: env_bool(obv_keys::VADER_LOG_JSON, &[], false),
                results_log: env_optional(obv_keys::VADER_RESULTS_LOG, &[]),
            }
        })
    }
}

/// How scored sentences are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `sentence: ...` / `score: {...}` line pairs.
    #[default]
    Text,
    /// One JSON object per sentence.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Batch scoring runtime settings.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// `None` leaves the rayon global pool at its default size.
    pub threads: Option<usize>,
    pub output_format: OutputFormat,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        super::loader::load_dotenv();
        let threads = env_optional(rt_keys::VADER_THREADS, &[])
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0);
        let output_format = env_optional(rt_keys::VADER_OUTPUT_FORMAT, &[])
            .and_then(|s| match s.parse::<OutputFormat>() {
                Ok(f) => Some(f),
                Err(e) => {
                    tracing::warn!("{}; using text", e);
                    None
                }
            })
            .unwrap_or_default();
        Self {
            threads,
            output_format,
        }
    }

    /// CLI flags take precedence over the environment.
    pub fn with_cli_overrides(
        mut self,
        threads: Option<usize>,
        output_format: Option<OutputFormat>,
    ) -> Self {
        if let Some(n) = threads.filter(|n| *n > 0) {
            self.threads = Some(n);
        }
        if let Some(f) = output_format {
            self.output_format = f;
        }
        self
    }
}
