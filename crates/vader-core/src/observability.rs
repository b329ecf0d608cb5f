//! Observability: tracing init and the JSONL results log.
//!
//! Uses config::ObservabilityConfig for VADER_QUIET, VADER_LOG_LEVEL,
//! VADER_LOG_JSON and VADER_RESULTS_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize tracing. Call once at process startup.
///
/// `RUST_LOG` wins over VADER_LOG_LEVEL; with VADER_QUIET=1 only WARN and
/// above are logged. Logs go to stderr so stdout carries only results.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "vader=warn,vader_core=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

fn results_log_path() -> Option<String> {
    let path = ObservabilityConfig::from_env().results_log.clone()?;
    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    Some(path)
}

fn append_jsonl(path: &str, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

/// Summary of one analysis run, as written to the results log.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub source: String,
    pub sentences: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mean_compound: f64,
    pub duration_ms: u64,
}

/// Results log: analysis_completed
pub fn record_analysis_completed(summary: &RunSummary) {
    tracing::info!(
        source = %summary.source,
        sentences = summary.sentences,
        positive = summary.positive,
        negative = summary.negative,
        neutral = summary.neutral,
        mean_compound = summary.mean_compound,
        duration_ms = summary.duration_ms,
        "analysis completed"
    );
    if let Some(path) = results_log_path() {
        append_jsonl(&path, &summary_record(summary));
    }
}

fn summary_record(summary: &RunSummary) -> serde_json::Value {
    json!({
        "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "event": "analysis_completed",
        "source": summary.source,
        "sentences": summary.sentences,
        "positive": summary.positive,
        "negative": summary.negative,
        "neutral": summary.neutral,
        "mean_compound": summary.mean_compound,
        "duration_ms": summary.duration_ms,
    })
}
