//! `vader analyse`: score every sentence of a text file.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use vader_core::config::RuntimeConfig;
use vader_core::observability::{self, RunSummary};
use vader_core::{SentenceAnalysis, SentimentAnalyzer, Token};
use vader_nlp::TextPipeline;

use super::{load_analyzer, summarize, write_all};
use crate::cli::ResourceArgs;

pub fn analyse_file(file: &Path, resources: &ResourceArgs, runtime: &RuntimeConfig) -> Result<RunSummary> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read input file: {}", file.display()))?;
    let analyzer = load_analyzer(resources)?;

    let started = Instant::now();
    let sentences = TextPipeline::new()
        .parse(&text)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    let results = score_batch(&analyzer, &sentences, runtime.threads)?;
    let elapsed = started.elapsed().as_millis() as u64;

    let stdout = io::stdout();
    write_all(&mut stdout.lock(), runtime.output_format, &sentences, &results)
        .context("Failed to write results")?;

    let summary = summarize(&file.display().to_string(), &results, elapsed);
    observability::record_analysis_completed(&summary);
    Ok(summary)
}

/// Score all sentences, on a dedicated pool when a thread count is given.
pub(crate) fn score_batch(
    analyzer: &SentimentAnalyzer,
    sentences: &[Vec<Token>],
    threads: Option<usize>,
) -> Result<Vec<SentenceAnalysis>> {
    match threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("Failed to build scoring thread pool")?;
            tracing::debug!(threads = n, sentences = sentences.len(), "scoring on dedicated pool");
            Ok(pool.install(|| analyzer.analyse_all(sentences)))
        }
        None => Ok(analyzer.analyse_all(sentences)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use vader_core::config::OutputFormat;
    use vader_core::ResourceTables;

    const LEXICON: &str = "good\t1.9\t0.9\t[2, 2]\nbad\t-2.5\t0.7\t[-3, -2]\nhappy\t2.7\t0.6\t[3, 3]\n";
    const IDIOMS: &str = "kiss of death,-1.5\n";

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lexicon.txt"), LEXICON).unwrap();
        fs::write(dir.path().join("idioms.txt"), IDIOMS).unwrap();
        dir
    }

    fn resource_args(dir: &Path) -> ResourceArgs {
        ResourceArgs {
            lexicon: Some(dir.join("lexicon.txt")),
            idioms: Some(dir.join("idioms.txt")),
        }
    }

    #[test]
    fn test_analyse_file_summary() {
        let dir = fixture_dir();
        let input = dir.path().join("input.txt");
        let mut f = fs::File::create(&input).unwrap();
        writeln!(f, "The movie was good. The ending was bad. It rained today.").unwrap();

        let runtime = RuntimeConfig {
            threads: Some(2),
            output_format: OutputFormat::Json,
        };
        let summary = analyse_file(&input, &resource_args(dir.path()), &runtime).unwrap();
        assert_eq!(summary.sentences, 3);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
    }

    #[test]
    fn test_missing_input_is_error() {
        let dir = fixture_dir();
        let err = analyse_file(
            &dir.path().join("nope.txt"),
            &resource_args(dir.path()),
            &RuntimeConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_missing_lexicon_is_error() {
        let dir = fixture_dir();
        let input = dir.path().join("input.txt");
        fs::write(&input, "Fine.").unwrap();
        let args = ResourceArgs {
            lexicon: Some(dir.path().join("absent.txt")),
            idioms: Some(dir.path().join("idioms.txt")),
        };
        assert!(analyse_file(&input, &args, &RuntimeConfig::default()).is_err());
    }

    #[test]
    fn test_pool_size_does_not_change_scores() {
        let analyzer = SentimentAnalyzer::new(ResourceTables::load(LEXICON, IDIOMS));
        let sentences = TextPipeline::new()
            .parse("So good!! Not very happy. Bad bad bad.")
            .unwrap();
        let single = score_batch(&analyzer, &sentences, Some(1)).unwrap();
        let global = score_batch(&analyzer, &sentences, None).unwrap();
        assert_eq!(single, global);
    }
}
