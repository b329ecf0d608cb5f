//! CLI subcommands.
//!
//!   analyse: score every sentence of a file
//!   score:   score inline text or stdin
//!   lexicon: resource diagnostics
//!
//! Shared here: resource loading, output rendering, run summaries.

pub mod analyse;
pub mod lexicon;
pub mod score;

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde_json::json;
use vader_core::config::OutputFormat;
use vader_core::observability::RunSummary;
use vader_core::token::tokens_to_string;
use vader_core::{ResourcePaths, ResourceTables, SentenceAnalysis, SentimentAnalyzer, Token};

use crate::cli::ResourceArgs;

/// Compound at or above this counts as a positive sentence in summaries.
const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound at or below this counts as a negative sentence in summaries.
const NEGATIVE_THRESHOLD: f64 = -0.05;

pub(crate) fn resolve_paths(args: &ResourceArgs) -> ResourcePaths {
    ResourcePaths::resolve(args.lexicon.as_deref(), args.idioms.as_deref())
}

pub(crate) fn load_tables(args: &ResourceArgs) -> Result<ResourceTables> {
    let paths = resolve_paths(args);
    ResourceTables::from_paths(&paths).context("Failed to load sentiment resources")
}

pub(crate) fn load_analyzer(args: &ResourceArgs) -> Result<SentimentAnalyzer> {
    Ok(SentimentAnalyzer::new(load_tables(args)?))
}

/// Write one scored sentence in the requested format.
pub(crate) fn write_result<W: Write>(
    out: &mut W,
    format: OutputFormat,
    index: usize,
    sentence: &[Token],
    analysis: &SentenceAnalysis,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "sentence: {}", tokens_to_string(sentence))?;
            writeln!(out, "score: {}", analysis.score)
        }
        OutputFormat::Json => {
            let record = json!({
                "index": index,
                "sentence": tokens_to_string(sentence).trim_end(),
                "score": analysis.score,
            });
            writeln!(out, "{}", record)
        }
    }
}

pub(crate) fn write_all<W: Write>(
    out: &mut W,
    format: OutputFormat,
    sentences: &[Vec<Token>],
    results: &[SentenceAnalysis],
) -> io::Result<()> {
    for (i, (sentence, analysis)) in sentences.iter().zip(results).enumerate() {
        write_result(out, format, i, sentence, analysis)?;
    }
    out.flush()
}

pub(crate) fn summarize(source: &str, results: &[SentenceAnalysis], duration_ms: u64) -> RunSummary {
    let mut positive = 0;
    let mut negative = 0;
    let mut total = 0.0;
    for r in results {
        let c = r.score.compound;
        total += c;
        if c >= POSITIVE_THRESHOLD {
            positive += 1;
        } else if c <= NEGATIVE_THRESHOLD {
            negative += 1;
        }
    }
    let n = results.len();
    RunSummary {
        source: source.to_string(),
        sentences: n,
        positive,
        negative,
        neutral: n - positive - negative,
        mean_compound: if n == 0 { 0.0 } else { total / n as f64 },
        duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vader_core::token::sentence_from_words;
    use vader_core::VScore;

    fn analysis(compound: f64) -> SentenceAnalysis {
        SentenceAnalysis {
            score: VScore::new(0.5, 0.5, 0.0, compound),
            word_scores: Vec::new(),
        }
    }

    #[test]
    fn test_write_text() {
        let sentence = sentence_from_words("good day !");
        let mut buf = Vec::new();
        write_result(&mut buf, OutputFormat::Text, 0, &sentence, &analysis(0.4404)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out,
            "sentence: good day ! \nscore: {'neg': 0.000, 'neu': 0.500, 'pos': 0.500, 'compound': 0.4404}\n"
        );
    }

    #[test]
    fn test_write_json() {
        let sentence = sentence_from_words("good day");
        let mut buf = Vec::new();
        write_result(&mut buf, OutputFormat::Json, 7, &sentence, &analysis(0.25)).unwrap();
        let line = String::from_utf8(buf).unwrap();
        let v: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(v["index"], 7);
        assert_eq!(v["sentence"], "good day");
        assert_eq!(v["score"]["pos"], 0.5);
        assert_eq!(v["score"]["compound"], 0.25);
    }

    #[test]
    fn test_write_all_pairs_sentences_with_results() {
        let sentences = vec![sentence_from_words("a b"), sentence_from_words("c d")];
        let results = vec![analysis(0.1), analysis(-0.2)];
        let mut buf = Vec::new();
        write_all(&mut buf, OutputFormat::Json, &sentences, &results).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"index\":1"));
    }

    #[test]
    fn test_summarize_counts() {
        let results = vec![analysis(0.6), analysis(-0.4), analysis(0.0), analysis(0.05)];
        let s = summarize("doc.txt", &results, 5);
        assert_eq!(s.sentences, 4);
        assert_eq!(s.positive, 2);
        assert_eq!(s.negative, 1);
        assert_eq!(s.neutral, 1);
        assert!((s.mean_compound - 0.0625).abs() < 1e-12);
        assert_eq!(s.duration_ms, 5);
    }

    #[test]
    fn test_summarize_empty() {
        let s = summarize("-", &[], 0);
        assert_eq!(s.sentences, 0);
        assert_eq!(s.mean_compound, 0.0);
    }
}
