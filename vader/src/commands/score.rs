//! `vader score`: score inline text or stdin.

use std::io::{self, Read};

use anyhow::{Context, Result};
use vader_core::config::OutputFormat;
use vader_core::SentenceAnalysis;
use vader_nlp::TextPipeline;

use super::{load_analyzer, write_all};
use crate::cli::ResourceArgs;

pub fn score_text(text: &str, resources: &ResourceArgs, format: OutputFormat) -> Result<Vec<SentenceAnalysis>> {
    let text = if text == "-" {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .context("Failed to read text from stdin")?;
        s
    } else {
        text.to_string()
    };

    let analyzer = load_analyzer(resources)?;
    let sentences = TextPipeline::new().parse(&text)?;
    let results = analyzer.analyse_all(&sentences);
    tracing::debug!(sentences = sentences.len(), "scored inline text");

    let stdout = io::stdout();
    write_all(&mut stdout.lock(), format, &sentences, &results).context("Failed to write results")?;
    Ok(results)
}
