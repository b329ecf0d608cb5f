use std::path::PathBuf;

use clap::{Parser, Subcommand};
use vader_core::config::OutputFormat;

/// Vader - rule-based sentence sentiment scoring
#[derive(Parser, Debug)]
#[command(name = "vader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Resource file overrides shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// Sentiment lexicon file (default: from env or resources dir)
    #[arg(long, value_name = "PATH")]
    pub lexicon: Option<PathBuf>,

    /// Idiom table file (default: from env or resources dir)
    #[arg(long, value_name = "PATH")]
    pub idioms: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every sentence of a text file
    Analyse {
        /// Text file to analyse
        #[arg(long, short = 'f', value_name = "PATH")]
        file: PathBuf,

        #[command(flatten)]
        resources: ResourceArgs,

        /// Output format: text or json (default: from env or text)
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Worker threads for batch scoring (default: from env or all cores)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Score inline text. Use "-" to read from stdin
    Score {
        #[arg(value_name = "TEXT")]
        text: String,

        #[command(flatten)]
        resources: ResourceArgs,

        /// Output format: text or json (default: from env or text)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Load the lexicon and idiom tables and report their sizes
    Lexicon {
        #[command(flatten)]
        resources: ResourceArgs,
    },
}
