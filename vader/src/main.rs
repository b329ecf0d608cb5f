mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use vader_core::config::RuntimeConfig;
use vader_core::observability;

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse {
            file,
            resources,
            format,
            threads,
        } => {
            let runtime = RuntimeConfig::from_env().with_cli_overrides(threads, format);
            commands::analyse::analyse_file(&file, &resources, &runtime)?;
        }
        Commands::Score {
            text,
            resources,
            format,
        } => {
            let runtime = RuntimeConfig::from_env().with_cli_overrides(None, format);
            commands::score::score_text(&text, &resources, runtime.output_format)?;
        }
        Commands::Lexicon { resources } => {
            commands::lexicon::show_tables(&resources)?;
        }
    }

    Ok(())
}
