//! `vader lexicon`: resource diagnostics.

use anyhow::Result;
use vader_core::LoadReport;

use super::{load_tables, resolve_paths};
use crate::cli::ResourceArgs;

pub fn show_tables(resources: &ResourceArgs) -> Result<LoadReport> {
    let paths = resolve_paths(resources);
    let report = load_tables(resources)?.report();
    print!("{}", render_report(&paths.lexicon.display().to_string(), &paths.idioms.display().to_string(), &report));
    Ok(report)
}

fn render_report(lexicon: &str, idioms: &str, report: &LoadReport) -> String {
    let mut out = format!(
        "lexicon: {}\n  entries: {}\n  skipped: {}\nidioms:  {}\n  entries: {}\n  skipped: {}\n",
        lexicon,
        report.lexicon_entries,
        report.skipped_lexicon,
        idioms,
        report.idiom_entries,
        report.skipped_idioms
    );
    if report.is_sparse() {
        out.push_str("warning: lexicon looks like a sample; supply the full VADER lexicon with --lexicon\n");
    }
    out
}
