//! Parsers for the lexicon (TSV) and idiom (CSV) resource files.
//!
//! Malformed rows never abort a load: they are skipped and counted.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ResourceKind, Result, VaderError};

/// Minimum number of tab-separated fields in a lexicon row
/// (word, mean valence, standard deviation, ...).
const LEXICON_MIN_FIELDS: usize = 3;
/// Exact number of comma-separated fields in an idiom row.
const IDIOM_FIELDS: usize = 2;
/// The full VADER lexicon has about 7,500 rows; fewer than this is a sample.
pub const SPARSE_LEXICON_ENTRIES: usize = 1000;

/// Counts of rows dropped while parsing the resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lexicon_entries: usize,
    pub idiom_entries: usize,
    pub skipped_lexicon: usize,
    pub skipped_idioms: usize,
}

impl LoadReport {
    /// True when the lexicon is too small to score real prose.
    pub fn is_sparse(&self) -> bool {
        self.lexicon_entries < SPARSE_LEXICON_ENTRIES
    }
}

/// Split on `sep`, dropping trailing empty fields ("a\tb\t\t" has two fields).
fn split_fields(line: &str, sep: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(sep).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// Parse lexicon text: `word<TAB>mean<TAB>stddev<TAB>ratings`.
///
/// Blank lines count as short rows. Returns the word → valence map and the
/// number of skipped rows.
pub fn parse_lexicon(text: &str) -> (HashMap<String, f64>, usize) {
    let mut lexicon = HashMap::new();
    let mut skipped = 0;
    for line in text.lines() {
        let fields = split_fields(line, '\t');
        if fields.len() < LEXICON_MIN_FIELDS {
            tracing::debug!("skipping invalid lexicon line: {}", line);
            skipped += 1;
            continue;
        }
        match fields[1].trim().parse::<f64>() {
            Ok(valence) => {
                lexicon.insert(fields[0].trim().to_string(), valence);
            }
            Err(e) => {
                tracing::warn!("skipping lexicon line with bad valence ({}): {}", e, line);
                skipped += 1;
            }
        }
    }
    (lexicon, skipped)
}

/// Parse idiom text: `phrase,valence`. Rows without exactly two fields,
/// blank lines included, are dropped without a diagnostic.
pub fn parse_idioms(text: &str) -> (HashMap<String, f64>, usize) {
    let mut idioms = HashMap::new();
    let mut skipped = 0;
    for line in text.lines() {
        let fields = split_fields(line, ',');
        if fields.len() != IDIOM_FIELDS {
            skipped += 1;
            continue;
        }
        match fields[1].trim().parse::<f64>() {
            Ok(valence) => {
                idioms.insert(fields[0].trim().to_string(), valence);
            }
            Err(e) => {
                tracing::warn!("skipping idiom line with bad valence ({}): {}", e, line);
                skipped += 1;
            }
        }
    }
    (idioms, skipped)
}

/// Read a resource file, mapping a missing file to [`VaderError::ResourceMissing`].
pub fn read_resource(kind: ResourceKind, path: &Path) -> Result<String> {
    tracing::debug!("loading {} from {}", kind, path.display());
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            VaderError::ResourceMissing {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            VaderError::Io {
                kind,
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
