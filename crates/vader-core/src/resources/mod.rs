//! Lookup tables used by the scorer.
//!
//! The lexicon and idiom map come from resource files; the booster map and
//! negation set are built from fixed lists. All four are immutable once a
//! [`ResourceTables`] exists, so one instance can back any number of
//! concurrent scoring calls.

pub mod lists;
pub mod loader;
pub mod paths;

use std::collections::{HashMap, HashSet};

use crate::error::{ResourceKind, Result};

pub use loader::LoadReport;
pub use paths::ResourcePaths;

#[derive(Debug, Clone)]
pub struct ResourceTables {
    lexicon: HashMap<String, f64>,
    idioms: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
    report: LoadReport,
}

impl ResourceTables {
    /// Build the tables from already-parsed `(word, valence)` and
    /// `(phrase, valence)` entries.
    pub fn from_entries<L, I, S, T>(lexicon: L, idioms: I) -> Self
    where
        L: IntoIterator<Item = (S, f64)>,
        I: IntoIterator<Item = (T, f64)>,
        S: Into<String>,
        T: Into<String>,
    {
        let lexicon: HashMap<String, f64> =
            lexicon.into_iter().map(|(w, v)| (w.into(), v)).collect();
        let idioms: HashMap<String, f64> =
            idioms.into_iter().map(|(p, v)| (p.into(), v)).collect();
        let report = LoadReport {
            lexicon_entries: lexicon.len(),
            idiom_entries: idioms.len(),
            ..LoadReport::default()
        };
        Self {
            lexicon,
            idioms,
            boosters: booster_map(),
            negations: negation_set(),
            report,
        }
    }

    /// Parse the raw lexicon (TSV) and idiom (CSV) texts.
    pub fn load(lexicon_text: &str, idiom_text: &str) -> Self {
        let (lexicon, skipped_lexicon) = loader::parse_lexicon(lexicon_text);
        let (idioms, skipped_idioms) = loader::parse_idioms(idiom_text);
        let mut tables = Self::from_entries(lexicon, idioms);
        tables.report.skipped_lexicon = skipped_lexicon;
        tables.report.skipped_idioms = skipped_idioms;
        tables
    }

    /// Read and parse both resource files. A missing file is fatal.
    pub fn from_paths(paths: &ResourcePaths) -> Result<Self> {
        let lexicon_text = loader::read_resource(ResourceKind::Lexicon, &paths.lexicon)?;
        let idiom_text = loader::read_resource(ResourceKind::Idioms, &paths.idioms)?;
        let tables = Self::load(&lexicon_text, &idiom_text);
        tracing::info!(
            lexicon = tables.report.lexicon_entries,
            idioms = tables.report.idiom_entries,
            skipped_lexicon = tables.report.skipped_lexicon,
            skipped_idioms = tables.report.skipped_idioms,
            "loaded sentiment resources"
        );
        if tables.report.is_sparse() {
            tracing::warn!(
                path = %paths.lexicon.display(),
                entries = tables.report.lexicon_entries,
                "lexicon has fewer than {} entries; most words will score neutral",
                loader::SPARSE_LEXICON_ENTRIES
            );
        }
        Ok(tables)
    }

    /// Mean valence of a lowercase word.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word).copied()
    }

    pub fn in_lexicon(&self, word: &str) -> bool {
        self.lexicon.contains_key(word)
    }

    pub fn idiom(&self, phrase: &str) -> Option<f64> {
        self.idioms.get(phrase).copied()
    }

    /// Signed booster scalar of a lowercase word or phrase.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    pub fn is_booster(&self, word: &str) -> bool {
        self.boosters.contains_key(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }
}

fn booster_map() -> HashMap<String, f64> {
    lists::BOOSTER_INCREMENTS
        .iter()
        .map(|w| (w.to_string(), lists::B_INCR))
        .chain(
            lists::BOOSTER_DECREMENTS
                .iter()
                .map(|w| (w.to_string(), lists::B_DECR)),
        )
        .collect()
}

fn negation_set() -> HashSet<String> {
    lists::NEGATE.iter().map(|w| w.to_string()).collect()
}
