//! Word tokenization.
//!
//! Words keep inner apostrophes, hyphens and periods ("don't", "kind-of",
//! "3.5"); every other punctuation character becomes its own token, so "!!!"
//! yields three "!" tokens. Case is preserved.

use regex::Regex;
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| {
        Regex::new(r"\w+(?:[-'.]\w+)*|[^\w\s]").expect("word regex")
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        // typographic apostrophes would hide contractions from the lexicon
        let normalized = sentence.replace(['\u{2019}', '\u{2018}'], "'");
        word_re()
            .find_iter(&normalized)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
