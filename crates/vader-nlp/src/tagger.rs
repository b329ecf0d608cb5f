//! Coarse part-of-speech tags.
//!
//! The scorer never reads tags; they exist for display and export. Tags
//! borrow Penn Treebank names: `.` sentence-final punctuation, `,` other
//! punctuation, `CD` numbers, `NNP` capitalized words after the first
//! token, `NN` everything else.

use regex::Regex;
use std::sync::OnceLock;

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn is_number(word: &str) -> bool {
    let re = NUMBER_RE.get_or_init(|| Regex::new(r"^\d+(?:[.,]\d+)*$").expect("number regex"));
    re.is_match(word)
}

fn tag_word(word: &str, index: usize) -> &'static str {
    if matches!(word, "." | "!" | "?") {
        return ".";
    }
    if word.chars().all(|c| !c.is_alphanumeric()) {
        return ",";
    }
    if is_number(word) {
        return "CD";
    }
    if index > 0 && word.chars().next().is_some_and(char::is_uppercase) {
        return "NNP";
    }
    "NN"
}

/// One tag per word, in order.
pub fn tag(words: &[String]) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| tag_word(w, i).to_string())
        .collect()
}
