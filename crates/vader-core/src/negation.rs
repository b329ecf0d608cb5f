//! Negation scope detection.

use crate::resources::lists::NEGATION_EXCEPTIONS;
use crate::resources::ResourceTables;

/// Whether the word at `index` negates what follows it.
///
/// `words` is the punctuation-filtered sentence. A listed negation word
/// counts unless the next word turns it into an idiom ("don't know",
/// "can't feel"); any other word containing "n't" counts; "least" counts
/// after "at". Out-of-range indices are never negated.
pub fn negated(tables: &ResourceTables, words: &[&str], index: usize) -> bool {
    let Some(word) = words.get(index) else {
        return false;
    };
    let lower = word.to_lowercase();

    if tables.is_negation(&lower) {
        if let Some(next) = words.get(index + 1) {
            let next = next.to_lowercase();
            if NEGATION_EXCEPTIONS.contains(&next.as_str()) {
                return false;
            }
        }
        return true;
    }

    if lower.contains("n't") {
        return true;
    }

    lower == "least" && index > 0 && words[index - 1].eq_ignore_ascii_case("at")
}
