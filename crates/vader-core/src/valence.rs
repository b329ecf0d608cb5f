//! Per-token valence cascade.
//!
//! Each sentiment-bearing word starts from its lexicon valence and is then
//! adjusted by up to three preceding words (boosters, negations, "never",
//! "least") and by idioms starting at the word itself. The constants are
//! empirically derived and must not be tuned.

use crate::modifiers::{is_upper, scalar_inc_dec, C_INCR};
use crate::negation::negated;
use crate::resources::lists::B_DECR;
use crate::resources::ResourceTables;

/// Multiplier applied to a negated valence.
pub const N_SCALAR: f64 = -0.74;
/// Booster weight at distance two.
pub const DISTANCE_2_WEIGHT: f64 = 0.95;
/// Booster weight at distance three.
pub const DISTANCE_3_WEIGHT: f64 = 0.9;
/// "never so/this" two words back.
pub const NEVER_AMPLIFIER_2: f64 = 1.5;
/// "never so/this" three words back.
pub const NEVER_AMPLIFIER_3: f64 = 1.25;
/// Longest idiom, in words.
pub const IDIOM_MAX_SIZE: usize = 5;

/// Case-insensitive comparison of the word at `index`; false out of range.
fn word_is(words: &[&str], index: usize, target: &str) -> bool {
    words
        .get(index)
        .is_some_and(|w| w.to_lowercase() == target)
}

fn word_is_any(words: &[&str], index: usize, targets: &[&str]) -> bool {
    targets.iter().any(|t| word_is(words, index, t))
}

fn in_lexicon_at(tables: &ResourceTables, words: &[&str], index: usize) -> bool {
    words
        .get(index)
        .is_some_and(|w| tables.in_lexicon(&w.to_lowercase()))
}

/// Valence of the word at `i` in the punctuation-filtered sentence `words`.
///
/// `caps_differential` is computed on the unfiltered sentence. Words that are
/// boosters, the "kind" of "kind of", or absent from the lexicon score 0.0.
pub fn token_valence(tables: &ResourceTables, words: &[&str], i: usize, caps_differential: bool) -> f64 {
    let Some(item) = words.get(i) else {
        return 0.0;
    };
    let lower = item.to_lowercase();

    if (lower == "kind" && word_is(words, i + 1, "of")) || tables.is_booster(&lower) {
        return 0.0;
    }

    let Some(mut v) = tables.valence(&lower) else {
        return 0.0;
    };

    if caps_differential && is_upper(item) {
        if v > 0.0 {
            v += C_INCR;
        } else {
            v -= C_INCR;
        }
    }

    if i > 0 && !in_lexicon_at(tables, words, i - 1) {
        v += scalar_inc_dec(tables, words[i - 1], v, caps_differential);
    }

    if i > 1 && !in_lexicon_at(tables, words, i - 2) {
        let s2 = scalar_inc_dec(tables, words[i - 2], v, caps_differential);
        v += s2 * DISTANCE_2_WEIGHT;

        // "never so good": never amplifies instead of negating
        if word_is(words, i - 2, "never") && word_is_any(words, i - 1, &["so", "this"]) {
            v *= NEVER_AMPLIFIER_2;
        } else if negated(tables, words, i - 2) {
            v *= N_SCALAR;
        }
    }

    if i > 2 && !in_lexicon_at(tables, words, i - 3) {
        let s3 = scalar_inc_dec(tables, words[i - 3], v, caps_differential);
        v += s3 * DISTANCE_3_WEIGHT;

        if word_is(words, i - 3, "never")
            && (word_is_any(words, i - 2, &["so", "this"]) || word_is_any(words, i - 1, &["so", "this"]))
        {
            v *= NEVER_AMPLIFIER_3;
        } else if negated(tables, words, i - 3) {
            v *= N_SCALAR;
        }

        v = idiom_valence(tables, words, i, v);
    }

    // "least" negates unless it is "at least" / "very least"
    if i > 1 && !in_lexicon_at(tables, words, i - 1) && word_is(words, i - 1, "least") {
        if !word_is(words, i - 2, "at") && !word_is(words, i - 2, "very") {
            v *= N_SCALAR;
        }
    } else if i > 0 && !in_lexicon_at(tables, words, i - 1) && word_is(words, i - 1, "least") {
        v *= N_SCALAR;
    }

    v
}

/// Grow a phrase one word at a time from position `i`. A phrase that is an
/// idiom replaces the valence; one that is a booster phrase dampens it.
///
/// The window is bounded by the sentence length, not by the words left after
/// `i`; positions past the end contribute an empty word.
fn idiom_valence(tables: &ResourceTables, words: &[&str], i: usize, mut v: f64) -> f64 {
    let mut idiom = String::new();
    for k in 0..IDIOM_MAX_SIZE.min(words.len()) {
        if let Some(w) = words.get(i + k) {
            idiom.push_str(&w.to_lowercase());
        }
        if let Some(value) = tables.idiom(&idiom) {
            v = value;
        }
        if tables.is_booster(&idiom) {
            v += B_DECR;
        }
        idiom.push(' ');
    }
    v
}

/// Valences for every word of a punctuation-filtered sentence.
pub fn token_valences(tables: &ResourceTables, words: &[&str], caps_differential: bool) -> Vec<f64> {
    (0..words.len())
        .map(|i| token_valence(tables, words, i, caps_differential))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn tables() -> ResourceTables {
        ResourceTables::from_entries(
            [
                ("good", 1.9),
                ("bad", -2.5),
                ("happy", 2.7),
                ("kind", 2.4),
                ("kiss", 1.8),
                ("death", -2.9),
            ],
            [("kiss of death", -1.5), ("cut the mustard", 2.0)],
        )
    }

    fn valences(text: &str, caps: bool) -> Vec<f64> {
        let words: Vec<&str> = text.split_whitespace().collect();
        token_valences(&tables(), &words, caps)
    }

    fn last(text: &str) -> f64 {
        *valences(text, false).last().unwrap()
    }

    #[test]
    fn test_plain_lexicon_word() {
        assert!((last("good") - 1.9).abs() < EPS);
        assert_eq!(valences("the table", false), vec![0.0, 0.0]);
    }

    #[test]
    fn test_booster_at_distance_one() {
        assert!((last("very good") - 2.193).abs() < EPS);
        assert!((last("slightly bad") - (-2.207)).abs() < EPS);
        // the booster itself carries no sentiment
        assert_eq!(valences("very good", false)[0], 0.0);
    }

    #[test]
    fn test_booster_at_distance_two() {
        // 1.9 + 0.293, then + 0.95 * 0.293
        let expected = 2.193 + 0.293 * 0.95;
        assert!((last("really very good") - expected).abs() < EPS);
    }

    #[test]
    fn test_adjacent_lexicon_word_blocks_modifier() {
        assert!((last("happy good") - 1.9).abs() < EPS);
    }

    #[test]
    fn test_negation_at_distance_two() {
        assert!((last("not very good") - 2.193 * -0.74).abs() < EPS);
        assert!((last("don't know good") - 1.9).abs() < EPS);
    }

    #[test]
    fn test_negation_at_distance_three() {
        assert!((last("not in the good") - 1.9 * -0.74).abs() < EPS);
    }

    #[test]
    fn test_never_amplifies() {
        assert!((last("never so good") - 2.193 * 1.5).abs() < EPS);
        // "so" two back boosts first, "never" three back then amplifies
        assert!((last("never so much good") - (1.9 + 0.293 * 0.95) * 1.25).abs() < EPS);
    }

    #[test]
    fn test_kind_of_is_skipped() {
        let v = valences("kind of good", false);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 0.0);
        assert!((v[2] - 1.9).abs() < EPS);
        assert!((valences("kind people", false)[0] - 2.4).abs() < EPS);
    }

    #[test]
    fn test_least() {
        assert!((last("least good") - 1.9 * -0.74).abs() < EPS);
        assert!((last("at least good") - 1.9).abs() < EPS);
        // "very" still boosts from two words back
        assert!((last("very least good") - (1.9 + 0.293 * 0.95)).abs() < EPS);
        assert!((last("the least good") - 1.9 * -0.74).abs() < EPS);
    }

    #[test]
    fn test_caps_emphasis() {
        let words = ["the", "food", "is", "GOOD"];
        assert!((token_valence(&tables(), &words, 3, true) - 2.633).abs() < EPS);
        assert!((token_valence(&tables(), &words, 3, false) - 1.9).abs() < EPS);
        let words = ["the", "food", "is", "BAD"];
        assert!((token_valence(&tables(), &words, 3, true) - (-3.233)).abs() < EPS);
    }

    #[test]
    fn test_idiom_overrides_word() {
        let v = valences("they say it was the kiss of death", false);
        assert!((v[5] - (-1.5)).abs() < EPS);
        assert!((v[7] - (-2.9)).abs() < EPS);
    }

    #[test]
    fn test_idiom_needs_three_preceding_words() {
        // too close to the sentence start for the idiom scan
        let v = valences("the kiss of death", false);
        assert!((v[1] - 1.8).abs() < EPS);
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(token_valence(&tables(), &["good"], 3, false), 0.0);
    }
}
