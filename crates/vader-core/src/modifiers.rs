//! Degree modifiers and ALLCAPS emphasis.

use crate::resources::ResourceTables;
use crate::token::Token;

/// Empirically derived mean intensity increase for an ALLCAPS word
/// in an otherwise mixed-case sentence.
pub const C_INCR: f64 = 0.733;

/// True when `word` contains no character in `a..=z`.
///
/// Digits, punctuation and non-ASCII letters all count as upper.
pub fn is_upper(word: &str) -> bool {
    !word.chars().any(|c| c.is_ascii_lowercase())
}

/// True when some, but not all, tokens of the sentence are uppercase.
pub fn is_all_cap_differential(sentence: &[Token]) -> bool {
    let caps = sentence.iter().filter(|t| is_upper(&t.value)).count();
    let differential = sentence.len() - caps;
    differential > 0 && differential < sentence.len()
}

/// Booster scalar contributed by `word` to a sentiment word whose current
/// valence is `valence`. Zero when `word` is not a booster.
///
/// The scalar follows the sign of `valence`; an uppercase booster in a
/// mixed-case sentence adds a further [`C_INCR`] in the same direction.
pub fn scalar_inc_dec(tables: &ResourceTables, word: &str, valence: f64, caps_differential: bool) -> f64 {
    let Some(mut scalar) = tables.booster(&word.to_lowercase()) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar *= -1.0;
    }
    if is_upper(word) && caps_differential {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}
