//! Sentence aggregation: "but" reweighting, punctuation emphasis,
//! normalization and the pos/neu/neg split.

use crate::score::VScore;
use crate::token::Token;

/// Normalization constant approximating the maximum expected score.
pub const ALPHA: f64 = 15.0;
/// Mean intensity increase per exclamation mark.
pub const EXCLAMATION_INCR: f64 = 0.292;
pub const MAX_EXCLAMATIONS: usize = 4;
/// Mean intensity increase per question mark when there are two or three.
pub const QUESTION_INCR: f64 = 0.18;
/// Fixed increase for four or more question marks.
pub const QUESTION_MAX: f64 = 0.96;
pub const BEFORE_BUT_WEIGHT: f64 = 0.5;
pub const AFTER_BUT_WEIGHT: f64 = 1.5;

/// Map a raw sum into (-1, 1).
pub fn normalize(score: f64) -> f64 {
    score / (score * score + ALPHA).sqrt()
}

/// Position of the first exact "but" or "BUT" token.
pub fn but_index(sentence: &[Token]) -> Option<usize> {
    sentence
        .iter()
        .position(|t| t.value == "but" || t.value == "BUT")
}

/// Halve valences before `but_at`, boost those after it by half.
///
/// `but_at` indexes the unfiltered sentence while `valences` follows the
/// filtered one; the two are compared position for position.
pub fn apply_but(valences: &[f64], but_at: usize) -> Vec<f64> {
    valences
        .iter()
        .enumerate()
        .map(|(j, v)| match j.cmp(&but_at) {
            std::cmp::Ordering::Less => v * BEFORE_BUT_WEIGHT,
            std::cmp::Ordering::Greater => v * AFTER_BUT_WEIGHT,
            std::cmp::Ordering::Equal => *v,
        })
        .collect()
}

fn count_tokens(sentence: &[Token], mark: &str) -> usize {
    sentence.iter().filter(|t| t.value == mark).count()
}

/// Emphasis from "!" tokens, capped at four.
pub fn exclamation_amplifier(sentence: &[Token]) -> f64 {
    count_tokens(sentence, "!").min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_INCR
}

/// Emphasis from "?" tokens; a single question mark adds nothing.
pub fn question_amplifier(sentence: &[Token]) -> f64 {
    match count_tokens(sentence, "?") {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    }
}

/// Push `sum` away from zero by `amount`; zero stays zero.
fn amplify(sum: f64, amount: f64) -> f64 {
    if sum > 0.0 {
        sum + amount
    } else if sum < 0.0 {
        sum - amount
    } else {
        sum
    }
}

/// Combine per-token valences (of the filtered sentence) into a [`VScore`].
/// `sentence` is the original, unfiltered token sequence.
pub fn aggregate(valences: &[f64], sentence: &[Token]) -> VScore {
    let sentiments = match but_index(sentence) {
        Some(b) => apply_but(valences, b),
        None => valences.to_vec(),
    };

    let em_amplifier = exclamation_amplifier(sentence);
    let qm_amplifier = question_amplifier(sentence);

    // fold from +0.0: an empty f64 sum is -0.0
    let sum = sentiments.iter().fold(0.0, |acc, v| acc + v);
    let sum = amplify(sum, em_amplifier);
    let sum = amplify(sum, qm_amplifier);
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neutral_count = 0.0;
    for &s in &sentiments {
        // the +/-1 compensates for neutral words being counted as 1
        if s > 0.0 {
            pos_sum += s + 1.0;
        }
        if s < 0.0 {
            neg_sum += s - 1.0;
        }
        if s == 0.0 {
            neutral_count += 1.0;
        }
    }

    if pos_sum > neg_sum.abs() {
        pos_sum += qm_amplifier + em_amplifier;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= qm_amplifier + em_amplifier;
    }

    let total = pos_sum + neg_sum.abs() + neutral_count;
    if total > 0.0 {
        VScore::new(
            (pos_sum / total).abs(),
            (neutral_count / total).abs(),
            (neg_sum / total).abs(),
            compound,
        )
    } else {
        VScore::new(0.0, 0.0, 0.0, compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::sentence_from_words;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_positive_word() {
        let score = aggregate(&[1.9], &sentence_from_words("good"));
        assert!((score.compound - 1.9 / (1.9f64 * 1.9 + 15.0).sqrt()).abs() < EPS);
        assert!((score.positive - 1.0).abs() < EPS);
        assert_eq!(score.neutral, 0.0);
        assert_eq!(score.negative, 0.0);
    }

    #[test]
    fn test_mixed_ratios() {
        // pos = 2.9, neg = -3.5, neutral = 1, total = 7.4
        let score = aggregate(&[1.9, 0.0, -2.5], &sentence_from_words("good and bad"));
        assert!((score.positive - 2.9 / 7.4).abs() < EPS);
        assert!((score.neutral - 1.0 / 7.4).abs() < EPS);
        assert!((score.negative - 3.5 / 7.4).abs() < EPS);
        assert!((score.compound - normalize(-0.6)).abs() < EPS);
    }

    #[test]
    fn test_empty_sentence_is_zero() {
        assert_eq!(aggregate(&[], &[]), VScore::default());
    }

    #[test]
    fn test_only_short_tokens_is_positive_zero() {
        let score = aggregate(&[], &sentence_from_words("I !"));
        assert!(!score.compound.is_sign_negative());
        assert_eq!(
            score.to_string(),
            "{'neg': 0.000, 'neu': 0.000, 'pos': 0.000, 'compound': 0.0000}"
        );
        assert_eq!(
            serde_json::to_string(&score).unwrap(),
            r#"{"neg":0.0,"neu":0.0,"pos":0.0,"compound":0.0}"#
        );
    }

    #[test]
    fn test_neutral_sentence() {
        let score = aggregate(&[0.0, 0.0], &sentence_from_words("the table"));
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.neutral, 1.0);
        assert_eq!(score.positive, 0.0);
    }

    #[test]
    fn test_but_reweighting() {
        let sentence = sentence_from_words("good but bad");
        assert_eq!(but_index(&sentence), Some(1));
        let score = aggregate(&[1.9, 0.0, -2.5], &sentence);
        assert!((score.compound - normalize(1.9 * 0.5 - 2.5 * 1.5)).abs() < EPS);
        // only exact "but" / "BUT" count
        assert_eq!(but_index(&sentence_from_words("good But bad")), None);
        assert_eq!(but_index(&sentence_from_words("good BUT bad")), Some(1));
    }

    #[test]
    fn test_apply_but_leaves_but_position() {
        assert_eq!(apply_but(&[2.0, 4.0, 2.0], 1), vec![1.0, 4.0, 3.0]);
    }

    #[test]
    fn test_exclamations_capped() {
        let four = aggregate(&[1.9], &sentence_from_words("good ! ! ! !"));
        let ten = aggregate(&[1.9], &sentence_from_words("good ! ! ! ! ! ! ! ! ! !"));
        assert_eq!(four, ten);
        assert!((four.compound - normalize(1.9 + 4.0 * 0.292)).abs() < EPS);
        assert!((exclamation_amplifier(&sentence_from_words("! ! ! ! ! ! ! ! ! !")) - 1.168).abs() < EPS);
    }

    #[test]
    fn test_exclamation_on_negative_and_neutral() {
        let neg = aggregate(&[-2.5], &sentence_from_words("bad !"));
        assert!((neg.compound - normalize(-2.5 - 0.292)).abs() < EPS);
        let neutral = aggregate(&[0.0], &sentence_from_words("table !"));
        assert_eq!(neutral.compound, 0.0);
    }

    #[test]
    fn test_question_marks() {
        assert_eq!(question_amplifier(&sentence_from_words("good ?")), 0.0);
        assert!((question_amplifier(&sentence_from_words("good ? ?")) - 0.36).abs() < EPS);
        assert!((question_amplifier(&sentence_from_words("good ? ? ?")) - 0.54).abs() < EPS);
        assert!((question_amplifier(&sentence_from_words("good ? ? ? ? ?")) - 0.96).abs() < EPS);
        let score = aggregate(&[1.9], &sentence_from_words("good ? ?"));
        assert!((score.compound - normalize(1.9 + 0.36)).abs() < EPS);
    }

    #[test]
    fn test_amplifiers_move_ratio_toward_dominant_side() {
        // pos = 2.9 and neg = -3.5, so the "!" emphasis goes to neg
        let score = aggregate(&[1.9, -2.5], &sentence_from_words("good bad !"));
        let pos = 2.9;
        let neg = 3.5 + 0.292;
        let total = pos + neg;
        assert!((score.positive - pos / total).abs() < EPS);
        assert!((score.negative - neg / total).abs() < EPS);
    }

    #[test]
    fn test_normalize_bounds() {
        for x in [-1e6, -40.0, -1.0, 0.0, 0.5, 12.0, 1e6] {
            let n = normalize(x);
            assert!(n > -1.0 && n < 1.0, "normalize({x}) = {n}");
        }
    }
}
