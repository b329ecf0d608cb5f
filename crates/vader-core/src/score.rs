//! Sentence-level sentiment score.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Proportions of positive, neutral and negative sentiment (summing to 1.0,
/// or all 0.0 for a sentence with nothing to score) plus the normalized
/// compound polarity in (-1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VScore {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

impl VScore {
    pub fn new(positive: f64, neutral: f64, negative: f64, compound: f64) -> Self {
        Self {
            negative,
            neutral,
            positive,
            compound,
        }
    }
}

impl fmt::Display for VScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'neg': {:.3}, 'neu': {:.3}, 'pos': {:.3}, 'compound': {:.4}}}",
            self.negative, self.neutral, self.positive, self.compound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let score = VScore::new(0.5, 0.25, 0.25, 0.43);
        assert_eq!(
            score.to_string(),
            "{'neg': 0.250, 'neu': 0.250, 'pos': 0.500, 'compound': 0.4300}"
        );
        assert_eq!(
            VScore::default().to_string(),
            "{'neg': 0.000, 'neu': 0.000, 'pos': 0.000, 'compound': 0.0000}"
        );
    }

    #[test]
    fn test_serialize_keys() {
        let json = serde_json::to_string(&VScore::new(0.1, 0.9, 0.0, 0.2)).unwrap();
        assert_eq!(json, r#"{"neg":0.0,"neu":0.9,"pos":0.1,"compound":0.2}"#);
        let back: VScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.positive, 0.1);
    }
}
