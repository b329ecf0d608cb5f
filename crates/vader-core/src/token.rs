//! Sentence tokens and the punctuation filter applied before scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single word or punctuation mark with its part-of-speech tag.
///
/// The tag is carried through for display only; scoring never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub pos_tag: String,
}

impl Token {
    pub fn new(value: impl Into<String>, pos_tag: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            pos_tag: pos_tag.into(),
        }
    }

    /// Token without a tag.
    pub fn word(value: impl Into<String>) -> Self {
        Self::new(value, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.value, self.pos_tag)
    }
}

/// Build an untagged sentence from whitespace-separated text.
pub fn sentence_from_words(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::word).collect()
}

/// Values joined by spaces, each followed by one space.
pub fn tokens_to_string(sentence: &[Token]) -> String {
    let mut out = String::new();
    for token in sentence {
        out.push_str(&token.value);
        out.push(' ');
    }
    out
}

/// Drop every token whose value is at most one character long.
///
/// This removes punctuation and also single-letter words such as "a" and "I".
/// Returns the positions (in `sentence`) of the kept tokens.
pub fn filter_punctuation(sentence: &[Token]) -> Vec<usize> {
    sentence
        .iter()
        .enumerate()
        .filter(|(_, t)| t.value.chars().count() > 1)
        .map(|(i, _)| i)
        .collect()
}
