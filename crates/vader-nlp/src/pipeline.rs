//! Full text → sentences of tagged tokens.

use vader_core::Token;

use crate::error::NlpError;
use crate::sentence::SentenceSplitter;
use crate::tagger;
use crate::tokenize::WordTokenizer;

#[derive(Debug, Clone, Default)]
pub struct TextPipeline {
    splitter: SentenceSplitter,
    tokenizer: WordTokenizer,
}

impl TextPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `text` into sentences of tagged tokens in text order.
    ///
    /// Fails if the tagger does not return exactly one tag per word.
    pub fn parse(&self, text: &str) -> Result<Vec<Vec<Token>>, NlpError> {
        let sentences = self.splitter.split(text);
        tracing::debug!(sentences = sentences.len(), "split text into sentences");

        sentences
            .iter()
            .enumerate()
            .map(|(idx, s)| {
                let words = self.tokenizer.tokenize(s);
                let tags = tagger::tag(&words);
                zip_tagged(idx, words, tags)
            })
            .collect()
    }

    /// Tokenize and tag a single sentence without boundary detection.
    pub fn parse_sentence(&self, sentence: &str) -> Result<Vec<Token>, NlpError> {
        let words = self.tokenizer.tokenize(sentence);
        let tags = tagger::tag(&words);
        zip_tagged(0, words, tags)
    }
}

fn zip_tagged(sentence: usize, words: Vec<String>, tags: Vec<String>) -> Result<Vec<Token>, NlpError> {
    if words.len() != tags.len() {
        return Err(NlpError::TagMismatch {
            sentence,
            words: words.len(),
            tags: tags.len(),
        });
    }
    Ok(words
        .into_iter()
        .zip(tags)
        .map(|(w, t)| Token::new(w, t))
        .collect())
}
