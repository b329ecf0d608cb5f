use thiserror::Error;

/// Contract violations inside the text pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NlpError {
    #[error("unmatched words / tags in sentence {sentence}: {words} words, {tags} tags")]
    TagMismatch {
        sentence: usize,
        words: usize,
        tags: usize,
    },
}
