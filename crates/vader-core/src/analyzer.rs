//! Scoring entry point.

use rayon::prelude::*;
use serde::Serialize;

use crate::aggregate::aggregate;
use crate::modifiers::is_all_cap_differential;
use crate::resources::ResourceTables;
use crate::score::VScore;
use crate::token::{filter_punctuation, Token};
use crate::valence::token_valences;

/// Score of one sentence plus the valence each token contributed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentenceAnalysis {
    pub score: VScore,
    /// Parallel to the input sentence; filtered-out tokens score 0.0.
    /// Values are taken before the "but" reweighting.
    pub word_scores: Vec<f64>,
}

/// Scores sentences against a fixed set of [`ResourceTables`].
///
/// Holds no per-sentence state, so one analyzer can be shared by reference
/// across threads.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    tables: ResourceTables,
}

impl SentimentAnalyzer {
    pub fn new(tables: ResourceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ResourceTables {
        &self.tables
    }

    /// Score a tokenized sentence. An empty sentence yields a zero score.
    pub fn analyse_sentence(&self, sentence: &[Token]) -> VScore {
        self.analyse_detailed(sentence).score
    }

    pub fn analyse_detailed(&self, sentence: &[Token]) -> SentenceAnalysis {
        if sentence.is_empty() {
            return SentenceAnalysis::default();
        }

        let caps_differential = is_all_cap_differential(sentence);
        let kept = filter_punctuation(sentence);
        let words: Vec<&str> = kept.iter().map(|&i| sentence[i].value.as_str()).collect();
        let valences = token_valences(&self.tables, &words, caps_differential);

        let mut word_scores = vec![0.0; sentence.len()];
        for (&pos, &v) in kept.iter().zip(&valences) {
            word_scores[pos] = v;
        }

        let score = aggregate(&valences, sentence);
        tracing::trace!(
            tokens = sentence.len(),
            scored = words.len(),
            compound = score.compound,
            "scored sentence"
        );
        SentenceAnalysis { score, word_scores }
    }

    /// Score independent sentences in parallel; output order matches input.
    pub fn analyse_all(&self, sentences: &[Vec<Token>]) -> Vec<SentenceAnalysis> {
        sentences
            .par_iter()
            .map(|s| self.analyse_detailed(s))
            .collect()
    }
}
