pub mod lemma;
pub mod stopwords;

use std::fmt::{self, Debug};
use std::sync::Arc;

use rayon::prelude::*;

use self::lemma::{Lemmatizer, NoopLemmatizer, NounLemmatizer};
use self::stopwords::StopWords;

/// Text normalizer
/// Turns raw ingredient / menu text into a sequence of terms.
///
/// Steps, per whitespace separated word of the lowercased text:
/// - drop it if it is a stopword or contains a numeric character
/// - strip leading/trailing ASCII punctuation
/// - lemmatize
/// - keep the result if it is non-empty and not a stopword
///
/// Normalizing the joined output again yields the same terms.
#[derive(Clone)]
pub struct TextNormalizer {
    stopwords: StopWords,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl TextNormalizer {
    /// English stopwords + menu boilerplate, noun lemmatization.
    pub fn new() -> Self {
        Self {
            stopwords: StopWords::default(),
            lemmatizer: Arc::new(NounLemmatizer::new()),
        }
    }

    pub fn with_stopwords(mut self, stopwords: StopWords) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    /// Turn lemmatization off (terms are only lowercased and stripped).
    pub fn without_lemmatizer(self) -> Self {
        self.with_lemmatizer(Arc::new(NoopLemmatizer))
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Normalize one document.
    /// Empty text gives an empty sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split_whitespace()
            .filter_map(|word| self.normalize_word(word))
            .collect()
    }

    /// Normalize many documents, keeping input order.
    pub fn normalize_all<T>(&self, texts: &[T]) -> Vec<Vec<String>>
    where
        T: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.normalize(t.as_ref())).collect()
    }

    fn normalize_word(&self, word: &str) -> Option<String> {
        if self.stopwords.contains(word) || word.chars().any(char::is_numeric) {
            return None;
        }
        let mut term = strip_punctuation(word).to_string();
        // lemmatize until stable; stripping can expose another suffix ("abcs.s")
        loop {
            let next = strip_punctuation(&self.lemmatizer.lemmatize(&term)).to_string();
            if next == term {
                break;
            }
            term = next;
        }
        if term.is_empty() || self.stopwords.contains(&term) {
            None
        } else {
            Some(term)
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for TextNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

#[inline]
fn strip_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| c.is_ascii_punctuation())
}
