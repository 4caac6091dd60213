//! This crate recommends recipes for a restaurant menu using a TF-IDF vectorizer
//! and cosine similarity over sparse vectors.

pub mod config;
pub mod error;
pub mod ingest;
pub mod recommender;
pub mod utils;
pub mod vectorizer;

/// Recommender
/// The top-level entry point of this crate.
/// Starts unfitted; `fit(corpus)` builds a `FittedModel` and `recommend(text, k)`
/// ranks the corpus against query text.
///
/// Internally a fit produces:
/// - The corpus dictionary (term ↔ id, first-seen order)
/// - A bag-of-words vector per document
/// - The TF-IDF weighting model (document frequencies)
/// - The similarity index (weighted vectors and their norms)
///
/// Re-fitting replaces all of it at once.
pub use recommender::Recommender;

/// Fitted model
/// Immutable result of one fit. All of its vectors live in one vector space;
/// vectors from another fit are rejected.
///
/// # Thread Safety
/// `Send + Sync`; share it through `Arc` and query it concurrently.
pub use recommender::{FittedModel, Recommendation};

/// Text normalizer
/// Lowercasing, stopword and digit filtering, punctuation stripping and noun
/// lemmatization.
pub use vectorizer::analyzer::TextNormalizer;

/// Corpus dictionary
/// Frozen term ↔ id mapping. Ids are handed out in order of first appearance.
pub use vectorizer::dictionary::Dictionary;

/// Bag-of-words and weighted vectors, tagged with their vector space.
pub use vectorizer::token::{to_bag_of_words, BagOfWords, TermVector, WeightedVector};

/// TF IDF Calculation Engine Trait
/// `DefaultTFIDFEngine` computes `count × ln(N / df)`.
/// `WeightingModel<E>` holds the fitted document frequencies.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine, WeightingModel};

/// Similarity index
/// Cosine scoring of a query against every fitted document.
pub use vectorizer::index::SimilarityIndex;

/// Search Hits and Hit Entry structures
/// - `Hits`: ranked list with a stable descending sort
/// - `HitEntry`: document key and score
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

/// Documents and the sources that supply them.
pub use ingest::{CorpusSource, Document, QuerySource};

pub use config::RecommenderConfig;
pub use error::{Error, Result};
