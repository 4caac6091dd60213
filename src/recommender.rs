//! Fit a corpus once, then rank it against query text.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RecommenderConfig;
use crate::error::{Error, Result};
use crate::ingest::{CorpusSource, Document, QuerySource};
use crate::vectorizer::analyzer::TextNormalizer;
use crate::vectorizer::dictionary::Dictionary;
use crate::vectorizer::evaluate::scoring::Hits;
use crate::vectorizer::index::SimilarityIndex;
use crate::vectorizer::tfidf::WeightingModel;
use crate::vectorizer::token::{to_bag_of_words, WeightedVector};

/// One recommended document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub score: f64,
}

impl Recommendation {
    /// Title if present, id otherwise.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone)]
struct DocEntry {
    id: String,
    title: Option<String>,
}

/// Everything produced by one fit: dictionary, weighting model and index,
/// all sharing one vector space. Immutable; share it freely across threads.
#[derive(Debug, Clone)]
pub struct FittedModel {
    normalizer: TextNormalizer,
    entries: Vec<DocEntry>,
    dictionary: Dictionary,
    weights: WeightingModel,
    index: SimilarityIndex,
}

impl FittedModel {
    /// Normalize, build the dictionary, weight and index the corpus.
    ///
    /// Fails with `EmptyCorpus` when there are no documents or when no term
    /// survives normalization.
    pub fn fit(normalizer: TextNormalizer, corpus: &[Document]) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::empty_corpus("fit called with zero documents"));
        }

        let texts: Vec<&str> = corpus.iter().map(|d| d.text.as_str()).collect();
        let tokens = normalizer.normalize_all(&texts);

        let dictionary = Dictionary::fit(&tokens);
        if dictionary.is_empty() {
            return Err(Error::empty_corpus(
                "no terms left after normalization; dictionary would be empty",
            ));
        }

        let bows: Vec<_> = tokens
            .par_iter()
            .map(|t| to_bag_of_words(t, &dictionary))
            .collect();
        let weights: WeightingModel = WeightingModel::fit(&bows, &dictionary)?;
        let weighted = bows
            .par_iter()
            .map(|b| weights.apply(b))
            .collect::<Result<Vec<_>>>()?;
        let index = SimilarityIndex::build(weighted)?;

        let empty_docs = (0..index.doc_num())
            .filter(|&pos| index.vector(pos).map_or(true, |v| v.is_empty()))
            .count();
        tracing::info!(
            documents = corpus.len(),
            vocabulary = dictionary.len(),
            nnz = index.nnz(),
            empty_vectors = empty_docs,
            "fitted recommender"
        );

        let entries = corpus
            .iter()
            .map(|d| DocEntry {
                id: d.id.clone(),
                title: d.title.clone(),
            })
            .collect();

        Ok(Self {
            normalizer,
            entries,
            dictionary,
            weights,
            index,
        })
    }

    /// Weighted vector for raw query text, in this model's vector space.
    /// Out-of-vocabulary words contribute nothing.
    pub fn vectorize_query(&self, text: &str) -> Result<WeightedVector> {
        let tokens = self.normalizer.normalize(text);
        let bow = to_bag_of_words(&tokens, &self.dictionary);
        self.weights.apply(&bow)
    }

    /// Cosine scores of `query` against every document, in corpus order.
    pub fn score_vector(&self, query: &WeightedVector) -> Result<Hits<usize>> {
        Ok(Hits::from_pairs(self.index.score(query)?))
    }

    /// Top `k` documents for `text`, best first.
    /// Ties keep corpus order; returns every document when `k` exceeds the corpus.
    pub fn recommend(&self, text: &str, k: usize) -> Result<Vec<Recommendation>> {
        if k == 0 {
            return Err(Error::invalid_argument("k must be a positive integer"));
        }
        let query = self.vectorize_query(text)?;
        let hits = self.score_vector(&query)?.top_k(k);
        tracing::debug!(
            query_terms = query.nnz(),
            requested = k,
            returned = hits.len(),
            "ranked corpus"
        );
        Ok(hits
            .into_vec()
            .into_iter()
            .map(|hit| {
                let entry = &self.entries[hit.key];
                Recommendation {
                    id: entry.id.clone(),
                    title: entry.title.clone(),
                    score: hit.score,
                }
            })
            .collect())
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn weights(&self) -> &WeightingModel {
        &self.weights
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// Number of fitted documents.
    pub fn doc_num(&self) -> usize {
        self.entries.len()
    }

    /// Id of the document at corpus position `pos`.
    pub fn doc_id(&self, pos: usize) -> Option<&str> {
        self.entries.get(pos).map(|e| e.id.as_str())
    }
}

/// Recommender
/// Starts unfitted; `fit` builds a [`FittedModel`] and replaces any previous one.
///
/// `fit` takes `&mut self`, so it cannot race a `recommend` on the same
/// instance. Readers that need to outlive a re-fit keep the `Arc<FittedModel>`
/// returned by `fit` or `model()`.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommenderConfig,
    model: Option<Arc<FittedModel>>,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config, model: None }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Fit on an ordered corpus. All-or-nothing: on error the previous model is kept.
    pub fn fit(&mut self, corpus: &[Document]) -> Result<Arc<FittedModel>> {
        let model = Arc::new(FittedModel::fit(self.config.normalizer(), corpus)?);
        self.model = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Fit on whatever the source supplies.
    pub fn fit_from<S>(&mut self, source: &S) -> Result<Arc<FittedModel>>
    where
        S: CorpusSource + ?Sized,
    {
        let docs = source.documents()?;
        self.fit(&docs)
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Current model, if fitted.
    pub fn model(&self) -> Option<Arc<FittedModel>> {
        self.model.clone()
    }

    /// Top `k` documents for `text`.
    /// `NotFitted` before the first successful fit, `InvalidArgument` for `k == 0`.
    pub fn recommend(&self, text: &str, k: usize) -> Result<Vec<Recommendation>> {
        let model = self.model.as_ref().ok_or(Error::NotFitted)?;
        model.recommend(text, k)
    }

    /// Look up a named entity's text (e.g. a restaurant menu) and recommend for it.
    pub fn recommend_for<Q>(&self, queries: &Q, name: &str, k: usize) -> Result<Vec<Recommendation>>
    where
        Q: QuerySource + ?Sized,
    {
        let model = self.model.as_ref().ok_or(Error::NotFitted)?;
        let text = queries
            .query_text(name)?
            .ok_or_else(|| Error::invalid_argument(format!("unknown name: {name}")))?;
        model.recommend(&text, k)
    }
}
