use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::vectorizer::dictionary::{Dictionary, SpaceId};
use crate::vectorizer::token::{BagOfWords, WeightedVector};

/// TF-IDF calculation engine
/// Plug a different weighting strategy into `WeightingModel<E>` by implementing this trait.
pub trait TFIDFEngine {
    /// TF 部分
    /// # Arguments
    /// * `count` - raw count of the term in the document (>= 1)
    fn tf(count: u32) -> f64;

    /// IDF 部分
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus (N)
    /// * `doc_freq` - documents containing the term (1 <= df <= N)
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
}

/// デフォルトのTF-IDFエンジン
/// weight = count × ln(N / df)
///
/// A term present in every document gets weight 0 and is dropped from the vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / doc_freq as f64).ln()
    }
}

/// Weighting model
/// Document frequencies fitted once on the corpus bag-of-words vectors.
/// Applied unchanged to corpus documents and to queries.
#[derive(Debug, Clone)]
pub struct WeightingModel<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    space: SpaceId,
    doc_num: u64,
    /// document frequency per term id
    doc_freq: Vec<u64>,
    /// IDF cache; 0 where df == 0
    idf_vec: Vec<f64>,
    _marker: PhantomData<E>,
}

impl<E> WeightingModel<E>
where
    E: TFIDFEngine,
{
    /// Count, for every term id, how many documents contain it.
    ///
    /// Fails fast when a vector comes from another dictionary or references
    /// an id the dictionary does not have.
    pub fn fit(corpus: &[BagOfWords], dict: &Dictionary) -> Result<Self> {
        let dim = dict.len();
        let mut doc_freq = vec![0_u64; dim];
        for bow in corpus {
            check_space(dict.space(), bow.space())?;
            check_ids(bow, dim)?;
            for (id, _) in bow.vector().raw_iter() {
                doc_freq[id as usize] += 1;
            }
        }

        let doc_num = corpus.len() as u64;
        let idf_vec = doc_freq
            .iter()
            .map(|&df| if df == 0 { 0.0 } else { E::idf(doc_num, df) })
            .collect();

        Ok(Self {
            space: dict.space(),
            doc_num,
            doc_freq,
            idf_vec,
            _marker: PhantomData,
        })
    }

    /// Re-weight raw counts.
    /// Terms with df == 0 (never seen in the corpus) and zero weights are dropped.
    pub fn apply(&self, bow: &BagOfWords) -> Result<WeightedVector> {
        check_space(self.space, bow.space())?;
        check_ids(bow, self.idf_vec.len())?;
        let weighted = bow
            .vector()
            .map_nonzero(|id, count| E::tf(count) * self.idf_vec[id as usize]);
        Ok(WeightedVector::new(self.space, weighted))
    }

    #[inline]
    pub fn space(&self) -> SpaceId {
        self.space
    }

    /// Corpus size N.
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn doc_freq(&self, id: u32) -> Option<u64> {
        self.doc_freq.get(id as usize).copied()
    }

    #[inline]
    pub fn idf(&self, id: u32) -> Option<f64> {
        self.idf_vec.get(id as usize).copied()
    }
}

#[inline]
pub(crate) fn check_space(expected: SpaceId, found: SpaceId) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::VectorSpaceMismatch { expected, found })
    }
}

#[inline]
fn check_ids(bow: &BagOfWords, len: usize) -> Result<()> {
    match bow.vector().max_index() {
        Some(id) if id as usize >= len => Err(Error::UnknownTermId { id, len }),
        _ => Ok(()),
    }
}
