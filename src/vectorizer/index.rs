use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::utils::math::vector::{math::cosine_with_norms, ZeroSpVec};
use crate::vectorizer::dictionary::SpaceId;
use crate::vectorizer::tfidf::check_space;
use crate::vectorizer::token::WeightedVector;

/// Similarity index
/// Weighted corpus vectors in corpus order, with their norms precomputed.
/// Built once per fit and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    space: SpaceId,
    matrix: Vec<ZeroSpVec<f64>>,
    norms: Vec<f64>,
}

impl SimilarityIndex {
    /// Build the index from the weighted corpus vectors.
    /// All vectors must come from the same vector space.
    pub fn build(vectors: Vec<WeightedVector>) -> Result<Self> {
        let space = match vectors.first() {
            Some(v) => v.space(),
            None => return Err(Error::empty_corpus("cannot build an index over zero documents")),
        };
        let mut matrix = Vec::with_capacity(vectors.len());
        for v in vectors {
            check_space(space, v.space())?;
            matrix.push(v.into_vector());
        }
        let norms = matrix.par_iter().map(|v| v.norm()).collect();
        Ok(Self { space, matrix, norms })
    }

    /// Cosine similarity of `query` against every stored document.
    /// Returned in corpus order as (position, score); not sorted by score.
    ///
    /// Cost is the sum over documents of the non-zero entries walked by the
    /// merge-join, never documents × dictionary size.
    pub fn score(&self, query: &WeightedVector) -> Result<Vec<(usize, f64)>> {
        check_space(self.space, query.space())?;
        let q = query.vector();
        let q_norm = q.norm();
        if q_norm == 0.0 {
            return Ok((0..self.matrix.len()).map(|pos| (pos, 0.0)).collect());
        }
        let scores = self
            .matrix
            .par_iter()
            .zip(self.norms.par_iter())
            .enumerate()
            .map(|(pos, (doc, &doc_norm))| (pos, cosine_with_norms(q.dot(doc), q_norm, doc_norm)))
            .collect();
        Ok(scores)
    }

    #[inline]
    pub fn space(&self) -> SpaceId {
        self.space
    }

    /// Number of indexed documents.
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.matrix.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Weighted vector of the document at `pos`.
    pub fn vector(&self, pos: usize) -> Option<&ZeroSpVec<f64>> {
        self.matrix.get(pos)
    }

    /// Total non-zero entries across the corpus.
    pub fn nnz(&self) -> usize {
        self.matrix.iter().map(|v| v.nnz()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: SpaceId = 7;

    fn wv(inds: &[u32], vals: &[f64]) -> WeightedVector {
        WeightedVector::new(SPACE, ZeroSpVec::from_unsorted(inds.to_vec(), vals.to_vec()))
    }

    fn index() -> SimilarityIndex {
        SimilarityIndex::build(vec![
            wv(&[0, 1], &[1.0, 1.0]),
            wv(&[2], &[3.0]),
            wv(&[], &[]),
            wv(&[0, 1], &[2.0, 2.0]),
        ])
        .unwrap()
    }

    #[test]
    fn scores_every_document_in_corpus_order() {
        let idx = index();
        let scores = idx.score(&wv(&[0, 1], &[1.0, 1.0])).unwrap();
        let positions: Vec<usize> = scores.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
        assert!((scores[0].1 - 1.0).abs() < 1e-12);
        assert_eq!(scores[1].1, 0.0);
        assert_eq!(scores[2].1, 0.0);
        assert!((scores[3].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn partial_overlap() {
        let idx = index();
        let scores = idx.score(&wv(&[0], &[5.0])).unwrap();
        assert!((scores[0].1 - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_query_scores_zero_everywhere() {
        let idx = index();
        let scores = idx.score(&WeightedVector::zero(SPACE)).unwrap();
        assert_eq!(scores.len(), 4);
        assert!(scores.iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn never_nan() {
        let idx = index();
        for q in [wv(&[], &[]), wv(&[2], &[1.0]), wv(&[9], &[1.0])] {
            let scores = idx.score(&q).unwrap();
            assert!(scores.iter().all(|(_, s)| s.is_finite()));
        }
    }

    #[test]
    fn rejects_query_from_other_space() {
        let idx = index();
        let foreign = WeightedVector::new(SPACE + 1, ZeroSpVec::new());
        assert!(matches!(
            idx.score(&foreign),
            Err(Error::VectorSpaceMismatch { expected: 7, found: 8 })
        ));
    }

    #[test]
    fn build_rejects_mixed_spaces_and_empty() {
        let mixed = vec![wv(&[0], &[1.0]), WeightedVector::new(SPACE + 1, ZeroSpVec::new())];
        assert!(SimilarityIndex::build(mixed).is_err());
        assert!(matches!(SimilarityIndex::build(vec![]), Err(Error::EmptyCorpus(_))));
    }

    #[test]
    fn counts() {
        let idx = index();
        assert_eq!(idx.doc_num(), 4);
        assert_eq!(idx.nnz(), 5);
        assert_eq!(idx.vector(1).unwrap().get(2), 3.0);
    }
}
