use indexmap::IndexMap;
use num::Num;

use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::dictionary::{Dictionary, SpaceId};

/// Sparse vector tagged with the vector space (dictionary) it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector<N>
where
    N: Num + Copy,
{
    space: SpaceId,
    vec: ZeroSpVec<N>,
}

/// Raw term counts keyed by term id.
pub type BagOfWords = TermVector<u32>;

/// TF-IDF weights keyed by term id.
pub type WeightedVector = TermVector<f64>;

impl<N> TermVector<N>
where
    N: Num + Copy,
{
    pub fn new(space: SpaceId, vec: ZeroSpVec<N>) -> Self {
        Self { space, vec }
    }

    /// All-zero vector in `space`.
    pub fn zero(space: SpaceId) -> Self {
        Self::new(space, ZeroSpVec::new())
    }

    #[inline]
    pub fn space(&self) -> SpaceId {
        self.space
    }

    #[inline]
    pub fn vector(&self) -> &ZeroSpVec<N> {
        &self.vec
    }

    #[inline]
    pub fn nnz(&self) -> usize {
        self.vec.nnz()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn into_vector(self) -> ZeroSpVec<N> {
        self.vec
    }
}

impl BagOfWords {
    /// Count occurrences of each known term.
    /// Terms missing from the dictionary are dropped.
    ///
    /// # Arguments
    /// * `tokens` - normalized terms of one document
    /// * `dict` - fitted dictionary
    pub fn from_tokens<T>(tokens: &[T], dict: &Dictionary) -> Self
    where
        T: AsRef<str>,
    {
        let mut counts: IndexMap<u32, u32> = IndexMap::new();
        for token in tokens {
            if let Some(id) = dict.to_id(token.as_ref()) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        let (inds, vals): (Vec<u32>, Vec<u32>) = counts.into_iter().unzip();
        Self::new(dict.space(), ZeroSpVec::from_unsorted(inds, vals))
    }

    /// Raw count of a term id in this document.
    #[inline]
    pub fn count(&self, id: u32) -> u32 {
        self.vec.get(id)
    }

    /// Total number of in-vocabulary tokens.
    pub fn token_sum(&self) -> u64 {
        self.vec.values().iter().map(|&c| c as u64).sum()
    }
}

/// Bag-of-words for a token sequence.
#[inline]
pub fn to_bag_of_words<T>(tokens: &[T], dict: &Dictionary) -> BagOfWords
where
    T: AsRef<str>,
{
    BagOfWords::from_tokens(tokens, dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::fit(&[vec!["salt", "pepper", "butter"], vec!["butter", "flour"]])
    }

    #[test]
    fn counts_repeated_terms() {
        let dict = dict();
        let bow = to_bag_of_words(&["butter", "salt", "butter", "butter"], &dict);
        assert_eq!(bow.count(dict.to_id("butter").unwrap()), 3);
        assert_eq!(bow.count(dict.to_id("salt").unwrap()), 1);
        assert_eq!(bow.count(dict.to_id("flour").unwrap()), 0);
        assert_eq!(bow.nnz(), 2);
        assert_eq!(bow.token_sum(), 4);
        assert_eq!(bow.space(), dict.space());
    }

    #[test]
    fn unknown_terms_are_dropped() {
        let dict = dict();
        let bow = to_bag_of_words(&["saffron", "pepper", "truffle"], &dict);
        assert_eq!(bow.nnz(), 1);
        assert_eq!(bow.vector().indices(), &[dict.to_id("pepper").unwrap()]);
    }

    #[test]
    fn empty_tokens_give_zero_vector() {
        let dict = dict();
        let none: [&str; 0] = [];
        let bow = to_bag_of_words(&none, &dict);
        assert!(bow.is_zero());
        assert_eq!(bow.token_sum(), 0);
    }

    #[test]
    fn indices_are_sorted() {
        let dict = dict();
        let bow = to_bag_of_words(&["flour", "salt", "butter"], &dict);
        assert_eq!(bow.vector().indices(), &[0, 2, 3]);
    }
}
