use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;

/// Process-wide counter handing out vector space ids.
static NEXT_SPACE: AtomicU64 = AtomicU64::new(1);

/// Identifies the vector space of one fitted dictionary.
/// Vectors produced from different dictionaries never share a space id.
pub type SpaceId = u64;

/// Corpus dictionary
/// Maps terms to dense `u32` ids and back.
///
/// Ids are assigned in order of first appearance during one ordered pass over
/// the corpus, so fitting twice on the same corpus gives the same mapping.
/// The mapping is frozen once fitted; unknown terms simply have no id.
#[derive(Debug, Clone)]
pub struct Dictionary {
    terms: IndexSet<Box<str>>,
    space: SpaceId,
}

impl Dictionary {
    /// Build a dictionary from the corpus token sequences.
    pub fn fit<D, T>(docs: &[D]) -> Self
    where
        D: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut terms: IndexSet<Box<str>> = IndexSet::new();
        for doc in docs {
            for term in doc.as_ref() {
                let term = term.as_ref();
                if !terms.contains(term) {
                    terms.insert(term.into());
                }
            }
        }
        terms.shrink_to_fit();
        Self {
            terms,
            space: NEXT_SPACE.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Number of distinct terms (the vector dimensionality).
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn to_id(&self, term: &str) -> Option<u32> {
        self.terms.get_index_of(term).map(|i| i as u32)
    }

    #[inline]
    pub fn term(&self, id: u32) -> Option<&str> {
        self.terms.get_index(id as usize).map(|t| &**t)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Vector space this dictionary defines.
    #[inline]
    pub fn space(&self) -> SpaceId {
        self.space
    }

    /// Terms in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.terms.iter().enumerate().map(|(i, t)| (i as u32, &**t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Vec<&'static str>> {
        vec![
            vec!["chicken", "rice", "garlic"],
            vec!["beef", "rice", "onion"],
            vec!["chicken", "garlic", "lemon"],
        ]
    }

    #[test]
    fn ids_follow_first_appearance() {
        let dict = Dictionary::fit(&docs());
        assert_eq!(dict.len(), 6);
        let expected = ["chicken", "rice", "garlic", "beef", "onion", "lemon"];
        for (i, term) in expected.iter().enumerate() {
            assert_eq!(dict.to_id(term), Some(i as u32));
            assert_eq!(dict.term(i as u32), Some(*term));
        }
    }

    #[test]
    fn fitting_is_deterministic() {
        let a = Dictionary::fit(&docs());
        let b = Dictionary::fit(&docs());
        let a_terms: Vec<_> = a.iter().collect();
        let b_terms: Vec<_> = b.iter().collect();
        assert_eq!(a_terms, b_terms);
    }

    #[test]
    fn each_fit_gets_its_own_space() {
        let a = Dictionary::fit(&docs());
        let b = Dictionary::fit(&docs());
        assert_ne!(a.space(), b.space());
    }

    #[test]
    fn unknown_terms_have_no_id() {
        let dict = Dictionary::fit(&docs());
        assert_eq!(dict.to_id("saffron"), None);
        assert!(!dict.contains("saffron"));
        assert_eq!(dict.term(99), None);
    }

    #[test]
    fn empty_corpus_gives_empty_dictionary() {
        let empty: Vec<Vec<String>> = vec![vec![], vec![]];
        let dict = Dictionary::fit(&empty);
        assert!(dict.is_empty());
    }
}
