use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// One ranked result: a document key and its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
}

/// Structure to store search results
#[derive(Clone, PartialEq)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Build from (key, score) pairs in corpus order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        Hits {
            list: pairs.into_iter().map(|(key, score)| HitEntry { key, score }).collect(),
        }
    }

    /// Sort results by descending score.
    /// The sort is stable: equal scores keep their incoming (corpus) order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|e| !e.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep at most `k` entries.
    pub fn truncate(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }

    /// Sort descending and keep the best `k`.
    pub fn top_k(mut self, k: usize) -> Self {
        self.sort_by_score_desc().truncate(k);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Replace every key, keeping scores and order.
    pub fn map_keys<K2, F>(self, mut f: F) -> Hits<K2>
    where
        F: FnMut(K) -> K2,
    {
        Hits {
            list: self
                .list
                .into_iter()
                .map(|e| HitEntry { key: f(e.key), score: e.score })
                .collect(),
        }
    }

    pub fn into_vec(self) -> Vec<HitEntry<K>> {
        self.list
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for e in &self.list {
                writeln!(f, "    {:?}: {:.6}", e.key, e.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, e) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({:.6})", rank + 1, e.key, e.score)?;
        }
        Ok(())
    }
}
