//! Document acquisition.
//!
//! The recommender never knows where documents come from; it only sees the
//! [`CorpusSource`] and [`QuerySource`] traits. Two flavours are provided:
//! in-memory collections and JSON-lines files as produced by the recipe
//! collection scripts (one record per line).

pub mod jsonl;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use jsonl::{JsonLinesCorpus, JsonLinesRestaurants, Menu, RecipeRecord, RestaurantRecord};

/// A corpus document: an opaque id, an optional display title and raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            text: text.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Title if present, id otherwise.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

/// Supplies the ordered corpus to fit on.
pub trait CorpusSource {
    fn documents(&self) -> Result<Vec<Document>>;
}

/// Supplies query text (e.g. a restaurant's menu) for a named entity.
/// `Ok(None)` means the name is unknown.
pub trait QuerySource {
    fn query_text(&self, name: &str) -> Result<Option<String>>;
}

/// Corpus held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    docs: Vec<Document>,
}

impl InMemoryCorpus {
    pub fn new(docs: Vec<Document>) -> Self {
        Self { docs }
    }
}

impl CorpusSource for InMemoryCorpus {
    fn documents(&self) -> Result<Vec<Document>> {
        Ok(self.docs.clone())
    }
}

/// Named query texts held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQueries {
    texts: IndexMap<String, String>,
}

impl InMemoryQueries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.texts.insert(name.into(), text.into());
        self
    }
}

impl QuerySource for InMemoryQueries {
    fn query_text(&self, name: &str) -> Result<Option<String>> {
        Ok(self.texts.get(name).cloned())
    }
}
