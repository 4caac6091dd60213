//! JSON-lines readers for recipe and restaurant records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{CorpusSource, Document, QuerySource};
use crate::error::{Error, Result};

/// Recipe ids arrive as strings or numbers depending on the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One stored recipe. Unknown fields (publisher, urls, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub rec_id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl From<RecipeRecord> for Document {
    fn from(rec: RecipeRecord) -> Self {
        Document {
            id: rec.rec_id.to_string(),
            title: rec.title,
            text: rec.ingredients.join(" "),
        }
    }
}

/// A restaurant menu: parallel lists of item names and descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl Menu {
    /// "item description" per pair, pairs joined by a space.
    /// Unpaired trailing entries are ignored.
    pub fn to_text(&self) -> String {
        self.items
            .iter()
            .zip(&self.descriptions)
            .map(|(item, desc)| format!("{item} {desc}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    #[serde(default)]
    pub menu: Option<Menu>,
}

impl RestaurantRecord {
    /// Menu text; empty when the restaurant has no menu.
    pub fn menu_text(&self) -> String {
        self.menu.as_ref().map(Menu::to_text).unwrap_or_default()
    }
}

/// Parse one JSON record per non-blank line.
pub fn read_records<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let rec = serde_json::from_str(&line).map_err(|e| Error::Ingest {
            line: i + 1,
            message: e.to_string(),
        })?;
        out.push(rec);
    }
    Ok(out)
}

/// Recipes stored as JSON lines; read on every `documents()` call.
#[derive(Debug, Clone)]
pub struct JsonLinesCorpus {
    path: PathBuf,
}

impl JsonLinesCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse recipes from any reader.
    pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Document>> {
        let records: Vec<RecipeRecord> = read_records(reader)?;
        Ok(records.into_iter().map(Document::from).collect())
    }
}

impl CorpusSource for JsonLinesCorpus {
    fn documents(&self) -> Result<Vec<Document>> {
        let file = File::open(&self.path)?;
        let docs = Self::parse(BufReader::new(file))?;
        tracing::debug!(path = %self.path.display(), documents = docs.len(), "loaded recipes");
        Ok(docs)
    }
}

/// Restaurants stored as JSON lines, loaded eagerly and looked up by name.
/// When a name repeats, the first record wins.
#[derive(Debug, Clone, Default)]
pub struct JsonLinesRestaurants {
    menus: IndexMap<String, String>,
}

impl JsonLinesRestaurants {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let restaurants = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(path = %path.display(), restaurants = restaurants.len(), "loaded restaurants");
        Ok(restaurants)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let records: Vec<RestaurantRecord> = read_records(reader)?;
        let mut menus = IndexMap::with_capacity(records.len());
        for rec in records {
            match menus.entry(rec.name.clone()) {
                Entry::Occupied(_) => {
                    tracing::warn!(name = %rec.name, "duplicate restaurant record ignored");
                }
                Entry::Vacant(slot) => {
                    if rec.menu.is_none() {
                        tracing::warn!(name = %rec.name, "restaurant has no menu; it will score 0 against every recipe");
                    }
                    slot.insert(rec.menu_text());
                }
            }
        }
        Ok(Self { menus })
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }
}

impl QuerySource for JsonLinesRestaurants {
    fn query_text(&self, name: &str) -> Result<Option<String>> {
        Ok(self.menus.get(name).cloned())
    }
}
