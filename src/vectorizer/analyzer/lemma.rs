//! English noun lemmatization.
//!
//! Reduces plural nouns to their dictionary form: `tomatoes` → `tomato`,
//! `berries` → `berry`, `leaves` → `leaf`. Only nouns are handled, which is
//! what ingredient lists and menus are made of. There is no lexicon behind
//! the rules, so irregular forms and words that merely look plural live in
//! small lookup tables.

use std::borrow::Cow;

/// Reduces a single lowercased word to its base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Irregular plurals. Every value is a fixed point of the rules below.
const IRREGULAR: &[(&str, &str)] = &[
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("calves", "calf"),
    ("knives", "knife"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("oxen", "ox"),
    ("cookies", "cookie"),
    ("brownies", "brownie"),
    ("smoothies", "smoothie"),
    ("veggies", "veggie"),
    ("calories", "calorie"),
    ("pies", "pie"),
    ("shoes", "shoe"),
];

/// Words that end like plurals but are already singular (or uncountable).
const INVARIANT: &[&str] = &[
    "molasses",
    "christmas",
    "series",
    "species",
    "news",
    "lens",
    "swiss",
    "hummus",
    "couscous",
    "asparagus",
    "citrus",
    "octopus",
    "hibiscus",
    "grits",
    "chassis",
];

/// Rule based noun lemmatizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounLemmatizer;

impl NounLemmatizer {
    pub fn new() -> Self {
        NounLemmatizer
    }

    fn looks_singular(word: &str) -> bool {
        word.len() <= 3
            || !word.ends_with('s')
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
            || INVARIANT.contains(&word)
    }
}

impl Lemmatizer for NounLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if let Some((_, lemma)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
            return Cow::Borrowed(*lemma);
        }
        if Self::looks_singular(word) {
            return Cow::Borrowed(word);
        }

        // suffix rules, longest first
        if word.len() > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return Cow::Owned(format!("{stem}y"));
            }
        }
        for suffix in ["sses", "ches", "shes", "xes", "zes", "oes"] {
            if word.ends_with(suffix) {
                // drop the trailing "es"
                return Cow::Borrowed(&word[..word.len() - 2]);
            }
        }
        Cow::Borrowed(&word[..word.len() - 1])
    }
}

/// Leaves every word untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLemmatizer;

impl Lemmatizer for NoopLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(word)
    }
}
