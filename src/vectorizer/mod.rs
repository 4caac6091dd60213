pub mod analyzer;
pub mod dictionary;
pub mod evaluate;
pub mod index;
pub mod tfidf;
pub mod token;
