//! Configuration loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vectorizer::analyzer::stopwords::StopWords;
use crate::vectorizer::analyzer::TextNormalizer;

/// Recommender configuration.
///
/// ```toml
/// lemmatize = true
/// extra_stopwords = ["served", "choice"]
/// top_k = 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Reduce plural nouns to their base form.
    pub lemmatize: bool,
    /// Added to the English + menu stopword list.
    pub extra_stopwords: Vec<String>,
    /// Default number of recommendations for the CLI.
    pub top_k: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            lemmatize: true,
            extra_stopwords: Vec::new(),
            top_k: 5,
        }
    }
}

impl RecommenderConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::Config("top_k must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Text normalizer described by this configuration.
    pub fn normalizer(&self) -> TextNormalizer {
        let mut stopwords = StopWords::default();
        stopwords.extend(&self.extra_stopwords);
        let normalizer = TextNormalizer::new().with_stopwords(stopwords);
        if self.lemmatize {
            normalizer
        } else {
            normalizer.without_lemmatizer()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RecommenderConfig::default();
        assert!(config.lemmatize);
        assert!(config.extra_stopwords.is_empty());
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = RecommenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RecommenderConfig::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = RecommenderConfig::from_toml_str(
            "lemmatize = false\nextra_stopwords = [\"Served\", \"choice\"]\ntop_k = 3\n",
        )
        .unwrap();
        assert!(!config.lemmatize);
        assert_eq!(config.extra_stopwords, vec!["Served", "choice"]);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn rejects_zero_top_k() {
        let err = RecommenderConfig::from_toml_str("top_k = 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_bad_types() {
        assert!(RecommenderConfig::from_toml_str("lemmatize = \"yes\"").is_err());
    }

    #[test]
    fn missing_file() {
        let err = RecommenderConfig::from_file("/no/such/config.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn normalizer_uses_extra_stopwords_and_lemmatize_flag() {
        let config = RecommenderConfig {
            lemmatize: false,
            extra_stopwords: vec!["Served".to_string()],
            top_k: 5,
        };
        let n = config.normalizer();
        assert_eq!(n.normalize("served with onions"), vec!["onions"]);
    }
}
