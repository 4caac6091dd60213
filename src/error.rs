//! Error types for the recommender.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while fitting, querying or loading data.
#[derive(Error, Debug)]
pub enum Error {
    /// `recommend` was called before any successful `fit`.
    #[error("recommender is not fitted; call fit() first")]
    NotFitted,

    /// A caller-supplied argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The corpus has no documents, or no terms survive normalization.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// A vector built from one dictionary was used against another.
    #[error("vector space mismatch: expected space {expected}, found {found}")]
    VectorSpaceMismatch { expected: u64, found: u64 },

    /// A term id outside the dictionary reached the weighting stage.
    #[error("term id {id} is outside the dictionary (size {len})")]
    UnknownTermId { id: u32, len: usize },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record in an input file could not be parsed.
    #[error("Ingest error at line {line}: {message}")]
    Ingest { line: usize, message: String },
}

impl Error {
    /// Create a new invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a new empty-corpus error.
    pub fn empty_corpus(message: impl Into<String>) -> Self {
        Self::EmptyCorpus(message.into())
    }

    /// True for errors that indicate a bug in the caller or in this crate
    /// rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::VectorSpaceMismatch { .. } | Self::UnknownTermId { .. })
    }
}
