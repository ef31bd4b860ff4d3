//! # Error Types

/// Errors from wordvocab operations.
#[derive(Debug, thiserror::Error)]
pub enum WordVocabError {
    /// The tokenizer has no vocabulary; it must be loaded or built first.
    #[error("vocabulary is not initialized; load or build it first")]
    UninitializedVocab,

    /// An out-of-vocabulary token was found during tokenization,
    /// and no unknown token is configured.
    #[error("out-of-vocabulary token {token:?} and no unknown token is configured")]
    OutOfVocabulary {
        /// The token that was not found.
        token: String,
    },

    /// A token passed to encode is not in the vocabulary,
    /// and no unknown token is configured.
    #[error("unknown token {token:?}")]
    UnknownToken {
        /// The token that was not found.
        token: String,
    },

    /// An index passed to decode is outside the vocabulary.
    #[error("index {index} out of range for vocabulary of size {size}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,

        /// The vocabulary size.
        size: usize,
    },

    /// A persisted vocabulary file is malformed.
    #[error("vocab format error at line {line}: {message}")]
    Format {
        /// The 1-based line number.
        line: usize,

        /// What was wrong with the line.
        message: String,
    },

    /// The selection threshold is not in `(0, 1]`.
    #[error("threshold ({0}) must be in (0, 1]")]
    InvalidThreshold(f64),

    /// Vocab size exceeds the capacity of the target index type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Regex compilation error.
    #[error("regex error: {0}")]
    Regex(#[from] crate::regex::ErrorWrapper),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordvocab operations.
pub type WVResult<T> = core::result::Result<T, WordVocabError>;
