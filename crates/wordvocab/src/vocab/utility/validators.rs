//! Validators for various configuration options.
use crate::{
    errors::{WVResult, WordVocabError},
    types::TokenType,
};

/// Validates and returns the vocabulary size, ensuring every index fits in `T`.
pub fn try_vocab_size<T: TokenType>(vocab_size: usize) -> WVResult<usize> {
    if vocab_size > 0 && T::from_usize(vocab_size - 1).is_none() {
        Err(WordVocabError::VocabSizeOverflow { size: vocab_size })
    } else {
        Ok(vocab_size)
    }
}

/// Validates and returns the selection threshold, which must be in `(0, 1]`.
pub fn try_threshold(threshold: f64) -> WVResult<f64> {
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(threshold)
    } else {
        Err(WordVocabError::InvalidThreshold(threshold))
    }
}
