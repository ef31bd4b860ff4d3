//! # Word Splitters
//!
//! The base word-level segmentation capability.

use crate::{
    errors::WVResult,
    regex::{RegexWrapper, RegexWrapperPattern},
};

/// Treebank-style word pattern.
///
/// Splits:
/// * words (`\w+`),
/// * negation and clitic suffixes: `don't` -> `do`, `n't`; `it's` -> `it`, `'s`,
/// * ellipses, and
/// * every other non-space symbol, one at a time (`<BOS>` -> `<`, `BOS`, `>`).
///
/// Requires look-ahead; compiles under `fancy_regex`.
pub const DEFAULT_WORD_PATTERN: &str =
    r"(?i:\w+(?=n't\b)|n't\b|'(?:s|m|d|ll|re|ve)\b)|\w+|\.\.\.|[^\w\s]";

/// A deterministic base word splitter.
///
/// Implementations must return the same fragments for the same input.
/// Fragments are sub-slices of the input, in order, and never empty.
pub trait WordSplitter: Send + Sync {
    /// Split `text` into word fragments.
    fn split_words<'a>(
        &self,
        text: &'a str,
    ) -> WVResult<Vec<&'a str>>;
}

/// A [`WordSplitter`] which emits every match of a regex pattern.
#[derive(Debug, Clone)]
pub struct RegexWordSplitter {
    regex: RegexWrapper,
}

impl Default for RegexWordSplitter {
    fn default() -> Self {
        Self::from_pattern(DEFAULT_WORD_PATTERN).expect("default word pattern compiles")
    }
}

impl RegexWordSplitter {
    /// Compile a new splitter.
    ///
    /// ## Arguments
    /// * `pattern` - the word pattern.
    pub fn from_pattern<P>(pattern: P) -> WVResult<Self>
    where
        P: Into<RegexWrapperPattern>,
    {
        Ok(Self {
            regex: pattern.into().compile()?,
        })
    }

    /// Get the compiled regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }
}

impl WordSplitter for RegexWordSplitter {
    fn split_words<'a>(
        &self,
        text: &'a str,
    ) -> WVResult<Vec<&'a str>> {
        Ok(self
            .regex
            .find_strs(text)?
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect())
    }
}

/// A [`WordSplitter`] which splits on unicode whitespace only.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceWordSplitter;

impl WordSplitter for WhitespaceWordSplitter {
    fn split_words<'a>(
        &self,
        text: &'a str,
    ) -> WVResult<Vec<&'a str>> {
        Ok(text.split_whitespace().collect())
    }
}
