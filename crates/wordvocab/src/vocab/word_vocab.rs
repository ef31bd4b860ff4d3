//! # Word Vocabulary

use crate::{
    errors::{WVResult, WordVocabError},
    types::{TokenType, WVHashMap},
    vocab::{SpecialRole, SpecialTokens, utility::validators::try_vocab_size},
};

/// An ordered, immutable word vocabulary.
///
/// The position of a token in the list is its index.
/// The reverse `{ token -> index }` map is built at construction,
/// and is always the exact inverse of the token list.
#[derive(Debug, Clone)]
pub struct WordVocab<T: TokenType> {
    tokens: Vec<String>,
    index: WVHashMap<String, T>,
}

impl<T: TokenType> PartialEq for WordVocab<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.tokens == other.tokens
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary from an ordered token list.
    ///
    /// ## Arguments
    /// * `tokens` - the tokens, in index order.
    ///
    /// ## Returns
    /// The vocabulary; or an error if a token is duplicated,
    /// or the list is too large for `T`.
    pub fn from_tokens<I, S>(tokens: I) -> WVResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        try_vocab_size::<T>(tokens.len())?;

        let mut index = WVHashMap::with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            let value = T::from_usize(idx).ok_or(WordVocabError::VocabSizeOverflow {
                size: tokens.len(),
            })?;
            if let Some(prev) = index.insert(token.clone(), value) {
                return Err(WordVocabError::VocabConflict(format!(
                    "duplicate token {token:?} at indices {prev} and {idx}"
                )));
            }
        }

        Ok(Self { tokens, index })
    }

    /// Get the number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens, in index order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Look up the index of a token.
    pub fn lookup_token(
        &self,
        token: &str,
    ) -> Option<T> {
        self.index.get(token).copied()
    }

    /// Look up the token at an index.
    pub fn lookup_index(
        &self,
        index: T,
    ) -> Option<&str> {
        index
            .to_usize()
            .and_then(|idx| self.tokens.get(idx))
            .map(String::as_str)
    }

    /// Does the vocabulary contain the token?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.index.contains_key(token)
    }

    /// Look up the index of a special token role.
    ///
    /// ## Returns
    /// `None` if the role is disabled, or its literal is not in this vocabulary.
    pub fn special_index(
        &self,
        specials: &SpecialTokens,
        role: SpecialRole,
    ) -> Option<T> {
        specials.get(role).and_then(|lit| self.lookup_token(lit))
    }

    /// Does this vocabulary begin with exactly the enabled specials, in order?
    pub fn has_special_prefix(
        &self,
        specials: &SpecialTokens,
    ) -> bool {
        let literals = specials.literals();
        literals.len() <= self.len()
            && literals
                .iter()
                .zip(self.tokens.iter())
                .all(|(lit, tok)| *lit == tok.as_str())
    }

    /// Convert to a different index type.
    pub fn to_token_type<G: TokenType>(&self) -> WVResult<WordVocab<G>> {
        WordVocab::<G>::from_tokens(self.tokens.iter().cloned())
    }
}
