//! # Word Tokenizer
//!
//! [`WordTokenizer`] is the encoding facade: it segments text,
//! maps tokens to vocabulary indices, and back.
//!
//! [`TokenizerOptions`] is its (JSON loadable) configuration.

mod tokenizer_options;
mod word_tokenizer;

#[doc(inline)]
pub use tokenizer_options::*;
#[doc(inline)]
pub use word_tokenizer::*;
