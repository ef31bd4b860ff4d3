//! # `wordvocab` Word Vocabulary Tokenizer
//!
//! This is a word-level vocabulary tokenizer.
//!
//! Text is segmented into words, punctuation, and special tokens;
//! a vocabulary is built from corpus word frequencies; and tokens are
//! mapped to dense vocabulary indices, and back.
//!
//! See:
//! * [`segmentation`] to split text into tokens.
//! * [`training`] to build a [`vocab::WordVocab`] from a corpus.
//! * [`vocab`] to manage vocabularies, special tokens, and vocab io.
//! * [`tokenizer`] for the [`WordTokenizer`] encode / decode facade.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` / `HashSet` implementations for ``ahash``.
//!
//! This is done by the ``types::WVHash{Map,Set}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel corpus counting, and parallel batch
//! tokenize / encode / decode, using the ``rayon`` crate.
//! Results are identical to the sequential forms.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordvocab::{TokenizerOptions, WVResult, WordTokenizer};
//!
//! fn example(corpus: &[String]) -> WVResult<()> {
//!     let options = TokenizerOptions::default().with_vocab_file(Some("vocab.txt"));
//!
//!     // starts unready, unless "vocab.txt" exists.
//!     let tokenizer: WordTokenizer<u32> = WordTokenizer::new(options)?;
//!     if !tokenizer.is_ready() {
//!         tokenizer.build_vocab(corpus, 0.7)?;
//!     }
//!
//!     let tokens = tokenizer.tokenize("<BOS> Hello, world! <EOS>")?;
//!     let indices = tokenizer.encode(&tokens)?;
//!     assert_eq!(tokenizer.decode(&indices)?, tokens);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod regex;
pub mod segmentation;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WVResult, WordVocabError};
#[doc(inline)]
pub use tokenizer::{TokenizerOptions, WordTokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialRole, SpecialTokens, WordVocab};
