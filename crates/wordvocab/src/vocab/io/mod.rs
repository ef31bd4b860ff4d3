//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use wordvocab::vocab::{WordVocab, io::load_tsv_vocab_path};
//!
//! fn example() -> wordvocab::errors::WVResult<WordVocab<u32>> {
//!     let vocab: WordVocab<u32> = load_tsv_vocab_path("vocab.txt")?;
//!     log::info!("read vocab file with {} tokens", vocab.len());
//!     Ok(vocab)
//! }
//! ```

mod tsv_vocab;

#[doc(inline)]
pub use tsv_vocab::*;
