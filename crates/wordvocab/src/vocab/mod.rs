//! # Vocabulary
//!
//! * [`WordVocab`] - the ordered token list, and its reverse index.
//! * [`SpecialTokens`] - the reserved BOS / EOS / UNK / PAD literals.
//! * [`io`] - the TSV vocabulary store.

pub mod io;
pub mod utility;

mod special_tokens;
mod word_vocab;

#[doc(inline)]
pub use special_tokens::*;
#[doc(inline)]
pub use word_vocab::WordVocab;
