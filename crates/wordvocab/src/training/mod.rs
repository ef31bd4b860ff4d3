//! # Vocabulary Training
//!
//! Support for building word vocabularies from a corpus.
//!
//! Training requires:
//! * [`crate::segmentation::SegmentationConfig`] - a text segmentation config.
//!   * The enabled special tokens are reserved; they are never counted,
//!     and always lead the built vocabulary.
//! * a selection `threshold` in `(0, 1]`.
//!
//! Building is two phases:
//! 1. counting, by [`WordCounter`]; sequential, or a rayon map-reduce
//!    under the `rayon` feature,
//! 2. ranking and selection, by [`WordVocabTrainer::train`].
//!
//! ## Training Example
//!
//! ```rust,no_run
//! use wordvocab::{
//!     segmentation::SegmentationConfig,
//!     training::WordVocabTrainerOptions,
//!     vocab::io::save_tsv_vocab_path,
//! };
//!
//! fn example(
//!     samples: &[String],
//!     vocab_save_path: &str,
//! ) -> wordvocab::WVResult<()> {
//!     type T = u32;
//!     type C = u64;
//!
//!     let options = WordVocabTrainerOptions::new(0.7)
//!         .with_segmentation(SegmentationConfig::default().with_lower_case(false));
//!
//!     let mut trainer = options.init::<C>()?;
//!     trainer.update_from_samples(samples)?;
//!
//!     let build = trainer.train::<T>()?;
//!     for (token, count) in build.ranked.iter().take(10) {
//!         println!("{count:>8} {token}");
//!     }
//!
//!     save_tsv_vocab_path(&build.vocab, vocab_save_path)
//! }
//! ```

mod training_types;
mod vocab_builder;
mod word_counter;

#[doc(inline)]
pub use training_types::CountType;
#[doc(inline)]
pub use vocab_builder::{
    DEFAULT_THRESHOLD,
    WordVocabBuild,
    WordVocabTrainer,
    WordVocabTrainerOptions,
    rank_counts,
    select_count,
};
#[doc(inline)]
pub use word_counter::WordCounter;
