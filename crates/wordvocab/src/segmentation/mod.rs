//! # Text Segmentation
//!
//! This module factors out text segmentation.
//!
//! [`WordSplitter`] is the base word-level capability; any deterministic
//! splitter may be plugged in. [`RegexWordSplitter`] is the default.
//!
//! [`MergeTable`] collapses configured fragment runs (`<`, `BOS`, `>`)
//! back into single atomic tokens (`<BOS>`).
//!
//! [`SegmentationConfig`] describes the declarative needs of a tokenizer:
//! * `pattern` - the word split pattern.
//! * `specials` - the special literals to re-assemble.
//! * `lower_case` - whether word fragments are lowercased.
//!
//! [`TextSegmentor`] implements the run-time segmentation.

pub mod merge_table;
pub mod segmentation_config;
pub mod text_segmentor;
pub mod word_splitter;

#[doc(inline)]
pub use merge_table::{MergeIter, MergeTable, MergeTarget, Merged};
#[doc(inline)]
pub use segmentation_config::SegmentationConfig;
#[doc(inline)]
pub use text_segmentor::TextSegmentor;
#[doc(inline)]
pub use word_splitter::{
    DEFAULT_WORD_PATTERN,
    RegexWordSplitter,
    WhitespaceWordSplitter,
    WordSplitter,
};
