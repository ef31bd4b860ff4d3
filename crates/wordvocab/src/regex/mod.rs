//! # Regex Utilities
//!
//! Treebank-style word patterns want look-ahead, which requires the extended
//! machinery of the [`fancy_regex`] crate; but naturally, this has performance
//! costs. We'd prefer to avoid using the [`fancy_regex`] crate when possible,
//! falling back on the standard [`regex`] crate when patterns permit this.
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]

pub mod regex_wrapper;

#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, RegexWrapper, RegexWrapperPattern};
