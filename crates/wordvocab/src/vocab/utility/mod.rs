//! # Vocabulary Utilities

pub mod validators;
