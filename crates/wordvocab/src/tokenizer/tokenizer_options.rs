//! # Tokenizer Options

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    errors::WVResult,
    segmentation::{DEFAULT_WORD_PATTERN, SegmentationConfig},
    training::{DEFAULT_THRESHOLD, WordVocabTrainerOptions},
    vocab::{SpecialRole, SpecialTokens},
};

/// The file a built vocabulary is persisted to when no `vocab_file` is configured.
pub const DEFAULT_VOCAB_FILE: &str = "vocab.txt";

/// Options for configuring a [`crate::tokenizer::WordTokenizer`].
///
/// (De)serializable; missing fields take their defaults.
/// The special literals are flat keys (`bos_token`, `eos_token`, `unk_token`, `pad_token`);
/// a `null` literal disables the role.
///
/// ```json
/// {
///   "lower_case": true,
///   "unk_token": "[UNK]",
///   "pad_token": null,
///   "vocab_file": "vocab.txt",
///   "threshold": 0.7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Lowercase word fragments.
    pub lower_case: bool,

    /// The special token literals.
    #[serde(flatten)]
    pub specials: SpecialTokens,

    /// Where the vocabulary is loaded from, and persisted to.
    pub vocab_file: Option<PathBuf>,

    /// The fraction of distinct corpus tokens kept by a build.
    pub threshold: f64,

    /// Word split pattern; `None` is [`DEFAULT_WORD_PATTERN`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_pattern: Option<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            lower_case: true,
            specials: SpecialTokens::default(),
            vocab_file: None,
            threshold: DEFAULT_THRESHOLD,
            word_pattern: None,
        }
    }
}

impl TokenizerOptions {
    /// Parse options from a JSON string.
    pub fn from_json_str(json: &str) -> WVResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    ///
    /// ## Arguments
    /// * `path` - the path to the config file.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> WVResult<Self> {
        let reader = std::io::BufReader::new(std::fs::File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize these options as pretty JSON.
    pub fn to_json_string(&self) -> WVResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the lowercase flag.
    pub fn with_lower_case(
        self,
        lower_case: bool,
    ) -> Self {
        Self { lower_case, ..self }
    }

    /// Replaces the special tokens.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Sets (or clears) a single special literal.
    pub fn with_special<S: Into<String>>(
        mut self,
        role: SpecialRole,
        literal: Option<S>,
    ) -> Self {
        self.specials.set(role, literal);
        self
    }

    /// Sets the vocabulary file.
    pub fn with_vocab_file<P: Into<PathBuf>>(
        self,
        vocab_file: Option<P>,
    ) -> Self {
        Self {
            vocab_file: vocab_file.map(Into::into),
            ..self
        }
    }

    /// Sets the build threshold.
    pub fn with_threshold(
        self,
        threshold: f64,
    ) -> Self {
        Self { threshold, ..self }
    }

    /// Sets the word split pattern.
    pub fn with_word_pattern<S: Into<String>>(
        self,
        word_pattern: Option<S>,
    ) -> Self {
        Self {
            word_pattern: word_pattern.map(Into::into),
            ..self
        }
    }

    /// The word split pattern in effect.
    pub fn word_pattern(&self) -> &str {
        self.word_pattern.as_deref().unwrap_or(DEFAULT_WORD_PATTERN)
    }

    /// The path a built vocabulary is persisted to.
    pub fn persist_path(&self) -> PathBuf {
        self.vocab_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VOCAB_FILE))
    }

    /// The segmentation configuration these options describe.
    pub fn segmentation_config(&self) -> SegmentationConfig {
        SegmentationConfig::from_pattern(self.word_pattern())
            .with_specials(self.specials.clone())
            .with_lower_case(self.lower_case)
    }

    /// The trainer options for a build at `threshold`.
    pub fn trainer_options(
        &self,
        threshold: f64,
    ) -> WordVocabTrainerOptions {
        WordVocabTrainerOptions::new(threshold).with_segmentation(self.segmentation_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WordVocabError;

    #[test]
    fn test_defaults() {
        let options = TokenizerOptions::default();
        assert!(options.lower_case);
        assert_eq!(options.specials, SpecialTokens::default());
        assert_eq!(options.vocab_file, None);
        assert_eq!(options.threshold, 0.7);
        assert_eq!(options.word_pattern(), DEFAULT_WORD_PATTERN);
        assert_eq!(options.persist_path(), PathBuf::from("vocab.txt"));
    }

    #[test]
    fn test_from_json_str() {
        let options = TokenizerOptions::from_json_str(
            r#"{
                "lower_case": false,
                "unk_token": "[UNK]",
                "pad_token": null,
                "vocab_file": "/tmp/v.txt"
            }"#,
        )
        .unwrap();

        assert!(!options.lower_case);
        assert_eq!(options.specials.get(SpecialRole::Bos), Some("<BOS>"));
        assert_eq!(options.specials.unk(), Some("[UNK]"));
        assert_eq!(options.specials.get(SpecialRole::Pad), None);
        assert_eq!(options.vocab_file, Some(PathBuf::from("/tmp/v.txt")));
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);

        let config = options.segmentation_config();
        assert!(!config.lower_case);
        assert_eq!(config.specials.literals(), vec!["<BOS>", "<EOS>", "[UNK]"]);
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(
            TokenizerOptions::from_json_str("{}").unwrap(),
            TokenizerOptions::default()
        );
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            TokenizerOptions::from_json_str("{\"threshold\": \"high\"}"),
            Err(WordVocabError::Config(_))
        ));
    }

    #[test]
    fn test_json_path_round_trip() {
        tempdir::TempDir::new("options_test")
            .and_then(|dir| {
                let path = dir.path().join("tokenizer.json");

                let options = TokenizerOptions::default()
                    .with_threshold(0.5)
                    .with_special(SpecialRole::Eos, None::<String>)
                    .with_word_pattern(Some(r"\S+"))
                    .with_vocab_file(Some("v.tsv"));

                std::fs::write(&path, options.to_json_string().unwrap())?;

                let loaded = TokenizerOptions::from_json_path(&path).unwrap();
                assert_eq!(loaded, options);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_json_path() {
        assert!(matches!(
            TokenizerOptions::from_json_path("/no/such/config.json"),
            Err(WordVocabError::Io(_))
        ));
    }
}
