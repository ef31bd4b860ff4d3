//! # Text Segmentation Configuration
use crate::{regex::RegexWrapperPattern, segmentation::DEFAULT_WORD_PATTERN, vocab::SpecialTokens};

/// Word Split + Special Token Merge Configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationConfig {
    /// Regex pattern for word splitting.
    pub pattern: RegexWrapperPattern,

    /// Special tokens to re-assemble during the merge pass.
    pub specials: SpecialTokens,

    /// Lowercase word fragments; merged special tokens are never lowercased.
    pub lower_case: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self::from_pattern(DEFAULT_WORD_PATTERN)
    }
}

impl From<RegexWrapperPattern> for SegmentationConfig {
    fn from(value: RegexWrapperPattern) -> Self {
        SegmentationConfig::from_pattern(value)
    }
}

impl SegmentationConfig {
    /// Create a new segmentation configuration with the given word pattern.
    ///
    /// Uses the default special tokens, and lowercasing.
    ///
    /// ## Arguments
    /// * `pattern` - The word split pattern.
    ///
    /// ## Returns
    /// A new `SegmentationConfig` instance.
    pub fn from_pattern<P>(pattern: P) -> Self
    where
        P: Into<RegexWrapperPattern>,
    {
        Self {
            pattern: pattern.into(),
            specials: SpecialTokens::default(),
            lower_case: true,
        }
    }

    /// Set the split pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The new word split pattern.
    ///
    /// ## Returns
    /// The updated `SegmentationConfig` instance.
    pub fn with_pattern<P>(
        self,
        pattern: P,
    ) -> Self
    where
        P: Into<RegexWrapperPattern>,
    {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Replace the special tokens.
    ///
    /// ## Returns
    /// The updated `SegmentationConfig` instance.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Set the lowercase flag.
    ///
    /// ## Returns
    /// The updated `SegmentationConfig` instance.
    pub fn with_lower_case(
        self,
        lower_case: bool,
    ) -> Self {
        Self { lower_case, ..self }
    }

    /// Get the word pattern.
    pub fn pattern(&self) -> &RegexWrapperPattern {
        &self.pattern
    }

    /// Get the special tokens.
    pub fn specials(&self) -> &SpecialTokens {
        &self.specials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::SpecialRole;

    #[test]
    fn test_from_pattern() {
        let pattern = RegexWrapperPattern::Adaptive("hello".to_string());

        let config: SegmentationConfig = pattern.into();
        assert_eq!(config.pattern().as_str(), "hello");
        assert_eq!(config.specials(), &SpecialTokens::default());
        assert!(config.lower_case);

        let config = config.with_pattern("hi").with_lower_case(false);
        assert_eq!(
            &config.pattern,
            &RegexWrapperPattern::Adaptive("hi".to_string())
        );
        assert!(!config.lower_case);

        let specials = SpecialTokens::none().with(SpecialRole::Unk, Some("[?]"));
        let config = config.with_specials(specials.clone());
        assert_eq!(config.specials(), &specials);
    }

    #[test]
    fn test_default() {
        let config = SegmentationConfig::default();
        assert_eq!(config.pattern().as_str(), DEFAULT_WORD_PATTERN);
    }
}
