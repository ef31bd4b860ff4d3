//! # Text Segmentor

use std::sync::Arc;

use crate::{
    errors::WVResult,
    segmentation::{MergeTable, Merged, RegexWordSplitter, SegmentationConfig, WordSplitter},
};

/// Word Split + Special Token Merge Segmentor
///
/// Segmentation is:
/// 1. base word splitting, by the [`WordSplitter`];
/// 2. the [`MergeTable`] pass, re-assembling special literals;
/// 3. lowercasing of the remaining word fragments, if configured.
///
/// When lowercasing, the merge pass matches case-insensitively, so
/// `<unk>` and `<UNK>` both become the configured `<UNK>` literal.
#[derive(Clone)]
pub struct TextSegmentor {
    splitter: Arc<dyn WordSplitter>,
    merges: MergeTable,
    lower_case: bool,
}

impl core::fmt::Debug for TextSegmentor {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TextSegmentor")
            .field("merges", &self.merges)
            .field("lower_case", &self.lower_case)
            .finish_non_exhaustive()
    }
}

impl TextSegmentor {
    /// Create a new text segmentor from the given configuration.
    ///
    /// ## Arguments
    /// * `config` - The segmentation configuration.
    ///
    /// ## Returns
    /// A new `TextSegmentor` instance; or an error if the pattern fails to compile.
    pub fn from_config(config: &SegmentationConfig) -> WVResult<Self> {
        let splitter = RegexWordSplitter::from_pattern(config.pattern.clone())?;
        Self::from_splitter(Arc::new(splitter), config)
    }

    /// Create a new text segmentor around an externally supplied splitter.
    ///
    /// The `pattern` of `config` is ignored.
    pub fn from_splitter(
        splitter: Arc<dyn WordSplitter>,
        config: &SegmentationConfig,
    ) -> WVResult<Self> {
        let merges = MergeTable::from_literals(splitter.as_ref(), config.specials.literals())?;
        Ok(Self::init(splitter, merges, config.lower_case))
    }

    /// Create a new text segmentor from its parts.
    ///
    /// The merge table's case folding is set to follow `lower_case`.
    pub fn init(
        splitter: Arc<dyn WordSplitter>,
        merges: MergeTable,
        lower_case: bool,
    ) -> Self {
        Self {
            splitter,
            merges: merges.with_fold_case(lower_case),
            lower_case,
        }
    }

    /// Get the merge table.
    pub fn merges(&self) -> &MergeTable {
        &self.merges
    }

    /// Is lowercasing enabled?
    pub fn lower_case(&self) -> bool {
        self.lower_case
    }

    /// Segment text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to segment.
    ///
    /// ## Returns
    /// The ordered tokens.
    pub fn segment(
        &self,
        text: &str,
    ) -> WVResult<Vec<String>> {
        let mut tokens = Vec::new();
        self.for_each_token(text, &mut |token| tokens.push(token.to_string()))?;
        Ok(tokens)
    }

    /// Segment text, and call `f` for every token.
    ///
    /// Avoids building the token list when only counting.
    pub fn for_each_token<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> WVResult<()>
    where
        F: FnMut(&str),
    {
        let fragments = self.splitter.split_words(text)?;
        for item in self.merges.merge_iter(&fragments) {
            match item {
                Merged::Joined(token) => f(token),
                Merged::Fragment(word) if self.lower_case => f(word.to_lowercase().as_str()),
                Merged::Fragment(word) => f(word),
            }
        }
        Ok(())
    }

    /// Batch version of [`Self::segment`].
    pub fn segment_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> WVResult<Vec<Vec<String>>> {
        texts.iter().map(|t| self.segment(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        segmentation::WhitespaceWordSplitter,
        types::{check_is_send, check_is_sync},
        vocab::{SpecialRole, SpecialTokens},
    };

    fn segmentor(lower_case: bool) -> TextSegmentor {
        TextSegmentor::from_config(&SegmentationConfig::default().with_lower_case(lower_case))
            .unwrap()
    }

    #[test]
    fn test_segment_merges_specials() {
        let segmentor = segmentor(true);
        check_is_send(&segmentor);
        check_is_sync(&segmentor);

        assert_eq!(
            segmentor.segment("<BOS> Hello, World <EOS>").unwrap(),
            vec!["<BOS>", "hello", ",", "world", "<EOS>"]
        );
    }

    #[test]
    fn test_lowercase_never_breaks_specials() {
        let segmentor = segmentor(true);
        assert!(segmentor.merges().fold_case());
        assert_eq!(
            segmentor.segment("an <UNK> token").unwrap(),
            vec!["an", "<UNK>", "token"]
        );
        assert_eq!(
            segmentor.segment("an <unk> token <Pad>").unwrap(),
            vec!["an", "<UNK>", "token", "<PAD>"]
        );
    }

    #[test]
    fn test_lowercase_is_case_blind() {
        let segmentor = segmentor(true);
        for text in [
            "<UNK> x",
            "<BOS> The <unk> Cat <eos>",
            "<PAD><pad> didn't <UnK>",
        ] {
            assert_eq!(
                segmentor.segment(text).unwrap(),
                segmentor.segment(&text.to_lowercase()).unwrap()
            );
        }
    }

    #[test]
    fn test_no_lowercase() {
        let segmentor = segmentor(false);
        assert!(!segmentor.merges().fold_case());
        assert_eq!(
            segmentor.segment("Hello <PAD><PAD>").unwrap(),
            vec!["Hello", "<PAD>", "<PAD>"]
        );
        // only the exact literal merges.
        assert_eq!(
            segmentor.segment("<pad> x").unwrap(),
            vec!["<", "pad", ">", "x"]
        );
    }

    #[test]
    fn test_disabled_specials_do_not_merge() {
        let config = SegmentationConfig::default()
            .with_specials(SpecialTokens::none().with(SpecialRole::Unk, Some("<UNK>")));
        let segmentor = TextSegmentor::from_config(&config).unwrap();
        assert_eq!(segmentor.merges().len(), 1);

        assert_eq!(
            segmentor.segment("<BOS> <UNK>").unwrap(),
            vec!["<", "bos", ">", "<UNK>"]
        );
    }

    #[test]
    fn test_for_each_token_matches_segment() {
        let segmentor = segmentor(true);
        let text = "<BOS> The CAT didn't sit. <EOS>";

        let mut seen = Vec::new();
        segmentor
            .for_each_token(text, &mut |t| seen.push(t.to_string()))
            .unwrap();

        assert_eq!(seen, segmentor.segment(text).unwrap());
        assert_eq!(
            seen,
            vec!["<BOS>", "the", "cat", "did", "n't", "sit", ".", "<EOS>"]
        );
    }

    #[test]
    fn test_external_splitter() {
        let segmentor = TextSegmentor::from_splitter(
            Arc::new(WhitespaceWordSplitter),
            &SegmentationConfig::default(),
        )
        .unwrap();

        assert_eq!(
            segmentor.segment("A <BOS> b,c").unwrap(),
            vec!["a", "<BOS>", "b,c"]
        );
    }

    #[test]
    fn test_segment_batch() {
        let segmentor = segmentor(true);
        assert_eq!(
            segmentor.segment_batch(&["a b", "", "C"]).unwrap(),
            vec![vec!["a", "b"], vec![], vec!["c"]]
        );
    }
}
