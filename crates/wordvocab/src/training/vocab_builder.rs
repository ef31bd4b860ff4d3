//! # Word Vocabulary Builder
//!
//! ## Example
//! ```rust,no_run
//! use wordvocab::training::WordVocabTrainerOptions;
//! use wordvocab::vocab::WordVocab;
//!
//! fn example<I, S>(samples: I) -> wordvocab::WVResult<WordVocab<u32>>
//! where
//!     I: IntoIterator<Item = S>,
//!     S: AsRef<str>,
//! {
//!     let mut trainer = WordVocabTrainerOptions::new(0.7).init::<u64>()?;
//!     trainer.update_from_samples(samples)?;
//!     Ok(trainer.train::<u32>()?.vocab)
//! }
//! ```

use core::cmp::Ordering;

use crate::{
    errors::WVResult,
    segmentation::{SegmentationConfig, TextSegmentor},
    training::{CountType, WordCounter},
    types::{TokenType, WVHashMap},
    vocab::{
        WordVocab,
        utility::validators::{try_threshold, try_vocab_size},
    },
};

/// The default fraction of distinct tokens kept.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Options for [`WordVocabTrainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocabTrainerOptions {
    /// The fraction of distinct corpus tokens kept, in `(0, 1]`.
    pub threshold: f64,

    /// Segmentation of the corpus, and the special tokens to prepend.
    pub segmentation: SegmentationConfig,
}

impl Default for WordVocabTrainerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl WordVocabTrainerOptions {
    /// Create new options with the default segmentation.
    ///
    /// ## Arguments
    /// * `threshold` - the fraction of distinct tokens to keep.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            segmentation: SegmentationConfig::default(),
        }
    }

    /// Sets the selection threshold.
    pub fn with_threshold(
        self,
        threshold: f64,
    ) -> Self {
        Self { threshold, ..self }
    }

    /// Sets the segmentation configuration.
    pub fn with_segmentation(
        self,
        segmentation: SegmentationConfig,
    ) -> Self {
        Self {
            segmentation,
            ..self
        }
    }

    /// Initializes a [`WordVocabTrainer`] from these options.
    ///
    /// ## Returns
    /// The trainer; or an error if the threshold is invalid,
    /// or the word pattern fails to compile.
    pub fn init<C>(self) -> WVResult<WordVocabTrainer<C>>
    where
        C: CountType,
    {
        try_threshold(self.threshold)?;
        let segmentor = TextSegmentor::from_config(&self.segmentation)?;
        Ok(WordVocabTrainer::new(segmentor, self))
    }
}

/// The result of [`WordVocabTrainer::train`].
#[derive(Debug, Clone)]
pub struct WordVocabBuild<T: TokenType, C: CountType> {
    /// The vocabulary: enabled specials, then the selected tokens.
    pub vocab: WordVocab<T>,

    /// The selected tokens with their corpus counts, in rank order.
    pub ranked: Vec<(String, C)>,
}

/// Frequency-threshold word vocabulary trainer.
#[derive(Debug, Clone)]
pub struct WordVocabTrainer<C: CountType = u64> {
    /// Trainer options.
    pub options: WordVocabTrainerOptions,

    /// The corpus word counts.
    pub counter: WordCounter<C>,
}

impl<C: CountType> WordVocabTrainer<C> {
    /// Create a new trainer around a configured segmentor.
    ///
    /// Prefer [`WordVocabTrainerOptions::init`].
    pub fn new(
        segmentor: TextSegmentor,
        options: WordVocabTrainerOptions,
    ) -> Self {
        let counter = WordCounter::new(segmentor, options.segmentation.specials.literals());
        Self { options, counter }
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) -> WVResult<()> {
        self.counter.update_from_text(text)
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) -> WVResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.counter.update_from_samples(samples)
    }

    /// Parallel version of [`Self::update_from_samples`].
    #[cfg(feature = "rayon")]
    pub fn par_update_from_samples<S>(
        &mut self,
        samples: &[S],
    ) -> WVResult<()>
    where
        S: AsRef<str> + Sync,
    {
        self.counter.par_update_from_samples(samples)
    }

    /// Trains a [`WordVocab<T>`].
    ///
    /// The resulting vocab will contain:
    /// * the enabled special tokens, in role order (BOS, EOS, UNK, PAD),
    /// * the top `floor(threshold * distinct)` corpus tokens, by descending
    ///   count; ties ordered by ascending token bytes.
    ///
    /// ## Returns
    /// The vocab, and the selected ranked counts.
    pub fn train<T>(self) -> WVResult<WordVocabBuild<T, C>>
    where
        T: TokenType,
    {
        let threshold = try_threshold(self.options.threshold)?;

        let mut ranked = rank_counts(self.counter.release());
        let distinct = ranked.len();
        ranked.truncate(select_count(threshold, distinct));

        let specials = self.options.segmentation.specials.literals();
        try_vocab_size::<T>(specials.len() + ranked.len())?;

        let vocab = WordVocab::from_tokens(
            specials
                .into_iter()
                .map(str::to_string)
                .chain(ranked.iter().map(|(token, _)| token.clone())),
        )?;

        log::info!(
            "selected {} of {} distinct tokens (threshold {}); vocab size {}",
            ranked.len(),
            distinct,
            threshold,
            vocab.len()
        );

        Ok(WordVocabBuild { vocab, ranked })
    }
}

/// The number of ranked tokens kept for `distinct` candidates.
pub fn select_count(
    threshold: f64,
    distinct: usize,
) -> usize {
    ((threshold * distinct as f64).floor() as usize).min(distinct)
}

/// Rank a count table by descending count; ties by ascending token bytes.
pub fn rank_counts<C: CountType>(counts: WVHashMap<String, C>) -> Vec<(String, C)> {
    let mut ranked: Vec<(String, C)> = counts.into_iter().collect();
    ranked.sort_unstable_by(|(at, ac), (bt, bc)| match bc.cmp(ac) {
        Ordering::Equal => at.as_bytes().cmp(bt.as_bytes()),
        ord => ord,
    });
    ranked
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        errors::WordVocabError,
        vocab::{SpecialRole, SpecialTokens},
    };

    type T = u32;
    type C = u64;

    fn build(
        options: WordVocabTrainerOptions,
        samples: &[&str],
    ) -> WordVocabBuild<T, C> {
        let mut trainer = options.init::<C>().unwrap();
        trainer.update_from_samples(samples).unwrap();
        trainer.train::<T>().unwrap()
    }

    #[test]
    fn test_build_scenario() {
        let result = build(WordVocabTrainerOptions::new(1.0), &["a b a", "a c"]);

        assert_eq!(
            result.vocab.tokens(),
            &["<BOS>", "<EOS>", "<UNK>", "<PAD>", "a", "b", "c"]
        );
        assert_eq!(
            result.ranked,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 1),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_threshold_floor() {
        // 4 distinct tokens; floor(0.7 * 4) = 2.
        let result = build(
            WordVocabTrainerOptions::new(0.7),
            &["x x x y y z w"],
        );
        assert_eq!(
            result.vocab.tokens(),
            &["<BOS>", "<EOS>", "<UNK>", "<PAD>", "x", "y"]
        );

        // floor(0.2 * 4) = 0.
        let result = build(
            WordVocabTrainerOptions::new(0.2),
            &["x x x y y z w"],
        );
        assert_eq!(result.vocab.len(), 4);
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_tie_break_by_bytes() {
        let result = build(WordVocabTrainerOptions::new(1.0), &["b a c B"]);
        let tokens: Vec<&str> = result.ranked.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["b", "a", "c"]);

        let counts = [("z", 2), ("Z", 2), ("é", 2), ("a", 1)]
            .into_iter()
            .map(|(t, c)| (t.to_string(), c as C))
            .collect::<WVHashMap<_, _>>();
        let ranked: Vec<String> = rank_counts(counts).into_iter().map(|(t, _)| t).collect();
        assert_eq!(ranked, vec!["Z", "z", "é", "a"]);
    }

    #[test]
    fn test_specials_are_never_duplicated() {
        let result = build(
            WordVocabTrainerOptions::new(1.0),
            &["<UNK> <UNK> <UNK> <PAD> a"],
        );
        assert_eq!(
            result.vocab.tokens(),
            &["<BOS>", "<EOS>", "<UNK>", "<PAD>", "a"]
        );
    }

    #[test]
    fn test_lowercase_specials_leave_no_fragments() {
        let result = build(
            WordVocabTrainerOptions::new(1.0),
            &["a <unk> b", "a <UNK> c", "<Pad> <eos>"],
        );
        assert_eq!(
            result.vocab.tokens(),
            &["<BOS>", "<EOS>", "<UNK>", "<PAD>", "a", "b", "c"]
        );
        for fragment in ["<", ">", "unk", "pad", "eos"] {
            assert!(!result.vocab.contains(fragment));
        }
    }

    #[test]
    fn test_disabled_specials() {
        let segmentation = SegmentationConfig::default().with_specials(
            SpecialTokens::default()
                .with(SpecialRole::Bos, None::<String>)
                .with(SpecialRole::Eos, None::<String>),
        );
        let options = WordVocabTrainerOptions::new(1.0).with_segmentation(segmentation);

        // a disabled literal is ordinary text; its fragments are counted.
        let result = build(options, &["a <BOS>"]);
        assert_eq!(
            result.vocab.tokens(),
            &["<UNK>", "<PAD>", "<", ">", "a", "bos"]
        );
    }

    #[test]
    fn test_empty_corpus() {
        let result = build(WordVocabTrainerOptions::new(0.5), &[]);
        assert_eq!(
            result.vocab.tokens(),
            &["<BOS>", "<EOS>", "<UNK>", "<PAD>"]
        );
        assert!(result.ranked.is_empty());
    }

    #[test]
    fn test_invalid_threshold() {
        for bad in [0.0, -1.0, 1.5, f64::NAN] {
            assert!(matches!(
                WordVocabTrainerOptions::new(bad).init::<C>(),
                Err(WordVocabError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_vocab_size_overflow() {
        let samples: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
        let mut trainer = WordVocabTrainerOptions::new(1.0).init::<C>().unwrap();
        trainer.update_from_samples(&samples).unwrap();

        assert!(matches!(
            trainer.train::<u8>(),
            Err(WordVocabError::VocabSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_select_count() {
        assert_eq!(select_count(1.0, 3), 3);
        assert_eq!(select_count(0.7, 10), 7);
        assert_eq!(select_count(0.5, 3), 1);
        assert_eq!(select_count(0.5, 0), 0);
    }

    fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-e]{1,2}( [a-e]{1,2}){0,6}", 0..12)
    }

    proptest! {
        #[test]
        fn prop_threshold_monotonic(
            corpus in corpus_strategy(),
            lo in 1u32..=100,
            hi in 1u32..=100,
        ) {
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            let samples: Vec<&str> = corpus.iter().map(String::as_str).collect();

            let small = build(WordVocabTrainerOptions::new(lo as f64 / 100.0), &samples);
            let large = build(WordVocabTrainerOptions::new(hi as f64 / 100.0), &samples);

            prop_assert!(small.vocab.len() <= large.vocab.len());
            prop_assert_eq!(
                small.vocab.tokens(),
                &large.vocab.tokens()[..small.vocab.len()]
            );
        }

        #[test]
        fn prop_special_prefix(corpus in corpus_strategy()) {
            let samples: Vec<&str> = corpus.iter().map(String::as_str).collect();
            let result = build(WordVocabTrainerOptions::new(1.0), &samples);

            let specials = SpecialTokens::default();
            prop_assert!(result.vocab.has_special_prefix(&specials));
            prop_assert_eq!(result.vocab.len(), specials.len() + result.ranked.len());
        }
    }
}
