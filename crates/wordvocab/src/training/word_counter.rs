//! # Word Counter

use crate::{
    errors::WVResult,
    segmentation::TextSegmentor,
    training::CountType,
    types::{WVHashMap, WVHashSet},
};

/// Corpus-wide token frequency table.
///
/// Text is segmented by a [`TextSegmentor`]; every resulting token is counted,
/// except the reserved special literals, which never compete for a vocabulary slot.
#[derive(Debug, Clone)]
pub struct WordCounter<C: CountType = u64> {
    segmentor: TextSegmentor,
    reserved: WVHashSet<String>,
    counts: WVHashMap<String, C>,
}

impl<C: CountType> WordCounter<C> {
    /// Create a new word counter.
    ///
    /// ## Arguments
    /// * `segmentor` - the segmentor used on every sample.
    /// * `reserved` - tokens which are never counted.
    pub fn new<I, S>(
        segmentor: TextSegmentor,
        reserved: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segmentor,
            reserved: reserved.into_iter().map(Into::into).collect(),
            counts: WVHashMap::with_capacity(10_000),
        }
    }

    /// Get the segmentor.
    pub fn segmentor(&self) -> &TextSegmentor {
        &self.segmentor
    }

    /// The current counts.
    pub fn counts(&self) -> &WVHashMap<String, C> {
        &self.counts
    }

    /// Get the number of distinct tokens counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Release the word counts and return them.
    pub fn release(self) -> WVHashMap<String, C> {
        self.counts
    }

    /// Add `count` occurrences of `token`.
    fn add(
        counts: &mut WVHashMap<String, C>,
        token: &str,
        count: C,
    ) {
        match counts.get_mut(token) {
            Some(c) => *c += count,
            None => {
                counts.insert(token.to_string(), count);
            }
        }
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) -> WVResult<()> {
        let reserved = &self.reserved;
        let counts = &mut self.counts;
        self.segmentor
            .for_each_token(text.as_ref(), &mut |token| {
                if !reserved.contains(token) {
                    Self::add(counts, token, C::one());
                }
            })
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
        for sample in samples {
            self.update_from_text(sample)?;
        }
        log::debug!("word counter holds {} distinct tokens", self.counts.len());
        Ok(())
    }

    /// Sum another count table into this one.
    pub fn merge_counts(
        &mut self,
        other: WVHashMap<String, C>,
    ) {
        if self.counts.is_empty() {
            self.counts = other;
            return;
        }
        for (token, count) in other {
            match self.counts.get_mut(&token) {
                Some(c) => *c += count,
                None => {
                    self.counts.insert(token, count);
                }
            }
        }
    }

    /// Parallel version of [`Self::update_from_samples`].
    ///
    /// Samples are counted in independent partitions, which are summed;
    /// the result is identical to the sequential form.
    #[cfg(feature = "rayon")]
    pub fn par_update_from_samples<S>(
        &mut self,
        samples: &[S],
    ) -> WVResult<()>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let segmentor = &self.segmentor;
        let reserved = &self.reserved;

        let partial = samples
            .par_iter()
            .try_fold(WVHashMap::<String, C>::default, |mut acc, sample| {
                segmentor.for_each_token(sample.as_ref(), &mut |token| {
                    if !reserved.contains(token) {
                        Self::add(&mut acc, token, C::one());
                    }
                })?;
                WVResult::Ok(acc)
            })
            .try_reduce(WVHashMap::default, |a, b| {
                // fold the smaller table into the larger.
                Ok(if a.len() < b.len() {
                    Self::sum_into(b, a)
                } else {
                    Self::sum_into(a, b)
                })
            })?;

        self.merge_counts(partial);
        log::debug!("word counter holds {} distinct tokens", self.counts.len());
        Ok(())
    }

    #[cfg(feature = "rayon")]
    fn sum_into(
        mut into: WVHashMap<String, C>,
        from: WVHashMap<String, C>,
    ) -> WVHashMap<String, C> {
        for (token, count) in from {
            *into.entry(token).or_default() += count;
        }
        into
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::SegmentationConfig;

    fn counter() -> WordCounter<u32> {
        let segmentor = TextSegmentor::from_config(&SegmentationConfig::default()).unwrap();
        WordCounter::new(segmentor, ["<BOS>", "<EOS>", "<UNK>", "<PAD>"])
    }

    #[test]
    fn test_update_from_samples() {
        let mut counter = counter();
        counter.update_from_samples(["a b a", "A c"]).unwrap();

        assert_eq!(counter.len(), 3);
        let counts = counter.release();
        assert_eq!(counts["a"], 3);
        assert_eq!(counts["b"], 1);
        assert_eq!(counts["c"], 1);
    }

    #[test]
    fn test_reserved_are_not_counted() {
        let mut counter = counter();
        counter
            .update_from_text("<BOS> hello <UNK> <EOS>")
            .unwrap();

        let counts = counter.counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["hello"], 1);
    }

    #[test]
    fn test_empty() {
        let mut counter = counter();
        counter.update_from_samples(Vec::<String>::new()).unwrap();
        counter.update_from_text("   ").unwrap();
        assert!(counter.is_empty());
    }

    #[test]
    fn test_merge_counts() {
        let mut left = counter();
        left.update_from_text("a b").unwrap();

        let mut right = counter();
        right.update_from_text("b c c").unwrap();

        left.merge_counts(right.release());
        let counts = left.release();
        assert_eq!(counts["a"], 1);
        assert_eq!(counts["b"], 2);
        assert_eq!(counts["c"], 2);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_update_matches_sequential() {
        let samples: Vec<String> = (0..200)
            .map(|i| format!("w{} shared <PAD> w{}", i % 7, i % 3))
            .collect();

        let mut seq = counter();
        seq.update_from_samples(&samples).unwrap();

        let mut par = counter();
        par.par_update_from_samples(&samples).unwrap();

        assert_eq!(seq.release(), par.release());
    }
}
