//! # Word Tokenizer Facade

use std::{path::Path, sync::Arc};

use parking_lot::{Mutex, RwLock};

use crate::{
    errors::{WVResult, WordVocabError},
    segmentation::TextSegmentor,
    tokenizer::TokenizerOptions,
    types::TokenType,
    vocab::{
        SpecialRole,
        WordVocab,
        io::{load_tsv_vocab_path, save_tsv_vocab_path},
    },
};

/// Apply `f` to every batch item; order-preserving, the first error fails the batch.
fn map_batch<I, O, F>(
    batch: &[I],
    f: F,
) -> WVResult<Vec<O>>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> WVResult<O> + Sync + Send,
{
    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            use rayon::prelude::*;

            let results: Vec<WVResult<O>> = batch.par_iter().map(f).collect();
            results.into_iter().collect()
        } else {
            batch.iter().map(f).collect()
        }
    }
}

/// Word vocabulary tokenizer.
///
/// Combines:
///  * the [`TokenizerOptions`],
///  * a [`TextSegmentor`], and
///  * the current [`WordVocab`], once one is loaded or built.
///
/// A tokenizer with no vocabulary is "unready"; every encoding operation
/// fails with [`WordVocabError::UninitializedVocab`] until
/// [`load_vocab_path`](Self::load_vocab_path) or [`build_vocab`](Self::build_vocab)
/// succeeds.
///
/// The vocabulary is held as an immutable `Arc` snapshot; a load or build
/// constructs the replacement off to the side and swaps it in whole.
/// Each operation runs on the snapshot it started with.
///
/// Loads, builds, and [`set_vocab`](Self::set_vocab) are serialized;
/// a build holds the lock from counting until its vocab is installed.
pub struct WordTokenizer<T: TokenType = u32> {
    options: TokenizerOptions,
    segmentor: TextSegmentor,
    vocab: RwLock<Option<Arc<WordVocab<T>>>>,
    update_lock: Mutex<()>,
}

impl<T: TokenType> core::fmt::Debug for WordTokenizer<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("WordTokenizer")
            .field("options", &self.options)
            .field("vocab_size", &self.vocab_size())
            .finish()
    }
}

impl<T: TokenType> WordTokenizer<T> {
    /// Create a new tokenizer.
    ///
    /// If `options.vocab_file` names an existing file, it is loaded;
    /// otherwise the tokenizer starts unready, and a warning is logged.
    ///
    /// ## Arguments
    /// * `options` - the tokenizer options.
    ///
    /// ## Returns
    /// The tokenizer; or an error if the word pattern fails to compile,
    /// or the vocab file exists but cannot be loaded.
    pub fn new(options: TokenizerOptions) -> WVResult<Self> {
        let tokenizer = Self::unloaded(options)?;

        match tokenizer.options.vocab_file.clone() {
            Some(path) if path.is_file() => {
                tokenizer.load_vocab_path(&path)?;
            }
            Some(path) => {
                log::warn!(
                    "vocab file {} not found; build or load a vocab before use",
                    path.display()
                );
            }
            None => {
                log::warn!("no vocab file configured; build or load a vocab before use");
            }
        }

        Ok(tokenizer)
    }

    /// Create a new, unready, tokenizer.
    ///
    /// Unlike [`Self::new`], the `vocab_file` is never read;
    /// it is still the persist target for [`Self::build_vocab`].
    pub fn unloaded(options: TokenizerOptions) -> WVResult<Self> {
        let segmentor = TextSegmentor::from_config(&options.segmentation_config())?;
        Ok(Self {
            options,
            segmentor,
            vocab: RwLock::new(None),
            update_lock: Mutex::new(()),
        })
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the segmentor.
    pub fn segmentor(&self) -> &TextSegmentor {
        &self.segmentor
    }

    /// Get the current vocabulary snapshot, if ready.
    pub fn vocab(&self) -> Option<Arc<WordVocab<T>>> {
        self.vocab.read().clone()
    }

    /// Does the tokenizer have a vocabulary?
    pub fn is_ready(&self) -> bool {
        self.vocab.read().is_some()
    }

    /// The current vocabulary size; 0 when unready.
    pub fn vocab_size(&self) -> usize {
        self.vocab.read().as_ref().map_or(0, |v| v.len())
    }

    fn ready_vocab(&self) -> WVResult<Arc<WordVocab<T>>> {
        self.vocab().ok_or(WordVocabError::UninitializedVocab)
    }

    /// Replace the vocabulary.
    ///
    /// ## Returns
    /// The installed snapshot.
    pub fn set_vocab(
        &self,
        vocab: WordVocab<T>,
    ) -> Arc<WordVocab<T>> {
        let _guard = self.update_lock.lock();
        self.install(vocab)
    }

    fn install(
        &self,
        vocab: WordVocab<T>,
    ) -> Arc<WordVocab<T>> {
        if !vocab.has_special_prefix(&self.options.specials) {
            log::warn!("vocab does not begin with the configured special tokens");
        }
        let vocab = Arc::new(vocab);
        *self.vocab.write() = Some(vocab.clone());
        vocab
    }

    /// Load the vocabulary from a TSV vocab file, replacing any current one.
    ///
    /// On error the current vocabulary is kept.
    pub fn load_vocab_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> WVResult<Arc<WordVocab<T>>> {
        let _guard = self.update_lock.lock();
        let vocab = load_tsv_vocab_path::<T, _>(path.as_ref())?;
        log::info!(
            "read vocab file {} with {} tokens",
            path.as_ref().display(),
            vocab.len()
        );
        Ok(self.install(vocab))
    }

    /// Build a vocabulary from a corpus, persist it, and install it.
    ///
    /// The vocabulary is persisted to [`TokenizerOptions::persist_path`]
    /// before it is installed; on error the current vocabulary is kept.
    ///
    /// ## Arguments
    /// * `corpus` - the samples.
    /// * `threshold` - the fraction of distinct tokens to keep, in `(0, 1]`.
    ///
    /// ## Returns
    /// The selected `(token, count)` list, in rank order.
    pub fn build_vocab<S>(
        &self,
        corpus: &[S],
        threshold: f64,
    ) -> WVResult<Vec<(String, u64)>>
    where
        S: AsRef<str> + Sync,
    {
        let _guard = self.update_lock.lock();
        let mut trainer = self.options.trainer_options(threshold).init::<u64>()?;

        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                trainer.par_update_from_samples(corpus)?;
            } else {
                trainer.update_from_samples(corpus)?;
            }
        }

        let build = trainer.train::<T>()?;

        let path = self.options.persist_path();
        save_tsv_vocab_path(&build.vocab, &path)?;

        log::info!(
            "built vocab with {} tokens; saved to {}",
            build.vocab.len(),
            path.display()
        );

        self.install(build.vocab);
        Ok(build.ranked)
    }

    /// Look up the index of a special token role.
    ///
    /// ## Returns
    /// `None` if the role is disabled, or missing from the vocabulary.
    pub fn special_index(
        &self,
        role: SpecialRole,
    ) -> WVResult<Option<T>> {
        let vocab = self.ready_vocab()?;
        Ok(vocab.special_index(&self.options.specials, role))
    }

    fn tokenize_with(
        &self,
        vocab: &WordVocab<T>,
        text: &str,
    ) -> WVResult<Vec<String>> {
        let unk = self.options.specials.unk();
        self.segmentor
            .segment(text)?
            .into_iter()
            .map(|token| {
                if vocab.contains(&token) {
                    Ok(token)
                } else if let Some(unk) = unk {
                    Ok(unk.to_string())
                } else {
                    Err(WordVocabError::OutOfVocabulary { token })
                }
            })
            .collect()
    }

    fn encode_with<S: AsRef<str>>(
        &self,
        vocab: &WordVocab<T>,
        tokens: &[S],
    ) -> WVResult<Vec<T>> {
        let unk = self
            .options
            .specials
            .unk()
            .and_then(|lit| vocab.lookup_token(lit));
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                vocab
                    .lookup_token(token)
                    .or(unk)
                    .ok_or_else(|| WordVocabError::UnknownToken {
                        token: token.to_string(),
                    })
            })
            .collect()
    }

    fn decode_with(
        vocab: &WordVocab<T>,
        indices: &[T],
    ) -> WVResult<Vec<String>> {
        indices
            .iter()
            .map(|&index| {
                vocab
                    .lookup_index(index)
                    .map(str::to_string)
                    .ok_or_else(|| WordVocabError::IndexOutOfRange {
                        index: index.to_usize().unwrap_or(usize::MAX),
                        size: vocab.len(),
                    })
            })
            .collect()
    }

    /// Segment text into in-vocabulary tokens.
    ///
    /// Tokens missing from the vocabulary become the unknown token;
    /// with no unknown token configured, they fail with
    /// [`WordVocabError::OutOfVocabulary`].
    pub fn tokenize(
        &self,
        text: &str,
    ) -> WVResult<Vec<String>> {
        let vocab = self.ready_vocab()?;
        self.tokenize_with(&vocab, text)
    }

    /// Batch version of [`Self::tokenize`].
    pub fn tokenize_batch<S>(
        &self,
        texts: &[S],
    ) -> WVResult<Vec<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        let vocab = self.ready_vocab()?;
        map_batch(texts, |text| self.tokenize_with(&vocab, text.as_ref()))
    }

    /// Encode tokens into vocabulary indices.
    ///
    /// Tokens missing from the vocabulary become the unknown token's index;
    /// with no unknown token in the vocabulary, they fail with
    /// [`WordVocabError::UnknownToken`].
    pub fn encode<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> WVResult<Vec<T>> {
        let vocab = self.ready_vocab()?;
        self.encode_with(&vocab, tokens)
    }

    /// Batch version of [`Self::encode`].
    pub fn encode_batch<B, S>(
        &self,
        batch: &[B],
    ) -> WVResult<Vec<Vec<T>>>
    where
        B: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        let vocab = self.ready_vocab()?;
        map_batch(batch, |tokens| self.encode_with(&vocab, tokens.as_ref()))
    }

    /// Tokenize and encode text.
    pub fn encode_text(
        &self,
        text: &str,
    ) -> WVResult<Vec<T>> {
        let vocab = self.ready_vocab()?;
        let tokens = self.tokenize_with(&vocab, text)?;
        self.encode_with(&vocab, &tokens)
    }

    /// Decode vocabulary indices into tokens.
    pub fn decode(
        &self,
        indices: &[T],
    ) -> WVResult<Vec<String>> {
        let vocab = self.ready_vocab()?;
        Self::decode_with(&vocab, indices)
    }

    /// Batch version of [`Self::decode`].
    pub fn decode_batch<B>(
        &self,
        batch: &[B],
    ) -> WVResult<Vec<Vec<String>>>
    where
        B: AsRef<[T]> + Sync,
    {
        let vocab = self.ready_vocab()?;
        map_batch(batch, |indices| Self::decode_with(&vocab, indices.as_ref()))
    }

    /// Decode indices, and join the tokens with single spaces.
    pub fn decode_to_string(
        &self,
        indices: &[T],
    ) -> WVResult<String> {
        Ok(self.decode(indices)?.join(" "))
    }
}
