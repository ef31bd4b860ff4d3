//! # TSV Vocabulary IO
//!
//! Lines are:
//! ```terminaloutput
//! {INDEX}\t{TOKEN}
//! ```
//!
//! The index is the 0-based position of the line; there are no gaps,
//! and no trailing metadata.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{WVResult, WordVocabError},
    types::{TokenType, WVHashSet},
    vocab::WordVocab,
};

/// Load a [`WordVocab`] from a TSV vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_tsv_vocab_path<T, P>(path: P) -> WVResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_tsv_vocab(reader)
}

/// Read a [`WordVocab`] from a TSV vocab line reader.
///
/// The index column must equal the line position;
/// any mismatch fails the whole read.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_tsv_vocab<T, R>(reader: R) -> WVResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut tokens = Vec::new();
    let mut seen = WVHashSet::default();
    for (position, line) in reader.lines().enumerate() {
        let line_no = position + 1;
        let format_err = |message: String| WordVocabError::Format {
            line: line_no,
            message,
        };
        let line = line.map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => format_err(format!("invalid UTF-8: {e}")),
            _ => e.into(),
        })?;

        let (index, token) = line
            .split_once('\t')
            .ok_or_else(|| format_err("missing tab separator".to_string()))?;

        let index: usize = index
            .parse()
            .map_err(|e| format_err(format!("bad index {index:?}: {e}")))?;
        if index != position {
            return Err(format_err(format!(
                "index {index} does not match position {position}"
            )));
        }

        if !seen.insert(token.to_string()) {
            return Err(format_err(format!("duplicate token {token:?}")));
        }
        tokens.push(token.to_string());
    }

    WordVocab::from_tokens(tokens)
}

/// Save a [`WordVocab`] to a TSV vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_tsv_vocab_path<T, P>(
    vocab: &WordVocab<T>,
    path: P,
) -> WVResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    check_representable(vocab)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_tsv_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Tokens containing line breaks cannot be stored one per line.
fn check_representable<T: TokenType>(vocab: &WordVocab<T>) -> WVResult<()> {
    match vocab
        .tokens()
        .iter()
        .find(|t| t.contains(['\n', '\r']))
    {
        Some(token) => Err(WordVocabError::VocabConflict(format!(
            "token {token:?} contains a line break"
        ))),
        None => Ok(()),
    }
}

/// Write a [`WordVocab`] to a [`Write`] writer.
///
/// Tokens containing line breaks cannot be represented, and are rejected
/// before anything is written.
pub fn write_tsv_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> WVResult<()>
where
    T: TokenType,
    W: Write,
{
    check_representable(vocab)?;

    for (idx, token) in vocab.tokens().iter().enumerate() {
        writeln!(writer, "{idx}\t{token}")?;
    }
    Ok(())
}
