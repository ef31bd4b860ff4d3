/// The tokenizer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Encode from text to indices.
    Encode,

    /// Decode from indices to tokens.
    Decode,

    /// Split text into in-vocabulary tokens.
    Tokenize,
}

/// Tokenizer mode argument group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to indices.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from indices to tokens.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,

    /// Split text into in-vocabulary tokens.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    tokenize: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        if self.encode {
            TokenizerMode::Encode
        } else if self.decode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Tokenize
        }
    }
}
