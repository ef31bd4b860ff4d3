use wordvocab::{TokenizerOptions, WordTokenizer};

/// Tokenizer configuration arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// JSON tokenizer config; flags below override it.
    #[arg(long, default_value = None)]
    config: Option<String>,

    /// The vocab file.
    #[arg(long, default_value = None)]
    vocab_file: Option<String>,

    /// Keep word case.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_lower_case: bool,
}

impl TokenizerArgs {
    /// Resolve the tokenizer options.
    pub fn options(&self) -> Result<TokenizerOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                log::info!("config: {path}");
                TokenizerOptions::from_json_path(path)?
            }
            None => TokenizerOptions::default(),
        };

        if let Some(vocab_file) = &self.vocab_file {
            options = options.with_vocab_file(Some(vocab_file));
        }
        if self.no_lower_case {
            options = options.with_lower_case(false);
        }
        Ok(options)
    }

    /// Construct the tokenizer, loading the vocab file.
    pub fn init_tokenizer(&self) -> Result<WordTokenizer<u32>, Box<dyn std::error::Error>> {
        Ok(WordTokenizer::new(self.options()?)?)
    }

    /// Construct an unready tokenizer; the vocab file is only a build target.
    pub fn build_tokenizer(&self) -> Result<WordTokenizer<u32>, Box<dyn std::error::Error>> {
        Ok(WordTokenizer::unloaded(self.options()?)?)
    }
}
