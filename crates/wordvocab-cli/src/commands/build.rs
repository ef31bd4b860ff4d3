use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal},
};

use indicatif::ProgressBar;

use crate::{logging::LogArgs, tokenizer_args::TokenizerArgs};

/// Args for the build command.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Input text files; one sample per line.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Fraction of distinct tokens to keep, in (0, 1]; overrides the config.
    #[arg(long)]
    threshold: Option<f64>,

    /// Print the top N ranked tokens with their counts.
    #[arg(long)]
    top: Option<usize>,
}

impl BuildArgs {
    /// Run the build command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        // the vocab file is overwritten; never load it.
        let tokenizer = self.tokenizer.build_tokenizer()?;
        let threshold = self
            .threshold
            .unwrap_or(tokenizer.options().threshold);

        let progress_bar = if io::stderr().is_terminal() && !self.logging.quiet {
            ProgressBar::new(self.files.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let mut samples: Vec<String> = Vec::new();
        for path in &self.files {
            progress_bar.set_message(format!("Reading: {path}"));
            read_text_file(path, &mut samples)?;
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        log::info!(
            "Building vocab from {} samples in {} files (threshold {threshold})",
            samples.len(),
            self.files.len()
        );
        let ranked = tokenizer.build_vocab(&samples, threshold)?;

        log::info!("Vocabulary Size: {}", tokenizer.vocab_size());
        log::info!("output: {}", tokenizer.options().persist_path().display());

        if let Some(top) = self.top {
            for (rank, (token, count)) in ranked.iter().take(top).enumerate() {
                println!("{rank:>6}\t{count:>10}\t{token}");
            }
        }

        Ok(())
    }
}

fn read_text_file(
    path: &str,
    samples: &mut Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);
    for line in reader.lines() {
        samples.push(line?);
    }
    Ok(())
}
