mod commands;
mod input_output;
mod logging;
mod tokenizer_args;
mod tokenizer_mode;

use clap::Parser;
use commands::Commands;

/// wvocab: build word vocabularies, and tokenize with them.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
