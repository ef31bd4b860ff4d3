use std::io::{BufRead, Write};

use wordvocab::WordTokenizer;

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tokenizer_args::TokenizerArgs,
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.init_tokenizer()?;
        if !tokenizer.is_ready() {
            return Err("no vocab loaded; pass --vocab-file with an existing vocab".into());
        }

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(&mut reader, &mut writer, &tokenizer)?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &tokenizer)?,
            TokenizerMode::Tokenize => run_cat_tokenize(&mut reader, &mut writer, &tokenizer)?,
        }

        Ok(())
    }
}

fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &WordTokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let indices = tokenizer.encode_text(&line?)?;

        for (idx, index) in indices.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, index)?;
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &WordTokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let indices = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;

        writeln!(writer, "{}", tokenizer.decode_to_string(&indices)?)?;
        writer.flush()?;
    }
    Ok(())
}

fn run_cat_tokenize(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &WordTokenizer<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = tokenizer.tokenize(&line?)?;

        writeln!(writer, "{}", tokens.join(" "))?;
        writer.flush()?;
    }
    Ok(())
}
