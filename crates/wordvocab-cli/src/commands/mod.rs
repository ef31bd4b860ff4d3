mod build;
mod cat;

/// Subcommands for wvocab
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocab from text files.
    Build(build::BuildArgs),

    /// Act as a streaming tokenizer.
    Cat(cat::CatArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
        }
    }
}
