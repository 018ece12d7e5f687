use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;

use gentext::{GeneratorConfig, DEFAULT_LINE_WIDTH};

#[derive(Parser, Debug)]
#[command(
    name = "gentext",
    about = "Generate random text that mimics a source file, using a word-level Markov chain",
    version
)]
pub struct Cli {
    /// Seed the generator with a fixed value and log every step of the walk
    #[arg(short, long)]
    pub debug: bool,

    /// Number of words in each prefix
    #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub prefix_length: usize,

    /// Number of words to generate
    #[arg(value_parser = RangedU64ValueParser::<usize>::new())]
    pub num_words: usize,

    /// Text file to learn from
    pub source_file: PathBuf,

    /// File to write the generated text to, created if missing
    pub out_file: PathBuf,

    /// Maximum characters per output line
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH,
          value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub line_width: usize,
}

impl Cli {
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.prefix_length, self.num_words)
            .with_line_width(self.line_width)
            .with_debug(self.debug)
    }
}
