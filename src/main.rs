//! Reads a source file, generates text from it, and writes the result to a file.
//!
//! Usage: gentext [-d] <PREFIX_LENGTH> <NUM_WORDS> <SOURCE_FILE> <OUT_FILE>
//!
//! Log verbosity can be set with `GENTEXT_LOG`, e.g. `GENTEXT_LOG=gentext=debug`.

use std::fs;
use std::path::Path;
use std::process::exit;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gentext::TextGenerator;

mod cli;
use cli::Cli;

/// `GENTEXT_LOG` if set and valid, `gentext=info` otherwise. Debug mode always adds
/// `gentext=debug`, so the walk is traced whatever `GENTEXT_LOG` says.
fn log_filter(debug: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("gentext=info"));

    match "gentext=debug".parse::<Directive>() {
        Ok(directive) if debug => filter.add_directive(directive),
        _ => filter,
    }
}

fn init_tracing(debug: bool) {
    let env = std::env::var("GENTEXT_LOG").ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(log_filter(debug, env.as_deref()))
        .init();
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read source file {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let words = read_words(&cli.source_file)?;
    if config.prefix_len >= words.len() {
        bail!(
            "prefix length {} is not less than the number of words in {} ({})",
            config.prefix_len,
            cli.source_file.display(),
            words.len()
        );
    }

    let mut generator =
        TextGenerator::new(config, &words).context("could not build the Markov chain")?;
    let text = generator.generate();

    fs::write(&cli.out_file, text)
        .with_context(|| format!("can't write to output file {}", cli.out_file.display()))?;
    tracing::info!(
        words = cli.num_words,
        out = %cli.out_file.display(),
        "wrote generated text"
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        exit(1);
    }
}
