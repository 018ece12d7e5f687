//! Random walks over a [`SuccessorTable`], turned into wrapped text.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::successors::Successors;
use crate::table::SuccessorTable;
use crate::trace::{LogTrace, NoTrace, TraceEvent, TraceSink};
use crate::wrap::LineWrapper;

/// Line width used when none is given.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Seed of the generator in debug mode, so debug runs can be reproduced exactly.
pub const DEBUG_SEED: u64 = 1;

/// What to generate and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of words in a prefix.
    pub prefix_len: usize,
    /// Number of words to emit.
    pub num_words: usize,
    /// Maximum characters per output line.
    pub line_width: usize,
    /// Seed deterministically and trace every step through [`tracing`].
    pub debug: bool,
}

impl GeneratorConfig {
    pub fn new(prefix_len: usize, num_words: usize) -> Self {
        Self {
            prefix_len,
            num_words,
            line_width: DEFAULT_LINE_WIDTH,
            debug: false,
        }
    }

    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix_len == 0 {
            return Err(Error::ZeroPrefixLength);
        }
        if self.line_width == 0 {
            return Err(Error::ZeroLineWidth);
        }
        Ok(())
    }

    /// [`DEBUG_SEED`] in debug mode, OS entropy otherwise.
    pub fn seed_rng(&self) -> StdRng {
        if self.debug {
            StdRng::seed_from_u64(DEBUG_SEED)
        } else {
            StdRng::from_entropy()
        }
    }
}

/// Generates text that mimics a source by walking a `prefix_len`-word Markov chain built from it.
///
/// ```
/// # use gentext::{GeneratorConfig, TextGenerator};
/// let source = "the cat sat on the mat and the cat ran".split_whitespace().collect::<Vec<_>>();
/// let config = GeneratorConfig::new(1, 12).with_line_width(20);
/// let mut generator = TextGenerator::new(config, &source).unwrap();
///
/// let text = generator.generate();
/// assert_eq!(text.split_whitespace().count(), 12);
/// assert!(text.lines().all(|l| l.len() <= 20));
/// ```
#[derive(Clone, Debug)]
pub struct TextGenerator<R = StdRng> {
    config: GeneratorConfig,
    table: SuccessorTable,
    rng: R,
}

impl TextGenerator {
    /// Builds the model from `source`, seeding the generator as described by
    /// [`GeneratorConfig::seed_rng()`].
    ///
    /// Fails if the config is invalid, or if `source` has no more than `prefix_len` words.
    pub fn new<S: AsRef<str>>(config: GeneratorConfig, source: &[S]) -> Result<Self> {
        let rng = config.seed_rng();
        Self::with_rng(config, source, rng)
    }
}

impl<R: Rng> TextGenerator<R> {
    /// Like [`TextGenerator::new()`], but draws all randomness from `rng`.
    pub fn with_rng<S: AsRef<str>>(config: GeneratorConfig, source: &[S], rng: R) -> Result<Self> {
        config.validate()?;
        let table = SuccessorTable::build(config.prefix_len, source)?;
        Ok(Self { config, table, rng })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn table(&self) -> &SuccessorTable {
        &self.table
    }

    /// Generates `num_words` words. In debug mode every step is logged at `DEBUG` level.
    pub fn generate(&mut self) -> String {
        if self.config.debug {
            self.generate_with(&mut LogTrace)
        } else {
            self.generate_with(&mut NoTrace)
        }
    }

    /// Generates `num_words` words, reporting each step to `sink`.
    ///
    /// The walk starts at a random known prefix. Whenever it reaches a prefix that never had a
    /// successor (the last words of the source), it restarts from another random known prefix.
    ///
    /// Randomness is drawn in a fixed order: one draw for the starting prefix, then per word one
    /// draw for a restart if needed and one for the word itself.
    pub fn generate_with<T: TraceSink + ?Sized>(&mut self, sink: &mut T) -> String {
        let table = &self.table;
        let rng = &mut self.rng;
        let num_words = self.config.num_words;
        let mut out = LineWrapper::new(self.config.line_width);

        let mut prefix = random_start(table, rng, sink).prefix().clone();

        for i in 0..num_words {
            sink.record(&TraceEvent::Prefix(&prefix));

            let entry = match table.get(&prefix) {
                Some(entry) => entry,
                None => {
                    sink.record(&TraceEvent::EndOfFile);
                    let entry = random_start(table, rng, sink);
                    sink.record(&TraceEvent::Prefix(entry.prefix()));
                    entry
                }
            };
            sink.record(&TraceEvent::Successors(entry.words()));

            let word = entry.choose(rng);
            sink.record(&TraceEvent::Word(word));

            out.push_word(word, i + 1 == num_words);
            prefix = entry.prefix().shift_in(word);
        }

        out.finish()
    }
}

fn random_start<'t, T: TraceSink + ?Sized>(
    table: &'t SuccessorTable,
    rng: &mut impl Rng,
    sink: &mut T,
) -> &'t Successors {
    let entry = table.random_entry(rng);
    sink.record(&TraceEvent::InitialPrefix(entry.prefix()));
    entry
}
