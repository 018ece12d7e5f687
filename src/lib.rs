//! Word-level Markov chain text generation.
//!
//! A [`SuccessorTable`] records, for every window of `k` consecutive words of a source text (a
//! [`Prefix`]), which words came right after it. Duplicates are kept, so a word that followed a
//! prefix twice is twice as likely to be picked. A [`TextGenerator`] then walks the table from a
//! random prefix, emitting one word at a time and wrapping lines at a fixed width.
//!
//! ```
//! # use gentext::{GeneratorConfig, TextGenerator};
//! let source = "a b a b a c".split_whitespace().collect::<Vec<_>>();
//! let mut generator = TextGenerator::new(GeneratorConfig::new(1, 20), &source).unwrap();
//!
//! let text = generator.generate();
//! assert_eq!(text.split_whitespace().count(), 20);
//! ```
//!
//! # Reproducibility
//!
//! With [`GeneratorConfig::debug`] set, the generator is seeded with [`DEBUG_SEED`] and every step
//! of the walk is logged through [`tracing`]. Use [`TextGenerator::with_rng()`] to bring your own
//! random number generator, and [`TextGenerator::generate_with()`] to observe the walk with any
//! [`TraceSink`].
//!
//! # Features
//!
//! - `inline-more` - Forwards to the [`hashbrown`](https://crates.io/crates/hashbrown) feature of
//! the same name. Enabled by default.

pub mod error;
pub mod generator;
pub mod prefix;
pub mod successors;
pub mod table;
pub mod trace;
pub mod wrap;

pub use error::{Error, Result};
pub use generator::{GeneratorConfig, TextGenerator, DEBUG_SEED, DEFAULT_LINE_WIDTH};
pub use prefix::{Prefix, Word, WordRef};
pub use successors::Successors;
pub use table::{SuccessorTable, SuccessorTableBuilder};
pub use trace::{LogTrace, NoTrace, TraceEvent, TraceSink};
pub use wrap::{LineWrapper, LINE_SEPARATOR};
