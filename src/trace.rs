//! Observing a generation walk step by step.
//!
//! [`TextGenerator::generate_with()`](crate::TextGenerator::generate_with()) reports every
//! decision it makes to a [`TraceSink`]. Sinks only observe: they never change which words are
//! picked.

use std::fmt;

use itertools::Itertools;

use crate::prefix::{Prefix, Word};

/// One step of a generation walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// A prefix was drawn at random, either to start the walk or after falling off the table.
    InitialPrefix(&'a Prefix),
    /// The prefix about to be looked up.
    Prefix(&'a Prefix),
    /// The words that may follow the current prefix.
    Successors(&'a [Word]),
    /// The current prefix has no successors; a new one is about to be drawn.
    EndOfFile,
    /// The word that was emitted.
    Word(&'a str),
}

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialPrefix(p) => write!(f, "chose a new initial prefix: {p}"),
            Self::Prefix(p) => write!(f, "prefix: {p}"),
            Self::Successors(words) => write!(f, "successors: {}", words.iter().format(" ")),
            Self::EndOfFile => f.write_str("successors: <END OF FILE>"),
            Self::Word(w) => write!(f, "word generated: {w}"),
        }
    }
}

/// Receives [`TraceEvent`]s.
pub trait TraceSink {
    fn record(&mut self, event: &TraceEvent<'_>);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline]
    fn record(&mut self, _event: &TraceEvent<'_>) {}
}

/// Forwards every event as a `DEBUG` level [`tracing`] record.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn record(&mut self, event: &TraceEvent<'_>) {
        tracing::debug!("{event}");
    }
}

/// Collects the rendered events, one line each.
impl TraceSink for Vec<String> {
    fn record(&mut self, event: &TraceEvent<'_>) {
        self.push(event.to_string());
    }
}
