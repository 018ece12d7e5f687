//! At the heart of a [`SuccessorTable`](crate::SuccessorTable) is a [`Prefix`]: the last `k` words
//! of the walk, used as the state of the Markov chain.
//!
//! A [`Word`] is just a [`String`]. When using the `gentext` binary it is a whitespace-delimited
//! piece of the source file, punctuation included, and it is compared exactly as is.

use std::borrow::Borrow;
use std::fmt;

use hashbrown::Equivalent;
use itertools::Itertools;

use crate::error::{Error, Result};

/// Representation of a single word of the source.
pub type Word = String;

/// A borrowed version of [`Word`].
pub type WordRef<'a> = &'a str;

/// An owned, immutable window of consecutive [`Word`]s.
///
/// Two prefixes are equal when they hold the same words in the same order, and they hash the same
/// way a `[&str]` or `[String]` with those words would, so a table can be queried with borrowed
/// words.
///
/// ```
/// # use gentext::Prefix;
/// let p = Prefix::new(&["a", "b", "c"]).unwrap();
/// let q = p.shift_in("d");
///
/// assert_eq!(q, Prefix::new(&["b", "c", "d"]).unwrap());
/// assert_eq!(p.to_string(), "a b c");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix {
    words: Vec<Word>,
}

impl Prefix {
    /// Copies `words` into a new prefix. Fails if `words` is empty.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyPrefix);
        }
        Ok(Self {
            words: words.iter().map(|w| w.as_ref().to_string()).collect(),
        })
    }

    /// Returns a new prefix with the oldest word dropped and `word` appended. `self` is left
    /// untouched.
    pub fn shift_in(&self, word: WordRef<'_>) -> Self {
        let mut words = Vec::with_capacity(self.words.len());
        words.extend(self.words[1..].iter().cloned());
        words.push(word.to_string());
        Self { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`, a prefix cannot be constructed without words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.iter().format(" "))
    }
}

impl Borrow<[Word]> for Prefix {
    fn borrow(&self) -> &[Word] {
        &self.words
    }
}

impl PartialEq<[WordRef<'_>]> for Prefix {
    fn eq(&self, other: &[WordRef<'_>]) -> bool {
        self.words.len() == other.len() && self.words.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl Equivalent<Prefix> for [WordRef<'_>] {
    fn equivalent(&self, key: &Prefix) -> bool {
        key.eq(self)
    }
}
