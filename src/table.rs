//! See the top level crate documentation for information about the [`SuccessorTable`] type.

use std::hash::Hash;

use hashbrown::{Equivalent, HashMap};
use rand::Rng;

use crate::error::{Error, Result};
use crate::prefix::{Prefix, Word, WordRef};
use crate::successors::Successors;

/// Maps every [`Prefix`] seen in the source to the words that followed it.
///
/// ```
/// # use gentext::SuccessorTable;
/// let table = SuccessorTable::build(1, &["a", "b", "a", "b", "a", "c"]).unwrap();
///
/// assert_eq!(table.successors(["a"].as_slice()).unwrap(), ["b", "b", "c"]);
/// assert_eq!(table.successors(["b"].as_slice()).unwrap(), ["a", "a"]);
///
/// // "c" ends the source, so nothing ever followed it
/// assert!(table.successors(["c"].as_slice()).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SuccessorTable {
    prefix_len: usize,
    index: HashMap<Prefix, usize>,
    /// In the order each prefix was first seen. Never empty.
    entries: Vec<Successors>,
}

impl SuccessorTable {
    pub fn builder(prefix_len: usize) -> Result<SuccessorTableBuilder> {
        SuccessorTableBuilder::new(prefix_len)
    }

    /// Builds a table from a single source in one pass.
    pub fn build<S: AsRef<str>>(prefix_len: usize, source: &[S]) -> Result<Self> {
        let mut b = SuccessorTableBuilder::new(prefix_len)?;
        b.feed_words(source)?;
        b.build()
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// Number of distinct prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get<Q>(&self, prefix: &Q) -> Option<&Successors>
    where
        Q: Hash + Equivalent<Prefix> + ?Sized,
    {
        self.index.get(prefix).map(|&i| &self.entries[i])
    }

    /// The words seen after `prefix`, or `None` if `prefix` never had a successor.
    pub fn successors<Q>(&self, prefix: &Q) -> Option<&[Word]>
    where
        Q: Hash + Equivalent<Prefix> + ?Sized,
    {
        self.get(prefix).map(Successors::words)
    }

    pub fn contains<Q>(&self, prefix: &Q) -> bool
    where
        Q: Hash + Equivalent<Prefix> + ?Sized,
    {
        self.index.contains_key(prefix)
    }

    /// All known prefixes, in the order they were first seen.
    pub fn prefixes(&self) -> impl Iterator<Item = &Prefix> + '_ {
        self.entries.iter().map(Successors::prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Successors> + '_ {
        self.entries.iter()
    }

    /// Picks a random word that has followed `prefix`.
    ///
    /// If the table has never seen `prefix`, `None` is returned and `rng` is not touched.
    pub fn choose_successor<Q>(&self, rng: &mut impl Rng, prefix: &Q) -> Option<&Word>
    where
        Q: Hash + Equivalent<Prefix> + ?Sized,
    {
        Some(self.get(prefix)?.choose(rng))
    }

    /// Picks an entry uniformly over distinct prefixes, regardless of how often each occurred.
    pub fn random_entry(&self, rng: &mut impl Rng) -> &Successors {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }
}

/// Builds a [`SuccessorTable`] by being fed word sequences and recording which word follows each
/// window of `prefix_len` words.
#[derive(Clone, Debug)]
pub struct SuccessorTableBuilder {
    prefix_len: usize,
    index: HashMap<Prefix, usize>,
    entries: Vec<Successors>,
    fed: usize,
}

impl SuccessorTableBuilder {
    pub fn new(prefix_len: usize) -> Result<Self> {
        if prefix_len == 0 {
            return Err(Error::ZeroPrefixLength);
        }
        Ok(Self {
            prefix_len,
            index: HashMap::new(),
            entries: Vec::new(),
            fed: 0,
        })
    }

    /// Uses up the builder and creates a new table.
    ///
    /// Fails if the builder has not recorded a single occurrence.
    pub fn build(self) -> Result<SuccessorTable> {
        if self.entries.is_empty() {
            return Err(Error::EmptyTable);
        }
        tracing::debug!(
            prefix_len = self.prefix_len,
            prefixes = self.entries.len(),
            words = self.fed,
            "built successor table"
        );

        Ok(SuccessorTable {
            prefix_len: self.prefix_len,
            index: self.index,
            entries: self.entries,
        })
    }

    /// Add the occurrence of `next` following `prefix`.
    pub fn add_occurrence(&mut self, prefix: &Prefix, next: WordRef<'_>) -> Result<()> {
        if prefix.len() != self.prefix_len {
            return Err(Error::PrefixLength {
                expected: self.prefix_len,
                found: prefix.len(),
            });
        }

        match self.index.get(prefix) {
            Some(&i) => self.entries[i].push(next),
            None => {
                self.index.insert(prefix.clone(), self.entries.len());
                self.entries.push(Successors::new(prefix.clone(), next));
            }
        }
        Ok(())
    }

    /// Feeds the builder with another word sequence, sliding a window of `prefix_len` words over
    /// it. Windows never reach across two calls.
    ///
    /// Fails if `source` is too short to hold a single prefix and its successor.
    pub fn feed_words<S: AsRef<str>>(&mut self, source: &[S]) -> Result<()> {
        if source.len() <= self.prefix_len {
            return Err(Error::SourceTooShort {
                words: source.len(),
                prefix_len: self.prefix_len,
            });
        }

        let mut prefix = Prefix::new(&source[..self.prefix_len])?;
        for word in &source[self.prefix_len..] {
            let word = word.as_ref();
            self.add_occurrence(&prefix, word)?;
            prefix = prefix.shift_in(word);
        }
        self.fed += source.len();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{thread_rng, SeedableRng};

    use super::*;

    #[test]
    fn empty_builder_fails() {
        let b = SuccessorTable::builder(2).unwrap();
        assert_eq!(b.build().unwrap_err(), Error::EmptyTable);
    }

    #[test]
    fn zero_prefix_len_fails() {
        assert_eq!(
            SuccessorTableBuilder::new(0).unwrap_err(),
            Error::ZeroPrefixLength
        );
    }

    #[test]
    fn source_as_long_as_prefix_fails() {
        let err = SuccessorTable::build(3, &["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            Error::SourceTooShort {
                words: 3,
                prefix_len: 3
            }
        );
    }

    #[test]
    fn records_successors_in_source_order() {
        let table = SuccessorTable::build(1, &["a", "b", "a", "b", "a", "c"]).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.successors(["a"].as_slice()).unwrap(), ["b", "b", "c"]);
        assert_eq!(table.successors(["b"].as_slice()).unwrap(), ["a", "a"]);
        assert!(!table.contains(["c"].as_slice()));
    }

    #[test]
    fn longer_prefixes() {
        let source = "the cat sat on the cat mat".split_whitespace().collect::<Vec<_>>();
        let table = SuccessorTable::build(2, &source).unwrap();

        assert_eq!(
            table.successors(["the", "cat"].as_slice()).unwrap(),
            ["sat", "mat"]
        );
        assert_eq!(table.successors(["on", "the"].as_slice()).unwrap(), ["cat"]);
        // The final window never had a successor
        assert!(table.get(["cat", "mat"].as_slice()).is_none());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn prefixes_in_first_seen_order() {
        let table = SuccessorTable::build(1, &["x", "y", "z", "y", "x", "w"]).unwrap();
        let order = table.prefixes().map(Prefix::to_string).collect::<Vec<_>>();
        assert_eq!(order, ["x", "y", "z"]);
    }

    #[test]
    fn every_entry_is_non_empty() {
        let source = "a b c a b d a b c e".split_whitespace().collect::<Vec<_>>();
        let table = SuccessorTable::build(2, &source).unwrap();
        assert!(table.iter().all(|e| !e.words().is_empty()));
        assert!(table.iter().all(|e| e.prefix().len() == 2));
    }

    #[test]
    fn feeding_twice_does_not_join_sources() {
        let mut b = SuccessorTable::builder(1).unwrap();
        b.feed_words(&["a", "b"]).unwrap();
        b.feed_words(&["c", "d"]).unwrap();
        let table = b.build().unwrap();

        assert!(!table.contains(["b"].as_slice()));
        assert_eq!(table.successors(["c"].as_slice()).unwrap(), ["d"]);
    }

    #[test]
    fn occurrence_with_wrong_prefix_len_fails() {
        let mut b = SuccessorTable::builder(2).unwrap();
        let p = Prefix::new(&["a"]).unwrap();
        assert_eq!(
            b.add_occurrence(&p, "b").unwrap_err(),
            Error::PrefixLength {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn lookup_by_owned_prefix() {
        let table = SuccessorTable::build(2, &["a", "b", "c"]).unwrap();
        let p = Prefix::new(&["a", "b"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(table.choose_successor(&mut rng, &p).unwrap(), "c");
        assert!(table
            .choose_successor(&mut rng, &p.shift_in("c"))
            .is_none());
    }

    #[test]
    fn random_entry_is_a_key() {
        let source = "one two three two one four".split_whitespace().collect::<Vec<_>>();
        let table = SuccessorTable::build(1, &source).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let e = table.random_entry(&mut rng);
            assert!(table.contains(e.prefix()));
        }
    }

    #[test]
    fn random_entry_ignores_occurrence_count() {
        // "a" is followed by something eight times, "b" only once
        let mut source = vec!["a"; 8];
        source.extend(["b", "a"]);
        let table = SuccessorTable::build(1, &source).unwrap();
        assert_eq!(table.len(), 2);

        let mut rng = thread_rng();
        let trials = 20_000;
        let a = (0..trials)
            .filter(|_| table.random_entry(&mut rng).prefix() == ["a"].as_slice())
            .count();
        let p = a as f64 / trials as f64;

        assert!((p - 0.5).abs() < 0.03, "got p(a) = {p}");
    }
}
