//! [`Successors`] hold every [`Word`] that was seen right after one [`Prefix`], and are the
//! entries of a [`SuccessorTable`](crate::SuccessorTable).

use rand::Rng;

use crate::prefix::{Prefix, Word, WordRef};

/// A prefix and the words that followed it in the source, in source order.
///
/// Duplicates are kept: a word that followed the prefix three times is stored three times, so
/// picking a uniformly random element is the same as picking weighted by frequency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successors {
    prefix: Prefix,
    /// Never empty.
    words: Vec<Word>,
}

impl Successors {
    pub(crate) fn new(prefix: Prefix, first: WordRef<'_>) -> Self {
        Self {
            prefix,
            words: vec![first.to_string()],
        }
    }

    pub(crate) fn push(&mut self, word: WordRef<'_>) {
        self.words.push(word.to_string());
    }

    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Picks one word, uniformly over occurrences. Draws exactly one index from `rng`.
    pub fn choose(&self, rng: &mut impl Rng) -> &Word {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{thread_rng, SeedableRng};

    use super::*;

    fn entry(prefix: &str, words: &[&str]) -> Successors {
        let mut s = Successors::new(Prefix::new(&[prefix]).unwrap(), words[0]);
        for w in &words[1..] {
            s.push(w);
        }
        s
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let s = entry("a", &["b", "b", "c"]);
        assert_eq!(s.words(), ["b", "b", "c"]);
        assert_eq!(s.prefix().to_string(), "a");
    }

    #[test]
    fn single_successor_is_always_chosen() {
        let s = entry("a", &["only"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(s.choose(&mut rng), "only");
        }
    }

    #[test]
    fn choice_is_weighted_by_occurrence() {
        let s = entry("a", &["x", "x", "y"]);
        let mut rng = thread_rng();
        let trials = 30_000;
        let xs = (0..trials).filter(|_| s.choose(&mut rng) == "x").count();
        let p = xs as f64 / trials as f64;

        assert!((p - 2.0 / 3.0).abs() < 0.03, "got p(x) = {p}");
    }
}
