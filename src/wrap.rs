//! Greedy line wrapping for generated words.

use unicode_segmentation::UnicodeSegmentation;

/// The platform's line break.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// The platform's line break.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Collects words into text no wider than `width`, separating them with single spaces.
///
/// Width is counted in grapheme clusters. A word that alone is wider than `width` gets a line of
/// its own.
///
/// ```
/// # use gentext::LineWrapper;
/// let mut w = LineWrapper::new(10);
/// for (i, word) in ["one", "two", "three", "four"].iter().enumerate() {
///     w.push_word(word, i == 3);
/// }
/// let text = w.finish();
/// assert_eq!(text.lines().collect::<Vec<_>>(), ["one two", "three four"]);
/// ```
#[derive(Clone, Debug)]
pub struct LineWrapper {
    text: String,
    width: usize,
    /// Characters on the current line, counting one separator after every word.
    line_chars: usize,
}

impl LineWrapper {
    pub fn new(width: usize) -> Self {
        Self {
            text: String::new(),
            width,
            line_chars: 0,
        }
    }

    /// Appends `word`, breaking the line first if it would not fit. Unless `last` is set, a
    /// space follows the word.
    pub fn push_word(&mut self, word: &str, last: bool) {
        let len = word.graphemes(true).count();

        if self.line_chars + len > self.width {
            // Nothing to break when the very first word is already too wide
            if !self.text.is_empty() {
                if self.text.ends_with(' ') {
                    self.text.pop();
                }
                self.text.push_str(LINE_SEPARATOR);
            }
            self.line_chars = 0;
        }

        self.text.push_str(word);
        if !last {
            self.text.push(' ');
        }
        self.line_chars += len + 1;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn finish(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(words: &[&str], width: usize) -> String {
        let mut w = LineWrapper::new(width);
        for (i, word) in words.iter().enumerate() {
            w.push_word(word, i + 1 == words.len());
        }
        w.finish()
    }

    #[test]
    fn fits_on_one_line() {
        assert_eq!(wrap(&["a", "b", "c"], 80), "a b c");
    }

    #[test]
    fn no_words_no_text() {
        assert_eq!(wrap(&[], 80), "");
    }

    #[test]
    fn breaks_replace_separator() {
        let text = wrap(&["aaa", "bbb", "ccc", "ddd"], 7);
        assert_eq!(text, ["aaa bbb", "ccc ddd"].join(LINE_SEPARATOR));
    }

    #[test]
    fn exact_width_fits() {
        // "ab cd" is five wide, and the trailing separator is counted before the next word
        assert_eq!(wrap(&["ab", "cd", "e"], 5), ["ab cd", "e"].join(LINE_SEPARATOR));
    }

    #[test]
    fn long_first_word_starts_first_line() {
        let text = wrap(&["abcdefghij", "x"], 4);
        assert_eq!(text, ["abcdefghij", "x"].join(LINE_SEPARATOR));
    }

    #[test]
    fn long_word_gets_own_line() {
        let text = wrap(&["a", "abcdefghij", "b", "c"], 4);
        assert_eq!(text, ["a", "abcdefghij", "b c"].join(LINE_SEPARATOR));
    }

    #[test]
    fn counts_graphemes_not_bytes() {
        // Each "é" is two bytes, but one column
        assert_eq!(wrap(&["éé", "éé"], 5), "éé éé");
    }

    #[test]
    fn trailing_separator_only_between_words() {
        let mut w = LineWrapper::new(80);
        w.push_word("a", false);
        assert_eq!(w.as_str(), "a ");
        w.push_word("b", true);
        assert_eq!(w.as_str(), "a b");
    }
}
