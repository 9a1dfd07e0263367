//! Validated word list

use crate::error::{Error, Result};

/// A fixed, non-empty sequence of non-empty words
///
/// Lengths are counted in `char`s so prefixes never split a character.
/// Words must fit on one line: control characters such as `\n` or `\t` are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a word list, rejecting an empty list, an empty word or a word
    /// with control characters
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        if let Some(index) = words.iter().position(|w| w.is_empty()) {
            return Err(Error::EmptyWord { index });
        }
        if let Some(index) = words.iter().position(|w| w.chars().any(char::is_control)) {
            return Err(Error::ControlCharacter { index });
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed list
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`. Panics if out of range; callers keep the index wrapped.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Length of the word at `index` in chars
    pub fn char_len(&self, index: usize) -> usize {
        self.words[index].chars().count()
    }

    /// Index of the word after `index`, wrapping to the start
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.words.len()
    }
}

/// First `count` chars of `word`
pub fn prefix(word: &str, count: usize) -> &str {
    match word.char_indices().nth(count) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}
