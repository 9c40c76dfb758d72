//! Secret word representation
//!
//! A Word stores exactly five lowercase letters. Letters are Unicode scalar
//! values, so Cyrillic words are first-class. `ё` is stored as `е`, the only
//! spelling the keyboard can type.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word and guess row
pub const WORD_LEN: usize = 5;

/// Lowercase a letter and fold `ё` into `е`
#[must_use]
pub fn fold_letter(letter: char) -> char {
    match letter.to_lowercase().next().unwrap_or(letter) {
        'ё' => 'е',
        lower => lower,
    }
}

/// A 5-letter word with its letters unpacked for positional lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains non-alphabetic character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored, letters are lowercased and `ё`
    /// becomes `е`.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::Word;
    ///
    /// let word = Word::new("Жабка").unwrap();
    /// assert_eq!(word.text(), "жабка");
    ///
    /// assert_eq!(Word::new("щётка").unwrap().text(), "щетка");
    /// assert!(Word::new("жаба").is_err());
    /// assert!(Word::new("жаб4а").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text: String = text.trim().chars().map(fold_letter).collect();

        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut letters = [' '; WORD_LEN];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = ch;
        }

        Ok(Self { text, letters })
    }

    /// Build a word from already collected letters
    ///
    /// # Errors
    /// Same rules as [`Word::new`].
    pub fn from_letters(letters: &[char]) -> Result<Self, WordError> {
        Self::new(&letters.iter().collect::<String>())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Check whether a sequence of letters spells exactly this word
    #[must_use]
    pub fn matches(&self, letters: &[char]) -> bool {
        letters == self.letters.as_slice()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
