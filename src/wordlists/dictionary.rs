//! The game dictionary
//!
//! Holds the normalized word list, answers membership queries and picks the
//! word of the day.

use super::embedded::DICTIONARY;
use super::loader::{self, Normalized};
use crate::core::{Lexicon, Word};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary has no usable five-letter words ({dropped} entries dropped)")]
    Empty { dropped: usize },
}

/// Read-only set of valid words, loaded once at startup
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
    dropped: usize,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no entry survives normalization.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Normalized { words, dropped } = loader::normalize(entries);

        if words.is_empty() {
            return Err(DictionaryError::Empty { dropped });
        }

        if dropped > 0 {
            debug!(dropped, "skipped malformed dictionary entries");
        }

        let index = words.iter().map(|w| w.text().to_owned()).collect();

        Ok(Self {
            words,
            index,
            dropped,
        })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded list is unusable.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_entries(DICTIONARY)
    }

    /// Load a newline-separated word list from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no usable words.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let entries = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_entries(entries)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of raw entries skipped at load time
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Case-insensitive exact membership test
    ///
    /// The candidate is normalized like dictionary entries, so stray
    /// whitespace never causes a mismatch.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        Word::new(candidate).is_ok_and(|word| self.index.contains(word.text()))
    }

    /// Word of the day for a UTC calendar date
    ///
    /// The index is drawn from ChaCha8 seeded with the Unix timestamp of that
    /// day's UTC midnight. ChaCha8's stream is fixed by its definition, so
    /// every build and platform picks the same word on the same day.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use wordle_daily::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// assert_eq!(dictionary.daily_word(day), dictionary.daily_word(day));
    /// ```
    #[must_use]
    pub fn daily_word(&self, date: NaiveDate) -> &Word {
        &self.words[daily_index(date, self.words.len())]
    }

    /// Word of the day for the UTC day containing `instant`
    #[must_use]
    pub fn word_for(&self, instant: DateTime<Utc>) -> &Word {
        self.daily_word(instant.date_naive())
    }
}

/// Index into a list of `len` words for the given day
fn daily_index(date: NaiveDate, len: usize) -> usize {
    let midnight = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    let mut rng = ChaCha8Rng::seed_from_u64(midnight as u64);
    (rng.next_u64() % len as u64) as usize
}

impl Lexicon for Dictionary {
    fn is_valid_word(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}
