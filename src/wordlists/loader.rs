//! Word list loading utilities
//!
//! Raw entries are normalized here, once, before anything compares them:
//! surrounding whitespace (including stray `\r`) is trimmed, letters are
//! lowercased with `ё` folded to `е`, and anything that is not exactly five
//! letters of the on-screen keyboard is dropped. Blank lines are skipped.

use crate::core::Word;
use crate::layout::KEYBOARD_ROWS;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Result of normalizing a raw word list
#[derive(Debug, Default)]
pub struct Normalized {
    /// Unique words in first-seen order
    pub words: Vec<Word>,
    /// Entries that were not five typeable letters after trimming
    pub dropped: usize,
}

/// Read raw entries from a newline-separated file
///
/// Blank lines are skipped; everything else is returned untouched.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_daily::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/russian.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}

/// Normalize raw entries into unique words
#[must_use]
pub fn normalize<I, S>(entries: I) -> Normalized
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized = Normalized::default();
    let mut seen = FxHashSet::default();

    for entry in entries {
        let entry = entry.as_ref();
        if entry.trim().is_empty() {
            continue;
        }

        match Word::new(entry) {
            Ok(word) if is_typeable(&word) => {
                if seen.insert(word.text().to_owned()) {
                    normalized.words.push(word);
                }
            }
            _ => normalized.dropped += 1,
        }
    }

    normalized
}

/// True if every letter has a key on the on-screen keyboard
fn is_typeable(word: &Word) -> bool {
    word.letters()
        .iter()
        .all(|&letter| KEYBOARD_ROWS.iter().any(|row| row.contains(letter)))
}
