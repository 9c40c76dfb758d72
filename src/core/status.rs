//! Letter status derivation
//!
//! Statuses are never stored. They are recomputed from the secret word and
//! the submitted rows every time something is drawn.

use super::Word;

/// Evaluation of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Not evaluated yet (row not submitted, or key never used)
    Pending,
    /// Letter does not occur in the word
    Wrong,
    /// Letter occurs in the word at another position
    Present,
    /// Letter sits at the right position
    Guessed,
}

impl LetterStatus {
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Status of `letter` placed at column `col` of a submitted row
///
/// Every occurrence is judged on its own: a repeated guess letter can be
/// `Present` more times than the word contains it.
///
/// # Examples
/// ```
/// use wordle_daily::core::{LetterStatus, Word, letter_status};
///
/// let word = Word::new("жабка").unwrap();
/// assert_eq!(letter_status(&word, 'к', 3), LetterStatus::Guessed);
/// assert_eq!(letter_status(&word, 'б', 0), LetterStatus::Present);
/// assert_eq!(letter_status(&word, 'е', 1), LetterStatus::Wrong);
/// ```
#[must_use]
pub fn letter_status(word: &Word, letter: char, col: usize) -> LetterStatus {
    if word.letters().get(col) == Some(&letter) {
        LetterStatus::Guessed
    } else if word.has_letter(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_position_is_guessed() {
        let word = Word::new("жабка").unwrap();
        for (col, &letter) in word.letters().iter().enumerate() {
            assert_eq!(letter_status(&word, letter, col), LetterStatus::Guessed);
        }
    }

    #[test]
    fn misplaced_letter_is_present() {
        let word = Word::new("жабка").unwrap();
        assert_eq!(letter_status(&word, 'а', 0), LetterStatus::Present);
        assert_eq!(letter_status(&word, 'ж', 4), LetterStatus::Present);
    }

    #[test]
    fn absent_letter_is_wrong() {
        let word = Word::new("жабка").unwrap();
        assert_eq!(letter_status(&word, 'л', 2), LetterStatus::Wrong);
    }

    #[test]
    fn column_out_of_range_falls_back_to_membership() {
        let word = Word::new("жабка").unwrap();
        assert_eq!(letter_status(&word, 'ж', 9), LetterStatus::Present);
        assert_eq!(letter_status(&word, 'л', 9), LetterStatus::Wrong);
    }

    #[test]
    fn only_pending_is_unevaluated() {
        assert!(!LetterStatus::Pending.is_evaluated());
        assert!(LetterStatus::Wrong.is_evaluated());
        assert!(LetterStatus::Present.is_evaluated());
        assert!(LetterStatus::Guessed.is_evaluated());
    }
}
