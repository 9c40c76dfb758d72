//! Game state machine
//!
//! Owns the guess rows and moves from `Active` to `Scored`. Every invalid
//! action is a silent no-op: the interactive front ends simply keep drawing
//! the unchanged state.

use super::status::{LetterStatus, letter_status};
use super::{Symbol, WORD_LEN, Word, fold_letter};
use tracing::{debug, info};

/// Number of guesses the player gets
pub const MAX_ATTEMPTS: usize = 6;

/// Source of truth for which guesses are acceptable
pub trait Lexicon {
    /// Case-insensitive exact membership test
    fn is_valid_word(&self, candidate: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Accepting input
    Active,
    /// Terminal: won or out of attempts
    Scored,
}

/// What a submit did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A guard failed; nothing changed
    Rejected,
    /// Row locked in, next row opened
    Accepted,
    /// Row matched the word
    Won,
    /// Sixth row locked in without a match
    Lost,
}

/// One guess attempt: up to five letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRow {
    letters: Vec<char>,
}

impl GuessRow {
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn letter(&self, col: usize) -> Option<char> {
        self.letters.get(col).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == WORD_LEN
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    fn push(&mut self, letter: char) {
        if !self.is_full() {
            self.letters.push(letter);
        }
    }

    fn pop(&mut self) {
        self.letters.pop();
    }
}

/// A single daily game
///
/// # Examples
/// ```
/// use wordle_daily::core::{Game, LetterStatus, Stage, Word};
/// use wordle_daily::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_entries(["жабка", "белка"]).unwrap();
/// let mut game = Game::new(Word::new("жабка").unwrap(), &dictionary);
///
/// for letter in "белка".chars() {
///     game.type_letter(letter);
/// }
/// game.submit();
///
/// assert_eq!(game.stage(), Stage::Active);
/// assert_eq!(game.status(0, 3), LetterStatus::Guessed);
/// ```
pub struct Game<'a, L: Lexicon + ?Sized> {
    word: Word,
    rows: Vec<GuessRow>,
    last_submitted: Option<usize>,
    stage: Stage,
    lexicon: &'a L,
}

impl<'a, L: Lexicon + ?Sized> Game<'a, L> {
    /// Start a game for the given secret word
    #[must_use]
    pub fn new(word: Word, lexicon: &'a L) -> Self {
        debug!(word = %word, "new game");
        Self {
            word,
            rows: Vec::with_capacity(MAX_ATTEMPTS),
            last_submitted: None,
            stage: Stage::Active,
            lexicon,
        }
    }

    /// Feed one abstract input symbol into the game
    ///
    /// Returns the submit outcome when the symbol was `Submit`.
    pub fn apply(&mut self, symbol: Symbol) -> Option<SubmitOutcome> {
        match symbol {
            Symbol::Letter(letter) => {
                self.type_letter(letter);
                None
            }
            Symbol::Backspace => {
                self.backspace();
                None
            }
            Symbol::Submit => Some(self.submit()),
        }
    }

    /// Append a letter to the current row
    pub fn type_letter(&mut self, letter: char) {
        if self.stage != Stage::Active {
            return;
        }

        if self.rows.is_empty() {
            self.rows.push(GuessRow::default());
        }

        if self.current_row_locked() {
            return;
        }

        let letter = fold_letter(letter);
        if let Some(row) = self.rows.last_mut() {
            row.push(letter);
        }
    }

    /// Remove the last letter of the current row
    pub fn backspace(&mut self) {
        if self.stage != Stage::Active || self.current_row_locked() {
            return;
        }

        if let Some(row) = self.rows.last_mut() {
            row.pop();
        }
    }

    /// Lock in the current row if it is a complete dictionary word
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.stage != Stage::Active {
            return SubmitOutcome::Rejected;
        }

        let Some(index) = self.rows.len().checked_sub(1) else {
            return SubmitOutcome::Rejected;
        };

        if self.last_submitted == Some(index) {
            return SubmitOutcome::Rejected;
        }

        let row = &self.rows[index];
        if !row.is_full() {
            return SubmitOutcome::Rejected;
        }

        let guess = row.text();
        if !self.lexicon.is_valid_word(&guess) {
            debug!(guess = %guess, "rejected guess not in dictionary");
            return SubmitOutcome::Rejected;
        }

        self.last_submitted = Some(index);
        info!(attempt = index + 1, guess = %guess, "guess submitted");

        if self.word.matches(row.letters()) {
            self.stage = Stage::Scored;
            info!(attempts = index + 1, "word guessed");
            return SubmitOutcome::Won;
        }

        if self.rows.len() >= MAX_ATTEMPTS {
            self.stage = Stage::Scored;
            info!("out of attempts");
            return SubmitOutcome::Lost;
        }

        self.rows.push(GuessRow::default());
        SubmitOutcome::Accepted
    }

    /// Status of the cell at (`row`, `col`)
    #[must_use]
    pub fn status(&self, row: usize, col: usize) -> LetterStatus {
        if !self.is_submitted(row) {
            return LetterStatus::Pending;
        }

        self.rows
            .get(row)
            .and_then(|r| r.letter(col))
            .map_or(LetterStatus::Pending, |letter| {
                letter_status(&self.word, letter, col)
            })
    }

    /// Status of a keyboard key, aggregated over every submitted row
    #[must_use]
    pub fn key_status(&self, letter: char) -> LetterStatus {
        if !self.is_letter_guessed(letter) {
            return LetterStatus::Pending;
        }

        let placed = self.submitted_rows().any(|row| {
            row.letters()
                .iter()
                .enumerate()
                .any(|(col, &c)| c == letter && self.word.letter_at(col) == letter)
        });

        if placed {
            LetterStatus::Guessed
        } else if self.is_letter_in_word(letter) {
            LetterStatus::Present
        } else {
            LetterStatus::Wrong
        }
    }

    /// True if the letter appears in any submitted row
    #[must_use]
    pub fn is_letter_guessed(&self, letter: char) -> bool {
        self.submitted_rows()
            .any(|row| row.letters().contains(&letter))
    }

    #[must_use]
    pub fn is_letter_in_word(&self, letter: char) -> bool {
        self.word.has_letter(letter)
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub fn current_row(&self) -> Option<&GuessRow> {
        self.rows.last()
    }

    /// Index of the most recently validated row
    #[must_use]
    pub const fn last_submitted(&self) -> Option<usize> {
        self.last_submitted
    }

    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.last_submitted.map_or(0, |index| index + 1)
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.stage == Stage::Active
    }

    /// True once the last submitted row spelled the word
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.last_submitted
            .and_then(|index| self.rows.get(index))
            .is_some_and(|row| self.word.matches(row.letters()))
    }

    fn is_submitted(&self, row: usize) -> bool {
        self.last_submitted.is_some_and(|last| row <= last)
    }

    fn current_row_locked(&self) -> bool {
        self.rows.len().checked_sub(1).is_some_and(|index| self.is_submitted(index))
    }

    fn submitted_rows(&self) -> impl Iterator<Item = &GuessRow> {
        self.rows.iter().take(self.submitted_count())
    }
}
