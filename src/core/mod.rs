//! Core domain types for the daily game
//!
//! Words, input symbols, status derivation and the game state machine.
//! Nothing here touches the terminal.

mod game;
mod status;
mod symbol;
mod word;

pub use game::{Game, GuessRow, Lexicon, MAX_ATTEMPTS, Stage, SubmitOutcome};
pub use status::{LetterStatus, letter_status};
pub use symbol::Symbol;
pub use word::{WORD_LEN, Word, WordError, fold_letter};
