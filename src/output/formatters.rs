//! Formatting utilities for terminal output

use crate::core::{Game, LetterStatus, Lexicon, MAX_ATTEMPTS, WORD_LEN};
use chrono::NaiveDate;

/// Emoji square for a letter status, matching the TUI palette
#[must_use]
pub const fn status_emoji(status: LetterStatus) -> char {
    match status {
        LetterStatus::Guessed => '🟦',
        LetterStatus::Present => '🟧',
        LetterStatus::Wrong | LetterStatus::Pending => '⬛',
    }
}

/// Emoji line for one submitted row
#[must_use]
pub fn row_emoji<L: Lexicon + ?Sized>(game: &Game<'_, L>, row: usize) -> String {
    (0..WORD_LEN)
        .map(|col| status_emoji(game.status(row, col)))
        .collect()
}

/// Shareable result: a score line followed by one emoji line per submitted row
#[must_use]
pub fn share_text<L: Lexicon + ?Sized>(game: &Game<'_, L>, date: NaiveDate) -> String {
    let score = if game.is_won() {
        game.submitted_count().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Wordle {date} {score}/{MAX_ATTEMPTS}");
    for row in 0..game.submitted_count() {
        text.push('\n');
        text.push_str(&row_emoji(game, row));
    }
    text
}
