//! Simple line mode
//!
//! Plays the daily game over plain text streams without the TUI. Each line
//! is one guess.

use crate::core::{Game, Lexicon, MAX_ATTEMPTS, SubmitOutcome, Symbol, WORD_LEN};
use crate::input::letter_for_char;
use crate::output::format_row;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run line mode until the game is scored, input ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<L, R, W>(game: &mut Game<'_, L>, input: R, mut output: W) -> Result<()>
where
    L: Lexicon + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Guess the {WORD_LEN}-letter word in {MAX_ATTEMPTS} attempts. Type 'quit' to leave."
    )?;

    let mut lines = input.lines();
    while game.is_active() {
        write!(output, "{} > ", game.submitted_count() + 1)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("input closed");
            break;
        };
        let line = line.context("failed to read guess")?;
        let guess = line.trim();

        if guess.eq_ignore_ascii_case("quit") {
            break;
        }

        match play_line(game, guess) {
            SubmitOutcome::Rejected => {
                writeln!(output, "{}", "Not a known 5-letter word".yellow())?;
            }
            _ => {
                let row = game.submitted_count() - 1;
                writeln!(output, "{}", format_row(game, row))?;
            }
        }
    }

    Ok(())
}

/// Type a whole line into the current row and submit it
///
/// A rejected row is cleared so the next line starts fresh.
fn play_line<L: Lexicon + ?Sized>(game: &mut Game<'_, L>, line: &str) -> SubmitOutcome {
    for letter in line.chars().filter_map(letter_for_char) {
        game.apply(Symbol::Letter(letter));
    }

    let outcome = game.submit();
    if outcome == SubmitOutcome::Rejected {
        while game.current_row().is_some_and(|row| !row.is_empty()) {
            game.backspace();
        }
    }
    outcome
}
