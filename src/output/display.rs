//! Colored terminal output for line mode and the final summary

use super::formatters::share_text;
use crate::core::{Game, LetterStatus, Lexicon, MAX_ATTEMPTS};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

fn colored_letter(letter: char, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match status {
        LetterStatus::Guessed => text.black().on_truecolor(133, 192, 249).bold(),
        LetterStatus::Present => text.black().on_truecolor(245, 121, 58).bold(),
        LetterStatus::Wrong => text.white().on_truecolor(60, 60, 60),
        LetterStatus::Pending => text.white().on_truecolor(136, 136, 136),
    }
}

/// One guess row with each letter colored by its status
#[must_use]
pub fn format_row<L: Lexicon + ?Sized>(game: &Game<'_, L>, row: usize) -> String {
    game.rows().get(row).map_or_else(String::new, |guess| {
        guess
            .letters()
            .iter()
            .enumerate()
            .map(|(col, &letter)| colored_letter(letter, game.status(row, col)).to_string())
            .collect()
    })
}

/// Print the end-of-game summary
pub fn print_summary<L: Lexicon + ?Sized>(game: &Game<'_, L>, date: NaiveDate) {
    println!("\n{}", "─".repeat(40).cyan());
    if game.is_won() {
        println!(
            "{}",
            format!("Guessed in {} / {MAX_ATTEMPTS}", game.submitted_count())
                .green()
                .bold()
        );
    } else {
        println!(
            "The word was {}",
            game.word().text().to_uppercase().bright_yellow().bold()
        );
    }
    println!("{}", "─".repeat(40).cyan());
    println!("\n{}\n", share_text(game, date));
}
