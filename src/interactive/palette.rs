//! Colors shared by the renderer

use crate::core::LetterStatus;
use ratatui::style::Color;

pub const BG: Color = Color::Rgb(18, 18, 18);
pub const FG: Color = Color::Rgb(255, 255, 255);

pub const MATCH: Color = Color::Rgb(133, 192, 249);
pub const MISS: Color = Color::Rgb(60, 60, 60);
pub const PRESENT: Color = Color::Rgb(245, 121, 58);
pub const PASSIVE: Color = Color::Rgb(136, 136, 136);

#[must_use]
pub const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Guessed => MATCH,
        LetterStatus::Present => PRESENT,
        LetterStatus::Wrong => MISS,
        LetterStatus::Pending => PASSIVE,
    }
}
