//! Input mapping
//!
//! Turns crossterm key and mouse events into game symbols, hover positions
//! and debounced clicks.

mod debounce;
pub mod keymap;
mod pointer;

pub use debounce::{CLICK_DEBOUNCE, Debounce};
pub use keymap::{is_quit, letter_for_char, symbol_for_event, symbol_for_key};
pub use pointer::PointerState;
