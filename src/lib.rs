//! Wordle Daily
//!
//! A daily five-letter word game for the terminal with a clickable on-screen
//! ЙЦУКЕН keyboard. Everyone gets the same word on the same UTC day.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wordle_daily::core::{Game, Stage};
//! use wordle_daily::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let word = dictionary.daily_word(date).clone();
//!
//! let mut game = Game::new(word.clone(), &dictionary);
//! for letter in word.letters() {
//!     game.type_letter(*letter);
//! }
//! game.submit();
//! assert_eq!(game.stage(), Stage::Scored);
//! ```

// Core domain types
pub mod core;

// Screen layout engine
pub mod layout;

// Word lists
pub mod wordlists;

// Key and mouse mapping
pub mod input;

// Runtime settings
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
