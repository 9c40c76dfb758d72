//! Game configuration
//!
//! Collected from the command line in `main`; every field defaults to the
//! values the game was designed around.

use crate::input::CLICK_DEBOUNCE;
use crate::layout::{KeyboardStyle, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::wordlists::{Dictionary, DictionaryError};
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Time budget for one frame of the game loop
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Where the word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DictionarySource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-separated file on disk
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Screen size in terminal cells the layout is solved against
    pub screen_width: u16,
    pub screen_height: u16,
    /// Minimum time between two accepted clicks
    pub debounce: Duration,
    pub frame_interval: Duration,
    pub keyboard: KeyboardStyle,
    /// UTC calendar day whose word is played
    pub date: NaiveDate,
    pub dictionary: DictionarySource,
}

impl GameConfig {
    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no usable words.
    pub fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match &self.dictionary {
            DictionarySource::Embedded => Dictionary::embedded(),
            DictionarySource::File(path) => Dictionary::load(path),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            debounce: CLICK_DEBOUNCE,
            frame_interval: FRAME_INTERVAL,
            keyboard: KeyboardStyle::default(),
            date: Utc::now().date_naive(),
            dictionary: DictionarySource::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 80);
        assert_eq!(config.screen_height, 36);
        assert_eq!(config.debounce, Duration::from_millis(250));
        assert_eq!(config.keyboard, KeyboardStyle::GrowSpecialKeys);
        assert_eq!(config.dictionary, DictionarySource::Embedded);
    }

    #[test]
    fn embedded_source_loads() {
        let config = GameConfig::default();
        assert!(!config.load_dictionary().unwrap().is_empty());
    }

    #[test]
    fn missing_file_source_fails() {
        let config = GameConfig {
            dictionary: DictionarySource::File(PathBuf::from("/nonexistent/words.txt")),
            ..GameConfig::default()
        };
        assert!(config.load_dictionary().is_err());
    }
}
