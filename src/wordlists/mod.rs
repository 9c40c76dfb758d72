//! Word source for the daily game
//!
//! Provides the embedded dictionary, file loading and the word of the day.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn entries_are_five_lowercase_letters() {
        for &word in DICTIONARY {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_alphabetic() && !c.is_uppercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn entries_fit_the_keyboard() {
        let alphabet: Vec<char> = crate::layout::KEYBOARD_ROWS.concat().chars().collect();
        for &word in DICTIONARY {
            assert!(
                word.chars().all(|c| alphabet.contains(&c)),
                "Word '{word}' cannot be typed on the on-screen keyboard"
            );
        }
    }
}
