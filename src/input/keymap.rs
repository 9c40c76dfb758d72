//! Physical keyboard to game symbols
//!
//! Cyrillic input passes straight through. Latin input is read by physical
//! position, so a player on a US layout presses the key that would carry the
//! letter on a ЙЦУКЕН keyboard.

use crate::core::{Symbol, fold_letter};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// QWERTY character to the ЙЦУКЕН letter on the same physical key
const LATIN_TO_CYRILLIC: [(char, char); 32] = [
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    (']', 'ъ'),
    ('a', 'ф'),
    ('s', 'ы'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    ('\'', 'э'),
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('.', 'ю'),
];

/// Map a key code to a game symbol
#[must_use]
pub fn symbol_for_key(code: KeyCode) -> Option<Symbol> {
    match code {
        KeyCode::Enter => Some(Symbol::Submit),
        KeyCode::Backspace => Some(Symbol::Backspace),
        KeyCode::Char(c) => letter_for_char(c).map(Symbol::Letter),
        _ => None,
    }
}

/// Map a key event to a game symbol, ignoring releases and chords
#[must_use]
pub fn symbol_for_event(event: &KeyEvent) -> Option<Symbol> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    symbol_for_key(event.code)
}

/// True for the keys that close the game at any time
#[must_use]
pub fn is_quit(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Game letter for a typed character, Cyrillic or by QWERTY position
#[must_use]
pub fn letter_for_char(c: char) -> Option<char> {
    let lower = fold_letter(c);

    if ('а'..='я').contains(&lower) {
        return Some(lower);
    }

    LATIN_TO_CYRILLIC
        .iter()
        .find(|(latin, _)| *latin == lower)
        .map(|&(_, cyrillic)| cyrillic)
}
