//! Abstract input symbols
//!
//! Everything the player can press, on screen or on the physical keyboard,
//! resolves to one of these.

use std::fmt;

/// A letter or one of the two command keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Letter(char),
    Submit,
    Backspace,
}

impl Symbol {
    /// The letter carried by this symbol, if any
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(c) => Some(c),
            Self::Submit | Self::Backspace => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Submit => f.write_str("submit"),
            Self::Backspace => f.write_str("backspace"),
        }
    }
}
