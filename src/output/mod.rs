//! Terminal output formatting and display

pub mod display;
pub mod formatters;

pub use display::{format_row, print_summary};
pub use formatters::{share_text, status_emoji};
