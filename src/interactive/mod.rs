//! Interactive TUI interface

mod app;
mod palette;
mod rendering;

pub use app::{App, run_tui};
