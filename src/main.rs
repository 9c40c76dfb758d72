//! Wordle Daily - CLI
//!
//! Daily word game with a TUI (default) and a plain line mode.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use wordle_daily::{
    commands::run_simple,
    config::{DictionarySource, GameConfig},
    core::{Game, Lexicon, Stage},
    interactive::{App, run_tui},
    layout::KeyboardStyle,
    logging::{self, LogTarget},
    output::print_summary,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily five-letter word game with a clickable on-screen keyboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Newline-separated word list (default: the embedded Russian list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Play the word of another UTC day (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Write logs to this file (`RUST_LOG` sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Screen width in terminal cells
    #[arg(long, default_value_t = wordle_daily::layout::SCREEN_WIDTH)]
    width: u16,

    /// Screen height in terminal cells
    #[arg(long, default_value_t = wordle_daily::layout::SCREEN_HEIGHT)]
    height: u16,

    /// Minimum milliseconds between two accepted clicks
    #[arg(long, default_value_t = 250)]
    debounce_ms: u64,

    /// Give submit and backspace a fixed width instead of stretching them
    #[arg(long)]
    fixed_special_keys: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            screen_width: self.width,
            screen_height: self.height,
            debounce: Duration::from_millis(self.debounce_ms),
            keyboard: if self.fixed_special_keys {
                KeyboardStyle::FixedSpecialKeys
            } else {
                KeyboardStyle::GrowSpecialKeys
            },
            date: self.date.unwrap_or(defaults.date),
            dictionary: self
                .dictionary
                .clone()
                .map_or(DictionarySource::Embedded, DictionarySource::File),
            ..defaults
        }
    }

    fn log_target(&self, command: Commands) -> LogTarget {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Simple) => LogTarget::Stderr,
            (None, Commands::Play) => LogTarget::Off,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    logging::init(&cli.log_target(command))?;

    let config = cli.config();
    let dictionary = config
        .load_dictionary()
        .context("failed to load dictionary")?;
    info!(
        words = dictionary.len(),
        dropped = dictionary.dropped(),
        date = %config.date,
        "dictionary ready"
    );

    let word = dictionary.daily_word(config.date).clone();
    debug!(word = %word, "word of the day");

    match command {
        Commands::Play => {
            let mut app =
                App::new(word, &dictionary, &config).context("failed to lay out the screen")?;
            run_tui(&mut app, config.frame_interval)?;
            finish(&app.game, config.date);
        }
        Commands::Simple => {
            let mut game = Game::new(word, &dictionary);
            run_simple(&mut game, io::stdin().lock(), io::stdout().lock())?;
            finish(&game, config.date);
        }
    }

    Ok(())
}

fn finish<L: Lexicon + ?Sized>(game: &Game<'_, L>, date: NaiveDate) {
    if game.stage() == Stage::Scored {
        print_summary(game, date);
    }
}
