//! TUI application state and the frame loop

use crate::config::GameConfig;
use crate::core::{Game, Lexicon, Stage, SubmitOutcome, Symbol, Word};
use crate::input::{Debounce, PointerState, is_quit, symbol_for_event};
use crate::layout::{LayoutError, ResolvedNode, build_screen};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Application state
///
/// Owns everything the frame loop mutates. The screen geometry is solved
/// once here and never again.
pub struct App<'a, L: Lexicon + ?Sized> {
    pub game: Game<'a, L>,
    pub screen: ResolvedNode,
    pub pointer: PointerState,
    pub hovered: Option<Symbol>,
    pub debounce: Debounce,
    pub date: NaiveDate,
    pub should_quit: bool,
}

impl<'a, L: Lexicon + ?Sized> App<'a, L> {
    /// Start a game and lay out its screen
    ///
    /// # Errors
    ///
    /// Returns an error if the screen cannot be laid out.
    pub fn new(word: Word, lexicon: &'a L, config: &GameConfig) -> Result<Self, LayoutError> {
        Ok(Self {
            game: Game::new(word, lexicon),
            screen: build_screen(config.screen_width, config.screen_height, config.keyboard)?,
            pointer: PointerState::default(),
            hovered: None,
            debounce: Debounce::new(config.debounce),
            date: config.date,
            should_quit: false,
        })
    }

    /// Fold one terminal event into the state
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) => {
                if is_quit(key) {
                    self.should_quit = true;
                    return;
                }

                if self.game.stage() == Stage::Scored {
                    if key.code == KeyCode::Char('q') {
                        self.should_quit = true;
                    }
                    return;
                }

                if let Some(symbol) = symbol_for_event(key) {
                    self.apply(symbol);
                }
            }
            Event::Mouse(mouse) => self.pointer.update(mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized; layout stays fixed");
            }
            _ => {}
        }
    }

    /// Per-frame update: refresh hover, then apply at most one click
    pub fn tick(&mut self, now: Instant) {
        self.hovered = self
            .pointer
            .position()
            .and_then(|position| self.screen.key_at(position));

        if !self.pointer.sample_press() || !self.game.is_active() {
            return;
        }

        // A press anywhere restarts the window, even off the keyboard
        if !self.debounce.accept(now) {
            return;
        }

        if let Some(symbol) = self.hovered {
            self.apply(symbol);
        }
    }

    fn apply(&mut self, symbol: Symbol) {
        match self.game.apply(symbol) {
            Some(SubmitOutcome::Won) => info!(attempts = self.game.submitted_count(), "game won"),
            Some(SubmitOutcome::Lost) => info!(word = %self.game.word(), "game lost"),
            _ => {}
        }
    }
}

/// Raw mode, alternate screen and mouse capture, undone on drop
///
/// Each step is recorded as it succeeds so a failure halfway through setup
/// still restores whatever was already changed.
struct TerminalGuard {
    raw: bool,
    screen: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let mut guard = Self {
            raw: false,
            screen: false,
        };

        enable_raw_mode().context("failed to enable raw mode")?;
        guard.raw = true;

        execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
        guard.screen = true;

        execute!(io::stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.screen
            && let Err(err) = execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableMouseCapture,
                Show
            )
        {
            warn!(%err, "failed to leave alternate screen");
        }
        if self.raw
            && let Err(err) = disable_raw_mode()
        {
            warn!(%err, "failed to disable raw mode");
        }
    }
}

/// Run the TUI application until the player quits
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first on
/// every path.
pub fn run_tui<L: Lexicon + ?Sized>(app: &mut App<'_, L>, frame_interval: Duration) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;

    if let Ok(size) = terminal.size()
        && (size.width < app.screen.area.width || size.height < app.screen.area.height)
    {
        warn!(
            width = size.width,
            height = size.height,
            "terminal is smaller than the game screen; drawing will be clipped"
        );
    }

    run_app(&mut terminal, app, frame_interval)
}

fn run_app<B: ratatui::backend::Backend, L: Lexicon + ?Sized>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, L>,
    frame_interval: Duration,
) -> Result<()> {
    info!(date = %app.date, "game started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        // Wait out the rest of the frame for input, then drain whatever queued up
        if event::poll(frame_interval)? {
            app.handle_event(&event::read()?);
            while event::poll(Duration::ZERO)? {
                app.handle_event(&event::read()?);
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
