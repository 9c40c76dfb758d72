//! TUI rendering with ratatui
//!
//! Walks the resolved screen tree and draws each leaf by its role, coloring
//! it from the current game state.

use super::app::App;
use super::palette::{self, BG, FG};
use crate::core::{Game, LetterStatus, Lexicon, MAX_ATTEMPTS, Stage, Symbol};
use crate::layout::{NodeRole, ResolvedNode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};

/// Main UI rendering function
pub fn ui<L: Lexicon + ?Sized>(f: &mut Frame, app: &App<'_, L>) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(BG)), area);

    match app.game.stage() {
        Stage::Active => render_node(f, app, &app.screen, area),
        Stage::Scored => render_score(f, &app.game, area),
    }
}

fn render_node<L: Lexicon + ?Sized>(f: &mut Frame, app: &App<'_, L>, node: &ResolvedNode, bounds: Rect) {
    let area = node.area.intersection(bounds);

    if !area.is_empty() {
        match node.role {
            NodeRole::Header => render_header(f, &app.game, area),
            NodeRole::Cell { row, col } => render_cell(f, &app.game, row, col, area),
            NodeRole::Key(symbol) => {
                render_key(f, &app.game, symbol, app.hovered == Some(symbol), area);
            }
            _ => {}
        }
    }

    for child in &node.children {
        render_node(f, app, child, bounds);
    }
}

/// Middle text line of a box
fn middle_line(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1))
}

fn render_header<L: Lexicon + ?Sized>(f: &mut Frame, game: &Game<'_, L>, area: Rect) {
    let text = format!("{} / {MAX_ATTEMPTS}", game.submitted_count());
    let header = Paragraph::new(text)
        .style(Style::default().fg(FG).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(header, middle_line(area));
}

fn render_cell<L: Lexicon + ?Sized>(
    f: &mut Frame,
    game: &Game<'_, L>,
    row: usize,
    col: usize,
    area: Rect,
) {
    let letter = game.rows().get(row).and_then(|r| r.letter(col));

    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FG));

    if letter.is_some() {
        let fill = palette::status_color(game.status(row, col));
        block = block.style(Style::default().bg(fill));
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    if let Some(letter) = letter {
        let label = Paragraph::new(letter.to_uppercase().to_string())
            .style(Style::default().fg(FG).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(label, middle_line(inner));
    }
}

fn key_label(symbol: Symbol) -> String {
    match symbol {
        Symbol::Letter(c) => c.to_uppercase().to_string(),
        Symbol::Submit => "enter".to_string(),
        Symbol::Backspace => "⌫".to_string(),
    }
}

fn render_key<L: Lexicon + ?Sized>(
    f: &mut Frame,
    game: &Game<'_, L>,
    symbol: Symbol,
    hovered: bool,
    area: Rect,
) {
    let status = symbol
        .letter()
        .map_or(LetterStatus::Pending, |c| game.key_status(c));
    let fill = palette::status_color(status);

    let block = if hovered {
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(FG))
    } else {
        Block::bordered().border_style(Style::default().fg(fill))
    }
    .style(Style::default().bg(fill));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let label = Paragraph::new(key_label(symbol))
        .style(Style::default().fg(FG))
        .alignment(Alignment::Center);
    f.render_widget(label, middle_line(inner));
}

fn render_score<L: Lexicon + ?Sized>(f: &mut Frame, game: &Game<'_, L>, area: Rect) {
    let headline = if game.is_won() {
        format!("{} / {MAX_ATTEMPTS}", game.submitted_count())
    } else {
        game.word().text().to_uppercase()
    };

    let color = if game.is_won() {
        palette::MATCH
    } else {
        palette::PRESENT
    };

    let lines = vec![
        Line::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("q / Esc: quit", Style::default().fg(palette::PASSIVE)),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).min(area.height);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let score = Paragraph::new(lines)
        .style(Style::default().bg(BG))
        .alignment(Alignment::Center);
    f.render_widget(score, Rect::new(area.x, top, area.width, height));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::wordlists::Dictionary;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn dictionary() -> Dictionary {
        Dictionary::from_entries(["жабка", "белка", "ворон", "кошка", "сосна", "метро"])
            .unwrap()
    }

    fn draw(app: &App<'_, Dictionary>) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 36)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn cell_center(app: &App<'_, Dictionary>, role: NodeRole) -> (u16, u16) {
        let area = app.screen.find(role).unwrap().area;
        (area.x + area.width / 2, area.y + area.height / 2)
    }

    fn guess(app: &mut App<'_, Dictionary>, word: &str) {
        for c in word.chars() {
            app.game.type_letter(c);
        }
        app.game.submit();
    }

    #[test]
    fn fresh_game_shows_counter_and_keyboard() {
        let dict = dictionary();
        let app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        let text = screen_text(&draw(&app));

        assert!(text.contains("0 / 6"));
        assert!(text.contains("enter"));
        assert!(text.contains('⌫'));
        for letter in ['Й', 'Ж', 'Ю'] {
            assert!(text.contains(letter), "key {letter} missing");
        }
    }

    #[test]
    fn submitted_cells_are_colored_by_status() {
        let dict = dictionary();
        let mut app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        guess(&mut app, "белка");
        let buffer = draw(&app);

        let present = cell_center(&app, NodeRole::Cell { row: 0, col: 0 });
        let wrong = cell_center(&app, NodeRole::Cell { row: 0, col: 1 });
        let guessed = cell_center(&app, NodeRole::Cell { row: 0, col: 3 });

        assert_eq!(buffer[present].symbol(), "Б");
        assert_eq!(buffer[present].bg, palette::PRESENT);
        assert_eq!(buffer[wrong].bg, palette::MISS);
        assert_eq!(buffer[guessed].bg, palette::MATCH);
        assert!(screen_text(&buffer).contains("1 / 6"));
    }

    #[test]
    fn pending_letters_use_passive_fill() {
        let dict = dictionary();
        let mut app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        app.game.type_letter('ж');
        let buffer = draw(&app);

        let typed = cell_center(&app, NodeRole::Cell { row: 0, col: 0 });
        assert_eq!(buffer[typed].symbol(), "Ж");
        assert_eq!(buffer[typed].bg, palette::PASSIVE);

        let empty = cell_center(&app, NodeRole::Cell { row: 0, col: 1 });
        assert_eq!(buffer[empty].bg, BG);
    }

    #[test]
    fn keys_take_aggregated_status() {
        let dict = dictionary();
        let mut app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        guess(&mut app, "белка");
        let buffer = draw(&app);

        let wrong = cell_center(&app, NodeRole::Key(Symbol::Letter('е')));
        let guessed = cell_center(&app, NodeRole::Key(Symbol::Letter('к')));
        let untouched = cell_center(&app, NodeRole::Key(Symbol::Letter('ж')));

        assert_eq!(buffer[wrong].bg, palette::MISS);
        assert_eq!(buffer[guessed].bg, palette::MATCH);
        assert_eq!(buffer[untouched].bg, palette::PASSIVE);
    }

    #[test]
    fn hovered_key_gets_thick_border() {
        let dict = dictionary();
        let mut app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        app.hovered = Some(Symbol::Letter('ж'));
        let buffer = draw(&app);

        let area = app.screen.find(NodeRole::Key(Symbol::Letter('ж'))).unwrap().area;
        assert_eq!(buffer[(area.x, area.y)].symbol(), "┏");
        assert_eq!(buffer[(area.x, area.y)].fg, FG);
    }

    #[test]
    fn won_game_shows_attempt_count() {
        let dict = dictionary();
        let mut app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        guess(&mut app, "белка");
        guess(&mut app, "жабка");
        let text = screen_text(&draw(&app));

        assert!(text.contains("2 / 6"));
        assert!(!text.contains("enter"));
    }

    #[test]
    fn lost_game_reveals_word() {
        let dict = dictionary();
        let mut app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        for word in ["белка", "ворон", "кошка", "сосна", "метро", "белка"] {
            guess(&mut app, word);
        }
        let text = screen_text(&draw(&app));

        assert_eq!(app.game.stage(), Stage::Scored);
        assert!(text.contains("ЖАБКА"));
    }

    #[test]
    fn small_terminal_clips_without_panicking() {
        let dict = dictionary();
        let app = App::new(Word::new("жабка").unwrap(), &dict, &GameConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
