//! Screen tree for the game
//!
//! Header band, the 6×5 attempt grid and a three-row ЙЦУКЕН keyboard.
//! Built and solved once at startup; the geometry never changes afterwards.

use super::engine::{LayoutError, ResolvedNode, solve};
use super::node::{LayoutNode, NodeRole, Sizing};
use crate::core::{MAX_ATTEMPTS, Symbol, WORD_LEN};
use tracing::debug;

pub const SCREEN_WIDTH: u16 = 80;
pub const SCREEN_HEIGHT: u16 = 36;

pub const HEADER_HEIGHT: u16 = 3;
pub const CELL_WIDTH: u16 = 5;
pub const CELL_HEIGHT: u16 = 3;
pub const CELL_GAP: u16 = 1;
pub const KEY_WIDTH: u16 = 5;
pub const KEY_HEIGHT: u16 = 3;
pub const KEY_GAP: u16 = 1;
pub const SPECIAL_KEY_WIDTH: u16 = 10;

/// Letter rows of the on-screen keyboard, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["йцукенгшщзхъ", "фывапролджэ", "ячсмитьбю"];

/// How the submit and backspace keys are sized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardStyle {
    /// Special keys stretch to the keyboard edges
    #[default]
    GrowSpecialKeys,
    /// Special keys get a fixed width and the row is centered
    FixedSpecialKeys,
}

/// Build the constraint tree for a screen of the given size
#[must_use]
pub fn screen_tree(width: u16, height: u16, style: KeyboardStyle) -> LayoutNode {
    LayoutNode::new(NodeRole::Root)
        .column()
        .width(Sizing::Fixed(width))
        .height(Sizing::Fixed(height))
        .gap(1)
        .padding(1)
        .children([
            LayoutNode::new(NodeRole::Header)
                .width(Sizing::Grow(1))
                .height(Sizing::Fixed(HEADER_HEIGHT)),
            LayoutNode::new(NodeRole::Top)
                .row()
                .width(Sizing::Grow(1))
                .children([
                    LayoutNode::new(NodeRole::Filler("top-spacer-left")).width(Sizing::Grow(1)),
                    attempts(),
                    LayoutNode::new(NodeRole::Filler("top-spacer-right")).width(Sizing::Grow(1)),
                ]),
            LayoutNode::new(NodeRole::Bottom)
                .width(Sizing::Grow(1))
                .height(Sizing::Grow(1))
                .children([keyboard(style)]),
        ])
}

/// Build and solve the screen once
///
/// # Errors
///
/// Returns an error if the layout solver rejects the tree.
pub fn build_screen(
    width: u16,
    height: u16,
    style: KeyboardStyle,
) -> Result<ResolvedNode, LayoutError> {
    let tree = screen_tree(width, height, style);
    let screen = solve(&tree, width, height)?;
    debug!(width, height, ?style, nodes = screen.walk().count(), "screen laid out");
    Ok(screen)
}

fn attempts() -> LayoutNode {
    LayoutNode::new(NodeRole::Attempts)
        .column()
        .children((0..MAX_ATTEMPTS).map(attempt_row))
}

fn attempt_row(row: usize) -> LayoutNode {
    LayoutNode::new(NodeRole::AttemptRow(row))
        .row()
        .gap(CELL_GAP)
        .children((0..WORD_LEN).map(|col| {
            LayoutNode::new(NodeRole::Cell { row, col })
                .width(Sizing::Fixed(CELL_WIDTH))
                .height(Sizing::Fixed(CELL_HEIGHT))
        }))
}

fn key(symbol: Symbol, width: Sizing) -> LayoutNode {
    LayoutNode::new(NodeRole::Key(symbol))
        .width(width)
        .height(Sizing::Fixed(KEY_HEIGHT))
}

fn letter_keys(letters: &str) -> impl Iterator<Item = LayoutNode> + '_ {
    letters
        .chars()
        .map(|c| key(Symbol::Letter(c), Sizing::Fixed(KEY_WIDTH)))
}

fn spacer(row: usize, slot: usize) -> LayoutNode {
    LayoutNode::new(NodeRole::Spacer { row, slot }).width(Sizing::Grow(1))
}

fn keyboard_row(row: usize, keys: Vec<LayoutNode>) -> LayoutNode {
    LayoutNode::new(NodeRole::KeyboardRow(row))
        .row()
        .width(Sizing::Grow(1))
        .gap(KEY_GAP)
        .children(keys)
}

fn centered_row(row: usize, keys: impl Iterator<Item = LayoutNode>) -> LayoutNode {
    let mut children = vec![spacer(row, 0)];
    children.extend(keys);
    children.push(spacer(row, 1));
    keyboard_row(row, children)
}

fn keyboard(style: KeyboardStyle) -> LayoutNode {
    let [top, middle, bottom] = KEYBOARD_ROWS;

    let last = match style {
        KeyboardStyle::GrowSpecialKeys => {
            let mut keys = vec![key(Symbol::Submit, Sizing::Grow(1))];
            keys.extend(letter_keys(bottom));
            keys.push(key(Symbol::Backspace, Sizing::Grow(1)));
            keyboard_row(2, keys)
        }
        KeyboardStyle::FixedSpecialKeys => centered_row(
            2,
            std::iter::once(key(Symbol::Submit, Sizing::Fixed(SPECIAL_KEY_WIDTH)))
                .chain(letter_keys(bottom))
                .chain(std::iter::once(key(
                    Symbol::Backspace,
                    Sizing::Fixed(SPECIAL_KEY_WIDTH),
                ))),
        ),
    };

    LayoutNode::new(NodeRole::Keyboard)
        .column()
        .width(Sizing::Grow(1))
        .children([centered_row(0, letter_keys(top)), centered_row(1, letter_keys(middle)), last])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::{Position, Rect};
    use rustc_hash::FxHashSet;

    fn screen(style: KeyboardStyle) -> ResolvedNode {
        build_screen(SCREEN_WIDTH, SCREEN_HEIGHT, style).unwrap()
    }

    fn keys(screen: &ResolvedNode) -> Vec<(Symbol, Rect)> {
        screen
            .walk()
            .filter_map(|node| match node.role {
                NodeRole::Key(symbol) => Some((symbol, node.area)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ids_are_unique() {
        for style in [KeyboardStyle::GrowSpecialKeys, KeyboardStyle::FixedSpecialKeys] {
            let tree = screen_tree(SCREEN_WIDTH, SCREEN_HEIGHT, style);
            let mut seen = FxHashSet::default();
            for node in tree.walk() {
                assert!(seen.insert(node.role.to_string()), "duplicate id {}", node.role);
            }
        }
    }

    #[test]
    fn grid_has_six_rows_of_five_cells() {
        let screen = screen(KeyboardStyle::default());
        let cells: Vec<Rect> = screen
            .walk()
            .filter(|n| matches!(n.role, NodeRole::Cell { .. }))
            .map(|n| n.area)
            .collect();

        assert_eq!(cells.len(), MAX_ATTEMPTS * WORD_LEN);
        assert!(cells.iter().all(|c| c.width == CELL_WIDTH && c.height == CELL_HEIGHT));
    }

    #[test]
    fn cells_are_ordered_row_major() {
        let screen = screen(KeyboardStyle::default());
        let first = screen.find(NodeRole::Cell { row: 0, col: 0 }).unwrap().area;
        let right = screen.find(NodeRole::Cell { row: 0, col: 1 }).unwrap().area;
        let below = screen.find(NodeRole::Cell { row: 1, col: 0 }).unwrap().area;

        assert_eq!(right.x, first.x + CELL_WIDTH + CELL_GAP);
        assert_eq!(right.y, first.y);
        assert_eq!(below.y, first.y + CELL_HEIGHT);
        assert_eq!(below.x, first.x);
    }

    #[test]
    fn keyboard_has_every_letter_and_both_commands() {
        for style in [KeyboardStyle::GrowSpecialKeys, KeyboardStyle::FixedSpecialKeys] {
            let keys = keys(&screen(style));
            let letters = keys.iter().filter(|(s, _)| s.letter().is_some()).count();

            assert_eq!(letters, 32);
            assert!(keys.iter().any(|(s, _)| *s == Symbol::Submit));
            assert!(keys.iter().any(|(s, _)| *s == Symbol::Backspace));
        }
    }

    #[test]
    fn everything_fits_on_screen() {
        let bounds = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        for style in [KeyboardStyle::GrowSpecialKeys, KeyboardStyle::FixedSpecialKeys] {
            for node in screen(style).walk() {
                assert_eq!(bounds.union(node.area), bounds, "{} leaves the screen", node.role);
            }
        }
    }

    #[test]
    fn letter_keys_keep_full_size() {
        let keys = keys(&screen(KeyboardStyle::default()));
        for (symbol, area) in keys.iter().filter(|(s, _)| s.letter().is_some()) {
            assert_eq!(area.width, KEY_WIDTH, "{symbol} squeezed");
            assert_eq!(area.height, KEY_HEIGHT, "{symbol} squeezed");
        }
    }

    #[test]
    fn keys_do_not_overlap() {
        let keys = keys(&screen(KeyboardStyle::default()));
        for (i, (a, ra)) in keys.iter().enumerate() {
            for (b, rb) in &keys[i + 1..] {
                assert!(!ra.intersects(*rb), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn grow_special_keys_reach_the_edges() {
        let screen = screen(KeyboardStyle::GrowSpecialKeys);
        let row = screen.find(NodeRole::KeyboardRow(2)).unwrap().area;
        let keys = keys(&screen);
        let submit = keys.iter().find(|(s, _)| *s == Symbol::Submit).unwrap().1;
        let backspace = keys.iter().find(|(s, _)| *s == Symbol::Backspace).unwrap().1;

        assert_eq!(submit.x, row.x);
        assert_eq!(backspace.right(), row.right());
        assert!(submit.width > KEY_WIDTH);
    }

    #[test]
    fn fixed_special_keys_have_fixed_width() {
        let keys = keys(&screen(KeyboardStyle::FixedSpecialKeys));
        let submit = keys.iter().find(|(s, _)| *s == Symbol::Submit).unwrap().1;
        assert_eq!(submit.width, SPECIAL_KEY_WIDTH);
    }

    #[test]
    fn attempts_are_centered() {
        let screen = screen(KeyboardStyle::default());
        let top = screen.find(NodeRole::Top).unwrap().area;
        let grid = screen.find(NodeRole::Attempts).unwrap().area;

        let left = grid.x - top.x;
        let right = top.right() - grid.right();
        assert!(left.abs_diff(right) <= 1);
        assert_eq!(grid.height, CELL_HEIGHT * 6);
    }

    #[test]
    fn every_key_center_hits_itself() {
        let screen = screen(KeyboardStyle::default());
        for (symbol, area) in keys(&screen) {
            let center = Position::new(area.x + area.width / 2, area.y + area.height / 2);
            assert_eq!(screen.key_at(center), Some(symbol));
        }
    }

    #[test]
    fn cells_are_not_keys() {
        let screen = screen(KeyboardStyle::default());
        let cell = screen.find(NodeRole::Cell { row: 0, col: 0 }).unwrap().area;
        assert_eq!(screen.key_at(Position::new(cell.x + 1, cell.y + 1)), None);
    }
}
