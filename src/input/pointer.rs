//! Pointer sampling
//!
//! Terminal mouse reports arrive as discrete events; this folds them into
//! the "where is the pointer, is the button down" state the frame loop
//! samples once per tick. A press is latched until sampled so a click whose
//! down and up both land inside one frame is not lost.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    position: Option<Position>,
    pressed: bool,
    latched: bool,
}

impl PointerState {
    /// Fold one mouse event into the state
    pub fn update(&mut self, event: &MouseEvent) {
        let position = Position::new(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.position = Some(position);
                self.pressed = true;
                self.latched = true;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.position = Some(position);
                self.pressed = false;
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                self.position = Some(position);
            }
            _ => {}
        }
    }

    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// True while the left button is held
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True if the button is held or went down since the last sample
    pub fn sample_press(&mut self) -> bool {
        let pressed = self.pressed || self.latched;
        self.latched = false;
        pressed
    }
}
