//! Screen layout
//!
//! A small flex-box-like engine (`engine`), the tree it consumes (`node`)
//! and the game's static screen description (`builder`).

pub mod builder;
pub mod engine;
pub mod node;

pub use builder::{
    KEYBOARD_ROWS, KeyboardStyle, SCREEN_HEIGHT, SCREEN_WIDTH, build_screen, screen_tree,
};
pub use engine::{LayoutError, ResolvedNode, solve};
pub use node::{Axis, LayoutNode, NodeRole, Sizing};
