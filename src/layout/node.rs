//! Layout tree description
//!
//! A `LayoutNode` is the static input to the layout engine. Every node
//! carries a typed `NodeRole` so that renderers and hit testing read the
//! meaning of a rectangle directly instead of parsing an id string.

use crate::core::Symbol;
use std::fmt;

/// Direction children are stacked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Left to right
    #[default]
    Row,
    /// Top to bottom
    Column,
}

impl Axis {
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

/// Sizing policy along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sizing {
    /// Literal size in cells
    Fixed(u16),
    /// Share of leftover space, proportional to the weight
    Grow(u16),
    /// Smallest span enclosing the children
    #[default]
    Fit,
}

/// What a node stands for on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Root,
    Header,
    Top,
    Attempts,
    AttemptRow(usize),
    Cell { row: usize, col: usize },
    Bottom,
    Keyboard,
    KeyboardRow(usize),
    Key(Symbol),
    Spacer { row: usize, slot: usize },
    Filler(&'static str),
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Header => f.write_str("header"),
            Self::Top => f.write_str("top"),
            Self::Attempts => f.write_str("attempts"),
            Self::AttemptRow(row) => write!(f, "attempt-row_{row}"),
            Self::Cell { row, col } => write!(f, "attempt_{row}_{col}"),
            Self::Bottom => f.write_str("bottom"),
            Self::Keyboard => f.write_str("keyboard"),
            Self::KeyboardRow(row) => write!(f, "keyboard_row_{row}"),
            Self::Key(symbol) => write!(f, "key_{symbol}"),
            Self::Spacer { row, slot } => write!(f, "spacer_{row}_{slot}"),
            Self::Filler(name) => f.write_str(name),
        }
    }
}

/// A node of the constraint tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    pub role: NodeRole,
    pub axis: Axis,
    pub width: Sizing,
    pub height: Sizing,
    pub gap: u16,
    pub padding: u16,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// A fit-sized row with no children
    #[must_use]
    pub const fn new(role: NodeRole) -> Self {
        Self {
            role,
            axis: Axis::Row,
            width: Sizing::Fit,
            height: Sizing::Fit,
            gap: 0,
            padding: 0,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn row(mut self) -> Self {
        self.axis = Axis::Row;
        self
    }

    #[must_use]
    pub fn column(mut self) -> Self {
        self.axis = Axis::Column;
        self
    }

    #[must_use]
    pub fn width(mut self, sizing: Sizing) -> Self {
        self.width = sizing;
        self
    }

    #[must_use]
    pub fn height(mut self, sizing: Sizing) -> Self {
        self.height = sizing;
        self
    }

    #[must_use]
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sizing along the given axis (`Row` is width, `Column` is height)
    #[must_use]
    pub const fn sizing(&self, axis: Axis) -> Sizing {
        match axis {
            Axis::Row => self.width,
            Axis::Column => self.height,
        }
    }

    /// Depth-first walk over this node and all descendants
    pub fn walk(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ids_are_stable() {
        assert_eq!(NodeRole::Cell { row: 2, col: 3 }.to_string(), "attempt_2_3");
        assert_eq!(NodeRole::AttemptRow(4).to_string(), "attempt-row_4");
        assert_eq!(NodeRole::Key(Symbol::Letter('ж')).to_string(), "key_ж");
        assert_eq!(NodeRole::Key(Symbol::Submit).to_string(), "key_submit");
        assert_eq!(NodeRole::Key(Symbol::Backspace).to_string(), "key_backspace");
        assert_eq!(NodeRole::Spacer { row: 1, slot: 0 }.to_string(), "spacer_1_0");
        assert_eq!(NodeRole::Filler("top-spacer-left").to_string(), "top-spacer-left");
    }

    #[test]
    fn builder_methods_set_fields() {
        let node = LayoutNode::new(NodeRole::Root)
            .column()
            .width(Sizing::Fixed(10))
            .height(Sizing::Grow(2))
            .gap(1)
            .padding(3)
            .children([LayoutNode::new(NodeRole::Header)]);

        assert_eq!(node.axis, Axis::Column);
        assert_eq!(node.sizing(Axis::Row), Sizing::Fixed(10));
        assert_eq!(node.sizing(Axis::Column), Sizing::Grow(2));
        assert_eq!(node.gap, 1);
        assert_eq!(node.padding, 3);
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn defaults_are_fit_row() {
        let node = LayoutNode::new(NodeRole::Header);
        assert_eq!(node.axis, Axis::Row);
        assert_eq!(node.width, Sizing::Fit);
        assert_eq!(node.height, Sizing::Fit);
    }

    #[test]
    fn walk_is_depth_first_in_order() {
        let tree = LayoutNode::new(NodeRole::Root).children([
            LayoutNode::new(NodeRole::Top).children([LayoutNode::new(NodeRole::Attempts)]),
            LayoutNode::new(NodeRole::Bottom),
        ]);

        let roles: Vec<NodeRole> = tree.walk().map(|n| n.role).collect();
        assert_eq!(
            roles,
            [NodeRole::Root, NodeRole::Top, NodeRole::Attempts, NodeRole::Bottom]
        );
    }

    #[test]
    fn cross_axis_flips() {
        assert_eq!(Axis::Row.cross(), Axis::Column);
        assert_eq!(Axis::Column.cross(), Axis::Row);
    }
}
