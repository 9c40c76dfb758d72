//! Box layout engine
//!
//! Maps a `LayoutNode` tree onto a taffy flex-box tree, solves it once
//! against a fixed root size and reads the result back as absolute
//! terminal rectangles.
//!
//! Sizing maps onto flex properties:
//! - `Fixed(n)` is a definite length that never shrinks
//! - `Fit` is `auto`, so the node spans its own content
//! - `Grow(w)` on the main axis is `flex_grow: w` from a zero basis; on the
//!   cross axis it stretches to the parent's content box
//!
//! Children never leave the parent's content box; rectangles are clipped at
//! its edge after the solve.

use super::node::{Axis, LayoutNode, NodeRole, Sizing};
use crate::core::Symbol;
use ratatui::layout::{Position, Rect};
use taffy::prelude::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, NodeId, Size, Style, TaffyTree,
    auto, length,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout solver failed: {0}")]
    Solver(#[from] taffy::TaffyError),
}

/// A node with its absolute rectangle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub role: NodeRole,
    pub area: Rect,
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// Depth-first walk over this node and all descendants
    pub fn walk(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// First node with the given role
    #[must_use]
    pub fn find(&self, role: NodeRole) -> Option<&Self> {
        self.walk().find(|node| node.role == role)
    }

    /// Keyboard key under a point, if any
    #[must_use]
    pub fn key_at(&self, position: Position) -> Option<Symbol> {
        self.walk().find_map(|node| match node.role {
            NodeRole::Key(symbol) if node.area.contains(position) => Some(symbol),
            _ => None,
        })
    }
}

/// Lay out `root` inside a `width` × `height` screen anchored at the origin
///
/// # Errors
///
/// Returns an error if the solver rejects the tree.
pub fn solve(root: &LayoutNode, width: u16, height: u16) -> Result<ResolvedNode, LayoutError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let children = insert_children(&mut tree, root)?;
    let mut style = flex_style(root, None);
    style.size = Size {
        width: length(f32::from(width)),
        height: length(f32::from(height)),
    };
    let root_id = tree.new_with_children(style, &children)?;

    tree.compute_layout(
        root_id,
        Size {
            width: AvailableSpace::Definite(f32::from(width)),
            height: AvailableSpace::Definite(f32::from(height)),
        },
    )?;

    resolve(
        &tree,
        root,
        root_id,
        Position::new(0, 0),
        Rect::new(0, 0, width, height),
    )
}

fn insert(
    tree: &mut TaffyTree<()>,
    node: &LayoutNode,
    parent: Axis,
) -> Result<NodeId, LayoutError> {
    let children = insert_children(tree, node)?;
    Ok(tree.new_with_children(flex_style(node, Some(parent)), &children)?)
}

fn insert_children(tree: &mut TaffyTree<()>, node: &LayoutNode) -> Result<Vec<NodeId>, LayoutError> {
    node.children
        .iter()
        .map(|child| insert(tree, child, node.axis))
        .collect()
}

/// Flex style for a node placed inside a parent stacking along `parent`
fn flex_style(node: &LayoutNode, parent: Option<Axis>) -> Style {
    let gap = length(f32::from(node.gap));
    let padding = length(f32::from(node.padding));

    let mut style = Style {
        display: Display::Flex,
        flex_direction: match node.axis {
            Axis::Row => FlexDirection::Row,
            Axis::Column => FlexDirection::Column,
        },
        align_items: Some(AlignItems::FlexStart),
        gap: Size {
            width: gap,
            height: gap,
        },
        padding: taffy::geometry::Rect {
            left: padding,
            right: padding,
            top: padding,
            bottom: padding,
        },
        flex_shrink: 0.0,
        size: Size {
            width: dimension(node.width),
            height: dimension(node.height),
        },
        ..Style::default()
    };

    let Some(main) = parent else {
        return style;
    };

    if let Sizing::Grow(weight) = node.sizing(main) {
        style.flex_grow = f32::from(weight);
        style.flex_basis = length(0.0);
    }
    if matches!(node.sizing(main.cross()), Sizing::Grow(_)) {
        style.align_self = Some(AlignItems::Stretch);
    }

    style
}

fn dimension(sizing: Sizing) -> Dimension {
    match sizing {
        Sizing::Fixed(cells) => length(f32::from(cells)),
        Sizing::Grow(_) | Sizing::Fit => auto(),
    }
}

/// Read solved positions back, relative to `origin`, clipped to `area`
fn resolve(
    tree: &TaffyTree<()>,
    node: &LayoutNode,
    id: NodeId,
    origin: Position,
    area: Rect,
) -> Result<ResolvedNode, LayoutError> {
    let content = inset(area, node.padding);
    let mut children = Vec::with_capacity(node.children.len());

    for (child, child_id) in node.children.iter().zip(tree.children(id)?) {
        let layout = tree.layout(child_id)?;
        let at = Position::new(
            origin.x.saturating_add(cells(layout.location.x)),
            origin.y.saturating_add(cells(layout.location.y)),
        );
        let rect = Rect::new(
            at.x,
            at.y,
            cells(layout.size.width),
            cells(layout.size.height),
        );
        children.push(resolve(tree, child, child_id, at, clip(rect, content))?);
    }

    Ok(ResolvedNode {
        role: node.role,
        area,
        children,
    })
}

/// Solver output is already rounded to whole cells
fn cells(value: f32) -> u16 {
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    let x = rect.x.clamp(bounds.x, bounds.right());
    let y = rect.y.clamp(bounds.y, bounds.bottom());
    let right = rect.right().clamp(x, bounds.right());
    let bottom = rect.bottom().clamp(y, bounds.bottom());
    Rect::new(x, y, right - x, bottom - y)
}

fn inset(area: Rect, padding: u16) -> Rect {
    let dx = padding.min(area.width / 2);
    let dy = padding.min(area.height / 2);
    Rect::new(
        area.x + dx,
        area.y + dy,
        area.width - 2 * dx,
        area.height - 2 * dy,
    )
}
