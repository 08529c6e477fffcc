//! The box tree produced by layout.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
//!
//! Boxes live in an arena addressed by [`BoxId`]. A parent owns its
//! in-flow children, its floats and its absolutely positioned descendants as
//! index lists; each child holds the index of its parent. The tree is built
//! fresh by every layout pass and never mutated afterwards.

use core::fmt::Write as _;

use serde::Serialize;

use marten_dom::{DomTree, NodeId, NodeType};

use super::box_model::{Dimensions, EdgeSizes, Rect};
use super::units::{FixedPoint, fixed_to_px};
use crate::cascade::StyleId;
use crate::error::InvariantViolation;
use crate::style::{Color, ListStylePosition, Position};

/// Index of a box in a [`BoxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BoxId(pub usize);

/// One positioned glyph of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Glyph {
    /// The character.
    pub ch: char,
    /// Pen x, in document coordinates.
    pub x: FixedPoint,
    /// Baseline y, in document coordinates.
    pub y: FixedPoint,
    /// Horizontal advance.
    pub advance: FixedPoint,
}

/// The words of one text node that landed on one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    /// The words, joined by the spaces between them.
    pub text: String,
    /// One glyph per character of `text`.
    pub glyphs: Vec<Glyph>,
    /// Font size in px.
    pub font_size: f32,
}

/// [§ 12.5 Lists](https://www.w3.org/TR/CSS2/generate.html#lists)
///
/// "The marker box is placed outside the principal block box" unless
/// `list-style-position` is `inside`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListMarker {
    /// The rendered marker, e.g. `"3."` or `"•"`.
    pub text: String,
    /// Inside or outside the principal box.
    pub position: ListStylePosition,
    /// Where the marker is drawn.
    pub rect: Rect,
}

/// The closed set of box kinds. Layout dispatches on this tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum BoxKind {
    /// The initial containing block: the viewport.
    Root {
        /// `position: fixed` boxes, laid out against the viewport.
        fixed: Vec<BoxId>,
    },
    /// A block-level box; floats are blocks too.
    Block,
    /// An atomic inline-level block container.
    InlineBlock,
    /// One line's fragment of a non-replaced inline element.
    InlineElement,
    /// A line box.
    Line,
    /// A run of text on one line.
    Text(TextRun),
    /// A block box with a list marker.
    ListItem {
        /// The marker, absent for `list-style-type: none`.
        marker: Option<ListMarker>,
        /// The item's number within its list.
        ordinal: i32,
    },
    /// An absolutely or fixed positioned box.
    Absolute,
    /// A block wrapping a run of inline content next to block siblings.
    AnonymousBlock,
}

impl BoxKind {
    /// Name used in dumps.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Root { .. } => "Root",
            Self::Block => "Block",
            Self::InlineBlock => "InlineBlock",
            Self::InlineElement => "InlineElement",
            Self::Line => "Line",
            Self::Text(_) => "Text",
            Self::ListItem { .. } => "ListItem",
            Self::Absolute => "Absolute",
            Self::AnonymousBlock => "AnonymousBlock",
        }
    }

    /// Whether boxes of this kind stack vertically in their parent.
    #[must_use]
    pub const fn is_block_level(&self) -> bool {
        matches!(
            self,
            Self::Block | Self::ListItem { .. } | Self::AnonymousBlock | Self::Root { .. }
        )
    }
}

/// A node of the box tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutBox {
    /// What kind of box this is.
    pub kind: BoxKind,
    /// The markup node that generated it; `None` for anonymous and line boxes.
    pub node: Option<NodeId>,
    /// The style it was laid out with.
    pub style: StyleId,
    /// Its parent; `None` only for the root.
    pub parent: Option<BoxId>,
    /// In-flow children in order.
    pub children: Vec<BoxId>,
    /// Floats whose nearest block ancestor is this box.
    pub floats: Vec<BoxId>,
    /// Absolutely positioned boxes for which this box is the containing block.
    pub absolutes: Vec<BoxId>,
    /// Content rect and edge sizes, in fixed point.
    pub dimensions: Dimensions,
    /// Resolved foreground color.
    pub color: Color,
    /// Resolved background color.
    pub background_color: Color,
    /// The `position` it was laid out with.
    pub position: Position,
}

impl LayoutBox {
    /// A box with zero geometry and no children.
    #[must_use]
    pub const fn new(kind: BoxKind, node: Option<NodeId>, style: StyleId) -> Self {
        Self {
            kind,
            node,
            style,
            parent: None,
            children: Vec::new(),
            floats: Vec::new(),
            absolutes: Vec::new(),
            dimensions: Dimensions {
                content: Rect::new(0, 0, 0, 0),
                padding: ZERO_EDGES,
                border: ZERO_EDGES,
                margin: ZERO_EDGES,
            },
            color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            position: Position::Static,
        }
    }

    /// The text run, for text boxes.
    #[must_use]
    pub const fn text_run(&self) -> Option<&TextRun> {
        match &self.kind {
            BoxKind::Text(run) => Some(run),
            _ => None,
        }
    }

    /// The marker, for list items that have one.
    #[must_use]
    pub const fn marker(&self) -> Option<&ListMarker> {
        match &self.kind {
            BoxKind::ListItem {
                marker: Some(marker),
                ..
            } => Some(marker),
            _ => None,
        }
    }
}

const ZERO_EDGES: EdgeSizes = EdgeSizes {
    top: 0,
    right: 0,
    bottom: 0,
    left: 0,
};

/// Where a box hangs off its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Child,
    Float,
    Absolute,
    Fixed,
}

/// The arena of boxes for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxTree {
    boxes: Vec<LayoutBox>,
    root: BoxId,
}

impl BoxTree {
    /// A tree holding just `root`.
    pub(crate) fn new(root: LayoutBox) -> Self {
        Self {
            boxes: vec![root],
            root: BoxId(0),
        }
    }

    /// The root box's id.
    #[must_use]
    pub const fn root(&self) -> BoxId {
        self.root
    }

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the tree is empty; a laid-out tree always has a root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The box with `id`.
    ///
    /// # Panics
    ///
    /// Raises an [`InvariantViolation`] if `id` is out of range.
    #[must_use]
    pub fn get(&self, id: BoxId) -> &LayoutBox {
        match self.boxes.get(id.0) {
            Some(b) => b,
            None => InvariantViolation::new("layout", format!("box {} out of range", id.0)).raise(),
        }
    }

    pub(crate) fn get_mut(&mut self, id: BoxId) -> &mut LayoutBox {
        let len = self.boxes.len();
        match self.boxes.get_mut(id.0) {
            Some(b) => b,
            None => InvariantViolation::new("layout", format!("box {} of {len} out of range", id.0))
                .raise(),
        }
    }

    /// All boxes with their ids, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &LayoutBox)> {
        self.boxes.iter().enumerate().map(|(i, b)| (BoxId(i), b))
    }

    /// Boxes generated by `node`; inline elements split across lines yield
    /// several.
    pub fn boxes_for_node(&self, node: NodeId) -> impl Iterator<Item = BoxId> + '_ {
        self.iter()
            .filter(move |(_, b)| b.node == Some(node))
            .map(|(id, _)| id)
    }

    /// In-flow children, then floats, then absolutes, then fixed boxes.
    #[must_use]
    pub fn all_children(&self, id: BoxId) -> Vec<BoxId> {
        let b = self.get(id);
        let mut out = Vec::with_capacity(b.children.len() + b.floats.len() + b.absolutes.len());
        out.extend_from_slice(&b.children);
        out.extend_from_slice(&b.floats);
        out.extend_from_slice(&b.absolutes);
        if let BoxKind::Root { fixed } = &b.kind {
            out.extend_from_slice(fixed);
        }
        out
    }

    /// `id` and everything below it, parents before children.
    #[must_use]
    pub fn subtree(&self, id: BoxId) -> Vec<BoxId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.all_children(next).into_iter().rev());
        }
        out
    }

    pub(crate) fn push(&mut self, mut layout_box: LayoutBox, parent: BoxId, slot: Slot) -> BoxId {
        let id = BoxId(self.boxes.len());
        layout_box.parent = Some(parent);
        self.boxes.push(layout_box);
        let parent_box = self.get_mut(parent);
        match slot {
            Slot::Child => parent_box.children.push(id),
            Slot::Float => parent_box.floats.push(id),
            Slot::Absolute => parent_box.absolutes.push(id),
            Slot::Fixed => match &mut parent_box.kind {
                BoxKind::Root { fixed } => fixed.push(id),
                _ => InvariantViolation::new("layout", "fixed box attached below a non-root box")
                    .raise(),
            },
        }
        id
    }

    /// Move `id` and its whole subtree.
    pub(crate) fn translate(&mut self, id: BoxId, dx: FixedPoint, dy: FixedPoint) {
        if dx == 0 && dy == 0 {
            return;
        }
        for member in self.subtree(id) {
            let b = self.get_mut(member);
            b.dimensions.content.x += dx;
            b.dimensions.content.y += dy;
            match &mut b.kind {
                BoxKind::Text(run) => {
                    for glyph in &mut run.glyphs {
                        glyph.x += dx;
                        glyph.y += dy;
                    }
                }
                BoxKind::ListItem {
                    marker: Some(marker),
                    ..
                } => {
                    marker.rect.x += dx;
                    marker.rect.y += dy;
                }
                _ => {}
            }
        }
    }

    /// An indented text rendering, one box per line:
    /// `Kind <tag> x= y= w= h=` with coordinates in px.
    #[must_use]
    pub fn dump(&self, dom: &DomTree) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root, 0_usize)];
        while let Some((id, depth)) = stack.pop() {
            let b = self.get(id);
            let rect = b.dimensions.content;
            let _ = write!(out, "{:indent$}{}", "", b.kind.name(), indent = depth * 2);
            match b.node.and_then(|n| dom.get(n)).map(|n| &n.node_type) {
                Some(NodeType::Element(element)) => {
                    let _ = write!(out, " <{}>", element.tag_name);
                }
                Some(NodeType::Document) => out.push_str(" #document"),
                _ => {}
            }
            let _ = write!(
                out,
                " x={} y={} w={} h={}",
                fixed_to_px(rect.x),
                fixed_to_px(rect.y),
                fixed_to_px(rect.width),
                fixed_to_px(rect.height)
            );
            if let Some(run) = b.text_run() {
                let _ = write!(out, " {:?}", run.text);
            }
            if let Some(marker) = b.marker() {
                let _ = write!(out, " marker={:?}", marker.text);
            }
            out.push('\n');
            for child in self.all_children(id).into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}
