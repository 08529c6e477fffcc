//! CSS Layout Engine
//!
//! Turns a styled document into a [`BoxTree`] of boxes with fixed-point
//! geometry.
//!
//! # Relevant Specifications
//!
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS 2.1 Visual formatting model details](https://www.w3.org/TR/CSS2/visudet.html)
//! - [CSS 2.1 Generated content, automatic numbering, and lists](https://www.w3.org/TR/CSS2/generate.html)
//! - [CSS Text Module Level 3](https://www.w3.org/TR/css-text-3/)
//!
//! # Module Structure
//!
//! - [`units`] - Fixed-point units and font-size resolution
//! - [`box_model`] - Rectangles and edge sizes
//! - [`box_tree`] - The box arena handed to the renderer
//! - [`float`] - Float placement and the bands left between floats
//! - [`list_marker`] - List item marker strings
//!
//! Block flow, inline flow and positioned layout are private passes of one
//! layout run; [`layout_document`] is the only way in.

mod block;
pub mod box_model;
pub mod box_tree;
pub mod float;
mod inline;
pub mod list_marker;
mod positioned;
pub mod units;

pub use box_model::{Dimensions, EdgeSizes, Rect};
pub use box_tree::{BoxId, BoxKind, BoxTree, Glyph, LayoutBox, ListMarker, TextRun};
pub use float::{FloatList, FloatSide, PlacedFloat};
pub use list_marker::{list_marker, to_roman};
pub use units::{
    FIXED_POINT_SCALE, FixedPoint, fixed_to_px, length_to_fixed, px_to_fixed, resolve_font_size,
};

use std::collections::HashSet;

use marten_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};

use crate::cascade::{StyleId, StyleNode, StyleTree};
use crate::style::{Length, LengthContext, LineHeight, Property, Side};
use crate::text::{FontDescriptor, FontMetrics, TextStyle};
use box_tree::Slot;

/// Viewport and unit settings for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width in px; the width of the initial containing block.
    pub viewport_width: f32,
    /// Viewport height in px.
    pub viewport_height: f32,
    /// Device pixels per inch, used by the physical length units.
    pub dpi: f32,
    /// Size of `font-size: medium` in px.
    pub default_font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            dpi: 96.0,
            default_font_size: 16.0,
        }
    }
}

/// Lay out `dom` as styled by `styles` into a fresh box tree.
///
/// Every call builds the whole tree from scratch; nothing is cached between
/// passes.
#[must_use]
pub fn layout_document(
    dom: &DomTree,
    styles: &StyleTree,
    config: &LayoutConfig,
    metrics: &dyn FontMetrics,
) -> BoxTree {
    LayoutEngine::new(dom, styles, config, metrics).run()
}

/// The containing block a box is sized against.
#[derive(Debug, Clone, Copy)]
struct Containing {
    /// Content width; the base for horizontal percentages and margins.
    width: FixedPoint,
    /// Content height if it is definite.
    height: Option<FixedPoint>,
    /// The box whose block formatting context floats are placed in.
    context: BoxId,
    /// The nearest positioned ancestor, for absolutely positioned boxes.
    positioned: BoxId,
}

/// Font extents of one style, with the half-leading folded in.
#[derive(Debug, Clone, Copy)]
struct FontExtents {
    /// Baseline to the top of the inline box, leading included.
    ascent: FixedPoint,
    /// Baseline to the bottom of the inline box, leading included.
    descent: FixedPoint,
    /// Baseline to the top of the glyph area.
    content_ascent: FixedPoint,
    /// Height of the glyph area.
    content_height: FixedPoint,
}

/// State of one layout pass.
struct LayoutEngine<'a> {
    dom: &'a DomTree,
    styles: &'a StyleTree,
    config: &'a LayoutConfig,
    metrics: &'a dyn FontMetrics,
    /// Used font size in px, by style id.
    font_px: Vec<f32>,
    /// Used line height in px, by style id.
    line_px: Vec<f32>,
    tree: BoxTree,
    floats: FloatList,
}

impl<'a> LayoutEngine<'a> {
    fn new(
        dom: &'a DomTree,
        styles: &'a StyleTree,
        config: &'a LayoutConfig,
        metrics: &'a dyn FontMetrics,
    ) -> Self {
        // Style nodes are stored parents first, so one forward pass sees
        // every parent's sizes before its children.
        let mut font_px: Vec<f32> = Vec::with_capacity(styles.len());
        let mut line_px: Vec<f32> = Vec::with_capacity(styles.len());
        for (_, style) in styles.iter() {
            let parent_font = style
                .parent
                .and_then(|p| font_px.get(p.0).copied())
                .unwrap_or(config.default_font_size);
            let parent_line = style.parent.and_then(|p| line_px.get(p.0).copied());

            let size = if style.is_inherited(Property::FontSize) {
                parent_font
            } else {
                resolve_font_size(
                    style.font_size(),
                    parent_font,
                    config.default_font_size,
                    config.dpi,
                )
            };
            let line = match style.line_height() {
                LineHeight::Normal => LineHeight::NORMAL_FACTOR * size,
                LineHeight::Number(n) => n * size,
                // A relative length is computed once, on the element that
                // declared it, and inherited as px.
                LineHeight::Length(length) => match parent_line {
                    Some(px) if style.is_inherited(Property::LineHeight) && length.is_relative() => px,
                    _ => length.to_px(
                        &LengthContext {
                            dpi: config.dpi,
                            font_size: size,
                        },
                        size,
                    ),
                },
            };
            font_px.push(size);
            line_px.push(line.max(0.0));
        }

        let mut root = LayoutBox::new(
            BoxKind::Root { fixed: Vec::new() },
            Some(dom.root()),
            styles.root(),
        );
        root.dimensions.content = Rect::new(
            0,
            0,
            px_to_fixed(config.viewport_width),
            px_to_fixed(config.viewport_height),
        );
        let root_style = styles.get(styles.root());
        root.color = root_style.color();
        root.background_color = root_style.background_color();

        Self {
            dom,
            styles,
            config,
            metrics,
            font_px,
            line_px,
            tree: BoxTree::new(root),
            floats: FloatList::new(),
        }
    }

    fn run(mut self) -> BoxTree {
        let root = self.tree.root();
        let viewport = self.tree.get(root).dimensions.content;
        let cb = Containing {
            width: viewport.width,
            height: Some(viewport.height),
            context: root,
            positioned: root,
        };
        // STEP 1: Normal flow, floats included.
        let _ = self.layout_children(root, self.dom.root(), cb, 0);

        // STEP 2: Out-of-flow boxes once the flow is known.
        self.layout_absolutes(root);
        self.layout_fixed();

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] done: {} boxes, {} floats",
            self.tree.len(),
            self.floats.entries().len()
        );
        self.tree
    }

    fn style(&self, id: StyleId) -> &'a StyleNode {
        self.styles.get(id)
    }

    fn font_size(&self, id: StyleId) -> f32 {
        self.font_px
            .get(id.0)
            .copied()
            .unwrap_or(self.config.default_font_size)
    }

    fn line_height(&self, id: StyleId) -> FixedPoint {
        let px = self
            .line_px
            .get(id.0)
            .copied()
            .unwrap_or(LineHeight::NORMAL_FACTOR * self.font_size(id));
        px_to_fixed(px)
    }

    fn length_ctx(&self, id: StyleId) -> LengthContext {
        LengthContext {
            dpi: self.config.dpi,
            font_size: self.font_size(id),
        }
    }

    /// Resolve `length` for the box styled `id`; `%` is of `base`.
    fn resolve(&self, id: StyleId, length: Length, base: FixedPoint) -> FixedPoint {
        length_to_fixed(length, &self.length_ctx(id), base)
    }

    /// Padding, border and the non-auto margins of `id`. Percentages refer
    /// to the containing block's width on all four sides.
    fn edges(&self, id: StyleId, cb_width: FixedPoint) -> (EdgeSizes, EdgeSizes, [Option<FixedPoint>; 4]) {
        let style = self.style(id);
        let edge = |f: &dyn Fn(Side) -> FixedPoint| EdgeSizes {
            top: f(Side::Top),
            right: f(Side::Right),
            bottom: f(Side::Bottom),
            left: f(Side::Left),
        };
        let padding = edge(&|side| self.resolve(id, style.padding(side), cb_width).max(0));
        let border = edge(&|side| self.resolve(id, style.border_width(side), cb_width).max(0));
        let margin = Side::ALL.map(|side| style.margin(side).map(|m| self.resolve(id, m, cb_width)));
        (padding, border, margin)
    }

    fn font(&self, id: StyleId) -> FontDescriptor {
        let style = self.style(id);
        FontDescriptor {
            families: style.font_family().to_vec(),
            size: self.font_size(id),
            weight: style.font_weight(),
            style: style.font_style(),
        }
    }

    fn text_style(&self, id: StyleId) -> TextStyle {
        let style = self.style(id);
        let ctx = self.length_ctx(id);
        TextStyle {
            font: self.font(id),
            white_space: style.white_space(),
            text_transform: style.text_transform(),
            text_align: style.text_align(),
            letter_spacing: style.letter_spacing().to_px(&ctx, 0.0),
            word_spacing: style.word_spacing().to_px(&ctx, 0.0),
        }
    }

    /// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#leading)
    ///
    /// "Half the leading is added above A and the other half below D, giving
    /// the glyphs and their leading a total height above the baseline of
    /// A' = A + L/2 and a total depth of D' = D + L/2."
    fn font_extents(&self, id: StyleId) -> FontExtents {
        let font = self.font(id);
        let content_height = px_to_fixed(self.metrics.line_height(&font));
        let descent = px_to_fixed(self.metrics.descent(&font));
        let content_ascent = content_height - descent;
        let leading = self.line_height(id) - content_height;
        let half = leading / 2;
        FontExtents {
            ascent: content_ascent + half,
            descent: descent + (leading - half),
            content_ascent,
            content_height,
        }
    }

    /// A box carrying the paint data of style `id`.
    fn new_box(&self, kind: BoxKind, node: Option<NodeId>, id: StyleId) -> LayoutBox {
        let style = self.style(id);
        let mut layout_box = LayoutBox::new(kind, node, id);
        layout_box.color = style.color();
        layout_box.background_color = style.background_color();
        layout_box.position = style.position();
        layout_box
    }

    fn push(&mut self, layout_box: LayoutBox, parent: BoxId, slot: Slot) -> BoxId {
        self.tree.push(layout_box, parent, slot)
    }

    /// Move a laid-out subtree along with the floats placed inside it.
    fn shift_subtree(&mut self, id: BoxId, dx: FixedPoint, dy: FixedPoint) {
        if dx == 0 && dy == 0 {
            return;
        }
        if !self.floats.is_empty() {
            let members: HashSet<BoxId> = self.tree.subtree(id).into_iter().collect();
            self.floats.translate_contexts(&members, dx, dy);
        }
        self.tree.translate(id, dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{ "viewport_width": 320 }"#).unwrap_or_default();
        assert!((config.viewport_width - 320.0).abs() < f32::EPSILON);
        assert!((config.viewport_height - 600.0).abs() < f32::EPSILON);
        assert!((config.dpi - 96.0).abs() < f32::EPSILON);
    }
}
