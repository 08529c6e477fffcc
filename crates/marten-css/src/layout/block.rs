//! Block formatting: width solving, vertical stacking, floats and lists.
//!
//! [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
//!
//! "In a block formatting context, boxes are laid out one after the other,
//! vertically, beginning at the top of a containing block."
//!
//! Vertical margins do not collapse; each block's margin box is stacked
//! directly below the previous one.

use core::mem;

use marten_dom::{DomTree, NodeId, NodeType};

use super::box_model::{EdgeSizes, Rect};
use super::box_tree::{BoxId, BoxKind, ListMarker, Slot};
use super::float::FloatSide;
use super::list_marker::list_marker;
use super::units::{FixedPoint, px_to_fixed};
use super::{Containing, LayoutEngine};
use crate::cascade::{StyleId, StyleNode};
use crate::style::{
    Color, Display, Float, Length, LengthUnit, ListStylePosition, Overflow, Position,
};
use crate::text::{LineEnd, Reflow};

/// How a block's width is found when `width` is `auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sizing {
    /// Fill the available width (normal flow).
    Fill,
    /// Shrink to the content's preferred width (floats, inline-blocks).
    ShrinkToFit,
    /// A content width already solved by the caller.
    Exact(FixedPoint),
}

/// Where a block goes and how much room it has.
#[derive(Debug, Clone, Copy)]
pub(super) struct Placement {
    /// Left margin edge.
    pub(super) left: FixedPoint,
    /// Top margin edge.
    pub(super) top: FixedPoint,
    /// Width available to the margin box.
    pub(super) available: FixedPoint,
    pub(super) sizing: Sizing,
    /// A content height imposed by the caller.
    pub(super) height: Option<FixedPoint>,
}

/// A solved horizontal axis plus the vertical edges.
#[derive(Debug, Clone, Copy)]
pub(super) struct Horizontal {
    pub(super) width: FixedPoint,
    pub(super) padding: EdgeSizes,
    pub(super) border: EdgeSizes,
    pub(super) margin: EdgeSizes,
}

impl Horizontal {
    pub(super) const fn outer_width(&self) -> FixedPoint {
        self.width + self.padding.horizontal() + self.border.horizontal() + self.margin.horizontal()
    }
}

/// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
///
/// "'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
/// 'padding-right' + 'border-right-width' + 'margin-right' = width of
/// containing block"
///
/// `extra` is the sum of horizontal padding and border. Returns
/// `(width, margin_left, margin_right)`.
pub(super) fn solve_widths(
    available: FixedPoint,
    extra: FixedPoint,
    width: Option<FixedPoint>,
    margin_left: Option<FixedPoint>,
    margin_right: Option<FixedPoint>,
) -> (FixedPoint, FixedPoint, FixedPoint) {
    let Some(width) = width else {
        // "If 'width' is set to 'auto', any other 'auto' values become '0'
        // and 'width' follows from the resulting equality."
        let left = margin_left.unwrap_or(0);
        let right = margin_right.unwrap_or(0);
        return ((available - extra - left - right).max(0), left, right);
    };
    let rest = available - extra - width;
    match (margin_left, margin_right) {
        // "If all of the above have a computed value other than 'auto', the
        // values are said to be 'over-constrained' and one of the used values
        // will have to be different from its computed value."
        (Some(left), _) => (width, left, rest - left),
        // "If there is exactly one value specified as 'auto', its used value
        // follows from the equality."
        (None, Some(right)) => (width, rest - right, right),
        // "If both 'margin-left' and 'margin-right' are 'auto', their used
        // values are equal. This horizontally centers the element."
        (None, None) if rest < 0 => (width, 0, rest),
        (None, None) => (width, rest / 2, rest - rest / 2),
    }
}

pub(super) fn is_absolute(style: &StyleNode) -> bool {
    matches!(style.position(), Position::Absolute | Position::Fixed)
}

pub(super) fn is_float(style: &StyleNode) -> bool {
    style.float() != Float::None && !is_absolute(style)
}

/// Block-level and in normal flow.
pub(super) fn is_in_flow_block(style: &StyleNode) -> bool {
    matches!(style.display(), Display::Block | Display::ListItem)
        && !is_float(style)
        && !is_absolute(style)
}

/// A non-atomic inline box in normal flow.
pub(super) fn is_inline_box(style: &StyleNode) -> bool {
    style.display() == Display::Inline && !is_float(style) && !is_absolute(style)
}

/// [§ 9.4.1](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
///
/// "Floats, absolutely positioned elements, block containers (such as
/// inline-blocks, table-cells, and table-captions) that are not block boxes,
/// and block boxes with 'overflow' other than 'visible' (except when that
/// value has been propagated to the viewport) establish new block formatting
/// contexts for their contents."
pub(super) fn establishes_context(style: &StyleNode) -> bool {
    style.overflow() != Overflow::Visible
        || is_float(style)
        || is_absolute(style)
        || style.display() == Display::InlineBlock
}

/// First ordinal minus one for the list items directly inside `node`.
/// `start` may be zero or negative.
fn list_start(dom: &DomTree, node: NodeId) -> i32 {
    dom.as_element(node)
        .filter(|element| element.is("ol"))
        .and_then(|element| element.attr("start"))
        .and_then(|start| start.trim().parse::<i32>().ok())
        .map_or(0, |start| start.saturating_sub(1))
}

/// Running totals for the max-content measurement.
#[derive(Debug, Default)]
struct Intrinsic {
    widest: FixedPoint,
    line: FixedPoint,
    pending_space: bool,
}

impl Intrinsic {
    fn break_line(&mut self) {
        self.widest = self.widest.max(self.line);
        self.line = 0;
        self.pending_space = false;
    }
}

impl LayoutEngine<'_> {
    /// Lay out the block `id`, already in the tree, and its contents.
    /// Returns the height of its margin box.
    pub(super) fn layout_block(&mut self, id: BoxId, cb: Containing, place: Placement) -> FixedPoint {
        let (style_id, node) = {
            let b = self.tree.get(id);
            (b.style, b.node)
        };
        let style = self.style(style_id);

        // STEP 1: Solve the horizontal axis.
        let h = self.solve_horizontal(style_id, node, cb.width, place.available, place.sizing);
        let content_x = place.left + h.margin.left + h.border.left + h.padding.left;
        let content_y = place.top + h.margin.top + h.border.top + h.padding.top;
        {
            let dims = &mut self.tree.get_mut(id).dimensions;
            dims.content = Rect::new(content_x, content_y, h.width, 0);
            dims.padding = h.padding;
            dims.border = h.border;
            dims.margin = h.margin;
        }

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] {} {:?} x={content_x} y={content_y} w={} sizing={:?}",
            self.tree.get(id).kind.name(),
            node,
            h.width,
            place.sizing
        );

        // STEP 2: The list marker, before the content it sits beside.
        let indent = self.place_marker(id);

        // STEP 3: Lay out the children against the new content box.
        let explicit_height = place.height.or_else(|| {
            style
                .height()
                .and_then(|height| self.resolve_height(style_id, height, cb.height))
        });
        let child_cb = Containing {
            width: h.width,
            height: explicit_height,
            context: if establishes_context(style) {
                id
            } else {
                cb.context
            },
            positioned: if style.position() == Position::Static {
                cb.positioned
            } else {
                id
            },
        };
        let content_height = node.map_or(0, |node| self.layout_children(id, node, child_cb, indent));

        // STEP 4: Height.
        // [§ 10.6.3 Block-level non-replaced elements in normal flow when
        // 'overflow' computes to 'visible'](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
        //
        // "If 'height' is 'auto', the height depends on whether the element
        // has any block-level children and whether it has padding or borders."
        let mut height = explicit_height.unwrap_or(content_height);
        if explicit_height.is_none() && child_cb.context == id {
            // [§ 10.6.7] "In addition, if the element has any floating
            // descendants whose bottom margin edge is below the element's
            // bottom content edge, then the height is increased to include
            // those edges."
            if let Some(bottom) = self.floats.bottom(id) {
                height = height.max(bottom - content_y);
            }
        }
        if let Some(max) = style
            .max_height()
            .and_then(|max| self.resolve_height(style_id, max, cb.height))
        {
            height = height.min(max);
        }
        if let Some(min) = self.resolve_height(style_id, style.min_height(), cb.height) {
            height = height.max(min);
        }
        let height = height.max(0);
        self.tree.get_mut(id).dimensions.content.height = height;

        // STEP 5: Absolutely positioned descendants now that this box,
        // their containing block, has its final size.
        if child_cb.positioned == id {
            self.layout_absolutes(id);
        }

        // STEP 6: Relative offset, which never affects the flow.
        if style.position() == Position::Relative {
            let (dx, dy) = self.relative_offset(style_id, cb);
            self.shift_subtree(id, dx, dy);
        }

        height + h.padding.vertical() + h.border.vertical() + h.margin.vertical()
    }

    /// A percentage height against an indefinite containing block is `auto`.
    fn resolve_height(
        &self,
        id: StyleId,
        length: Length,
        base: Option<FixedPoint>,
    ) -> Option<FixedPoint> {
        match (length.unit, base) {
            (LengthUnit::Percent, None) => None,
            (_, base) => Some(self.resolve(id, length, base.unwrap_or(0)).max(0)),
        }
    }

    /// [§ 10.4 Minimum and maximum widths](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
    ///
    /// "If the tentative used width is greater than 'max-width', the rules
    /// above are applied again, but this time using the computed value of
    /// 'max-width' as the computed value for 'width'."
    pub(super) fn clamp_width(&self, id: StyleId, cb_width: FixedPoint, width: FixedPoint) -> FixedPoint {
        let style = self.style(id);
        let min = self.resolve(id, style.min_width(), cb_width).max(0);
        let max = style.max_width().map(|max| self.resolve(id, max, cb_width));
        max.map_or(width, |max| width.min(max)).max(min)
    }

    /// Solve width and margins for style `id` with `available` room for the
    /// margin box.
    pub(super) fn solve_horizontal(
        &self,
        id: StyleId,
        node: Option<NodeId>,
        cb_width: FixedPoint,
        available: FixedPoint,
        sizing: Sizing,
    ) -> Horizontal {
        let style = self.style(id);
        let (padding, border, [top, right, bottom, left]) = self.edges(id, cb_width);
        let extra = padding.horizontal() + border.horizontal();
        let specified = style
            .width()
            .map(|width| self.resolve(id, width, cb_width).max(0));

        let clamp = |width: FixedPoint| self.clamp_width(id, cb_width, width);

        let (width, margin_left, margin_right) = match sizing {
            Sizing::Fill => {
                let (width, l, r) = solve_widths(available, extra, specified, left, right);
                let clamped = clamp(width);
                if clamped == width {
                    (width, l, r)
                } else {
                    solve_widths(available, extra, Some(clamped), left, right)
                }
            }
            // [§ 10.3.5 Floating, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#float-width)
            //
            // "If 'margin-left', or 'margin-right' are computed as 'auto',
            // their used value is '0'. If 'width' is computed as 'auto', the
            // used value is the 'shrink-to-fit' width."
            Sizing::ShrinkToFit => {
                let l = left.unwrap_or(0);
                let r = right.unwrap_or(0);
                let width = specified.unwrap_or_else(|| {
                    let fit = (available - extra - l - r).max(0);
                    node.map_or(0, |node| self.max_content_width(node)).min(fit)
                });
                (clamp(width), l, r)
            }
            Sizing::Exact(width) => (width, left.unwrap_or(0), right.unwrap_or(0)),
        };

        Horizontal {
            width,
            padding,
            border,
            margin: EdgeSizes {
                top: top.unwrap_or(0),
                right: margin_right,
                bottom: bottom.unwrap_or(0),
                left: margin_left,
            },
        }
    }

    /// Lay out the children of `node` inside box `id`. Returns the height
    /// they occupy below the content top.
    ///
    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// "If a block container box has a block-level box inside it, then we
    /// force it to have only block-level boxes inside it." Runs of inline
    /// content between block children are wrapped in anonymous blocks.
    pub(super) fn layout_children(
        &mut self,
        id: BoxId,
        node: NodeId,
        cb: Containing,
        first_line_indent: FixedPoint,
    ) -> FixedPoint {
        let content = self.tree.get(id).dimensions.content;
        let items = self.flow_items(node);

        if !items.iter().any(|&item| self.is_in_flow_block_node(item)) {
            return self.layout_inline(id, &items, cb, first_line_indent);
        }

        let mut cursor = content.y;
        let mut run: Vec<NodeId> = Vec::new();
        let mut indent = first_line_indent;
        let mut ordinal = list_start(self.dom, node);

        for item in items {
            let Some(style_id) = self.styles.style_for(item) else {
                continue;
            };
            let style = self.style(style_id);

            if !self.is_in_flow_block_node(item) {
                if run.is_empty() && is_float(style) {
                    self.layout_float(item, style_id, id, cb, cursor, (content.x, content.right()));
                } else if run.is_empty() && is_absolute(style) {
                    self.register_absolute(item, style_id, cb, (content.x, cursor));
                } else {
                    run.push(item);
                }
                continue;
            }

            cursor += self.flush_inline_run(id, &mut run, cb, cursor, &mut indent);

            // [§ 9.5.2] "the top border edge of the box be below the bottom
            // outer edge of any left-floating boxes that resulted from
            // elements earlier in the source document."
            cursor = self.floats.clear(cb.context, style.clear(), cursor);

            let kind = if style.display() == Display::ListItem {
                ordinal = ordinal.saturating_add(1);
                BoxKind::ListItem {
                    marker: None,
                    ordinal,
                }
            } else {
                BoxKind::Block
            };
            let child_box = self.new_box(kind, Some(item), style_id);
            let child = self.push(child_box, id, Slot::Child);

            // [§ 9.5] "The border box of a table, a block-level replaced
            // element, or an element in the normal flow that establishes a
            // new block formatting context ... must not overlap the margin
            // box of any floats in the same block formatting context as the
            // element itself."
            let (left, right) = if establishes_context(style) {
                self.floats
                    .band(cb.context, cursor, 1, content.x, content.right())
            } else {
                (content.x, content.right())
            };
            cursor += self.layout_block(
                child,
                cb,
                Placement {
                    left,
                    top: cursor,
                    available: right - left,
                    sizing: Sizing::Fill,
                    height: None,
                },
            );
        }

        cursor += self.flush_inline_run(id, &mut run, cb, cursor, &mut indent);
        cursor - content.y
    }

    /// Wrap a pending run of inline content in an anonymous block at `top`.
    fn flush_inline_run(
        &mut self,
        id: BoxId,
        run: &mut Vec<NodeId>,
        cb: Containing,
        top: FixedPoint,
        indent: &mut FixedPoint,
    ) -> FixedPoint {
        let items = mem::take(run);
        if items.iter().all(|&item| self.is_collapsible_space(item)) {
            return 0;
        }
        let (style, content) = {
            let b = self.tree.get(id);
            (b.style, b.dimensions.content)
        };
        let mut anonymous = self.new_box(BoxKind::AnonymousBlock, None, style);
        anonymous.background_color = Color::TRANSPARENT;
        anonymous.position = Position::Static;
        anonymous.dimensions.content = Rect::new(content.x, top, content.width, 0);
        let anonymous = self.push(anonymous, id, Slot::Child);

        let height = self.layout_inline(anonymous, &items, cb, mem::take(indent));
        self.tree.get_mut(anonymous).dimensions.content.height = height;
        height
    }

    /// White space that collapses away entirely between blocks.
    fn is_collapsible_space(&self, node: NodeId) -> bool {
        let Some(text) = self.dom.as_text(node) else {
            return false;
        };
        let collapses = self
            .styles
            .node_style(node)
            .is_none_or(|style| style.white_space().collapses_spaces());
        collapses && text.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{c}'))
    }

    fn is_in_flow_block_node(&self, node: NodeId) -> bool {
        self.dom.as_element(node).is_some()
            && self.styles.node_style(node).is_some_and(is_in_flow_block)
    }

    /// Children of `node` that take part in its flow. Inline elements that
    /// contain blocks are dissolved into their children, so the blocks end up
    /// as siblings of the surrounding inline content.
    fn flow_items(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_flow_items(node, &mut out);
        out
    }

    fn collect_flow_items(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.dom.children(node) {
            let Some(style) = self.styles.node_style(child) else {
                continue;
            };
            match self.dom.get(child).map(|n| &n.node_type) {
                Some(NodeType::Text(_)) => out.push(child),
                Some(NodeType::Element(_)) => {
                    if style.display() == Display::None {
                        continue;
                    }
                    if is_inline_box(style) && self.contains_block(child) {
                        self.collect_flow_items(child, out);
                    } else {
                        out.push(child);
                    }
                }
                _ => {}
            }
        }
    }

    fn contains_block(&self, node: NodeId) -> bool {
        self.dom.children(node).iter().any(|&child| {
            self.dom.as_element(child).is_some()
                && self.styles.node_style(child).is_some_and(|style| {
                    is_in_flow_block(style) || (is_inline_box(style) && self.contains_block(child))
                })
        })
    }

    /// [§ 9.5.1 Positioning the float](https://www.w3.org/TR/CSS2/visuren.html#float-position)
    ///
    /// Lay out a float of `container` at or below `y` between the content
    /// edges `left..right`, then move it into its band.
    pub(super) fn layout_float(
        &mut self,
        node: NodeId,
        style_id: StyleId,
        container: BoxId,
        cb: Containing,
        y: FixedPoint,
        (left, right): (FixedPoint, FixedPoint),
    ) {
        let style = self.style(style_id);
        let side = FloatSide::from_float(style.float()).unwrap_or(FloatSide::Left);
        let y = self.floats.clear(cb.context, style.clear(), y);
        let (band_left, _) = self.floats.band(cb.context, y, 1, left, right);

        let float_box = self.new_box(BoxKind::Block, Some(node), style_id);
        let id = self.push(float_box, container, Slot::Float);
        let height = self.layout_block(
            id,
            cb,
            Placement {
                left: band_left,
                top: y,
                available: right - left,
                sizing: Sizing::ShrinkToFit,
                height: None,
            },
        );
        let width = self.tree.get(id).dimensions.margin_box().width;
        let placed = self
            .floats
            .place(id, cb.context, side, (width, height), y, left, right);

        #[cfg(feature = "layout-trace")]
        eprintln!("[LAYOUT] float {node:?} {side:?} placed at {placed:?}");

        self.shift_subtree(id, placed.x - band_left, placed.y - y);
    }

    /// [§ 12.5.1 Lists](https://www.w3.org/TR/CSS2/generate.html#lists)
    ///
    /// Attach the marker of list item `id`. Returns the indent an `inside`
    /// marker takes from the first line.
    fn place_marker(&mut self, id: BoxId) -> FixedPoint {
        let b = self.tree.get(id);
        let BoxKind::ListItem { ordinal, .. } = &b.kind else {
            return 0;
        };
        let style_id = b.style;
        let content = b.dimensions.content;
        let style = self.style(style_id);

        let text = list_marker(style.list_style_type(), *ordinal);
        if text.is_empty() {
            return 0;
        }
        let font = self.font(style_id);
        let width = px_to_fixed(self.metrics.measure(&font, &text).0);
        let space = px_to_fixed(self.metrics.char_advance(&font, ' '));
        let position = style.list_style_position();
        let (x, indent) = match position {
            ListStylePosition::Outside => (content.x - width - space, 0),
            ListStylePosition::Inside => (content.x, width + space),
        };
        let marker = ListMarker {
            text,
            position,
            rect: Rect::new(x, content.y, width, self.line_height(style_id)),
        };
        if let BoxKind::ListItem { marker: slot, .. } = &mut self.tree.get_mut(id).kind {
            *slot = Some(marker);
        }
        indent
    }

    /// [§ 10.3.5](https://www.w3.org/TR/CSS2/visudet.html#float-width)
    ///
    /// "Roughly: calculate the preferred width by formatting the content
    /// without breaking lines other than where explicit line breaks occur."
    ///
    /// The content width `node` would take with unlimited room.
    pub(super) fn max_content_width(&self, node: NodeId) -> FixedPoint {
        let mut acc = Intrinsic::default();
        self.measure_children(node, &mut acc);
        acc.break_line();
        acc.widest
    }

    fn measure_children(&self, node: NodeId, acc: &mut Intrinsic) {
        for &child in self.dom.children(node) {
            let Some(style_id) = self.styles.style_for(child) else {
                continue;
            };
            let style = self.style(style_id);
            match self.dom.get(child).map(|n| &n.node_type) {
                Some(NodeType::Text(text)) => self.measure_text(text, style_id, acc),
                Some(NodeType::Element(element)) => {
                    if style.display() == Display::None || is_absolute(style) {
                        continue;
                    }
                    if element.is("br") {
                        acc.break_line();
                    } else if is_in_flow_block(style) {
                        acc.break_line();
                        acc.widest = acc.widest.max(self.outer_max_content(child, style_id));
                    } else if is_inline_box(style) {
                        let (padding, border, [_, right, _, left]) = self.edges(style_id, 0);
                        acc.line += padding.left + border.left + left.unwrap_or(0);
                        self.measure_children(child, acc);
                        acc.line += padding.right + border.right + right.unwrap_or(0);
                    } else {
                        acc.line += self.outer_max_content(child, style_id);
                        acc.pending_space = false;
                    }
                }
                _ => {}
            }
        }
    }

    fn measure_text(&self, text: &str, style_id: StyleId, acc: &mut Intrinsic) {
        let text_style = self.text_style(style_id);
        let mut reflow =
            Reflow::new(text, &text_style, self.metrics).with_leading_space(acc.pending_space);
        while let Some(line) = reflow.next_line(f32::INFINITY, acc.line == 0) {
            acc.line += px_to_fixed(line.width());
            if line.end == LineEnd::Break {
                acc.break_line();
            }
        }
        acc.pending_space = reflow.ends_with_space();
    }

    /// Preferred margin-box width of an atomic box. Percentages have no base
    /// here and count as zero.
    fn outer_max_content(&self, node: NodeId, style_id: StyleId) -> FixedPoint {
        let style = self.style(style_id);
        let (padding, border, [_, right, _, left]) = self.edges(style_id, 0);
        let definite = |length: Length| length.unit != LengthUnit::Percent;
        let mut width = style
            .width()
            .filter(|&width| definite(width))
            .map_or_else(|| self.max_content_width(node), |width| self.resolve(style_id, width, 0));
        if let Some(max) = style.max_width().filter(|&max| definite(max)) {
            width = width.min(self.resolve(style_id, max, 0));
        }
        width = width.max(self.resolve(style_id, style.min_width(), 0)).max(0);
        width
            + padding.horizontal()
            + border.horizontal()
            + right.unwrap_or(0)
            + left.unwrap_or(0)
    }
}
