//! CSS Positioned Layout.
//!
//! [§ 9.3 Positioning schemes](https://www.w3.org/TR/CSS2/visuren.html#positioning-scheme)
//!
//! "In CSS 2, a box may be laid out according to three positioning schemes:
//!
//! 1. Normal flow. In CSS 2, normal flow includes block formatting of block-level
//!    boxes, inline formatting of inline-level boxes, and relative positioning of
//!    block-level and inline-level boxes.
//!
//! 2. Floats. In the float model, a box is first laid out according to the normal
//!    flow, then taken out of the flow and shifted to the left or right as far as
//!    possible.
//!
//! 3. Absolute positioning. In the absolute positioning model, a box is removed
//!    from the normal flow entirely and assigned a position with respect to a
//!    containing block."
//!
//! Absolutely positioned boxes are recorded where they are met, with their
//! static position, and laid out once their containing block has its final
//! size: at the end of the positioned ancestor's own layout, or after the
//! whole flow for boxes hanging off the root.

use marten_dom::NodeId;

use super::block::{Placement, Sizing};
use super::box_model::Rect;
use super::box_tree::{BoxId, BoxKind, Slot};
use super::units::FixedPoint;
use super::{Containing, LayoutEngine};
use crate::cascade::StyleId;
use crate::style::{LengthUnit, Position, Side};

/// [§ 9.3.2 Box offsets: 'top', 'right', 'bottom', 'left'](https://www.w3.org/TR/CSS2/visuren.html#position-props)
///
/// "An element is said to be positioned if its 'position' property has
/// a value other than 'static'. Positioned elements generate positioned
/// boxes, laid out according to four properties: top, right, bottom, left."
///
/// `None` is `auto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BoxOffsets {
    top: Option<FixedPoint>,
    right: Option<FixedPoint>,
    bottom: Option<FixedPoint>,
    left: Option<FixedPoint>,
}

impl BoxOffsets {
    /// [§ 9.4.3 Relative positioning](https://www.w3.org/TR/CSS2/visuren.html#relative-positioning)
    ///
    /// "Once a box has been laid out according to the normal flow, it may be
    /// shifted relative to its normal position."
    const fn relative_shift(&self) -> (FixedPoint, FixedPoint) {
        // "If both 'left' and 'right' are 'auto', the used values are both 0.
        //  If 'left' is 'auto', its used value is minus the value of 'right'.
        //  If neither is 'auto', 'left' wins and 'right' becomes -'left'."
        let dx = match (self.left, self.right) {
            (Some(left), _) => left,
            (None, Some(right)) => -right,
            (None, None) => 0,
        };
        // "If neither is 'auto', 'bottom' is ignored."
        let dy = match (self.top, self.bottom) {
            (Some(top), _) => top,
            (None, Some(bottom)) => -bottom,
            (None, None) => 0,
        };
        (dx, dy)
    }
}

impl LayoutEngine<'_> {
    /// The four offsets of style `id`. Horizontal percentages refer to
    /// `width`; vertical ones to `height`, and are `auto` without it.
    fn offsets(&self, id: StyleId, width: FixedPoint, height: Option<FixedPoint>) -> BoxOffsets {
        let style = self.style(id);
        let horizontal = |side| style.offset(side).map(|l| self.resolve(id, l, width));
        let vertical = |side| {
            style.offset(side).and_then(|l| match (l.unit, height) {
                (LengthUnit::Percent, None) => None,
                (_, base) => Some(self.resolve(id, l, base.unwrap_or(0))),
            })
        };
        BoxOffsets {
            top: vertical(Side::Top),
            right: horizontal(Side::Right),
            bottom: vertical(Side::Bottom),
            left: horizontal(Side::Left),
        }
    }

    /// Shift of a `position: relative` box against its containing block.
    pub(super) fn relative_offset(&self, id: StyleId, cb: Containing) -> (FixedPoint, FixedPoint) {
        self.offsets(id, cb.width, cb.height).relative_shift()
    }

    /// [§ 10.1 Definition of "containing block"](https://www.w3.org/TR/CSS2/visudet.html#containing-block-details)
    ///
    /// "If the element has 'position: fixed', the containing block is
    /// established by the viewport." "If the element has 'position:
    /// absolute', the containing block is established by the nearest
    /// ancestor with a 'position' of 'absolute', 'relative' or 'fixed'."
    ///
    /// Record an out-of-flow box met in the flow at `static_position`.
    pub(super) fn register_absolute(
        &mut self,
        node: NodeId,
        style_id: StyleId,
        cb: Containing,
        static_position: (FixedPoint, FixedPoint),
    ) {
        let fixed = self.style(style_id).position() == Position::Fixed;
        let mut layout_box = self.new_box(BoxKind::Absolute, Some(node), style_id);
        layout_box.dimensions.content.x = static_position.0;
        layout_box.dimensions.content.y = static_position.1;
        let _ = if fixed {
            let root = self.tree.root();
            self.push(layout_box, root, Slot::Fixed)
        } else {
            self.push(layout_box, cb.positioned, Slot::Absolute)
        };
    }

    /// Lay out every absolutely positioned box whose containing block is
    /// `id`, against its content rect.
    pub(super) fn layout_absolutes(&mut self, id: BoxId) {
        let containing = self.tree.get(id).dimensions.content;
        let mut next = 0;
        while let Some(&child) = self.tree.get(id).absolutes.get(next) {
            self.layout_absolute(child, containing);
            next += 1;
        }
    }

    /// [§ 9.6.1 Fixed positioning](https://www.w3.org/TR/CSS2/visuren.html#fixed-positioning)
    ///
    /// "Fixed positioning is a subcategory of absolute positioning. The only
    /// difference is that for a fixed positioned box, the containing block is
    /// established by the viewport."
    pub(super) fn layout_fixed(&mut self) {
        let root = self.tree.root();
        let viewport = self.tree.get(root).dimensions.content;
        let mut next = 0;
        loop {
            let child = match &self.tree.get(root).kind {
                BoxKind::Root { fixed } => fixed.get(next).copied(),
                _ => None,
            };
            let Some(child) = child else {
                break;
            };
            self.layout_absolute(child, viewport);
            next += 1;
        }
    }

    /// [§ 10.3.7 Absolutely positioned, non-replaced elements](https://www.w3.org/TR/CSS2/visudet.html#abs-non-replaced-width)
    ///
    /// "'left' + 'margin-left' + 'border-left-width' + 'padding-left' +
    /// 'width' + 'padding-right' + 'border-right-width' + 'margin-right' +
    /// 'right' = width of containing block"
    fn layout_absolute(&mut self, id: BoxId, containing: Rect) {
        let (style_id, node, static_x, static_y) = {
            let b = self.tree.get(id);
            (b.style, b.node, b.dimensions.content.x, b.dimensions.content.y)
        };
        let style = self.style(style_id);
        let offsets = self.offsets(style_id, containing.width, Some(containing.height));
        let (padding, border, [top, right, bottom, left]) = self.edges(style_id, containing.width);
        let margin_h = left.unwrap_or(0) + right.unwrap_or(0);
        let margin_v = top.unwrap_or(0) + bottom.unwrap_or(0);
        let extra = padding.horizontal() + border.horizontal() + margin_h;

        // STEP 1: Width. Explicit wins; both insets stretch; otherwise
        // "the used value is the shrink-to-fit width".
        let width = match (style.width(), offsets.left, offsets.right) {
            (Some(width), _, _) => self.resolve(style_id, width, containing.width).max(0),
            (None, Some(l), Some(r)) => (containing.width - l - r - extra).max(0),
            (None, l, r) => {
                let fit = (containing.width - l.or(r).unwrap_or(0) - extra).max(0);
                node.map_or(0, |node| self.max_content_width(node)).min(fit)
            }
        };
        let width = self.clamp_width(style_id, containing.width, width);
        let outer = width + extra;

        // STEP 2: Horizontal position of the margin box.
        let x = match (offsets.left, offsets.right) {
            (Some(l), _) => containing.x + l,
            (None, Some(r)) => containing.right() - r - outer,
            (None, None) => static_x,
        };

        // STEP 3: Vertical. [§ 10.6.4] With 'top' and 'bottom' set and
        // 'height' auto, the height follows from the constraint.
        let y = offsets.top.map_or(static_y, |t| containing.y + t);
        let stretched = match (style.height(), offsets.top, offsets.bottom) {
            (None, Some(t), Some(b)) => Some(
                (containing.height - t - b - padding.vertical() - border.vertical() - margin_v)
                    .max(0),
            ),
            _ => None,
        };
        let cb = Containing {
            width: containing.width,
            height: Some(containing.height),
            context: id,
            positioned: id,
        };
        let height = self.layout_block(
            id,
            cb,
            Placement {
                left: x,
                top: y,
                available: outer,
                sizing: Sizing::Exact(width),
                height: stretched,
            },
        );

        // STEP 4: "If 'top' is 'auto' ... solve for 'top'."
        if offsets.top.is_none() {
            if let Some(b) = offsets.bottom {
                let target = containing.bottom() - b - height;
                self.shift_subtree(id, 0, target - y);
            }
        }

        #[cfg(feature = "layout-trace")]
        eprintln!(
            "[LAYOUT] absolute {node:?} in {containing:?}: {:?}",
            self.tree.get(id).dimensions.content
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_left_wins_over_right() {
        let offsets = BoxOffsets {
            left: Some(10),
            right: Some(99),
            ..BoxOffsets::default()
        };
        assert_eq!(offsets.relative_shift(), (10, 0));
    }

    #[test]
    fn test_relative_right_and_bottom_move_back() {
        let offsets = BoxOffsets {
            right: Some(5),
            bottom: Some(7),
            ..BoxOffsets::default()
        };
        assert_eq!(offsets.relative_shift(), (-5, -7));
    }
}
