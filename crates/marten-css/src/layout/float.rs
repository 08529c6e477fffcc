//! CSS Float Layout.
//!
//! [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats)
//!
//! "A float is a box that is shifted to the left or right on the current line.
//! The most interesting characteristic of a float is that content may flow along
//! its side (or be prohibited from doing so by the 'clear' property)."
//!
//! All floats of a layout pass live in one [`FloatList`] in document
//! coordinates. Each entry is tagged with the box that established its block
//! formatting context, and every query names the context it is asking about,
//! so the contents of a float or inline-block never see the floats outside it.

use std::collections::HashSet;

use serde::Serialize;

use super::box_model::Rect;
use super::box_tree::BoxId;
use super::units::FixedPoint;
use crate::style::{Clear, Float};

/// [§ 9.5.1 Positioning the float](https://www.w3.org/TR/CSS2/visuren.html#float-position)
///
/// "left: The element generates a block box that is floated to the left.
/// right: The element generates a block box that is floated to the right."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FloatSide {
    /// Floated to the left edge.
    Left,
    /// Floated to the right edge.
    Right,
}

impl FloatSide {
    /// The side a `float` value selects, if any.
    #[must_use]
    pub const fn from_float(float: Float) -> Option<Self> {
        match float {
            Float::Left => Some(Self::Left),
            Float::Right => Some(Self::Right),
            Float::None => None,
        }
    }
}

/// A float that has been placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedFloat {
    /// The float's box.
    pub id: BoxId,
    /// The box that established the block formatting context it sits in.
    pub context: BoxId,
    /// Which edge it is floated to.
    pub side: FloatSide,
    /// Its margin box.
    pub margin_box: Rect,
}

/// Every float placed during one layout pass.
///
/// [§ 9.5 Floats](https://www.w3.org/TR/CSS2/visuren.html#floats)
///
/// "The current and subsequent line boxes created next to the float are
/// shortened as necessary to make room for the margin box of the float."
#[derive(Debug, Clone, Default, Serialize)]
pub struct FloatList {
    entries: Vec<PlacedFloat>,
}

impl FloatList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether no float has been placed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All placed floats, in placement order.
    #[must_use]
    pub fn entries(&self) -> &[PlacedFloat] {
        &self.entries
    }

    fn in_context(&self, context: BoxId) -> impl Iterator<Item = &PlacedFloat> {
        self.entries.iter().filter(move |f| f.context == context)
    }

    /// The horizontal band left free by the floats of `context` for content
    /// spanning `[y, y + height)` between `left` and `right`.
    ///
    /// Returns `(left_edge, right_edge)`; the band may be empty but never
    /// inverted.
    #[must_use]
    pub fn band(
        &self,
        context: BoxId,
        y: FixedPoint,
        height: FixedPoint,
        left: FixedPoint,
        right: FixedPoint,
    ) -> (FixedPoint, FixedPoint) {
        let height = height.max(1);
        let mut left_edge = left;
        let mut right_edge = right;
        for f in self.in_context(context) {
            if !f.margin_box.overlaps_band(y, height) {
                continue;
            }
            match f.side {
                FloatSide::Left => left_edge = left_edge.max(f.margin_box.right()),
                FloatSide::Right => right_edge = right_edge.min(f.margin_box.x),
            }
        }
        (left_edge, right_edge.max(left_edge))
    }

    /// Whether any float of `context` intrudes on `[left, right)` at `y`.
    #[must_use]
    pub fn is_narrowed(
        &self,
        context: BoxId,
        y: FixedPoint,
        height: FixedPoint,
        left: FixedPoint,
        right: FixedPoint,
    ) -> bool {
        self.band(context, y, height, left, right) != (left, right)
    }

    /// [§ 9.5.1 Positioning the float](https://www.w3.org/TR/CSS2/visuren.html#float-position)
    ///
    /// Place a float with the given margin-box size no higher than `y`.
    ///
    /// "A floating box must be placed as high as possible." Scans downward
    /// from `y`, one float bottom at a time, to the first band wide enough,
    /// then aligns to that band's left or right edge. If no band is ever wide
    /// enough, the float goes below every other float and overflows.
    #[allow(clippy::too_many_arguments)]
    pub fn place(
        &mut self,
        id: BoxId,
        context: BoxId,
        side: FloatSide,
        size: (FixedPoint, FixedPoint),
        y: FixedPoint,
        left: FixedPoint,
        right: FixedPoint,
    ) -> Rect {
        let (width, height) = size;
        let mut y = y;

        // STEP 1: Find the highest band that fits.
        loop {
            let (band_left, band_right) = self.band(context, y, height, left, right);
            let fits = band_right - band_left >= width;
            let next = self.next_bottom_after(context, y);
            if fits || next.is_none() {
                // STEP 2: Align to the band edge.
                // "A left-floating box must be put as far to the left as
                // possible, a right-floating box as far to the right as possible."
                let x = match side {
                    FloatSide::Left => band_left,
                    FloatSide::Right => (band_right - width).max(band_left),
                };
                let margin_box = Rect::new(x, y, width, height);
                self.entries.push(PlacedFloat {
                    id,
                    context,
                    side,
                    margin_box,
                });
                return margin_box;
            }
            if let Some(next) = next {
                y = next;
            }
        }
    }

    /// [§ 9.5.2 Controlling flow next to floats](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
    ///
    /// "This property indicates which sides of an element's box(es) may not
    /// be adjacent to an earlier floating box."
    ///
    /// The y at which a box with `clear` may start, at or below `y`.
    #[must_use]
    pub fn clear(&self, context: BoxId, clear: Clear, y: FixedPoint) -> FixedPoint {
        let clears = |side: FloatSide| match clear {
            Clear::None => false,
            Clear::Left => side == FloatSide::Left,
            Clear::Right => side == FloatSide::Right,
            Clear::Both => true,
        };
        self.in_context(context)
            .filter(|f| clears(f.side))
            .map(|f| f.margin_box.bottom())
            .fold(y, FixedPoint::max)
    }

    /// [§ 10.6.7 'Auto' heights for block formatting context roots](https://www.w3.org/TR/CSS2/visudet.html#root-height)
    ///
    /// The lowest margin-box bottom among the floats of `context`.
    #[must_use]
    pub fn bottom(&self, context: BoxId) -> Option<FixedPoint> {
        self.in_context(context).map(|f| f.margin_box.bottom()).max()
    }

    /// Move the floats of every context in `contexts`; used when a laid-out
    /// subtree is moved after the fact.
    pub(crate) fn translate_contexts(
        &mut self,
        contexts: &HashSet<BoxId>,
        dx: FixedPoint,
        dy: FixedPoint,
    ) {
        for f in self.entries.iter_mut().filter(|f| contexts.contains(&f.context)) {
            f.margin_box.x += dx;
            f.margin_box.y += dy;
        }
    }

    /// The smallest float bottom in `context` strictly below `y`.
    #[must_use]
    pub fn next_bottom_after(&self, context: BoxId, y: FixedPoint) -> Option<FixedPoint> {
        self.in_context(context)
            .map(|f| f.margin_box.bottom())
            .filter(|&bottom| bottom > y)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: BoxId = BoxId(0);

    #[test]
    fn test_band_only_narrowed_where_float_is() {
        let mut floats = FloatList::new();
        let rect = floats.place(BoxId(1), CTX, FloatSide::Left, (100, 50), 10, 0, 400);
        assert_eq!(rect, Rect::new(0, 10, 100, 50));
        assert_eq!(floats.band(CTX, 0, 10, 0, 400), (0, 400));
        assert_eq!(floats.band(CTX, 20, 10, 0, 400), (100, 400));
        assert_eq!(floats.band(CTX, 60, 10, 0, 400), (0, 400));
        assert_eq!(floats.band(BoxId(9), 20, 10, 0, 400), (0, 400));
    }

    #[test]
    fn test_float_drops_below_when_band_too_narrow() {
        let mut floats = FloatList::new();
        let _ = floats.place(BoxId(1), CTX, FloatSide::Left, (300, 50), 0, 0, 400);
        let rect = floats.place(BoxId(2), CTX, FloatSide::Right, (200, 20), 0, 0, 400);
        assert_eq!(rect, Rect::new(200, 50, 200, 20));
    }

    #[test]
    fn test_clear() {
        let mut floats = FloatList::new();
        let _ = floats.place(BoxId(1), CTX, FloatSide::Left, (10, 30), 0, 0, 400);
        let _ = floats.place(BoxId(2), CTX, FloatSide::Right, (10, 80), 0, 0, 400);
        assert_eq!(floats.clear(CTX, Clear::Left, 5), 30);
        assert_eq!(floats.clear(CTX, Clear::Both, 5), 80);
        assert_eq!(floats.clear(CTX, Clear::None, 5), 5);
        assert_eq!(floats.bottom(CTX), Some(80));
    }
}
