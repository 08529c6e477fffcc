//! CSS Box Model types in fixed-point units.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use serde::Serialize;

use super::units::FixedPoint;

/// [§ 3. The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Dimensions {
    /// Content area, in document coordinates.
    pub content: Rect,
    /// Padding widths around the content.
    pub padding: EdgeSizes,
    /// Border widths around the padding.
    pub border: EdgeSizes,
    /// Margin widths around the border.
    pub margin: EdgeSizes,
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    /// Left edge.
    pub x: FixedPoint,
    /// Top edge.
    pub y: FixedPoint,
    /// Width.
    pub width: FixedPoint,
    /// Height.
    pub height: FixedPoint,
}

impl Rect {
    /// A rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: FixedPoint, y: FixedPoint, width: FixedPoint, height: FixedPoint) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> FixedPoint {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> FixedPoint {
        self.y + self.height
    }

    /// Whether the vertical extents of `self` and `[y, y + height)` overlap.
    #[must_use]
    pub const fn overlaps_band(&self, y: FixedPoint, height: FixedPoint) -> bool {
        self.y < y + height && self.bottom() > y
    }

    /// Grow outward by `edges`.
    #[must_use]
    pub const fn expanded_by(&self, edges: EdgeSizes) -> Self {
        Self {
            x: self.x - edges.left,
            y: self.y - edges.top,
            width: self.width + edges.horizontal(),
            height: self.height + edges.vertical(),
        }
    }
}

/// Edge sizes for padding, border, or margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: FixedPoint,
    /// Right edge size.
    pub right: FixedPoint,
    /// Bottom edge size.
    pub bottom: FixedPoint,
    /// Left edge size.
    pub left: FixedPoint,
}

impl EdgeSizes {
    /// Left plus right.
    #[must_use]
    pub const fn horizontal(&self) -> FixedPoint {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub const fn vertical(&self) -> FixedPoint {
        self.top + self.bottom
    }
}

impl Dimensions {
    // [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
    //
    // ┌─────────────────────────────────────────┐
    // │              margin                     │
    // │   ┌─────────────────────────────────┐   │
    // │   │          border                 │   │
    // │   │   ┌─────────────────────────┐   │   │
    // │   │   │      padding            │   │   │
    // │   │   │   ┌─────────────────┐   │   │   │
    // │   │   │   │     CONTENT     │   │   │   │
    // │   │   │   └─────────────────┘   │   │   │
    // │   │   └─────────────────────────┘   │   │
    // │   └─────────────────────────────────┘   │
    // └─────────────────────────────────────────┘

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    ///
    /// "The padding box contains both the content and padding areas."
    #[must_use]
    pub const fn padding_box(&self) -> Rect {
        self.content.expanded_by(self.padding)
    }

    /// [§ 3.3 Borders](https://www.w3.org/TR/css-box-3/#borders)
    ///
    /// "The border box contains content, padding, and border areas."
    #[must_use]
    pub const fn border_box(&self) -> Rect {
        self.padding_box().expanded_by(self.border)
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    ///
    /// "The margin box is the outermost box, and contains all four areas."
    #[must_use]
    pub const fn margin_box(&self) -> Rect {
        self.border_box().expanded_by(self.margin)
    }

    /// Padding, border and margin on the left and right.
    #[must_use]
    pub const fn horizontal_extra(&self) -> FixedPoint {
        self.padding.horizontal() + self.border.horizontal() + self.margin.horizontal()
    }

    /// Padding, border and margin on the top and bottom.
    #[must_use]
    pub const fn vertical_extra(&self) -> FixedPoint {
        self.padding.vertical() + self.border.vertical() + self.margin.vertical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxes_nest_outward() {
        let edges = |n| EdgeSizes {
            top: n,
            right: n,
            bottom: n,
            left: n,
        };
        let dims = Dimensions {
            content: Rect::new(100, 100, 50, 20),
            padding: edges(1),
            border: edges(2),
            margin: edges(4),
        };
        assert_eq!(dims.padding_box(), Rect::new(99, 99, 52, 22));
        assert_eq!(dims.border_box(), Rect::new(97, 97, 56, 26));
        assert_eq!(dims.margin_box(), Rect::new(93, 93, 64, 34));
        assert_eq!(dims.horizontal_extra(), 14);
    }
}
