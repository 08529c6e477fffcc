//! The longhand property table.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Every longhand property the engine understands. Shorthands expand into
/// these before anything is stored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
    EnumCount,
    Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    /// `color`
    Color,
    /// `background-color`
    BackgroundColor,
    /// `margin-top`
    MarginTop,
    /// `margin-right`
    MarginRight,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `padding-top`
    PaddingTop,
    /// `padding-right`
    PaddingRight,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
    /// `border-top-width`
    BorderTopWidth,
    /// `border-right-width`
    BorderRightWidth,
    /// `border-bottom-width`
    BorderBottomWidth,
    /// `border-left-width`
    BorderLeftWidth,
    /// `border-top-style`
    BorderTopStyle,
    /// `border-right-style`
    BorderRightStyle,
    /// `border-bottom-style`
    BorderBottomStyle,
    /// `border-left-style`
    BorderLeftStyle,
    /// `border-top-color`
    BorderTopColor,
    /// `border-right-color`
    BorderRightColor,
    /// `border-bottom-color`
    BorderBottomColor,
    /// `border-left-color`
    BorderLeftColor,
    /// `display`
    Display,
    /// `position`
    Position,
    /// `float`
    Float,
    /// `clear`
    Clear,
    /// `top`
    Top,
    /// `right`
    Right,
    /// `bottom`
    Bottom,
    /// `left`
    Left,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `min-width`
    MinWidth,
    /// `max-width`
    MaxWidth,
    /// `min-height`
    MinHeight,
    /// `max-height`
    MaxHeight,
    /// `white-space`
    WhiteSpace,
    /// `font-family`
    FontFamily,
    /// `font-size`
    FontSize,
    /// `font-style`
    FontStyle,
    /// `font-variant`
    FontVariant,
    /// `font-weight`
    FontWeight,
    /// `letter-spacing`
    LetterSpacing,
    /// `word-spacing`
    WordSpacing,
    /// `text-align`
    TextAlign,
    /// `text-indent`
    TextIndent,
    /// `direction`
    Direction,
    /// `text-transform`
    TextTransform,
    /// `line-height`
    LineHeight,
    /// `overflow`
    Overflow,
    /// `list-style-type`
    ListStyleType,
    /// `list-style-position`
    ListStylePosition,
    /// `vertical-align`
    VerticalAlign,
    /// `visibility`
    Visibility,
}

impl Property {
    /// Position in per-node value tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `margin-<side>`
    #[must_use]
    pub const fn margin(side: Side) -> Self {
        match side {
            Side::Top => Self::MarginTop,
            Side::Right => Self::MarginRight,
            Side::Bottom => Self::MarginBottom,
            Side::Left => Self::MarginLeft,
        }
    }

    /// `padding-<side>`
    #[must_use]
    pub const fn padding(side: Side) -> Self {
        match side {
            Side::Top => Self::PaddingTop,
            Side::Right => Self::PaddingRight,
            Side::Bottom => Self::PaddingBottom,
            Side::Left => Self::PaddingLeft,
        }
    }

    /// `border-<side>-width`
    #[must_use]
    pub const fn border_width(side: Side) -> Self {
        match side {
            Side::Top => Self::BorderTopWidth,
            Side::Right => Self::BorderRightWidth,
            Side::Bottom => Self::BorderBottomWidth,
            Side::Left => Self::BorderLeftWidth,
        }
    }

    /// `border-<side>-style`
    #[must_use]
    pub const fn border_style(side: Side) -> Self {
        match side {
            Side::Top => Self::BorderTopStyle,
            Side::Right => Self::BorderRightStyle,
            Side::Bottom => Self::BorderBottomStyle,
            Side::Left => Self::BorderLeftStyle,
        }
    }

    /// `border-<side>-color`
    #[must_use]
    pub const fn border_color(side: Side) -> Self {
        match side {
            Side::Top => Self::BorderTopColor,
            Side::Right => Self::BorderRightColor,
            Side::Bottom => Self::BorderBottomColor,
            Side::Left => Self::BorderLeftColor,
        }
    }

    /// The inset property for a side (`top`, `right`, ...).
    #[must_use]
    pub const fn offset(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Right => Self::Right,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
        }
    }
}

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Side {
    /// All sides in CSS shorthand order: top, right, bottom, left.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}
