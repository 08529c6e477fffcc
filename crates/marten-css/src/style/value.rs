//! Typed style values stored per property.

use core::fmt;

use serde::Serialize;

use super::color::Color;
use super::keywords::{
    AbsoluteSize, BorderStyle, Clear, Direction, Display, Float, FontStyle, FontVariant,
    ListStylePosition, ListStyleType, Overflow, Position, TextAlign, TextTransform, VerticalAlign,
    Visibility, WhiteSpace,
};
use super::length::Length;

/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// Relative forms resolve against the parent's font size during layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    /// A keyword from the UA size table.
    Absolute(AbsoluteSize),
    /// One step up the table (x1.2).
    Larger,
    /// One step down the table (/1.2).
    Smaller,
    /// A length; `em`, `ex` and `%` refer to the parent's size.
    Length(Length),
}

/// [§ 10.8.1 Leading and half-leading](https://www.w3.org/TR/CSS2/visudet.html#propdef-line-height)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineHeight {
    /// 1.15 times the font size.
    Normal,
    /// A multiple of the element's font size.
    Number(f32),
    /// A length; `em` and `%` refer to the element's font size.
    Length(Length),
}

impl LineHeight {
    /// Factor used for `normal`.
    pub const NORMAL_FACTOR: f32 = 1.15;
}

/// [§ 15.6 Font boldness](https://www.w3.org/TR/CSS2/fonts.html#font-boldness)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    /// A numeric weight, 100 to 900. `normal` is 400 and `bold` is 700.
    Weight(u16),
    /// One step bolder than the parent.
    Bolder,
    /// One step lighter than the parent.
    Lighter,
}

impl FontWeight {
    /// Resolve against the parent's numeric weight.
    #[must_use]
    pub const fn resolve(self, parent: u16) -> u16 {
        match self {
            Self::Weight(w) => w,
            Self::Bolder => {
                if parent < 400 {
                    400
                } else if parent < 600 {
                    700
                } else {
                    900
                }
            }
            Self::Lighter => {
                if parent < 600 {
                    100
                } else if parent < 800 {
                    400
                } else {
                    700
                }
            }
        }
    }
}

/// A parsed, typed value for one longhand property.
///
/// Which variant a property holds is fixed by the registry; the typed
/// accessors on [`StyleNode`](crate::cascade::StyleNode) treat a mismatch as
/// an invariant violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type", content = "value")]
pub enum StyleValue {
    /// A resolved color.
    Color(Color),
    /// "currentColor": the element's `color`.
    CurrentColor,
    /// A length or percentage.
    Length(Length),
    /// `auto` for sizes, margins and offsets.
    Auto,
    /// `none` for `max-width` and `max-height`.
    Unbounded,
    /// `border-*-style`
    BorderStyle(BorderStyle),
    /// `display`
    Display(Display),
    /// `position`
    Position(Position),
    /// `float`
    Float(Float),
    /// `clear`
    Clear(Clear),
    /// `white-space`
    WhiteSpace(WhiteSpace),
    /// `font-family`: family names in preference order.
    FontFamily(Vec<String>),
    /// `font-size`
    FontSize(FontSize),
    /// `font-style`
    FontStyle(FontStyle),
    /// `font-variant`
    FontVariant(FontVariant),
    /// `font-weight`
    FontWeight(FontWeight),
    /// `text-align`
    TextAlign(TextAlign),
    /// `text-transform`
    TextTransform(TextTransform),
    /// `direction`
    Direction(Direction),
    /// `line-height`
    LineHeight(LineHeight),
    /// `overflow`
    Overflow(Overflow),
    /// `list-style-type`
    ListStyleType(ListStyleType),
    /// `list-style-position`
    ListStylePosition(ListStylePosition),
    /// `vertical-align`
    VerticalAlign(VerticalAlign),
    /// `visibility`
    Visibility(Visibility),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::CurrentColor => f.write_str("currentcolor"),
            Self::Length(l) => write!(f, "{l}"),
            Self::Auto => f.write_str("auto"),
            Self::Unbounded => f.write_str("none"),
            Self::BorderStyle(v) => write!(f, "{v}"),
            Self::Display(v) => write!(f, "{v}"),
            Self::Position(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Clear(v) => write!(f, "{v}"),
            Self::WhiteSpace(v) => write!(f, "{v}"),
            Self::FontFamily(families) => f.write_str(&families.join(", ")),
            Self::FontSize(FontSize::Absolute(size)) => write!(f, "{size}"),
            Self::FontSize(FontSize::Larger) => f.write_str("larger"),
            Self::FontSize(FontSize::Smaller) => f.write_str("smaller"),
            Self::FontSize(FontSize::Length(l)) => write!(f, "{l}"),
            Self::FontStyle(v) => write!(f, "{v}"),
            Self::FontVariant(v) => write!(f, "{v}"),
            Self::FontWeight(FontWeight::Weight(w)) => write!(f, "{w}"),
            Self::FontWeight(FontWeight::Bolder) => f.write_str("bolder"),
            Self::FontWeight(FontWeight::Lighter) => f.write_str("lighter"),
            Self::TextAlign(v) => write!(f, "{v}"),
            Self::TextTransform(v) => write!(f, "{v}"),
            Self::Direction(v) => write!(f, "{v}"),
            Self::LineHeight(LineHeight::Normal) => f.write_str("normal"),
            Self::LineHeight(LineHeight::Number(n)) => write!(f, "{n}"),
            Self::LineHeight(LineHeight::Length(l)) => write!(f, "{l}"),
            Self::Overflow(v) => write!(f, "{v}"),
            Self::ListStyleType(v) => write!(f, "{v}"),
            Self::ListStylePosition(v) => write!(f, "{v}"),
            Self::VerticalAlign(v) => write!(f, "{v}"),
            Self::Visibility(v) => write!(f, "{v}"),
        }
    }
}

/// A declared value: either a typed value or the `inherit` keyword, which
/// bypasses the typed parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Specified {
    /// A parsed value.
    Value(StyleValue),
    /// "inherit": take the parent's computed value.
    Inherit,
}

impl fmt::Display for Specified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Inherit => f.write_str("inherit"),
        }
    }
}
