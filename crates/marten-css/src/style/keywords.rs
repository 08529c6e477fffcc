//! Keyword-valued properties. Every enum parses through [`core::str::FromStr`]
//! (ASCII case-insensitive) and prints its CSS spelling through `Display`.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/CSS2/visuren.html#display-prop)
///
/// Table display types are not supported and are rejected by the parser.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    /// "inline": the initial value.
    #[default]
    Inline,
    /// "block"
    Block,
    /// "list-item": a block box with a marker.
    ListItem,
    /// "inline-block"
    InlineBlock,
    /// "none": no box is generated for the element or its descendants.
    None,
}

/// [§ 9.3.1 Choosing a positioning scheme](https://www.w3.org/TR/CSS2/visuren.html#choose-position)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Normal flow.
    #[default]
    Static,
    /// Normal flow, then shifted by the offsets.
    Relative,
    /// Out of flow, against the nearest positioned ancestor.
    Absolute,
    /// Out of flow, against the viewport.
    Fixed,
}

/// [§ 9.5.1 Positioning the float](https://www.w3.org/TR/CSS2/visuren.html#float-position)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Float {
    /// Not floated.
    #[default]
    None,
    /// Floated to the left edge of the band.
    Left,
    /// Floated to the right edge of the band.
    Right,
}

/// [§ 9.5.2 Controlling flow next to floats](https://www.w3.org/TR/CSS2/visuren.html#flow-control)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Clear {
    /// No clearance.
    #[default]
    None,
    /// Below left floats.
    Left,
    /// Below right floats.
    Right,
    /// Below all floats.
    Both,
}

/// [§ 16.6 White space](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum WhiteSpace {
    /// Collapse spaces and newlines, wrap.
    #[default]
    Normal,
    /// Preserve spaces, break only at newlines.
    Pre,
    /// Collapse, never wrap.
    Nowrap,
    /// Preserve spaces, wrap and break at newlines.
    PreWrap,
    /// Collapse spaces, wrap and break at newlines.
    PreLine,
}

impl WhiteSpace {
    /// Whether runs of spaces collapse into one.
    #[must_use]
    pub const fn collapses_spaces(self) -> bool {
        matches!(self, Self::Normal | Self::Nowrap | Self::PreLine)
    }

    /// Whether a newline in the source forces a line break.
    #[must_use]
    pub const fn breaks_at_newlines(self) -> bool {
        matches!(self, Self::Pre | Self::PreWrap | Self::PreLine)
    }

    /// Whether lines may wrap at spaces.
    #[must_use]
    pub const fn wraps(self) -> bool {
        matches!(self, Self::Normal | Self::PreWrap | Self::PreLine)
    }
}

/// [§ 16.2 Alignment](https://www.w3.org/TR/CSS2/text.html#alignment-prop)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Flush right.
    Right,
    /// Centered.
    Center,
    /// Slack spread over the gaps of every line but the last.
    Justify,
}

/// [§ 16.5 Capitalization](https://www.w3.org/TR/CSS2/text.html#caps-prop)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum TextTransform {
    /// Unchanged.
    #[default]
    None,
    /// First letter of each word uppercased.
    Capitalize,
    /// All uppercase.
    Uppercase,
    /// All lowercase.
    Lowercase,
}

/// [§ 9.10 Text direction](https://www.w3.org/TR/CSS2/visuren.html#direction)
///
/// Parsed and inherited; layout is always left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// [§ 11.1.1 Overflow](https://www.w3.org/TR/CSS2/visufx.html#overflow)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    /// Content may spill out.
    #[default]
    Visible,
    /// Content is clipped.
    Hidden,
    /// Clipped with scrolling.
    Scroll,
    /// Scroll when needed.
    Auto,
}

/// [§ 11.2 Visibility](https://www.w3.org/TR/CSS2/visufx.html#visibility)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    /// Painted.
    #[default]
    Visible,
    /// Laid out but not painted.
    Hidden,
    /// Same as hidden outside tables.
    Collapse,
}

/// [§ 10.8.1 vertical-align](https://www.w3.org/TR/CSS2/visudet.html#propdef-vertical-align)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    /// On the parent's baseline.
    #[default]
    Baseline,
    /// Subscript position.
    Sub,
    /// Superscript position.
    Super,
    /// Top of the line box.
    Top,
    /// Top of the parent's font.
    TextTop,
    /// Middle of the parent's x-height.
    Middle,
    /// Bottom of the line box.
    Bottom,
    /// Bottom of the parent's font.
    TextBottom,
}

/// [§ 8.5.3 Border style](https://www.w3.org/TR/CSS2/box.html#border-style-properties)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    /// No border; the used width is zero.
    #[default]
    None,
    /// Like none, wins border conflicts in tables.
    Hidden,
    /// Dots.
    Dotted,
    /// Dashes.
    Dashed,
    /// A single line.
    Solid,
    /// Two lines.
    Double,
    /// Carved.
    Groove,
    /// Extruded.
    Ridge,
    /// Embedded.
    Inset,
    /// Raised.
    Outset,
}

impl BorderStyle {
    /// "none" and "hidden" force the used border width to zero.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::None | Self::Hidden)
    }
}

/// [§ 15.7 Font style](https://www.w3.org/TR/CSS2/fonts.html#font-styling)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic face.
    Italic,
    /// Slanted face.
    Oblique,
}

/// [§ 15.5 Small-caps](https://www.w3.org/TR/CSS2/fonts.html#small-caps)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum FontVariant {
    /// Regular glyphs.
    #[default]
    Normal,
    /// Small capitals.
    SmallCaps,
}

/// [§ 12.5.1 Lists](https://www.w3.org/TR/CSS2/generate.html#propdef-list-style-type)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ListStyleType {
    /// A filled circle.
    #[default]
    Disc,
    /// A hollow circle.
    Circle,
    /// A filled square.
    Square,
    /// 1, 2, 3
    Decimal,
    /// 01, 02, 03
    DecimalLeadingZero,
    /// i, ii, iii
    LowerRoman,
    /// I, II, III
    UpperRoman,
    /// α, β, γ
    LowerGreek,
    /// a, b, c
    LowerAlpha,
    /// a, b, c
    LowerLatin,
    /// A, B, C
    UpperAlpha,
    /// A, B, C
    UpperLatin,
    /// Armenian capital letters.
    Armenian,
    /// Georgian letters.
    Georgian,
    /// No marker.
    None,
}

/// [§ 12.5.1 Lists](https://www.w3.org/TR/CSS2/generate.html#propdef-list-style-position)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, AsRefStr, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum ListStylePosition {
    /// Marker left of the content edge.
    #[default]
    Outside,
    /// Marker as the first inline content.
    Inside,
}

/// [§ 15.7 Font size](https://www.w3.org/TR/CSS2/fonts.html#font-size-props)
///
/// "<absolute-size>: An <absolute-size> keyword is an index to a table of font
/// sizes computed and kept by the UA."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter, Serialize)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum AbsoluteSize {
    /// 3/5 of medium.
    #[strum(serialize = "xx-small")]
    XxSmall,
    /// 3/4 of medium.
    #[strum(serialize = "x-small")]
    XSmall,
    /// 8/9 of medium.
    #[strum(serialize = "small")]
    Small,
    /// The configured default size.
    #[strum(serialize = "medium")]
    Medium,
    /// 6/5 of medium.
    #[strum(serialize = "large")]
    Large,
    /// 3/2 of medium.
    #[strum(serialize = "x-large")]
    XLarge,
    /// Twice medium.
    #[strum(serialize = "xx-large")]
    XxLarge,
}

impl AbsoluteSize {
    /// Scale factor relative to `medium`.
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::XxSmall => 3.0 / 5.0,
            Self::XSmall => 3.0 / 4.0,
            Self::Small => 8.0 / 9.0,
            Self::Medium => 1.0,
            Self::Large => 6.0 / 5.0,
            Self::XLarge => 3.0 / 2.0,
            Self::XxLarge => 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_keywords() {
        assert_eq!("inline-block".parse::<Display>(), Ok(Display::InlineBlock));
        assert_eq!("LIST-ITEM".parse::<Display>(), Ok(Display::ListItem));
        assert_eq!("pre-wrap".parse::<WhiteSpace>(), Ok(WhiteSpace::PreWrap));
        assert_eq!(ListStyleType::DecimalLeadingZero.to_string(), "decimal-leading-zero");
        assert_eq!("x-small".parse::<AbsoluteSize>(), Ok(AbsoluteSize::XSmall));
        assert!("table".parse::<Display>().is_err());
    }
}
