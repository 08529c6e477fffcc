//! CSS length values
//!
//! [CSS 2.1 § 4.3.2 Lengths](https://www.w3.org/TR/CSS2/syndata.html#length-units)

use core::fmt;

use serde::Serialize;
use strum_macros::{AsRefStr, EnumString};

use crate::parser::ComponentValue;
use crate::tokenizer::Token;
use marten_common::warning::warn_once;

/// Units a [`Length`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// "pixels; 1px is equal to 0.75pt"
    Px,
    /// "points; the points used by CSS are equal to 1/72nd of 1in"
    Pt,
    /// "inches; 1in is equal to 2.54cm"
    In,
    /// "centimeters"
    Cm,
    /// "millimeters"
    Mm,
    /// "picas; 1pc is equal to 12pt"
    Pc,
    /// "the 'font-size' of the relevant font"
    Em,
    /// "the 'x-height' of the relevant font"; taken as half an em.
    Ex,
    /// A percentage of a property-specific base.
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Percent,
}

/// A number with a unit. Relative units stay unresolved until layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// The numeric part.
    pub value: f32,
    /// The unit.
    pub unit: LengthUnit,
}

/// What relative lengths resolve against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthContext {
    /// Device pixels per inch; 96 in the usual CSS reference.
    pub dpi: f32,
    /// Font size in px of the element the length belongs to.
    pub font_size: f32,
}

impl Length {
    /// A zero length.
    pub const ZERO: Self = Self::px(0.0);

    /// A length in px.
    #[must_use]
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    /// A percentage.
    #[must_use]
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }

    /// Resolve to px. `percent_base` is what 100% means for this property.
    ///
    /// 1px is one device pixel here, so the physical units scale with the
    /// configured dpi: in = dpi, cm = dpi / 2.54, mm = dpi / 25.4, pt = dpi / 72,
    /// pc = dpi / 6.
    #[must_use]
    pub fn to_px(&self, ctx: &LengthContext, percent_base: f32) -> f32 {
        let v = self.value;
        match self.unit {
            LengthUnit::Px => v,
            LengthUnit::In => v * ctx.dpi,
            LengthUnit::Cm => v * ctx.dpi / 2.54,
            LengthUnit::Mm => v * ctx.dpi / 25.4,
            LengthUnit::Pt => v * ctx.dpi / 72.0,
            LengthUnit::Pc => v * ctx.dpi / 6.0,
            LengthUnit::Em => v * ctx.font_size,
            LengthUnit::Ex => v * ctx.font_size * 0.5,
            LengthUnit::Percent => v * percent_base / 100.0,
        }
    }

    /// Whether the value depends on the font size or a percentage base.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        matches!(
            self.unit,
            LengthUnit::Em | LengthUnit::Ex | LengthUnit::Percent
        )
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_ref())
    }
}

/// Parse a `<length>` or `<percentage>` component.
///
/// "After a zero length, the unit identifier is optional." Other bare
/// numbers are accepted as px, as legacy documents rely on it.
#[must_use]
pub fn parse_length(v: &ComponentValue) -> Option<Length> {
    match v {
        ComponentValue::Token(Token::Dimension { value, unit }) => {
            let Ok(unit) = unit.parse::<LengthUnit>() else {
                warn_once("css", &format!("unsupported unit '{unit}'"));
                return None;
            };
            (unit != LengthUnit::Percent).then(|| Length {
                value: value.value() as f32,
                unit,
            })
        }
        ComponentValue::Token(Token::Percentage(n)) => Some(Length::percent(n.value() as f32)),
        ComponentValue::Token(Token::Number(n)) => Some(Length::px(n.value() as f32)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: LengthContext = LengthContext {
        dpi: 96.0,
        font_size: 20.0,
    };

    #[test]
    fn test_absolute_units_follow_dpi() {
        let inch = Length {
            value: 1.0,
            unit: LengthUnit::In,
        };
        assert!((inch.to_px(&CTX, 0.0) - 96.0).abs() < 1e-4);
        let pt = Length {
            value: 72.0,
            unit: LengthUnit::Pt,
        };
        assert!((pt.to_px(&CTX, 0.0) - 96.0).abs() < 1e-4);
        let pc = Length {
            value: 6.0,
            unit: LengthUnit::Pc,
        };
        assert!((pc.to_px(&CTX, 0.0) - 96.0).abs() < 1e-4);
    }

    #[test]
    fn test_relative_units() {
        let em = Length {
            value: 1.5,
            unit: LengthUnit::Em,
        };
        assert!((em.to_px(&CTX, 0.0) - 30.0).abs() < 1e-4);
        let ex = Length {
            value: 2.0,
            unit: LengthUnit::Ex,
        };
        assert!((ex.to_px(&CTX, 0.0) - 20.0).abs() < 1e-4);
        assert!((Length::percent(50.0).to_px(&CTX, 300.0) - 150.0).abs() < 1e-4);
    }
}
