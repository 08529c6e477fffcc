//! List item markers.
//!
//! [§ 12.6.2 Lists: the 'list-style-type' property](https://www.w3.org/TR/CSS2/generate.html#list-style)
//!
//! "This property specifies appearance of the list item marker if
//! 'list-style-image' has the value 'none' or if the image pointed to by the
//! URI cannot be displayed."

use crate::style::ListStyleType;

const DISC: char = '\u{2022}';
const CIRCLE: char = '\u{25E6}';
const SQUARE: char = '\u{25A0}';

const LOWER_GREEK: u32 = 0x03B1;
const FINAL_SIGMA: u32 = 0x03C2;
const ARMENIAN: u32 = 0x0531;
const GEORGIAN: u32 = 0x10D0;

/// The marker text for the `ordinal`-th item of a list.
///
/// Bullets ignore the ordinal. Counting styles append `.`. An ordinal outside
/// the range a style can express, zero and negative ones included, falls
/// back to decimal.
#[must_use]
pub fn list_marker(style: ListStyleType, ordinal: i32) -> String {
    let positive = u32::try_from(ordinal).ok();
    let counted = match style {
        ListStyleType::None => return String::new(),
        ListStyleType::Disc => return DISC.to_string(),
        ListStyleType::Circle => return CIRCLE.to_string(),
        ListStyleType::Square => return SQUARE.to_string(),
        ListStyleType::Decimal => None,
        ListStyleType::DecimalLeadingZero => Some(format!("{ordinal:02}")),
        ListStyleType::LowerRoman => positive.and_then(to_roman).map(|r| r.to_lowercase()),
        ListStyleType::UpperRoman => positive.and_then(to_roman),
        ListStyleType::LowerAlpha | ListStyleType::LowerLatin => {
            positive.and_then(|n| alphabetic(n, 'a' as u32, 26))
        }
        ListStyleType::UpperAlpha | ListStyleType::UpperLatin => {
            positive.and_then(|n| alphabetic(n, 'A' as u32, 26))
        }
        ListStyleType::LowerGreek => positive.and_then(greek),
        ListStyleType::Armenian => positive.and_then(|n| alphabetic(n, ARMENIAN, 38)),
        ListStyleType::Georgian => positive.and_then(|n| alphabetic(n, GEORGIAN, 39)),
    };
    let mut marker = counted.unwrap_or_else(|| ordinal.to_string());
    marker.push('.');
    marker
}

/// Roman numerals for 1 to 3999.
#[must_use]
pub fn to_roman(n: u32) -> Option<String> {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    if !(1..=3999).contains(&n) {
        return None;
    }
    let mut rest = n;
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while rest >= value {
            out.push_str(numeral);
            rest -= value;
        }
    }
    Some(out)
}

fn alphabetic(n: u32, first: u32, count: u32) -> Option<String> {
    if !(1..=count).contains(&n) {
        return None;
    }
    char::from_u32(first + n - 1).map(String::from)
}

/// α to ω, skipping the final sigma.
fn greek(n: u32) -> Option<String> {
    if !(1..=24).contains(&n) {
        return None;
    }
    let mut code = LOWER_GREEK + n - 1;
    if code >= FINAL_SIGMA {
        code += 1;
    }
    char::from_u32(code).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_numerals() {
        assert_eq!(to_roman(4).as_deref(), Some("IV"));
        assert_eq!(to_roman(1994).as_deref(), Some("MCMXCIV"));
        assert_eq!(to_roman(3999).as_deref(), Some("MMMCMXCIX"));
        assert_eq!(to_roman(0), None);
        assert_eq!(to_roman(4000), None);
    }

    #[test]
    fn test_greek_skips_final_sigma() {
        assert_eq!(greek(17).as_deref(), Some("\u{3C1}"));
        assert_eq!(greek(18).as_deref(), Some("\u{3C3}"));
        assert_eq!(greek(24).as_deref(), Some("\u{3C9}"));
        assert_eq!(greek(25), None);
    }
}
