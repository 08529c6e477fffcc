//! Integration tests for list item marker strings.

use marten_css::layout::{list_marker, to_roman};
use marten_css::style::ListStyleType;

#[test]
fn test_decimal_counts_items() {
    let markers: Vec<String> = (1..=3)
        .map(|n| list_marker(ListStyleType::Decimal, n))
        .collect();
    assert_eq!(markers, vec!["1.", "2.", "3."]);
    assert_eq!(list_marker(ListStyleType::DecimalLeadingZero, 7), "07.");
    assert_eq!(list_marker(ListStyleType::DecimalLeadingZero, 123), "123.");
}

#[test]
fn test_roman_numerals() {
    assert_eq!(list_marker(ListStyleType::LowerRoman, 4), "iv.");
    assert_eq!(list_marker(ListStyleType::UpperRoman, 1999), "MCMXCIX.");
    assert_eq!(to_roman(3888).as_deref(), Some("MMMDCCCLXXXVIII"));
}

#[test]
fn test_out_of_range_falls_back_to_decimal() {
    assert_eq!(list_marker(ListStyleType::LowerRoman, 4000), "4000.");
    assert_eq!(list_marker(ListStyleType::UpperRoman, 0), "0.");
    assert_eq!(list_marker(ListStyleType::LowerAlpha, 27), "27.");
    assert_eq!(list_marker(ListStyleType::LowerGreek, 25), "25.");
}

#[test]
fn test_zero_and_negative_ordinals() {
    assert_eq!(list_marker(ListStyleType::Decimal, 0), "0.");
    assert_eq!(list_marker(ListStyleType::Decimal, -2), "-2.");
    assert_eq!(list_marker(ListStyleType::LowerAlpha, -1), "-1.");
    assert_eq!(list_marker(ListStyleType::UpperRoman, -5), "-5.");
}

#[test]
fn test_alphabetic_styles() {
    assert_eq!(list_marker(ListStyleType::LowerAlpha, 1), "a.");
    assert_eq!(list_marker(ListStyleType::UpperLatin, 26), "Z.");
    assert_eq!(list_marker(ListStyleType::LowerGreek, 1), "\u{3B1}.");
    assert_eq!(list_marker(ListStyleType::Armenian, 1), "\u{531}.");
    assert_eq!(list_marker(ListStyleType::Georgian, 2), "\u{10D1}.");
}

#[test]
fn test_bullets_ignore_ordinal() {
    assert_eq!(list_marker(ListStyleType::Disc, 9), "\u{2022}");
    assert_eq!(list_marker(ListStyleType::Circle, 1), "\u{25E6}");
    assert_eq!(list_marker(ListStyleType::Square, 2), "\u{25A0}");
    assert_eq!(list_marker(ListStyleType::None, 1), "");
}
