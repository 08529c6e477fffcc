//! Integration tests for line breaking with fixed-width metrics.

use marten_css::style::{TextAlign, TextTransform, WhiteSpace};
use marten_css::text::{
    FixedWidthMetrics, FontDescriptor, LineEnd, Reflow, TextStyle, reflow_text,
};

/// Every character is exactly one em wide.
const METRICS: FixedWidthMetrics = FixedWidthMetrics::new(1.0);

fn style() -> TextStyle {
    TextStyle::new(FontDescriptor::new(10.0))
}

fn texts(text: &str, style: &TextStyle, width: f32) -> Vec<String> {
    reflow_text(text, style, width, &METRICS)
        .iter()
        .map(|line| line.text())
        .collect()
}

#[test]
fn test_greedy_packing() {
    let lines = reflow_text("aa bb cc", &style(), 60.0, &METRICS);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "aa bb");
    assert!((lines[0].width() - 50.0).abs() < 1e-4);
    assert_eq!(lines[0].end, LineEnd::Wrap);
    assert_eq!(lines[1].text(), "cc");
    assert_eq!(lines[1].end, LineEnd::Exhausted);
}

#[test]
fn test_justify_fills_wrapped_lines_only() {
    let mut style = style();
    style.text_align = TextAlign::Justify;
    let lines = reflow_text("aa bb cc", &style, 60.0, &METRICS);
    assert!((lines[0].width() - 60.0).abs() < 1e-4);
    assert!((lines[0].words[1].gap_before - 20.0).abs() < 1e-4);
    assert!((lines[1].width() - 20.0).abs() < 1e-4);
}

#[test]
fn test_overlong_word_is_placed_alone() {
    let lines = reflow_text("abcdefgh ij", &style(), 30.0, &METRICS);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "abcdefgh");
    assert!((lines[0].width() - 80.0).abs() < 1e-4);
}

#[test]
fn test_collapsible_spaces_and_newlines() {
    let lines = texts("  aa \n\t bb  ", &style(), 500.0);
    assert_eq!(lines, vec!["aa bb"]);
    let line = &reflow_text("  aa", &style(), 500.0, &METRICS)[0];
    assert!(line.words[0].gap_before.abs() < f32::EPSILON);
}

#[test]
fn test_pre_keeps_spaces_and_never_wraps() {
    let mut style = style();
    style.white_space = WhiteSpace::Pre;
    let lines = reflow_text("a  b c\nd", &style, 10.0, &METRICS);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text(), "a  b c");
    assert_eq!(lines[0].end, LineEnd::Break);
    assert_eq!(lines[1].text(), "d");
}

#[test]
fn test_nowrap_keeps_one_line() {
    let mut style = style();
    style.white_space = WhiteSpace::Nowrap;
    let lines = reflow_text("aa bb\ncc", &style, 30.0, &METRICS);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "aa bb cc");
}

#[test]
fn test_pre_wrap_wraps_and_breaks() {
    let mut style = style();
    style.white_space = WhiteSpace::PreWrap;
    assert_eq!(texts("aa bb\ncc", &style, 30.0), vec!["aa", "bb", "cc"]);
}

#[test]
fn test_letter_and_word_spacing() {
    let mut style = style();
    style.letter_spacing = 2.0;
    style.word_spacing = 5.0;
    let lines = reflow_text("ab cd", &style, 500.0, &METRICS);
    let words = &lines[0].words;
    assert!((words[0].advance - 24.0).abs() < 1e-4);
    assert!((words[1].gap_before - 15.0).abs() < 1e-4);
    assert_eq!(words[0].glyph_path.len(), 3);
}

#[test]
fn test_transform_applies_before_breaking() {
    let mut style = style();
    style.text_transform = TextTransform::Uppercase;
    assert_eq!(texts("ab cd", &style, 500.0), vec!["AB CD"]);
}

#[test]
fn test_width_can_change_between_lines() {
    let style = style();
    let mut reflow = Reflow::new("aa bb cc dd", &style, &METRICS);
    let first = reflow.next_line(20.0, true).unwrap();
    let second = reflow.next_line(100.0, true).unwrap();
    assert_eq!(first.text(), "aa");
    assert_eq!(second.text(), "bb cc dd");
    assert!(reflow.next_line(100.0, true).is_none());
}

#[test]
fn test_non_empty_line_may_take_nothing() {
    let style = style();
    let mut reflow = Reflow::new("aaaa", &style, &METRICS);
    let line = reflow.next_line(10.0, false).unwrap();
    assert!(line.is_empty());
    assert_eq!(line.end, LineEnd::Wrap);
    assert!(!reflow.is_finished());
}
