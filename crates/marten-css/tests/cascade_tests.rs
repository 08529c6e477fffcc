//! Integration tests for the cascade and style resolution.

use marten_css::cascade::{Cascade, StyleNode, StyleTree};
use marten_css::parser::parse_stylesheet;
use marten_css::style::{Color, Display, Length, Property, PropertyRegistry, Side};
use marten_css::ua_stylesheet;
use marten_dom::{DomTree, ElementData, NodeId};

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 128, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

/// `html > body > p.a#x > span`, returned as (dom, p, span).
fn document(p_style: Option<&str>) -> (DomTree, NodeId, NodeId) {
    let mut dom = DomTree::new();
    let html = dom.append_element(NodeId::ROOT, ElementData::new("html"));
    let body = dom.append_element(html, ElementData::new("body"));
    let mut p = ElementData::new("p").with_attr("class", "a").with_attr("id", "x");
    if let Some(style) = p_style {
        p = p.with_attr("style", style);
    }
    let p = dom.append_element(body, p);
    let span = dom.append_element(p, ElementData::new("span"));
    let _ = dom.append_text(span, "text");
    (dom, p, span)
}

fn resolve(dom: &DomTree, css: &str) -> StyleTree {
    let registry = PropertyRegistry::init();
    let sheet = parse_stylesheet(css, &registry);
    Cascade::new(&registry).resolve(dom, &sheet)
}

fn style(styles: &StyleTree, node: NodeId) -> &StyleNode {
    styles.node_style(node).expect("node is styled")
}

#[test]
fn test_higher_specificity_wins_regardless_of_order() {
    let (dom, p, _) = document(None);
    let styles = resolve(&dom, "p.a { color: blue } p { color: red }");
    assert_eq!(style(&styles, p).color(), BLUE);
    let styles = resolve(&dom, "#x { color: green } p.a { color: blue }");
    assert_eq!(style(&styles, p).color(), GREEN);
}

#[test]
fn test_equal_specificity_later_wins() {
    let (dom, p, _) = document(None);
    let styles = resolve(&dom, ".a { color: red } .a { color: blue }");
    assert_eq!(style(&styles, p).color(), BLUE);
}

#[test]
fn test_important_does_not_beat_higher_specificity() {
    let (dom, p, _) = document(None);
    let styles = resolve(&dom, "p.a { color: blue } p { color: red !important }");
    assert_eq!(style(&styles, p).color(), BLUE);
}

#[test]
fn test_important_beats_later_equal_and_lower() {
    let (dom, p, _) = document(None);
    let styles = resolve(
        &dom,
        "p { color: red; } p.a { color: blue !important; } p.a { color: green } p { color: green }",
    );
    assert_eq!(style(&styles, p).color(), BLUE);
}

#[test]
fn test_most_specific_matching_selector_counts() {
    let (dom, p, _) = document(None);
    let styles = resolve(&dom, "p, #x { color: red } p.a { color: blue }");
    assert_eq!(style(&styles, p).color(), RED);
}

#[test]
fn test_inline_style_beats_rules() {
    let (dom, p, _) = document(Some("color: green; margin: 3px"));
    let styles = resolve(&dom, "#x { color: red; margin-top: 9px }");
    let p = style(&styles, p);
    assert_eq!(p.color(), GREEN);
    assert_eq!(p.margin(Side::Top), Some(Length::px(3.0)));
}

#[test]
fn test_inherited_and_non_inherited_properties() {
    let (dom, p, span) = document(None);
    let styles = resolve(&dom, "p { color: blue; margin-left: 7px }");
    let span = style(&styles, span);
    assert_eq!(span.color(), BLUE);
    assert!(span.is_inherited(Property::Color));
    assert_eq!(span.margin(Side::Left), Some(Length::ZERO));
    assert!(!span.is_inherited(Property::MarginLeft));
    assert_eq!(style(&styles, p).margin(Side::Left), Some(Length::px(7.0)));
}

#[test]
fn test_inherit_keyword_copies_parent_value() {
    let (dom, _, span) = document(None);
    let styles = resolve(&dom, "p { margin-left: 7px } span { margin-left: inherit }");
    let span = style(&styles, span);
    assert_eq!(span.margin(Side::Left), Some(Length::px(7.0)));
    assert!(span.is_inherited(Property::MarginLeft));
}

#[test]
fn test_defaults_without_declarations() {
    let (dom, p, _) = document(None);
    let styles = resolve(&dom, "");
    let p = style(&styles, p);
    assert_eq!(p.display(), Display::Inline);
    assert_eq!(p.color(), Color::BLACK);
    assert_eq!(p.font_weight(), 400);
}

#[test]
fn test_text_nodes_inherit() {
    let (dom, _, span) = document(None);
    let styles = resolve(&dom, "span { color: red }");
    let text = dom.children(span)[0];
    assert_eq!(style(&styles, text).color(), RED);
}

#[test]
fn test_bolder_resolves_against_parent() {
    let (dom, _, span) = document(None);
    let styles = resolve(&dom, "p { font-weight: bold } span { font-weight: bolder }");
    assert_eq!(style(&styles, span).font_weight(), 900);
}

#[test]
fn test_user_agent_fills_only_unset_properties() {
    let (dom, p, span) = document(None);
    let registry = PropertyRegistry::init();
    let ua = ua_stylesheet(&registry);
    let author = parse_stylesheet("span { display: block } * { margin-top: 0 }", &registry);
    let styles = Cascade::new(&registry)
        .with_user_agent(&ua)
        .resolve(&dom, &author);
    let p = style(&styles, p);
    assert_eq!(p.display(), Display::Block);
    // The user-agent `p` margin would be 1em; the author rule is less
    // specific but still wins.
    assert_eq!(p.margin(Side::Top), Some(Length::px(0.0)));
    assert_eq!(style(&styles, span).display(), Display::Block);
}

#[test]
fn test_several_author_sheets_in_order() {
    let (dom, p, _) = document(None);
    let registry = PropertyRegistry::init();
    let first = parse_stylesheet("p { color: red }", &registry);
    let second = parse_stylesheet("p { color: blue }", &registry);
    let styles = Cascade::new(&registry).resolve_sheets(&dom, &[&first, &second]);
    assert_eq!(style(&styles, p).color(), BLUE);
}
