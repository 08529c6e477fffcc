//! Integration tests for CSS selector parsing and matching.

use marten_css::selector::{Combinator, Selector, Specificity};
use marten_dom::{DomTree, ElementData, NodeId};

/// ```text
/// html lang=en-GB
///   body
///     div#main.nav.wide
///       ul
///         li.a   "one"
///         li     "two"
///         li.b   (empty)
///     p
///     a href=x
///     span title="hello world"
/// ```
struct Fixture {
    dom: DomTree,
    html: NodeId,
    body: NodeId,
    div: NodeId,
    ul: NodeId,
    li: [NodeId; 3],
    p: NodeId,
    a: NodeId,
    span: NodeId,
}

fn fixture() -> Fixture {
    let mut dom = DomTree::new();
    let html = dom.append_element(NodeId::ROOT, ElementData::new("html").with_attr("lang", "en-GB"));
    let body = dom.append_element(html, ElementData::new("body"));
    let div = dom.append_element(
        body,
        ElementData::new("div")
            .with_attr("id", "main")
            .with_attr("class", "nav wide"),
    );
    let ul = dom.append_element(div, ElementData::new("ul"));
    let li0 = dom.append_element(ul, ElementData::new("li").with_attr("class", "a"));
    let _ = dom.append_text(li0, "one");
    let li1 = dom.append_element(ul, ElementData::new("li"));
    let _ = dom.append_text(li1, "two");
    let li2 = dom.append_element(ul, ElementData::new("li").with_attr("class", "b"));
    let p = dom.append_element(body, ElementData::new("p"));
    let a = dom.append_element(body, ElementData::new("a").with_attr("href", "x"));
    let span = dom.append_element(body, ElementData::new("span").with_attr("title", "hello world"));
    Fixture {
        dom,
        html,
        body,
        div,
        ul,
        li: [li0, li1, li2],
        p,
        a,
        span,
    }
}

fn matches(selector: &str, dom: &DomTree, node: NodeId) -> bool {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("{selector}: {e}"))
        .matches(dom, node)
}

#[test]
fn test_parse_chain_is_right_to_left() {
    let selector = Selector::parse("div.nav > ul li").unwrap();
    assert_eq!(selector.subject.element.as_deref(), Some("li"));
    assert_eq!(selector.chain.len(), 2);
    assert_eq!(selector.chain[0].0, Combinator::Descendant);
    assert_eq!(selector.chain[1].0, Combinator::Child);
    assert_eq!(selector.to_string(), "div.nav > ul li");
}

#[test]
fn test_specificity() {
    let cases = [
        ("*", Specificity(0, 0, 0)),
        ("li", Specificity(0, 0, 1)),
        ("ul li", Specificity(0, 0, 2)),
        ("ul ol+li", Specificity(0, 0, 3)),
        ("h1 + *[rel=up]", Specificity(0, 1, 1)),
        ("ul ol li.red", Specificity(0, 1, 3)),
        ("li.red.level", Specificity(0, 2, 1)),
        ("#x34y", Specificity(1, 0, 0)),
        ("li:first-child", Specificity(0, 1, 1)),
        ("p:not(span)", Specificity(0, 0, 2)),
    ];
    for (text, expected) in cases {
        assert_eq!(Selector::parse(text).unwrap().specificity, expected, "{text}");
    }
}

#[test]
fn test_type_class_and_id() {
    let f = fixture();
    assert!(matches("div", &f.dom, f.div));
    assert!(matches("DIV", &f.dom, f.div));
    assert!(matches(".nav.wide", &f.dom, f.div));
    assert!(!matches(".NAV", &f.dom, f.div));
    assert!(matches("#main", &f.dom, f.div));
    assert!(matches("div#main.nav", &f.dom, f.div));
    assert!(!matches("p#main", &f.dom, f.div));
    assert!(matches("*", &f.dom, f.p));
}

#[test]
fn test_combinators() {
    let f = fixture();
    assert!(matches("body li", &f.dom, f.li[1]));
    assert!(matches("#main > ul > li", &f.dom, f.li[1]));
    assert!(!matches("body > li", &f.dom, f.li[1]));
    assert!(matches("li.a + li", &f.dom, f.li[1]));
    assert!(!matches("li.a + li", &f.dom, f.li[2]));
    assert!(matches("li.a ~ li", &f.dom, f.li[2]));
    assert!(matches("div ~ a", &f.dom, f.a));
    assert!(!matches("a ~ div", &f.dom, f.div));
}

#[test]
fn test_descendant_tries_every_ancestor() {
    let f = fixture();
    // `ul` matches `*` but its parent is not `body`; `div` satisfies both.
    assert!(matches("body > * li", &f.dom, f.li[0]));
    assert!(!matches("p * li", &f.dom, f.li[0]));
}

#[test]
fn test_attributes() {
    let f = fixture();
    assert!(matches("[title]", &f.dom, f.span));
    assert!(matches("[TITLE]", &f.dom, f.span));
    assert!(matches("[title='hello world']", &f.dom, f.span));
    assert!(matches("[title~=world]", &f.dom, f.span));
    assert!(!matches("[title~=wor]", &f.dom, f.span));
    assert!(matches("[title^=hel]", &f.dom, f.span));
    assert!(matches("[title$=rld]", &f.dom, f.span));
    assert!(matches("[title*='o w']", &f.dom, f.span));
    assert!(!matches("[title^='']", &f.dom, f.span));
    assert!(matches("[lang|=en]", &f.dom, f.html));
}

#[test]
fn test_structural_pseudo_classes() {
    let f = fixture();
    assert!(matches("li:first-child", &f.dom, f.li[0]));
    assert!(!matches("li:first-child", &f.dom, f.li[1]));
    assert!(matches("li:last-child", &f.dom, f.li[2]));
    assert!(matches("ul:only-child", &f.dom, f.ul));
    assert!(matches("p:first-of-type", &f.dom, f.p));
    assert!(matches("li:nth-child(odd)", &f.dom, f.li[2]));
    assert!(matches("li:nth-child(even)", &f.dom, f.li[1]));
    assert!(matches("li:nth-child(2)", &f.dom, f.li[1]));
    assert!(matches("li:empty", &f.dom, f.li[2]));
    assert!(!matches("li:empty", &f.dom, f.li[0]));
    assert!(matches(":root", &f.dom, f.html));
    assert!(!matches(":root", &f.dom, f.body));
}

#[test]
fn test_link_lang_and_not() {
    let f = fixture();
    assert!(matches("a:link", &f.dom, f.a));
    assert!(!matches("a:visited", &f.dom, f.a));
    assert!(!matches("a:hover", &f.dom, f.a));
    assert!(matches("p:lang(en)", &f.dom, f.p));
    assert!(!matches("p:lang(fr)", &f.dom, f.p));
    assert!(matches("body :not(p)", &f.dom, f.span));
    assert!(!matches(":not(p)", &f.dom, f.p));
}

#[test]
fn test_unknown_pseudo_never_matches() {
    let f = fixture();
    assert!(!matches("p:frobnicate", &f.dom, f.p));
    assert!(!matches("p::before", &f.dom, f.p));
}

#[test]
fn test_invalid_selectors() {
    for text in ["", "p >", "> p", "p..x", "a, b", "[=x]"] {
        assert!(Selector::parse(text).is_err(), "{text:?} should not parse");
    }
}
