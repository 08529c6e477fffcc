//! Integration tests for block, inline, float and positioned layout.
//!
//! Every document is laid out with one-em-wide characters, a 10px font and
//! 20px lines in a 200px wide viewport, so expected coordinates are exact.

use marten_css::layout::{
    BoxId, BoxKind, BoxTree, FixedPoint, LayoutConfig, Rect, layout_document, px_to_fixed,
};
use marten_css::style::{ListStylePosition, PropertyRegistry};
use marten_css::text::FixedWidthMetrics;
use marten_css::{Cascade, parse_stylesheet};
use marten_dom::{DomTree, ElementData, NodeId};

const BASE: &str = "
    html, body, div, p, ul, ol { display: block }
    li { display: list-item }
    html { font-size: 10px; line-height: 20px }
";

/// `html > body`, with nodes appended below `body`.
struct Page {
    dom: DomTree,
    body: NodeId,
}

impl Page {
    fn new() -> Self {
        let mut dom = DomTree::new();
        let html = dom.append_element(NodeId::ROOT, ElementData::new("html"));
        let body = dom.append_element(html, ElementData::new("body"));
        Self { dom, body }
    }

    fn element(&mut self, parent: NodeId, tag: &str, class: &str) -> NodeId {
        let mut data = ElementData::new(tag);
        if !class.is_empty() {
            data = data.with_attr("class", class);
        }
        self.dom.append_element(parent, data)
    }

    fn text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.dom.append_text(parent, text)
    }

    fn layout(&self, css: &str) -> BoxTree {
        let registry = PropertyRegistry::init();
        let sheet = parse_stylesheet(&format!("{BASE}{css}"), &registry);
        assert!(sheet.errors.is_empty(), "{:?}", sheet.errors);
        let styles = Cascade::new(&registry).resolve(&self.dom, &sheet);
        let config = LayoutConfig {
            viewport_width: 200.0,
            ..LayoutConfig::default()
        };
        layout_document(&self.dom, &styles, &config, &FixedWidthMetrics::new(1.0))
    }
}

fn px(value: f32) -> FixedPoint {
    px_to_fixed(value)
}

fn first_box(tree: &BoxTree, node: NodeId) -> BoxId {
    tree.boxes_for_node(node)
        .next()
        .unwrap_or_else(|| panic!("no box for {node:?}"))
}

fn content(tree: &BoxTree, node: NodeId) -> Rect {
    tree.get(first_box(tree, node)).dimensions.content
}

fn all_content(tree: &BoxTree, node: NodeId) -> Vec<Rect> {
    tree.boxes_for_node(node)
        .map(|id| tree.get(id).dimensions.content)
        .collect()
}

fn lines(tree: &BoxTree, node: NodeId) -> Vec<Rect> {
    let block = first_box(tree, node);
    tree.get(block)
        .children
        .iter()
        .map(|&id| tree.get(id))
        .filter(|b| b.kind == BoxKind::Line)
        .map(|b| b.dimensions.content)
        .collect()
}

#[test]
fn test_auto_width_fills_containing_block() {
    let mut page = Page::new();
    let body = page.body;
    let div = page.element(body, "div", "");
    let tree = page.layout("div { margin-left: 10px; padding: 5px; border: 1px solid }");
    let rect = content(&tree, div);
    assert_eq!(rect.x, px(16.0));
    assert_eq!(rect.width, px(200.0 - 10.0 - 10.0 - 2.0));
}

#[test]
fn test_auto_margins_center() {
    let mut page = Page::new();
    let body = page.body;
    let div = page.element(body, "div", "");
    let tree = page.layout("div { width: 120px; margin: 0 auto }");
    let b = tree.get(first_box(&tree, div));
    assert_eq!(b.dimensions.content.x, px(40.0));
    assert_eq!(b.dimensions.margin.left, px(40.0));
    assert_eq!(b.dimensions.margin.right, px(40.0));
}

#[test]
fn test_percentage_and_max_width() {
    let mut page = Page::new();
    let body = page.body;
    let half = page.element(body, "div", "half");
    let capped = page.element(body, "div", "capped");
    let tree = page.layout(".half { width: 50% } .capped { width: 180px; max-width: 60px }");
    assert_eq!(content(&tree, half).width, px(100.0));
    assert_eq!(content(&tree, capped).width, px(60.0));
}

#[test]
fn test_blocks_stack_without_collapsing_margins() {
    let mut page = Page::new();
    let body = page.body;
    let first = page.element(body, "div", "a");
    let second = page.element(body, "div", "b");
    let tree = page.layout(
        "div { height: 20px } .a { margin-bottom: 4px } .b { margin-top: 6px }",
    );
    assert_eq!(content(&tree, first).y, 0);
    assert_eq!(content(&tree, second).y, px(30.0));
    assert_eq!(content(&tree, body).height, px(50.0));
}

#[test]
fn test_text_wraps_into_lines() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let _ = page.text(p, "aaaa bbbb cccc dddd eeee");
    let tree = page.layout("");
    let rects = lines(&tree, p);
    assert_eq!(rects.len(), 2);
    assert_eq!(rects[1].y, px(20.0));
    assert_eq!(rects[1].height, px(20.0));
    assert_eq!(content(&tree, p).height, px(40.0));
}

#[test]
fn test_text_align_center() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let text = page.text(p, "aa");
    let tree = page.layout("p { text-align: center }");
    assert_eq!(content(&tree, text).x, px(90.0));
}

#[test]
fn test_float_narrows_only_lines_beside_it() {
    let mut page = Page::new();
    let body = page.body;
    let float = page.element(body, "div", "f");
    let p = page.element(body, "p", "");
    let _ = page.text(p, "aa bb cc dd ee ff gg hh ii");
    let tree = page.layout(".f { float: left; width: 100px; height: 30px }");

    let placed = content(&tree, float);
    assert_eq!((placed.x, placed.y), (0, 0));
    let rects = lines(&tree, p);
    assert_eq!(rects.len(), 3);
    assert_eq!(rects[0].x, px(100.0));
    assert_eq!(rects[1].x, px(100.0));
    assert_eq!(rects[2].x, 0);
    assert_eq!(rects[2].width, px(200.0));
}

#[test]
fn test_line_moves_below_float_too_narrow_for_first_word() {
    let mut page = Page::new();
    let body = page.body;
    let _float = page.element(body, "div", "f");
    let p = page.element(body, "p", "");
    let _ = page.text(p, "aaaaaaa");
    let tree = page.layout(".f { float: left; width: 150px; height: 20px }");
    let rects = lines(&tree, p);
    assert_eq!(rects.len(), 1);
    assert_eq!((rects[0].x, rects[0].y), (0, px(20.0)));
    assert_eq!(rects[0].width, px(200.0));
}

#[test]
fn test_text_align_justify_fills_wrapped_lines() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let text = page.text(p, "aaaa bbbb cccc dddd eeee");
    let tree = page.layout("p { text-align: justify }");

    let runs: Vec<BoxId> = tree.boxes_for_node(text).collect();
    assert_eq!(runs.len(), 2);
    let first = tree.get(runs[0]);
    assert_eq!(first.dimensions.content.x, 0);
    assert_eq!(first.dimensions.content.width, px(200.0));
    let BoxKind::Text(run) = &first.kind else {
        panic!("expected a text run, got {:?}", first.kind);
    };
    let space = run.glyphs.iter().find(|glyph| glyph.ch == ' ').unwrap();
    assert_eq!(space.x, px(40.0));
    assert_eq!(space.advance, px(10.0) + px(10.0) / 3);

    // The last line keeps its natural width.
    let last = tree.get(runs[1]).dimensions.content;
    assert_eq!((last.x, last.width), (0, px(40.0)));
}

#[test]
fn test_text_indent_applies_to_first_line_only() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let text = page.text(p, "aa bb cc dd");
    let tree = page.layout("p { width: 60px; text-indent: 30px }");
    let xs: Vec<FixedPoint> = all_content(&tree, text).iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![px(30.0), 0, 0]);
}

#[test]
fn test_inline_blocks_share_a_line_and_wrap() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let _ = page.text(p, "aaaa ");
    let first = page.element(p, "span", "ib");
    let _ = page.text(first, "b");
    let second = page.element(p, "span", "ib");
    let _ = page.text(second, "c");
    let tree = page.layout("p { width: 100px } .ib { display: inline-block; width: 50px }");

    let rects = lines(&tree, p);
    assert_eq!(rects.len(), 2);
    // A 20px inline-block on the baseline of a line with 13px strut ascent
    // and 7px depth.
    assert_eq!(rects[0].height, px(27.0));
    let placed = content(&tree, first);
    assert_eq!((placed.x, placed.y, placed.width), (px(50.0), 0, px(50.0)));
    let wrapped = content(&tree, second);
    assert_eq!((wrapped.x, wrapped.y), (0, rects[1].y));
    assert_eq!(rects[1].y, px(27.0));
}

#[test]
fn test_relative_inline_block_keeps_both_offsets() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let plain = page.element(p, "span", "ib");
    let _ = page.text(plain, "x");
    let shifted = page.element(p, "span", "ib r");
    let _ = page.text(shifted, "y");
    let tree = page.layout(
        ".ib { display: inline-block } .r { position: relative; left: 3px; top: 7px }",
    );
    let plain = content(&tree, plain);
    assert_eq!((plain.x, plain.y), (0, 0));
    let rect = content(&tree, shifted);
    assert_eq!((rect.x, rect.y), (px(13.0), px(7.0)));
    assert_eq!(lines(&tree, p)[0].height, px(27.0));
}

#[test]
fn test_inline_element_fragments_split_edges() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let _ = page.text(p, "aa ");
    let span = page.element(p, "span", "s");
    let _ = page.text(span, "bbbb cccc dddd");
    let tree = page.layout("p { width: 100px } .s { padding: 0 5px }");

    let fragments: Vec<BoxId> = tree.boxes_for_node(span).collect();
    assert_eq!(fragments.len(), 2);
    let head = &tree.get(fragments[0]).dimensions;
    assert_eq!((head.padding.left, head.padding.right), (px(5.0), 0));
    assert_eq!(head.content.x, px(25.0));
    let tail = &tree.get(fragments[1]).dimensions;
    assert_eq!((tail.padding.left, tail.padding.right), (0, px(5.0)));
    assert_eq!((tail.content.x, tail.content.width), (0, px(90.0)));
    assert_eq!(tail.content.y, px(25.0));
}

#[test]
fn test_empty_inline_element_reserves_its_edges() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let empty = page.element(p, "span", "e");
    let text = page.text(p, "b");
    let tree = page.layout(".e { padding: 0 5px; margin-left: 2px }");
    let fragment = content(&tree, empty);
    assert_eq!((fragment.x, fragment.width), (px(7.0), 0));
    assert_eq!(content(&tree, text).x, px(12.0));
    assert_eq!(lines(&tree, p).len(), 1);
}

#[test]
fn test_right_float_and_shrink_to_fit() {
    let mut page = Page::new();
    let body = page.body;
    let float = page.element(body, "div", "f");
    let _ = page.text(float, "aaaa");
    let tree = page.layout(".f { float: right }");
    let rect = content(&tree, float);
    assert_eq!(rect.width, px(40.0));
    assert_eq!(rect.x, px(160.0));
}

#[test]
fn test_clear_moves_below_float() {
    let mut page = Page::new();
    let body = page.body;
    let _float = page.element(body, "div", "f");
    let cleared = page.element(body, "div", "c");
    let tree = page.layout(".f { float: left; width: 50px; height: 30px } .c { clear: left; height: 10px }");
    assert_eq!(content(&tree, cleared).y, px(30.0));
}

#[test]
fn test_list_items_get_decimal_markers() {
    let mut page = Page::new();
    let body = page.body;
    let ul = page.element(body, "ul", "");
    let items: Vec<NodeId> = ["one", "two", "three"]
        .into_iter()
        .map(|label| {
            let li = page.element(ul, "li", "");
            let _ = page.text(li, label);
            li
        })
        .collect();
    let tree = page.layout("ul { padding-left: 40px; list-style-type: decimal }");

    let markers: Vec<String> = items
        .iter()
        .filter_map(|&li| tree.get(first_box(&tree, li)).marker())
        .map(|marker| marker.text.clone())
        .collect();
    assert_eq!(markers, vec!["1.", "2.", "3."]);

    let first = tree.get(first_box(&tree, items[0]));
    assert_eq!(first.dimensions.content.x, px(40.0));
    let marker = first.marker().unwrap();
    assert_eq!(marker.rect.x, px(10.0));
    assert_eq!(marker.rect.width, px(20.0));
}

#[test]
fn test_ordered_list_start_attribute() {
    let mut page = Page::new();
    let body = page.body;
    let ol = page
        .dom
        .append_element(body, ElementData::new("ol").with_attr("start", "3"));
    let first = page.element(ol, "li", "");
    let second = page.element(ol, "li", "");
    let tree = page.layout("ol { list-style-type: upper-roman }");
    let text = |li| tree.get(first_box(&tree, li)).marker().map(|m| m.text.clone());
    assert_eq!(text(first).as_deref(), Some("III."));
    assert_eq!(text(second).as_deref(), Some("IV."));
}

#[test]
fn test_inside_marker_indents_first_line() {
    let mut page = Page::new();
    let body = page.body;
    let ul = page.element(body, "ul", "");
    let li = page.element(ul, "li", "");
    let text = page.text(li, "one");
    let tree = page.layout("ul { list-style: inside decimal }");

    let item = tree.get(first_box(&tree, li));
    let marker = item.marker().unwrap();
    assert_eq!(marker.position, ListStylePosition::Inside);
    assert_eq!(marker.text, "1.");
    assert_eq!((marker.rect.x, marker.rect.width), (0, px(20.0)));
    assert_eq!(content(&tree, text).x, px(30.0));
}

#[test]
fn test_ordered_list_zero_and_negative_start() {
    let mut page = Page::new();
    let body = page.body;
    let ol = page
        .dom
        .append_element(body, ElementData::new("ol").with_attr("start", "-1"));
    let items: Vec<NodeId> = (0..3).map(|_| page.element(ol, "li", "")).collect();
    let tree = page.layout("ol { list-style-type: decimal }");
    let markers: Vec<String> = items
        .iter()
        .filter_map(|&li| tree.get(first_box(&tree, li)).marker())
        .map(|marker| marker.text.clone())
        .collect();
    assert_eq!(markers, vec!["-1.", "0.", "1."]);
}

#[test]
fn test_anonymous_blocks_wrap_inline_runs() {
    let mut page = Page::new();
    let body = page.body;
    let div = page.element(body, "div", "");
    let _ = page.text(div, "aa");
    let p = page.element(div, "p", "");
    let _ = page.text(div, "bb");
    let tree = page.layout("p { height: 10px }");

    let children = &tree.get(first_box(&tree, div)).children;
    let kinds: Vec<&str> = children.iter().map(|&id| tree.get(id).kind.name()).collect();
    assert_eq!(kinds, vec!["AnonymousBlock", "Block", "AnonymousBlock"]);
    assert_eq!(content(&tree, p).y, px(20.0));
    assert_eq!(tree.get(children[2]).dimensions.content.y, px(30.0));
}

#[test]
fn test_display_none_generates_no_boxes() {
    let mut page = Page::new();
    let body = page.body;
    let hidden = page.element(body, "div", "");
    let _ = page.text(hidden, "gone");
    let tree = page.layout("div { display: none }");
    assert_eq!(tree.boxes_for_node(hidden).count(), 0);
}

#[test]
fn test_absolute_against_viewport() {
    let mut page = Page::new();
    let body = page.body;
    let placed = page.element(body, "div", "tl");
    let anchored = page.element(body, "div", "br");
    let stretched = page.element(body, "div", "s");
    let tree = page.layout(
        ".tl { position: absolute; left: 10px; top: 20px; width: 50px; height: 5px }
         .br { position: absolute; right: 10px; bottom: 20px; width: 50px; height: 5px }
         .s { position: absolute; left: 10px; right: 20px; top: 0 }",
    );
    let rect = content(&tree, placed);
    assert_eq!((rect.x, rect.y), (px(10.0), px(20.0)));
    let rect = content(&tree, anchored);
    assert_eq!((rect.x, rect.y), (px(140.0), px(575.0)));
    assert_eq!(content(&tree, stretched).width, px(170.0));
    assert!(matches!(tree.get(first_box(&tree, placed)).kind, BoxKind::Absolute));
}

#[test]
fn test_absolute_inside_positioned_ancestor() {
    let mut page = Page::new();
    let body = page.body;
    let _spacer = page.element(body, "div", "spacer");
    let holder = page.element(body, "div", "rel");
    let inner = page.element(holder, "div", "abs");
    let tree = page.layout(
        ".spacer { height: 15px }
         .rel { position: relative; margin-left: 20px; height: 100px }
         .abs { position: absolute; left: 10px; top: 5px; width: 30px; height: 5px }",
    );
    let rect = content(&tree, inner);
    assert_eq!((rect.x, rect.y), (px(30.0), px(20.0)));
    let holder_box = first_box(&tree, holder);
    assert_eq!(tree.get(holder_box).absolutes, vec![first_box(&tree, inner)]);
}

#[test]
fn test_relative_shift_keeps_flow() {
    let mut page = Page::new();
    let body = page.body;
    let shifted = page.element(body, "div", "r");
    let next = page.element(body, "div", "n");
    let tree = page.layout(
        "div { height: 10px } .r { position: relative; left: 5px; top: 7px }",
    );
    let rect = content(&tree, shifted);
    assert_eq!((rect.x, rect.y), (px(5.0), px(7.0)));
    assert_eq!(content(&tree, next).y, px(10.0));
}

#[test]
fn test_fixed_uses_viewport() {
    let mut page = Page::new();
    let body = page.body;
    let holder = page.element(body, "div", "rel");
    let fixed = page.element(holder, "div", "fx");
    let tree = page.layout(
        ".rel { position: relative; margin-left: 30px; height: 40px }
         .fx { position: fixed; right: 10px; bottom: 0; width: 50px; height: 5px }",
    );
    let rect = content(&tree, fixed);
    assert_eq!((rect.x, rect.y), (px(140.0), px(595.0)));
    match &tree.get(tree.root()).kind {
        BoxKind::Root { fixed: boxes } => assert_eq!(boxes, &vec![first_box(&tree, fixed)]),
        other => panic!("root is {other:?}"),
    }
}

#[test]
fn test_dump_lists_every_box() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let _ = page.text(p, "hi");
    let tree = page.layout("");
    let dump = tree.dump(&page.dom);
    assert!(dump.starts_with("Root #document x=0 y=0 w=200 h=600\n"));
    assert!(dump.contains("  Block <html>"));
    assert!(dump.contains("Text x=0 y=5 w=20 h=10 \"hi\""));
}

#[test]
fn test_box_tree_serializes() {
    let mut page = Page::new();
    let body = page.body;
    let p = page.element(body, "p", "");
    let _ = page.text(p, "hi");
    let tree = page.layout("");
    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["boxes"][0]["kind"]["kind"], "Root");
    assert_eq!(json["boxes"].as_array().map(Vec::len), Some(tree.len()));
}
