//! Tests for tree construction, traversal and the JSON document description.

use marten_dom::{DocumentDescription, DomTree, ElementData, NodeId};

fn sample_tree() -> (DomTree, NodeId, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let body = tree.append_element(html, ElementData::new("body"));
    let a = tree.append_element(body, ElementData::new("p").with_attr("class", "x y"));
    let _ = tree.append_text(a, "hello ");
    let b = tree.append_element(body, ElementData::new("p").with_attr("id", "second"));
    let _ = tree.append_text(b, "world");
    (tree, body, a, b)
}

#[test]
fn test_sibling_links() {
    let (tree, body, a, b) = sample_tree();
    assert_eq!(tree.children(body), &[a, b]);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.preceding_siblings(b).collect::<Vec<_>>(), vec![a]);
    assert_eq!(tree.following_siblings(a).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn test_ancestors_stop_at_document() {
    let (tree, body, a, _) = sample_tree();
    let chain: Vec<_> = tree.ancestors(a).collect();
    assert_eq!(chain.first(), Some(&body));
    assert_eq!(chain.last(), Some(&NodeId::ROOT));
}

#[test]
fn test_element_attributes() {
    let (tree, _, a, b) = sample_tree();
    let first = tree.as_element(a).unwrap();
    assert_eq!(first.classes().collect::<Vec<_>>(), vec!["x", "y"]);
    assert!(first.has_class("y"));
    assert!(!first.has_class("z"));
    assert_eq!(tree.as_element(b).unwrap().id(), Some("second"));
}

#[test]
fn test_descendants_are_preorder() {
    let (tree, body, a, b) = sample_tree();
    let order: Vec<_> = tree.descendants(body).collect();
    assert_eq!(order[0], body);
    assert_eq!(order[1], a);
    assert_eq!(order[3], b);
    assert_eq!(tree.text_content(body), "hello world");
}

#[test]
fn test_from_description() {
    let json = r#"{
        "children": [
            { "tag": "html", "children": [
                { "tag": "body", "children": [
                    { "comment": "skip me" },
                    { "tag": "p", "attrs": { "style": "color: red" }, "children": ["text"] }
                ]}
            ]}
        ]
    }"#;
    let description: DocumentDescription = serde_json::from_str(json).unwrap();
    let tree = DomTree::from_description(&description);

    let html = tree.document_element().unwrap();
    assert!(tree.as_element(html).unwrap().is("HTML"));
    let body = tree.children(html)[0];
    let p = tree.following_element_siblings(tree.children(body)[0]).next().unwrap();
    assert_eq!(tree.as_element(p).unwrap().style_attribute(), Some("color: red"));
    assert_eq!(tree.text_content(p), "text");
}
