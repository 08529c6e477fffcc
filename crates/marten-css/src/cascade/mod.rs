//! CSS Cascading and Style Computation
//!
//! [CSS Cascading and Inheritance Level 3](https://www.w3.org/TR/css-cascade-3/).
//!
//! Resolution runs in two phases over the document in tree order:
//!
//! 1. Each node's own declared values: inline style, then matching author
//!    rules, then the user-agent sheet for whatever is still unset.
//! 2. Each node's values: declared values win, `inherit` and unset inherited
//!    properties copy the already resolved parent value, everything else
//!    takes the registry default.

mod style_tree;

pub use style_tree::{StyleId, StyleNode, StyleTree};

use std::cmp::Reverse;

use marten_dom::{DomTree, NodeId, NodeType};

use crate::parser::{Parser, StyleRule, Stylesheet};
use crate::selector::Specificity;
use crate::style::{PropertyList, PropertyRegistry};

/// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// A rule that matched an element, with the specificity of its most specific
/// matching selector.
struct MatchedRule<'a> {
    specificity: Specificity,
    rule: &'a StyleRule,
}

/// Cascade resolver. Borrows the registry and an optional user-agent sheet.
#[derive(Debug, Clone, Copy)]
pub struct Cascade<'a> {
    registry: &'a PropertyRegistry,
    user_agent: Option<&'a Stylesheet>,
}

impl<'a> Cascade<'a> {
    /// A cascade with author styles only.
    #[must_use]
    pub const fn new(registry: &'a PropertyRegistry) -> Self {
        Self {
            registry,
            user_agent: None,
        }
    }

    /// Use `sheet` to fill properties the author cascade leaves unset.
    #[must_use]
    pub const fn with_user_agent(mut self, sheet: &'a Stylesheet) -> Self {
        self.user_agent = Some(sheet);
        self
    }

    /// Resolve styles for every document, element and text node.
    #[must_use]
    pub fn resolve(&self, dom: &DomTree, author: &Stylesheet) -> StyleTree {
        self.resolve_sheets(dom, &[author])
    }

    /// Resolve with several author sheets; later sheets come later in source
    /// order.
    #[must_use]
    pub fn resolve_sheets(&self, dom: &DomTree, author: &[&Stylesheet]) -> StyleTree {
        let author_rules: Vec<&StyleRule> = author
            .iter()
            .flat_map(|sheet| sheet.style_rules())
            .collect();
        let ua_rules: Vec<&StyleRule> = self
            .user_agent
            .map(|sheet| sheet.style_rules().collect())
            .unwrap_or_default();

        // STEP 1: Declared values, in tree order so parents come first.
        let mut tree = StyleTree::with_capacity(dom.len());
        for node in dom.descendants(NodeId::ROOT) {
            let declared = match dom.get(node).map(|n| &n.node_type) {
                Some(NodeType::Document | NodeType::Text(_)) => PropertyList::new(),
                Some(NodeType::Element(element)) => {
                    let mut declared = PropertyList::new();
                    if let Some(style) = element.style_attribute() {
                        let (inline, _, _) = Parser::new(style, self.registry).parse_declaration_list();
                        declared.merge(&inline, Specificity::INLINE);
                    }
                    apply_rules(&mut declared, &author_rules, dom, node);
                    if !ua_rules.is_empty() {
                        let mut ua = PropertyList::new();
                        apply_rules(&mut ua, &ua_rules, dom, node);
                        declared.fill_unset(&ua);
                    }
                    declared
                }
                Some(NodeType::Comment(_)) | None => continue,
            };
            let parent = dom
                .ancestors(node)
                .find_map(|ancestor| tree.style_for(ancestor));
            let _ = tree.push(node, parent, declared);
        }

        // STEP 2: Computed values.
        tree.resolve(self.registry);
        tree
    }
}

/// Feed matching rules into `declared` by descending specificity; rules of
/// equal specificity keep source order, so the later one replaces the
/// earlier one unless only the earlier is important.
fn apply_rules(declared: &mut PropertyList, rules: &[&StyleRule], dom: &DomTree, node: NodeId) {
    let mut matched: Vec<MatchedRule<'_>> = rules
        .iter()
        .filter_map(|rule| {
            rule.selectors
                .iter()
                .filter(|selector| selector.matches(dom, node))
                .map(|selector| selector.specificity)
                .max()
                .map(|specificity| MatchedRule { specificity, rule })
        })
        .collect();

    // Stable, so ties stay in source order.
    matched.sort_by_key(|m| Reverse(m.specificity));

    for m in matched {
        declared.merge(&m.rule.properties, m.specificity);
    }
}
