//! CSS tokenizer, parser, selector matching, cascade, layout and text reflow for
//! the marten engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - Pull tokenizer with one token of pushback
//!   - Comment skipping and escape sequences
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Style rules, at-rules and `style=""` declaration lists
//!   - Recovery at the next `;` or `}` after a bad declaration
//!
//! - **CSS Selectors** ([Selectors Level 3](https://www.w3.org/TR/selectors-3/))
//!   - Type, class, ID, attribute and universal selectors
//!   - Descendant, child and sibling combinators
//!   - Structural pseudo-classes and specificity
//!
//! - **Properties and Cascade** ([CSS Cascading Level 3](https://www.w3.org/TR/css-cascade-3/))
//!   - Registry of longhands with shorthand expansion
//!   - `inherit`, `!important` and source-order precedence
//!   - Two-phase style resolution into a [`StyleTree`]
//!
//! - **Layout** ([CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html))
//!   - Block and inline flow, floats, positioning and list markers
//!   - Fixed-point geometry in a [`BoxTree`]
//!
//! - **Text** ([CSS Text Level 3](https://www.w3.org/TR/css-text-3/))
//!   - Line breaking against pluggable [`FontMetrics`]
//!
//! # Not Implemented
//!
//! - Tables, multi-column layout and transitions
//! - Bidirectional text
//! - Media queries and `@import`

/// CSS cascade and style computation per [CSS Cascading Level 3](https://www.w3.org/TR/css-cascade-3/).
pub mod cascade;
/// Lexing, parsing and invariant errors.
pub mod error;
/// Box tree and layout per [CSS 2.1 § 9](https://www.w3.org/TR/CSS2/visuren.html).
pub mod layout;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// CSS selector parsing and matching per [Selectors Level 3](https://www.w3.org/TR/selectors-3/).
pub mod selector;
/// Properties, values and the property registry.
pub mod style;
/// Font metrics and line breaking.
pub mod text;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// User-agent stylesheet per [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html).
pub mod ua_stylesheet;

pub use cascade::{Cascade, StyleId, StyleNode, StyleTree};
pub use error::{InvariantViolation, LexError, ParseError};
pub use layout::{BoxId, BoxKind, BoxTree, LayoutBox, LayoutConfig, layout_document};
pub use parser::{Declaration, Parser, Rule, StyleRule, Stylesheet, parse_stylesheet};
pub use selector::{Selector, Specificity};
pub use style::{Property, PropertyList, PropertyRegistry};
pub use text::{FixedWidthMetrics, FontMetrics};
pub use tokenizer::{Token, Tokenizer, tokenize};
pub use ua_stylesheet::ua_stylesheet;

use marten_dom::{DomTree, NodeId};

/// [HTML Standard § 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
///
/// Extract CSS text from all `<style>` elements in the DOM tree, in document
/// order.
#[must_use]
pub fn extract_style_content(tree: &DomTree) -> String {
    let mut css = String::new();
    collect_style_content(tree, tree.root(), &mut css);
    css
}

fn collect_style_content(tree: &DomTree, id: NodeId, css: &mut String) {
    if tree.as_element(id).is_some_and(|data| data.is("style")) {
        for &child in tree.children(id) {
            if let Some(text) = tree.as_text(child) {
                css.push_str(text);
                css.push('\n');
            }
        }
        return;
    }
    for &child in tree.children(id) {
        collect_style_content(tree, child, css);
    }
}
