//! CSS rule parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the
//! tokenization stage." Tokens are pulled from the [`Tokenizer`](crate::tokenizer::Tokenizer)
//! one at a time; a bad declaration is dropped and parsing resumes at the
//! next `;` or `}`.

mod component;
mod rules;

pub use component::{
    ComponentValue, component_values, serialize_component_values, trim_whitespace,
};
pub use rules::{
    AtRule, Declaration, Parser, Rule, StyleRule, Stylesheet, parse_style_attribute,
    parse_stylesheet,
};
