//! CSS tokenizer module.

/// Pull tokenizer with one token of pushback.
pub mod lexer;
/// CSS token types per [CSS Syntax Level 3 § 4](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod token;

pub use lexer::{Tokenizer, tokenize};
pub use token::{Numeric, Token, serialize_tokens};
