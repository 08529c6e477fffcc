//! Component values and the token stream they are consumed from.

use core::fmt;

use crate::error::LexError;
use crate::tokenizer::{Token, Tokenizer};

/// [§ 5.4.8 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
///
/// "A component value is one of the preserved tokens, a function, or a
/// simple block."
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A preserved token.
    Token(Token),
    /// A function and the component values up to its closing `)`.
    Function {
        /// Function name without the `(`.
        name: String,
        /// Arguments, including separators and whitespace.
        args: Vec<ComponentValue>,
    },
    /// A `{}`, `[]` or `()` block.
    Block {
        /// The opening character.
        open: char,
        /// Contents up to the matching closing token.
        contents: Vec<ComponentValue>,
    },
}

impl ComponentValue {
    /// The token if this is a preserved token.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Whether this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Token(Token::Whitespace))
    }
}

impl fmt::Display for ComponentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => f.write_str(&token.to_css()),
            Self::Function { name, args } => {
                write!(f, "{}", Token::Function(name.clone()).to_css())?;
                for arg in args {
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Self::Block { open, contents } => {
                write!(f, "{open}")?;
                for value in contents {
                    write!(f, "{value}")?;
                }
                write!(f, "{}", closing_char(*open))
            }
        }
    }
}

/// Serialize component values back to CSS text.
#[must_use]
pub fn serialize_component_values(values: &[ComponentValue]) -> String {
    values.iter().map(ToString::to_string).collect()
}

/// Tokenize `input` and group the tokens into component values. Malformed
/// lexemes are skipped.
#[must_use]
pub fn component_values(input: &str) -> Vec<ComponentValue> {
    let mut stream = TokenStream::new(input);
    let mut values = Vec::new();
    loop {
        let token = stream.next_token();
        if token.is_eof() {
            return values;
        }
        values.push(stream.consume_component_value(token));
    }
}

/// Trim leading and trailing whitespace tokens.
#[must_use]
pub fn trim_whitespace(values: &[ComponentValue]) -> &[ComponentValue] {
    let start = values
        .iter()
        .position(|v| !v.is_whitespace())
        .unwrap_or(values.len());
    let end = values
        .iter()
        .rposition(|v| !v.is_whitespace())
        .map_or(start, |i| i + 1);
    &values[start..end]
}

const fn closing_char(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Tokenizer wrapper that parks lexical errors until the consumer reaches a
/// declaration or rule boundary.
pub(crate) struct TokenStream {
    tokenizer: Tokenizer,
    lex_error: Option<LexError>,
}

impl TokenStream {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            lex_error: None,
        }
    }

    /// Next token. A malformed lexeme is recorded and skipped.
    pub(crate) fn next_token(&mut self) -> Token {
        loop {
            match self.tokenizer.next_token() {
                Ok(token) => return token,
                Err(error) => {
                    if self.lex_error.is_none() {
                        self.lex_error = Some(error);
                    }
                }
            }
        }
    }

    pub(crate) fn push_back(&mut self, token: Token) {
        self.tokenizer.push_back(token);
    }

    /// The first lexical error since the last call.
    pub(crate) fn take_lex_error(&mut self) -> Option<LexError> {
        self.lex_error.take()
    }

    /// Next token that is not whitespace.
    pub(crate) fn next_non_whitespace(&mut self) -> Token {
        loop {
            let token = self.next_token();
            if !token.is_whitespace() {
                return token;
            }
        }
    }

    /// [§ 5.4.8 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    ///
    /// `token` has already been read.
    pub(crate) fn consume_component_value(&mut self, token: Token) -> ComponentValue {
        match token {
            Token::LeftBrace => ComponentValue::Block {
                open: '{',
                contents: self.consume_block_contents(&Token::RightBrace),
            },
            Token::LeftBracket => ComponentValue::Block {
                open: '[',
                contents: self.consume_block_contents(&Token::RightBracket),
            },
            Token::LeftParen => ComponentValue::Block {
                open: '(',
                contents: self.consume_block_contents(&Token::RightParen),
            },
            Token::Function(name) => ComponentValue::Function {
                name,
                args: self.consume_block_contents(&Token::RightParen),
            },
            other => ComponentValue::Token(other),
        }
    }

    /// [§ 5.4.9 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    ///
    /// Reads up to and including `close`. An unclosed block ends at EOF.
    pub(crate) fn consume_block_contents(&mut self, close: &Token) -> Vec<ComponentValue> {
        let mut contents = Vec::new();
        loop {
            let token = self.next_token();
            if token == *close || token.is_eof() {
                return contents;
            }
            contents.push(self.consume_component_value(token));
        }
    }
}
