//! CSS token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! "The output of the tokenization step is a stream of zero or more of the
//! following tokens: `<ident-token>`, `<function-token>`, `<at-keyword-token>`,
//! `<hash-token>`, `<string-token>`, `<url-token>`, `<delim-token>`,
//! `<number-token>`, `<percentage-token>`, `<dimension-token>`,
//! `<whitespace-token>`, `<CDO-token>`, `<CDC-token>`, `<colon-token>`,
//! `<semicolon-token>`, `<comma-token>`, `<[-token>`, `<]-token>`, `<(-token>`,
//! `<)-token>`, `<{-token>`, and `<}-token>`."
//!
//! Bad strings and bad urls are not tokens here; the tokenizer reports them
//! as [`LexError`](crate::error::LexError) instead.

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// "A `<number-token>` has a type flag set to either 'integer' or 'number'."
///
/// The literal commits to [`Numeric::Float`] when it contains a decimal point
/// or an exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// "integer"
    Integer(i64),
    /// "number"
    Float(f64),
}

impl Numeric {
    /// The value as a float, whatever the type flag.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Whether the literal was written without a decimal point or exponent.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // Keep the decimal point so the literal reads back as a float.
            Self::Float(v) if v.is_finite() && v.fract().abs() < f64::EPSILON => {
                write!(f, "{v:.1}")
            }
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// A CSS token. Each variant corresponds to a token type in the railroad
/// diagrams of CSS Syntax Level 3.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// "`<ident-token>`"
    Ident(String),

    /// "`<function-token>`": the name, with the `(` already consumed.
    Function(String),

    /// "`<at-keyword-token>`": the name without the `@`.
    AtKeyword(String),

    /// "`<hash-token>`"
    Hash {
        /// Value without the `#`.
        value: String,
        /// "type flag set to 'id'" when the value would start an ident sequence.
        is_id: bool,
    },

    /// "`<string-token>`": the unescaped contents without quotes.
    String(String),

    /// "`<url-token>`": an unquoted `url(...)`.
    Url(String),

    /// "`<delim-token>`"
    Delim(char),

    /// "`<number-token>`"
    Number(Numeric),

    /// "`<percentage-token>`"
    Percentage(Numeric),

    /// "`<dimension-token>`"
    Dimension {
        /// "a numeric value"
        value: Numeric,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`": a run of one or more whitespace code points.
    Whitespace,

    /// "`<CDO-token>`" (`<!--`)
    CDO,

    /// "`<CDC-token>`" (`-->`)
    CDC,

    /// `:`
    Colon,

    /// `;`
    Semicolon,

    /// `,`
    Comma,

    /// `[`
    LeftBracket,

    /// `]`
    RightBracket,

    /// `(`
    LeftParen,

    /// `)`
    RightParen,

    /// `{`
    LeftBrace,

    /// `}`
    RightBrace,

    /// End of input. A sentinel, not an error.
    EOF,
}

impl Token {
    /// Create a new ident token.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Ident(value.into())
    }

    /// Create a new dimension token.
    #[must_use]
    pub fn dimension(value: Numeric, unit: impl Into<String>) -> Self {
        Self::Dimension {
            value,
            unit: unit.into(),
        }
    }

    /// Returns true if this is the end-of-input sentinel.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }

    /// Returns true for an ident that matches `keyword` ignoring ASCII case.
    #[must_use]
    pub fn is_ident(&self, keyword: &str) -> bool {
        matches!(self, Self::Ident(v) if v.eq_ignore_ascii_case(keyword))
    }

    /// Serialize back to CSS source text. Concatenating the serializations of
    /// a token stream re-tokenizes to the same stream.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Ident(v) => escape_ident(v),
            Self::Function(v) => format!("{}(", escape_ident(v)),
            Self::AtKeyword(v) => format!("@{}", escape_ident(v)),
            Self::Hash { value, .. } => format!("#{}", escape_ident(value)),
            Self::String(v) => {
                let mut out = String::with_capacity(v.len() + 2);
                out.push('"');
                for c in v.chars() {
                    match c {
                        '"' | '\\' => {
                            out.push('\\');
                            out.push(c);
                        }
                        '\n' => out.push_str("\\a "),
                        c => out.push(c),
                    }
                }
                out.push('"');
                out
            }
            Self::Url(v) => format!("url({v})"),
            Self::Delim(c) => c.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Percentage(n) => format!("{n}%"),
            Self::Dimension { value, unit } => {
                // "1e3" style units would re-tokenize as an exponent.
                let mut chars = unit.chars();
                match chars.next() {
                    Some(first @ ('e' | 'E')) => {
                        format!("{value}\\{:x} {}", u32::from(first), chars.as_str())
                    }
                    _ => format!("{value}{unit}"),
                }
            }
            Self::Whitespace => " ".to_string(),
            Self::CDO => "<!--".to_string(),
            Self::CDC => "-->".to_string(),
            Self::Colon => ":".to_string(),
            Self::Semicolon => ";".to_string(),
            Self::Comma => ",".to_string(),
            Self::LeftBracket => "[".to_string(),
            Self::RightBracket => "]".to_string(),
            Self::LeftParen => "(".to_string(),
            Self::RightParen => ")".to_string(),
            Self::LeftBrace => "{".to_string(),
            Self::RightBrace => "}".to_string(),
            Self::EOF => String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EOF => f.write_str("end of input"),
            Self::Whitespace => f.write_str("whitespace"),
            other => write!(f, "'{}'", other.to_css()),
        }
    }
}

/// Serialize a token stream back to CSS text.
#[must_use]
pub fn serialize_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_css).collect()
}

fn escape_ident(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        let plain = c.is_ascii_alphabetic()
            || c == '_'
            || c == '-'
            || !c.is_ascii()
            || (i > 0 && c.is_ascii_digit());
        if plain {
            out.push(c);
        } else if c.is_ascii_hexdigit() {
            out.push_str(&format!("\\{:x} ", u32::from(c)));
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
