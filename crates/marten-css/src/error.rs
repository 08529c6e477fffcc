//! Error kinds for the styling pipeline.
//!
//! - [`LexError`] and [`ParseError`] are recoverable. The parser drops the
//!   offending declaration or rule, records the error on the stylesheet and
//!   keeps going.
//! - [`InvariantViolation`] is a defect in the engine itself. It is never
//!   returned; [`InvariantViolation::raise`] aborts with a diagnostic.

use thiserror::Error;

/// A malformed lexeme. The tokenizer resynchronizes after the bad lexeme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A string hit a newline or the end of input before its closing quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString {
        /// Character offset of the opening quote.
        offset: usize,
    },

    /// A `\` that does not start a valid escape.
    #[error("invalid escape at offset {offset}")]
    BadEscape {
        /// Character offset of the backslash.
        offset: usize,
    },

    /// An unquoted `url(` containing quotes, parentheses or inner whitespace.
    #[error("malformed url() starting at offset {offset}")]
    BadUrl {
        /// Character offset of the `url(` function name.
        offset: usize,
    },
}

/// An unexpected token in a grammar position.
///
/// Recoverable at declaration granularity: the parser resynchronizes at the
/// next `;` or `}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The declaration or rule contained a malformed lexeme.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token that cannot appear here.
    #[error("unexpected {found} in {context}")]
    UnexpectedToken {
        /// Grammar production being parsed.
        context: &'static str,
        /// Serialized form of the offending token.
        found: String,
    },

    /// A declaration name not followed by `:`.
    #[error("expected ':' after '{property}'")]
    MissingColon {
        /// The property name that was read.
        property: String,
    },

    /// Something other than an identifier where a name was required.
    #[error("expected an identifier, found {found}")]
    ExpectedIdent {
        /// Serialized form of the offending token.
        found: String,
    },

    /// A property name the registry does not know.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// A known property with a value its grammar rejects.
    #[error("invalid value '{value}' for '{property}'")]
    InvalidValue {
        /// Property name as written.
        property: String,
        /// Serialized value.
        value: String,
    },

    /// A selector list that contains an unparsable selector.
    #[error("invalid selector '{0}'")]
    InvalidSelector(String),

    /// `@import`, `@media` and other at-rules that would nest or fetch rules.
    #[error("unsupported at-rule @{0}")]
    UnsupportedAtRule(String),

    /// An at-keyword inside a qualified rule prelude.
    #[error("at-rule @{0} inside a rule prelude")]
    AtRuleInPrelude(String),

    /// The input ended in the middle of a construct.
    #[error("unexpected end of input in {0}")]
    UnexpectedEof(&'static str),
}

/// A broken internal invariant: out-of-range arena index, a property holding
/// a value of the wrong type, a missing root box.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invariant violated in {component}: {detail}")]
pub struct InvariantViolation {
    /// Subsystem that detected the violation.
    pub component: &'static str,
    /// Human readable diagnostic.
    pub detail: String,
}

impl InvariantViolation {
    /// Create a violation report.
    #[must_use]
    pub fn new(component: &'static str, detail: impl Into<String>) -> Self {
        Self {
            component,
            detail: detail.into(),
        }
    }

    /// Abort with this diagnostic.
    ///
    /// # Panics
    ///
    /// Always.
    #[track_caller]
    pub fn raise(self) -> ! {
        panic!("{self}")
    }
}
