//! Stylesheet and declaration-list parsing.

use core::fmt;

use marten_common::warning::warn_once;

use super::component::{ComponentValue, TokenStream, serialize_component_values, trim_whitespace};
use crate::error::ParseError;
use crate::selector::{Selector, Specificity, parse_selector_list};
use crate::style::{PropertyList, PropertyRegistry};
use crate::tokenizer::Token;

/// At-rules that would nest or import further rules.
const UNSUPPORTED_AT_RULES: &[&str] = &["import", "media", "supports"];

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A declaration as written, before shorthand expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Property name as written.
    pub name: String,
    /// Value without surrounding whitespace and without `!important`.
    pub value: Vec<ComponentValue>,
    /// Whether the declaration ended in `!important`.
    pub important: bool,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            Token::ident(self.name.as_str()).to_css(),
            serialize_component_values(&self.value)
        )?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

/// A qualified rule with a parsed selector list.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// Selectors of the prelude.
    pub selectors: Vec<Selector>,
    /// Valid declarations as written.
    pub declarations: Vec<Declaration>,
    /// Declarations expanded to longhands, weighted with
    /// [`Specificity::ZERO`]. The cascade re-weights them per matching
    /// selector.
    pub properties: PropertyList,
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selector}")?;
        }
        f.write_str(" {")?;
        for declaration in &self.declarations {
            write!(f, " {declaration};")?;
        }
        f.write_str(" }")
    }
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
///
/// Kept as read; nothing interprets the prelude or block.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// Name without the `@`.
    pub name: String,
    /// Prelude component values.
    pub prelude: Vec<ComponentValue>,
    /// Block contents, if the rule had a block.
    pub block: Option<Vec<ComponentValue>>,
}

/// A top-level rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// A style rule.
    Style(StyleRule),
    /// An uninterpreted at-rule.
    At(AtRule),
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    /// Rules in source order.
    pub rules: Vec<Rule>,
    /// Every recoverable error hit while parsing.
    pub errors: Vec<ParseError>,
}

impl Stylesheet {
    /// Style rules in source order.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::Style(style) => Some(style),
            Rule::At(_) => None,
        })
    }
}

/// Streaming parser from CSS text to rules. Each declaration value goes
/// through the registry as soon as it is read.
pub struct Parser<'r> {
    stream: TokenStream,
    registry: &'r PropertyRegistry,
    errors: Vec<ParseError>,
}

impl<'r> Parser<'r> {
    /// Create a parser over `css`.
    #[must_use]
    pub fn new(css: &str, registry: &'r PropertyRegistry) -> Self {
        Self {
            stream: TokenStream::new(css),
            registry,
            errors: Vec::new(),
        }
    }

    /// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    ///
    /// Invalid rules and declarations are dropped and recorded in
    /// [`Stylesheet::errors`]; everything else is kept.
    #[must_use]
    pub fn parse_stylesheet(mut self) -> Stylesheet {
        let mut rules = Vec::new();
        loop {
            match self.stream.next_token() {
                // "<whitespace-token>: Do nothing."
                // "<CDO-token>, <CDC-token>: If the top-level flag is set, do nothing."
                Token::Whitespace | Token::CDO | Token::CDC => {}
                Token::EOF => break,
                Token::AtKeyword(name) => {
                    if let Some(rule) = self.consume_at_rule(name) {
                        rules.push(Rule::At(rule));
                    }
                }
                other => {
                    self.stream.push_back(other);
                    if let Some(rule) = self.consume_qualified_rule() {
                        rules.push(Rule::Style(rule));
                    }
                }
            }
        }
        Stylesheet {
            rules,
            errors: self.errors,
        }
    }

    /// [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)
    ///
    /// Parse the contents of a `style` attribute. Every property gets
    /// [`Specificity::INLINE`].
    #[must_use]
    pub fn parse_declaration_list(mut self) -> (PropertyList, Vec<Declaration>, Vec<ParseError>) {
        let (properties, declarations) = self.consume_declarations(Specificity::INLINE, false);
        (properties, declarations, self.errors)
    }

    fn error(&mut self, error: ParseError) {
        match &error {
            ParseError::UnknownProperty(name) => {
                warn_once("css", &format!("unknown property '{name}' ignored"));
            }
            ParseError::UnsupportedAtRule(name) => {
                warn_once("css", &format!("@{name} is not supported"));
            }
            other => warn_once("css", &format!("{other}; dropped")),
        }
        self.errors.push(error);
    }

    fn consume_at_rule(&mut self, name: String) -> Option<AtRule> {
        let mut prelude = Vec::new();
        let block = loop {
            match self.stream.next_token() {
                Token::Semicolon | Token::EOF => break None,
                Token::LeftBrace => {
                    break Some(self.stream.consume_block_contents(&Token::RightBrace));
                }
                other => prelude.push(self.stream.consume_component_value(other)),
            }
        };

        if let Some(error) = self.stream.take_lex_error() {
            self.error(error.into());
            return None;
        }
        if UNSUPPORTED_AT_RULES
            .iter()
            .any(|unsupported| name.eq_ignore_ascii_case(unsupported))
        {
            self.error(ParseError::UnsupportedAtRule(name));
            return None;
        }
        Some(AtRule {
            name,
            prelude: trim_whitespace(&prelude).to_vec(),
            block,
        })
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn consume_qualified_rule(&mut self) -> Option<StyleRule> {
        // STEP 1: The prelude runs up to the `{`.
        let mut prelude = Vec::new();
        let mut at_keyword = None;
        loop {
            match self.stream.next_token() {
                Token::LeftBrace => break,
                Token::EOF => {
                    // "This is a parse error. Return nothing."
                    self.error(ParseError::UnexpectedEof("rule prelude"));
                    return None;
                }
                Token::AtKeyword(name) => {
                    if at_keyword.is_none() {
                        at_keyword = Some(name.clone());
                    }
                    prelude.push(ComponentValue::Token(Token::AtKeyword(name)));
                }
                other => prelude.push(self.stream.consume_component_value(other)),
            }
        }

        // STEP 2: A bad prelude drops the rule, block included.
        let prelude_error = if let Some(error) = self.stream.take_lex_error() {
            Some(ParseError::from(error))
        } else if let Some(name) = at_keyword {
            Some(ParseError::AtRuleInPrelude(name))
        } else {
            None
        };
        if let Some(error) = prelude_error {
            let _ = self.stream.consume_block_contents(&Token::RightBrace);
            let _ = self.stream.take_lex_error();
            self.error(error);
            return None;
        }

        let selectors = match parse_selector_list(&prelude) {
            Ok(selectors) => selectors,
            Err(error) => {
                let _ = self.stream.consume_block_contents(&Token::RightBrace);
                let _ = self.stream.take_lex_error();
                self.error(error);
                return None;
            }
        };

        // STEP 3: The declaration block.
        let (properties, declarations) = self.consume_declarations(Specificity::ZERO, true);
        Some(StyleRule {
            selectors,
            declarations,
            properties,
        })
    }

    /// [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    ///
    /// In a block, stops after the closing `}`; otherwise at the end of input.
    fn consume_declarations(
        &mut self,
        specificity: Specificity,
        in_block: bool,
    ) -> (PropertyList, Vec<Declaration>) {
        let mut properties = PropertyList::new();
        let mut declarations = Vec::new();
        loop {
            match self.stream.next_token() {
                // "<whitespace-token>, <semicolon-token>: Do nothing."
                Token::Whitespace | Token::Semicolon => {}
                Token::EOF => {
                    if in_block {
                        self.error(ParseError::UnexpectedEof("declaration block"));
                    }
                    break;
                }
                Token::RightBrace if in_block => break,
                Token::Ident(name) => {
                    let declaration = match self.consume_declaration(name) {
                        Ok(declaration) => declaration,
                        Err(error) => {
                            self.error(error);
                            continue;
                        }
                    };
                    match self.registry.expand(&declaration.name, &declaration.value) {
                        Ok(longhands) => {
                            for (property, value) in longhands {
                                properties.add_property(
                                    property,
                                    value,
                                    specificity,
                                    declaration.important,
                                );
                            }
                            declarations.push(declaration);
                        }
                        Err(error) => self.error(error),
                    }
                }
                // "anything else: This is a parse error. ... consume a component
                // value and throw away the returned value."
                other => {
                    self.error(ParseError::UnexpectedToken {
                        context: "declaration list",
                        found: other.to_string(),
                    });
                    let _ = self.stream.consume_component_value(other);
                    self.skip_declaration();
                    let _ = self.stream.take_lex_error();
                }
            }
        }
        (properties, declarations)
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    ///
    /// The name has been read. Always leaves the stream at the next
    /// declaration boundary, whether it succeeds or not.
    fn consume_declaration(&mut self, name: String) -> Result<Declaration, ParseError> {
        // "If the next input token is anything other than a <colon-token>, this
        // is a parse error. Return nothing."
        let colon = self.stream.next_non_whitespace();
        if colon != Token::Colon {
            self.stream.push_back(colon);
            self.skip_declaration();
            let _ = self.stream.take_lex_error();
            return Err(ParseError::MissingColon { property: name });
        }

        let mut value = Vec::new();
        loop {
            match self.stream.next_token() {
                Token::Semicolon => break,
                token @ (Token::RightBrace | Token::EOF) => {
                    self.stream.push_back(token);
                    break;
                }
                other => value.push(self.stream.consume_component_value(other)),
            }
        }

        if let Some(error) = self.stream.take_lex_error() {
            return Err(error.into());
        }

        let (value, important) = strip_important(trim_whitespace(&value));
        Ok(Declaration {
            name,
            value: value.to_vec(),
            important,
        })
    }

    /// Drop component values up to the next `;` (consumed) or `}` / EOF
    /// (left in the stream).
    fn skip_declaration(&mut self) {
        loop {
            match self.stream.next_token() {
                Token::Semicolon => return,
                token @ (Token::RightBrace | Token::EOF) => {
                    self.stream.push_back(token);
                    return;
                }
                other => {
                    let _ = self.stream.consume_component_value(other);
                }
            }
        }
    }
}

/// [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if it has a !important annotation, i.e. if
/// the last two (non-whitespace, non-comment) tokens in its value are a
/// <delim-token> with the value "!" followed by an <ident-token> with a value
/// that is an ASCII case-insensitive match for "important"."
fn strip_important(value: &[ComponentValue]) -> (&[ComponentValue], bool) {
    let Some((last, rest)) = value.split_last() else {
        return (value, false);
    };
    if !last.as_token().is_some_and(|t| t.is_ident("important")) {
        return (value, false);
    }
    let rest = trim_whitespace(rest);
    match rest.split_last() {
        Some((ComponentValue::Token(Token::Delim('!')), before)) => (trim_whitespace(before), true),
        _ => (value, false),
    }
}

/// Parse a whole stylesheet.
#[must_use]
pub fn parse_stylesheet(css: &str, registry: &PropertyRegistry) -> Stylesheet {
    Parser::new(css, registry).parse_stylesheet()
}

/// Parse the contents of a `style` attribute, keeping only the properties.
#[must_use]
pub fn parse_style_attribute(css: &str, registry: &PropertyRegistry) -> PropertyList {
    let (properties, _, _) = Parser::new(css, registry).parse_declaration_list();
    properties
}
