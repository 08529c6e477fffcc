//! CSS selector parsing, matching and specificity
//!
//! [Selectors Level 3](https://www.w3.org/TR/selectors-3/), restricted to
//! what a static document can answer: dynamic pseudo-classes parse but never
//! match.

use core::fmt;
use core::ops::Add;

use marten_common::warning::warn_once;
use marten_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::error::ParseError;
use crate::parser::{ComponentValue, component_values, serialize_component_values, trim_whitespace};
use crate::tokenizer::{Numeric, Token};

/// [§ 9 Calculating a selector's specificity](https://www.w3.org/TR/selectors-3/#specificity)
///
/// "count the number of ID selectors in the selector (= a), count the number
/// of class selectors, attributes selectors, and pseudo-classes in the
/// selector (= b), count the number of type selectors and pseudo-elements in
/// the selector (= c)"
///
/// Compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// No selector weight at all.
    pub const ZERO: Self = Self(0, 0, 0);

    /// Weight of declarations from a `style` attribute; above every selector.
    pub const INLINE: Self = Self(u32::MAX, u32::MAX, u32::MAX);
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

/// [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// "A B": B is an arbitrary descendant of some ancestor A.
    Descendant,
    /// "A > B": B is a child of A.
    Child,
    /// "A + B": B immediately follows A among element siblings.
    NextSibling,
    /// "A ~ B": B follows A, not necessarily immediately.
    SubsequentSibling,
}

impl Combinator {
    const fn as_css(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => " > ",
            Self::NextSibling => " + ",
            Self::SubsequentSibling => " ~ ",
        }
    }
}

/// [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors-3/#attribute-selectors)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOperator {
    /// `[att]`
    Exists,
    /// `[att=val]`
    Equals,
    /// `[att^=val]`
    Prefix,
    /// `[att$=val]`
    Suffix,
    /// `[att*=val]`
    Substring,
    /// `[att~=val]`: one of the whitespace separated words.
    Includes,
    /// `[att|=val]`: exactly `val` or `val` followed by `-`.
    DashMatch,
}

impl AttributeOperator {
    const fn as_css(self) -> &'static str {
        match self {
            Self::Exists => "",
            Self::Equals => "=",
            Self::Prefix => "^=",
            Self::Suffix => "$=",
            Self::Substring => "*=",
            Self::Includes => "~=",
            Self::DashMatch => "|=",
        }
    }

    fn matches(self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Exists => true,
            Self::Equals => actual == expected,
            // "If 'val' is the empty string then the selector does not represent anything."
            Self::Prefix => !expected.is_empty() && actual.starts_with(expected),
            Self::Suffix => !expected.is_empty() && actual.ends_with(expected),
            Self::Substring => !expected.is_empty() && actual.contains(expected),
            Self::Includes => actual.split_ascii_whitespace().any(|word| word == expected),
            Self::DashMatch => dash_match(actual, expected),
        }
    }
}

/// An attribute condition. Names match ASCII case-insensitively, values
/// case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFilter {
    /// Attribute name.
    pub name: String,
    /// Comparison.
    pub operator: AttributeOperator,
    /// Value to compare against; empty for [`AttributeOperator::Exists`].
    pub value: String,
}

/// Argument of `:nth-child()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NthIndex {
    /// `odd`: 1, 3, 5, ...
    Odd,
    /// `even`: 2, 4, 6, ...
    Even,
    /// A 1-based position.
    Index(u32),
}

/// [§ 6.6 Pseudo-classes](https://www.w3.org/TR/selectors-3/#pseudo-classes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {
    /// `:first-child`
    FirstChild,
    /// `:last-child`
    LastChild,
    /// `:only-child`
    OnlyChild,
    /// `:first-of-type`
    FirstOfType,
    /// `:last-of-type`
    LastOfType,
    /// `:empty`: no element children and no non-blank text.
    Empty,
    /// `:root`: the document element.
    Root,
    /// `:link`: `a` or `area` with an `href`.
    Link,
    /// `:visited`; never matches.
    Visited,
    /// `:hover`; never matches.
    Hover,
    /// `:active`; never matches.
    Active,
    /// `:focus`; never matches.
    Focus,
    /// `:not(type)`: the element is not of the given type.
    Not(String),
    /// `:lang(code)`: nearest `lang` attribute dash-matches `code`.
    Lang(String),
    /// `:nth-child(...)`
    NthChild(NthIndex),
    /// Anything else, including pseudo-elements. Never matches.
    Unknown(String),
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstChild => f.write_str(":first-child"),
            Self::LastChild => f.write_str(":last-child"),
            Self::OnlyChild => f.write_str(":only-child"),
            Self::FirstOfType => f.write_str(":first-of-type"),
            Self::LastOfType => f.write_str(":last-of-type"),
            Self::Empty => f.write_str(":empty"),
            Self::Root => f.write_str(":root"),
            Self::Link => f.write_str(":link"),
            Self::Visited => f.write_str(":visited"),
            Self::Hover => f.write_str(":hover"),
            Self::Active => f.write_str(":active"),
            Self::Focus => f.write_str(":focus"),
            Self::Not(tag) => write!(f, ":not({tag})"),
            Self::Lang(code) => write!(f, ":lang({code})"),
            Self::NthChild(NthIndex::Odd) => f.write_str(":nth-child(odd)"),
            Self::NthChild(NthIndex::Even) => f.write_str(":nth-child(even)"),
            Self::NthChild(NthIndex::Index(n)) => write!(f, ":nth-child({n})"),
            Self::Unknown(name) => write!(f, ":{name}"),
        }
    }
}

/// One condition of a simple selector after its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `[...]`
    Attribute(AttributeFilter),
    /// `:pseudo`
    Pseudo(PseudoClass),
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", Token::Hash { value: id.clone(), is_id: true }.to_css()),
            Self::Class(class) => write!(f, ".{}", Token::ident(class.as_str()).to_css()),
            Self::Attribute(attr) => {
                write!(f, "[{}", Token::ident(attr.name.as_str()).to_css())?;
                if attr.operator != AttributeOperator::Exists {
                    write!(
                        f,
                        "{}{}",
                        attr.operator.as_css(),
                        Token::String(attr.value.clone()).to_css()
                    )?;
                }
                f.write_str("]")
            }
            Self::Pseudo(pseudo) => write!(f, "{pseudo}"),
        }
    }
}

/// [§ 4 Selector syntax](https://www.w3.org/TR/selectors-3/#selector-syntax)
///
/// "A sequence of simple selectors is a chain of simple selectors that are
/// not separated by a combinator. It always begins with a type selector or a
/// universal selector." Here the type is optional and `*` is stored as no
/// type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    /// Element type; `None` for `*` or an implied universal selector.
    pub element: Option<String>,
    /// Id, class, attribute and pseudo-class conditions, in source order.
    pub filters: Vec<Filter>,
}

impl SimpleSelector {
    /// Specificity of this part alone.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity(0, 0, u32::from(self.element.is_some()));
        for filter in &self.filters {
            match filter {
                Filter::Id(_) => spec.0 += 1,
                // "Selectors inside the negation pseudo-class are counted like
                // any other, but the negation itself does not count as a
                // pseudo-class."
                Filter::Pseudo(PseudoClass::Not(_)) => spec.2 += 1,
                Filter::Class(_) | Filter::Attribute(_) | Filter::Pseudo(_) => spec.1 += 1,
            }
        }
        spec
    }

    /// Whether this part matches the element at `node` on its own.
    #[must_use]
    pub fn matches(&self, dom: &DomTree, node: NodeId) -> bool {
        let Some(element) = dom.as_element(node) else {
            return false;
        };
        if let Some(tag) = &self.element {
            if !element.is(tag) {
                return false;
            }
        }
        self.filters
            .iter()
            .all(|filter| filter_matches(filter, dom, node, element))
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(tag) => write!(f, "{}", Token::ident(tag.as_str()).to_css())?,
            None if self.filters.is_empty() => f.write_str("*")?,
            None => {}
        }
        for filter in &self.filters {
            write!(f, "{filter}")?;
        }
        Ok(())
    }
}

/// A chain of simple selectors joined by combinators.
///
/// `div.nav > ul li` is stored as subject `li` with the chain
/// `[(Descendant, ul), (Child, div.nav)]`: right to left, the order matching
/// walks in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// The rightmost part; the element the rule applies to.
    pub subject: SimpleSelector,
    /// Parts to the left of the subject, nearest first, each with the
    /// combinator that joins it to the part on its right.
    pub chain: Vec<(Combinator, SimpleSelector)>,
    /// Sum of the parts' specificities.
    pub specificity: Specificity,
}

impl Selector {
    /// Build a selector from parts in source (left to right) order. The
    /// combinator of each part joins it to the next one.
    #[must_use]
    pub fn from_parts(mut parts: Vec<(SimpleSelector, Option<Combinator>)>) -> Option<Self> {
        let (subject, _) = parts.pop()?;
        let mut chain = Vec::with_capacity(parts.len());
        for (part, combinator) in parts.into_iter().rev() {
            chain.push((combinator?, part));
        }
        let specificity = chain
            .iter()
            .fold(subject.specificity(), |acc, (_, part)| acc + part.specificity());
        Some(Self {
            subject,
            chain,
            specificity,
        })
    }

    /// Parse a single selector.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidSelector`] when the text is not exactly one valid
    /// selector.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut list = parse_selector_list(&component_values(text))?;
        match (list.pop(), list.is_empty()) {
            (Some(selector), true) => Ok(selector),
            _ => Err(ParseError::InvalidSelector(text.trim().to_string())),
        }
    }

    /// [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators)
    ///
    /// Match against the element at `node`, walking the chain from the
    /// subject outward.
    #[must_use]
    pub fn matches(&self, dom: &DomTree, node: NodeId) -> bool {
        self.subject.matches(dom, node) && chain_matches(&self.chain, dom, node)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (combinator, part) in self.chain.iter().rev() {
            write!(f, "{part}{}", combinator.as_css())?;
        }
        write!(f, "{}", self.subject)
    }
}

/// Match the remaining chain given that the part to its right matched `node`.
///
/// Descendant and subsequent-sibling combinators may match several
/// candidates; each is tried until one lets the rest of the chain match.
fn chain_matches(chain: &[(Combinator, SimpleSelector)], dom: &DomTree, node: NodeId) -> bool {
    let Some(((combinator, part), rest)) = chain.split_first() else {
        return true;
    };
    let accept = |candidate: NodeId| part.matches(dom, candidate) && chain_matches(rest, dom, candidate);
    match combinator {
        Combinator::Descendant => dom.ancestors(node).any(accept),
        Combinator::Child => dom.parent(node).is_some_and(accept),
        Combinator::NextSibling => dom
            .preceding_element_siblings(node)
            .next()
            .is_some_and(accept),
        Combinator::SubsequentSibling => dom.preceding_element_siblings(node).any(accept),
    }
}

fn filter_matches(filter: &Filter, dom: &DomTree, node: NodeId, element: &ElementData) -> bool {
    match filter {
        Filter::Id(id) => element.id() == Some(id.as_str()),
        Filter::Class(class) => element.has_class(class),
        Filter::Attribute(attr) => element
            .attr(&attr.name)
            .is_some_and(|actual| attr.operator.matches(actual, &attr.value)),
        Filter::Pseudo(pseudo) => pseudo_matches(pseudo, dom, node, element),
    }
}

fn pseudo_matches(pseudo: &PseudoClass, dom: &DomTree, node: NodeId, element: &ElementData) -> bool {
    let same_type = |sibling: NodeId| {
        dom.as_element(sibling)
            .is_some_and(|other| other.is(&element.tag_name))
    };
    match pseudo {
        PseudoClass::FirstChild => dom.preceding_element_siblings(node).next().is_none(),
        PseudoClass::LastChild => dom.following_element_siblings(node).next().is_none(),
        PseudoClass::OnlyChild => {
            dom.preceding_element_siblings(node).next().is_none()
                && dom.following_element_siblings(node).next().is_none()
        }
        PseudoClass::FirstOfType => !dom.preceding_element_siblings(node).any(same_type),
        PseudoClass::LastOfType => !dom.following_element_siblings(node).any(same_type),
        PseudoClass::Empty => dom.children(node).iter().all(|&child| {
            match dom.get(child).map(|n| &n.node_type) {
                Some(NodeType::Text(text)) => text.trim().is_empty(),
                Some(NodeType::Comment(_)) => true,
                _ => false,
            }
        }),
        PseudoClass::Root => dom.document_element() == Some(node),
        PseudoClass::Link => (element.is("a") || element.is("area")) && element.attr("href").is_some(),
        PseudoClass::Not(tag) => !element.is(tag),
        PseudoClass::Lang(code) => std::iter::once(node)
            .chain(dom.ancestors(node))
            .find_map(|n| dom.as_element(n).and_then(|e| e.attr("lang")))
            .is_some_and(|lang| dash_match(&lang.to_ascii_lowercase(), &code.to_ascii_lowercase())),
        PseudoClass::NthChild(nth) => {
            let position = dom.preceding_element_siblings(node).count() + 1;
            match nth {
                NthIndex::Odd => position % 2 == 1,
                NthIndex::Even => position % 2 == 0,
                NthIndex::Index(n) => position == *n as usize,
            }
        }
        PseudoClass::Visited
        | PseudoClass::Hover
        | PseudoClass::Active
        | PseudoClass::Focus
        | PseudoClass::Unknown(_) => false,
    }
}

fn dash_match(actual: &str, expected: &str) -> bool {
    actual == expected
        || actual
            .strip_prefix(expected)
            .is_some_and(|rest| rest.starts_with('-'))
}

/// [§ 5 Groups of selectors](https://www.w3.org/TR/selectors-3/#grouping)
///
/// Parse a comma separated selector list, e.g. a rule prelude.
///
/// # Errors
///
/// "If just one of these selectors were invalid, the entire group of
/// selectors would be invalid." Returns [`ParseError::InvalidSelector`] with
/// the whole list's text.
pub fn parse_selector_list(values: &[ComponentValue]) -> Result<Vec<Selector>, ParseError> {
    let invalid = || ParseError::InvalidSelector(serialize_component_values(trim_whitespace(values)));
    values
        .split(|v| matches!(v, ComponentValue::Token(Token::Comma)))
        .map(|group| parse_complex(trim_whitespace(group)).ok_or_else(invalid))
        .collect()
}

/// Parse one selector from whitespace-trimmed component values.
fn parse_complex(values: &[ComponentValue]) -> Option<Selector> {
    let mut parts: Vec<(SimpleSelector, Option<Combinator>)> = Vec::new();
    let mut rest = values;
    loop {
        // STEP 1: One sequence of simple selectors.
        let (part, after) = parse_simple(rest)?;
        rest = after;

        // STEP 2: The combinator, if any. Whitespace alone is the descendant
        // combinator unless an explicit one follows.
        let trimmed = trim_leading_whitespace(rest);
        let had_space = trimmed.len() != rest.len();
        if trimmed.is_empty() {
            parts.push((part, None));
            return Selector::from_parts(parts);
        }
        let combinator = match trimmed.first() {
            Some(ComponentValue::Token(Token::Delim('>'))) => Some(Combinator::Child),
            Some(ComponentValue::Token(Token::Delim('+'))) => Some(Combinator::NextSibling),
            Some(ComponentValue::Token(Token::Delim('~'))) => Some(Combinator::SubsequentSibling),
            _ => None,
        };
        rest = match combinator {
            Some(combinator) => {
                parts.push((part, Some(combinator)));
                trim_leading_whitespace(&trimmed[1..])
            }
            None if had_space => {
                parts.push((part, Some(Combinator::Descendant)));
                trimmed
            }
            None => return None,
        };
        if rest.is_empty() {
            return None;
        }
    }
}

fn trim_leading_whitespace(values: &[ComponentValue]) -> &[ComponentValue] {
    let start = values
        .iter()
        .position(|v| !v.is_whitespace())
        .unwrap_or(values.len());
    &values[start..]
}

/// Parse a type or `*` followed by filters. Returns the part and the values
/// after it, or `None` if nothing selector-like was found.
fn parse_simple(values: &[ComponentValue]) -> Option<(SimpleSelector, &[ComponentValue])> {
    let mut part = SimpleSelector::default();
    let mut rest = values;
    let mut consumed = false;

    match rest.first() {
        Some(ComponentValue::Token(Token::Ident(tag))) => {
            part.element = Some(tag.clone());
            rest = &rest[1..];
            consumed = true;
        }
        Some(ComponentValue::Token(Token::Delim('*'))) => {
            rest = &rest[1..];
            consumed = true;
        }
        _ => {}
    }

    loop {
        match rest {
            [ComponentValue::Token(Token::Hash { value, .. }), tail @ ..] => {
                part.filters.push(Filter::Id(value.clone()));
                rest = tail;
            }
            [
                ComponentValue::Token(Token::Delim('.')),
                ComponentValue::Token(Token::Ident(class)),
                tail @ ..,
            ] => {
                part.filters.push(Filter::Class(class.clone()));
                rest = tail;
            }
            [ComponentValue::Block { open: '[', contents }, tail @ ..] => {
                part.filters
                    .push(Filter::Attribute(parse_attribute(contents)?));
                rest = tail;
            }
            [
                ComponentValue::Token(Token::Colon),
                ComponentValue::Token(Token::Colon),
                ComponentValue::Token(Token::Ident(name)),
                tail @ ..,
            ] => {
                warn_once("css", &format!("pseudo-element ::{name} never matches"));
                part.filters
                    .push(Filter::Pseudo(PseudoClass::Unknown(format!(":{name}"))));
                rest = tail;
            }
            [
                ComponentValue::Token(Token::Colon),
                ComponentValue::Token(Token::Ident(name)),
                tail @ ..,
            ] => {
                part.filters.push(Filter::Pseudo(parse_pseudo(name)));
                rest = tail;
            }
            [
                ComponentValue::Token(Token::Colon),
                ComponentValue::Function { name, args },
                tail @ ..,
            ] => {
                part.filters
                    .push(Filter::Pseudo(parse_pseudo_function(name, args)));
                rest = tail;
            }
            _ => break,
        }
        consumed = true;
    }

    consumed.then_some((part, rest))
}

/// `[name]` or `[name op value]`, value an identifier or string.
fn parse_attribute(contents: &[ComponentValue]) -> Option<AttributeFilter> {
    let tokens: Vec<&Token> = contents
        .iter()
        .filter(|v| !v.is_whitespace())
        .map(ComponentValue::as_token)
        .collect::<Option<_>>()?;

    let (name, rest) = match tokens.split_first() {
        Some((Token::Ident(name), rest)) => (name.clone(), rest),
        _ => return None,
    };
    if rest.is_empty() {
        return Some(AttributeFilter {
            name,
            operator: AttributeOperator::Exists,
            value: String::new(),
        });
    }

    let (operator, value) = match rest {
        [Token::Delim('='), value] => (AttributeOperator::Equals, value),
        [Token::Delim(op), Token::Delim('='), value] => {
            let operator = match op {
                '^' => AttributeOperator::Prefix,
                '$' => AttributeOperator::Suffix,
                '*' => AttributeOperator::Substring,
                '~' => AttributeOperator::Includes,
                '|' => AttributeOperator::DashMatch,
                _ => return None,
            };
            (operator, value)
        }
        _ => return None,
    };
    let value = match value {
        Token::Ident(v) | Token::String(v) => v.clone(),
        _ => return None,
    };
    Some(AttributeFilter {
        name,
        operator,
        value,
    })
}

fn parse_pseudo(name: &str) -> PseudoClass {
    match name.to_ascii_lowercase().as_str() {
        "first-child" => PseudoClass::FirstChild,
        "last-child" => PseudoClass::LastChild,
        "only-child" => PseudoClass::OnlyChild,
        "first-of-type" => PseudoClass::FirstOfType,
        "last-of-type" => PseudoClass::LastOfType,
        "empty" => PseudoClass::Empty,
        "root" => PseudoClass::Root,
        "link" => PseudoClass::Link,
        "visited" => PseudoClass::Visited,
        "hover" => PseudoClass::Hover,
        "active" => PseudoClass::Active,
        "focus" => PseudoClass::Focus,
        _ => unknown_pseudo(name.to_string()),
    }
}

fn parse_pseudo_function(name: &str, args: &[ComponentValue]) -> PseudoClass {
    let arg = match trim_whitespace(args) {
        [ComponentValue::Token(token)] => Some(token),
        _ => None,
    };
    let pseudo = match (name.to_ascii_lowercase().as_str(), arg) {
        ("not", Some(Token::Ident(tag))) => Some(PseudoClass::Not(tag.clone())),
        ("lang", Some(Token::Ident(code))) => Some(PseudoClass::Lang(code.clone())),
        ("nth-child", Some(token)) => parse_nth(token).map(PseudoClass::NthChild),
        _ => None,
    };
    pseudo.unwrap_or_else(|| unknown_pseudo(format!("{name}({})", serialize_component_values(args))))
}

fn parse_nth(token: &Token) -> Option<NthIndex> {
    match token {
        Token::Ident(word) if word.eq_ignore_ascii_case("odd") => Some(NthIndex::Odd),
        Token::Ident(word) if word.eq_ignore_ascii_case("even") => Some(NthIndex::Even),
        Token::Number(Numeric::Integer(n)) => u32::try_from(*n)
            .ok()
            .filter(|&n| n > 0)
            .map(NthIndex::Index),
        _ => None,
    }
}

fn unknown_pseudo(name: String) -> PseudoClass {
    warn_once("css", &format!("unsupported pseudo-class :{name} never matches"));
    PseudoClass::Unknown(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specificity_ordering() {
        assert!(Specificity(1, 0, 0) > Specificity(0, 10, 10));
        assert!(Specificity(0, 1, 0) > Specificity(0, 0, 10));
        assert!(Specificity::INLINE > Specificity(100, 0, 0));
        assert_eq!(Specificity(0, 1, 1) + Specificity(1, 0, 1), Specificity(1, 1, 2));
    }

    #[test]
    fn test_dash_match() {
        assert!(dash_match("en", "en"));
        assert!(dash_match("en-US", "en"));
        assert!(!dash_match("english", "en"));
    }
}
