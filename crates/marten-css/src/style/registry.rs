//! Property registry: per property a typed parser, a default value and an
//! inherited flag, plus the shorthand expanders.
//!
//! The table is built once by [`PropertyRegistry::init`] and only read
//! afterwards; parsers and the cascade borrow it.

use std::collections::HashMap;
use std::str::FromStr;

use strum::IntoEnumIterator;

use super::color::{Color, parse_color};
use super::keywords::{
    AbsoluteSize, BorderStyle, Clear, Direction, Display, Float, FontStyle, FontVariant,
    ListStylePosition, ListStyleType, Overflow, Position, TextAlign, TextTransform, VerticalAlign,
    Visibility, WhiteSpace,
};
use super::length::{Length, LengthUnit, parse_length};
use super::property::{Property, Side};
use super::value::{FontSize, FontWeight, LineHeight, Specified, StyleValue};
use crate::error::{InvariantViolation, ParseError};
use crate::parser::{ComponentValue, serialize_component_values};
use crate::tokenizer::Token;

/// Parses the whitespace-stripped components of one longhand value.
pub type ValueParser = fn(&[&ComponentValue]) -> Option<StyleValue>;

/// Expands the whitespace-stripped components of one shorthand value.
pub type ShorthandExpander = fn(&[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>>;

/// Registry row for one longhand.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// The property.
    pub property: Property,
    /// CSS name, e.g. `margin-top`.
    pub name: String,
    /// Whether an unset value is taken from the parent.
    pub inherited: bool,
    /// Initial value.
    pub default: StyleValue,
    parser: ValueParser,
}

impl PropertyInfo {
    /// Run the typed parser.
    #[must_use]
    pub fn parse(&self, values: &[&ComponentValue]) -> Option<StyleValue> {
        (self.parser)(values)
    }
}

#[derive(Debug, Clone)]
struct Shorthand {
    longhands: Vec<Property>,
    expand: ShorthandExpander,
}

/// Immutable lookup table from property names to parsers and defaults.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    longhands: Vec<PropertyInfo>,
    shorthands: HashMap<&'static str, Shorthand>,
}

impl PropertyRegistry {
    /// Build the table.
    #[must_use]
    pub fn init() -> Self {
        let longhands = Property::iter().map(longhand).collect();

        let mut shorthands = HashMap::new();
        let mut add = |name: &'static str, longhands: Vec<Property>, expand: ShorthandExpander| {
            let _ = shorthands.insert(name, Shorthand { longhands, expand });
        };
        add("margin", Side::ALL.map(Property::margin).to_vec(), expand_margin);
        add("padding", Side::ALL.map(Property::padding).to_vec(), expand_padding);
        add(
            "border-width",
            Side::ALL.map(Property::border_width).to_vec(),
            expand_border_width,
        );
        add(
            "border-style",
            Side::ALL.map(Property::border_style).to_vec(),
            expand_border_style,
        );
        add(
            "border-color",
            Side::ALL.map(Property::border_color).to_vec(),
            expand_border_color,
        );
        add("border", border_longhands(&Side::ALL), expand_border);
        add("border-top", border_longhands(&[Side::Top]), expand_border_top);
        add("border-right", border_longhands(&[Side::Right]), expand_border_right);
        add("border-bottom", border_longhands(&[Side::Bottom]), expand_border_bottom);
        add("border-left", border_longhands(&[Side::Left]), expand_border_left);
        add(
            "list-style",
            vec![Property::ListStyleType, Property::ListStylePosition],
            expand_list_style,
        );
        add("background", vec![Property::BackgroundColor], expand_background);

        Self {
            longhands,
            shorthands,
        }
    }

    /// Registry row for a longhand.
    ///
    /// # Panics
    ///
    /// If the table has no row for the property, which `init` rules out.
    #[must_use]
    pub fn info(&self, property: Property) -> &PropertyInfo {
        self.longhands
            .get(property.index())
            .filter(|info| info.property == property)
            .unwrap_or_else(|| {
                InvariantViolation::new("registry", format!("no row for '{property}'")).raise()
            })
    }

    /// Whether the property inherits by default.
    #[must_use]
    pub fn is_inherited(&self, property: Property) -> bool {
        self.info(property).inherited
    }

    /// The initial value.
    #[must_use]
    pub fn default_value(&self, property: Property) -> &StyleValue {
        &self.info(property).default
    }

    /// Whether `name` is a longhand or shorthand the registry knows.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        name.parse::<Property>().is_ok() || self.shorthands.contains_key(name.as_str())
    }

    /// Parse one declaration value into the longhands it sets.
    ///
    /// `inherit` (and `initial`) alone as the value applies to every longhand
    /// without going through the typed parser.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnknownProperty`] for a name the registry does not know,
    /// [`ParseError::InvalidValue`] when the value does not match the grammar.
    pub fn expand(
        &self,
        name: &str,
        value: &[ComponentValue],
    ) -> Result<Vec<(Property, Specified)>, ParseError> {
        let lower = name.to_ascii_lowercase();
        let parts: Vec<&ComponentValue> = value
            .iter()
            .filter(|v| !matches!(v, ComponentValue::Token(Token::Whitespace)))
            .collect();
        let invalid = || ParseError::InvalidValue {
            property: name.to_string(),
            value: serialize_component_values(value).trim().to_string(),
        };

        let (longhands, shorthand) = if let Ok(property) = lower.parse::<Property>() {
            (vec![property], None)
        } else if let Some(shorthand) = self.shorthands.get(lower.as_str()) {
            (shorthand.longhands.clone(), Some(shorthand))
        } else {
            return Err(ParseError::UnknownProperty(name.to_string()));
        };

        if let [ComponentValue::Token(token)] = parts.as_slice() {
            if token.is_ident("inherit") {
                return Ok(longhands.into_iter().map(|p| (p, Specified::Inherit)).collect());
            }
            if token.is_ident("initial") {
                return Ok(longhands
                    .into_iter()
                    .map(|p| (p, Specified::Value(self.default_value(p).clone())))
                    .collect());
            }
        }
        if parts.is_empty() {
            return Err(invalid());
        }

        match shorthand {
            None => {
                let property = longhands[0];
                let parsed = self.info(property).parse(&parts).ok_or_else(invalid)?;
                Ok(vec![(property, Specified::Value(parsed))])
            }
            Some(shorthand) => {
                let expanded = (shorthand.expand)(&parts).ok_or_else(invalid)?;
                Ok(expanded
                    .into_iter()
                    .map(|(p, v)| (p, Specified::Value(v)))
                    .collect())
            }
        }
    }
}

/// Inherited flag, default and parser for one longhand.
fn longhand(property: Property) -> PropertyInfo {
    use Property as P;

    let (inherited, default, parser): (bool, StyleValue, ValueParser) = match property {
        P::Color => (true, StyleValue::Color(Color::BLACK), parse_color_value),
        P::BackgroundColor => (false, StyleValue::Color(Color::TRANSPARENT), parse_color_value),
        P::MarginTop | P::MarginRight | P::MarginBottom | P::MarginLeft => {
            (false, StyleValue::Length(Length::ZERO), parse_margin)
        }
        P::PaddingTop | P::PaddingRight | P::PaddingBottom | P::PaddingLeft => {
            (false, StyleValue::Length(Length::ZERO), parse_padding)
        }
        P::BorderTopWidth | P::BorderRightWidth | P::BorderBottomWidth | P::BorderLeftWidth => (
            false,
            StyleValue::Length(Length::px(BORDER_MEDIUM)),
            parse_border_width,
        ),
        P::BorderTopStyle | P::BorderRightStyle | P::BorderBottomStyle | P::BorderLeftStyle => (
            false,
            StyleValue::BorderStyle(BorderStyle::None),
            parse_border_style,
        ),
        P::BorderTopColor | P::BorderRightColor | P::BorderBottomColor | P::BorderLeftColor => {
            (false, StyleValue::CurrentColor, parse_color_value)
        }
        P::Display => (false, StyleValue::Display(Display::Inline), |v| {
            keyword(v).map(StyleValue::Display)
        }),
        P::Position => (false, StyleValue::Position(Position::Static), |v| {
            keyword(v).map(StyleValue::Position)
        }),
        P::Float => (false, StyleValue::Float(Float::None), |v| {
            keyword(v).map(StyleValue::Float)
        }),
        P::Clear => (false, StyleValue::Clear(Clear::None), |v| {
            keyword(v).map(StyleValue::Clear)
        }),
        P::Top | P::Right | P::Bottom | P::Left => (false, StyleValue::Auto, parse_length_or_auto),
        P::Width | P::Height => (false, StyleValue::Auto, parse_size),
        P::MinWidth | P::MinHeight => (false, StyleValue::Length(Length::ZERO), parse_min_size),
        P::MaxWidth | P::MaxHeight => (false, StyleValue::Unbounded, parse_max_size),
        P::WhiteSpace => (true, StyleValue::WhiteSpace(WhiteSpace::Normal), |v| {
            keyword(v).map(StyleValue::WhiteSpace)
        }),
        P::FontFamily => (
            true,
            StyleValue::FontFamily(vec!["serif".to_string()]),
            parse_font_family,
        ),
        P::FontSize => (
            true,
            StyleValue::FontSize(FontSize::Absolute(AbsoluteSize::Medium)),
            parse_font_size,
        ),
        P::FontStyle => (true, StyleValue::FontStyle(FontStyle::Normal), |v| {
            keyword(v).map(StyleValue::FontStyle)
        }),
        P::FontVariant => (true, StyleValue::FontVariant(FontVariant::Normal), |v| {
            keyword(v).map(StyleValue::FontVariant)
        }),
        P::FontWeight => (
            true,
            StyleValue::FontWeight(FontWeight::Weight(400)),
            parse_font_weight,
        ),
        P::LetterSpacing | P::WordSpacing => {
            (true, StyleValue::Length(Length::ZERO), parse_spacing)
        }
        P::TextAlign => (true, StyleValue::TextAlign(TextAlign::Left), |v| {
            keyword(v).map(StyleValue::TextAlign)
        }),
        P::TextIndent => (true, StyleValue::Length(Length::ZERO), parse_single_length),
        P::Direction => (true, StyleValue::Direction(Direction::Ltr), |v| {
            keyword(v).map(StyleValue::Direction)
        }),
        P::TextTransform => (true, StyleValue::TextTransform(TextTransform::None), |v| {
            keyword(v).map(StyleValue::TextTransform)
        }),
        P::LineHeight => (
            true,
            StyleValue::LineHeight(LineHeight::Normal),
            parse_line_height,
        ),
        P::Overflow => (false, StyleValue::Overflow(Overflow::Visible), |v| {
            keyword(v).map(StyleValue::Overflow)
        }),
        P::ListStyleType => (true, StyleValue::ListStyleType(ListStyleType::Disc), |v| {
            keyword(v).map(StyleValue::ListStyleType)
        }),
        P::ListStylePosition => (
            true,
            StyleValue::ListStylePosition(ListStylePosition::Outside),
            |v| keyword(v).map(StyleValue::ListStylePosition),
        ),
        P::VerticalAlign => (
            false,
            StyleValue::VerticalAlign(VerticalAlign::Baseline),
            |v| keyword(v).map(StyleValue::VerticalAlign),
        ),
        P::Visibility => (true, StyleValue::Visibility(Visibility::Visible), |v| {
            keyword(v).map(StyleValue::Visibility)
        }),
    };

    PropertyInfo {
        property,
        name: property.to_string(),
        inherited,
        default,
        parser,
    }
}

/// `thin`, `medium` and `thick` border widths in px.
const BORDER_THIN: f32 = 2.0;
const BORDER_MEDIUM: f32 = 4.0;
const BORDER_THICK: f32 = 10.0;

fn single<'a>(values: &[&'a ComponentValue]) -> Option<&'a ComponentValue> {
    match values {
        [v] => Some(*v),
        _ => None,
    }
}

fn ident<'a>(v: &'a ComponentValue) -> Option<&'a str> {
    match v {
        ComponentValue::Token(Token::Ident(name)) => Some(name.as_str()),
        _ => None,
    }
}

/// A single identifier parsed through the keyword enum's `FromStr`.
fn keyword<T: FromStr>(values: &[&ComponentValue]) -> Option<T> {
    ident(single(values)?)?.parse().ok()
}

fn parse_color_value(values: &[&ComponentValue]) -> Option<StyleValue> {
    color_component(single(values)?)
}

fn color_component(v: &ComponentValue) -> Option<StyleValue> {
    if ident(v).is_some_and(|name| name.eq_ignore_ascii_case("currentcolor")) {
        return Some(StyleValue::CurrentColor);
    }
    parse_color(v).map(StyleValue::Color)
}

fn length_component(v: &ComponentValue, allow_negative: bool) -> Option<Length> {
    parse_length(v).filter(|l| allow_negative || l.value >= 0.0)
}

fn is_auto(v: &ComponentValue) -> bool {
    ident(v).is_some_and(|name| name.eq_ignore_ascii_case("auto"))
}

fn margin_component(v: &ComponentValue) -> Option<StyleValue> {
    if is_auto(v) {
        return Some(StyleValue::Auto);
    }
    length_component(v, true).map(StyleValue::Length)
}

fn parse_margin(values: &[&ComponentValue]) -> Option<StyleValue> {
    margin_component(single(values)?)
}

fn padding_component(v: &ComponentValue) -> Option<StyleValue> {
    length_component(v, false).map(StyleValue::Length)
}

fn parse_padding(values: &[&ComponentValue]) -> Option<StyleValue> {
    padding_component(single(values)?)
}

fn parse_single_length(values: &[&ComponentValue]) -> Option<StyleValue> {
    length_component(single(values)?, true).map(StyleValue::Length)
}

fn parse_length_or_auto(values: &[&ComponentValue]) -> Option<StyleValue> {
    margin_component(single(values)?)
}

fn parse_size(values: &[&ComponentValue]) -> Option<StyleValue> {
    let v = single(values)?;
    if is_auto(v) {
        return Some(StyleValue::Auto);
    }
    length_component(v, false).map(StyleValue::Length)
}

fn parse_min_size(values: &[&ComponentValue]) -> Option<StyleValue> {
    length_component(single(values)?, false).map(StyleValue::Length)
}

fn parse_max_size(values: &[&ComponentValue]) -> Option<StyleValue> {
    let v = single(values)?;
    if ident(v).is_some_and(|name| name.eq_ignore_ascii_case("none")) {
        return Some(StyleValue::Unbounded);
    }
    length_component(v, false).map(StyleValue::Length)
}

/// [§ 8.5.1 Border width](https://www.w3.org/TR/CSS2/box.html#border-width-properties)
///
/// "The interpretation of the first three values depends on the user agent."
fn border_width_component(v: &ComponentValue) -> Option<StyleValue> {
    let px = match ident(v).map(str::to_ascii_lowercase).as_deref() {
        Some("thin") => BORDER_THIN,
        Some("medium") => BORDER_MEDIUM,
        Some("thick") => BORDER_THICK,
        Some(_) => return None,
        None => return length_component(v, false).map(StyleValue::Length),
    };
    Some(StyleValue::Length(Length::px(px)))
}

fn parse_border_width(values: &[&ComponentValue]) -> Option<StyleValue> {
    border_width_component(single(values)?)
}

fn border_style_component(v: &ComponentValue) -> Option<StyleValue> {
    ident(v)?.parse().ok().map(StyleValue::BorderStyle)
}

fn parse_border_style(values: &[&ComponentValue]) -> Option<StyleValue> {
    border_style_component(single(values)?)
}

/// [§ 15.3 Font family](https://www.w3.org/TR/CSS2/fonts.html#font-family-prop)
///
/// Comma separated; a family is a string or a run of identifiers.
fn parse_font_family(values: &[&ComponentValue]) -> Option<StyleValue> {
    let mut families = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for v in values {
        match v {
            ComponentValue::Token(Token::Ident(name)) => current.push(name),
            ComponentValue::Token(Token::String(name)) if current.is_empty() => current.push(name),
            ComponentValue::Token(Token::Comma) => {
                if current.is_empty() {
                    return None;
                }
                families.push(current.join(" "));
                current.clear();
            }
            _ => return None,
        }
    }
    if current.is_empty() {
        return None;
    }
    families.push(current.join(" "));
    Some(StyleValue::FontFamily(families))
}

fn parse_font_size(values: &[&ComponentValue]) -> Option<StyleValue> {
    let v = single(values)?;
    if let Some(name) = ident(v) {
        let size = match name.to_ascii_lowercase().as_str() {
            "larger" => FontSize::Larger,
            "smaller" => FontSize::Smaller,
            other => FontSize::Absolute(other.parse().ok()?),
        };
        return Some(StyleValue::FontSize(size));
    }
    length_component(v, false).map(|l| StyleValue::FontSize(FontSize::Length(l)))
}

fn parse_font_weight(values: &[&ComponentValue]) -> Option<StyleValue> {
    let weight = match single(values)? {
        ComponentValue::Token(Token::Ident(name)) => match name.to_ascii_lowercase().as_str() {
            "normal" => FontWeight::Weight(400),
            "bold" => FontWeight::Weight(700),
            "bolder" => FontWeight::Bolder,
            "lighter" => FontWeight::Lighter,
            _ => return None,
        },
        ComponentValue::Token(Token::Number(n)) => {
            let w = n.value();
            if !n.is_integer() || !(100.0..=900.0).contains(&w) || w % 100.0 != 0.0 {
                return None;
            }
            FontWeight::Weight(w as u16)
        }
        _ => return None,
    };
    Some(StyleValue::FontWeight(weight))
}

/// `letter-spacing` and `word-spacing`: `normal` is stored as zero.
fn parse_spacing(values: &[&ComponentValue]) -> Option<StyleValue> {
    let v = single(values)?;
    if ident(v).is_some_and(|name| name.eq_ignore_ascii_case("normal")) {
        return Some(StyleValue::Length(Length::ZERO));
    }
    length_component(v, true)
        .filter(|l| l.unit != LengthUnit::Percent)
        .map(StyleValue::Length)
}

fn parse_line_height(values: &[&ComponentValue]) -> Option<StyleValue> {
    let height = match single(values)? {
        ComponentValue::Token(Token::Ident(name)) if name.eq_ignore_ascii_case("normal") => {
            LineHeight::Normal
        }
        ComponentValue::Token(Token::Number(n)) if n.value() >= 0.0 => {
            LineHeight::Number(n.value() as f32)
        }
        other => LineHeight::Length(length_component(other, false)?),
    };
    Some(StyleValue::LineHeight(height))
}

/// The 1/2/3/4 value edge rule, in top, right, bottom, left order.
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
#[must_use]
pub fn four_edges<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [all] => Some([all.clone(), all.clone(), all.clone(), all.clone()]),
        [vertical, horizontal] => Some([
            vertical.clone(),
            horizontal.clone(),
            vertical.clone(),
            horizontal.clone(),
        ]),
        [top, horizontal, bottom] => Some([
            top.clone(),
            horizontal.clone(),
            bottom.clone(),
            horizontal.clone(),
        ]),
        [top, right, bottom, left] => {
            Some([top.clone(), right.clone(), bottom.clone(), left.clone()])
        }
        _ => None,
    }
}

fn expand_edges(
    values: &[&ComponentValue],
    component: fn(&ComponentValue) -> Option<StyleValue>,
    property: fn(Side) -> Property,
) -> Option<Vec<(Property, StyleValue)>> {
    let parsed: Vec<StyleValue> = values.iter().map(|v| component(v)).collect::<Option<_>>()?;
    let edges = four_edges(&parsed)?;
    Some(
        Side::ALL
            .into_iter()
            .zip(edges)
            .map(|(side, value)| (property(side), value))
            .collect(),
    )
}

fn expand_margin(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_edges(values, margin_component, Property::margin)
}

fn expand_padding(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_edges(values, padding_component, Property::padding)
}

fn expand_border_width(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_edges(values, border_width_component, Property::border_width)
}

fn expand_border_style(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_edges(values, border_style_component, Property::border_style)
}

fn expand_border_color(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_edges(values, color_component, Property::border_color)
}

fn border_longhands(sides: &[Side]) -> Vec<Property> {
    sides
        .iter()
        .flat_map(|&side| {
            [
                Property::border_width(side),
                Property::border_style(side),
                Property::border_color(side),
            ]
        })
        .collect()
}

/// [§ 8.5.4 Border shorthand properties](https://www.w3.org/TR/CSS2/box.html#border-shorthand-properties)
///
/// "[ <border-width> || <border-style> || <border-top-color> ]": each part at
/// most once, in any order. Omitted parts reset to their initial values.
fn expand_border_sides(
    values: &[&ComponentValue],
    sides: &[Side],
) -> Option<Vec<(Property, StyleValue)>> {
    let mut width = None;
    let mut style = None;
    let mut color = None;
    for v in values {
        if width.is_none() {
            if let Some(w) = border_width_component(v) {
                width = Some(w);
                continue;
            }
        }
        if style.is_none() {
            if let Some(s) = border_style_component(v) {
                style = Some(s);
                continue;
            }
        }
        if color.is_some() {
            return None;
        }
        color = Some(color_component(v)?);
    }
    let width = width.unwrap_or(StyleValue::Length(Length::px(BORDER_MEDIUM)));
    let style = style.unwrap_or(StyleValue::BorderStyle(BorderStyle::None));
    let color = color.unwrap_or(StyleValue::CurrentColor);
    Some(
        sides
            .iter()
            .flat_map(|&side| {
                [
                    (Property::border_width(side), width.clone()),
                    (Property::border_style(side), style.clone()),
                    (Property::border_color(side), color.clone()),
                ]
            })
            .collect(),
    )
}

fn expand_border(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_border_sides(values, &Side::ALL)
}

fn expand_border_top(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_border_sides(values, &[Side::Top])
}

fn expand_border_right(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_border_sides(values, &[Side::Right])
}

fn expand_border_bottom(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_border_sides(values, &[Side::Bottom])
}

fn expand_border_left(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    expand_border_sides(values, &[Side::Left])
}

/// [§ 12.5.1 'list-style'](https://www.w3.org/TR/CSS2/generate.html#propdef-list-style)
///
/// Type and position in any order. `none` sets the type to none.
fn expand_list_style(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    let mut list_type = None;
    let mut position = None;
    for v in values {
        let name = ident(v)?;
        if list_type.is_none() {
            if let Ok(t) = name.parse::<ListStyleType>() {
                list_type = Some(t);
                continue;
            }
        }
        if position.is_some() {
            return None;
        }
        position = Some(name.parse::<ListStylePosition>().ok()?);
    }
    Some(vec![
        (
            Property::ListStyleType,
            StyleValue::ListStyleType(list_type.unwrap_or_default()),
        ),
        (
            Property::ListStylePosition,
            StyleValue::ListStylePosition(position.unwrap_or_default()),
        ),
    ])
}

/// `background`: only the color component is used. Images, repeat and
/// attachment keywords are accepted and ignored.
fn expand_background(values: &[&ComponentValue]) -> Option<Vec<(Property, StyleValue)>> {
    let mut color = None;
    for v in values {
        if let Some(c) = color_component(v) {
            if color.replace(c).is_some() {
                return None;
            }
        }
    }
    Some(vec![(
        Property::BackgroundColor,
        color.unwrap_or(StyleValue::Color(Color::TRANSPARENT)),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_property_has_a_row() {
        let registry = PropertyRegistry::init();
        for property in Property::iter() {
            assert_eq!(registry.info(property).property, property);
        }
    }

    #[test]
    fn test_inherited_flags() {
        let registry = PropertyRegistry::init();
        assert!(registry.is_inherited(Property::Color));
        assert!(registry.is_inherited(Property::FontSize));
        assert!(!registry.is_inherited(Property::MarginTop));
        assert!(!registry.is_inherited(Property::Width));
    }

    #[test]
    fn test_four_edges() {
        assert_eq!(four_edges(&[1]), Some([1, 1, 1, 1]));
        assert_eq!(four_edges(&[1, 2]), Some([1, 2, 1, 2]));
        assert_eq!(four_edges(&[1, 2, 3]), Some([1, 2, 3, 2]));
        assert_eq!(four_edges(&[1, 2, 3, 4]), Some([1, 2, 3, 4]));
        assert_eq!(four_edges::<i32>(&[]), None);
        assert_eq!(four_edges(&[1, 2, 3, 4, 5]), None);
    }
}
