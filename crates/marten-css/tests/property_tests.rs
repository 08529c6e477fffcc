//! Integration tests for the property registry, shorthands and value parsing.

use marten_css::parser::{Parser, component_values};
use marten_css::style::{
    BorderStyle, Color, FontSize, Length, LengthUnit, ListStylePosition, ListStyleType,
    Property, PropertyRegistry, Side, Specified, StyleValue,
};
use marten_css::tokenizer::{serialize_tokens, tokenize};
use marten_css::{Cascade, ParseError, parse_stylesheet};
use marten_dom::{DomTree, ElementData, NodeId};

fn expand(name: &str, value: &str) -> Result<Vec<(Property, Specified)>, ParseError> {
    PropertyRegistry::init().expand(name, &component_values(value))
}

fn value_of(expanded: &[(Property, Specified)], property: Property) -> &StyleValue {
    match expanded.iter().find(|(p, _)| *p == property) {
        Some((_, Specified::Value(value))) => value,
        other => panic!("{property} not expanded to a value: {other:?}"),
    }
}

fn px(value: f32) -> StyleValue {
    StyleValue::Length(Length::px(value))
}

fn margins(value: &str) -> [StyleValue; 4] {
    let expanded = expand("margin", value).unwrap();
    assert_eq!(expanded.len(), 4);
    Side::ALL.map(|side| value_of(&expanded, Property::margin(side)).clone())
}

#[test]
fn test_margin_one_to_four_values() {
    assert_eq!(margins("5px"), [px(5.0), px(5.0), px(5.0), px(5.0)]);
    assert_eq!(margins("1px 2px"), [px(1.0), px(2.0), px(1.0), px(2.0)]);
    assert_eq!(margins("1px 2px 3px"), [px(1.0), px(2.0), px(3.0), px(2.0)]);
    assert_eq!(margins("1px 2px 3px 4px"), [px(1.0), px(2.0), px(3.0), px(4.0)]);
    assert!(expand("margin", "1px 2px 3px 4px 5px").is_err());
}

#[test]
fn test_margin_auto_and_negative() {
    assert_eq!(margins("auto -2px"), [StyleValue::Auto, px(-2.0), StyleValue::Auto, px(-2.0)]);
    assert!(expand("padding", "-1px").is_err());
}

#[test]
fn test_shorthand_expansion_is_idempotent() {
    let registry = PropertyRegistry::init();
    let sheet = parse_stylesheet("p { margin: 1px 2px 3px; margin: 1px 2px 3px }", &registry);
    let once = parse_stylesheet("p { margin: 1px 2px 3px }", &registry);
    let twice: Vec<_> = sheet.style_rules().map(|r| r.properties.clone()).collect();
    let single: Vec<_> = once.style_rules().map(|r| r.properties.clone()).collect();
    assert_eq!(twice, single);
}

#[test]
fn test_border_shorthand_any_order() {
    let expanded = expand("border", "red solid 2px").unwrap();
    assert_eq!(expanded.len(), 12);
    for side in Side::ALL {
        assert_eq!(value_of(&expanded, Property::border_width(side)), &px(2.0));
        assert_eq!(
            value_of(&expanded, Property::border_style(side)),
            &StyleValue::BorderStyle(BorderStyle::Solid)
        );
        assert_eq!(
            value_of(&expanded, Property::border_color(side)),
            &StyleValue::Color(Color::rgb(255, 0, 0))
        );
    }
}

#[test]
fn test_border_side_resets_omitted_parts() {
    let expanded = expand("border-left", "dashed").unwrap();
    assert_eq!(expanded.len(), 3);
    assert_eq!(value_of(&expanded, Property::BorderLeftWidth), &px(4.0));
    assert_eq!(value_of(&expanded, Property::BorderLeftColor), &StyleValue::CurrentColor);
    assert!(expand("border", "solid solid").is_err());
}

#[test]
fn test_border_width_keywords() {
    let expanded = expand("border-width", "thin medium thick").unwrap();
    assert_eq!(value_of(&expanded, Property::BorderTopWidth), &px(2.0));
    assert_eq!(value_of(&expanded, Property::BorderRightWidth), &px(4.0));
    assert_eq!(value_of(&expanded, Property::BorderBottomWidth), &px(10.0));
}

#[test]
fn test_list_style_and_background() {
    let expanded = expand("list-style", "inside square").unwrap();
    assert_eq!(
        value_of(&expanded, Property::ListStyleType),
        &StyleValue::ListStyleType(ListStyleType::Square)
    );
    assert_eq!(
        value_of(&expanded, Property::ListStylePosition),
        &StyleValue::ListStylePosition(ListStylePosition::Inside)
    );
    let expanded = expand("background", "url(x.png) no-repeat #0f0").unwrap();
    assert_eq!(
        value_of(&expanded, Property::BackgroundColor),
        &StyleValue::Color(Color::rgb(0, 255, 0))
    );
}

#[test]
fn test_inherit_and_initial_apply_to_every_longhand() {
    let expanded = expand("padding", "inherit").unwrap();
    assert_eq!(expanded.len(), 4);
    assert!(expanded.iter().all(|(_, v)| *v == Specified::Inherit));
    let expanded = expand("display", "initial").unwrap();
    assert_eq!(expanded[0].1, Specified::Value(StyleValue::Display(Default::default())));
}

#[test]
fn test_unknown_and_invalid() {
    assert_eq!(
        expand("colr", "red"),
        Err(ParseError::UnknownProperty("colr".to_owned()))
    );
    assert!(matches!(
        expand("display", "sideways"),
        Err(ParseError::InvalidValue { .. })
    ));
    assert!(expand("width", "").is_err());
}

#[test]
fn test_color_grammars() {
    let color = |text: &str| match expand("color", text).unwrap().remove(0).1 {
        Specified::Value(StyleValue::Color(c)) => c,
        other => panic!("{text}: {other:?}"),
    };
    assert_eq!(color("#f00"), Color::rgb(255, 0, 0));
    assert_eq!(color("#00ff00"), Color::rgb(0, 255, 0));
    assert_eq!(color("rgb(0, 0, 255)"), Color::rgb(0, 0, 255));
    assert_eq!(color("rgb(100%, 0%, 0%)"), Color::rgb(255, 0, 0));
    assert_eq!(color("hsl(120, 100%, 50%)"), Color::rgb(0, 255, 0));
    assert_eq!(color("rgba(0, 0, 0, 0)").a, 0);
    assert_eq!(color("transparent").a, 0);
    assert!(expand("color", "rgb(1, 2)").is_err());
}

#[test]
fn test_lengths_and_font_sizes() {
    let width = expand("width", "50%").unwrap();
    assert_eq!(value_of(&width, Property::Width), &StyleValue::Length(Length::percent(50.0)));
    let size = expand("font-size", "1.5em").unwrap();
    assert!(matches!(
        value_of(&size, Property::FontSize),
        StyleValue::FontSize(FontSize::Length(Length { unit: LengthUnit::Em, .. }))
    ));
    let size = expand("font-size", "larger").unwrap();
    assert_eq!(value_of(&size, Property::FontSize), &StyleValue::FontSize(FontSize::Larger));
    assert!(expand("font-size", "-2px").is_err());
    assert!(expand("font-weight", "450").is_err());
    assert!(expand("font-weight", "600").is_ok());
}

#[test]
fn test_border_width_is_zero_without_style() {
    let mut dom = DomTree::new();
    let div = dom.append_element(NodeId::ROOT, ElementData::new("div"));
    let registry = PropertyRegistry::init();
    let sheet = parse_stylesheet("div { border-width: 3px; border-left-style: solid }", &registry);
    let styles = Cascade::new(&registry).resolve(&dom, &sheet);
    let style = styles.node_style(div).unwrap();
    assert_eq!(style.border_width(Side::Left), Length::px(3.0));
    assert_eq!(style.border_width(Side::Top), Length::ZERO);
}

#[test]
fn test_declaration_list_round_trip() {
    let registry = PropertyRegistry::init();
    let source = "color: #ff0000; margin: 1px 2px;";
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty());
    let reserialized = serialize_tokens(&tokens);

    let (first, _, first_errors) = Parser::new(source, &registry).parse_declaration_list();
    let (second, _, second_errors) = Parser::new(&reserialized, &registry).parse_declaration_list();
    assert!(first_errors.is_empty() && second_errors.is_empty());
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}
