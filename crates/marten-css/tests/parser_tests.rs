//! Integration tests for stylesheet and declaration-list parsing.

use marten_css::parser::{Parser, Rule, StyleRule, Stylesheet, parse_stylesheet};
use marten_css::style::{Color, Length, Property, PropertyRegistry, Specified, StyleValue};
use marten_css::{ParseError, Specificity};

fn parse(css: &str) -> Stylesheet {
    parse_stylesheet(css, &PropertyRegistry::init())
}

fn only_rule(sheet: &Stylesheet) -> &StyleRule {
    let rules: Vec<&StyleRule> = sheet.style_rules().collect();
    assert_eq!(rules.len(), 1, "expected one style rule in {sheet:?}");
    rules[0]
}

fn length(px: f32) -> Specified {
    Specified::Value(StyleValue::Length(Length::px(px)))
}

#[test]
fn test_simple_rule() {
    let sheet = parse("p { color: red; margin-top: 4px }");
    assert!(sheet.errors.is_empty());
    let rule = only_rule(&sheet);
    assert_eq!(rule.selectors.len(), 1);
    assert_eq!(rule.declarations.len(), 2);
    assert_eq!(
        rule.properties.value(Property::Color),
        Some(&Specified::Value(StyleValue::Color(Color::rgb(255, 0, 0))))
    );
    assert_eq!(rule.properties.value(Property::MarginTop), Some(&length(4.0)));
}

#[test]
fn test_selector_list_shares_declarations() {
    let sheet = parse("h1, h2 , .x { color: blue }");
    assert_eq!(only_rule(&sheet).selectors.len(), 3);
}

#[test]
fn test_bad_declaration_is_skipped() {
    let sheet = parse("p { color: red; width: ; margin-top: 2px }");
    let rule = only_rule(&sheet);
    assert_eq!(rule.declarations.len(), 2);
    assert_eq!(rule.properties.value(Property::MarginTop), Some(&length(2.0)));
    assert!(matches!(
        sheet.errors.as_slice(),
        [ParseError::InvalidValue { property, .. }] if property == "width"
    ));
}

#[test]
fn test_missing_colon_resyncs_at_semicolon() {
    let sheet = parse("p { color red; margin-top: 1px }");
    let rule = only_rule(&sheet);
    assert_eq!(rule.declarations.len(), 1);
    assert_eq!(
        sheet.errors,
        vec![ParseError::MissingColon {
            property: "color".to_owned()
        }]
    );
}

#[test]
fn test_unknown_property_is_reported() {
    let sheet = parse("p { colour: red; color: red }");
    assert_eq!(only_rule(&sheet).declarations.len(), 1);
    assert_eq!(
        sheet.errors,
        vec![ParseError::UnknownProperty("colour".to_owned())]
    );
}

#[test]
fn test_invalid_selector_drops_rule() {
    let sheet = parse("p, 3x { color: red } div { color: blue }");
    let rule = only_rule(&sheet);
    assert_eq!(rule.to_string(), "div { color: blue; }");
    assert!(matches!(sheet.errors.as_slice(), [ParseError::InvalidSelector(_)]));
}

#[test]
fn test_media_is_rejected() {
    let sheet = parse("@media screen { p { color: red } } div { color: blue }");
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(
        sheet.errors,
        vec![ParseError::UnsupportedAtRule("media".to_owned())]
    );
}

#[test]
fn test_import_is_rejected() {
    let sheet = parse("@import url(a.css); p { color: red }");
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(
        sheet.errors,
        vec![ParseError::UnsupportedAtRule("import".to_owned())]
    );
}

#[test]
fn test_other_at_rules_are_kept_uninterpreted() {
    let sheet = parse("@font-face { font-family: x } p { color: red }");
    assert_eq!(sheet.rules.len(), 2);
    assert!(matches!(&sheet.rules[0], Rule::At(at) if at.name == "font-face" && at.block.is_some()));
}

#[test]
fn test_at_keyword_in_prelude_drops_rule() {
    let sheet = parse("p @x { color: red } div { color: blue }");
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(
        sheet.errors,
        vec![ParseError::AtRuleInPrelude("x".to_owned())]
    );
}

#[test]
fn test_important_flag() {
    let sheet = parse("p { color: red ! important; margin-top: 1px }");
    let rule = only_rule(&sheet);
    assert!(rule.declarations[0].important);
    assert!(!rule.declarations[1].important);
    assert!(rule.properties.get(Property::Color).is_some_and(|e| e.important));
}

#[test]
fn test_unterminated_block_keeps_declarations() {
    let sheet = parse("p { color: red");
    assert_eq!(only_rule(&sheet).declarations.len(), 1);
    assert_eq!(
        sheet.errors,
        vec![ParseError::UnexpectedEof("declaration block")]
    );
}

#[test]
fn test_style_attribute_declarations_are_inline() {
    let registry = PropertyRegistry::init();
    let (properties, declarations, errors) =
        Parser::new("color: red; bogus: 1; margin: 2px", &registry).parse_declaration_list();
    assert_eq!(declarations.len(), 2);
    assert_eq!(errors.len(), 1);
    let entry = properties.get(Property::MarginLeft).unwrap();
    assert_eq!(entry.specificity, Specificity::INLINE);
    assert_eq!(entry.value, length(2.0));
}

#[test]
fn test_rule_display_reserializes() {
    let sheet = parse("ul  >  li.a{margin-top:1px;color:red!important}");
    assert_eq!(
        only_rule(&sheet).to_string(),
        "ul > li.a { margin-top: 1px; color: red !important; }"
    );
}
