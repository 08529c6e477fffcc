//! Integration tests for the CSS tokenizer.

use marten_css::LexError;
use marten_css::tokenizer::{Numeric, Token, Tokenizer, serialize_tokens, tokenize};

/// Tokenize and assert the input was lexically clean.
fn tokens(input: &str) -> Vec<Token> {
    let (tokens, errors) = tokenize(input);
    assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
    tokens
}

#[test]
fn test_whitespace_run_is_one_token() {
    assert_eq!(tokens("   \t\n  "), vec![Token::Whitespace, Token::EOF]);
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        tokens("/* a */color/**/:red"),
        vec![
            Token::ident("color"),
            Token::Colon,
            Token::ident("red"),
            Token::EOF
        ]
    );
}

#[test]
fn test_integer_and_float_flags() {
    assert_eq!(
        tokens("12 1.5 3e2"),
        vec![
            Token::Number(Numeric::Integer(12)),
            Token::Whitespace,
            Token::Number(Numeric::Float(1.5)),
            Token::Whitespace,
            Token::Number(Numeric::Float(300.0)),
            Token::EOF,
        ]
    );
}

#[test]
fn test_dimension_and_percentage() {
    assert_eq!(
        tokens("10px 50%"),
        vec![
            Token::dimension(Numeric::Integer(10), "px"),
            Token::Whitespace,
            Token::Percentage(Numeric::Integer(50)),
            Token::EOF,
        ]
    );
}

#[test]
fn test_hash_id_flag() {
    let tokens = tokens("#main #1a");
    assert_eq!(
        tokens[0],
        Token::Hash {
            value: "main".to_owned(),
            is_id: true
        }
    );
    assert_eq!(
        tokens[2],
        Token::Hash {
            value: "1a".to_owned(),
            is_id: false
        }
    );
}

#[test]
fn test_function_and_at_keyword() {
    assert_eq!(
        tokens("@media rgb("),
        vec![
            Token::AtKeyword("media".to_owned()),
            Token::Whitespace,
            Token::Function("rgb".to_owned()),
            Token::EOF,
        ]
    );
}

#[test]
fn test_unquoted_url() {
    assert_eq!(
        tokens("url( a.png )"),
        vec![Token::Url("a.png".to_owned()), Token::EOF]
    );
}

#[test]
fn test_cdo_cdc() {
    assert_eq!(
        tokens("<!-- -->"),
        vec![Token::CDO, Token::Whitespace, Token::CDC, Token::EOF]
    );
}

#[test]
fn test_unterminated_string_resyncs() {
    let (tokens, errors) = tokenize("a \"oops\nb");
    assert_eq!(errors, vec![LexError::UnterminatedString { offset: 2 }]);
    assert_eq!(
        tokens,
        vec![
            Token::ident("a"),
            Token::Whitespace,
            Token::Whitespace,
            Token::ident("b"),
            Token::EOF,
        ]
    );
}

#[test]
fn test_string_at_end_of_input() {
    let (_, errors) = tokenize("'abc");
    assert_eq!(errors, vec![LexError::UnterminatedString { offset: 0 }]);
}

#[test]
fn test_escaped_newline_outside_string_is_bad_escape() {
    let (_, errors) = tokenize("a\\\nb");
    assert_eq!(errors, vec![LexError::BadEscape { offset: 1 }]);
}

#[test]
fn test_push_back_returns_same_token() {
    let mut tokenizer = Tokenizer::new("a b");
    let first = tokenizer.next_token().unwrap();
    tokenizer.push_back(first.clone());
    assert_eq!(tokenizer.next_token().unwrap(), first);
    assert_eq!(tokenizer.next_token().unwrap(), Token::Whitespace);
}

#[test]
#[should_panic(expected = "tokenizer")]
fn test_second_push_back_panics() {
    let mut tokenizer = Tokenizer::new("a");
    tokenizer.push_back(Token::Comma);
    tokenizer.push_back(Token::Colon);
}

#[test]
fn test_eof_is_sticky() {
    let mut tokenizer = Tokenizer::new("");
    assert_eq!(tokenizer.next_token().unwrap(), Token::EOF);
    assert_eq!(tokenizer.next_token().unwrap(), Token::EOF);
}

#[test]
fn test_serialization_round_trips() {
    let inputs = [
        "div.nav > ul li:first-child { margin: 0 auto; color: #fff !important }",
        "p { width: 12.0px; line-height: 1.5; content: \"a \\\"b\\\"\" }",
        "@media screen { a[href^='x'] { background: url(img.png) } }",
        "h1 + h2 ~ h3 { font: -0.5em/2 serif; left: 50% }",
        "<!-- .e\\31 0 { top: 1e3px } -->",
    ];
    for input in inputs {
        let first = tokens(input);
        let again = tokens(&serialize_tokens(&first));
        assert_eq!(first, again, "round trip changed tokens of {input:?}");
    }
}
