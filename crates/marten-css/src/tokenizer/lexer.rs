use super::token::{Numeric, Token};
use crate::error::{InvariantViolation, LexError};

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Pull tokenizer over a CSS string. Tokens are produced on demand and
/// consumed once; one token can be handed back with [`Tokenizer::push_back`].
pub struct Tokenizer {
    /// The input being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// One token of lookahead returned by a consumer
    pushed_back: Option<Token>,
}

impl Tokenizer {
    /// Create a new tokenizer over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            pushed_back: None,
        }
    }

    /// Character offset of the next unread code point.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.position
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Returns the pushed back token if there is one. After the end of input
    /// every call returns [`Token::EOF`].
    ///
    /// # Errors
    ///
    /// A malformed string, escape or url. The bad lexeme has been consumed,
    /// so the next call continues after it.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(token) = self.pushed_back.take() {
            return Ok(token);
        }
        self.consume_token()
    }

    /// Hand one token back; the next [`Tokenizer::next_token`] returns it.
    ///
    /// # Panics
    ///
    /// If a token is already pushed back. Consumers only ever need one token
    /// of lookahead.
    pub fn push_back(&mut self, token: Token) {
        if let Some(held) = &self.pushed_back {
            InvariantViolation::new(
                "tokenizer",
                format!("push back of {token} while {held} is still pending"),
            )
            .raise();
        }
        self.pushed_back = Some(token);
    }

    fn consume_token(&mut self) -> Result<Token, LexError> {
        // "Consume comments."
        self.consume_comments();

        let start = self.position;
        // "Consume the next input code point."
        let Some(c) = self.consume() else {
            return Ok(Token::EOF);
        };

        let token = match c {
            // "Consume as much whitespace as possible. Return a <whitespace-token>."
            c if is_whitespace(c) => {
                self.consume_whitespace();
                Token::Whitespace
            }

            '"' | '\'' => return self.consume_string_token(c, start),

            '#' => {
                // "If the next input code point is an ident code point or the next
                // two input code points are a valid escape..."
                if self.peek().is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(), self.peek_at(1))
                {
                    // "If the next 3 input code points would start an ident sequence,
                    // set the <hash-token>'s type flag to 'id'."
                    let is_id = self.would_start_ident_sequence();
                    let value = self.consume_ident_sequence();
                    Token::Hash { value, is_id }
                } else {
                    Token::Delim('#')
                }
            }

            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            ',' => Token::Comma,
            ':' => Token::Colon,
            ';' => Token::Semicolon,
            '[' => Token::LeftBracket,
            ']' => Token::RightBracket,
            '{' => Token::LeftBrace,
            '}' => Token::RightBrace,

            '+' | '.' => {
                self.reconsume();
                if self.would_start_number() {
                    return self.consume_numeric_token();
                }
                let _ = self.consume();
                Token::Delim(c)
            }

            '-' => {
                self.reconsume();
                if self.would_start_number() {
                    return self.consume_numeric_token();
                }
                // "Otherwise, if the next 3 input code points are U+002D U+002D U+003E (-->)"
                if self.peek_at(1) == Some('-') && self.peek_at(2) == Some('>') {
                    self.position += 3;
                    Token::CDC
                } else if self.would_start_ident_sequence() {
                    return self.consume_ident_like_token(start);
                } else {
                    let _ = self.consume();
                    Token::Delim('-')
                }
            }

            '<' => {
                // "If the next 3 input code points are U+0021 U+002D U+002D (!--)..."
                if self.peek() == Some('!')
                    && self.peek_at(1) == Some('-')
                    && self.peek_at(2) == Some('-')
                {
                    self.position += 3;
                    Token::CDO
                } else {
                    Token::Delim('<')
                }
            }

            '@' => {
                // "If the next 3 input code points would start an ident sequence..."
                if self.would_start_ident_sequence() {
                    Token::AtKeyword(self.consume_ident_sequence())
                } else {
                    Token::Delim('@')
                }
            }

            '\\' => {
                // "If the input stream starts with a valid escape..."
                if is_valid_escape(Some('\\'), self.peek()) {
                    self.reconsume();
                    return self.consume_ident_like_token(start);
                }
                // "This is a parse error."
                return Err(LexError::BadEscape { offset: start });
            }

            c if c.is_ascii_digit() => {
                self.reconsume();
                return self.consume_numeric_token();
            }

            c if is_ident_start_code_point(c) => {
                self.reconsume();
                return self.consume_ident_like_token(start);
            }

            // "anything else"
            c => Token::Delim(c),
        };
        Ok(token)
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.position += 2;
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.position += 1;
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// A newline or EOF before the closing quote is a lexical error. The
    /// newline is left in the stream so the caller resumes on the next line.
    fn consume_string_token(&mut self, ending: char, start: usize) -> Result<Token, LexError> {
        let mut value = String::new();
        loop {
            match self.consume() {
                Some(c) if c == ending => return Ok(Token::String(value)),
                None => return Err(LexError::UnterminatedString { offset: start }),
                Some('\n') => {
                    self.reconsume();
                    return Err(LexError::UnterminatedString { offset: start });
                }
                Some('\\') => match self.peek() {
                    None => {}
                    // Escaped newline: a line continuation.
                    Some('\n') => self.position += 1,
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.5 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> Result<Token, LexError> {
        let value = self.consume_number();

        if self.would_start_ident_sequence() {
            let unit = self.consume_ident_sequence();
            Ok(Token::Dimension { value, unit })
        } else if self.peek() == Some('%') {
            self.position += 1;
            Ok(Token::Percentage(value))
        } else {
            Ok(Token::Number(value))
        }
    }

    /// [§ 4.3.6 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self, start: usize) -> Result<Token, LexError> {
        let string = self.consume_ident_sequence();

        if string.eq_ignore_ascii_case("url") && self.peek() == Some('(') {
            self.position += 1;
            self.consume_whitespace();
            // A quoted url is an ordinary function whose argument is a string.
            if matches!(self.peek(), Some('"' | '\'')) {
                return Ok(Token::Function(string));
            }
            return self.consume_url_token(start);
        }

        if self.peek() == Some('(') {
            self.position += 1;
            return Ok(Token::Function(string));
        }
        Ok(Token::Ident(string))
    }

    /// [§ 4.3.7 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url_token(&mut self, start: usize) -> Result<Token, LexError> {
        let mut value = String::new();
        loop {
            match self.consume() {
                Some(')') => return Ok(Token::Url(value)),
                // EOF is a parse error in the syntax module, but the url is complete.
                None => return Ok(Token::Url(value)),
                Some(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    return match self.consume() {
                        Some(')') | None => Ok(Token::Url(value)),
                        Some(_) => {
                            self.consume_bad_url_remnants();
                            Err(LexError::BadUrl { offset: start })
                        }
                    };
                }
                Some('"' | '\'' | '(') => {
                    self.consume_bad_url_remnants();
                    return Err(LexError::BadUrl { offset: start });
                }
                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek()) {
                        value.push(self.consume_escaped_code_point());
                    } else {
                        self.consume_bad_url_remnants();
                        return Err(LexError::BadUrl { offset: start });
                    }
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.consume() {
                Some(')') | None => return,
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    let _ = self.consume_escaped_code_point();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();
        loop {
            match self.consume() {
                Some(c) if is_ident_code_point(c) => result.push(c),
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    result.push(self.consume_escaped_code_point());
                }
                Some(_) => {
                    self.reconsume();
                    return result;
                }
                None => return result,
            }
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// The type flag starts as integer and flips to float on a fraction or an
    /// exponent. Integers too large for `i64` become floats.
    fn consume_number(&mut self) -> Numeric {
        let mut is_float = false;
        let mut repr = String::new();

        if let Some(sign @ ('+' | '-')) = self.peek() {
            repr.push(sign);
            self.position += 1;
        }
        self.consume_digits(&mut repr);

        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            self.position += 1;
            self.consume_digits(&mut repr);
            is_float = true;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let has_sign = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_at = if has_sign { 2 } else { 1 };
            if self.peek_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digit_at {
                    if let Some(c) = self.consume() {
                        repr.push(c);
                    }
                }
                self.consume_digits(&mut repr);
                is_float = true;
            }
        }

        if !is_float {
            if let Ok(int) = repr.parse::<i64>() {
                return Numeric::Integer(int);
            }
        }
        Numeric::Float(repr.parse().unwrap_or(0.0))
    }

    fn consume_digits(&mut self, repr: &mut String) {
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            repr.push(c);
            self.position += 1;
        }
    }

    /// [§ 4.3.13 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = String::from(c);
                // "Consume as many hex digits as possible, but no more than 5."
                while hex.len() < 6 {
                    match self.peek().filter(char::is_ascii_hexdigit) {
                        Some(d) => {
                            hex.push(d);
                            self.position += 1;
                        }
                        None => break,
                    }
                }
                // "If the next input code point is whitespace, consume it."
                if self.peek().is_some_and(is_whitespace) {
                    self.position += 1;
                }
                // "If this number is zero, or is for a surrogate, or is greater than the
                // maximum allowed code point, return U+FFFD REPLACEMENT CHARACTER."
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|&cp| cp != 0)
                    .and_then(char::from_u32)
                    .unwrap_or('\u{FFFD}')
            }
            Some(c) => c,
            None => '\u{FFFD}',
        }
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn would_start_ident_sequence(&self) -> bool {
        match self.peek() {
            Some('-') => {
                let second = self.peek_at(1);
                second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                    || is_valid_escape(second, self.peek_at(2))
            }
            Some(c) if is_ident_start_code_point(c) => true,
            Some('\\') => is_valid_escape(Some('\\'), self.peek_at(1)),
            _ => false,
        }
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    fn would_start_number(&self) -> bool {
        let digit_at = |offset: usize| self.peek_at(offset).is_some_and(|c| c.is_ascii_digit());
        match self.peek() {
            Some('+' | '-') => digit_at(1) || (self.peek_at(1) == Some('.') && digit_at(2)),
            Some('.') => digit_at(1),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// Tokenize a whole string. The returned stream always ends with
/// [`Token::EOF`]; lexical errors are collected alongside it.
#[must_use]
pub fn tokenize(input: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    loop {
        match tokenizer.next_token() {
            Ok(Token::EOF) => {
                tokens.push(Token::EOF);
                return (tokens, errors);
            }
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second.is_some_and(|c| c != '\n')
}

/// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
