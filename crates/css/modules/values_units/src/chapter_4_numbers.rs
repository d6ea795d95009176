//! CSS Values & Units Level 3: §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

impl Number {
    /// True for `0`, `-0` and `0.0`; zero lengths never carry a unit.
    pub fn is_zero(self) -> bool {
        self.0.abs() < f32::EPSILON
    }
}

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    input.next_including_whitespace_and_comments().map_or(
        Err(ParseError::UnexpectedToken),
        |token| {
            if let Token::Number { value, .. } = token.clone() {
                Ok(Number(value))
            } else {
                Err(ParseError::UnexpectedToken)
            }
        },
    )
}

/// Parse a single space-free word as a bare `<number>` such as `10`, `-5` or `1.5`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the word does not start with a number
/// and `ParseError::TrailingInput` when anything follows it (`10,`, `10px`).
pub fn parse_number_word(word: &str) -> Result<Number, ParseError> {
    let mut input = ParserInput::new(word);
    let mut parser = Parser::new(&mut input);
    let number = parse_number(&mut parser)?;
    if parser.is_exhausted() {
        Ok(number)
    } else {
        Err(ParseError::TrailingInput)
    }
}
