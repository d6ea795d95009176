//! CSS Values & Units Level 3: §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// A CSS <percentage>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percentage(pub f32); // stored as 0.0..=1.0

/// Parse a CSS <percentage> (§5.1).
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<percentage>`.
pub fn parse_percentage(input: &mut Parser) -> Result<Percentage, ParseError> {
    if let Ok(token) = input.next_including_whitespace_and_comments()
        && let Token::Percentage { unit_value, .. } = token.clone()
    {
        return Ok(Percentage(unit_value));
    }
    Err(ParseError::UnexpectedToken)
}

/// Parse a single space-free word such as `50%` or `-2%`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the word does not start with a
/// percentage and `ParseError::TrailingInput` when anything follows it.
pub fn parse_percentage_word(word: &str) -> Result<Percentage, ParseError> {
    let mut input = ParserInput::new(word);
    let mut parser = Parser::new(&mut input);
    let percentage = parse_percentage(&mut parser)?;
    if !percentage.0.is_finite() {
        return Err(ParseError::UnexpectedToken);
    }
    if parser.is_exhausted() {
        Ok(percentage)
    } else {
        Err(ParseError::TrailingInput)
    }
}
