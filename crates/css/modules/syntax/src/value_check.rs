//! Token-level checks for a declaration value.
//! Spec: <https://www.w3.org/TR/css-syntax-3/#consume-component-value>

use core::fmt;
use cssparser::{ParseError, Parser, ParserInput, Token};

/// Hex digit counts a `<hex-color>` may have.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#hex-notation>
const HEX_COLOR_LENGTHS: [usize; 4] = [3, 4, 6, 8];

/// Why a syntactically readable value is still not an acceptable property value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueProblem {
    /// Nothing left after decoding.
    Empty,
    /// A `<bad-string-token>` or `<bad-url-token>`.
    BadToken,
    /// A closing bracket without its opener, or an unterminated block.
    Unbalanced,
    /// A token that cannot appear in a property value here.
    UnexpectedToken(String),
    /// A hash that is not a 3, 4, 6 or 8 digit hex colour.
    InvalidHash(String),
    /// A word of a kind the property never takes (`font-weight: 5cm`).
    NotAllowed { property: String, word: String },
    /// More words than the property takes (`color: red blue`).
    TooManyWords {
        property: String,
        found: usize,
        max: usize,
    },
}

impl fmt::Display for ValueProblem {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("empty value"),
            Self::BadToken => formatter.write_str("malformed string or url"),
            Self::Unbalanced => formatter.write_str("unbalanced brackets"),
            Self::UnexpectedToken(token) => write!(formatter, "unexpected token {token}"),
            Self::InvalidHash(hash) => write!(formatter, "'#{hash}' is not a hex colour"),
            Self::NotAllowed { property, word } => {
                write!(formatter, "'{word}' is not a valid {property} value")
            }
            Self::TooManyWords {
                property,
                found,
                max,
            } => write!(formatter, "{property} takes at most {max} values, got {found}"),
        }
    }
}

fn is_hex_color(digits: &str) -> bool {
    HEX_COLOR_LENGTHS.contains(&digits.len()) && digits.chars().all(|ch| ch.is_ascii_hexdigit())
}

/// Check every token of `value`, descending into function and parenthesis blocks.
///
/// # Errors
/// Returns the first `ValueProblem` found.
pub fn check_value(value: &str) -> Result<(), ValueProblem> {
    if value.trim().is_empty() {
        return Err(ValueProblem::Empty);
    }
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    check_tokens(&mut parser)
}

fn check_tokens(parser: &mut Parser<'_, '_>) -> Result<(), ValueProblem> {
    loop {
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };
        match token {
            Token::Function(_) | Token::ParenthesisBlock => {
                let nested: Result<Result<(), ValueProblem>, ParseError<'_, ()>> =
                    parser.parse_nested_block(|block| {
                        let outcome = check_tokens(block);
                        // Drain the block so an early problem is reported, not an unconsumed tail.
                        while block.next().is_ok() {}
                        Ok(outcome)
                    });
                match nested {
                    Ok(Ok(())) => {}
                    Ok(Err(problem)) => return Err(problem),
                    Err(_) => return Err(ValueProblem::Unbalanced),
                }
            }
            Token::Hash(digits) | Token::IDHash(digits) => {
                if !is_hex_color(digits.as_ref()) {
                    return Err(ValueProblem::InvalidHash(digits.as_ref().to_owned()));
                }
            }
            Token::Delim(delim) => {
                if !matches!(delim, '/' | '+' | '-' | '*') {
                    return Err(ValueProblem::UnexpectedToken(format!("'{delim}'")));
                }
            }
            Token::BadString(_) | Token::BadUrl(_) => return Err(ValueProblem::BadToken),
            Token::CloseParenthesis | Token::CloseSquareBracket | Token::CloseCurlyBracket => {
                return Err(ValueProblem::Unbalanced);
            }
            Token::AtKeyword(name) => {
                return Err(ValueProblem::UnexpectedToken(format!("@{}", name.as_ref())));
            }
            Token::CurlyBracketBlock
            | Token::SquareBracketBlock
            | Token::Colon
            | Token::Semicolon
            | Token::CDO
            | Token::CDC
            | Token::IncludeMatch
            | Token::DashMatch
            | Token::PrefixMatch
            | Token::SuffixMatch
            | Token::SubstringMatch => {
                return Err(ValueProblem::UnexpectedToken(format!("{token:?}")));
            }
            Token::Ident(_)
            | Token::QuotedString(_)
            | Token::UnquotedUrl(_)
            | Token::Number { .. }
            | Token::Percentage { .. }
            | Token::Dimension { .. }
            | Token::WhiteSpace(_)
            | Token::Comment(_)
            | Token::Comma => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_hex_color;

    #[test]
    fn hex_colours_have_fixed_lengths() {
        assert!(is_hex_color("fff"));
        assert!(is_hex_color("ffff"));
        assert!(is_hex_color("a0b1c2"));
        assert!(is_hex_color("a0b1c2d3"));
        assert!(!is_hex_color("ff"));
        assert!(!is_hex_color("fffff"));
        assert!(!is_hex_color("ggg"));
    }
}
