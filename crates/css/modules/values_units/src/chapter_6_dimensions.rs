//! CSS Values & Units Level 3: §6 Dimensions
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use crate::ParseError;
use cssparser::{Parser, ParserInput, Token};

/// Decimal places kept when converting between length units.
const ROUNDING_SCALE: f32 = 10_000.0;

/// Absolute and relative `<length>` units.
///
/// Spec: <https://www.w3.org/TR/css-values-3/#lengths>
const LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax", "cm", "mm", "q", "in", "pt", "pc",
];

/// Length units the decoder writes: the default unit and its `em` conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthUnit {
    Pixels,
    Ems,
}

impl LengthUnit {
    /// The unit suffix as written in CSS.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Ems => "em",
        }
    }
}

/// True if `unit` (lowercase) is a `<length>` unit.
pub fn is_length_unit(unit: &str) -> bool {
    LENGTH_UNITS.contains(&unit)
}

/// A CSS <dimension>: a number immediately followed by a unit identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    pub value: f32,
    /// Unit lowercased for comparison (`PX` and `px` are the same unit).
    pub unit: String,
}

impl Dimension {
    /// A finite value in a `<length>` unit.
    pub fn is_length(&self) -> bool {
        self.value.is_finite() && is_length_unit(&self.unit)
    }
}

/// Convert a pixel length to ems relative to `base_font_size_px`.
///
/// `None` when the base is not a positive finite number or the result overflows.
pub fn px_to_em(px: f32, base_font_size_px: f32) -> Option<f32> {
    if !base_font_size_px.is_finite() || base_font_size_px <= 0.0 {
        return None;
    }
    let em = px / base_font_size_px;
    em.is_finite().then_some(em)
}

/// Render a number the way it should appear in a declaration: at most four
/// decimals, no trailing zeros, no trailing point, and never `-0`.
pub fn format_number(value: f32) -> String {
    let rounded = (value * ROUNDING_SCALE).round() / ROUNDING_SCALE;
    if rounded.abs() < f32::EPSILON {
        return "0".to_owned();
    }
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Parse a CSS <dimension> (§6). Any unit identifier is accepted.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<dimension>`.
pub fn parse_dimension(input: &mut Parser) -> Result<Dimension, ParseError> {
    match input.next_including_whitespace_and_comments() {
        Ok(Token::Dimension { value, unit, .. }) => Ok(Dimension {
            value: *value,
            unit: unit.as_ref().to_ascii_lowercase(),
        }),
        Ok(_) | Err(_) => Err(ParseError::UnexpectedToken),
    }
}

/// Parse a single space-free word as a `<dimension>` such as `10px` or `-5cm`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the word does not start with a
/// dimension and `ParseError::TrailingInput` when anything follows it.
pub fn parse_dimension_word(word: &str) -> Result<Dimension, ParseError> {
    let mut input = ParserInput::new(word);
    let mut parser = Parser::new(&mut input);
    let dimension = parse_dimension(&mut parser)?;
    if parser.is_exhausted() {
        Ok(dimension)
    } else {
        Err(ParseError::TrailingInput)
    }
}
