//! CSS Values and Units Module Level 3: identifiers, numbers, percentages,
//! dimensions and default units for values decoded from class tokens.
//! Spec: <https://www.w3.org/TR/css-values-3/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the CSS Values table of contents.
pub mod chapter_3_identifiers;
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod default_units;
pub mod unit_policy;

use core::error::Error;
use core::fmt;

// Re-exports for ergonomic access from other crates.
pub use chapter_3_identifiers::{Ident, parse_ident, parse_ident_word};
pub use chapter_4_numbers::{Number, parse_number, parse_number_word};
pub use chapter_5_percentages::{Percentage, parse_percentage, parse_percentage_word};
pub use chapter_6_dimensions::{
    Dimension, LengthUnit, format_number, is_length_unit, parse_dimension, parse_dimension_word,
    px_to_em,
};
pub use default_units::default_unit;
pub use unit_policy::{PolicyError, UnitPolicy};

/// Parse error for Values & Units parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The next token did not match the expected grammar.
    UnexpectedToken,
    /// A single value was expected but more input followed it.
    TrailingInput,
}

impl fmt::Display for ParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken => formatter.write_str("unexpected token"),
            Self::TrailingInput => formatter.write_str("unexpected input after value"),
        }
    }
}

impl Error for ParseError {}
