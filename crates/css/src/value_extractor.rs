//! Value extraction: strip the property prefix and the priority designator.
//!
//! - `fw-bold-i` → `bold` (abbreviated `font-weight`)
//! - `padding-1-10-10-5-i` → `1-10-10-5` (exact property name)
//! - `height-7_25rem-i` → `7_25rem` (underscores kept for the decoder)
//!
//! An encoded value may still contain dashes and underscores.

use crate::alias_table::AliasTable;
use core::error::Error;
use core::fmt;
use css_syntax::Priority;

/// Trailing designator marking a token as `!important`.
pub const IMPORTANCE_DESIGNATOR: &str = "-i";

/// Contract violations when extracting a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// Extraction was called without a resolved property.
    EmptyPropertyName,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPropertyName => formatter.write_str("CSS property name cannot be empty"),
        }
    }
}

impl Error for ExtractError {}

/// A value with its prefix and priority stripped, plus the priority itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedValue {
    pub value: String,
    pub priority: Priority,
}

/// True if `token` ends with the importance designator.
pub fn is_important(token: &str) -> bool {
    token.ends_with(IMPORTANCE_DESIGNATOR)
}

/// `Priority::Important` for `-i` tokens, `Priority::Normal` otherwise.
pub fn priority(token: &str) -> Priority {
    Priority::from_important(is_important(token))
}

/// Strip the importance designator from the end of `value`.
pub fn strip_priority_designator(value: &str) -> &str {
    value.strip_suffix(IMPORTANCE_DESIGNATOR).unwrap_or(value)
}

/// Strip `property-` from the start of `value`, if present.
///
/// # Errors
/// Returns `ExtractError::EmptyPropertyName` when `property` is empty.
pub fn strip_property_name<'value>(
    property: &str,
    value: &'value str,
) -> Result<&'value str, ExtractError> {
    if property.is_empty() {
        return Err(ExtractError::EmptyPropertyName);
    }
    Ok(value
        .strip_prefix(property)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(value))
}

/// Extracts encoded values using a table's abbreviations.
#[derive(Clone, Copy, Debug)]
pub struct ValueExtractor<'table> {
    table: &'table AliasTable,
}

impl<'table> ValueExtractor<'table> {
    pub const fn new(table: &'table AliasTable) -> Self {
        Self { table }
    }

    /// Strip the longest abbreviation of `property` from the start of `value`.
    pub fn strip_property_abbreviation<'value>(
        &self,
        property: &str,
        value: &'value str,
    ) -> &'value str {
        self.table
            .abbreviations(property)
            .into_iter()
            .find_map(|abbreviation| value.strip_prefix(abbreviation))
            .unwrap_or(value)
    }

    /// Extract the encoded value and priority of `token` for `property`.
    ///
    /// The exact `property-` prefix is stripped if present, otherwise the longest
    /// matching abbreviation; then a trailing `-i`.
    ///
    /// # Errors
    /// Returns `ExtractError::EmptyPropertyName` when `property` is empty.
    pub fn extract(&self, property: &str, token: &str) -> Result<EncodedValue, ExtractError> {
        let without_name = strip_property_name(property, token)?;
        let without_prefix = if without_name.len() == token.len() {
            self.strip_property_abbreviation(property, token)
        } else {
            without_name
        };
        Ok(EncodedValue {
            value: strip_priority_designator(without_prefix).to_owned(),
            priority: priority(token),
        })
    }
}
