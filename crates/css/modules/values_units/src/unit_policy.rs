//! Unit insertion and pixel conversion for decoded property values.

use crate::{
    LengthUnit, default_unit, format_number, parse_dimension_word, parse_number_word, px_to_em,
};
use core::error::Error;
use core::fmt;
use log::trace;
use serde::{Deserialize, Serialize};

/// Browser default root font size, used as the `px` → `em` divisor.
const DEFAULT_BASE_FONT_SIZE_PX: f32 = 16.0;

/// How units are added to, and converted within, a decoded value.
///
/// Values are treated as space-separated words; each word is classified on its
/// own so multi-value properties (`padding: 1 2 3 4`) are handled per word.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UnitPolicy {
    /// Rewrite `px` lengths as `em` lengths.
    pub px_to_em: bool,
    /// Pixel size of `1em` when converting.
    pub base_font_size_px: f32,
    /// Append the property's default unit to bare non-zero numbers.
    pub insert_default_units: bool,
}

impl Default for UnitPolicy {
    fn default() -> Self {
        Self {
            px_to_em: true,
            base_font_size_px: DEFAULT_BASE_FONT_SIZE_PX,
            insert_default_units: false,
        }
    }
}

/// A unit policy that cannot produce finite lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolicyError {
    /// `base_font_size_px` is zero, negative, infinite or NaN.
    BaseFontSize(f32),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseFontSize(size) => write!(
                formatter,
                "base_font_size_px must be a positive finite number, got {size}"
            ),
        }
    }
}

impl Error for PolicyError {}

impl UnitPolicy {
    /// Check the policy can convert pixels to ems.
    ///
    /// # Errors
    /// Returns `PolicyError::BaseFontSize` when the base is not a positive finite number.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.base_font_size_px.is_finite() && self.base_font_size_px > 0.0 {
            Ok(())
        } else {
            Err(PolicyError::BaseFontSize(self.base_font_size_px))
        }
    }

    /// Add or convert units in `value` for `property`.
    ///
    /// Words that are not a lone number or a lone dimension (keywords, percentages,
    /// colour functions, `0.5)` fragments) are passed through untouched, as are
    /// words whose converted length would not be finite.
    pub fn add_units(&self, property: &str, value: &str) -> String {
        let converted: Vec<String> = value
            .split(' ')
            .map(|word| self.convert_word(property, word))
            .collect();
        let out = converted.join(" ");
        if out != value {
            trace!("[UNITS] {property}: '{value}' -> '{out}'");
        }
        out
    }

    fn convert_word(&self, property: &str, word: &str) -> String {
        if let Ok(number) = parse_number_word(word) {
            if self.insert_default_units
                && !number.is_zero()
                && let Some(unit) = default_unit(property)
                && let Some(length) = self.render_length(number.0, unit)
            {
                return length;
            }
            return word.to_owned();
        }
        if self.px_to_em
            && let Ok(dimension) = parse_dimension_word(word)
            && dimension.unit == LengthUnit::Pixels.as_str()
            && let Some(length) = self.render_length(dimension.value, LengthUnit::Pixels)
        {
            return length;
        }
        word.to_owned()
    }

    fn render_length(&self, value: f32, unit: LengthUnit) -> Option<String> {
        if !value.is_finite() {
            return None;
        }
        match unit {
            LengthUnit::Pixels if self.px_to_em => {
                let ems = px_to_em(value, self.base_font_size_px)?;
                Some(format!("{}{}", format_number(ems), LengthUnit::Ems.as_str()))
            }
            LengthUnit::Pixels | LengthUnit::Ems => {
                Some(format!("{}{}", format_number(value), unit.as_str()))
            }
        }
    }
}
