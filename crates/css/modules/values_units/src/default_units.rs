//! Default units for properties whose numeric values are lengths.

use crate::LengthUnit;

/// Properties that take a `<length>` and whose bare numbers need a unit to be valid.
///
/// Unitless properties (`font-weight`, `line-height`, `opacity`, `z-index`,
/// `flex-grow`, `order`) are absent.
const LENGTH_PROPERTIES: &[&str] = &[
    "border",
    "border-bottom-width",
    "border-left-width",
    "border-radius",
    "border-right-width",
    "border-top-width",
    "border-width",
    "bottom",
    "flex-basis",
    "font-size",
    "gap",
    "height",
    "left",
    "letter-spacing",
    "margin",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "max-height",
    "max-width",
    "min-height",
    "min-width",
    "outline-width",
    "padding",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "right",
    "text-indent",
    "top",
    "width",
    "word-spacing",
];

/// The unit appended to a bare number for `property`, if the property requires one.
pub fn default_unit(property: &str) -> Option<LengthUnit> {
    LENGTH_PROPERTIES
        .contains(&property)
        .then_some(LengthUnit::Pixels)
}
