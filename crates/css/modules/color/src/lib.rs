//! CSS Color Module Level 4: colour values written in class-token shorthand.
//! Spec: <https://www.w3.org/TR/css-color-4/>
//!
//! Class tokens cannot contain `#`, `(`, `)` or `,`, so colours are encoded:
//! `hfff` stands for `#fff`, and `rgba 255 0 0 0.5` (dash-separated in the
//! token) stands for `rgba(255, 0, 0, 0.5)`.
use csscolorparser::Color;
use log::trace;

/// Properties whose values may carry a `<color>`.
const COLOR_PROPERTIES: &[&str] = &[
    "background",
    "background-color",
    "border",
    "border-bottom-color",
    "border-color",
    "border-left-color",
    "border-right-color",
    "border-top-color",
    "color",
    "outline-color",
    "text-decoration-color",
];

/// Colour functions that take comma-separated arguments.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#legacy-color-syntax>
const COLOR_FUNCTIONS: &[&str] = &["hsl", "hsla", "rgb", "rgba"];

/// Prefix standing in for `#` in encoded hex colours.
const HEX_MARKER: char = 'h';

/// Parse a CSS <color> into 8-bit RGBA channels.
///
/// Supports named colors, hex forms (`#rgb`/`#rgba`/`#rrggbb`/`#rrggbbaa`),
/// and functional notations like `rgb()/rgba()`.
///
/// Spec: <https://www.w3.org/TR/css-color-4/#typedef-color>
/// Spec: <https://www.w3.org/TR/css-color-4/#legacy-color-values>
pub type Rgba8Tuple = (u8, u8, u8, u8);
#[inline]
pub fn parse_css_color(input: &str) -> Option<Rgba8Tuple> {
    let parsed: Color = input.parse().ok()?;
    let channels = parsed.to_rgba8();
    let red = channels[0];
    let green = channels[1];
    let blue = channels[2];
    let alpha = channels[3];
    Some((red, green, blue, alpha))
}

/// True if `property` accepts colour values.
pub fn is_color_property(property: &str) -> bool {
    COLOR_PROPERTIES.contains(&property)
}

/// Decode an `h`-prefixed hex word (`hfff`, `h0a0b0c`) into `#`-prefixed form.
///
/// Only 3, 4, 6 and 8 digit forms that parse as a colour are accepted.
fn decode_hex_word(word: &str) -> Option<String> {
    let digits = word.strip_prefix(HEX_MARKER)?;
    if !matches!(digits.len(), 3 | 4 | 6 | 8) || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let hex = format!("#{digits}");
    parse_css_color(&hex).map(|_| hex)
}

/// Replace encoded hex colours in a colour-bearing property's value.
///
/// `color: hfff` becomes `color: #fff`; words such as `hidden` are left alone.
pub fn replace_h_with_hash(property: &str, value: &str) -> String {
    if !is_color_property(property) {
        return value.to_owned();
    }
    value
        .split(' ')
        .map(|word| decode_hex_word(word).unwrap_or_else(|| word.to_owned()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap colour-function arguments in parentheses.
///
/// `rgba 255 0 0 0.5` becomes `rgba(255, 0, 0, 0.5)`. Values that do not begin
/// with a colour function name followed by arguments are returned unchanged.
pub fn add_color_parenthetical(property: &str, value: &str) -> String {
    if !is_color_property(property) {
        return value.to_owned();
    }
    let Some((function, arguments)) = value.split_once(' ') else {
        return value.to_owned();
    };
    if !COLOR_FUNCTIONS.contains(&function) {
        return value.to_owned();
    }
    let parts: Vec<&str> = arguments.split(' ').filter(|arg| !arg.is_empty()).collect();
    if parts.is_empty() {
        return value.to_owned();
    }
    format!("{function}({})", parts.join(", "))
}

/// Apply every colour rewrite in order: hex first, then functional notation.
pub fn expand_color(property: &str, value: &str) -> String {
    let hashed = replace_h_with_hash(property, value);
    let expanded = add_color_parenthetical(property, &hashed);
    if expanded != value {
        trace!("[COLOR] {property}: '{value}' -> '{expanded}'");
    }
    expanded
}
