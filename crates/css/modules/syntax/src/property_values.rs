//! Per-property value grammars: which kinds of word each known property accepts.
//! Spec: <https://www.w3.org/TR/css-values-3/#component-types>
//!
//! Properties without an entry (shorthands such as `border`, custom
//! properties) are only checked at the token level.

use crate::value_check::ValueProblem;
use css_color::parse_css_color;
use css_values_units::{
    parse_dimension_word, parse_ident_word, parse_number_word, parse_percentage_word,
};
use cssparser::{ParseError, Parser, ParserInput, Token};

/// Keywords every property accepts as its whole value.
///
/// Spec: <https://www.w3.org/TR/css-values-4/#common-keywords>
const CSS_WIDE_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert"];

/// Functions that stand in for a numeric value.
///
/// Spec: <https://www.w3.org/TR/css-values-4/#math>
const MATH_FUNCTIONS: &[&str] = &["calc", "min", "max", "clamp"];

const SIZE_KEYWORDS: &[&str] = &["min-content", "max-content", "fit-content"];

const FONT_SIZE_KEYWORDS: &[&str] = &[
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
    "smaller", "larger",
];

const DISPLAY_KEYWORDS: &[&str] = &[
    "none", "block", "inline", "inline-block", "flex", "inline-flex", "grid", "inline-grid",
    "flow-root", "contents", "list-item", "table", "table-row", "table-cell", "run-in",
];

const CURSOR_KEYWORDS: &[&str] = &[
    "auto", "default", "none", "context-menu", "help", "pointer", "progress", "wait", "cell",
    "crosshair", "text", "vertical-text", "alias", "copy", "move", "no-drop", "not-allowed",
    "grab", "grabbing", "all-scroll", "col-resize", "row-resize", "n-resize", "e-resize",
    "s-resize", "w-resize", "ne-resize", "nw-resize", "se-resize", "sw-resize", "ew-resize",
    "ns-resize", "nesw-resize", "nwse-resize", "zoom-in", "zoom-out",
];

const BORDER_STYLE_KEYWORDS: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// One kind of word a property value may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Component {
    /// `<length>`; a bare number counts as a unitless length.
    Length,
    Number,
    Integer,
    Percentage,
    Color,
    Keywords(&'static [&'static str]),
}

impl Component {
    const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Length | Self::Number | Self::Integer | Self::Percentage
        )
    }

    fn accepts(self, word: &str) -> bool {
        match self {
            Self::Length => {
                parse_dimension_word(word).is_ok_and(|dimension| dimension.is_length())
                    || is_number_word(word)
            }
            Self::Number => is_number_word(word),
            Self::Integer => parse_number_word(word)
                .is_ok_and(|number| number.0.is_finite() && number.0.fract().abs() < f32::EPSILON),
            Self::Percentage => parse_percentage_word(word).is_ok(),
            Self::Color => is_color_word(word),
            Self::Keywords(keywords) => {
                parse_ident_word(word).is_ok_and(|ident| keywords.contains(&ident.0.as_str()))
            }
        }
    }
}

/// The words a property accepts and how many of them it takes.
#[derive(Clone, Copy, Debug)]
struct Grammar {
    components: &'static [Component],
    max_words: usize,
}

impl Grammar {
    const fn single(components: &'static [Component]) -> Self {
        Self {
            components,
            max_words: 1,
        }
    }

    const fn up_to(max_words: usize, components: &'static [Component]) -> Self {
        Self {
            components,
            max_words,
        }
    }

    fn accepts(&self, word: &str) -> bool {
        if let Some(name) = function_name(word) {
            return name == "var"
                || (MATH_FUNCTIONS.contains(&name.as_str())
                    && self.components.iter().any(|component| component.is_numeric()));
        }
        self.components
            .iter()
            .any(|component| component.accepts(word))
    }
}

fn grammar(property: &str) -> Option<Grammar> {
    use Component::{Color, Integer, Keywords, Length, Number, Percentage};

    let grammar = match property {
        "color" | "background-color" | "border-top-color" | "border-right-color"
        | "border-bottom-color" | "border-left-color" | "outline-color"
        | "text-decoration-color" => Grammar::single(&[Color]),
        "border-color" => Grammar::up_to(4, &[Color]),
        "padding" => Grammar::up_to(4, &[Length, Percentage]),
        "padding-top" | "padding-right" | "padding-bottom" | "padding-left" => {
            Grammar::single(&[Length, Percentage])
        }
        "margin" => Grammar::up_to(4, &[Length, Percentage, Keywords(&["auto"])]),
        "margin-top" | "margin-right" | "margin-bottom" | "margin-left" | "top" | "right"
        | "bottom" | "left" => Grammar::single(&[Length, Percentage, Keywords(&["auto"])]),
        "width" | "height" | "min-width" | "min-height" => {
            Grammar::single(&[Length, Percentage, Keywords(&["auto"]), Keywords(SIZE_KEYWORDS)])
        }
        "max-width" | "max-height" => {
            Grammar::single(&[Length, Percentage, Keywords(&["none"]), Keywords(SIZE_KEYWORDS)])
        }
        "font-size" => Grammar::single(&[Length, Percentage, Keywords(FONT_SIZE_KEYWORDS)]),
        "line-height" => Grammar::single(&[Number, Length, Percentage, Keywords(&["normal"])]),
        "letter-spacing" => Grammar::single(&[Length, Keywords(&["normal"])]),
        "border-width" => Grammar::up_to(4, &[Length, Keywords(&["thin", "medium", "thick"])]),
        "border-radius" => Grammar::up_to(4, &[Length, Percentage]),
        "border-style" => Grammar::up_to(4, &[Keywords(BORDER_STYLE_KEYWORDS)]),
        "opacity" => Grammar::single(&[Number, Percentage]),
        "z-index" => Grammar::single(&[Integer, Keywords(&["auto"])]),
        "flex-grow" => Grammar::single(&[Number]),
        "font-weight" => Grammar::single(&[
            Number,
            Keywords(&["normal", "bold", "bolder", "lighter"]),
        ]),
        "font-style" => Grammar::single(&[Keywords(&["normal", "italic", "oblique"])]),
        "display" => Grammar::up_to(2, &[Keywords(DISPLAY_KEYWORDS)]),
        "position" => Grammar::single(&[Keywords(&[
            "static", "relative", "absolute", "fixed", "sticky",
        ])]),
        "visibility" => Grammar::single(&[Keywords(&["visible", "hidden", "collapse"])]),
        "overflow" => Grammar::up_to(2, &[Keywords(&[
            "visible", "hidden", "clip", "scroll", "auto",
        ])]),
        "text-align" => Grammar::single(&[Keywords(&[
            "left", "right", "center", "justify", "start", "end", "match-parent",
        ])]),
        "text-transform" => Grammar::single(&[Keywords(&[
            "none", "capitalize", "uppercase", "lowercase", "full-width",
        ])]),
        "white-space" => Grammar::single(&[Keywords(&[
            "normal", "nowrap", "pre", "pre-wrap", "pre-line", "break-spaces",
        ])]),
        "flex-direction" => Grammar::single(&[Keywords(&[
            "row", "row-reverse", "column", "column-reverse",
        ])]),
        "flex-wrap" => Grammar::single(&[Keywords(&["nowrap", "wrap", "wrap-reverse"])]),
        "float" => Grammar::single(&[Keywords(&[
            "left", "right", "none", "inline-start", "inline-end",
        ])]),
        "clear" => Grammar::single(&[Keywords(&[
            "left", "right", "both", "none", "inline-start", "inline-end",
        ])]),
        "cursor" => Grammar::single(&[Keywords(CURSOR_KEYWORDS)]),
        _ => return None,
    };
    Some(grammar)
}

fn is_number_word(word: &str) -> bool {
    parse_number_word(word).is_ok_and(|number| number.0.is_finite())
}

/// A `<color>` written out in full: a named colour, `#` hex, or a colour function.
fn is_color_word(word: &str) -> bool {
    if word.eq_ignore_ascii_case("currentcolor") {
        return true;
    }
    // Bare hex digits would otherwise be read as a hex colour missing its `#`.
    if !word.starts_with('#') && word.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return false;
    }
    parse_css_color(word).is_some()
}

/// Lowercased name of a word written as `name(...)`.
fn function_name(word: &str) -> Option<String> {
    let (name, _) = word.strip_suffix(')')?.split_once('(')?;
    Some(name.to_ascii_lowercase())
}

fn push_word<'value>(words: &mut Vec<&'value str>, slice: &'value str) {
    let word = slice.trim();
    if !word.is_empty() {
        words.push(word);
    }
}

/// Split a value at top-level whitespace; blocks such as `rgb(0, 0, 0)` stay whole.
fn top_level_words(value: &str) -> Result<Vec<&str>, ValueProblem> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut words = Vec::new();
    let mut start = parser.position();
    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        if matches!(token, Token::WhiteSpace(_)) {
            push_word(&mut words, parser.slice_from(start));
            start = parser.position();
        } else if matches!(
            token,
            Token::Function(_)
                | Token::ParenthesisBlock
                | Token::SquareBracketBlock
                | Token::CurlyBracketBlock
        ) {
            parser
                .parse_nested_block(|block| {
                    while block.next_including_whitespace_and_comments().is_ok() {}
                    Ok::<(), ParseError<'_, ()>>(())
                })
                .map_err(|_| ValueProblem::Unbalanced)?;
        }
    }
    push_word(&mut words, parser.slice_from(start));
    Ok(words)
}

/// Check that every word of `value` is something `property` accepts.
///
/// `property` must be lowercase. Unknown properties are accepted unchanged.
///
/// # Errors
/// Returns `ValueProblem::NotAllowed` for the first word the property does not
/// accept and `ValueProblem::TooManyWords` when the property takes fewer words.
pub fn check_property_value(property: &str, value: &str) -> Result<(), ValueProblem> {
    let Some(grammar) = grammar(property) else {
        return Ok(());
    };
    let words = top_level_words(value)?;
    if let [word] = words.as_slice()
        && parse_ident_word(word).is_ok_and(|ident| CSS_WIDE_KEYWORDS.contains(&ident.0.as_str()))
    {
        return Ok(());
    }
    if words.is_empty() {
        return Err(ValueProblem::Empty);
    }
    if words.len() > grammar.max_words {
        return Err(ValueProblem::TooManyWords {
            property: property.to_owned(),
            found: words.len(),
            max: grammar.max_words,
        });
    }
    match words.iter().find(|word| !grammar.accepts(word)) {
        Some(word) => Err(ValueProblem::NotAllowed {
            property: property.to_owned(),
            word: (*word).to_owned(),
        }),
        None => Ok(()),
    }
}
