//! CSS Syntax Module Level 3: single-declaration parsing and validation.
//! Spec: <https://www.w3.org/TR/css-syntax-3/>
//!
//! Decoded class tokens are checked here before they become declarations:
//! `name: value [!important]` must parse as exactly one declaration, its
//! value must be made of tokens a property value can legally contain, and
//! each word must be of a kind the property accepts.

#![forbid(unsafe_code)]

mod property_values;
mod value_check;

use core::error::Error;
use core::fmt;
use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::ParseError;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use log::debug;

pub use property_values::check_property_value;
pub use value_check::{ValueProblem, check_value};

/// Literal priority written for `!important` declarations.
pub const IMPORTANT: &str = "IMPORTANT";

/// Declaration priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    #[default]
    Normal,
    Important,
}

impl Priority {
    /// Map an importance flag to a priority.
    pub const fn from_important(important: bool) -> Self {
        if important {
            Self::Important
        } else {
            Self::Normal
        }
    }

    pub const fn is_important(self) -> bool {
        matches!(self, Self::Important)
    }

    /// The priority literal: `IMPORTANT` or the empty string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Important => IMPORTANT,
        }
    }

    /// Suffix appended to a declaration's value in CSS text.
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Important => " !important",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Raw value text (without trailing !important).
    pub value: String,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

/// The checked text could not be read as the requested declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    /// `cssparser` produced no declaration; carries the offending slice.
    Unparsable(String),
    /// The text parsed as a declaration of a different property.
    NameMismatch { expected: String, found: String },
    /// `!important` appeared where it was not requested, or was lost.
    PriorityMismatch,
    /// The value spilled into further declarations or text (`1;color:red`).
    TrailingInput,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable(slice) => write!(formatter, "not valid CSS syntax near '{slice}'"),
            Self::NameMismatch { expected, found } => {
                write!(formatter, "expected property '{expected}', parsed '{found}'")
            }
            Self::PriorityMismatch => formatter.write_str("priority does not match the value"),
            Self::TrailingInput => formatter.write_str("value continues past the declaration"),
        }
    }
}

impl Error for SyntaxError {}

/// Capability interface for checking a decoded declaration.
///
/// `Ok(false)` means the declaration is well formed but its value is not
/// acceptable; `Err` means the text is not valid CSS syntax at all. Callers
/// treat both as a rejection of the declaration, never as a fatal error.
pub trait PropertyValidator: Send + Sync {
    /// Check `name: value` with the given priority.
    ///
    /// # Errors
    /// Returns `SyntaxError` when the text does not parse as that one declaration.
    fn validate(&self, name: &str, value: &str, priority: Priority) -> Result<bool, SyntaxError>;
}

/// `PropertyValidator` backed by `cssparser`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CssGrammarValidator;

impl PropertyValidator for CssGrammarValidator {
    fn validate(&self, name: &str, value: &str, priority: Priority) -> Result<bool, SyntaxError> {
        let text = format!("{name}: {value}{}", priority.css_suffix());
        let parsed = parse_declaration(&text)?;
        let expected = name.to_ascii_lowercase();
        if parsed.name != expected {
            return Err(SyntaxError::NameMismatch {
                expected,
                found: parsed.name,
            });
        }
        if parsed.important != priority.is_important() {
            return Err(SyntaxError::PriorityMismatch);
        }
        if parsed.value != value.trim() {
            return Err(SyntaxError::TrailingInput);
        }
        match check_value(&parsed.value)
            .and_then(|()| check_property_value(&expected, &parsed.value))
        {
            Ok(()) => Ok(true),
            Err(problem) => {
                debug!("[SYNTAX] {name}: '{value}' rejected: {problem}");
                Ok(false)
            }
        }
    }
}

/// Parse `!important` at the end of a value, returning (`value_without_important`, `important_flag`).
fn split_important_tail(value: &str) -> (String, bool) {
    let trimmed = value.trim();
    if let Some(pos) = trimmed.rfind("!important")
        && let Some(prefix) = trimmed.get(..pos)
    {
        let head = prefix.trim_end();
        return (head.to_owned(), true);
    }
    (trimmed.to_owned(), false)
}

/// A declaration-only body parser that records property name and its raw value.
struct DeclarationCollector;

impl<'i> CssDeclarationParser<'i> for DeclarationCollector {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        _declaration_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let start = input.position();
        // Consume until end of the declaration item.
        while input.next_including_whitespace_and_comments().is_ok() {}
        let raw = input.slice_from(start);
        let (value, important) = split_important_tail(raw);
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value,
            important,
        })
    }
}

// At-rules and nested rules are never produced; the default methods reject them.
impl CssAtRuleParser<'_> for DeclarationCollector {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl CssQualifiedRuleParser<'_> for DeclarationCollector {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl CssRuleBodyItemParser<'_, Declaration, ()> for DeclarationCollector {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Parse text holding exactly one declaration, such as `padding: 1px !important`.
///
/// # Errors
/// Returns `SyntaxError::Unparsable` if no declaration can be read and
/// `SyntaxError::TrailingInput` if more than one item follows.
pub fn parse_declaration(text: &str) -> Result<Declaration, SyntaxError> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut collector = DeclarationCollector;
    let mut items = CssRuleBodyParser::new(&mut parser, &mut collector);
    let declaration = match items.next() {
        Some(Ok(declaration)) => declaration,
        Some(Err((_, slice))) => return Err(SyntaxError::Unparsable(slice.to_owned())),
        None => return Err(SyntaxError::Unparsable(text.to_owned())),
    };
    if items.next().is_some() {
        return Err(SyntaxError::TrailingInput);
    }
    Ok(declaration)
}
