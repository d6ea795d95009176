//! Atomic CSS class decoding.
//!
//! Each class token encodes one declaration: `fw-bold-i` is
//! `font-weight: bold !important`, `padding-1-10-10-5` is `padding: 1 10 10 5`,
//! `height-7_25rem` is `height: 7.25rem`. `ClassDecoder` runs a set of tokens
//! through cleaning, property resolution, value extraction, value decoding and
//! validation, and reports the accepted declarations together with every
//! rejected token and the reason it was rejected.

pub mod alias_table;
pub mod class_decoder;
pub mod cleaner;
pub mod config;
pub mod property_name;
pub mod types;
pub mod validation;
pub mod value_decoder;
pub mod value_extractor;

pub use alias_table::{AliasRecord, AliasTable, AliasTableError};
pub use class_decoder::ClassDecoder;
pub use cleaner::{CleanedClasses, clean};
pub use config::DecoderConfig;
pub use css_syntax::{CssGrammarValidator, Priority, PropertyValidator, SyntaxError};
pub use css_values_units::UnitPolicy;
pub use property_name::{PropertyNameResolver, ResolvedClasses};
pub use types::{
    DecodeReport, Declaration, RejectionReason, RemovedClass, RemovedSet, TokenOutcome,
};
pub use value_decoder::{DecodeStep, ValueDecoder};
pub use value_extractor::{EncodedValue, ExtractError, ValueExtractor};
