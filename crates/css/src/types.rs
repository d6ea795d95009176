//! Values passed between pipeline stages and reported to callers.

use core::fmt;
use css_syntax::Priority;
use std::collections::BTreeSet;
use std::collections::btree_set::Iter;

/// Why a token was removed from the class set.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RejectionReason {
    FirstCharacter,
    InvalidCharacter,
    LastCharacter,
    Underscore,
    NoMatchingProperty,
    /// The decoded value parsed but is not an acceptable property value.
    InvalidValue(String),
    /// The decoded declaration is not valid CSS syntax.
    SyntaxError(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstCharacter => {
                formatter.write_str("Only a-z allowed for first character of class.")
            }
            Self::InvalidCharacter => formatter
                .write_str("Only a-z, 0-9, \"_\", and \"-\" are allowed in class name."),
            Self::LastCharacter => {
                formatter.write_str("Only a-z and 0-9 allowed for last character of class.")
            }
            Self::Underscore => formatter.write_str("Invalid underscore usage in class."),
            Self::NoMatchingProperty => formatter.write_str("No matching property name found."),
            Self::InvalidValue(detail) => write!(formatter, "Invalid property value: {detail}."),
            Self::SyntaxError(detail) => write!(formatter, "Not valid CSS syntax: {detail}."),
        }
    }
}

/// A token paired with the reason it was rejected.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RemovedClass {
    pub token: String,
    pub reason: RejectionReason,
}

impl fmt::Display for RemovedClass {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} ({})", self.token, self.reason)
    }
}

/// Every token rejected at any stage, with its reason. Append-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovedSet {
    entries: BTreeSet<RemovedClass>,
}

impl RemovedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: impl Into<String>, reason: RejectionReason) {
        self.entries.insert(RemovedClass {
            token: token.into(),
            reason,
        });
    }

    /// Move every entry of `other` into this set.
    pub fn append(&mut self, other: &mut Self) {
        self.entries.append(&mut other.entries);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.iter().any(|entry| entry.token == token)
    }

    /// The reason `token` was rejected, if it was.
    pub fn reason_for(&self, token: &str) -> Option<&RejectionReason> {
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| &entry.reason)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RemovedClass> {
        self.entries.iter()
    }
}

impl<'set> IntoIterator for &'set RemovedSet {
    type Item = &'set RemovedClass;
    type IntoIter = Iter<'set, RemovedClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A decoded declaration ready for a stylesheet assembler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Canonical property name.
    pub property: String,
    /// Decoded, validated value.
    pub value: String,
    pub priority: Priority,
    /// The class token this declaration was decoded from.
    pub token: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: {}{}",
            self.property,
            self.value,
            self.priority.css_suffix()
        )
    }
}

/// Terminal state of a single token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenOutcome {
    Accepted(Declaration),
    Rejected(RejectionReason),
}

/// Result of decoding a whole class set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Accepted declarations in ascending token order.
    pub declarations: Vec<Declaration>,
    pub removed: RemovedSet,
}

impl DecodeReport {
    /// Record a token's terminal state.
    pub fn record(&mut self, token: String, outcome: TokenOutcome) {
        match outcome {
            TokenOutcome::Accepted(declaration) => self.declarations.push(declaration),
            TokenOutcome::Rejected(reason) => self.removed.insert(token, reason),
        }
    }

    /// The accepted declaration for `token`, if any.
    pub fn declaration_for(&self, token: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|declaration| declaration.token == token)
    }
}
