//! Ordered registry of CSS property names and the aliases that encode them.
//!
//! Table order is significant: the resolver scans properties in declared order
//! and the first property offering any match wins. More specific properties
//! (`padding-top`) must therefore be declared before their dash-prefixes
//! (`padding`).

use anyhow::{Context as _, Result};
use core::error::Error;
use core::fmt;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Suffix marking an alias as an abbreviation of `property-`.
const ABBREVIATION_MARKER: char = '-';

/// Built-in properties, longest name first, each with its aliases.
///
/// Keyword aliases double as the value (`bold` means `font-weight: bold`);
/// abbreviations end with `-` and stand in for the property name (`fw-`).
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("text-decoration-color", &["tdc-"]),
    ("background-color", &["bgc-"]),
    ("text-decoration", &["td-", "underline", "overline"]),
    ("text-transform", &["tt-", "uppercase", "lowercase", "capitalize"]),
    ("flex-direction", &["fd-"]),
    ("padding-bottom", &["pb-"]),
    ("letter-spacing", &["ls-"]),
    ("border-radius", &["br-"]),
    ("margin-bottom", &["mb-"]),
    ("padding-right", &["pr-"]),
    ("border-color", &["bc-"]),
    ("border-width", &["bw-"]),
    ("border-style", &["bs-", "solid", "dashed", "dotted", "double"]),
    ("padding-left", &["pl-"]),
    ("margin-right", &["mr-"]),
    ("padding-top", &["pt-"]),
    ("margin-left", &["ml-"]),
    ("font-weight", &["normal", "bold", "bolder", "lighter", "initial", "fw-"]),
    ("line-height", &["lh-"]),
    ("white-space", &["ws-", "nowrap"]),
    ("text-align", &["ta-", "justify"]),
    ("font-style", &["italic", "oblique"]),
    ("max-height", &["max-h-"]),
    ("min-height", &["min-h-"]),
    ("margin-top", &["mt-"]),
    ("background", &["bg-"]),
    ("visibility", &["vis-", "visible", "hidden"]),
    ("font-size", &["fs-"]),
    ("max-width", &["max-w-"]),
    ("min-width", &["min-w-"]),
    ("flex-wrap", &["fwr-", "wrap"]),
    ("flex-grow", &["fg-"]),
    ("position", &["pos-", "absolute", "relative", "fixed", "static", "sticky"]),
    ("overflow", &["ov-"]),
    ("z-index", &["z-"]),
    ("opacity", &["op-"]),
    ("display", &["d-", "block", "inline"]),
    ("padding", &["p-"]),
    ("cursor", &["cur-", "pointer"]),
    ("margin", &["m-"]),
    ("height", &["h-"]),
    ("border", &["b-"]),
    ("bottom", &["btm-"]),
    ("color", &["c-"]),
    ("width", &["w-"]),
    ("float", &["fl-"]),
    ("clear", &["cl-"]),
    ("right", &["r-"]),
    ("left", &["l-"]),
    ("top", &["t-"]),
];

/// True if `alias` is an abbreviation such as `fw-` for `font-weight-`.
pub fn alias_is_abbreviation(alias: &str) -> bool {
    alias.ends_with(ABBREVIATION_MARKER)
}

/// One property and its aliases as written in an alias file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AliasRecord {
    pub property: String,
    pub aliases: Vec<String>,
}

/// A single (property, alias) pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AliasEntry<'table> {
    pub property: &'table str,
    pub alias: &'table str,
    pub is_abbreviation: bool,
}

/// A property with its aliases in declared order and in matching order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyAliases {
    property: String,
    aliases: Vec<String>,
    /// Aliases sorted by descending length so `bolder` is tried before `bold`.
    longest_first: Vec<String>,
}

impl PropertyAliases {
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Aliases in declared order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Aliases in matching order: longest first, declared order among equals.
    pub fn longest_first(&self) -> &[String] {
        &self.longest_first
    }

    /// The abbreviation aliases (ending in `-`), longest first.
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.longest_first
            .iter()
            .map(String::as_str)
            .filter(|alias| alias_is_abbreviation(alias))
    }
}

/// Problems that make a set of records unusable as an alias table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AliasTableError {
    EmptyPropertyName,
    /// Every property needs at least one alias.
    NoAliases(String),
    EmptyAlias(String),
    DuplicateProperty(String),
}

impl fmt::Display for AliasTableError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPropertyName => formatter.write_str("alias table has an empty property name"),
            Self::NoAliases(property) => write!(formatter, "property '{property}' has no aliases"),
            Self::EmptyAlias(property) => {
                write!(formatter, "property '{property}' has an empty alias")
            }
            Self::DuplicateProperty(property) => {
                write!(formatter, "property '{property}' is declared more than once")
            }
        }
    }
}

impl Error for AliasTableError {}

/// Immutable, ordered property/alias registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasTable {
    properties: Vec<PropertyAliases>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        let properties = BUILTIN_ALIASES
            .iter()
            .map(|(property, aliases)| {
                PropertyAliases::new(
                    (*property).to_owned(),
                    aliases.iter().map(|alias| (*alias).to_owned()).collect(),
                )
            })
            .collect();
        Self { properties }
    }

    /// Build a table from records, keeping their order.
    ///
    /// # Errors
    /// Returns `AliasTableError` for empty names or aliases, properties without
    /// aliases, and properties declared twice.
    pub fn from_records(records: Vec<AliasRecord>) -> Result<Self, AliasTableError> {
        let mut properties: Vec<PropertyAliases> = Vec::with_capacity(records.len());
        for record in records {
            if record.property.is_empty() {
                return Err(AliasTableError::EmptyPropertyName);
            }
            if record.aliases.is_empty() {
                return Err(AliasTableError::NoAliases(record.property));
            }
            if record.aliases.iter().any(String::is_empty) {
                return Err(AliasTableError::EmptyAlias(record.property));
            }
            if properties
                .iter()
                .any(|existing| existing.property == record.property)
            {
                return Err(AliasTableError::DuplicateProperty(record.property));
            }
            properties.push(PropertyAliases::new(record.property, record.aliases));
        }
        Ok(Self { properties })
    }

    /// Parse a JSON array of `{ "property": ..., "aliases": [...] }` records.
    ///
    /// # Errors
    /// Returns an error for malformed JSON or an unusable table.
    pub fn from_json(text: &str) -> Result<Self> {
        let records: Vec<AliasRecord> =
            serde_json::from_str(text).context("alias table is not a list of records")?;
        Ok(Self::from_records(records)?)
    }

    /// Load a JSON alias table from `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read alias table {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("failed to parse alias table {}", path.display()))
    }

    /// Properties in declared order.
    pub fn properties(&self) -> &[PropertyAliases] {
        &self.properties
    }

    pub fn get(&self, property: &str) -> Option<&PropertyAliases> {
        self.properties
            .iter()
            .find(|entry| entry.property == property)
    }

    pub fn contains_property(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Abbreviation aliases of `property`, longest first.
    pub fn abbreviations(&self, property: &str) -> Vec<&str> {
        self.get(property)
            .map(|entry| entry.abbreviations().collect())
            .unwrap_or_default()
    }

    /// Every (property, alias) pair in table order.
    pub fn entries(&self) -> impl Iterator<Item = AliasEntry<'_>> {
        self.properties.iter().flat_map(|entry| {
            entry.aliases.iter().map(move |alias| AliasEntry {
                property: &entry.property,
                alias,
                is_abbreviation: alias_is_abbreviation(alias),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyAliases {
    fn new(property: String, aliases: Vec<String>) -> Self {
        let mut longest_first = aliases.clone();
        // Stable: equal-length aliases keep their declared order.
        longest_first.sort_by(|left, right| right.len().cmp(&left.len()));
        Self {
            property,
            aliases,
            longest_first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BUILTIN_ALIASES;
    use std::collections::HashSet;

    #[test]
    fn builtin_declares_specific_properties_before_their_prefixes() {
        for (index, (earlier, _)) in BUILTIN_ALIASES.iter().enumerate() {
            let prefix = format!("{earlier}-");
            for (later, _) in BUILTIN_ALIASES.iter().skip(index + 1) {
                assert!(
                    !later.starts_with(&prefix),
                    "'{later}' is declared after its prefix '{earlier}'"
                );
            }
        }
    }

    #[test]
    fn builtin_aliases_are_unique() {
        let mut seen = HashSet::new();
        for (_, aliases) in BUILTIN_ALIASES {
            for alias in *aliases {
                assert!(seen.insert(*alias), "alias '{alias}' is listed twice");
            }
        }
    }
}
