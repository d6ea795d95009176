//! Property-name resolution for cleaned class tokens.
//!
//! A token names its property either in exact form (`font-weight-700`, the
//! property name followed by a dash) or through an alias (`bold`, `fw-700`).
//! Identical property names must carry a value: `font-weight` alone does not
//! resolve, `font-weight-700` does.

use crate::alias_table::AliasTable;
use crate::types::{RejectionReason, RemovedSet};
use log::debug;

/// Tokens paired with the property they resolved to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedClasses {
    /// (token, property) in token order.
    pub resolved: Vec<(String, String)>,
    pub removed: RemovedSet,
}

/// Resolves tokens against an `AliasTable`.
#[derive(Clone, Copy, Debug)]
pub struct PropertyNameResolver<'table> {
    table: &'table AliasTable,
}

impl<'table> PropertyNameResolver<'table> {
    pub const fn new(table: &'table AliasTable) -> Self {
        Self { table }
    }

    /// The property `token` encodes, or `None` if no table entry matches.
    ///
    /// Properties are scanned in table order. For each one the exact
    /// `property-` form is tried first, then its aliases longest first, so
    /// `bolder` is never taken for `bold`. The first property with any match wins.
    pub fn resolve(&self, token: &str) -> Option<&'table str> {
        for entry in self.table.properties() {
            let property = entry.property();
            if token
                .strip_prefix(property)
                .is_some_and(|rest| rest.starts_with('-'))
            {
                return Some(property);
            }
            if entry
                .longest_first()
                .iter()
                .any(|alias| token.starts_with(alias.as_str()))
            {
                return Some(property);
            }
        }
        None
    }

    /// Resolve every token, rejecting all that match nothing.
    ///
    /// Unmatched tokens are staged during the scan and recorded afterwards, so
    /// every unmatched token is classified, not only the first.
    pub fn resolve_all<'token, I>(&self, tokens: I) -> ResolvedClasses
    where
        I: IntoIterator<Item = &'token String>,
    {
        let mut resolved = Vec::new();
        let mut unmatched = Vec::new();
        for token in tokens {
            match self.resolve(token) {
                Some(property) => resolved.push((token.clone(), property.to_owned())),
                None => unmatched.push(token.clone()),
            }
        }

        let mut removed = RemovedSet::new();
        for token in unmatched {
            debug!("[PROPERTY-NAME] no property matches '{token}'");
            removed.insert(token, RejectionReason::NoMatchingProperty);
        }
        ResolvedClasses { resolved, removed }
    }
}
