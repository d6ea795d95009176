//! Character-class validation of raw class tokens.
//!
//! Class names must abide by <http://www.w3.org/TR/CSS2/syndata.html#characters>.
//! Encoded classes use a subset of that grammar:
//! - the first character is `[a-z]`,
//! - every character is `[a-z0-9_-]`,
//! - the last character is `[a-z0-9]`,
//! - `_` only appears between two digits, where it stands for a decimal point.

use crate::types::{RejectionReason, RemovedSet};
use log::debug;
use std::collections::BTreeSet;

/// Tokens that passed cleaning, and the ones that did not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanedClasses {
    pub cleaned: BTreeSet<String>,
    pub removed: RemovedSet,
}

const fn is_allowed_first(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

const fn is_allowed_middle(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-'
}

const fn is_allowed_last(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

/// Validate underscore usage in a single token.
///
/// Valid: `6_3`. Invalid: `_b`, `b_`, `padding-_2`, `2_rem`, `m_px`, `__`.
pub fn underscores_valid(token: &str) -> bool {
    let chars: Vec<char> = token.chars().collect();
    if chars.first() == Some(&'_') || chars.last() == Some(&'_') {
        return false;
    }
    chars.iter().enumerate().all(|(index, ch)| {
        if *ch != '_' {
            return true;
        }
        let before = index.checked_sub(1).and_then(|prev| chars.get(prev));
        let after = chars.get(index + 1);
        before.is_some_and(char::is_ascii_digit) && after.is_some_and(char::is_ascii_digit)
    })
}

/// Check one already lower-cased token, reporting the first rule it breaks.
///
/// # Errors
/// Returns the `RejectionReason` for the first failing rule.
pub fn check_token(token: &str) -> Result<(), RejectionReason> {
    if !token.chars().next().is_some_and(is_allowed_first) {
        return Err(RejectionReason::FirstCharacter);
    }
    if !token.chars().all(is_allowed_middle) {
        return Err(RejectionReason::InvalidCharacter);
    }
    if !token.chars().last().is_some_and(is_allowed_last) {
        return Err(RejectionReason::LastCharacter);
    }
    if !underscores_valid(token) {
        return Err(RejectionReason::Underscore);
    }
    Ok(())
}

/// Lower-case every token and split the set into clean and removed tokens.
///
/// Rejections are gathered during a read-only scan and applied afterwards, so
/// the working set is never mutated while it is iterated.
pub fn clean<I, S>(tokens: I) -> CleanedClasses
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned: BTreeSet<String> = tokens
        .into_iter()
        .map(|token| token.as_ref().to_lowercase())
        .collect();

    let invalid: Vec<(String, RejectionReason)> = cleaned
        .iter()
        .filter_map(|token| {
            check_token(token)
                .err()
                .map(|reason| (token.clone(), reason))
        })
        .collect();

    let mut removed = RemovedSet::new();
    for (token, reason) in invalid {
        debug!("[CLASS-CLEAN] removed '{token}': {reason}");
        cleaned.remove(&token);
        removed.insert(token, reason);
    }

    CleanedClasses { cleaned, removed }
}
