//! Final check of a decoded declaration before it is accepted.

use crate::types::RejectionReason;
use css_syntax::{Priority, PropertyValidator};
use log::debug;

/// Run `validator` over one decoded declaration.
///
/// Syntax errors and unacceptable values both come back as a rejection reason;
/// neither is fatal to the rest of the class set.
///
/// # Errors
/// Returns `RejectionReason::SyntaxError` when the text does not parse, and
/// `RejectionReason::InvalidValue` when it parses but the value is unacceptable.
pub fn validate_declaration(
    validator: &dyn PropertyValidator,
    property: &str,
    value: &str,
    priority: Priority,
) -> Result<(), RejectionReason> {
    match validator.validate(property, value, priority) {
        Ok(true) => Ok(()),
        Ok(false) => {
            debug!("[VALIDATE] invalid value for {property}: '{value}'");
            Err(RejectionReason::InvalidValue(format!("{property}: {value}")))
        }
        Err(error) => {
            debug!("[VALIDATE] syntax error for {property}: '{value}': {error}");
            Err(RejectionReason::SyntaxError(error.to_string()))
        }
    }
}
