//! Identifier checks applied to names that flow into generated source.
//!
//! Rendering performs no escaping, so every interpolated name must already be
//! a plain identifier (or, for containers, a dotted identifier path).

use crate::error::{AugmentError, Result};

/// Returns `true` when `value` is a single identifier: a letter or underscore
/// followed by letters, digits, or underscores.
#[must_use]
pub fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Returns `true` when `value` is one or more identifiers joined by `.`.
#[must_use]
pub fn is_identifier_path(value: &str) -> bool {
    !value.is_empty() && value.split('.').all(is_identifier)
}

/// Validates a declaration or member name.
///
/// # Errors
///
/// Returns [`AugmentError::InvalidInput`] naming `what` when `value` is empty
/// or not an identifier.
pub fn check_identifier(what: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AugmentError::invalid_input(
            what,
            value,
            "identifier must not be empty",
        ));
    }
    if !is_identifier(value) {
        return Err(AugmentError::invalid_input(
            what,
            value,
            "expected letters, digits, or underscores, not starting with a digit",
        ));
    }
    Ok(())
}

/// Validates a container name, which may be a dotted path such as
/// `Acme.Widgets`.
///
/// # Errors
///
/// Returns [`AugmentError::InvalidInput`] when any segment is not an
/// identifier.
pub fn check_identifier_path(what: &'static str, value: &str) -> Result<()> {
    if is_identifier_path(value) {
        Ok(())
    } else {
        Err(AugmentError::invalid_input(
            what,
            value,
            "expected dot-separated identifiers",
        ))
    }
}
