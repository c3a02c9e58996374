//! Structural validation of `namespace:mosaic` names
//!
//! This is a narrow contract rather than a full name grammar: it only checks
//! that the name is non-empty, free of the `" {"` sequence and splits into
//! exactly two segments. Empty segments pass.

use crate::common::errors::ModelError;

/// Separator between the namespace and the mosaic name
pub const MOSAIC_NAME_SEPARATOR: char = ':';

/// Sequence rejected anywhere in a name (guards against injected struct dumps)
pub const INJECTION_GUARD: &str = " {";

/// Validate a full mosaic name, returning `(namespace_name, mosaic_name)`
pub fn validate_full_name(name: &str) -> Result<(&str, &str), ModelError> {
    if name.is_empty() || name.contains(INJECTION_GUARD) {
        return Err(ModelError::invalid_name(name));
    }

    let mut parts = name.split(MOSAIC_NAME_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(namespace), Some(mosaic), None) => Ok((namespace, mosaic)),
        _ => Err(ModelError::invalid_name(name)),
    }
}

/// Local segment of a full name, or `""` when the name is not two segments
pub(crate) fn short_name(full_name: &str) -> &str {
    let mut parts = full_name.split(MOSAIC_NAME_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(mosaic), None) => mosaic,
        _ => "",
    }
}
