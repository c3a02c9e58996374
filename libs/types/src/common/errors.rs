//! Error types for mosaic identity and network classification
//!
//! Every failure in this crate is an input-validation failure: nothing is
//! retried, logged or swallowed here. Callers decide how to present them.

use thiserror::Error;

/// Errors that can occur while constructing identity and value objects
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Raw mosaic name failed the structural checks
    #[error("Invalid mosaic name: '{0}'")]
    InvalidMosaicName(String),

    /// A required mosaic id is absent
    #[error("Mosaic id cannot be nil")]
    NilMosaicId,

    /// A required amount is absent or zero
    #[error("Mosaic amount cannot be nil or zero")]
    NilMosaicAmount,

    /// Integer does not fit in an unsigned 64-bit identifier
    #[error("Identifier value {0} does not fit in 64 unsigned bits")]
    IdOutOfRange(String),

    /// Malformed fixed-width hex identifier
    #[error("Invalid hex identifier: {0}")]
    InvalidHex(String),

    /// Network byte outside the known table (strict conversion only)
    #[error("Unknown network byte: {0}")]
    UnknownNetworkByte(u8),

    /// Supply change direction outside {Decrease, Increase}
    #[error("Unknown mosaic supply type: {0}")]
    UnknownSupplyType(u8),
}

impl ModelError {
    pub fn invalid_name(name: &str) -> Self {
        Self::InvalidMosaicName(name.to_string())
    }
}
