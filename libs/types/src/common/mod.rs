//! Common identifier types, error types and wire helpers shared by every module

pub mod errors;
pub mod identifiers;
pub mod uint64;
