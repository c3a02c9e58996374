//! Protocol constants
//!
//! Position of the network byte inside a little-endian version field, and
//! the canonical network names used in configuration.

/// Byte index of the network discriminator inside the version field
pub const NETWORK_BYTE_INDEX: usize = 1;

pub const MAIN_NET_NAME: &str = "MAIN_NET";
pub const TEST_NET_NAME: &str = "TEST_NET";
pub const MIJIN_NAME: &str = "MIJIN";
pub const MIJIN_TEST_NAME: &str = "MIJIN_TEST";
pub const NOT_SUPPORTED_NAME: &str = "NOT_SUPPORTED";
