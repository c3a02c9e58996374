//! # Network Discriminator
//!
//! Every transaction and account carries a packed version field whose second
//! lowest-order byte selects the deployed network. This module extracts that
//! byte and classifies it.
//!
//! ```text
//! version (u64, little-endian bytes)
//! ┌────────┬────────┬────────┬─────┬────────┐
//! │ byte 0 │ byte 1 │ byte 2 │ ... │ byte 7 │
//! │ tx ver │ network│        │     │        │
//! └────────┴────────┴────────┴─────┴────────┘
//! ```
//!
//! Unknown bytes collapse to [`NetworkType::NotSupportedNet`], and so does a
//! zero byte: the two cases are indistinguishable once classified.
//!
//! ```rust
//! use sdk_types::NetworkType;
//!
//! assert_eq!(NetworkType::from_version(0x9803), NetworkType::TestNet);
//! assert_eq!(NetworkType::from_name("mijin_test"), NetworkType::MijinTest);
//! assert_eq!(NetworkType::MainNet.to_version(3), 0x6803);
//! ```

use super::constants::*;
use crate::common::errors::ModelError;
use byteorder::{ByteOrder, LittleEndian};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use tracing::debug;

/// Network a client, account or transaction belongs to
///
/// The discriminants are the raw network bytes. `TryFrom<u8>` is the strict
/// conversion (unknown bytes are [`ModelError::UnknownNetworkByte`]);
/// [`NetworkType::from_byte`] is the lossy one.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[num_enum(error_type(name = ModelError, constructor = ModelError::UnknownNetworkByte))]
pub enum NetworkType {
    MainNet = 0x68,   // 104
    TestNet = 0x98,   // 152
    Mijin = 0x60,     // 96
    MijinTest = 0x90, // 144
    /// Fallback for every byte outside the table, including 0
    NotSupportedNet = 0,
}

impl NetworkType {
    /// All networks the SDK can talk to
    pub const SUPPORTED: [NetworkType; 4] = [
        NetworkType::MainNet,
        NetworkType::TestNet,
        NetworkType::Mijin,
        NetworkType::MijinTest,
    ];

    /// Extract the network from a packed version field
    pub fn from_version(version: u64) -> Self {
        let mut bytes = [0u8; 8];
        LittleEndian::write_u64(&mut bytes, version);
        Self::from_byte(bytes[NETWORK_BYTE_INDEX])
    }

    /// Classify a raw network byte
    pub fn from_byte(byte: u8) -> Self {
        Self::try_from(byte).unwrap_or_else(|_| {
            debug!(byte, "unsupported network byte");
            NetworkType::NotSupportedNet
        })
    }

    /// Case-insensitive lookup by canonical name; never fails
    ///
    /// Uppercasing is Unicode-aware, so `"mıjın"` (dotless i) resolves to
    /// [`NetworkType::Mijin`].
    pub fn from_name(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            MIJIN_NAME => NetworkType::Mijin,
            MIJIN_TEST_NAME => NetworkType::MijinTest,
            TEST_NET_NAME => NetworkType::TestNet,
            MAIN_NET_NAME => NetworkType::MainNet,
            _ => NetworkType::NotSupportedNet,
        }
    }

    /// Canonical name, the inverse of [`NetworkType::from_name`]
    pub const fn name(&self) -> &'static str {
        match self {
            NetworkType::MainNet => MAIN_NET_NAME,
            NetworkType::TestNet => TEST_NET_NAME,
            NetworkType::Mijin => MIJIN_NAME,
            NetworkType::MijinTest => MIJIN_TEST_NAME,
            NetworkType::NotSupportedNet => NOT_SUPPORTED_NAME,
        }
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self, NetworkType::NotSupportedNet)
    }

    /// Pack this network and a transaction version into a version field
    pub fn to_version(&self, tx_version: u8) -> u64 {
        let mut bytes = [0u8; 8];
        bytes[0] = tx_version;
        bytes[NETWORK_BYTE_INDEX] = u8::from(*self);
        LittleEndian::read_u64(&bytes)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl serde::Serialize for NetworkType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for NetworkType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|name| Self::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_index_one_selects_network() {
        assert_eq!(NetworkType::from_version(0x6800), NetworkType::MainNet);
        assert_eq!(NetworkType::from_version(0x9801), NetworkType::TestNet);
        assert_eq!(NetworkType::from_version(0x6002), NetworkType::Mijin);
        assert_eq!(NetworkType::from_version(0x9003), NetworkType::MijinTest);
    }

    #[test]
    fn test_other_bytes_are_ignored() {
        // Byte 0 and bytes 2..8 never influence the result
        let version = 0xffff_ffff_ffff_68ff_u64;
        assert_eq!(NetworkType::from_version(version), NetworkType::MainNet);
        assert_eq!(NetworkType::from_version(0x68), NetworkType::NotSupportedNet);
    }

    #[test]
    fn test_zero_and_unknown_collapse() {
        assert_eq!(NetworkType::from_version(0), NetworkType::NotSupportedNet);
        assert_eq!(NetworkType::from_version(0x0100), NetworkType::NotSupportedNet);
        assert_eq!(NetworkType::from_byte(0x67), NetworkType::NotSupportedNet);
    }

    #[test]
    fn test_strict_try_from() {
        assert_eq!(NetworkType::try_from(0x98u8), Ok(NetworkType::TestNet));
        assert_eq!(NetworkType::try_from(0u8), Ok(NetworkType::NotSupportedNet));
        assert_eq!(
            NetworkType::try_from(0x99u8),
            Err(ModelError::UnknownNetworkByte(0x99))
        );
    }

    #[test]
    fn test_lossy_and_strict_agree_on_the_table() {
        for byte in 0..=u8::MAX {
            match NetworkType::try_from(byte) {
                Ok(network) => assert_eq!(NetworkType::from_byte(byte), network),
                Err(err) => {
                    assert_eq!(err, ModelError::UnknownNetworkByte(byte));
                    assert_eq!(NetworkType::from_byte(byte), NetworkType::NotSupportedNet);
                }
            }
        }
        let known = (0..=u8::MAX)
            .filter(|byte| NetworkType::try_from(*byte).is_ok())
            .count();
        assert_eq!(known, NetworkType::SUPPORTED.len() + 1);
    }

    #[test]
    fn test_name_lookup_uppercases_unicode() {
        assert_eq!(NetworkType::from_name("mıjın"), NetworkType::Mijin);
        assert_eq!(NetworkType::from_name("mıjın_test"), NetworkType::MijinTest);
        assert_eq!(NetworkType::from_name("maın_net"), NetworkType::MainNet);
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(NetworkType::MainNet.to_string(), "104");
        assert_eq!(NetworkType::NotSupportedNet.to_string(), "0");
    }

    #[test]
    fn test_name_round_trip() {
        for network in NetworkType::SUPPORTED {
            assert_eq!(NetworkType::from_name(network.name()), network);
            assert!(network.is_supported());
        }
        assert_eq!(
            NetworkType::from_name(NetworkType::NotSupportedNet.name()),
            NetworkType::NotSupportedNet
        );
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&NetworkType::MijinTest).unwrap();
        assert_eq!(json, "\"MIJIN_TEST\"");
        let parsed: NetworkType = serde_json::from_str("\"main_net\"").unwrap();
        assert_eq!(parsed, NetworkType::MainNet);
    }
}
