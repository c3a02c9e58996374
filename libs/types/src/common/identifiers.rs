//! # Typed Identifier Macros
//!
//! Zero-cost wrappers that give every 64-bit identifier and fixed-size key in
//! the SDK its own type, so a namespace id can never be passed where a mosaic
//! id is expected.
//!
//! ## Canonical Forms
//!
//! Identifiers are compared and stored by their canonical string form elsewhere
//! in the system, so the textual encodings are fixed:
//!
//! | Form | Example (`0x0dc67fbe1cad29e3`) |
//! |------|-------------------------------|
//! | Decimal (`Display`) | `992621222383397347` |
//! | Hex (`to_hex`) | `0dc67fbe1cad29e3` (16 chars, lowercase, zero-padded) |
//! | REST word pair (`Uint64Dto`) | `[481110499, 231112638]` |
//!
//! ```rust
//! use sdk_types::{MosaicId, NamespaceId};
//!
//! let mosaic = MosaicId::new(0x0dc6_7fbe_1cad_29e3);
//! assert_eq!(mosaic.to_hex(), "0dc67fbe1cad29e3");
//! assert_eq!(MosaicId::from_hex("0x0DC67FBE1CAD29E3").unwrap(), mosaic);
//!
//! let namespace = NamespaceId::new(42);
//! assert_eq!(namespace.to_string(), "42");
//! ```

/// Macro for generating zero-cost typed byte array wrappers
///
/// Creates a new type that wraps a fixed-size byte array. The wrapper
/// formats and (de)serializes as uppercase hex, which is how keys travel
/// through the REST layer.
#[macro_export]
macro_rules! define_typed_wrapper {
    (
        $(#[$meta:meta])*
        $name:ident, $len:expr
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Default
        )]
        #[repr(transparent)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Size of the wrapped array in bytes
            pub const SIZE: usize = $len;

            #[inline(always)]
            pub const fn new(inner: [u8; $len]) -> Self {
                Self(inner)
            }

            #[inline(always)]
            pub const fn inner(&self) -> &[u8; $len] {
                &self.0
            }

            #[inline(always)]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Parse from hex, with or without a `0x` prefix
            pub fn from_hex(input: &str) -> Result<Self, $crate::common::errors::ModelError> {
                let clean = input.strip_prefix("0x").unwrap_or(input);
                let mut bytes = [0u8; $len];
                hex::decode_to_slice(clean, &mut bytes)
                    .map_err(|e| $crate::common::errors::ModelError::InvalidHex(format!("{}: {}", input, e)))?;
                Ok(Self(bytes))
            }

            /// Uppercase hex without prefix
            pub fn to_hex(&self) -> String {
                hex::encode_upper(self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl From<[u8; $len]> for $name {
            #[inline(always)]
            fn from(inner: [u8; $len]) -> Self {
                Self(inner)
            }
        }

        impl From<$name> for [u8; $len] {
            #[inline(always)]
            fn from(wrapper: $name) -> [u8; $len] {
                wrapper.0
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline(always)]
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::from_hex(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Macro for generating zero-cost typed 64-bit ID wrappers
///
/// Creates a new type that wraps `u64` with identical memory layout. Every
/// generated id gets the decimal `Display`, the fixed-width hex codec and the
/// REST word-pair conversions.
#[macro_export]
macro_rules! define_typed_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash
        )]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Width of the canonical hex form
            pub const HEX_WIDTH: usize = 16;

            #[inline(always)]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Extract the inner u64 value
            #[inline(always)]
            pub const fn inner(&self) -> u64 {
                self.0
            }

            /// Canonical fixed-width hex form: 16 lowercase digits, most significant first
            pub fn to_hex(&self) -> String {
                hex::encode(self.0.to_be_bytes())
            }

            /// Parse the canonical hex form; an optional `0x` prefix and either case are accepted
            pub fn from_hex(input: &str) -> Result<Self, $crate::common::errors::ModelError> {
                let clean = input.strip_prefix("0x").unwrap_or(input);
                if clean.len() != Self::HEX_WIDTH {
                    return Err($crate::common::errors::ModelError::InvalidHex(format!(
                        "{}: expected {} hex digits, got {}",
                        input,
                        Self::HEX_WIDTH,
                        clean.len()
                    )));
                }
                let mut bytes = [0u8; 8];
                hex::decode_to_slice(clean, &mut bytes)
                    .map_err(|e| $crate::common::errors::ModelError::InvalidHex(format!("{}: {}", input, e)))?;
                Ok(Self(u64::from_be_bytes(bytes)))
            }

            /// REST `[lower, higher]` word pair
            #[inline]
            pub fn to_dto(&self) -> $crate::common::uint64::Uint64Dto {
                $crate::common::uint64::Uint64Dto::from(self.0)
            }

            #[inline]
            pub fn from_dto(dto: $crate::common::uint64::Uint64Dto) -> Self {
                Self(dto.into())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            #[inline(always)]
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            #[inline(always)]
            fn from(id: $name) -> u64 {
                id.0
            }
        }

        // Serialization support - serializes as raw u64
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                u64::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_typed_id!(
    /// Canonical 64-bit identifier of a mosaic
    ///
    /// Construct from a raw value with [`MosaicId::new`], from an
    /// arbitrary-precision integer with [`MosaicId::from_big_uint`], or from a
    /// `namespace:mosaic` name through a [`crate::MosaicIdGenerator`].
    MosaicId
);

define_typed_id!(
    /// Canonical 64-bit identifier of a namespace
    NamespaceId
);

define_typed_wrapper!(
    /// Account public key (32 bytes)
    PublicKey, 32
);
