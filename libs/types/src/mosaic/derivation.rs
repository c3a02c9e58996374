//! # Mosaic Id Derivation
//!
//! Turning a `namespace:mosaic` name into a canonical [`MosaicId`] is split in
//! two: this crate validates the name, and an injected [`IdDerivation`]
//! collaborator hashes the validated segments. The collaborator must be pure
//! and deterministic, and distinct mosaic names under one namespace must map
//! to distinct ids with overwhelming probability.
//!
//! ```rust
//! use sdk_types::{MosaicIdGenerator, ModelError};
//!
//! // Any `Fn(&str, &str) -> u64` is a derivation, which makes stubbing trivial
//! let generator = MosaicIdGenerator::new(|namespace: &str, mosaic: &str| {
//!     (namespace.len() as u64) << 32 | mosaic.len() as u64
//! });
//!
//! let id = generator.from_full_name("nem:xem").unwrap();
//! assert_eq!(id.inner(), 3 << 32 | 3);
//! assert!(matches!(generator.from_full_name("a:b:c"), Err(ModelError::InvalidMosaicName(_))));
//! ```

use super::name::validate_full_name;
use super::value::Mosaic;
use crate::common::errors::ModelError;
use crate::common::identifiers::MosaicId;
use num_bigint::BigInt;
use tracing::trace;

/// Full name of the native currency mosaic
pub const XEM_FULL_NAME: &str = "nem:xem";
pub const XEM_NAMESPACE: &str = "nem";
pub const XEM_NAME: &str = "xem";

/// Decimal places of the native currency mosaic
pub const XEM_DIVISIBILITY: u8 = 6;

/// Absolute units per whole XEM
pub const XEM_UNITS_PER_WHOLE: u64 = 1_000_000;

/// Name-to-identifier hashing collaborator
///
/// Implementations must hold no mutable state between calls; they are shared
/// freely across threads.
pub trait IdDerivation: Send + Sync {
    /// Derive the 64-bit id of `mosaic` inside `namespace`
    fn derive_id(&self, namespace: &str, mosaic: &str) -> u64;
}

impl<F> IdDerivation for F
where
    F: Fn(&str, &str) -> u64 + Send + Sync,
{
    fn derive_id(&self, namespace: &str, mosaic: &str) -> u64 {
        self(namespace, mosaic)
    }
}

/// Catapult-style SHA3-256 derivation
///
/// Each `.`-separated namespace part is hashed together with its parent's id
/// (`sha3_256(parent_id_le || part)`, first 8 bytes read little-endian, root
/// parent 0). The mosaic id is the same construction with the final
/// namespace id as parent.
#[cfg(feature = "sha3-derivation")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha3IdDerivation;

#[cfg(feature = "sha3-derivation")]
impl Sha3IdDerivation {
    /// Namespace separator inside the namespace segment
    pub const NAMESPACE_SEPARATOR: char = '.';

    fn generate(parent_id: u64, name: &str) -> u64 {
        use byteorder::{ByteOrder, LittleEndian};
        use sha3::{Digest, Sha3_256};

        let mut hasher = Sha3_256::new();
        hasher.update(parent_id.to_le_bytes());
        hasher.update(name.as_bytes());
        let digest = hasher.finalize();
        LittleEndian::read_u64(&digest[..8])
    }

    /// Id of a (possibly nested) namespace path such as `prx.storage`
    pub fn namespace_id(&self, path: &str) -> u64 {
        path.split(Self::NAMESPACE_SEPARATOR)
            .fold(0, |parent, part| Self::generate(parent, part))
    }
}

#[cfg(feature = "sha3-derivation")]
impl IdDerivation for Sha3IdDerivation {
    fn derive_id(&self, namespace: &str, mosaic: &str) -> u64 {
        Self::generate(self.namespace_id(namespace), mosaic)
    }
}

/// Validates mosaic names and derives their ids through an injected collaborator
#[derive(Debug, Clone, Default)]
pub struct MosaicIdGenerator<D> {
    derivation: D,
}

impl<D: IdDerivation> MosaicIdGenerator<D> {
    pub fn new(derivation: D) -> Self {
        Self { derivation }
    }

    pub fn derivation(&self) -> &D {
        &self.derivation
    }

    /// Derive the id of a `namespace:mosaic` name
    pub fn from_full_name(&self, name: &str) -> Result<MosaicId, ModelError> {
        let (namespace, mosaic) = validate_full_name(name)?;
        let id = MosaicId::new(self.derivation.derive_id(namespace, mosaic));
        trace!(name, id = %id, "derived mosaic id");
        Ok(id)
    }

    /// Id of the native currency mosaic
    pub fn xem_id(&self) -> MosaicId {
        MosaicId::new(self.derivation.derive_id(XEM_NAMESPACE, XEM_NAME))
    }

    /// Native currency mosaic holding `amount` absolute units
    pub fn xem(&self, amount: i64) -> Result<Mosaic, ModelError> {
        Mosaic::new(self.xem_id(), BigInt::from(amount))
    }

    /// Native currency mosaic holding `amount` whole XEM
    pub fn xem_relative(&self, amount: i64) -> Result<Mosaic, ModelError> {
        Mosaic::new(
            self.xem_id(),
            BigInt::from(amount) * BigInt::from(XEM_UNITS_PER_WHOLE),
        )
    }
}
