//! Arbitrary-precision conversions for [`MosaicId`]
//!
//! REST payloads and user input carry ids as unbounded integers; these
//! constructors narrow them to the canonical 64-bit value.

use crate::common::errors::ModelError;
use crate::common::identifiers::MosaicId;
use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

impl MosaicId {
    /// Build from an optional unsigned big integer
    ///
    /// `None` is [`ModelError::NilMosaicId`]; values wider than 64 bits are
    /// [`ModelError::IdOutOfRange`].
    pub fn from_big_uint(value: Option<&BigUint>) -> Result<Self, ModelError> {
        let value = value.ok_or(ModelError::NilMosaicId)?;
        value
            .to_u64()
            .map(Self)
            .ok_or_else(|| ModelError::IdOutOfRange(value.to_string()))
    }

    /// Build from an optional signed big integer; negative values are out of range
    pub fn from_big_int(value: Option<&BigInt>) -> Result<Self, ModelError> {
        let value = value.ok_or(ModelError::NilMosaicId)?;
        value
            .to_u64()
            .map(Self)
            .ok_or_else(|| ModelError::IdOutOfRange(value.to_string()))
    }

    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from(self.0)
    }
}

impl TryFrom<&BigUint> for MosaicId {
    type Error = ModelError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        Self::from_big_uint(Some(value))
    }
}
