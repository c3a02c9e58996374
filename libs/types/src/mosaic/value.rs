//! Mosaic holdings: a validated `(id, amount)` pair

use crate::common::errors::ModelError;
use crate::common::identifiers::MosaicId;
use crate::common::uint64::Uint64Dto;
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quantity of one specific mosaic
///
/// A zero amount is rejected at construction: "no holding" is expressed by
/// the absence of a `Mosaic`, never by a holding of zero. Negative amounts
/// are not rejected here.
///
/// Fields are private so every `Mosaic` passes through [`Mosaic::new`]:
///
/// ```compile_fail
/// use num_bigint::BigInt;
/// use sdk_types::{Mosaic, MosaicId};
///
/// let zero = Mosaic { id: MosaicId::new(1), amount: BigInt::from(0) };
/// ```
///
/// ```compile_fail
/// use num_bigint::BigInt;
/// use sdk_types::{Mosaic, MosaicId};
///
/// let mut built = Mosaic::new(MosaicId::new(1), BigInt::from(5)).unwrap();
/// built.amount = BigInt::from(0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Mosaic {
    id: MosaicId,
    amount: BigInt,
}

impl Mosaic {
    pub fn new(id: MosaicId, amount: BigInt) -> Result<Self, ModelError> {
        if amount.is_zero() {
            return Err(ModelError::NilMosaicAmount);
        }
        Ok(Self { id, amount })
    }

    /// Build from optional parts as decoded from the wire
    pub fn from_parts(id: Option<MosaicId>, amount: Option<BigInt>) -> Result<Self, ModelError> {
        let id = id.ok_or(ModelError::NilMosaicId)?;
        let amount = amount.ok_or(ModelError::NilMosaicAmount)?;
        Self::new(id, amount)
    }

    pub fn id(&self) -> MosaicId {
        self.id
    }

    pub fn amount(&self) -> &BigInt {
        &self.amount
    }
}

impl fmt::Display for Mosaic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mosaic [MosaicId: {}, Amount: {}]", self.id, self.amount)
    }
}

/// REST shape of a mosaic holding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicDto {
    #[serde(default)]
    pub id: Option<Uint64Dto>,
    #[serde(default)]
    pub amount: Option<Uint64Dto>,
}

impl TryFrom<MosaicDto> for Mosaic {
    type Error = ModelError;

    fn try_from(dto: MosaicDto) -> Result<Self, Self::Error> {
        Mosaic::from_parts(
            dto.id.map(MosaicId::from_dto),
            dto.amount.map(|amount| BigInt::from(amount.to_u64())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields() {
        let mosaic = Mosaic::new(MosaicId::new(7), BigInt::from(1_000_000)).unwrap();
        assert_eq!(mosaic.id(), MosaicId::new(7));
        assert_eq!(mosaic.amount(), &BigInt::from(1_000_000));
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            Mosaic::new(MosaicId::new(7), BigInt::from(0)),
            Err(ModelError::NilMosaicAmount)
        );
    }

    #[test]
    fn test_negative_amount_accepted() {
        assert!(Mosaic::new(MosaicId::new(7), BigInt::from(-5)).is_ok());
    }

    #[test]
    fn test_missing_parts() {
        assert_eq!(
            Mosaic::from_parts(None, Some(BigInt::from(1))),
            Err(ModelError::NilMosaicId)
        );
        assert_eq!(
            Mosaic::from_parts(Some(MosaicId::new(1)), None),
            Err(ModelError::NilMosaicAmount)
        );
        // Id is checked before amount
        assert_eq!(Mosaic::from_parts(None, None), Err(ModelError::NilMosaicId));
    }

    #[test]
    fn test_display() {
        let mosaic = Mosaic::new(MosaicId::new(42), BigInt::from(10)).unwrap();
        assert_eq!(mosaic.to_string(), "Mosaic [MosaicId: 42, Amount: 10]");
    }

    #[test]
    fn test_dto_decoding() {
        let dto: MosaicDto =
            serde_json::from_str(r#"{"id":[3646934825,3576016193],"amount":[1000000,0]}"#).unwrap();
        let mosaic = Mosaic::try_from(dto).unwrap();
        assert_eq!(mosaic.id().to_hex(), "d525ad41d95fcf29");
        assert_eq!(mosaic.amount(), &BigInt::from(1_000_000));

        let missing_id: MosaicDto = serde_json::from_str(r#"{"amount":[1,0]}"#).unwrap();
        assert_eq!(Mosaic::try_from(missing_id), Err(ModelError::NilMosaicId));

        let zero: MosaicDto = serde_json::from_str(r#"{"id":[1,0],"amount":[0,0]}"#).unwrap();
        assert_eq!(Mosaic::try_from(zero), Err(ModelError::NilMosaicAmount));
    }
}
