//! Direction of a mosaic supply change

use crate::common::errors::ModelError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
pub enum MosaicSupplyType {
    Decrease = 0,
    Increase = 1,
}

impl MosaicSupplyType {
    /// Strict decode from the wire byte
    pub fn from_u8(value: u8) -> Result<Self, ModelError> {
        Self::try_from_primitive(value).map_err(|e| ModelError::UnknownSupplyType(e.number))
    }
}

impl fmt::Display for MosaicSupplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_set() {
        assert_eq!(MosaicSupplyType::from_u8(0), Ok(MosaicSupplyType::Decrease));
        assert_eq!(MosaicSupplyType::from_u8(1), Ok(MosaicSupplyType::Increase));
        assert_eq!(
            MosaicSupplyType::from_u8(2),
            Err(ModelError::UnknownSupplyType(2))
        );
    }

    #[test]
    fn test_display_is_ordinal() {
        assert_eq!(MosaicSupplyType::Increase.to_string(), "1");
    }
}
