//! Read-only mosaic descriptors as reported by the network
//!
//! These records aggregate already-validated pieces with references owned by
//! other subsystems (namespace info, owner account). They derive nothing
//! except [`MosaicInfo::short_name`].

use super::name;
use super::properties::MosaicProperties;
use crate::account::PublicAccount;
use crate::common::identifiers::{MosaicId, NamespaceId};
use crate::namespace::NamespaceInfo;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mosaic metadata snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosaicInfo {
    pub mosaic_id: MosaicId,
    pub full_name: String,
    pub active: bool,
    pub index: u32,
    pub meta_id: String,
    pub namespace: NamespaceInfo,
    pub supply: BigUint,
    pub height: BigUint,
    pub owner: PublicAccount,
    pub properties: MosaicProperties,
}

impl MosaicInfo {
    /// Mosaic segment of `full_name`, or `""` when the name is malformed
    pub fn short_name(&self) -> &str {
        name::short_name(&self.full_name)
    }
}

impl fmt::Display for MosaicInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MosaicInfo [MosaicId: {}, FullName: {}, Active: {}, Index: {}, MetaId: {}, \
             Namespace: {}, Supply: {}, Height: {}, Owner: {}, Properties: {}]",
            self.mosaic_id,
            self.full_name,
            self.active,
            self.index,
            self.meta_id,
            self.namespace,
            self.supply,
            self.height,
            self.owner,
            self.properties
        )
    }
}

/// Binding of a mosaic id to its name and parent namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MosaicName {
    pub mosaic_id: MosaicId,
    pub name: String,
    pub parent_id: NamespaceId,
}

impl fmt::Display for MosaicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MosaicName [MosaicId: {}, Name: {}, ParentId: {}]",
            self.mosaic_id, self.name, self.parent_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::identifiers::PublicKey;
    use crate::protocol::NetworkType;

    fn info(full_name: &str) -> MosaicInfo {
        let owner = PublicAccount::new(PublicKey::new([7u8; 32]), NetworkType::MijinTest);
        MosaicInfo {
            mosaic_id: MosaicId::new(1),
            full_name: full_name.to_string(),
            active: true,
            index: 0,
            meta_id: "59fb7fd2a7a1c1a7a0d1e2f3".to_string(),
            namespace: NamespaceInfo {
                id: NamespaceId::new(2),
                full_name: "nem".to_string(),
                active: true,
                owner,
                parent_id: None,
            },
            supply: BigUint::from(8_999_999_998_000_000u64),
            height: BigUint::from(1u8),
            owner,
            properties: MosaicProperties::new(false, true, false, 6, BigUint::from(0u8)),
        }
    }

    #[test]
    fn test_short_name() {
        assert_eq!(info("nem:xem").short_name(), "xem");
        assert_eq!(info("badname").short_name(), "");
        assert_eq!(info("a:b:c").short_name(), "");
    }

    #[test]
    fn test_display_field_order() {
        let rendered = info("nem:xem").to_string();
        let mut cursor = 0;
        for label in [
            "MosaicId:", "FullName:", "Active:", "Index:", "MetaId:", "Namespace:", "Supply:",
            "Height:", "Owner:", "Properties:",
        ] {
            let offset = rendered[cursor..]
                .find(label)
                .unwrap_or_else(|| panic!("{label} missing or out of order in {rendered}"));
            cursor += offset + label.len();
        }
        assert!(rendered.contains("Supply: 8999999998000000"));
    }

    #[test]
    fn test_mosaic_name_display() {
        let binding = MosaicName {
            mosaic_id: MosaicId::new(9),
            name: "xem".to_string(),
            parent_id: NamespaceId::new(3),
        };
        assert_eq!(binding.to_string(), "MosaicName [MosaicId: 9, Name: xem, ParentId: 3]");
    }
}
