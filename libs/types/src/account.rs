//! Public account references embedded by mosaic and namespace descriptors

use crate::common::identifiers::PublicKey;
use crate::protocol::NetworkType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An account known only by its public key and network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicAccount {
    pub public_key: PublicKey,
    pub network_type: NetworkType,
}

impl PublicAccount {
    pub fn new(public_key: PublicKey, network_type: NetworkType) -> Self {
        Self {
            public_key,
            network_type,
        }
    }

    pub fn from_public_key(
        public_key: &str,
        network_type: NetworkType,
    ) -> Result<Self, crate::common::errors::ModelError> {
        Ok(Self::new(PublicKey::from_hex(public_key)?, network_type))
    }
}

impl fmt::Display for PublicAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PublicAccount [PublicKey: {}, NetworkType: {}]",
            self.public_key, self.network_type
        )
    }
}
