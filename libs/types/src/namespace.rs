//! Namespace descriptors, owned by the namespace subsystem
//!
//! Mosaic descriptors embed these as opaque references.

use crate::account::PublicAccount;
use crate::common::identifiers::NamespaceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace metadata snapshot: id, name, owner and optional parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceInfo {
    pub id: NamespaceId,
    pub full_name: String,
    pub active: bool,
    pub owner: PublicAccount,
    pub parent_id: Option<NamespaceId>,
}

impl fmt::Display for NamespaceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NamespaceInfo [NamespaceId: {}, FullName: {}, Active: {}, Owner: {}, ParentId: ",
            self.id, self.full_name, self.active, self.owner
        )?;
        match self.parent_id {
            Some(parent) => write!(f, "{}]", parent),
            None => f.write_str("none]"),
        }
    }
}
