//! # NEM2 SDK Model Types
//!
//! Identity and classification model for a NEM2 network client: how a mosaic
//! is named, identified and validated, and how the byte packed into a
//! version field selects the network.
//!
//! ## Design Philosophy
//!
//! - **Validated Construction**: Every value object is checked once, at construction, and immutable afterwards
//! - **Typed Identifiers**: Mosaic and namespace ids are distinct `u64` wrappers with fixed canonical string forms
//! - **Injected Hashing**: Name-to-id derivation is a collaborator passed in by the caller, never a hidden global
//! - **Closed Enumerations**: Network and supply types are exhaustive enums with explicit byte tables
//!
//! ## Quick Start
//!
//! ### Mosaic Identity
//! ```rust
//! use sdk_types::{Mosaic, MosaicIdGenerator, Sha3IdDerivation};
//! use num_bigint::BigInt;
//!
//! let generator = MosaicIdGenerator::new(Sha3IdDerivation);
//! let xem = generator.from_full_name("nem:xem").unwrap();
//! assert_eq!(xem.to_hex().len(), 16);
//!
//! let holding = Mosaic::new(xem, BigInt::from(1_000_000)).unwrap();
//! assert!(holding.to_string().contains("1000000"));
//! assert!(Mosaic::new(xem, BigInt::from(0)).is_err());
//! ```
//!
//! ### Network Classification
//! ```rust
//! use sdk_types::NetworkType;
//!
//! assert_eq!(NetworkType::from_version(0x6803), NetworkType::MainNet);
//! assert_eq!(NetworkType::from_version(0x0003), NetworkType::NotSupportedNet);
//! assert_eq!(NetworkType::from_name("Mijin_Test"), NetworkType::MijinTest);
//! ```
//!
//! ## Concurrency
//!
//! Everything here is pure and synchronous. All value types are `Send + Sync`,
//! and [`IdDerivation`] implementations are required to be as well.

pub mod account;
pub mod common;
pub mod mosaic;
pub mod namespace;
pub mod protocol;

pub use account::PublicAccount;
pub use common::errors::ModelError;
pub use common::identifiers::{MosaicId, NamespaceId, PublicKey};
pub use common::uint64::Uint64Dto;
pub use mosaic::*;
pub use namespace::NamespaceInfo;
pub use protocol::NetworkType;

pub type Result<T> = std::result::Result<T, ModelError>;
