//! Mosaic identity and value objects
//!
//! ```text
//! "nem:xem" ─► name::validate_full_name ─► ("nem", "xem")
//!                                              │
//!                         IdDerivation::derive_id (injected)
//!                                              │
//!                                          MosaicId ─► Mosaic::new(id, amount)
//! ```

pub mod derivation;
pub mod id;
pub mod info;
pub mod name;
pub mod properties;
pub mod supply;
pub mod value;

#[cfg(feature = "sha3-derivation")]
pub use derivation::Sha3IdDerivation;
pub use derivation::{
    IdDerivation, MosaicIdGenerator, XEM_DIVISIBILITY, XEM_FULL_NAME, XEM_UNITS_PER_WHOLE,
};
pub use info::{MosaicInfo, MosaicName};
pub use name::{validate_full_name, INJECTION_GUARD, MOSAIC_NAME_SEPARATOR};
pub use properties::{MosaicFlags, MosaicProperties};
pub use supply::MosaicSupplyType;
pub use value::{Mosaic, MosaicDto};
