//! Mosaic governance flags
//!
//! Properties are a plain aggregation: nothing here range-checks divisibility
//! or duration against protocol limits, that is left to transaction builders.
//! Duration semantics (absolute vs relative, 0 = unlimited) belong to the
//! consuming protocol.

use bitflags::bitflags;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Packed flag byte used by the wire format
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MosaicFlags: u8 {
        /// Total supply can change after creation
        const SUPPLY_MUTABLE = 0x01;
        /// Holders may transfer to third parties
        const TRANSFERABLE = 0x02;
        /// Levy can change after creation
        const LEVY_MUTABLE = 0x04;
    }
}

/// Mutability, divisibility and duration of a mosaic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MosaicProperties {
    pub supply_mutable: bool,
    pub transferable: bool,
    pub levy_mutable: bool,
    pub divisibility: u8,
    pub duration: BigUint,
}

impl MosaicProperties {
    pub fn new(
        supply_mutable: bool,
        transferable: bool,
        levy_mutable: bool,
        divisibility: u8,
        duration: BigUint,
    ) -> Self {
        Self {
            supply_mutable,
            transferable,
            levy_mutable,
            divisibility,
            duration,
        }
    }

    /// Decode from the packed flag byte; unknown bits are dropped
    pub fn from_flags(flags: u8, divisibility: u8, duration: BigUint) -> Self {
        let flags = MosaicFlags::from_bits_truncate(flags);
        Self::new(
            flags.contains(MosaicFlags::SUPPLY_MUTABLE),
            flags.contains(MosaicFlags::TRANSFERABLE),
            flags.contains(MosaicFlags::LEVY_MUTABLE),
            divisibility,
            duration,
        )
    }

    pub fn flags(&self) -> MosaicFlags {
        let mut flags = MosaicFlags::empty();
        flags.set(MosaicFlags::SUPPLY_MUTABLE, self.supply_mutable);
        flags.set(MosaicFlags::TRANSFERABLE, self.transferable);
        flags.set(MosaicFlags::LEVY_MUTABLE, self.levy_mutable);
        flags
    }
}

impl fmt::Display for MosaicProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MosaicProperties [SupplyMutable: {}, Transferable: {}, LevyMutable: {}, Divisibility: {}, Duration: {}]",
            self.supply_mutable, self.transferable, self.levy_mutable, self.divisibility, self.duration
        )
    }
}
