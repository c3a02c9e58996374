//! REST representation of unsigned 64-bit values
//!
//! The node's JSON API cannot carry a full u64 as a JSON number, so every id,
//! amount and height travels as a `[lower, higher]` pair of 32-bit words.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// `[lower, higher]` 32-bit word pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uint64Dto(pub [u32; 2]);

impl Uint64Dto {
    pub const fn new(lower: u32, higher: u32) -> Self {
        Self([lower, higher])
    }

    pub const fn lower(&self) -> u32 {
        self.0[0]
    }

    pub const fn higher(&self) -> u32 {
        self.0[1]
    }

    pub const fn to_u64(&self) -> u64 {
        ((self.0[1] as u64) << 32) | self.0[0] as u64
    }

    pub fn to_big_uint(&self) -> BigUint {
        BigUint::from(self.to_u64())
    }
}

impl From<u64> for Uint64Dto {
    fn from(value: u64) -> Self {
        Self([value as u32, (value >> 32) as u32])
    }
}

impl From<Uint64Dto> for u64 {
    fn from(dto: Uint64Dto) -> u64 {
        dto.to_u64()
    }
}
