//! Protocol-level constants and the network discriminator

pub mod constants;
pub mod network;

pub use constants::*;
pub use network::NetworkType;
