//! # NEM2 SDK Configuration
//!
//! Layered configuration for SDK clients: which network to target and which
//! mosaic pays fees.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sdk_config::load_config;
//!
//! let config = load_config(None, Some("staging")).unwrap();
//! let network = config.network.resolved();
//! ```

pub mod sdk_config;

pub use sdk_config::{load_config, MosaicSettings, NetworkSettings, SdkConfig};
