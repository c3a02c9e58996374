//! SDK Configuration Module
//!
//! Loads client configuration from a TOML file, an optional
//! environment-specific overlay and `NEM2_`-prefixed environment variables
//! (`NEM2_NETWORK__NETWORK_TYPE=MAIN_NET`), in that order of precedence.

use anyhow::{bail, Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use types::{validate_full_name, IdDerivation, MosaicId, MosaicIdGenerator, NetworkType};

/// Default location of the base configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/sdk.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "NEM2";

/// Main SDK configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SdkConfig {
    #[serde(default)]
    pub network: NetworkSettings,

    #[serde(default)]
    pub mosaic: MosaicSettings,
}

/// Target network selection
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NetworkSettings {
    /// Canonical network name, matched case-insensitively
    pub network_type: String,
}

/// Fee mosaic settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MosaicSettings {
    pub fee_mosaic: String,
    pub divisibility: u8,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            network_type: NetworkType::MijinTest.name().to_string(),
        }
    }
}

impl Default for MosaicSettings {
    fn default() -> Self {
        Self {
            fee_mosaic: types::XEM_FULL_NAME.to_string(),
            divisibility: types::XEM_DIVISIBILITY,
        }
    }
}

impl NetworkSettings {
    pub fn resolved(&self) -> NetworkType {
        NetworkType::from_name(&self.network_type)
    }
}

impl SdkConfig {
    /// Load configuration from files with environment overrides
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        Self::load_with_env(base_path, environment, None)
    }

    fn load_with_env(
        base_path: Option<&Path>,
        environment: Option<&str>,
        env_source: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        let defaults = SdkConfig::default();

        let mut builder = Config::builder()
            .set_default("network.network_type", defaults.network.network_type)?
            .set_default("mosaic.fee_mosaic", defaults.mosaic.fee_mosaic)?
            .set_default("mosaic.divisibility", defaults.mosaic.divisibility as i64)?
            .add_source(File::from(base).required(true));

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = base
                .parent()
                .unwrap_or(Path::new("."))
                .join("environments")
                .join(format!("{}.toml", env));

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env_source),
        );

        let config: SdkConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        debug!(network = %config.network.resolved().name(), "loaded sdk configuration");
        Ok(config)
    }

    /// Reject configurations the SDK cannot act on
    pub fn validate(&self) -> Result<()> {
        if !self.network.resolved().is_supported() {
            bail!("Unsupported network type: {}", self.network.network_type);
        }
        validate_full_name(&self.mosaic.fee_mosaic)
            .with_context(|| format!("Invalid fee mosaic: {}", self.mosaic.fee_mosaic))?;
        Ok(())
    }

    /// Derive the id of the configured fee mosaic
    pub fn fee_mosaic_id<D: IdDerivation>(&self, generator: &MosaicIdGenerator<D>) -> Result<MosaicId> {
        generator
            .from_full_name(&self.mosaic.fee_mosaic)
            .with_context(|| format!("Invalid fee mosaic: {}", self.mosaic.fee_mosaic))
    }
}

/// Convenience function to load and validate configuration
pub fn load_config(path: Option<PathBuf>, environment: Option<&str>) -> Result<SdkConfig> {
    let config = SdkConfig::load(path.as_deref(), environment)?;
    config.validate()?;
    Ok(config)
}
