//! Configuration management for the s3path inspector
//!
//! Settings come from an optional `s3path.toml` in the working directory and
//! are overridden by `S3PATH_*` environment variables.

use crate::path::validation::is_valid_bucket;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

/// Config file name, without extension, looked up in the working directory
pub const CONFIG_FILE: &str = "s3path";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "S3PATH";

/// Inspector configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct WranglerConfig {
    /// Bucket attached to relative paths by the `absolute` command
    /// Environment: S3PATH_DEFAULT_BUCKET
    #[serde(default)]
    pub default_bucket: Option<String>,
}

impl WranglerConfig {
    /// Load configuration from s3path.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_sources(Self::builder(Environment::with_prefix(ENV_PREFIX)))
    }

    /// Optional config file first, then the given environment source
    fn builder(environment: Environment) -> ConfigBuilder<DefaultState> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
    }

    /// Build and validate configuration from prepared sources
    pub fn from_sources(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: WranglerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if let Some(bucket) = &self.default_bucket {
            if bucket.is_empty() || !is_valid_bucket(bucket) {
                return Err(config::ConfigError::Message(format!(
                    "default_bucket {} is not a valid bucket name",
                    bucket
                )));
            }
        }

        Ok(())
    }
}
