//! Runtime configuration.
//!
//! Loaded from an optional `storefront.toml` (or any format the `config` crate detects from
//! the file name) and `STOREFRONT__*` environment variables, after `.env` is applied.
//! Nested keys use `__`, e.g. `STOREFRONT__STORAGE__MAX_UPLOAD_BYTES=1048576`.

use chrono::FixedOffset;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Mailbox capacity of every table actor.
    pub channel_buffer: usize,
    /// Zone used to stamp order date and time. Brasília by default.
    pub utc_offset_hours: i32,
    pub currency_symbol: String,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub public_base_url: String,
    pub max_upload_bytes: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            channel_buffer: 32,
            utc_offset_hours: -3,
            currency_symbol: "R$".to_string(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:54321/storage/v1/object/public".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
        }
    }
}

impl StorefrontConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = Cfg::builder()
            .add_source(File::with_name("storefront").required(false))
            .add_source(Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-23..=23).contains(&self.utc_offset_hours) {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_hours out of range: {}",
                self.utc_offset_hours
            )));
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::Invalid("channel_buffer must be > 0".into()));
        }
        Ok(())
    }

    /// The configured order-stamping zone.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            ConfigError::Invalid(format!("invalid utc offset: {}", self.utc_offset_hours))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_brasilia_and_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.offset().unwrap().local_minus_utc(), -3 * 3600);
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.storage.max_upload_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let config = StorefrontConfig {
            utc_offset_hours: 30,
            ..StorefrontConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn partial_sources_fall_back_to_defaults() {
        let settings = Cfg::builder()
            .set_override("utc_offset_hours", 0)
            .unwrap()
            .set_override("storage.max_upload_bytes", 1024)
            .unwrap()
            .build()
            .unwrap();
        let config: StorefrontConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.utc_offset_hours, 0);
        assert_eq!(config.storage.max_upload_bytes, 1024);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency_symbol, "R$");
    }
}
