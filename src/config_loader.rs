use anyhow::{anyhow, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::desk::config::{BROKERAGE_RATE, GATEWAY_TIMEOUT_MS, TRANSACTION_TAX_RATE};
use crate::infrastructure::mock::auth_api::AUTH_LATENCY_MS;
use crate::infrastructure::mock::gateway::SUBMISSION_DELAY_MS;
use crate::infrastructure::mock::price_oracle::DEFAULT_PRICE;

/// Top-level configuration structure containing all config sections
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fees: FeesConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub app: AppInfo,
}

/// Fee schedule applied to every order
#[derive(Debug, Clone, Deserialize)]
pub struct FeesConfig {
    #[serde(default = "default_brokerage_rate")]
    pub brokerage_rate: f64,

    #[serde(default = "default_transaction_tax_rate")]
    pub transaction_tax_rate: f64,
}

fn default_brokerage_rate() -> f64 {
    BROKERAGE_RATE
}

fn default_transaction_tax_rate() -> f64 {
    TRANSACTION_TAX_RATE
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            brokerage_rate: default_brokerage_rate(),
            transaction_tax_rate: default_transaction_tax_rate(),
        }
    }
}

/// Simulated order gateway
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_submission_delay_ms")]
    pub submission_delay_ms: u64,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_submission_delay_ms() -> u64 {
    SUBMISSION_DELAY_MS
}

fn default_timeout_ms() -> u64 {
    GATEWAY_TIMEOUT_MS
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            submission_delay_ms: default_submission_delay_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Simulated authentication API
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

fn default_latency_ms() -> u64 {
    AUTH_LATENCY_MS
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

/// Durable key-value storage. Without a path everything stays in memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    pub path: Option<PathBuf>,
}

/// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    /// Price used for instruments without a quote
    #[serde(default = "default_price")]
    pub default_price: f64,
}

fn default_price() -> f64 {
    DEFAULT_PRICE
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            default_price: default_price(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&config_str)
            .map_err(|e| anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

        info!("Loaded configuration from {}", path.display());
        debug!(
            "Fees {}/{}, gateway delay {}ms, storage {:?}",
            config.fees.brokerage_rate,
            config.fees.transaction_tax_rate,
            config.gateway.submission_delay_ms,
            config.storage.path
        );

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.fees.brokerage_rate, 0.0005);
        assert_eq!(config.fees.transaction_tax_rate, 0.0001);
        assert_eq!(config.gateway.submission_delay_ms, 1000);
        assert_eq!(config.gateway.timeout_ms, 5000);
        assert_eq!(config.auth.latency_ms, 500);
        assert_eq!(config.app.default_price, 100.0);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [gateway]
            timeout_ms = 250

            [storage]
            path = "desk.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.gateway.timeout_ms, 250);
        assert_eq!(config.gateway.submission_delay_ms, 1000);
        assert_eq!(config.storage.path, Some(PathBuf::from("desk.json")));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::from_file("/nonexistent/config.toml").is_err());
    }
}
