//! Build-time configuration
//!
//! A CSR bundle has no process environment at runtime, so settings are read
//! from the environment of the build (`option_env!`) and fall back to
//! defaults when missing or malformed.

use std::str::FromStr;

use leptos::prelude::*;
use shared::network::NetworkConfig;

use crate::utils::constants::DEFAULT_MOCK_LATENCY_MS;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub network: NetworkConfig,
    /// Artificial delay before sample data is "fetched"
    pub mock_latency_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::base(),
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("ASSETI_MOCK_LATENCY_MS"),
            option_env!("ASSETI_LOG_LEVEL"),
        )
    }

    pub fn from_values(mock_latency_ms: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            network: defaults.network,
            mock_latency_ms: parse_or(mock_latency_ms, defaults.mock_latency_ms),
            log_level: parse_or(log_level, defaults.log_level),
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

pub fn provide_app_config(config: AppConfig) {
    provide_context(config);
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.network.chain_id, 8453);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("250"), Some("debug"));
        assert_eq!(config.mock_latency_ms, 250);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let config = AppConfig::from_values(Some("soon"), Some("loud"));
        assert_eq!(config.mock_latency_ms, DEFAULT_MOCK_LATENCY_MS);
        assert_eq!(config.log_level, log::Level::Info);
    }
}
