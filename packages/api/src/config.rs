//! # Application configuration — `stockdeck.toml`
//!
//! Defines the TOML configuration for the dashboard. There is little to
//! configure in a client-only build, so this holds the list page size and
//! the knobs of the mock backend.
//!
//! ## Structure
//!
//! ```toml
//! [list]
//! page_size = 10
//!
//! [mock]
//! latency_ms = 500       # simulated round-trip delay
//! total_products = 100   # fixed total the mock reports
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or
//! empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `stockdeck.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StockdeckConfig {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

/// Product list configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    10
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Mock backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Simulated round-trip delay in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Fixed total the mock reports regardless of page.
    #[serde(default = "default_total_products")]
    pub total_products: u32,
}

fn default_latency_ms() -> u64 {
    500
}

fn default_total_products() -> u32 {
    100
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            total_products: default_total_products(),
        }
    }
}

impl StockdeckConfig {
    /// Builder method to set the list page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.list.page_size = page_size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "stockdeck.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = StockdeckConfig::from_toml("").unwrap();
        assert_eq!(config, StockdeckConfig::default());
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.mock.latency_ms, 500);
        assert_eq!(config.mock.total_products, 100);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = StockdeckConfig::from_toml("[list]\npage_size = 25\n").unwrap();
        assert_eq!(config.list.page_size, 25);
        assert_eq!(config.mock.total_products, 100);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = StockdeckConfig::default().with_page_size(20);
        let text = config.to_toml().unwrap();
        let loaded = StockdeckConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
    }
}
