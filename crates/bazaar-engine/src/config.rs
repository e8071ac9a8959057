//! # Engine Configuration
//!
//! Host-supplied tuning for the catalog engine. The host shell hands the
//! engine a JSON blob; every field has a serde default so an empty object
//! `{}` is a complete, valid configuration.
//!
//! ```json
//! {
//!   "page_size": 20,
//!   "debounce_window_ms": 300,
//!   "price_filter_basis": "regular"
//! }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use bazaar_core::filter::{FilterPolicy, PriceBasis};
use bazaar_core::paginate::DEFAULT_PAGE_SIZE;
use bazaar_core::validation::validate_page_size;

use crate::error::EngineResult;

// =============================================================================
// Constants
// =============================================================================

/// Debounce window applied to filter-criteria changes unless configured
/// otherwise. Rapid changes inside the window collapse into a single
/// recomputation executed this long after the last change.
pub const DEFAULT_DEBOUNCE_WINDOW_MS: u64 = 300;

// =============================================================================
// Engine Config
// =============================================================================

/// Tunable engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Debounce window for criteria changes, in milliseconds.
    /// Zero disables debouncing: every change recomputes immediately.
    #[serde(default = "default_debounce_window_ms")]
    pub debounce_window_ms: u64,

    /// Which price the range filter compares. The shipped default is the
    /// regular (list) price; `effective` opts into comparing the
    /// coupon-adjusted price instead.
    #[serde(default)]
    pub price_filter_basis: PriceBasis,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce_window_ms() -> u64 {
    DEFAULT_DEBOUNCE_WINDOW_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            page_size: default_page_size(),
            debounce_window_ms: default_debounce_window_ms(),
            price_filter_basis: PriceBasis::default(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from host-supplied JSON.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates field ranges.
    pub fn validate(&self) -> EngineResult<()> {
        validate_page_size(self.page_size)?;
        Ok(())
    }

    /// The debounce window as a Duration.
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }

    /// The filter policy implied by this configuration.
    pub fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy {
            price_basis: self.price_filter_basis,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_complete() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.page_size, 20);
        assert_eq!(config.debounce_window_ms, 300);
        assert_eq!(config.price_filter_basis, PriceBasis::Regular);
    }

    #[test]
    fn test_partial_override() {
        let config =
            EngineConfig::from_json(r#"{"page_size": 12, "price_filter_basis": "effective"}"#)
                .unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.debounce_window_ms, 300);
        assert_eq!(config.price_filter_basis, PriceBasis::Effective);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        assert!(EngineConfig::from_json(r#"{"page_size": 0}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"page_size": 500}"#).is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(EngineConfig::from_json("not json").is_err());
    }
}
