//! Storefront configuration.
//!
//! Defaults match the storage layout the static pages have always used. A
//! page may override any field by embedding a JSON block:
//!
//! ```html
//! <script id="techmarket-config" type="application/json">
//!   { "compare_limit": 3 }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

pub const DEFAULT_COMPARE_LIMIT: usize = 4;
pub const DEFAULT_NOTIFICATION_MS: u32 = 3_000;
/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "techmarket-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid storefront config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("compare_limit must be at least 1")]
    ZeroCompareLimit,
}

/// Storage keys for every persisted value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub compare: String,
    pub cart: String,
    pub favorites: String,
    pub selected_category: String,
    pub selected_product: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            compare: "techmarket_compare".to_owned(),
            cart: "techmarket_cart".to_owned(),
            favorites: "techmarket_favorites".to_owned(),
            selected_category: "selectedCategory".to_owned(),
            selected_product: "selectedProduct".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub keys: StorageKeys,
    pub compare_limit: usize,
    pub notification_ms: u32,
    pub default_category: Category,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            compare_limit: DEFAULT_COMPARE_LIMIT,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            default_category: Category::default(),
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or a zero compare limit.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.compare_limit == 0 {
            return Err(ConfigError::ZeroCompareLimit);
        }
        Ok(config)
    }

    /// Like [`Self::from_json`], but never fails: absent or invalid input
    /// yields the defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default storefront config");
                Self::default()
            }
        }
    }
}
