//! Runtime configuration.
//!
//! Defaults with environment overrides:
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `PRODUCT_API_URL` | base url of the product REST backend | unset: in-memory store |
//! | `PRODUCT_STORE_BUFFER` | request channel capacity of the in-memory store | `32` |

use thiserror::Error;

pub const API_URL_VAR: &str = "PRODUCT_API_URL";
pub const STORE_BUFFER_VAR: &str = "PRODUCT_STORE_BUFFER";

/// Errors raised while reading the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Where products live and how the in-memory store is sized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base url of the REST backend. `None` runs the in-memory store.
    pub api_url: Option<String>,
    pub store_buffer: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            store_buffer: 32,
        }
    }
}

impl CatalogConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                    return Err(ConfigError::InvalidValue {
                        key: API_URL_VAR,
                        value: url,
                        reason: "expected an http(s) url",
                    });
                }
                config.api_url = Some(trimmed.to_string());
            }
        }

        if let Some(raw) = lookup(STORE_BUFFER_VAR) {
            config.store_buffer = match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: STORE_BUFFER_VAR,
                        value: raw,
                        reason: "expected a positive integer",
                    })
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.store_buffer, 32);
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            (API_URL_VAR, " https://fakestoreapi.com "),
            (STORE_BUFFER_VAR, "8"),
        ]))
        .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://fakestoreapi.com"));
        assert_eq!(config.store_buffer, 8);
    }

    #[test]
    fn test_blank_url_means_in_memory() {
        let config = CatalogConfig::from_lookup(lookup(&[(API_URL_VAR, "  ")])).unwrap();
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let err = CatalogConfig::from_lookup(lookup(&[(STORE_BUFFER_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: STORE_BUFFER_VAR, .. }));

        let err = CatalogConfig::from_lookup(lookup(&[(API_URL_VAR, "ftp://x")])).unwrap_err();
        assert!(err.to_string().contains(API_URL_VAR));
    }
}
