//! Runtime configuration, read from the environment (and an optional `.env` file).

use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CafeConfig {
    /// Collection the menu is read from.
    pub drinks_collection: String,
    /// Collection orders are written to.
    pub orders_collection: String,
    /// Request buffer of each actor's channel.
    pub channel_capacity: usize,
    /// Trim the delivery address before validating and writing it.
    pub trim_address: bool,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            drinks_collection: "drinks".to_string(),
            orders_collection: "orders".to_string(),
            channel_capacity: 32,
            trim_address: false,
        }
    }
}

impl CafeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any `name -> value` source; unset names take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let drinks_collection =
            non_empty(&lookup, "CAFE_DRINKS_COLLECTION")?.unwrap_or(defaults.drinks_collection);
        let orders_collection =
            non_empty(&lookup, "CAFE_ORDERS_COLLECTION")?.unwrap_or(defaults.orders_collection);

        let channel_capacity = match lookup("CAFE_CHANNEL_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        name: "CAFE_CHANNEL_CAPACITY",
                        reason: "must be at least 1".to_string(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "CAFE_CHANNEL_CAPACITY",
                        reason: e.to_string(),
                    })
                }
            },
            None => defaults.channel_capacity,
        };

        let trim_address = match lookup("CAFE_TRIM_ADDRESS") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|e| ConfigError::Invalid {
                    name: "CAFE_TRIM_ADDRESS",
                    reason: e.to_string(),
                })?,
            None => defaults.trim_address,
        };

        let config = Self {
            drinks_collection,
            orders_collection,
            channel_capacity,
            trim_address,
        };
        tracing::info!(?config, "Configuration loaded");
        Ok(config)
    }
}

fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Invalid {
            name,
            reason: "must not be empty".to_string(),
        }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CafeConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CafeConfig::default());
        assert_eq!(config.drinks_collection, "drinks");
        assert_eq!(config.orders_collection, "orders");
        assert_eq!(config.channel_capacity, 32);
        assert!(!config.trim_address);
    }

    #[test]
    fn test_overrides() {
        let config = CafeConfig::from_lookup(lookup(&[
            ("CAFE_DRINKS_COLLECTION", "menu"),
            ("CAFE_ORDERS_COLLECTION", "orders_test"),
            ("CAFE_CHANNEL_CAPACITY", "4"),
            ("CAFE_TRIM_ADDRESS", "true"),
        ]))
        .unwrap();

        assert_eq!(config.drinks_collection, "menu");
        assert_eq!(config.orders_collection, "orders_test");
        assert_eq!(config.channel_capacity, 4);
        assert!(config.trim_address);
    }

    #[test]
    fn test_invalid_values() {
        let zero = CafeConfig::from_lookup(lookup(&[("CAFE_CHANNEL_CAPACITY", "0")]));
        assert!(matches!(
            zero,
            Err(ConfigError::Invalid { name: "CAFE_CHANNEL_CAPACITY", .. })
        ));

        let flag = CafeConfig::from_lookup(lookup(&[("CAFE_TRIM_ADDRESS", "yes")]));
        assert!(matches!(
            flag,
            Err(ConfigError::Invalid { name: "CAFE_TRIM_ADDRESS", .. })
        ));

        let blank = CafeConfig::from_lookup(lookup(&[("CAFE_ORDERS_COLLECTION", " ")]));
        assert!(blank.is_err());
    }
}
