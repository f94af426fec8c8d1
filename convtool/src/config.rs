//! Shell configuration from environment variables
//!
//! - CONVTOOL_PRECISION: significant digits in results (1-15, default 6)
//! - CONVTOOL_DECIMAL_SEPARATOR: '.' or ',' (default '.')
//! - CONVTOOL_CATEGORY: category selected at startup (default "distance")
//!
//! Invalid values are logged and replaced by the default.

use std::env;
use convtool_units::{Category, FormatOptions, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};
use tracing::warn;

pub const PRECISION_VAR: &str = "CONVTOOL_PRECISION";
pub const SEPARATOR_VAR: &str = "CONVTOOL_DECIMAL_SEPARATOR";
pub const CATEGORY_VAR: &str = "CONVTOOL_CATEGORY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: FormatOptions,
    pub initial_category: Category,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: FormatOptions::default(),
            initial_category: Category::Distance,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; tests pass a closure over a map
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(PRECISION_VAR) {
            match raw.trim().parse::<u8>() {
                Ok(d) if (1..=MAX_SIGNIFICANT_DIGITS).contains(&d) => {
                    config.format = config.format.with_significant_digits(d);
                }
                _ => warn!(
                    var = PRECISION_VAR, value = %raw,
                    "expected 1-{}, using {}", MAX_SIGNIFICANT_DIGITS, DEFAULT_SIGNIFICANT_DIGITS
                ),
            }
        }

        if let Some(raw) = lookup(SEPARATOR_VAR) {
            match raw.trim() {
                "." => {}
                "," => config.format = config.format.with_decimal_separator(','),
                _ => warn!(var = SEPARATOR_VAR, value = %raw, "expected '.' or ',', using '.'"),
            }
        }

        if let Some(raw) = lookup(CATEGORY_VAR) {
            match raw.parse::<Category>() {
                Ok(c) => config.initial_category = c,
                Err(e) => warn!(var = CATEGORY_VAR, error = %e, "using distance"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.format.significant_digits, 6);
        assert_eq!(config.format.decimal_separator, '.');
        assert_eq!(config.initial_category, Category::Distance);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (PRECISION_VAR, "4"),
            (SEPARATOR_VAR, ","),
            (CATEGORY_VAR, "Temperature"),
        ]);
        assert_eq!(config.format.significant_digits, 4);
        assert_eq!(config.format.decimal_separator, ',');
        assert_eq!(config.initial_category, Category::Temperature);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            (PRECISION_VAR, "0"),
            (SEPARATOR_VAR, ";"),
            (CATEGORY_VAR, "volume"),
        ]);
        assert_eq!(config, Config::default());

        let config = config_from(&[(PRECISION_VAR, "lots")]);
        assert_eq!(config.format.significant_digits, 6);
    }
}
