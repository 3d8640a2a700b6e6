// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pricing configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "pricing.toml";

pub const ENV_MATERIAL_COST: &str = "PRICING_MATERIAL_COST_PLA";
pub const ENV_MACHINE_RATE: &str = "PRICING_MACHINE_RATE";
pub const ENV_SETUP_FEE: &str = "PRICING_SETUP_FEE";
pub const ENV_PRINT_SPEED: &str = "PRICING_PRINT_SPEED";

/// Rates applied by the pricing model. Immutable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Currency per gram of material
    pub material_cost_per_gram: f64,
    /// Currency per machine hour
    pub machine_rate_per_hour: f64,
    /// Flat fee per job
    pub setup_fee: f64,
    /// Throughput in mm³ per hour; `<= 0` disables the throughput floor
    pub print_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            material_cost_per_gram: 0.12,
            machine_rate_per_hour: 12.5,
            setup_fee: 4.5,
            print_speed: 5500.0,
        }
    }
}

impl PricingConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: PricingConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `pricing.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from `lookup`, keyed by the `PRICING_*` variable names.
    /// Empty values are ignored; unparsable ones are errors.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields: [(&str, &mut f64); 4] = [
            (ENV_MATERIAL_COST, &mut self.material_cost_per_gram),
            (ENV_MACHINE_RATE, &mut self.machine_rate_per_hour),
            (ENV_SETUP_FEE, &mut self.setup_fee),
            (ENV_PRINT_SPEED, &mut self.print_speed),
        ];

        for (key, field) in fields {
            let Some(raw) = lookup(key).filter(|value| !value.trim().is_empty()) else {
                continue;
            };
            *field = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", key, raw))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Reject negative or non-finite rates. The estimator does not call this;
    /// callers validate before handing a config over.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let fields = [
            ("material_cost_per_gram", self.material_cost_per_gram),
            ("machine_rate_per_hour", self.machine_rate_per_hour),
            ("setup_fee", self.setup_fee),
            ("print_speed", self.print_speed),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = PricingConfig::default();
        assert_eq!(config.print_speed, 5500.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "setup_fee = 10.0")?;
        writeln!(file, "print_speed = 0.0")?;

        let config = PricingConfig::from_file(file.path())?;
        assert_eq!(config.setup_fee, 10.0);
        assert_eq!(config.print_speed, 0.0);
        assert_eq!(config.machine_rate_per_hour, 12.5);
        Ok(())
    }

    #[test]
    fn test_save_round_trip() -> Result<()> {
        let file = NamedTempFile::new()?;
        let config = PricingConfig {
            material_cost_per_gram: 0.2,
            ..PricingConfig::default()
        };
        config.save(file.path())?;
        assert_eq!(PricingConfig::from_file(file.path())?, config);
        Ok(())
    }

    #[test]
    fn test_bad_file_is_error() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "setup_fee = \"free\"")?;
        assert!(PricingConfig::from_file(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let env: HashMap<&str, &str> = [
            (ENV_MACHINE_RATE, "20"),
            (ENV_PRINT_SPEED, " 4000.5 "),
            (ENV_SETUP_FEE, ""),
        ]
        .into_iter()
        .collect();

        let mut config = PricingConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()))?;
        assert_eq!(config.machine_rate_per_hour, 20.0);
        assert_eq!(config.print_speed, 4000.5);
        assert_eq!(config.setup_fee, 4.5);
        assert_eq!(config.material_cost_per_gram, 0.12);
        Ok(())
    }

    #[test]
    fn test_unparsable_override_is_error() {
        let mut config = PricingConfig::default();
        let result = config.apply_overrides(|key| {
            (key == ENV_MATERIAL_COST).then(|| "cheap".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        let negative = PricingConfig {
            setup_fee: -1.0,
            ..PricingConfig::default()
        };
        assert_eq!(
            negative.validate(),
            Err(ConfigError::Negative {
                field: "setup_fee",
                value: -1.0
            })
        );

        let nan = PricingConfig {
            print_speed: f64::NAN,
            ..PricingConfig::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(ConfigError::NonFinite { field: "print_speed", .. })
        ));
    }
}
