//! # Configuration
//!
//! Loads the storefront settings that feed the pricing calculator.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT__PRICING__TAX_RATE=0.0875`)
//! 2. Config file (`storefront.toml`, optional, or an explicit path)
//! 3. Defaults (this file)
//!
//! ## Example `storefront.toml`
//! ```toml
//! [store]
//! currency_code = "USD"
//! currency_symbol = "$"
//!
//! [pricing]
//! tax_rate = "0.0875"
//! prices_include_tax = false
//! flat_shipping_cost = "10.00"
//! free_shipping_threshold = "100.00"
//!
//! [log]
//! filter = "info"
//! ```
//!
//! Amounts and the tax rate are kept as text until
//! [`StorefrontConfig::pricing_configuration`] parses them into exact integer
//! types, so a value like `"0.0875"` never passes through a float.

use std::path::Path;

use ::config::{Config, Environment, File, FileFormat, Source};
use serde::{Deserialize, Serialize};
use storefront_core::validation::validate_tax_rate;
use storefront_core::{Money, PricingConfiguration, TaxRate, ValidationError};
use tracing::debug;

use crate::error::ConfigError;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "STOREFRONT";

/// Base name of the optional settings file looked up in the working directory.
pub const DEFAULT_FILE_NAME: &str = "storefront";

/// Storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    pub store: StoreSettings,
    pub pricing: PricingSettings,
    pub log: LogSettings,
}

/// Currency presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreSettings {
    /// Currency code (ISO 4217), recorded on order snapshots.
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

/// Pricing rule set as written in the settings source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingSettings {
    /// Decimal fraction, e.g. "0.0875" for 8.75%.
    pub tax_rate: String,

    /// Whether catalog prices already contain tax.
    pub prices_include_tax: bool,

    /// Shipping charged below the threshold, e.g. "10.00".
    pub flat_shipping_cost: String,

    /// Subtotal at or above which shipping is free, e.g. "100.00".
    pub free_shipping_threshold: String,
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            tax_rate: "0.0875".to_string(),
            prices_include_tax: false,
            flat_shipping_cost: "10.00".to_string(),
            free_shipping_threshold: "100.00".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Loads `storefront.toml` from the working directory if present, then
    /// applies `STOREFRONT__*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::assemble(
            File::with_name(DEFAULT_FILE_NAME).required(false),
            Self::environment(),
        )
    }

    /// Loads an explicit settings file (which must exist), then applies
    /// environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::assemble(File::from(path).required(true), Self::environment())
    }

    /// Parses TOML text on top of the defaults. No environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::assemble(
            File::from_str(toml, FileFormat::Toml),
            Environment::with_prefix(ENV_PREFIX).source(Some(Default::default())),
        )
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
    }

    fn assemble<F, E>(file: F, env: E) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        let settings = Config::builder().add_source(file).add_source(env).build()?;
        let config: StorefrontConfig = settings.try_deserialize()?;

        debug!(
            currency = %config.store.currency_code,
            tax_rate = %config.pricing.tax_rate,
            prices_include_tax = config.pricing.prices_include_tax,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Parses the textual pricing settings into the calculator's rule set.
    ///
    /// Errors name the offending key, e.g. `pricing.flat_shipping_cost`.
    pub fn pricing_configuration(&self) -> Result<PricingConfiguration, ConfigError> {
        let pricing = &self.pricing;

        let tax_rate = TaxRate::parse_fraction(&pricing.tax_rate)
            .and_then(|rate| validate_tax_rate(rate).map(|_| rate))
            .map_err(|source| ConfigError::InvalidValue {
                key: "pricing.tax_rate",
                source,
            })?;

        Ok(PricingConfiguration {
            tax_rate,
            prices_include_tax: pricing.prices_include_tax,
            flat_shipping_cost: parse_amount("pricing.flat_shipping_cost", &pricing.flat_shipping_cost)?,
            free_shipping_threshold: parse_amount(
                "pricing.free_shipping_threshold",
                &pricing.free_shipping_threshold,
            )?,
        })
    }
}

fn parse_amount(key: &'static str, raw: &str) -> Result<Money, ConfigError> {
    let amount: Money = raw
        .parse()
        .map_err(|source| ConfigError::InvalidValue { key, source })?;

    if amount.is_negative() {
        return Err(ConfigError::InvalidValue {
            key,
            source: ValidationError::MustNotBeNegative {
                field: key.to_string(),
            },
        });
    }

    Ok(amount)
}
