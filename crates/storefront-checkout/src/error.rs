//! Error types for the checkout layer.

use storefront_core::{CoreError, ValidationError};

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid value for {key}: {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: ValidationError,
    },
}

/// Errors surfaced to the checkout workflow.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] CoreError),

    #[error("Snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
