//! Storefront error types.

use thiserror::Error;

use crate::render::RenderTarget;

/// Result alias used across the storefront core.
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A value handed to the core was not usable (e.g. a non-finite price).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A render target the core must write to is not available.
    #[error("Precondition failed: render target `{target}` is not available")]
    PreconditionFailed { target: RenderTarget },

    /// The product catalog could not be fetched or decoded.
    #[error("Catalog unavailable: {0}")]
    DataUnavailable(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Shorthand for a missing render target.
    pub fn missing_target(target: RenderTarget) -> Self {
        StorefrontError::PreconditionFailed { target }
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(e: serde_json::Error) -> Self {
        StorefrontError::Serialization(e.to_string())
    }
}
