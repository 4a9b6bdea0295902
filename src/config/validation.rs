//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject values that would make the observer silently useless
//!
//! # Design Decisions
//! - Validation is a pure function over the config
//! - Runs before a config is accepted into a layer

use thiserror::Error;

use super::schema::ObserverConfig;

/// Errors produced by semantic configuration checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A zero ceiling would record empty bodies for every call while
    /// looking configured.
    #[error("max_body_bytes must be greater than zero")]
    ZeroBodyCap,
}

/// Check a configuration for semantic errors.
pub fn validate(config: &ObserverConfig) -> Result<(), ConfigError> {
    if config.max_body_bytes == 0 {
        return Err(ConfigError::ZeroBodyCap);
    }
    Ok(())
}
