//! Core error types for tpbstudy-core.
//!
//! Validation failures are the only errors the timer and the lab calculators
//! produce; configuration loading adds file and parse failures on top.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a configuration value
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not determine or create the configuration directory
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Synchronous validation failures. Nothing is mutated when one is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric argument is non-finite or outside its domain.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A timer duration is not a positive number of minutes.
    #[error("Invalid timer configuration for '{field}': {message}")]
    InvalidConfig { field: String, message: String },
}

impl ValidationError {
    pub(crate) fn input(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn config(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidInput { field, .. }
            | ValidationError::InvalidConfig { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_reports_field() {
        let err = ValidationError::input("concentration", "must be greater than zero");
        assert_eq!(err.field(), "concentration");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'concentration': must be greater than zero"
        );
    }

    #[test]
    fn config_errors_name_the_key() {
        let err = ConfigError::InvalidValue {
            key: "timer.work_minutes".into(),
            message: "must be at least 1 minute".into(),
        };
        assert!(err.to_string().contains("timer.work_minutes"));
        assert_eq!(
            ConfigError::UnknownKey("timer.nope".into()).to_string(),
            "unknown config key: timer.nope"
        );
    }
}
