//! Error types for the runner crate

use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that stop the clock loop
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
