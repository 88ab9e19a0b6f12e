//! Error types for configuration validation and persistence
//!
//! This module provides the unified error hierarchy for the gateway core.
//! Validation failures carry the exact rejection message downstream callers
//! return verbatim to the submitter, while filesystem failures stay separate
//! so callers can distinguish a bad submission from a bad environment.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("algorithm must be one of: acer, acerac, PPO, SAC (got '{0}')")]
    UnknownAlgorithm(String),
    #[error("configuration must have exactly the fields: algorithm, algorithm_config")]
    MissingRequiredFields,
    #[error("invalid configuration for algorithm '{algorithm}': {message}")]
    InvalidConfiguration { algorithm: String, message: String },
    #[error("configuration file already exists: {0}")]
    FileAlreadyExists(String),
    #[error("malformed configuration file '{file}': {message}")]
    MalformedConfigurationFile { file: String, message: String },
    #[error("unknown gateway type: {0}")]
    UnknownGatewayType(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        GatewayError::IoError(err.to_string())
    }
}
