//! Error types for didnet.

use std::path::PathBuf;

use didnet_registry::RegistryError;
use thiserror::Error;

/// Errors that can occur while configuring or using didnet.
#[derive(Debug, Error)]
pub enum DidnetError {
    /// Registry error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Malformed configuration.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for didnet operations.
pub type Result<T> = std::result::Result<T, DidnetError>;
