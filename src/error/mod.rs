//! Error handling module for fragpack

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for fragpack operations
#[derive(Error, Debug)]
pub enum FragpackError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Engine invocation error
    #[error("Engine invocation failed: {message}")]
    EngineError { message: String },

    /// Artifact materialization error
    #[error("Failed to materialize artifact {name}: {message}")]
    ArtifactError { name: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Domain-layer error
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for fragpack operations
pub type FragpackResult<T> = std::result::Result<T, FragpackError>;
