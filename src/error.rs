//! Error types for ftsctl operations.
//!
//! This module defines [`FtsctlError`], the fatal error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FtsctlError` for configuration and I/O failures that must abort
//!   the command with a non-zero exit code
//! - Subsystem failures (platforms, providers) are *not* fatal; they are
//!   modeled as [`RegistryError`] and folded into the report as error
//!   entries instead of being raised
//! - Use `anyhow::Error` (via `FtsctlError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Fatal error type for ftsctl operations.
#[derive(Debug, Error)]
pub enum FtsctlError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A configuration value the report cannot be built without.
    #[error("Missing configuration value '{key}'")]
    ConfigKeyMissing { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ftsctl operations.
pub type Result<T> = std::result::Result<T, FtsctlError>;

/// Recoverable subsystem error.
///
/// Produced by registry lookups and descriptor activation. These never
/// escape the report layer: the builder converts them into error entries
/// and the text renderer substitutes fallback sentences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Lookup by identifier matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// A platform was found but refused to activate.
    #[error("{0}")]
    ActivationFailed(String),

    /// A whole subsystem listing could not be produced.
    #[error("{0}")]
    EnumerationFailed(String),
}
