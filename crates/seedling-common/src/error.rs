//! Unified error types for the Seedling workspace.
//!
//! The image vector engine reports resolution misses through its own typed
//! error and converts it into [`SeedlingError::NotFound`] when it crosses a
//! crate boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SeedlingError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value or catalog entry is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A version constraint expression could not be parsed.
    #[error("invalid version constraint \"{expression}\": {reason}")]
    InvalidConstraint {
        /// The offending expression as written.
        expression: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A concrete version string could not be parsed.
    #[error("invalid version \"{version}\": {reason}")]
    InvalidVersion {
        /// The offending version as written.
        version: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// A YAML (or JSON) catalog document could not be (de)serialized.
    #[error("catalog serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_yaml::Error,
    },

    /// JSON output could not be produced.
    #[error("json error: {source}")]
    Json {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl SeedlingError {
    /// Returns `true` for errors that must stop the process at startup.
    ///
    /// Only lookup misses are recoverable; the caller decides whether to
    /// retry them on a later reconciliation pass.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SeedlingError>;
