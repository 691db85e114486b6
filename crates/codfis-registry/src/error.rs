//! Registry-specific error types.
//!
//! Structured errors for loading the place reference dataset. Errors carry
//! the file path and the offending entry where possible.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a place registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The dataset file does not exist.
    #[error("place dataset not found: {path}")]
    FileNotFound { path: PathBuf },

    /// An entry carries a malformed place code.
    #[error("invalid code for place {place:?}: {source}")]
    InvalidCode {
        place: String,
        source: codfis_core::ValidationError,
    },

    /// Two entries share the same name (ignoring case).
    #[error("duplicate place {place:?}: already mapped to {existing}")]
    DuplicatePlace { place: String, existing: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for registry results.
pub type RegistryResult<T> = Result<T, RegistryError>;
