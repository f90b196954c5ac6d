//! Error types for patchbump
//!
//! All modules use `BumpResult<T>` as their return type.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for patchbump operations
pub type BumpResult<T> = Result<T, BumpError>;

/// All errors that can occur in patchbump
#[derive(Error, Debug)]
pub enum BumpError {
    // Resolver errors
    #[error("No pyproject.toml or package.json found in {0}")]
    NoPackageFound(PathBuf),

    // Metadata errors
    #[error("Failed to read metadata {path}: {reason}")]
    MetadataRead { path: PathBuf, reason: String },

    #[error("Failed to write metadata {path}: {reason}")]
    MetadataWrite { path: PathBuf, reason: String },

    #[error("No {field} in {path}")]
    MissingField { path: PathBuf, field: String },

    #[error("Invalid {field} in {path}: {reason}")]
    InvalidField {
        path: PathBuf,
        field: String,
        reason: String,
    },

    #[error("Invalid version format in {path}: {version}")]
    InvalidVersionFormat { path: PathBuf, version: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    User(String),
}

impl BumpError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a metadata read error for `path`
    pub fn metadata_read(path: &Path, reason: impl ToString) -> Self {
        Self::MetadataRead {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a metadata write error for `path`
    pub fn metadata_write(path: &Path, reason: impl ToString) -> Self {
        Self::MetadataWrite {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a missing field error for `path`
    pub fn missing_field(path: &Path, field: impl Into<String>) -> Self {
        Self::MissingField {
            path: path.to_path_buf(),
            field: field.into(),
        }
    }

    /// Create an invalid field error for `path`
    pub fn invalid_field(path: &Path, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.to_path_buf(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoPackageFound(_) => {
                Some("Run from a project root or pass --path <dir> pointing at one")
            }
            Self::InvalidVersionFormat { .. } => {
                Some("Versions must be MAJOR.MINOR.PATCH without leading zeros or suffixes")
            }
            Self::ConfigInvalid { .. } => Some("Run: patchbump config init --force"),
            _ => None,
        }
    }
}
