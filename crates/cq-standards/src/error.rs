//! Error types for loading configuration tables.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or checking the standards tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse standards TOML: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported standards schema {schema} v{version} (expected {expected} v{expected_version})")]
    InvalidSchema {
        schema: String,
        version: u32,
        expected: &'static str,
        expected_version: u32,
    },

    #[error("unknown role '{name}' in {table}")]
    UnknownRole { table: &'static str, name: String },

    #[error("invalid standards: {message}")]
    Invalid { message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for standards loading operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
