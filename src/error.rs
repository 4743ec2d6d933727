//! Custom error types for Reframe.
//!
//! Errors fall into two groups: those caught at single-document granularity
//! during analysis (the document is skipped and the run continues), and
//! those that propagate to the top level and end the run.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for Reframe operations
#[derive(Error, Debug)]
pub enum ReframeError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Analysis Errors
    // =========================================================================
    /// A source document could not be read or decoded
    #[error("Failed to read {path}: {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed for an entry
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // =========================================================================
    // Generation Errors
    // =========================================================================
    /// A guide could not be written
    #[error("Failed to write guide {path}: {source}")]
    GuideWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML error wrapper
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON error wrapper
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReframeError {
    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// The document a per-file error is attached to
    pub fn document_path(&self) -> Option<&Path> {
        match self {
            Self::ReadDocument { path, .. } | Self::Walk { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if this error is contained to a single document.
    ///
    /// Per-file errors are logged and the document is skipped; everything
    /// else ends the run.
    pub fn is_per_file(&self) -> bool {
        self.document_path().is_some()
    }
}

/// Type alias for Reframe results
pub type Result<T> = std::result::Result<T, ReframeError>;
