//! Configuration management for Reframe.
//!
//! Settings come from four layers, highest precedence first: CLI flags,
//! environment variables, an optional TOML file passed with `--config`,
//! and the built-in defaults below.

use crate::error::{ReframeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Default directory scanned for source documents
pub const DEFAULT_SOURCE_DIR: &str = "topics";

/// Default directory guides are written into
pub const DEFAULT_OUTPUT_DIR: &str = "problems";

/// File extension categories
pub mod extensions {
    /// Extensions treated as documentation by default
    pub const DOCS: &[&str] = &["md"];
}

/// Settings for one analyze/generate run.
///
/// # Example reframe.toml
///
/// ```toml
/// source_dir = "topics"
/// output_dir = "problems"
/// extensions = ["md", "markdown"]
/// ignore_dirs = ["drafts"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReframeConfig {
    /// Root directory to scan for documents
    pub source_dir: PathBuf,
    /// Root directory to write generated guides into
    pub output_dir: PathBuf,
    /// File extensions (without the dot) that count as documents
    pub extensions: Vec<String>,
    /// Directory basenames pruned during traversal
    pub ignore_dirs: Vec<String>,
}

impl Default for ReframeConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extensions: extensions::DOCS.iter().map(|s| s.to_string()).collect(),
            ignore_dirs: Vec::new(),
        }
    }
}

impl ReframeConfig {
    /// Load configuration from a TOML file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReframeError::config_with_path(format!("cannot read config file: {e}"), path.into())
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| ReframeError::config_with_path(e.to_string(), path.into()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: ReframeConfig = toml::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    /// Override the source directory
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Override the document extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self.normalize();
        self
    }

    /// Validate the configuration before a run.
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(ReframeError::invalid_config(
                "extensions",
                "at least one document extension is required",
            ));
        }
        if self.extensions.iter().any(|e| e.trim().is_empty()) {
            return Err(ReframeError::invalid_config(
                "extensions",
                "extensions must not be blank",
            ));
        }
        if self.ignore_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(ReframeError::invalid_config(
                "ignore_dirs",
                "ignored directory names must not be blank",
            ));
        }
        Ok(())
    }

    /// Whether `path` has one of the configured document extensions.
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// Directory basenames to skip during traversal
    pub fn ignored_dirs(&self) -> HashSet<&str> {
        self.ignore_dirs.iter().map(String::as_str).collect()
    }

    fn normalize(&mut self) {
        for ext in &mut self.extensions {
            if let Some(stripped) = ext.strip_prefix('.') {
                *ext = stripped.to_string();
            }
        }
    }
}
