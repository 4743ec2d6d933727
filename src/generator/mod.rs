//! Guide generation.
//!
//! Writes one `README.md` scaffold per problem domain under the output
//! directory. Existing guides are never overwritten: once a guide exists it
//! belongs to whoever edits it next.

pub mod template;

pub use template::render_guide;

use crate::analyzer::ProblemDomain;
use crate::domains::is_guide_eligible;
use crate::error::{ReframeError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of every generated guide
pub const GUIDE_FILE_NAME: &str = "README.md";

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Guides written by this run
    pub written: Vec<PathBuf>,
    /// Domain keys whose guide already existed
    pub skipped: Vec<String>,
}

/// What happened to one domain's guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideStatus {
    /// A new guide was written at this path
    Written(PathBuf),
    /// The domain already had a guide
    Skipped(String),
}

/// Writes guide scaffolds for analyzed problem domains.
pub struct GuideGenerator {
    output_dir: PathBuf,
}

impl GuideGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the guide for a domain
    pub fn guide_path(&self, domain_key: &str) -> PathBuf {
        self.output_dir.join(domain_key).join(GUIDE_FILE_NAME)
    }

    /// Generate guides for every domain except the catch-all.
    ///
    /// Directory creation and write failures abort the run.
    pub fn generate(
        &self,
        domains: &BTreeMap<String, ProblemDomain>,
    ) -> Result<GenerationSummary> {
        self.generate_with(domains, |_| {})
    }

    /// Like [`generate`](Self::generate), calling `on_guide` for each guide
    /// in domain order as soon as it is written or skipped.
    pub fn generate_with<F>(
        &self,
        domains: &BTreeMap<String, ProblemDomain>,
        mut on_guide: F,
    ) -> Result<GenerationSummary>
    where
        F: FnMut(&GuideStatus),
    {
        fs::create_dir_all(&self.output_dir)?;

        let mut summary = GenerationSummary::default();
        for (key, domain) in domains {
            if !is_guide_eligible(key) {
                continue;
            }

            let status = self.generate_guide(key, domain)?;
            on_guide(&status);
            match status {
                GuideStatus::Written(path) => summary.written.push(path),
                GuideStatus::Skipped(key) => summary.skipped.push(key),
            }
        }
        Ok(summary)
    }

    /// Write a single guide unless one already exists.
    fn generate_guide(&self, key: &str, domain: &ProblemDomain) -> Result<GuideStatus> {
        let guide_path = self.guide_path(key);

        if guide_path.exists() {
            info!("Skipping {} - guide already exists", key);
            return Ok(GuideStatus::Skipped(key.to_string()));
        }

        if let Some(dir) = guide_path.parent() {
            fs::create_dir_all(dir)?;
        }

        fs::write(&guide_path, render_guide(domain)).map_err(|source| {
            ReframeError::GuideWrite {
                path: guide_path.clone(),
                source,
            }
        })?;

        info!("Generated: {}", guide_path.display());
        Ok(GuideStatus::Written(guide_path))
    }
}
