//! Reframe - problem-focused guide scaffolding
//!
//! Scans a tree of command-focused documentation, extracts the command-line
//! tools it declares along with their code examples, groups the tools into
//! problem domains, and writes one guide scaffold per domain.
//!
//! # Architecture
//!
//! - [`analyzer`] - Document traversal, extraction, merging and grouping
//! - [`config`] - Configuration loading and validation
//! - [`domains`] - Static command and problem-domain lookup tables
//! - [`error`] - Custom error types and handling
//! - [`generator`] - Guide rendering and write-once output
//! - [`report`] - Plain-text and JSON analysis reports
//!
//! # Example
//!
//! ```rust,no_run
//! use reframe::{ContentAnalyzer, GuideGenerator, ReframeConfig};
//!
//! let config = ReframeConfig::default();
//! let analysis = ContentAnalyzer::new(config.clone()).analyze()?;
//! if !analysis.is_empty() {
//!     let summary = GuideGenerator::new(&config.output_dir).generate(&analysis.domains)?;
//!     println!("{} guides written", summary.written.len());
//! }
//! # Ok::<(), reframe::ReframeError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod domains;
pub mod error;
pub mod generator;
pub mod report;

// Re-export commonly used types
pub use error::{ReframeError, Result};

pub use analyzer::{Analysis, CommandCatalog, CommandMention, ContentAnalyzer, ProblemDomain};
pub use config::ReframeConfig;
pub use domains::CATCH_ALL_DOMAIN;
pub use generator::{GenerationSummary, GuideGenerator, GuideStatus};
pub use report::{render_report, AnalysisReport};
