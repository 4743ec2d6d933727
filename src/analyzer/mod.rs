//! Content analysis: walk source documents, extract command mentions and
//! code examples, and group commands into problem domains.
//!
//! # Example
//!
//! ```rust,no_run
//! use reframe::analyzer::ContentAnalyzer;
//! use reframe::config::ReframeConfig;
//!
//! let analyzer = ContentAnalyzer::new(ReframeConfig::default().with_source_dir("topics"));
//! let analysis = analyzer.analyze()?;
//! for (key, domain) in &analysis.domains {
//!     println!("{key}: {} commands", domain.commands.len());
//! }
//! # Ok::<(), reframe::ReframeError>(())
//! ```

pub mod catalog;
pub mod extract;
pub mod types;

pub use catalog::CommandCatalog;
pub use extract::{extract_code_examples, MentionPattern};
pub use types::{CommandMention, ProblemDomain};

use crate::config::ReframeConfig;
use crate::error::{ReframeError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A document path, or the error that made traversal fail there
type DocumentEntry = std::result::Result<PathBuf, walkdir::Error>;

/// A document that could not be analyzed, with the error detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

impl FileFailure {
    /// Record a per-file error; `None` for errors not tied to a document.
    pub fn from_error(err: &ReframeError) -> Option<Self> {
        let path = err.document_path()?.to_path_buf();
        let error = std::error::Error::source(err)
            .map_or_else(|| err.to_string(), ToString::to_string);
        Some(Self { path, error })
    }
}

/// Result of one analysis pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Analysis {
    /// Problem domains keyed by domain key
    pub domains: BTreeMap<String, ProblemDomain>,
    /// Documents successfully read
    pub files_scanned: usize,
    /// Documents skipped because of read or traversal errors
    pub failures: Vec<FileFailure>,
    /// Set when the source directory does not exist
    pub source_missing: bool,
}

impl Analysis {
    /// Total commands across all domains
    pub fn total_commands(&self) -> usize {
        self.domains.values().map(|d| d.commands.len()).sum()
    }

    /// True when no command was discovered
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Skip a document that failed with a per-file error.
    ///
    /// Any other error is handed back and ends the pass.
    fn skip_document(&mut self, err: ReframeError) -> Result<()> {
        if !err.is_per_file() {
            return Err(err);
        }
        warn!("{}", err);
        self.failures.extend(FileFailure::from_error(&err));
        Ok(())
    }
}

/// Analyzer for a tree of command-focused documents.
pub struct ContentAnalyzer {
    config: ReframeConfig,
}

impl ContentAnalyzer {
    pub fn new(config: ReframeConfig) -> Self {
        Self { config }
    }

    pub fn source_dir(&self) -> &Path {
        &self.config.source_dir
    }

    /// Analyze every document under the source directory.
    ///
    /// A missing source directory and unreadable documents are not errors:
    /// they are recorded on the returned [`Analysis`] and the pass goes on.
    pub fn analyze(&self) -> Result<Analysis> {
        let mut analysis = Analysis::default();
        let source_dir = self.source_dir();

        if !source_dir.exists() {
            warn!("Source directory '{}' does not exist", source_dir.display());
            analysis.source_missing = true;
            return Ok(analysis);
        }

        let mut catalog = CommandCatalog::new()?;

        for document in self.documents() {
            let path = match document {
                Ok(path) => path,
                Err(source) => {
                    let path = source
                        .path()
                        .map_or_else(|| source_dir.to_path_buf(), Path::to_path_buf);
                    analysis.skip_document(ReframeError::Walk { path, source })?;
                    continue;
                }
            };

            match fs::read_to_string(&path) {
                Ok(content) => {
                    debug!("Analyzing {}", path.display());
                    catalog.ingest(&content, &path);
                    analysis.files_scanned += 1;
                }
                Err(source) => {
                    analysis.skip_document(ReframeError::ReadDocument { path, source })?;
                }
            }
        }

        debug!(
            "Scanned {} documents, found {} commands",
            analysis.files_scanned,
            catalog.len()
        );
        analysis.domains = catalog.into_domains();
        Ok(analysis)
    }

    /// Documents under the source directory in file-name order.
    ///
    /// Ignored directories are pruned and directory links are not followed.
    /// Links to documents are. Traversal errors are passed through so the
    /// caller can record them.
    fn documents(&self) -> impl Iterator<Item = DocumentEntry> + '_ {
        let ignored = self.config.ignored_dirs();

        WalkDir::new(self.source_dir())
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                !(entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| ignored.contains(name)))
            })
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let wanted = entry.path().is_file() && self.config.is_document(entry.path());
                    wanted.then(|| Ok(entry.into_path()))
                }
                Err(err) => Some(Err(err)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn analyzer(root: &Path) -> ContentAnalyzer {
        ContentAnalyzer::new(ReframeConfig::default().with_source_dir(root))
    }

    #[test]
    fn test_missing_source_is_empty_not_error() {
        let temp = TempDir::new().unwrap();
        let analysis = analyzer(&temp.path().join("nope")).analyze().unwrap();
        assert!(analysis.source_missing);
        assert!(analysis.is_empty());
        assert_eq!(analysis.files_scanned, 0);
    }

    #[test]
    fn test_recursive_scan_of_markdown_only() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "basics.md", "- `ls` - list files\n");
        write(temp.path(), "deep/nested/text.md", "- `grep` - search text\n");
        write(temp.path(), "notes.txt", "- `ps` - processes\n");

        let analysis = analyzer(temp.path()).analyze().unwrap();
        assert_eq!(analysis.files_scanned, 2);
        assert_eq!(analysis.total_commands(), 2);
        assert!(analysis.domains.contains_key("navigating-filesystem"));
        assert!(analysis.domains.contains_key("text-processing"));
        assert!(!analysis.domains.contains_key("managing-processes"));
    }

    #[test]
    fn test_unreadable_document_is_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.md", "- `cp` - copy files\n");
        fs::write(temp.path().join("b.md"), [0xff, 0xfe, 0x2d, 0x20]).unwrap();
        write(temp.path(), "c.md", "- `mv` - move files\n");

        let analysis = analyzer(temp.path()).analyze().unwrap();
        assert_eq!(analysis.files_scanned, 2);
        assert_eq!(analysis.failures.len(), 1);
        assert_eq!(analysis.failures[0].path, temp.path().join("b.md"));

        let ops = &analysis.domains["file-operations"];
        assert_eq!(ops.command_names().collect::<Vec<_>>(), ["cp", "mv"]);
    }

    #[test]
    fn test_read_failure_keeps_io_detail() {
        let err = ReframeError::ReadDocument {
            path: PathBuf::from("topics/b.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "invalid utf-8"),
        };
        let failure = FileFailure::from_error(&err).unwrap();
        assert_eq!(failure.path, PathBuf::from("topics/b.md"));
        assert_eq!(failure.error, "invalid utf-8");
    }

    #[test]
    fn test_only_per_file_errors_are_skipped() {
        let mut analysis = Analysis::default();
        let err = ReframeError::invalid_config("extensions", "empty");
        assert!(FileFailure::from_error(&err).is_none());
        assert!(matches!(
            analysis.skip_document(err),
            Err(ReframeError::InvalidConfig { .. })
        ));
        assert!(analysis.failures.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_document_is_analyzed() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "real.md", "- `grep` - search text in files
");
        let topics = temp.path().join("topics");
        fs::create_dir_all(&topics).unwrap();
        std::os::unix::fs::symlink(temp.path().join("real.md"), topics.join("link.md")).unwrap();

        let analysis = analyzer(&topics).analyze().unwrap();
        assert_eq!(analysis.files_scanned, 1);
        assert_eq!(
            analysis.domains["text-processing"].source_files,
            std::collections::BTreeSet::from([topics.join("link.md")])
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_followed() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "elsewhere/ps.md", "- `ps` - list processes
");
        let topics = temp.path().join("topics");
        write(&topics, "df.md", "- `df` - disk free
");
        std::os::unix::fs::symlink(temp.path().join("elsewhere"), topics.join("linked")).unwrap();

        let analysis = analyzer(&topics).analyze().unwrap();
        assert_eq!(analysis.files_scanned, 1);
        assert!(!analysis.domains.contains_key("managing-processes"));
    }

    #[test]
    fn test_discovery_order_follows_file_names() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.md", "- `kill` - stop a process\n");
        write(temp.path(), "a.md", "- `ps` - list processes\n");

        let analysis = analyzer(temp.path()).analyze().unwrap();
        let procs = &analysis.domains["managing-processes"];
        assert_eq!(procs.command_names().collect::<Vec<_>>(), ["ps", "kill"]);
    }

    #[test]
    fn test_ignored_directories_are_pruned() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.md", "- `df` - disk free\n");
        write(temp.path(), "drafts/b.md", "- `du` - disk usage\n");

        let mut config = ReframeConfig::default().with_source_dir(temp.path());
        config.ignore_dirs = vec!["drafts".into()];
        let analysis = ContentAnalyzer::new(config).analyze().unwrap();

        let monitoring = &analysis.domains["system-monitoring"];
        assert_eq!(monitoring.command_names().collect::<Vec<_>>(), ["df"]);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "one.md", "- `cd` - change directory\n```\ncd /tmp\n```\n");
        write(temp.path(), "two.md", "- `cd` - move around\n- `chmod` - modes\n");
        write(temp.path(), "three.md", "- `rsync` - sync files\n");

        let first = analyzer(temp.path()).analyze().unwrap();
        let second = analyzer(temp.path()).analyze().unwrap();
        assert_eq!(first.domains, second.domains);
    }
}
