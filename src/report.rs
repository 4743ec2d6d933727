//! Analysis report rendering, as plain text or JSON.

use crate::analyzer::{Analysis, FileFailure, ProblemDomain};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

const BANNER_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 40;

/// Horizontal rule used around report headings
pub fn banner_rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Render the plain-text report, domains ordered by key.
pub fn render_report(domains: &BTreeMap<String, ProblemDomain>) -> String {
    let total: usize = domains.values().map(|d| d.commands.len()).sum();

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", banner_rule()));
    out.push_str("CONTENT ANALYSIS REPORT\n");
    out.push_str(&format!("{}\n\n", banner_rule()));
    out.push_str(&format!("Total commands found: {total}\n"));
    out.push_str(&format!(
        "Problem domains identified: {}\n\n",
        domains.len()
    ));

    for domain in domains.values() {
        out.push_str(&render_domain(domain));
    }

    out
}

fn render_domain(domain: &ProblemDomain) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", domain.key.to_uppercase()));
    out.push_str(&format!("{}\n", "-".repeat(SECTION_WIDTH)));
    out.push_str(&format!("Description: {}\n", domain.description));
    out.push_str(&format!("Commands ({}):\n", domain.commands.len()));
    for command in &domain.commands {
        match &command.description {
            Some(description) => {
                out.push_str(&format!("  • {} - {}\n", command.name, description))
            }
            None => out.push_str(&format!("  • {}\n", command.name)),
        }
    }
    out.push_str(&format!("Source files: {}\n", domain.source_files.len()));
    for source in &domain.source_files {
        out.push_str(&format!("  • {}\n", source.display()));
    }
    out
}

/// Machine-readable form of an analysis
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub total_commands: usize,
    pub domain_count: usize,
    pub files_scanned: usize,
    pub domains: &'a BTreeMap<String, ProblemDomain>,
    pub failures: &'a [FileFailure],
}

impl<'a> AnalysisReport<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            total_commands: analysis.total_commands(),
            domain_count: analysis.domains.len(),
            files_scanned: analysis.files_scanned,
            domains: &analysis.domains,
            failures: &analysis.failures,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
