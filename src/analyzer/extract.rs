//! Line-level extraction of command declarations and fenced code blocks.

use super::types::CommandMention;
use crate::error::Result;
use anyhow::Context;
use regex::Regex;
use std::path::Path;

/// The only recognized command declaration: a list item such as
/// ``- `grep` - search text in files``.
pub const LIST_ITEM_PATTERN: &str = r"^\s*-\s*`([a-z][a-z0-9\-]+)`\s*-\s*(.+)$";

/// Delimiter that opens and closes a fenced code block
pub const FENCE: &str = "```";

/// Compiled matcher for command list items.
#[derive(Debug, Clone)]
pub struct MentionPattern {
    list_item: Regex,
}

impl MentionPattern {
    pub fn new() -> Result<Self> {
        let list_item =
            Regex::new(LIST_ITEM_PATTERN).context("Failed to compile command list-item regex")?;
        Ok(Self { list_item })
    }

    /// Extract one mention per matching line, in line order.
    ///
    /// Inline backticked commands elsewhere in the text are ignored.
    pub fn extract(&self, content: &str, source: &Path) -> Vec<CommandMention> {
        content
            .split('\n')
            .filter_map(|line| self.list_item.captures(line))
            .map(|caps| CommandMention::new(&caps[1], &caps[2], source))
            .collect()
    }
}

/// Collect the bodies of fenced code blocks.
///
/// A line whose trimmed text starts with the fence toggles the block state;
/// language tags are ignored. Blocks with no lines and blocks left open at
/// the end of the document produce nothing.
pub fn extract_code_examples(content: &str) -> Vec<String> {
    let mut examples = Vec::new();
    let mut in_block = false;
    let mut current: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        if line.trim().starts_with(FENCE) {
            if in_block && !current.is_empty() {
                examples.push(current.join("\n"));
                current.clear();
            }
            in_block = !in_block;
        } else if in_block {
            current.push(line);
        }
    }

    examples
}
