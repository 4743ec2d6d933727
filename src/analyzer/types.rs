//! Records produced by analysis.

use crate::domains;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// A command-line tool mentioned in the source documents.
///
/// Identity is the command name: repeated mentions across documents are
/// merged into one record by [`CommandCatalog`](super::CommandCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMention {
    /// Command token, e.g. `grep`
    pub name: String,
    /// Trailing text of the declaring list item, if any
    pub description: Option<String>,
    /// Code snippets associated with the command, in discovery order
    pub examples: Vec<String>,
    /// Document the command was first declared in
    pub source_file: PathBuf,
}

impl CommandMention {
    /// Create a mention with no examples.
    ///
    /// A blank description is stored as `None`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        let description = description.into().trim().to_string();
        Self {
            name: name.into(),
            description: (!description.is_empty()).then_some(description),
            examples: Vec::new(),
            source_file: source_file.into(),
        }
    }

    /// Fold a later mention of the same command into this one.
    ///
    /// An existing description is never replaced; examples always accumulate.
    pub fn absorb(&mut self, other: CommandMention) {
        if self.description.is_none() && other.description.is_some() {
            self.description = other.description;
        }
        self.examples.extend(other.examples);
    }
}

/// A category of user intent grouping one or more commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDomain {
    /// Stable slug, also used as the guide directory name
    pub key: String,
    pub description: String,
    /// Commands in discovery order
    pub commands: Vec<CommandMention>,
    /// Documents that contributed commands
    pub source_files: BTreeSet<PathBuf>,
}

impl ProblemDomain {
    /// Create an empty domain described from the static table.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            description: domains::describe(&key),
            key,
            commands: Vec::new(),
            source_files: BTreeSet::new(),
        }
    }

    pub fn add_command(&mut self, command: CommandMention) {
        self.source_files.insert(command.source_file.clone());
        self.commands.push(command);
    }

    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_description_is_none() {
        let mention = CommandMention::new("ls", "   ", "a.md");
        assert_eq!(mention.description, None);
    }

    #[test]
    fn test_absorb_keeps_first_description() {
        let mut first = CommandMention::new("cd", "change directory", "a.md");
        first.absorb(CommandMention::new("cd", "move around", "b.md"));
        assert_eq!(first.description.as_deref(), Some("change directory"));
        assert_eq!(first.source_file, PathBuf::from("a.md"));
    }

    #[test]
    fn test_absorb_fills_missing_description() {
        let mut first = CommandMention::new("cd", "", "a.md");
        first.absorb(CommandMention::new("cd", "change directory", "b.md"));
        assert_eq!(first.description.as_deref(), Some("change directory"));
    }

    #[test]
    fn test_absorb_appends_examples_without_dedup() {
        let mut first = CommandMention::new("ls", "list", "a.md");
        first.examples.push("ls -la".into());
        let mut second = CommandMention::new("ls", "", "b.md");
        second.examples.push("ls -la".into());
        first.absorb(second);
        assert_eq!(first.examples, vec!["ls -la", "ls -la"]);
    }

    #[test]
    fn test_domain_tracks_sources() {
        let mut domain = ProblemDomain::new("text-processing");
        assert_eq!(
            domain.description,
            "Searching, filtering, and transforming text data"
        );
        domain.add_command(CommandMention::new("grep", "search", "b.md"));
        domain.add_command(CommandMention::new("sed", "edit", "a.md"));
        domain.add_command(CommandMention::new("awk", "fields", "b.md"));

        assert_eq!(domain.command_names().collect::<Vec<_>>(), ["grep", "sed", "awk"]);
        assert_eq!(domain.source_files.len(), 2);
        assert!(domain.source_files.contains(&PathBuf::from("a.md")));
    }
}
