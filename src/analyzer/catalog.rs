//! Name-keyed, insertion-ordered store of command mentions.

use super::extract::{extract_code_examples, MentionPattern};
use super::types::{CommandMention, ProblemDomain};
use crate::domains;
use crate::error::Result;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Accumulates command mentions across documents.
///
/// Commands keep the order they were first discovered in, which becomes
/// the order of each domain's command list.
#[derive(Debug, Clone)]
pub struct CommandCatalog {
    pattern: MentionPattern,
    commands: Vec<CommandMention>,
    index: HashMap<String, usize>,
}

impl CommandCatalog {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: MentionPattern::new()?,
            commands: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Fold one document into the catalog.
    ///
    /// Declared commands are merged first. Then every known command whose
    /// name occurs anywhere in the document picks up each of the
    /// document's code blocks that contains the name. Both checks are plain
    /// substring tests, so `ls` also matches `files`.
    pub fn ingest(&mut self, content: &str, source: &Path) {
        for mention in self.pattern.extract(content, source) {
            self.merge(mention);
        }

        let examples = extract_code_examples(content);
        if examples.is_empty() {
            return;
        }

        for command in &mut self.commands {
            if !content.contains(command.name.as_str()) {
                continue;
            }
            command.examples.extend(
                examples
                    .iter()
                    .filter(|ex| ex.contains(command.name.as_str()))
                    .cloned(),
            );
        }
    }

    /// Insert a new command or merge into the existing record of that name.
    pub fn merge(&mut self, mention: CommandMention) {
        match self.index.get(&mention.name) {
            Some(&pos) => self.commands[pos].absorb(mention),
            None => {
                self.index.insert(mention.name.clone(), self.commands.len());
                self.commands.push(mention);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandMention> {
        self.index.get(name).map(|&pos| &self.commands[pos])
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Group every command into its problem domain.
    ///
    /// Each command lands in exactly one domain, once.
    pub fn into_domains(self) -> BTreeMap<String, ProblemDomain> {
        let mut grouped: BTreeMap<String, ProblemDomain> = BTreeMap::new();
        for command in self.commands {
            let key = domains::domain_for(&command.name);
            grouped
                .entry(key.to_string())
                .or_insert_with(|| ProblemDomain::new(key))
                .add_command(command);
        }
        grouped
    }
}
