//! The validated, immutable command table.

use rand::seq::SliceRandom;

use crate::config::EmojiEntry;
use crate::error::ConfigError;

/// Lookup table from command keyword to source file, fixed after startup.
///
/// Construction rejects duplicate and empty keywords, so `lookup` never has
/// to disambiguate.
#[derive(Debug, Clone)]
pub struct CommandTable {
    entries: Vec<EmojiEntry>,
}

impl CommandTable {
    pub fn new(entries: Vec<EmojiEntry>) -> Result<Self, ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if entry.command.is_empty() {
                return Err(ConfigError::EmptyCommand);
            }
            if !seen.insert(entry.command.as_str()) {
                return Err(ConfigError::DuplicateCommand {
                    command: entry.command.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Exact-match lookup in table order.
    pub fn lookup(&self, keyword: &str) -> Option<&EmojiEntry> {
        self.entries.iter().find(|e| e.command == keyword)
    }

    /// Command keywords in table order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.command.as_str())
    }

    /// Newline-joined keyword list, in table order.
    pub fn overview(&self) -> String {
        self.commands().collect::<Vec<_>>().join("\n")
    }

    /// One entry uniformly at random, each command equally likely no matter
    /// how many URLs its file holds.
    pub fn pick_random(&self) -> Option<&EmojiEntry> {
        self.entries.choose(&mut rand::thread_rng())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
