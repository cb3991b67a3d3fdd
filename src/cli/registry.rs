//! The table of shell commands, held in display order.

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// A shell command with its help text.
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Commands in the order `help` lists them. Names are matched exactly.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Sorts `entries` by their position in `order`; names missing from
    /// `order` keep their relative order at the end. Later duplicates of a
    /// name are dropped.
    pub fn ordered(entries: Vec<CommandEntry>, order: &[&str]) -> Self {
        let mut kept: Vec<CommandEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if kept.iter().all(|existing| existing.name != entry.name) {
                kept.push(entry);
            }
        }
        kept.sort_by_key(|entry| {
            order
                .iter()
                .position(|name| *name == entry.name)
                .unwrap_or(order.len())
        });
        Self { entries: kept }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn orders_known_names_first_and_drops_duplicates() {
        let registry = CommandRegistry::ordered(
            vec![
                CommandEntry::new("zeta", "", "", noop),
                CommandEntry::new("list", "", "", noop),
                CommandEntry::new("add", "first", "", noop),
                CommandEntry::new("add", "second", "", noop),
            ],
            &["add", "list"],
        );
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["add", "list", "zeta"]);
        assert_eq!(registry.get("add").map(|e| e.description), Some("first"));
        assert!(registry.get("ADD").is_none());
    }
}
