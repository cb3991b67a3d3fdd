pub mod config;
pub mod expense;
pub mod report;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "add",
    "list",
    "summary",
    "advice",
    "categories",
    "config",
    "help",
    "version",
    "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(expense::definitions());
    commands.extend(report::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

/// Every shell command, in display order.
pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::ordered(all_entries(), ROOT_COMMAND_ORDER)
}
