use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const CONFIG_USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            let mut rows = context.config.entries();
            rows.push(("file", context.config_manager.path().display().to_string()));
            output::two_column(&rows);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let mut updated = context.config.clone();
            updated.set(key, &value.join(" "))?;
            context.update_config(updated)?;
            cli_io::print_success(format!("Updated `{}`.", key));
            Ok(())
        }
        _ => Err(CommandError::usage(CONFIG_USAGE)),
    }
}
