//! Line sources for the shell: a line editor with history and completion,
//! or plain stdin when scripted.

use std::io::{self, BufRead, Lines, StdinLock};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    history::DefaultHistory,
    Cmd, Context, Editor, Helper, Highlighter, Hinter, KeyEvent, Validator,
};

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;
use crate::domain::Category;

const PROMPT: &str = "expenses> ";
const SCRIPT_ENV: &str = "EXPENSE_TRACKER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    let mut source = match mode {
        CliMode::Interactive => {
            output::info("Expense Tracker. Type `help` to list commands.");
            LineSource::editor(&context)?
        }
        CliMode::Script => LineSource::stdin(),
    };

    let result = drive(&mut context, &mut source);
    tracing::debug!("{}", context.status());
    result
}

enum Input {
    Line(String),
    Interrupted,
    Closed,
}

enum LineSource {
    Editor(Box<Editor<CompletionHelper, DefaultHistory>>),
    Stdin(Lines<StdinLock<'static>>),
}

impl LineSource {
    fn editor(context: &ShellContext) -> Result<Self, CliError> {
        let mut editor = Editor::<CompletionHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(CompletionHelper::new(context.command_names())));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(LineSource::Editor(Box::new(editor)))
    }

    fn stdin() -> Self {
        LineSource::Stdin(io::stdin().lock().lines())
    }

    fn next_input(&mut self) -> Result<Input, CliError> {
        match self {
            LineSource::Editor(editor) => match editor.readline(PROMPT) {
                Ok(line) => {
                    let entry = line.trim();
                    if !entry.is_empty() {
                        editor.add_history_entry(entry).ok();
                    }
                    Ok(Input::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
                Err(ReadlineError::Eof) => Ok(Input::Closed),
                Err(err) => Err(err.into()),
            },
            LineSource::Stdin(lines) => match lines.next() {
                Some(line) => Ok(Input::Line(line?)),
                None => Ok(Input::Closed),
            },
        }
    }
}

fn drive(context: &mut ShellContext, source: &mut LineSource) -> Result<(), CliError> {
    while context.running {
        match source.next_input()? {
            Input::Line(line) => match context.process_line(&line) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => context.report_error(err),
            },
            Input::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Input::Closed => {
                if context.mode == CliMode::Interactive {
                    output::info("Exiting shell.");
                }
                break;
            }
        }
    }
    Ok(())
}

/// Splits a line into words, honouring quotes and escapes.
pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, CommandError> {
    shell_words::split(input)
        .map_err(|err| CommandError::InvalidArguments(format!("Could not read line: {err}")))
}

/// Completes command names, then category labels after `add <amount>`.
#[derive(Helper, Hinter, Highlighter, Validator)]
struct CompletionHelper {
    commands: Vec<&'static str>,
}

impl CompletionHelper {
    fn new(mut commands: Vec<&'static str>) -> Self {
        commands.sort_unstable();
        Self { commands }
    }

    fn candidates(&self, previous: &[&str], needle: &str) -> Vec<String> {
        let needle = needle.to_ascii_lowercase();
        match previous {
            [] => self
                .commands
                .iter()
                .filter(|name| name.starts_with(&needle))
                .map(|name| name.to_string())
                .collect(),
            [command, _amount] if command.eq_ignore_ascii_case("add") => Category::ALL
                .iter()
                .map(Category::label)
                .filter(|label| label.to_ascii_lowercase().starts_with(&needle))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Completer for CompletionHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let typed = &line[..pos];
        let start = typed
            .rfind(char::is_whitespace)
            .map_or(0, |idx| idx + 1);
        let previous: Vec<&str> = typed[..start].split_whitespace().collect();

        let pairs = self
            .candidates(&previous, &typed[start..])
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CompletionHelper {
        CompletionHelper::new(vec!["summary", "advice", "list", "add"])
    }

    #[test]
    fn completes_command_names() {
        assert_eq!(helper().candidates(&[], "ad"), vec!["add", "advice"]);
        assert!(helper().candidates(&[], "zz").is_empty());
    }

    #[test]
    fn completes_categories_for_add() {
        assert_eq!(
            helper().candidates(&["add", "12"], "tr"),
            vec!["Transportation"]
        );
        assert_eq!(helper().candidates(&["add", "12"], "").len(), 3);
        assert!(helper().candidates(&["list", "x"], "").is_empty());
    }

    #[test]
    fn parse_respects_quotes() {
        let tokens = parse_command_line("add 5 food \"late lunch\"").unwrap();
        assert_eq!(tokens, vec!["add", "5", "food", "late lunch"]);
        assert!(matches!(
            parse_command_line("add \"unterminated"),
            Err(CommandError::InvalidArguments(_))
        ));
    }
}
