use std::{
    borrow::Cow,
    collections::HashMap,
    fmt,
    io::{self, BufRead},
};

use colored::Colorize;

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output::{current_preferences, info as output_info};
use crate::config::Config;
use crate::dashboard::SortKey;

/// Environment variable switching the shell to line-per-command stdin input.
pub const SCRIPT_ENV: &str = "NETWORTH_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

/// Runs one command given as process arguments and returns its outcome.
pub fn run_command_line(args: &[String]) -> Result<(), CliError> {
    let mut context = ShellContext::new(CliMode::Script)?;
    let Some((raw, rest)) = args.split_first() else {
        return Ok(());
    };
    let command = raw.to_lowercase();
    if context.command(&command).is_none() {
        context.suggest_command(raw);
        return Err(CliError::Input(format!("unknown command `{}`", raw)));
    }
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.dispatch(&command, raw, &rest)?;
    Ok(())
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.command_usages());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output_info("Net Worth Dashboard. Type `help` for commands, `dashboard` to start.");
    loop {
        if !context.running {
            break;
        }
        let prompt = context.prompt();
        let line = editor.readline(&prompt);

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    match context.process_line(line) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

/// Completion, usage hints and quote validation for the interactive prompt.
struct CommandHelper {
    commands: Vec<String>,
    usages: HashMap<String, &'static str>,
}

impl Helper for CommandHelper {}

impl CommandHelper {
    fn new(words: Vec<(&'static str, &'static str)>) -> Self {
        let usages: HashMap<String, &'static str> = words
            .into_iter()
            .map(|(word, usage)| (word.to_ascii_lowercase(), usage))
            .collect();
        let mut commands: Vec<String> = usages.keys().cloned().collect();
        commands.sort();
        Self { commands, usages }
    }

    /// Words valid at the cursor: command names first, then category and
    /// column arguments of `table` and `sort`.
    fn words_for(&self, previous: &[&str]) -> Vec<String> {
        const CATEGORIES: [&str; 3] = ["cash", "assets", "debts"];
        match previous {
            [] => self.commands.clone(),
            [command] if matches!(*command, "table" | "sort") => {
                CATEGORIES.iter().map(|word| word.to_string()).collect()
            }
            ["sort", _] => SortKey::ALL
                .iter()
                .map(|key| key.code().to_string())
                .collect(),
            ["snapshot"] => vec!["latest".to_string()],
            ["config"] => vec!["show".to_string(), "set".to_string()],
            ["config", "set"] => Config::KEYS.iter().map(|key| key.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    fn candidates(&self, prefix: &str) -> (usize, Vec<String>) {
        let start = prefix
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(idx, c)| idx + c.len_utf8());
        let lowered = prefix[..start].to_ascii_lowercase();
        let previous: Vec<&str> = lowered.split_whitespace().collect();
        let needle = prefix[start..].to_ascii_lowercase();
        let words = self
            .words_for(&previous)
            .into_iter()
            .filter(|word| word.starts_with(&needle))
            .collect();
        (start, words)
    }

    /// Argument part of the usage once a known command and a space are typed.
    fn usage_hint(&self, line: &str) -> Option<String> {
        let command = line.strip_suffix(' ')?.trim_start();
        if command.is_empty() || command.contains(char::is_whitespace) {
            return None;
        }
        let usage = self.usages.get(&command.to_ascii_lowercase())?;
        usage
            .split_once(' ')
            .map(|(_, arguments)| arguments.to_string())
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let candidates = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.usage_hint(line)
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        let prefs = current_preferences();
        if prefs.color_enabled && !prefs.plain_mode {
            Cow::Owned(hint.dimmed().to_string())
        } else {
            Cow::Borrowed(hint)
        }
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(match parse_command_line(ctx.input()) {
            Ok(_) => ValidationResult::Valid(None),
            Err(err) => ValidationResult::Invalid(Some(format!("  ({})", err))),
        })
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
