//! Command dispatch and shell context helpers.

use std::{io, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::{
    config::{ConfigError, ConfigManager},
    core::{
        utils::{app_data_dir, config_file_in, data_dir_override, resolve_data_dir},
        DashboardError, Repository,
    },
    dashboard::{DashboardView, SnapshotSelection, TableSorts},
    domain::AccountType,
    storage::JsonDataSource,
};

pub use crate::core::errors::CliError;

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Largest edit distance still offered as a suggestion.
const SUGGESTION_DISTANCE: usize = 3;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_paths(mode, app_data_dir(), data_dir_override())
    }

    /// Builds a session rooted at `home`, where preferences are stored.
    /// `data_override` wins over the configured data directory.
    pub fn with_paths(
        mode: CliMode,
        home: PathBuf,
        data_override: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::new(config_file_in(&home));
        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        let data_dir = resolve_data_dir(
            data_override.as_deref(),
            config.data_dir.as_deref(),
            &home,
        );
        tracing::info!(data_dir = %data_dir.display(), "data source resolved");
        let repository = Repository::new(Box::new(JsonDataSource::new(data_dir.clone())));

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            home,
            data_dir,
            data_override,
            config_manager,
            config,
            repository,
            selection: SnapshotSelection::Latest,
            sorts: TableSorts::default(),
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Every command word, aliases included, with the usage line it maps to.
    pub(crate) fn command_usages(&self) -> Vec<(&'static str, &'static str)> {
        self.registry
            .list()
            .iter()
            .flat_map(|entry| {
                std::iter::once(entry.name)
                    .chain(entry.aliases.iter().copied())
                    .map(move |word| (word, entry.usage))
            })
            .collect()
    }

    pub(crate) fn prompt(&self) -> String {
        let marker = if self.config.plain_mode() { ">" } else { "❯" };
        match &self.selection {
            SnapshotSelection::Latest => format!("networth {} ", marker),
            SnapshotSelection::Id(id) => format!("networth [{}] {} ", id, marker),
        }
    }

    /// Derives a fresh view from the data source with the session's sort state.
    pub(crate) fn load_view(&self) -> Result<DashboardView, CommandError> {
        DashboardView::load(&self.repository, &self.selection, &self.sorts)
            .map_err(CommandError::from)
    }

    /// Remounts the dashboard: default sort on every table.
    pub(crate) fn reset_view_state(&mut self) {
        self.sorts.reset();
    }

    /// Re-resolves the data directory after a configuration change.
    pub(crate) fn reload_data_source(&mut self) {
        self.data_dir = resolve_data_dir(
            self.data_override.as_deref(),
            self.config.data_dir.as_deref(),
            &self.home,
        );
        self.repository = Repository::new(Box::new(JsonDataSource::new(self.data_dir.clone())));
        self.selection = SnapshotSelection::Latest;
        self.reset_view_state();
        tracing::info!(data_dir = %self.data_dir.display(), "data source reloaded");
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        cli_io::apply_config(&self.config);
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            tracing::debug!(command, ?args, "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = closest_match(self.registry.words(), input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(DashboardError::SnapshotNotFound(id)) => {
                self.print_error(&format!("Snapshot `{}` not found.", id));
                self.print_hint("Run `snapshots` to list the available ids.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        output::error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        output::hint(message);
    }
}

/// Closest candidate within the suggestion distance, if any.
pub(crate) fn closest_match<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    input: &str,
) -> Option<&'a str> {
    let needle = input.to_lowercase();
    candidates
        .into_iter()
        .map(|candidate| (levenshtein(candidate, &needle), candidate))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, candidate)| candidate)
}

/// Parses a category argument, suggesting the closest name on failure.
pub(crate) fn parse_category(input: &str) -> Result<AccountType, CommandError> {
    AccountType::parse(input).ok_or_else(|| {
        let names = ["cash", "assets", "debts"];
        let mut message = format!("Unknown category `{}` (use cash, assets or debts).", input);
        if let Some(best) = closest_match(names, input) {
            message.push_str(&format!(" Did you mean `{}`?", best));
        }
        CommandError::InvalidArguments(message)
    })
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] DashboardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Core(inner) => CommandError::Core(inner),
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            CommandError::InvalidArguments(message) => CliError::Input(message),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(home: PathBuf, lines: &[&str]) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_paths(CliMode::Script, home, None)?;
    for line in lines {
        match app.process_line(line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(app)
}
