use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;

const FIELD_WIDTH: usize = 14;

/// Prints an indented `label : value` line, aligned with its neighbours.
pub fn print_field(label: &str, value: impl fmt::Display) {
    output::info(format!("  {:<width$}: {}", label, value, width = FIELD_WIDTH));
}

/// Pushes the display-related parts of `config` into the output preferences.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences::from_config(config));
}

/// Yes/no prompt on the terminal.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
