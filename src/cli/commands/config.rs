use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io::print_field;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        CommandGroup::Session,
        "View and change CLI preferences",
        "config [show|set <data_dir|theme|plain_output|high_contrast|color> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    Config::KEYS.join("|")
                )));
            }
            let key = args[1].to_lowercase();
            let value = args[2..].join(" ");
            context.config.set(&key, value.trim())?;
            context.persist_config()?;
            if key == "data_dir" {
                context.reload_data_source();
            }
            output::success(format!("`{}` updated.", key));
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}` (use show or set)",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) {
    output_section("Configuration");
    for (key, value) in context.config.entries() {
        print_field(key, value);
    }
    print_field("data source", context.repository.describe());
    print_field(
        "config file",
        context.config_manager.config_path().display(),
    );
}
