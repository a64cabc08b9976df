use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io::print_field;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "version",
            CommandGroup::Session,
            "Show build metadata",
            "version",
            cmd_version,
        ),
        CommandEntry::new(
            "help",
            CommandGroup::Session,
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new(
            "exit",
            CommandGroup::Session,
            "Leave the shell",
            "exit",
            cmd_exit,
        )
        .with_aliases(&["quit", "q"]),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("Net Worth Dashboard {}", meta.version));
    print_field("Build", meta.summary());
    print_field("Built at", meta.timestamp);
    print_field("Target", meta.target);
    print_field("Profile", meta.profile);
    print_field("Rustc", meta.rustc);
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(name) = args.first() else {
        help::print_overview(&context.registry);
        return Ok(());
    };
    match context.command(&name.to_lowercase()) {
        Some(entry) => help::print_command(entry),
        None => context.suggest_command(name),
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
