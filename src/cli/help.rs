use crate::cli::output::{self, section as output_section};
use crate::cli::registry::{CommandEntry, CommandGroup, CommandRegistry};

const NAME_WIDTH: usize = 12;

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for group in CommandGroup::ALL {
        let mut entries = registry.in_group(group).peekable();
        if entries.peek().is_none() {
            continue;
        }
        output::info(group.title());
        for entry in entries {
            output::info(format!(
                "  {:<width$} {}",
                entry.name,
                entry.description,
                width = NAME_WIDTH
            ));
        }
    }
    output::hint("Use `help <command>` for usage; Tab completes names and arguments.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    output::info(format!("  Description: {}", entry.description));
    output::info(format!("  Usage: {}", entry.usage));
    if !entry.aliases.is_empty() {
        output::info(format!("  Aliases: {}", entry.aliases.join(", ")));
    }
}
