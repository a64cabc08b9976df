use std::io::{self, Write};

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};

use crate::cli::core::{
    closest_match, parse_category, CliMode, CommandError, CommandResult, ShellContext,
};
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::cli::ui::dashboard_renderer::{render_card_lines, render_category_table};
use crate::cli::ui::navigation::{browse_action, read_nav_key, BrowseAction, RawModeGuard};
use crate::dashboard::{CategoryTable, DashboardView, SortKey};
use crate::domain::AccountType;

const JSON_FLAG: &str = "--json";
const BROWSE_HINT: &str = "1-5 sort by column  ←/→ switch table  r reset  q/Esc quit";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            CommandGroup::Dashboard,
            "Render the net-worth summary and category tables",
            "dashboard [--json]",
            cmd_dashboard,
        ),
        CommandEntry::new(
            "table",
            CommandGroup::Dashboard,
            "Render one category table",
            "table <cash|assets|debts> [--json]",
            cmd_table,
        ),
        CommandEntry::new(
            "sort",
            CommandGroup::Dashboard,
            "Click a column header of a category table",
            "sort <cash|assets|debts> <name|subtype|institution|balance|percent> [--json]",
            cmd_sort,
        ),
        CommandEntry::new(
            "reset",
            CommandGroup::Dashboard,
            "Restore the default sort on every table",
            "reset",
            cmd_reset,
        ),
        CommandEntry::new(
            "browse",
            CommandGroup::Dashboard,
            "Browse the category tables with the keyboard",
            "browse",
            cmd_browse,
        ),
    ]
}

/// Splits the `--json` flag from positional arguments.
fn split_flags<'a>(args: &[&'a str]) -> (Vec<&'a str>, bool) {
    let json = args.iter().any(|arg| arg.eq_ignore_ascii_case(JSON_FLAG));
    let positional = args
        .iter()
        .copied()
        .filter(|arg| !arg.eq_ignore_ascii_case(JSON_FLAG))
        .collect();
    (positional, json)
}

fn parse_column(input: &str) -> Result<SortKey, CommandError> {
    SortKey::parse(input).ok_or_else(|| {
        let codes = SortKey::ALL.map(SortKey::code);
        let mut message = format!("Unknown column `{}` (use {}).", input, codes.join(", "));
        if let Some(best) = closest_match(codes, input) {
            message.push_str(&format!(" Did you mean `{}`?", best));
        }
        CommandError::InvalidArguments(message)
    })
}

fn cmd_dashboard(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, json) = split_flags(args);
    if !positional.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: dashboard [--json]".into(),
        ));
    }
    let view = context.load_view()?;
    if json {
        output::raw(serde_json::to_string(&view)?);
    } else {
        print_view(&view);
    }
    Ok(())
}

pub(crate) fn print_view(view: &DashboardView) {
    match view {
        DashboardView::Empty { message } => output::info(message),
        DashboardView::Ready { card, tables } => {
            output_section(card.title);
            for line in render_card_lines(card) {
                output::raw(line);
            }
            for table in tables {
                print_table(table);
            }
        }
    }
}

fn print_table(table: &CategoryTable) {
    output_section(table.heading());
    output::raw(render_category_table(table));
}

fn show_table(context: &ShellContext, kind: AccountType, json: bool) -> CommandResult {
    let view = context.load_view()?;
    match view.table(kind) {
        Some(table) if json => output::raw(serde_json::to_string(table)?),
        Some(table) => print_table(table),
        None if json => output::raw(serde_json::to_string(&view)?),
        None => print_view(&view),
    }
    Ok(())
}

fn cmd_table(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, json) = split_flags(args);
    let [category] = positional.as_slice() else {
        return Err(CommandError::InvalidArguments(
            "usage: table <cash|assets|debts> [--json]".into(),
        ));
    };
    let kind = parse_category(category)?;
    show_table(context, kind, json)
}

fn cmd_sort(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, json) = split_flags(args);
    let [category, column] = positional.as_slice() else {
        return Err(CommandError::InvalidArguments(
            "usage: sort <cash|assets|debts> <column> [--json]".into(),
        ));
    };
    let kind = parse_category(category)?;
    let key = parse_column(column)?;
    let state = context.sorts.click(kind, key);
    tracing::debug!(category = %kind, key = %state.key, direction = state.direction.code(), "sort changed");
    show_table(context, kind, json)
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.reset_view_state();
    output::success("Sort order reset to balance, descending.");
    Ok(())
}

fn cmd_browse(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.mode() != CliMode::Interactive {
        output::warning("`browse` needs an interactive terminal; use `sort` instead.");
        return Ok(());
    }

    let view = context.load_view()?;
    if view.is_empty() {
        print_view(&view);
        return Ok(());
    }

    let _guard = RawModeGuard::activate()?;
    let mut stdout = io::stdout();
    let mut index = 0usize;
    loop {
        let view = context.load_view()?;
        let tables = view.tables();
        let Some(table) = tables.get(index) else {
            break;
        };
        draw_table(&mut stdout, table)?;

        match browse_action(read_nav_key()?) {
            Some(BrowseAction::PreviousTable) => {
                index = (index + tables.len() - 1) % tables.len();
            }
            Some(BrowseAction::NextTable) => index = (index + 1) % tables.len(),
            Some(BrowseAction::ClickHeader(key)) => {
                context.sorts.click(table.category, key);
            }
            Some(BrowseAction::Reset) => context.reset_view_state(),
            Some(BrowseAction::Quit) => break,
            None => {}
        }
    }
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn draw_table(stdout: &mut io::Stdout, table: &CategoryTable) -> io::Result<()> {
    stdout.execute(terminal::Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    write!(stdout, "=== {} ===\r\n", table.heading())?;
    for line in render_category_table(table).lines() {
        write!(stdout, "{}\r\n", line)?;
    }
    write!(stdout, "\r\n{}\r\n", BROWSE_HINT)?;
    stdout.flush()
}
