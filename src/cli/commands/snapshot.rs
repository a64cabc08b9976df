use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io::print_field;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::core::services::{CheckService, HistoryService};
use crate::core::DashboardError;
use crate::currency::format_currency;
use crate::dashboard::SnapshotSelection;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "snapshots",
            CommandGroup::Data,
            "List snapshots, newest first",
            "snapshots",
            cmd_snapshots,
        )
        .with_aliases(&["history"]),
        CommandEntry::new(
            "snapshot",
            CommandGroup::Data,
            "Choose the snapshot the dashboard renders",
            "snapshot <id|latest>",
            cmd_snapshot,
        ),
        CommandEntry::new(
            "settings",
            CommandGroup::Data,
            "Show the reporting currency",
            "settings",
            cmd_settings,
        ),
        CommandEntry::new(
            "check",
            CommandGroup::Data,
            "Report anomalies in the data files",
            "check",
            cmd_check,
        ),
    ]
}

fn cmd_snapshots(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let repository = &context.repository;
    let snapshots = repository.snapshots()?;
    if snapshots.is_empty() {
        output::info("No snapshots found.");
        return Ok(());
    }
    let accounts = repository.accounts()?;
    let settings = repository.settings()?;

    let selected = match &context.selection {
        SnapshotSelection::Id(id) => Some(id.as_str()),
        SnapshotSelection::Latest => None,
    };
    let rows = HistoryService::summaries(&snapshots, &accounts)
        .into_iter()
        .enumerate()
        .map(|(idx, summary)| {
            let active = match selected {
                Some(id) => id == summary.id,
                None => idx == 0,
            };
            vec![
                if active { "*".to_string() } else { String::new() },
                summary.id,
                summary.date,
                summary.balance_count.to_string(),
                format_currency(summary.breakdown.total, &settings.currency),
            ]
        })
        .collect();

    let table = Table::new(
        vec![
            TableColumn::left(""),
            TableColumn::left("Id"),
            TableColumn::left("Date"),
            TableColumn::right("Balances"),
            TableColumn::right("Net Worth"),
        ],
        rows,
    );
    output_section("Snapshots");
    output::raw(table.render());
    Ok(())
}

fn cmd_snapshot(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [reference] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: snapshot <id|latest>".into(),
        ));
    };
    let selection = SnapshotSelection::parse(reference);
    if let SnapshotSelection::Id(id) = &selection {
        if context.repository.snapshot(id)?.is_none() {
            return Err(DashboardError::SnapshotNotFound(id.clone()).into());
        }
    }

    context.selection = selection;
    context.reset_view_state();
    match &context.selection {
        SnapshotSelection::Latest => output::success("Showing the latest snapshot."),
        SnapshotSelection::Id(id) => output::success(format!("Showing snapshot `{}`.", id)),
    }
    Ok(())
}

fn cmd_settings(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let settings = context.repository.settings()?;
    let currency = &settings.currency;
    output_section("Settings");
    print_field("Currency", &currency.code);
    print_field("Symbol", &currency.symbol);
    print_field("Locale", &currency.locale);
    print_field("Sample", format_currency(-1234.5, currency));
    print_field("Data source", context.repository.describe());
    Ok(())
}

fn cmd_check(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let accounts = context.repository.accounts()?;
    let snapshots = context.repository.snapshots()?;
    context.repository.settings()?;

    let warnings = CheckService::warnings(&accounts, &snapshots);
    if warnings.is_empty() {
        output::success(format!(
            "{} accounts and {} snapshots look consistent.",
            accounts.len(),
            snapshots.len()
        ));
    } else {
        for warning in &warnings {
            output::warning(warning);
        }
        output::info(format!("{} issue(s) found.", warnings.len()));
    }
    Ok(())
}
