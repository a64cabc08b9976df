use crate::cli::output::current_preferences;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::dashboard::{CategoryTable, ColumnHeader, NetWorthCard, SortDirection, SortKey};

pub const MISSING_INSTITUTION: &str = "—";
const NAME_MAX_WIDTH: usize = 32;

/// Header label with the sort indicator on the active column.
pub fn header_label(column: &ColumnHeader) -> String {
    let plain = current_preferences().plain_mode;
    match column.sorted {
        Some(direction) => {
            let arrow = match (direction, plain) {
                (SortDirection::Asc, false) => "▲",
                (SortDirection::Desc, false) => "▼",
                (SortDirection::Asc, true) => "^",
                (SortDirection::Desc, true) => "v",
            };
            format!("{} {}", column.label, arrow)
        }
        None => column.label.to_string(),
    }
}

pub fn render_category_table(table: &CategoryTable) -> String {
    let columns = table
        .columns
        .iter()
        .map(|column| {
            let label = header_label(column);
            match column.key {
                SortKey::Name => TableColumn::left(label).max_width(NAME_MAX_WIDTH),
                SortKey::Subtype | SortKey::Institution => TableColumn::left(label),
                SortKey::Balance | SortKey::Percent => TableColumn::right(label),
            }
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.subtype.to_string(),
                row.institution
                    .clone()
                    .unwrap_or_else(|| MISSING_INSTITUTION.to_string()),
                row.balance_text.clone(),
                row.percent.clone(),
            ]
        })
        .collect();

    let mut rendered = Table::new(columns, rows).render();
    if table.is_empty() {
        rendered.push_str("\n(no accounts)");
    }
    rendered
}

/// Summary card lines below the `Net Worth` title.
pub fn render_card_lines(card: &NetWorthCard) -> Vec<String> {
    let mut lines = vec![
        card.as_of.clone(),
        format!("{:<8}{}", "Total", card.total_text),
    ];
    lines.extend(
        card.categories
            .iter()
            .map(|total| format!("{:<8}{}", total.label, total.text)),
    );
    lines
}
