//! Shared presentation helpers: headings, number cells, summary tables.

use crate::report::SetSummary;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_scaled(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v))
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// One row per set: id, type, title, completion, pass, score, scaled score.
pub fn summary_table(rows: &[SetSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Id", "Type", "Title", "Complete", "Passed", "Score", "Scaled",
    ]);
    for row in rows {
        table.add_row(vec![
            row.path.clone(),
            row.set_type.clone(),
            row.title.clone(),
            format_flag(row.is_complete).to_string(),
            format_flag(row.is_passed).to_string(),
            format!("{} / {}", row.score, row.max_score),
            format_scaled(row.scaled_score),
        ]);
    }
    table
}
