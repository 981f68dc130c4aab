//! Set list and set detail presentation.

use crate::cli::presentation::shared::{
    format_flag, format_scaled, format_section_heading, summary_table,
};
use crate::cli::route::SetDetail;
use crate::error::ScoringError;
use crate::report::SetSummary;

pub fn format_set_list_text(rows: &[SetSummary]) -> String {
    if rows.is_empty() {
        return "No matching sets.".to_string();
    }
    summary_table(rows).to_string()
}

pub fn format_set_list_json(rows: &[SetSummary]) -> Result<String, ScoringError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub fn format_set_detail_text(detail: &SetDetail) -> String {
    let set = &detail.set;
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Set {}", set.path))
    ));
    out.push_str(&format!("  Type: {}\n", set.set_type));
    if !set.title.is_empty() {
        out.push_str(&format!("  Title: {}\n", set.title));
    }
    out.push_str(&format!("  Complete: {}\n", format_flag(set.is_complete)));
    out.push_str(&format!("  Passed: {}\n", format_flag(set.is_passed)));
    out.push_str(&format!(
        "  Score: {} ({} to {})\n",
        set.score, set.min_score, set.max_score
    ));
    out.push_str(&format!("  Scaled: {}\n", format_scaled(set.scaled_score)));
    match &set.models {
        Some(models) if models.is_empty() => out.push_str("  Items: none\n"),
        Some(models) => out.push_str(&format!("  Items: {}\n", models.join(", "))),
        None => out.push_str("  Items: n/a\n"),
    }

    if !detail.subsets.is_empty() {
        out.push_str(&format!("\n{}\n\n", format_section_heading("Subsets")));
        out.push_str(&format!("{}\n", summary_table(&detail.subsets)));
    }
    out
}

pub fn format_set_detail_json(detail: &SetDetail) -> Result<String, ScoringError> {
    Ok(serde_json::to_string_pretty(detail)?)
}
