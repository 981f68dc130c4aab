//! Report presentation.

use crate::cli::presentation::shared::{
    format_flag, format_scaled, format_section_heading, summary_table,
};
use crate::error::ScoringError;
use crate::report::ScoringReport;

pub fn format_report_text(report: &ScoringReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Course")));
    out.push_str(&format!("  Complete: {}\n", format_flag(report.is_complete)));
    out.push_str(&format!(
        "  Score: {} ({} to {})\n",
        report.score, report.min_score, report.max_score
    ));
    out.push_str(&format!("  Scaled: {}\n\n", format_scaled(report.scaled_score)));

    out.push_str(&format!("{}\n\n", format_section_heading("Sets")));
    if report.sets.is_empty() {
        out.push_str("  No sets registered.\n");
    } else {
        out.push_str(&format!("{}\n", summary_table(&report.sets)));
    }
    out
}

pub fn format_report_json(report: &ScoringReport) -> Result<String, ScoringError> {
    Ok(serde_json::to_string_pretty(report)?)
}
