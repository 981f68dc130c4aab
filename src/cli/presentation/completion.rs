//! Completion presentation.

use crate::cli::presentation::shared::{format_flag, format_section_heading};
use crate::cli::route::CompletionOutcome;
use crate::error::ScoringError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_completion_text(outcome: &CompletionOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("Marked complete: {}\n\n", outcome.items.join(", ")));

    out.push_str(&format!("{}\n\n", format_section_heading("Transitions")));
    if outcome.transitions.is_empty() {
        out.push_str("  No set changed state.\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Set", "Type", "Completed", "Passed"]);
        for transition in &outcome.transitions {
            table.add_row(vec![
                transition.set_id.clone(),
                transition.set_type.clone(),
                format_flag(transition.completed).to_string(),
                format_flag(transition.passed).to_string(),
            ]);
        }
        out.push_str(&format!("{}\n", table));
    }

    if !outcome.events.is_empty() {
        out.push_str(&format!("\n{}\n\n", format_section_heading("Events")));
        for event in &outcome.events {
            out.push_str(&format!("  {} {} ({})\n", event.ts, event.event_type, event.set_id));
        }
    }

    out.push_str(&format!("\nCourse complete: {}", format_flag(outcome.is_complete)));
    out
}

pub fn format_completion_json(outcome: &CompletionOutcome) -> Result<String, ScoringError> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
