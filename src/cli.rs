//! CLI domain: parse, route, output, and presentation only.
//! No scoring logic; a single route table dispatches to the engine.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_completion_json, format_completion_text, format_report_json, format_report_text,
    format_set_detail_json, format_set_detail_text, format_set_list_json, format_set_list_text,
};
pub use route::{CompletionOutcome, RunContext, Session, SetDetail};
