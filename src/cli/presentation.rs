//! CLI presentation: text and json formatters per command family.

mod completion;
mod report;
mod sets;
mod shared;

pub use completion::{format_completion_json, format_completion_text};
pub use report::{format_report_json, format_report_text};
pub use sets::{
    format_set_detail_json, format_set_detail_text, format_set_list_json, format_set_list_text,
};
