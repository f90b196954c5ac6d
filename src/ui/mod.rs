//! Output helpers for consistent CLI formatting

mod output;

pub use output::{key_value, print_json, step_info, step_ok, step_warn};
