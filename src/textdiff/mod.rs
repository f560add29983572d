mod diff;
mod extract;

pub use diff::{short_context_snippets, text_diff_stats, DiffStats};
pub use extract::extract_visible_text;
