mod client;
mod fallback;
mod prompt;

use serde::{Deserialize, Serialize};

pub use client::SummaryClient;
pub use fallback::local_fallback_summary;
pub use prompt::build_diff_prompt;

/// Hard bound on the summary handed back in a `ChangeResult`.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// Structured response expected from the summarization backend. The list
/// fields are optional extras; only a non-empty `summary_change` makes a
/// payload usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryPayload {
    #[serde(default)]
    pub summary_change: String,
    #[serde(default)]
    pub salient_points: Vec<String>,
    #[serde(default)]
    pub keyword_hits: Vec<String>,
}

/// Truncates a summary to [`SUMMARY_MAX_CHARS`] on a char boundary.
pub fn clamp_summary(summary: String) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        summary
    } else {
        summary.chars().take(SUMMARY_MAX_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_summaries_pass_through() {
        assert_eq!(clamp_summary("short".into()), "short");
    }

    #[test]
    fn long_summaries_are_truncated() {
        let long = "x".repeat(SUMMARY_MAX_CHARS + 100);
        assert_eq!(clamp_summary(long).chars().count(), SUMMARY_MAX_CHARS);
    }

    #[test]
    fn payload_fields_default_when_missing() {
        let payload: SummaryPayload =
            serde_json::from_str(r#"{"summary_change": "Something moved."}"#).unwrap();
        assert_eq!(payload.summary_change, "Something moved.");
        assert!(payload.salient_points.is_empty());
        assert!(payload.keyword_hits.is_empty());
    }
}
