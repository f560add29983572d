use reqwest::Client;
use tracing::debug;

use crate::{
    config::AnalysisConfig,
    domain::{ChangeInput, ChangeResult},
    importance::{compute_importance, label_from_score, ImportanceInputs},
    rounding::round4,
    summary::{build_diff_prompt, clamp_summary, local_fallback_summary, SummaryClient},
    textdiff::{extract_visible_text, short_context_snippets, text_diff_stats},
    visual::{load_image, perceptual_similarity},
};

/// Stateless analysis pipeline: holds only read-only configuration plus an
/// optional summarization client. Identical inputs produce identical output
/// whenever the external summarizer is disabled.
pub struct ChangeAnalyzer {
    config: AnalysisConfig,
    summarizer: Option<SummaryClient>,
}

impl ChangeAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Builds the analyzer around an existing HTTP client so callers can
    /// share one connection pool across analyzers.
    pub fn with_client(config: AnalysisConfig, http: Client) -> Self {
        // capability resolved once: the flag and a key must both be present
        let summarizer = if config.summarizer.enabled && config.summarizer.api_key.is_some() {
            Some(SummaryClient::new(http, config.summarizer.clone()))
        } else {
            None
        };
        Self { config, summarizer }
    }

    /// Full text+visual change analysis. Never fails: every degenerate
    /// input degrades to a documented default and still yields a complete
    /// [`ChangeResult`].
    pub async fn analyze(&self, input: &ChangeInput) -> ChangeResult {
        let prev_img = load_image(&input.prev.screenshot);
        let cur_img = load_image(&input.cur.screenshot);
        let sim_visual = perceptual_similarity(&prev_img, &cur_img);

        let prev_text = extract_visible_text(&input.prev.dom);
        let cur_text = extract_visible_text(&input.cur.dom);
        let stats = text_diff_stats(&prev_text, &cur_text);

        let (prev_snippet, cur_snippet) =
            short_context_snippets(&prev_text, &cur_text, self.config.snippet_max_chars);
        let prompt = build_diff_prompt(
            &input.url,
            &input.context.goal,
            &input.context.domain,
            &prev_snippet,
            &cur_snippet,
            stats.added,
            stats.removed,
            stats.diff_lines,
        );

        let external = match &self.summarizer {
            Some(client) => client.attempt(&prompt).await,
            None => None,
        };
        let summary = match external {
            Some(payload) => payload.summary_change,
            None => local_fallback_summary(
                &input.url,
                &input.context.domain,
                stats.added,
                stats.removed,
                stats.diff_lines,
            ),
        };

        let (import_score, rationale) = compute_importance(
            &ImportanceInputs {
                text_added: stats.added,
                text_removed: stats.removed,
                sim_text: stats.similarity,
                sim_visual,
                goal: &input.context.goal,
                domain: &input.context.domain,
                keywords: &input.context.keywords,
            },
            &self.config.domain_weights,
        );
        let importance = label_from_score(import_score);

        let has_change =
            stats.added + stats.removed > 0 || sim_visual < self.config.change_threshold;
        let similarity = round4(stats.similarity * 0.6 + sim_visual * 0.4);

        debug!(
            target: "pipeline",
            url = %input.url,
            import_score,
            %rationale,
            has_change,
            "analysis complete"
        );

        ChangeResult {
            has_change,
            text_added: stats.added,
            text_removed: stats.removed,
            similarity,
            total_diff_lines: stats.diff_lines,
            summary_change: clamp_summary(summary),
            importance,
            import_score,
            alert_criteria: importance.alert(),
        }
    }
}
