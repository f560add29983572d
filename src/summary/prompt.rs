/// Deterministic prompt assembly for the summarization backend; no side
/// effects, safe to build even when the backend is disabled.
#[allow(clippy::too_many_arguments)]
pub fn build_diff_prompt(
    url: &str,
    goal: &str,
    domain: &str,
    prev_snippet: &str,
    cur_snippet: &str,
    added: usize,
    removed: usize,
    diff_lines: usize,
) -> String {
    format!(
        "You are an expert analyst. Compare previous vs current webpage snapshots.\n\
         \n\
         URL: {url}\n\
         Goal: {goal}\n\
         Domain: {domain}\n\
         \n\
         Stats:\n\
         - text added: {added}\n\
         - text removed: {removed}\n\
         - total diff lines: {diff_lines}\n\
         \n\
         Previous snippet:\n\
         <<<\n\
         {prev_snippet}\n\
         >>>\n\
         \n\
         Current snippet:\n\
         <<<\n\
         {cur_snippet}\n\
         >>>\n\
         \n\
         Respond strictly in JSON with keys:\n\
         summary_change (string)\n\
         salient_points (list)\n\
         keyword_hits (list)"
    )
}
