/// Deterministic local summary used whenever the external backend is
/// disabled or fails. Always non-empty.
pub fn local_fallback_summary(
    url: &str,
    domain: &str,
    added: usize,
    removed: usize,
    diff_lines: usize,
) -> String {
    let change = if added > 0 && removed == 0 {
        format!("Added {added} new words.")
    } else if removed > 0 && added == 0 {
        format!("Removed {removed} words.")
    } else if added > 0 || removed > 0 {
        format!("{added} added, {removed} removed.")
    } else {
        "Minor formatting change.".to_string()
    };
    format!("Content modified on {domain} page ({url}): {change} ({diff_lines} diff lines).")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_only_phrasing() {
        let summary = local_fallback_summary("https://e.com", "pricing", 4, 0, 2);
        assert_eq!(
            summary,
            "Content modified on pricing page (https://e.com): Added 4 new words. (2 diff lines)."
        );
    }

    #[test]
    fn removal_only_phrasing() {
        let summary = local_fallback_summary("https://e.com", "legal", 0, 3, 1);
        assert!(summary.contains("Removed 3 words."));
    }

    #[test]
    fn mixed_change_phrasing() {
        let summary = local_fallback_summary("https://e.com", "regulatory", 1, 1, 2);
        assert!(summary.contains("1 added, 1 removed."));
    }

    #[test]
    fn no_word_change_phrasing() {
        let summary = local_fallback_summary("https://e.com", "general", 0, 0, 0);
        assert!(summary.contains("Minor formatting change."));
        assert!(!summary.is_empty());
    }
}
