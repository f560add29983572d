use similar::{DiffOp, TextDiff};

use crate::rounding::round4;

/// Word- and line-level diff statistics for one snapshot pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub diff_lines: usize,
    pub similarity: f64,
}

/// Word-level add/remove counts, changed-line count and a character-level
/// similarity ratio where 1.0 means identical.
///
/// Replaced words count on both sides: they are absent from the common
/// subsequence seen from either text.
pub fn text_diff_stats(prev_text: &str, cur_text: &str) -> DiffStats {
    let prev_words: Vec<&str> = prev_text.split_whitespace().collect();
    let cur_words: Vec<&str> = cur_text.split_whitespace().collect();

    let mut added = 0;
    let mut removed = 0;
    let word_diff = TextDiff::from_slices(&prev_words, &cur_words);
    for op in word_diff.ops() {
        match op {
            DiffOp::Insert { new_len, .. } => added += new_len,
            DiffOp::Delete { old_len, .. } => removed += old_len,
            DiffOp::Replace {
                old_len, new_len, ..
            } => {
                added += new_len;
                removed += old_len;
            }
            DiffOp::Equal { .. } => {}
        }
    }

    let line_diff = TextDiff::from_lines(prev_text, cur_text);
    let diff_lines = line_diff
        .ops()
        .iter()
        .map(|op| match op {
            DiffOp::Insert { new_len, .. } => *new_len,
            DiffOp::Delete { old_len, .. } => *old_len,
            DiffOp::Replace {
                old_len, new_len, ..
            } => old_len + new_len,
            DiffOp::Equal { .. } => 0,
        })
        .sum();

    let similarity = if prev_text == cur_text {
        1.0
    } else {
        round4(f64::from(TextDiff::from_chars(prev_text, cur_text).ratio()))
    };

    DiffStats {
        added,
        removed,
        diff_lines,
        similarity,
    }
}

/// Bounded excerpts of both texts for prompt assembly. Texts longer than
/// `max_chars` keep their head and tail around a literal `" ... "` marker.
pub fn short_context_snippets(
    prev_text: &str,
    cur_text: &str,
    max_chars: usize,
) -> (String, String) {
    (
        trim_middle(prev_text, max_chars),
        trim_middle(cur_text, max_chars),
    )
}

fn trim_middle(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    let total = trimmed.chars().count();
    if total <= max_chars {
        return trimmed.to_string();
    }
    let half = max_chars / 2;
    let head: String = trimmed.chars().take(half).collect();
    let tail: String = trimmed.chars().skip(total - half).collect();
    format!("{head} ... {tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_has_no_diff() {
        let stats = text_diff_stats("This is some text", "This is some text");
        assert_eq!(stats.added, 0);
        assert_eq!(stats.removed, 0);
        assert_eq!(stats.diff_lines, 0);
        assert_eq!(stats.similarity, 1.0);
    }

    #[test]
    fn both_empty_is_fully_similar() {
        let stats = text_diff_stats("", "");
        assert_eq!(stats.similarity, 1.0);
        assert_eq!(stats.added + stats.removed, 0);
    }

    #[test]
    fn single_word_substitution_counts_both_sides() {
        let stats = text_diff_stats("Trial 3", "Trial 4");
        assert_eq!(stats.added, 1);
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.diff_lines, 2);
        assert_eq!(stats.similarity, 0.8571);
    }

    #[test]
    fn pure_insertion_only_adds() {
        let stats = text_diff_stats("alpha beta", "alpha beta gamma delta");
        assert_eq!(stats.added, 2);
        assert_eq!(stats.removed, 0);
        assert!(stats.similarity < 1.0);
    }

    #[test]
    fn pure_removal_only_removes() {
        let stats = text_diff_stats("alpha beta gamma", "alpha gamma");
        assert_eq!(stats.added, 0);
        assert_eq!(stats.removed, 1);
    }

    #[test]
    fn similarity_stays_in_unit_range() {
        let stats = text_diff_stats("completely different words", "nothing shared here at all");
        assert!((0.0..=1.0).contains(&stats.similarity));
        assert!(stats.similarity < 1.0);
    }

    #[test]
    fn short_texts_pass_through_snippets() {
        let (prev, cur) = short_context_snippets("short", "also short", 100);
        assert_eq!(prev, "short");
        assert_eq!(cur, "also short");
    }

    #[test]
    fn long_texts_are_trimmed_with_marker() {
        let long = "word ".repeat(200);
        let (snippet, _) = short_context_snippets(&long, "", 100);
        assert!(snippet.chars().count() <= 105);
        assert!(snippet.contains(" ... "));
        assert!(snippet.starts_with("word"));
        assert!(snippet.ends_with("word"));
    }
}
