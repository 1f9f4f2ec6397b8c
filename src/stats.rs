//! Word-count statistics for a summarised request.

use serde::Serialize;

/// Shown instead of a percentage when the input has no words
pub const NO_COMPRESSION: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestStats {
    /// Words in the submitted notes
    pub original_words: usize,
    /// Words in the extracted summary section
    pub summary_words: usize,
    /// Summary length relative to the notes, e.g. "30.0%"
    pub compression: String,
}

impl RequestStats {
    pub fn compute(original: &str, summary: &str) -> Self {
        let original_words = word_count(original);
        let summary_words = word_count(summary);
        Self {
            original_words,
            summary_words,
            compression: compression(original_words, summary_words),
        }
    }
}

/// Number of whitespace-delimited tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Format `summary / original * 100` with one decimal place
pub fn compression(original_words: usize, summary_words: usize) -> String {
    if original_words == 0 {
        return NO_COMPRESSION.to_string();
    }
    let ratio = summary_words as f64 / original_words as f64 * 100.0;
    format!("{:.1}%", ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_tokens_across_mixed_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count(" one\ttwo\n\nthree  "), 3);
    }

    #[test]
    fn ten_to_three_is_thirty_percent() {
        assert_eq!(compression(10, 3), "30.0%");
    }

    #[test]
    fn zero_original_words_uses_placeholder() {
        assert_eq!(compression(0, 0), NO_COMPRESSION);
        assert_eq!(compression(0, 7), NO_COMPRESSION);
    }

    #[test]
    fn rounds_to_one_decimal_place() {
        assert_eq!(compression(3, 1), "33.3%");
        assert_eq!(compression(3, 2), "66.7%");
        assert_eq!(compression(4, 8), "200.0%");
    }

    #[test]
    fn compute_counts_both_texts() {
        let stats = RequestStats::compute(
            "We discussed the budget. Alice will finalize the report by Friday.",
            "Team discussed budget.",
        );
        assert_eq!(stats.original_words, 11);
        assert_eq!(stats.summary_words, 3);
        assert_eq!(stats.compression, "27.3%");
    }
}
