//! Sections - the three labelled parts extracted from a model response.

use serde::Serialize;

const SUMMARY_MARKER: &str = "Summary:";
const ACTION_ITEMS_MARKER: &str = "Action Items:";
const KEY_DECISIONS_MARKER: &str = "Key Decisions:";

/// Model output split at the section markers.
///
/// Each field is trimmed and may be empty. Splitting is order dependent:
/// markers that appear out of order or renamed are not recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sections {
    pub summary: String,
    pub action_items: String,
    pub key_decisions: String,
}

impl Sections {
    /// Split raw model text at the first `Summary:`, then `Action Items:`,
    /// then `Key Decisions:`.
    pub fn parse(text: &str) -> Self {
        let Some((_, after_summary)) = text.split_once(SUMMARY_MARKER) else {
            return Self::from_parts(text, "", "");
        };

        let Some((summary, rest)) = after_summary.split_once(ACTION_ITEMS_MARKER) else {
            return Self::from_parts(after_summary, "", "");
        };

        match rest.split_once(KEY_DECISIONS_MARKER) {
            Some((action_items, key_decisions)) => {
                Self::from_parts(summary, action_items, key_decisions)
            }
            None => Self::from_parts(summary, rest, ""),
        }
    }

    fn from_parts(summary: &str, action_items: &str, key_decisions: &str) -> Self {
        Self {
            summary: summary.trim().to_string(),
            action_items: action_items.trim().to_string(),
            key_decisions: key_decisions.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_markers_in_order() {
        let raw = "Summary:\nTeam discussed budget.\n\nAction Items:\n- Alice: finalize report by Friday\n\nKey Decisions:\nNone stated";
        let sections = Sections::parse(raw);
        assert_eq!(sections.summary, "Team discussed budget.");
        assert_eq!(sections.action_items, "- Alice: finalize report by Friday");
        assert_eq!(sections.key_decisions, "None stated");
    }

    #[test]
    fn preamble_before_summary_is_dropped() {
        let raw = "Sure! Here you go.\nSummary: Short.\nAction Items: none\nKey Decisions: ship it";
        let sections = Sections::parse(raw);
        assert_eq!(sections.summary, "Short.");
        assert_eq!(sections.action_items, "none");
        assert_eq!(sections.key_decisions, "ship it");
    }

    #[test]
    fn missing_action_items_keeps_everything_in_summary() {
        let raw = "Summary:\nWe met.\n\nKey Decisions:\nMove to Q3";
        let sections = Sections::parse(raw);
        assert_eq!(sections.summary, "We met.\n\nKey Decisions:\nMove to Q3");
        assert!(sections.action_items.is_empty());
        assert!(sections.key_decisions.is_empty());
    }

    #[test]
    fn missing_key_decisions_leaves_it_empty() {
        let raw = "Summary: A\nAction Items:\n- B\n- C\n";
        let sections = Sections::parse(raw);
        assert_eq!(sections.summary, "A");
        assert_eq!(sections.action_items, "- B\n- C");
        assert_eq!(sections.key_decisions, "");
    }

    #[test]
    fn no_markers_uses_raw_text_as_summary() {
        let sections = Sections::parse("  just some prose \n");
        assert_eq!(sections.summary, "just some prose");
        assert!(sections.action_items.is_empty());
        assert!(sections.key_decisions.is_empty());
    }

    #[test]
    fn reordered_markers_are_not_recognised() {
        let raw = "Summary: S\nKey Decisions: D\nAction Items: A";
        let sections = Sections::parse(raw);
        assert_eq!(sections.summary, "S\nKey Decisions: D");
        assert_eq!(sections.action_items, "A");
        assert_eq!(sections.key_decisions, "");
    }

    #[test]
    fn splits_at_first_occurrence_of_each_marker() {
        let raw = "Summary: one Summary: two\nAction Items: x Action Items: y";
        let sections = Sections::parse(raw);
        assert_eq!(sections.summary, "one Summary: two");
        assert_eq!(sections.action_items, "x Action Items: y");
    }

    #[test]
    fn empty_sections_are_allowed() {
        let sections = Sections::parse("Summary:Action Items:Key Decisions:");
        assert_eq!(sections, Sections::default());
    }
}
