//! Prompt construction for meeting-note summarisation.

use std::fmt;

/// Placeholder replaced by the user's notes
const NOTES_SLOT: &str = "{meeting_text}";

/// Instruction template sent to the model. The output layout mirrors the
/// markers that [`crate::summary::Sections::parse`] looks for.
const SUMMARY_TEMPLATE: &str = "You are an expert business assistant. Given the following meeting notes, \
generate a concise summary (3-5 sentences), and then extract action items as a bullet list with responsible persons if mentioned. \
If there were any key decisions, list them as a short section after action items.\n\n\
Meeting Notes:\n{meeting_text}\n\n\
Output:\n\
Summary:\n[Your summary here]\n\n\
Action Items:\n[Bullet points here]\n\n\
Key Decisions:\n[Decisions if any, or 'None stated']\n";

/// A fully rendered prompt, ready to send upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Substitute the notes verbatim into the template.
///
/// No escaping or truncation is applied. The notes are inserted with a
/// single `replacen`, so a literal `{meeting_text}` inside the notes is
/// left alone.
pub fn build_prompt(notes: &str) -> PromptText {
    PromptText(SUMMARY_TEMPLATE.replacen(NOTES_SLOT, notes, 1))
}
