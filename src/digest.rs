//! One pass of the summarisation pipeline: validate, prompt, complete,
//! split and count.

use crate::agent::{AgentError, Summarizer};
use crate::prompt::build_prompt;
use crate::stats::RequestStats;
use crate::summary::Sections;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Please enter some meeting notes.")]
    EmptyInput,
    #[error("Error: {0}")]
    Upstream(#[from] AgentError),
}

impl DigestError {
    /// The underlying failure without the "Error: " prefix the form adds,
    /// for callers that print their own prefix
    pub fn into_source(self) -> Box<dyn std::error::Error + Send + Sync> {
        match self {
            DigestError::Upstream(inner) => Box::new(inner),
            other => Box::new(other),
        }
    }
}

/// Everything the results page shows for one submission
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub sections: Sections,
    pub stats: RequestStats,
}

/// Run the notes through the summarizer.
///
/// Blank notes are rejected before any upstream call is made.
pub async fn digest(notes: &str, summarizer: &dyn Summarizer) -> Result<Digest, DigestError> {
    if notes.trim().is_empty() {
        return Err(DigestError::EmptyInput);
    }

    let prompt = build_prompt(notes);
    let response = summarizer.complete(&prompt).await.map_err(|e| {
        tracing::warn!(error = %e, "summarisation failed");
        e
    })?;

    let sections = Sections::parse(&response);
    let stats = RequestStats::compute(notes, &sections.summary);
    tracing::info!(
        original_words = stats.original_words,
        summary_words = stats.summary_words,
        compression = %stats.compression,
        "notes summarised"
    );

    Ok(Digest { sections, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptText;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct Canned {
        reply: Result<String, String>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl Canned {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                ..Self::ok("")
            }
        }
    }

    #[async_trait]
    impl Summarizer for Canned {
        async fn complete(&self, prompt: &PromptText) -> Result<String, AgentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply.clone().map_err(AgentError::RequestFailed)
        }
    }

    #[tokio::test]
    async fn blank_notes_never_reach_the_summarizer() {
        let stub = Canned::ok("Summary: x");
        let err = digest("   \n\t", &stub).await.unwrap_err();
        assert!(matches!(err, DigestError::EmptyInput));
        assert_eq!(err.to_string(), "Please enter some meeting notes.");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn end_to_end_with_canned_response() {
        let notes = "We discussed the budget. Alice will finalize the report by Friday.";
        let stub = Canned::ok(
            "Summary:\nTeam discussed budget.\n\nAction Items:\n- Alice: finalize report by Friday\n\nKey Decisions:\nNone stated",
        );

        let result = digest(notes, &stub).await.unwrap();
        assert_eq!(result.sections.summary, "Team discussed budget.");
        assert_eq!(result.sections.action_items, "- Alice: finalize report by Friday");
        assert_eq!(result.sections.key_decisions, "None stated");
        assert_eq!(result.stats.original_words, 11);
        assert_eq!(result.stats.summary_words, 3);

        let prompt = stub.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains(notes));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn upstream_failure_is_typed_and_prefixed() {
        let stub = Canned::failing("401 unauthorized");
        let err = digest("some notes", &stub).await.unwrap_err();
        assert!(matches!(err, DigestError::Upstream(AgentError::RequestFailed(_))));
        assert_eq!(err.to_string(), "Error: LLM request failed: 401 unauthorized");
        assert_eq!(
            err.into_source().to_string(),
            "LLM request failed: 401 unauthorized"
        );
    }

    #[test]
    fn empty_input_source_keeps_its_message() {
        assert_eq!(
            DigestError::EmptyInput.into_source().to_string(),
            "Please enter some meeting notes."
        );
    }
}
