//! HTML views: the notes form and the results page.

use crate::digest::Digest;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; color: #1f2933; }
textarea { width: 100%; min-height: 16rem; font: inherit; padding: .5rem; }
button { margin-top: .75rem; padding: .5rem 1.25rem; font: inherit; }
.error { background: #fde8e8; color: #9b1c1c; padding: .75rem; border-radius: 4px; }
.section { white-space: pre-wrap; background: #f5f7fa; padding: .75rem; border-radius: 4px; }
.stats { color: #52606d; }
"#;

/// Empty form shown on first visit
pub fn render_form_page() -> String {
    render_form(None, "")
}

/// The input form, optionally with a message and the previously entered notes
pub fn render_form(error: Option<&str>, notes: &str) -> String {
    let error_html = error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape(msg)))
        .unwrap_or_default();

    page(
        "Meeting Notes Summariser",
        &format!(
            r#"<h1>Meeting Notes Summariser</h1>
{error_html}
<form method="post" action="/">
  <label for="meeting_notes">Paste your meeting notes:</label>
  <textarea id="meeting_notes" name="meeting_notes">{notes}</textarea>
  <button type="submit">Summarise</button>
</form>"#,
            notes = escape(notes),
        ),
    )
}

/// Summary, action items, key decisions, stats and the original notes
pub fn render_results(digest: &Digest, notes: &str) -> String {
    let sections = &digest.sections;
    let stats = &digest.stats;

    page(
        "Meeting Summary",
        &format!(
            r#"<h1>Meeting Summary</h1>
<h2>Summary</h2>
<div class="section">{summary}</div>
<h2>Action Items</h2>
<div class="section">{action_items}</div>
<h2>Key Decisions</h2>
<div class="section">{key_decisions}</div>
<p class="stats">Original: {original} words &middot; Summary: {summary_words} words &middot; Compression: {compression}</p>
<h2>Original Notes</h2>
<div class="section">{notes}</div>
<p><a href="/">Summarise another</a></p>"#,
            summary = escape(&sections.summary),
            action_items = escape(&sections.action_items),
            key_decisions = escape(&sections.key_decisions),
            original = stats.original_words,
            summary_words = stats.summary_words,
            compression = escape(&stats.compression),
            notes = escape(notes),
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
