//! HTTP front end: one form route plus a health check.

use crate::agent::Summarizer;
use crate::digest::{digest, DigestError};
use crate::ui;
use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self { summarizer }
    }
}

#[derive(Debug, Deserialize)]
pub struct NotesForm {
    #[serde(default)]
    pub meeting_notes: String,
}

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_notes))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_router(state)).await
}

async fn health() -> &'static str {
    "OK"
}

async fn show_form() -> Html<String> {
    Html(ui::render_form_page())
}

/// Bodies that are not urlencoded forms count as empty notes, so the
/// client still gets the form back with a message.
async fn submit_notes(
    State(state): State<AppState>,
    form: Result<Form<NotesForm>, FormRejection>,
) -> Html<String> {
    let notes = match form {
        Ok(Form(form)) => form.meeting_notes,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable form body");
            String::new()
        }
    };
    match digest(&notes, state.summarizer.as_ref()).await {
        Ok(result) => Html(ui::render_results(&result, &notes)),
        Err(err @ DigestError::EmptyInput) => {
            tracing::debug!("rejected blank submission");
            Html(ui::render_form(Some(&err.to_string()), &notes))
        }
        Err(err) => Html(ui::render_form(Some(&err.to_string()), &notes)),
    }
}
