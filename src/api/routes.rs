//! HTTP route handlers

use super::{render, AppState};
use crate::ai::enrich;
use crate::db::notes::{self, NewNote, NoteUpdate};
use crate::error::AppError;
use crate::search::NoteFilter;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;

// ============================================================================
// Health Check
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ============================================================================
// Listing and search
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

fn render_listing(state: &AppState, filter: &NoteFilter, query: &str) -> axum::response::Response {
    let result = {
        let conn = state.db.conn();
        notes::list_notes(&conn, filter)
    };

    match result {
        Ok(notes) => Html(render::listing_page(&notes, query)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list notes: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to list notes").into_response()
        }
    }
}

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    render_listing(&state, &NoteFilter::All, "")
}

/// Plain substring search over every field
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> impl IntoResponse {
    let filter = NoteFilter::substring(&form.query);
    render_listing(&state, &filter, &form.query)
}

/// Natural-language search: keywords AND an optional date expression
pub async fn nlq_search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> impl IntoResponse {
    let today = chrono::Local::now().date_naive();
    let filter = NoteFilter::nlq(&form.query, today);
    render_listing(&state, &filter, &form.query)
}

// ============================================================================
// Note CRUD
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddNoteForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub summary: String,
}

/// Pull a required form field, rejecting blank values
fn required(field: Option<String>, name: &str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Validation(format!(
            "Missing required field: {}",
            name
        ))),
    }
}

fn new_note_from_form(form: AddNoteForm) -> Result<NewNote, AppError> {
    Ok(NewNote {
        title: required(form.title, "title")?,
        content: required(form.content, "content")?,
        category: required(form.category, "category")?,
        sentiment: form.sentiment,
        summary: form.summary,
    })
}

pub async fn add_note(
    State(state): State<AppState>,
    Form(form): Form<AddNoteForm>,
) -> impl IntoResponse {
    let note = match new_note_from_form(form) {
        Ok(note) => note,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let result = {
        let conn = state.db.conn();
        notes::insert_note(&conn, &note)
    };

    match result {
        Ok(id) => {
            tracing::debug!("Created note {}", id);
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create note: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create note").into_response()
        }
    }
}

pub async fn edit_note_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let result = {
        let conn = state.db.conn();
        notes::get_note(&conn, id)
    };

    match result {
        Ok(Some(note)) => Html(render::edit_page(&note)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(render::not_found_page(id))).into_response(),
        Err(e) => {
            tracing::error!("Failed to load note {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load note").into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditNoteForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub summary: String,
}

fn update_from_form(form: EditNoteForm) -> Result<NoteUpdate, AppError> {
    Ok(NoteUpdate {
        title: required(form.title, "title")?,
        content: required(form.content, "content")?,
        category: required(form.category, "category")?,
        date: required(form.date, "date")?,
        sentiment: form.sentiment,
        summary: form.summary,
    })
}

pub async fn edit_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<EditNoteForm>,
) -> impl IntoResponse {
    let update = match update_from_form(form) {
        Ok(update) => update,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    let result = {
        let conn = state.db.conn();
        notes::update_note(&conn, id, &update)
    };

    match result {
        Ok(()) => Redirect::to("/").into_response(),
        Err(AppError::NotFound(_, _)) => {
            (StatusCode::NOT_FOUND, Html(render::not_found_page(id))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update note {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update note").into_response()
        }
    }
}

/// Deletes are idempotent: an absent id still redirects to the listing
pub async fn delete_note(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    let result = {
        let conn = state.db.conn();
        notes::delete_note(&conn, id)
    };

    match result {
        Ok(deleted) => {
            if !deleted {
                tracing::debug!("Delete of absent note {} affected no rows", id);
            }
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete note {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete note").into_response()
        }
    }
}

pub async fn view_note(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    let result = {
        let conn = state.db.conn();
        notes::get_note(&conn, id)
    };

    match result {
        Ok(Some(note)) => Html(render::view_page(&note)).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(render::not_found_page(id))).into_response(),
        Err(e) => {
            tracing::error!("Failed to load note {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load note").into_response()
        }
    }
}

// ============================================================================
// Enrichment
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ContentRequest {
    #[serde(default)]
    pub content: String,
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<ContentRequest>,
) -> impl IntoResponse {
    match enrich::summarize(state.gateway.as_ref(), &req.content).await {
        Ok(summary) => Json(serde_json::json!({ "summary": summary })).into_response(),
        Err(e) => {
            tracing::warn!("Summarize failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Failed to summarize note" })),
            )
                .into_response()
        }
    }
}

pub async fn categorize(
    State(state): State<AppState>,
    Json(req): Json<ContentRequest>,
) -> impl IntoResponse {
    match enrich::categorize(state.gateway.as_ref(), &req.content).await {
        Ok(category) => Json(serde_json::json!({ "category": category })).into_response(),
        Err(e) => {
            tracing::warn!("Categorize failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Failed to categorize note" })),
            )
                .into_response()
        }
    }
}

pub async fn sentiment(
    State(state): State<AppState>,
    Json(req): Json<ContentRequest>,
) -> impl IntoResponse {
    match enrich::analyze_sentiment(state.gateway.as_ref(), &req.content).await {
        Ok(sentiment) => Json(serde_json::json!({ "sentiment": sentiment })).into_response(),
        Err(e) => {
            tracing::warn!("Sentiment analysis failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": "Failed to analyze sentiment" })),
            )
                .into_response()
        }
    }
}
