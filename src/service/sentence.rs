use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;
use axum::Form;
use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::header::LOCATION;
use axum::http::{Response, StatusCode};
use chrono::Utc;

use crate::config::IdMode;
use crate::domain::sentence::{FIXED_RECORD_KEY, SentenceRecord, Sentiment};
use crate::error::AppError;
use crate::utils::state::AppState;

/// POST /upload-text
pub async fn upload_text(
    State(state): State<Arc<AppState>>,
    Form(mut fields): Form<HashMap<String, String>>,
) -> Result<Response<Body>, AppError> {
    // Not validated, same as the original surface: a missing field is an
    // unhandled error, not a 400.
    let text = fields
        .remove("text")
        .ok_or_else(|| AppError::Unexpected(anyhow!("form field `text` is missing")))?;

    analyze_and_store(&state, text).await?;
    redirect_to_home()
}

/// POST /upload-file
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response<Body>, AppError> {
    let mut uploaded = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let content = field.bytes().await?;
            uploaded = Some((filename, content_type, content));
            break;
        }
    }

    // Browsers send an empty file part when nothing was picked.
    let (filename, content_type, content) = match uploaded {
        Some((filename, _, _)) if filename.is_empty() => return Err(AppError::FileMissing),
        Some(parts) => parts,
        None => return Err(AppError::FileMissing),
    };

    state
        .storage
        .upload(&filename, content.to_vec(), &content_type)
        .await?;
    let text = state.storage.download_as_text(&filename).await?;
    tracing::info!(%filename, bytes = text.len(), "analyzing uploaded file");

    analyze_and_store(&state, text).await?;
    redirect_to_home()
}

/// The shared tail of both submission routes: analyze, label by the first
/// sentence's score, persist with the capture time.
async fn analyze_and_store(state: &AppState, text: String) -> Result<(), AppError> {
    let sentences = state.analyzer.analyze(&text).await?;
    let sentiment = Sentiment::classify(sentences.first().map(|s| s.score));

    let record = SentenceRecord {
        key: record_key(state.config.id_mode),
        text,
        timestamp: Utc::now(),
        sentiment,
    };
    state.sentences.put(&record).await
}

fn record_key(mode: IdMode) -> String {
    match mode {
        IdMode::Fixed => FIXED_RECORD_KEY.to_string(),
        IdMode::Generated => uuid::Uuid::new_v4().to_string(),
    }
}

fn redirect_to_home() -> Result<Response<Body>, AppError> {
    // Plain 302, not the 303 that axum's `Redirect::to` emits.
    Response::builder()
        .status(StatusCode::FOUND)
        .header(LOCATION, "/")
        .body(Body::empty())
        .map_err(|e| AppError::Unexpected(e.into()))
}
