use anyhow::Context;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub extracted_text: String,
    /// False when neither the text layer nor OCR produced anything.
    pub has_text: bool,
    pub char_count: usize,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    (StatusCode::CREATED, Json(CreateSessionResponse { session_id }))
}

/// DELETE /api/v1/sessions/:id
///
/// Ends the session and drops its resume text, report and transcript.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/resume
///
/// Multipart upload (field `file`). The PDF is written to the configured upload
/// path, overwriting the previous upload, then run through text extraction.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let session = state.sessions.get(session_id).await?;
    let pdf = read_upload(&mut multipart).await?;

    info!(session_id = %session_id, bytes = pdf.len(), "Resume uploaded");
    let extracted_text = save_and_extract(&state, pdf).await?;
    if extracted_text.is_empty() {
        warn!(session_id = %session_id, "No text could be extracted from the upload");
    }

    let mut session = session.lock().await;
    session.resume_text = Some(extracted_text.clone());
    info!(
        session_id = %session.id,
        has_text = !extracted_text.is_empty(),
        "Resume text stored"
    );

    Ok(Json(UploadResponse {
        has_text: !extracted_text.is_empty(),
        char_count: extracted_text.chars().count(),
        extracted_text,
    }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        return Ok(data);
    }

    Err(AppError::Validation(
        "Please upload a resume in PDF format.".to_string(),
    ))
}

/// Writes the upload to the fixed path and extracts it on the blocking pool.
/// Holding the upload lock keeps another upload from replacing the file mid-extraction.
async fn save_and_extract(state: &AppState, pdf: Bytes) -> Result<String, AppError> {
    let _guard = state.upload_lock.lock().await;
    let path = state.config.upload_path.clone();

    tokio::fs::write(&path, &pdf)
        .await
        .with_context(|| format!("Failed to write upload to {}", path.display()))?;

    let extractor = state.extractor.clone();
    let text = tokio::task::spawn_blocking(move || extractor.extract(&path))
        .await
        .context("Text extraction task failed")?;

    Ok(text)
}
