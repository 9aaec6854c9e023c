//! Axum route handlers for resume analysis.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::{analyze_resume, AnalysisRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeBody {
    /// Overrides the text extracted from the session's upload.
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub report: String,
}

/// POST /api/v1/sessions/:id/analysis
///
/// Analyses the uploaded resume (or `resume_text`) and caches the report on the session.
/// A failed analysis leaves any previously cached report in place.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let handle = state.sessions.get(session_id).await?;
    let mut session = handle.lock().await;

    let request = AnalysisRequest {
        resume_text: body
            .resume_text
            .or_else(|| session.resume_text.clone())
            .unwrap_or_default(),
        job_description: body.job_description,
    };

    let report = analyze_resume(&request, state.llm.as_ref()).await?;
    session.analysis_report = Some(report.clone());
    info!(session_id = %session.id, "Analysis report cached");

    Ok(Json(AnalysisResponse { report }))
}

/// GET /api/v1/sessions/:id/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let handle = state.sessions.get(session_id).await?;
    let session = handle.lock().await;

    let report = session.analysis_report.clone().ok_or_else(|| {
        AppError::NotFound(
            "No analysis available. Please analyze your resume first.".to_string(),
        )
    })?;

    Ok(Json(AnalysisResponse { report }))
}
