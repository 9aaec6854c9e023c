//! Axum route handlers for the mock interview.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::{InterviewSession, InterviewState, TranscriptEntry};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerBody {
    pub answer: String,
}

/// Snapshot of an interview for the client. The transcript is always included;
/// once completed it is the interview summary.
#[derive(Debug, Serialize)]
pub struct InterviewView {
    #[serde(flatten)]
    pub state: InterviewState,
    /// 1-based number of the question being asked.
    pub question_number: Option<usize>,
    pub total_questions: usize,
    pub current_question: Option<String>,
    pub transcript: Vec<TranscriptEntry>,
}

impl From<&InterviewSession> for InterviewView {
    fn from(interview: &InterviewSession) -> Self {
        let state = interview.state();
        let question_number = match state {
            InterviewState::InProgress { current_index } => Some(current_index + 1),
            _ => None,
        };
        Self {
            state,
            question_number,
            total_questions: interview.questions().len(),
            current_question: interview.current_question().map(String::from),
            transcript: interview.transcript().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub entry: TranscriptEntry,
    pub interview: InterviewView,
}

/// POST /api/v1/sessions/:id/interview/start
pub async fn handle_start(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<InterviewView>, AppError> {
    let handle = state.sessions.get(session_id).await?;
    let mut session = handle.lock().await;
    session.interview.start();
    Ok(Json(InterviewView::from(&session.interview)))
}

/// GET /api/v1/sessions/:id/interview
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<InterviewView>, AppError> {
    let handle = state.sessions.get(session_id).await?;
    let session = handle.lock().await;
    Ok(Json(InterviewView::from(&session.interview)))
}

/// POST /api/v1/sessions/:id/interview/answer
///
/// One remote feedback call per accepted answer. On failure the interview stays on the same question.
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(body): Json<AnswerBody>,
) -> Result<Json<AnswerResponse>, AppError> {
    let handle = state.sessions.get(session_id).await?;
    let mut session = handle.lock().await;

    let entry = session
        .interview
        .submit_answer(&body.answer, state.llm.as_ref())
        .await?
        .clone();
    info!(
        session_id = %session.id,
        state = ?session.interview.state(),
        "Interview answer graded"
    );

    Ok(Json(AnswerResponse {
        entry,
        interview: InterviewView::from(&session.interview),
    }))
}

/// POST /api/v1/sessions/:id/interview/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<InterviewView>, AppError> {
    let handle = state.sessions.get(session_id).await?;
    let mut session = handle.lock().await;
    session.interview.reset()?;
    Ok(Json(InterviewView::from(&session.interview)))
}
