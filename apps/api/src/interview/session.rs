//! Interview session state machine.
//!
//! ```text
//! NotStarted --start--> InProgress(0) --answer--> ... --answer--> Completed
//!                            ^                                       |
//!                            +----------------reset------------------+
//! ```
//!
//! Each accepted answer costs exactly one remote call. A failed call leaves the
//! session exactly as it was, so the same question can be answered again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::interview::prompts::{compose_feedback_prompt, INTERVIEW_QUESTIONS};
use crate::llm_client::{AnalysisClient, LlmError};

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("Please provide an answer before submitting.")]
    EmptyAnswer,

    #[error("The interview is not in progress")]
    NotInProgress,

    #[error("The interview can only be restarted once it is completed")]
    NotCompleted,

    #[error(transparent)]
    Remote(#[from] LlmError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InterviewState {
    NotStarted,
    InProgress { current_index: usize },
    Completed,
}

/// One graded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub answered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct InterviewSession {
    /// Empty until `start`.
    questions: Vec<String>,
    current_index: usize,
    transcript: Vec<TranscriptEntry>,
}

impl InterviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InterviewState {
        if self.questions.is_empty() {
            InterviewState::NotStarted
        } else if self.current_index >= self.questions.len() {
            InterviewState::Completed
        } else {
            InterviewState::InProgress {
                current_index: self.current_index,
            }
        }
    }

    /// Loads the question script. Calling it again never rewinds progress.
    pub fn start(&mut self) -> InterviewState {
        if self.questions.is_empty() {
            self.questions = INTERVIEW_QUESTIONS.iter().map(|q| q.to_string()).collect();
            self.current_index = 0;
            self.transcript.clear();
            info!("Mock interview started ({} questions)", self.questions.len());
        }
        self.state()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&str> {
        match self.state() {
            InterviewState::InProgress { current_index } => {
                Some(self.questions[current_index].as_str())
            }
            _ => None,
        }
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Grades `answer` against the current question and advances on success.
    pub async fn submit_answer(
        &mut self,
        answer: &str,
        client: &dyn AnalysisClient,
    ) -> Result<&TranscriptEntry, InterviewError> {
        let question = self
            .current_question()
            .ok_or(InterviewError::NotInProgress)?
            .to_string();

        if answer.trim().is_empty() {
            return Err(InterviewError::EmptyAnswer);
        }

        let prompt = compose_feedback_prompt(&question, answer);
        let feedback = client.generate(&prompt).await?;

        self.transcript.push(TranscriptEntry {
            question,
            answer: answer.to_string(),
            feedback,
            answered_at: Utc::now(),
        });
        self.current_index += 1;
        debug!(
            "Interview advanced to {}/{}",
            self.current_index,
            self.questions.len()
        );

        Ok(&self.transcript[self.transcript.len() - 1])
    }

    /// Rewinds a completed interview to the first question with an empty transcript.
    pub fn reset(&mut self) -> Result<InterviewState, InterviewError> {
        if self.state() != InterviewState::Completed {
            return Err(InterviewError::NotCompleted);
        }
        self.current_index = 0;
        self.transcript.clear();
        info!("Mock interview restarted");
        Ok(self.state())
    }
}
