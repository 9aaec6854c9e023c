// Mock interview: a fixed ten-question script, each answer graded by the remote model.

pub mod handlers;
pub mod prompts;
pub mod session;

pub use session::{InterviewError, InterviewSession, InterviewState, TranscriptEntry};
