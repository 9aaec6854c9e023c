// Resume analysis: one prompt, one remote call, opaque report back.

pub mod analyzer;
pub mod handlers;
pub mod prompts;

pub use analyzer::{analyze_resume, AnalysisRequest};
