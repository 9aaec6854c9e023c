use serde::Deserialize;
use tracing::info;

use crate::analysis::prompts::compose_analysis_prompt;
use crate::errors::AppError;
use crate::llm_client::AnalysisClient;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
}

impl AnalysisRequest {
    /// The job description, or `None` when it is missing or blank.
    pub fn job_description(&self) -> Option<&str> {
        self.job_description
            .as_deref()
            .filter(|jd| !jd.trim().is_empty())
    }
}

/// Sends the resume (and optional job description) for critique and returns the raw report.
///
/// Blank resume text is rejected before any remote call.
pub async fn analyze_resume(
    request: &AnalysisRequest,
    client: &dyn AnalysisClient,
) -> Result<String, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text is required for analysis.".to_string(),
        ));
    }

    let prompt = compose_analysis_prompt(&request.resume_text, request.job_description());
    let report = client.generate(&prompt).await?;

    info!(
        "Resume analysis complete ({} chars, job description: {})",
        report.len(),
        request.job_description().is_some()
    );

    Ok(report)
}
