/// LLM Client: the single point of entry for all Gemini API calls in the coach.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Resume analysis and interview feedback both go through `AnalysisClient`.
///
/// Model: gemini-1.5-flash (hardcoded; do not make configurable, to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for every analysis and feedback call.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Sends a composed prompt to the remote model and returns its text.
///
/// Carried in `AppState` as `Arc<dyn AnalysisClient>` so tests can swap in
/// a scripted backend.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Returns the model's response text, trimmed. One call = one request; no retries.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateResponse {
    /// Concatenates the text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Wraps the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, MODEL)
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<GenerateResponse, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(parsed)
    }
}

#[async_trait]
impl AnalysisClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.trim().to_string())
    }
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
pub mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Scripted client: echoes a canned reply and records every prompt it receives.
    #[derive(Default)]
    pub struct StubClient {
        pub prompts: Mutex<Vec<String>>,
        calls: AtomicUsize,
        fail_on_call: Option<usize>,
    }

    impl StubClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Fails the `n`th call (zero-based) with an API error.
        pub fn failing_on(n: usize) -> Self {
            Self {
                fail_on_call: Some(n),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AnalysisClient for StubClient {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail_on_call == Some(n) {
                return Err(LlmError::Api {
                    status: 503,
                    message: "model overloaded".to_string(),
                });
            }
            Ok(format!("feedback #{}", n + 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Strengths: "}, {"text": "clear layout."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
        }"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("Strengths: clear layout."));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_whitespace_only_candidate_has_no_text() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "  \n"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_api_error_message_parsed_from_body() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "API key not valid.");
    }

    #[test]
    fn test_api_error_message_falls_back_to_raw_body() {
        assert_eq!(api_error_message("upstream timeout"), "upstream timeout");
    }

    #[test]
    fn test_endpoint_uses_fixed_model() {
        let client = GeminiClient::new("key".to_string()).unwrap();
        assert!(client
            .endpoint()
            .ends_with("/models/gemini-1.5-flash:generateContent"));
    }
}
