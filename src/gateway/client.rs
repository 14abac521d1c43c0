//! Thin single-attempt adapter over the Gemini REST API.
//!
//! Each use case is one outbound call; failures are caught here and
//! degraded to fixed user-facing strings (or `None`), never raised to the
//! screens.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use super::prompts;
use super::wire::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, Tool,
};
use crate::quiz::QuizQuestion;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub const FAST_MODEL: &str = "gemini-2.5-flash";
/// Same model today; vision + search grounding run on the flash tier.
pub const VISION_MODEL: &str = "gemini-2.5-flash";

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned status {0}")]
    Api(u16),
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Normalized exam-grading result: report text plus the unique citation
/// URLs the service attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedExam {
    pub text: String,
    pub sources: Vec<String>,
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            api_key: api_key.trim().to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a different endpoint (mock server in tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// One `generateContent` round trip.
    pub(crate) async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::Api(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Generate a study summary for a dental topic.
    pub async fn generate_summary(&self, topic: &str) -> String {
        let request = GenerateContentRequest::from_text(prompts::summary_prompt(topic));

        match self.generate(FAST_MODEL, &request).await {
            Ok(response) => response
                .text()
                .unwrap_or_else(|| prompts::SUMMARY_UNAVAILABLE.to_string()),
            Err(e) => {
                log::error!("Error generating summary: {}", e);
                prompts::SUMMARY_ERROR.to_string()
            }
        }
    }

    /// Generate a multiple-choice question via schema-constrained output.
    ///
    /// Returns `None` on failure or when the payload does not form a valid
    /// question.
    pub async fn generate_quiz_question(&self, topic: Option<&str>) -> Option<QuizQuestion> {
        let topic = topic.unwrap_or(prompts::DEFAULT_QUIZ_TOPIC);

        let mut request = GenerateContentRequest::from_text(prompts::quiz_prompt(topic));
        request.generation_config = Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(quiz_response_schema()),
        });

        let response = match self.generate(FAST_MODEL, &request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Error generating quiz question: {}", e);
                return None;
            }
        };

        let text = response.text()?;
        match serde_json::from_str::<QuizQuestion>(&text) {
            Ok(question) if question.is_well_formed() => Some(question),
            Ok(question) => {
                log::warn!(
                    "Quiz payload rejected: answer index {} out of range",
                    question.correct_answer
                );
                None
            }
            Err(e) => {
                log::warn!("Unparsable quiz payload: {}", e);
                None
            }
        }
    }

    /// Grade a photographed exam: inline image + grading rubric, with
    /// web-search grounding for the citation URLs.
    pub async fn grade_exam_image(&self, image_base64: &str, mime_type: &str) -> GradedExam {
        let mut request = GenerateContentRequest::from_text(prompts::GRADER_PROMPT.to_string());
        request.contents[0].parts.insert(
            0,
            Part::inline_data(mime_type.to_string(), image_base64.to_string()),
        );
        request.tools = Some(vec![Tool::google_search()]);

        match self.generate(VISION_MODEL, &request).await {
            Ok(response) => GradedExam {
                text: response
                    .text()
                    .unwrap_or_else(|| prompts::GRADE_UNAVAILABLE.to_string()),
                sources: response.unique_source_urls(),
            },
            Err(e) => {
                log::error!("Error grading exam: {}", e);
                GradedExam {
                    text: prompts::GRADE_ERROR.to_string(),
                    sources: Vec::new(),
                }
            }
        }
    }
}

/// Structured-output schema for quiz generation: question, 4 options, the
/// correct index and a short explanation.
fn quiz_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "question": { "type": "STRING" },
            "options": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "4 opções de resposta"
            },
            "correctAnswer": {
                "type": "INTEGER",
                "description": "O índice da resposta correta (0-3)"
            },
            "explanation": {
                "type": "STRING",
                "description": "Explicação breve da resposta correta"
            }
        },
        "required": ["question", "options", "correctAnswer", "explanation"]
    })
}
