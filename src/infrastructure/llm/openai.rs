//! OpenAI Responses API extractor adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ExtractorError, StructuredExtractor};
use crate::domain::extraction::{ModelAliasTable, QaExtraction, SystemPrompt, TokenUsage};

/// OpenAI API base URL
const API_BASE_URL: &str = "https://api.openai.com/v1";

/// Name attached to the structured-output schema
const SCHEMA_NAME: &str = "qa_extraction";

// Request types for the Responses API

#[derive(Debug, Serialize)]
struct CreateResponseRequest {
    model: String,
    input: Vec<InputMessage>,
    text: TextOptions,
}

#[derive(Debug, Serialize)]
struct InputMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct TextOptions {
    format: TextFormat,
}

#[derive(Debug, Serialize)]
struct TextFormat {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    schema: serde_json::Value,
    strict: bool,
}

// Response types for the Responses API

#[derive(Debug, Deserialize)]
struct CreateResponseResponse {
    output: Option<Vec<OutputItem>>,
    usage: Option<serde_json::Value>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    content: Option<Vec<OutputContent>>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: Option<String>,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// OpenAI structured extractor
pub struct OpenAiExtractor {
    api_key: String,
    base_url: String,
    aliases: ModelAliasTable,
    client: reqwest::Client,
}

impl OpenAiExtractor {
    /// Create a new extractor with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create an extractor against a custom API base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            aliases: ModelAliasTable::new(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// Build the request body with schema-constrained output
    fn build_request(
        &self,
        model: &str,
        prompt: &SystemPrompt,
        user_message: &str,
    ) -> CreateResponseRequest {
        CreateResponseRequest {
            model: model.to_string(),
            input: vec![
                InputMessage {
                    role: "system".to_string(),
                    content: prompt.content().to_string(),
                },
                InputMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
            text: TextOptions {
                format: TextFormat {
                    kind: "json_schema".to_string(),
                    name: SCHEMA_NAME.to_string(),
                    schema: QaExtraction::json_schema(),
                    strict: true,
                },
            },
        }
    }

    /// Pull the first structured output text out of the response
    fn extract_output_text(response: &CreateResponseResponse) -> Option<&str> {
        response
            .output
            .as_ref()?
            .iter()
            .filter_map(|item| item.content.as_ref())
            .flatten()
            .find(|content| content.kind.as_deref() == Some("output_text"))?
            .text
            .as_deref()
    }
}

#[async_trait]
impl StructuredExtractor for OpenAiExtractor {
    async fn extract(
        &self,
        prompt: &SystemPrompt,
        user_message: &str,
        model: &str,
    ) -> Result<(QaExtraction, TokenUsage), ExtractorError> {
        // Alias resolution happens before any network traffic
        let model_id = self.aliases.resolve(model)?;

        let body = self.build_request(model_id, prompt, user_message);
        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractorError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ExtractorError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ExtractorError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExtractorError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let response: CreateResponseResponse = response
            .json()
            .await
            .map_err(|e| ExtractorError::ParseError(e.to_string()))?;

        if let Some(error) = response.error {
            return Err(ExtractorError::ApiError(error.message));
        }

        let text =
            Self::extract_output_text(&response).ok_or(ExtractorError::ExtractionFailed)?;

        // Schema validation: anything not conforming to QaExtraction is a
        // failed extraction, not a silently accepted payload.
        let extraction: QaExtraction =
            serde_json::from_str(text).map_err(|_| ExtractorError::ExtractionFailed)?;

        let usage = response
            .usage
            .as_ref()
            .map(TokenUsage::from_value)
            .unwrap_or_default();

        Ok((extraction, usage))
    }
}
