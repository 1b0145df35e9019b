use super::types::*;
use crate::error::LlmError;
use crate::models::gemini::DEFAULT_MODEL;
use crate::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::authentication("API key cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            http_client,
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model used by `LlmClient::complete` when a request does not name one
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn generate_content(
        &self,
        model: impl Into<String>,
        request: GeminiGenerateContentRequest,
    ) -> Result<GeminiGenerateContentResponse, LlmError> {
        let model = model.into();
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| LlmError::authentication(format!("Invalid API key format: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if std::env::var("BRIEFING_LLM_LOG_PAYLOADS").is_ok() {
            if let Ok(json_str) = serde_json::to_string_pretty(&request) {
                tracing::debug!(model = %model, "Gemini request:\n{}", json_str);
            }
        }

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            tracing::debug!(status = status.as_u16(), "Gemini request failed");

            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&error_body) {
                return Err(LlmError::from_status(
                    error_response.error.code,
                    error_response.error.message,
                ));
            }

            return Err(LlmError::from_status(status.as_u16(), error_body));
        }

        let generate_response = response
            .json::<GeminiGenerateContentResponse>()
            .await
            .map_err(|e| LlmError::internal(format!("Failed to parse response: {}", e)))?;

        if std::env::var("BRIEFING_LLM_LOG_PAYLOADS").is_ok() {
            if let Ok(json_str) = serde_json::to_string_pretty(&generate_response) {
                tracing::debug!("Gemini response:\n{}", json_str);
            }
        }

        Ok(generate_response)
    }
}

#[async_trait]
impl crate::client::LlmClient for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::invalid_request(
                "At least one message is required",
            ));
        }

        let contents = request
            .messages
            .into_iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => GeminiRole::User,
                    Role::Assistant => GeminiRole::Model,
                };
                let parts = msg
                    .content
                    .into_iter()
                    .map(|block| match block {
                        ContentBlock::Text { text } => GeminiPart::text(text),
                    })
                    .collect();
                GeminiContent {
                    role: Some(role),
                    parts,
                }
            })
            .collect();

        let gemini_request = GeminiGenerateContentRequest {
            contents,
            system_instruction: request.system.map(|text| GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(text)],
            }),
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: Some(request.max_tokens),
            }),
        };

        let model = request.model.unwrap_or_else(|| self.model.clone());
        let response = self.generate_content(model, gemini_request).await?;

        let text = response.text().ok_or_else(|| {
            LlmError::empty_response(format!(
                "no text in response (finish reason: {})",
                response.finish_reason().unwrap_or("unknown")
            ))
        })?;

        let usage = response
            .usage_metadata
            .as_ref()
            .map(|meta| Usage {
                input_tokens: meta.prompt_token_count,
                output_tokens: meta.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: vec![ContentBlock::Text { text }],
            role: Role::Assistant,
            usage,
            stop_reason: response.finish_reason().map(str::to_string),
        })
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LlmClient;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_empty_key() {
        let client = GeminiClient::new("");
        assert!(matches!(client, Err(LlmError::Authentication { .. })));
    }

    #[test]
    fn test_with_model_overrides_default() {
        let client = GeminiClient::new("test-key").unwrap();
        assert_eq!(client.model_name(), DEFAULT_MODEL);

        let client = client.with_model("gemini-2.5-pro");
        assert_eq!(client.model_name(), "gemini-2.5-pro");
        assert_eq!(client.provider_name(), "google");
    }
}
