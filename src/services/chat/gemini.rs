//! Google Gemini chat collaborator
//!
//! Sends each message as a single user turn to the `generateContent`
//! endpoint and returns the text of the first candidate.
//!
//! API Flow:
//! POST {api_url}/v1beta/models/{model}:generateContent → candidates[0].content.parts[*].text

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::chat::ChatCollaborator,
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_api_url.clone(),
            config.gemini_model.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Pulls the reply text out of a generateContent response body
    fn extract_text(response: GenerateContentResponse) -> AppResult<String> {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AppError::ExternalApi(format!(
                "Gemini blocked the prompt: {}",
                reason
            )));
        }

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ExternalApi("Gemini returned no candidates".to_string()))?;

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(AppError::ExternalApi(format!(
                "Gemini candidate has no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl ChatCollaborator for GeminiClient {
    async fn ask(&self, text: &str) -> AppResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(text.to_string()),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw Gemini API response");

        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::error!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize Gemini response"
                );
                AppError::ExternalApi(format!("Failed to parse Gemini response: {}", e))
            })?;

        let reply = Self::extract_text(parsed)?;

        tracing::info!(
            model = %self.model,
            reply_len = reply.len(),
            provider = "gemini",
            "Chat reply generated"
        );

        Ok(reply)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-pro:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new(
            "test_key".to_string(),
            server.uri(),
            "gemini-pro".to_string(),
        )
    }

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(
            "k".to_string(),
            "http://test.local/".to_string(),
            "gemini-pro".to_string(),
        );
        assert_eq!(
            client.endpoint(),
            "http://test.local/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = parse(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hello, "}, {"text": "athlete."}]},
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(
            GeminiClient::extract_text(response).unwrap(),
            "Hello, athlete."
        );
    }

    #[test]
    fn test_extract_text_uses_first_candidate() {
        let response = parse(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }));
        assert_eq!(GeminiClient::extract_text(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let response = parse(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }));
        let err = GeminiClient::extract_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response = parse(json!({}));
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(AppError::ExternalApi(_))
        ));
    }

    #[test]
    fn test_extract_text_empty_candidate() {
        let response = parse(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }));
        let err = GeminiClient::extract_text(response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_ask_sends_raw_text_and_returns_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header(API_KEY_HEADER, "test_key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "  What is WADA? "}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "The World Anti-Doping Agency."}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).ask("  What is WADA? ").await.unwrap();
        assert_eq!(reply, "The World Anti-Doping Agency.");
    }

    #[tokio::test]
    async fn test_ask_error_status_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).ask("hello").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_ask_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).ask("hello").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }

    #[tokio::test]
    async fn test_ask_unreachable_host() {
        let client = GeminiClient::new(
            "k".to_string(),
            "http://127.0.0.1:1".to_string(),
            "gemini-pro".to_string(),
        );
        assert!(matches!(
            client.ask("hello").await,
            Err(AppError::HttpClient(_))
        ));
    }
}
