//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! Implements [`TextGenerator`] by calling `generateContent` with the recent
//! conversation turns. Credentials come from `secret.json` or the
//! `GEMINI_API_KEY` environment variable.

use async_trait::async_trait;
use mindcare_core::generation::{GenerationError, SYSTEM_PROMPT, TextGenerator};
use mindcare_core::secret::SecretService;
use mindcare_core::session::{ConversationMessage, MessageRole};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Sampling parameters sent with every request.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1024,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

/// Text generator backed by the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    system_prompt: String,
    generation_config: GenerationConfig,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            generation_config: GenerationConfig::default(),
        }
    }

    /// Builds an agent from the configured secrets.
    ///
    /// Fails with [`GenerationError::NotConfigured`] when there is no usable
    /// key, so callers can run without remote generation.
    pub async fn try_from_secrets(service: &dyn SecretService) -> Result<Self, GenerationError> {
        let secrets = service.load_secrets().await.map_err(|e| GenerationError::Request {
            status_code: None,
            message: format!("Failed to load secrets: {}", e),
        })?;

        let gemini = secrets
            .gemini
            .filter(|g| g.is_configured())
            .ok_or(GenerationError::NotConfigured)?;

        Ok(Self::new(gemini.api_key.clone(), gemini.model()))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Points the agent at a different endpoint root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = config;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(
        &self,
        message: &str,
        history: &[ConversationMessage],
    ) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|msg| Content {
                role: match msg.role {
                    MessageRole::User => "user",
                    MessageRole::Assistant => "model",
                }
                .to_string(),
                parts: vec![Part {
                    text: msg.content.clone(),
                }],
            })
            .collect();

        contents.push(Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: format!("{}\n\nUser message: {}", self.system_prompt, message),
            }],
        });

        GenerateContentRequest {
            contents,
            generation_config: self.generation_config,
        }
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, GenerationError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| GenerationError::Request {
                status_code: None,
                // without_url keeps the API key out of the message
                message: format!("Gemini API request failed: {}", err.without_url()),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            GenerationError::InvalidResponse(format!(
                "Failed to parse Gemini response: {}",
                err.without_url()
            ))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl TextGenerator for GeminiApiAgent {
    async fn generate(
        &self,
        message: &str,
        history: &[ConversationMessage],
    ) -> Result<String, GenerationError> {
        let request = self.build_request(message, history);
        debug!(
            model = %self.model,
            turns = request.contents.len(),
            "sending Gemini request"
        );
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, GenerationError> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            GenerationError::InvalidResponse(
                "Gemini API returned no text in the response candidates".into(),
            )
        })
}

fn map_http_error(status: StatusCode, body: String) -> GenerationError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    GenerationError::Request {
        status_code: Some(status.as_u16()),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindcare_core::config::DEFAULT_GEMINI_MODEL;
    use serde_json::{Value, json};

    fn history(n: usize) -> Vec<ConversationMessage> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    ConversationMessage::user(format!("u{i}"))
                } else {
                    ConversationMessage::assistant(format!("a{i}"))
                }
            })
            .collect()
    }

    fn request_json(agent: &GeminiApiAgent, message: &str, history: &[ConversationMessage]) -> Value {
        serde_json::to_value(agent.build_request(message, history)).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let agent = GeminiApiAgent::new("key", DEFAULT_GEMINI_MODEL);
        let body = request_json(&agent, "hello", &history(2));

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "u0");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");

        let last = contents[2]["parts"][0]["text"].as_str().unwrap();
        assert!(last.starts_with("You are Mind Care Bot"));
        assert!(last.ends_with("\n\nUser message: hello"));

        let config = &body["generationConfig"];
        assert!((config["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert!((config["topP"].as_f64().unwrap() - 0.8).abs() < 1e-6);
        assert_eq!(config["maxOutputTokens"], 1024);
        assert_eq!(config["topK"], 40);
    }

    #[test]
    fn test_request_forwards_given_turns_in_order() {
        let agent = GeminiApiAgent::new("key", DEFAULT_GEMINI_MODEL);
        let body = request_json(&agent, "now", &history(14));

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 15);
        assert_eq!(contents[0]["parts"][0]["text"], "u0");
        assert_eq!(contents[13]["role"], "model");
    }

    #[test]
    fn test_extract_first_text_part() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"inlineData": {}}, {"text": "Breathe slowly."}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(extract_text_response(parsed).unwrap(), "Breathe slowly.");
    }

    #[test]
    fn test_extract_without_candidates_is_invalid() {
        for body in [json!({}), json!({"candidates": []}), json!({"candidates": [{}]})] {
            let parsed: GenerateContentResponse = serde_json::from_value(body).unwrap();
            assert!(matches!(
                extract_text_response(parsed),
                Err(GenerationError::InvalidResponse(_))
            ));
        }
    }

    #[test]
    fn test_map_http_error_reads_error_body() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        let err = map_http_error(StatusCode::FORBIDDEN, body.to_string());
        assert_eq!(
            err,
            GenerationError::Request {
                status_code: Some(403),
                message: "PERMISSION_DENIED: API key not valid".to_string(),
            }
        );
    }

    #[test]
    fn test_map_http_error_plain_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(err.to_string(), "generation request failed (502): upstream down");
    }

    #[test]
    fn test_builders() {
        let agent = GeminiApiAgent::new("key", DEFAULT_GEMINI_MODEL)
            .with_model("gemini-pro")
            .with_base_url("http://localhost:9999/models/");
        assert_eq!(agent.model(), "gemini-pro");
        assert_eq!(agent.base_url, "http://localhost:9999/models");
    }
}
