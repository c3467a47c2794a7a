use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TextGenerator;
use super::config::{AiConfig, AiProvider};
use crate::error::GenerationError;

/// HTTP-backed text generation for the configured provider.
#[derive(Clone)]
pub struct AiTextService {
    client: Client,
    config: Option<AiConfig>,
}

impl AiTextService {
    #[must_use]
    pub fn new(config: Option<AiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn complete_openai(
        &self,
        config: &AiConfig,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: config.temperature,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.into_text().ok_or(GenerationError::EmptyResponse)
    }

    async fn complete_gemini(
        &self,
        config: &AiConfig,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        let payload = GenerateContentRequest {
            contents: vec![GeminiContent {
                role: Some("user".into()),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: config.temperature,
            },
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for AiTextService {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let config = self.config.as_ref().ok_or(GenerationError::Disabled)?;
        debug!(provider = config.provider.as_str(), model = %config.model, "sending prompt");
        match config.provider {
            AiProvider::OpenAi => self.complete_openai(config, prompt).await,
            AiProvider::Gemini => self.complete_gemini(config, prompt).await,
        }
    }
}

//
// ─── OPENAI-COMPATIBLE WIRE TYPES ─────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

//
// ─── GEMINI WIRE TYPES ────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<String>();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_service_is_disabled() {
        let service = AiTextService::new(None);
        let err = service.complete("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::Disabled));
    }

    #[test]
    fn openai_response_text_is_trimmed() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Q?\nAnswer: A \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(body.into_text().as_deref(), Some("Q?\nAnswer: A"));
    }

    #[test]
    fn openai_missing_content_is_empty() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert_eq!(body.into_text(), None);
        let body: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(body.into_text(), None);
    }

    #[test]
    fn gemini_parts_are_joined() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"What is a p-value?\n"},{"text":"Answer: B"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.into_text().as_deref(),
            Some("What is a p-value?\nAnswer: B")
        );
    }

    #[test]
    fn gemini_blocked_response_is_empty() {
        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert_eq!(body.into_text(), None);
        let body: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(body.into_text(), None);
    }

    #[test]
    fn gemini_request_uses_camel_case() {
        let payload = GenerateContentRequest {
            contents: vec![GeminiContent {
                role: Some("user".into()),
                parts: vec![GeminiPart {
                    text: Some("hi".into()),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.5 },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["generationConfig"]["temperature"], 0.5);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }
}
