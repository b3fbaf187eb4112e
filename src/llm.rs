//! Fallback language model client (Groq)
//!
//! Queries that no category matches are conversational, not effectful, so
//! they go straight to the model and bypass the approval gate.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::ModelError;
use crate::types::Role;

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Timeout for chat-completion requests (30 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The conversational fallback capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FallbackModel: Send + Sync {
    async fn respond(&self, query: &str) -> Result<String, ModelError>;
}

/// Groq chat-completions client (OpenAI-compatible API)
#[derive(Clone)]
pub struct GroqClient {
    client: Arc<Client>,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl GroqClient {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client: Arc::new(client),
            api_key,
            model,
        }
    }

    /// Build a client when an API key is configured
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        config
            .api_key
            .as_ref()
            .map(|key| Self::new(key.clone(), config.model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl FallbackModel for GroqClient {
    async fn respond(&self, query: &str) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: Role::User.as_api_str(),
                content: query,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", GROQ_BASE_URL))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            // error payloads carry {"error": {"message": ...}}
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(ModelError::new(format!("Groq API error {}: {}", status, message)));
        }

        let data: ChatResponse = response.json().await?;
        data.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ModelError::new("model returned no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_requires_an_api_key() {
        let config = LlmConfig::default();
        assert!(GroqClient::from_config(&config).is_none());

        let config = LlmConfig {
            api_key: Some("gsk_test".to_string()),
            ..LlmConfig::default()
        };
        let client = GroqClient::from_config(&config).unwrap();
        assert_eq!(client.model(), "llama-3.3-70b-versatile");
    }
}
