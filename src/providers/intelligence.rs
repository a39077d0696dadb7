use async_trait::async_trait;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::AIServiceError;
use crate::llm_manager::{ChatMessage, LLMProvider};

const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;

/// OpenAI-compatible chat-completions client for the intelligence.io API
#[derive(Debug, Clone)]
pub struct IntelligenceProvider {
    model: String,
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl IntelligenceProvider {
    /// Build a provider from configuration and an already resolved credential
    pub fn new(config: &ProviderConfig, api_key: Option<String>) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Set custom base URL (for API-compatible services)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH)
    }
}

#[async_trait]
impl LLMProvider for IntelligenceProvider {
    fn name(&self) -> &str { "intelligence" }
    fn model_name(&self) -> &str { &self.model }

    async fn send_messages(&self, messages: &[ChatMessage]) -> Result<String, AIServiceError> {
        let url = self.endpoint();
        let req_body = ChatRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
        };

        let mut request = self.client.post(&url).json(&req_body);
        match &self.api_key {
            Some(key) => request = request.bearer_auth(key),
            None => warn!("No API key configured, sending unauthenticated request to {}", url),
        }

        info!("Sending {} messages to {} ({})", messages.len(), url, self.model);
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!("Chat completion failed with status {}", status);
            return Err(AIServiceError::Status { status, body });
        }

        let body = resp.text().await?;
        let json: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AIServiceError::InvalidResponseBody(e.to_string()))?;

        json.choices
            .into_iter()
            .next()
            .ok_or(AIServiceError::MalformedResponse("no choices in response"))?
            .message
            .content
            .ok_or(AIServiceError::MalformedResponse("no content in response"))
    }
}
