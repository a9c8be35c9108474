//! HTTP transport for an Ollama-style chat endpoint.
//!
//! Wire format: `POST {host}/api/chat` with a JSON body of
//! `{model, messages, stream: false}`; the reply text is at
//! `message.content`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;

use super::{ChatTransport, LlmError};

/// Request body for the chat endpoint.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body: only the reply text is needed.
#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// reqwest-backed transport with a fixed per-request timeout.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl HttpTransport {
    /// Build a transport from the provider configuration.
    pub fn new(config: &ProviderConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: format!("{}/api/chat", config.host.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status(status.as_u16()));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Malformed(e.to_string()))?;

        Ok(parsed.message.content)
    }
}
