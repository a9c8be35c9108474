//! LLM client: transport trait, bounded retry, and backoff.
//!
//! Provides an abstraction layer over the HTTP endpoint so the retry
//! logic is testable without a network or real delays.

pub mod http;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a single transport attempt.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint returned status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// One shot at the chat endpoint: a prompt in, the reply text out.
///
/// Implementations must not retry internally; the client owns the
/// retry policy.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Sleep abstraction so retry tests run without real delays.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Outcome of a [`LlmClient::query`] call. Immutable once returned.
///
/// On failure, `text` carries a descriptive message with the attempt
/// count and last failure reason; the client never propagates an error
/// past this boundary.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub succeeded: bool,
    pub attempts: u32,
}

/// Compute the backoff duration after a failed attempt (0-based).
///
/// Delay doubles each time: 1s, 2s, 4s, ...
pub fn retry_backoff(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt))
}

/// Chat client with bounded retry.
pub struct LlmClient {
    transport: Arc<dyn ChatTransport>,
    sleeper: Arc<dyn Sleeper>,
    max_retries: u32,
}

impl LlmClient {
    /// Create a client with the production tokio sleeper.
    ///
    /// `max_retries` is the total number of attempts and must be at
    /// least 1.
    pub fn new(transport: Arc<dyn ChatTransport>, max_retries: u32) -> Self {
        Self::with_sleeper(transport, Arc::new(TokioSleeper), max_retries)
    }

    /// Create a client with an explicit sleeper (used by tests).
    pub fn with_sleeper(
        transport: Arc<dyn ChatTransport>,
        sleeper: Arc<dyn Sleeper>,
        max_retries: u32,
    ) -> Self {
        Self {
            transport,
            sleeper,
            max_retries: max_retries.max(1),
        }
    }

    /// Send a prompt, retrying failed attempts with exponential backoff.
    ///
    /// No delay follows the final attempt: with `max_retries = 3` and a
    /// dead endpoint the caller waits 1s + 2s before getting the failure.
    pub async fn query(&self, prompt: &str) -> LlmResponse {
        let mut last_err: Option<LlmError> = None;

        for attempt in 0..self.max_retries {
            match self.transport.send(prompt).await {
                Ok(text) => {
                    return LlmResponse {
                        text,
                        succeeded: true,
                        attempts: attempt + 1,
                    };
                }
                Err(e) => {
                    last_err = Some(e);
                    if attempt + 1 < self.max_retries {
                        self.sleeper.sleep(retry_backoff(attempt)).await;
                    }
                }
            }
        }

        let reason = last_err
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempts were made".to_string());
        LlmResponse {
            text: format!(
                "LLM error after {} attempt(s): {reason}",
                self.max_retries
            ),
            succeeded: false,
            attempts: self.max_retries,
        }
    }
}
