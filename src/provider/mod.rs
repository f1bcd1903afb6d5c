//! Provider client capabilities.
//!
//! The pipeline services depend on these traits, never on a concrete
//! client. The composition root (the CLI command handler) decides whether
//! to inject the live HTTP client or the deterministic fixture client;
//! no service inspects the environment to pick one.

mod fixture;
mod openai;

pub use fixture::FixtureClient;
pub use openai::OpenAiClient;

use async_trait::async_trait;

use crate::error::ProviderError;

/// A chat-style completion request: one system instruction plus one user
/// message, with an explicit sampling temperature.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_text: String,
    pub temperature: f32,
}

/// A speech synthesis request.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub model: String,
    pub voice: String,
    pub input: String,
    pub speed: f32,
    pub response_format: String,
}

/// Chat-completion capability.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Returns the text content of the model's reply.
    async fn complete(&self, request: &ChatRequest) -> Result<String, ProviderError>;
}

/// Text-to-speech capability.
#[async_trait]
pub trait SpeechClient: Send + Sync {
    /// Returns the binary audio payload.
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, ProviderError>;
}
