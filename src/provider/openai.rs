use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::{ChatClient, ChatRequest, SpeechClient, SpeechRequest};
use crate::error::ProviderError;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct AudioSpeechRequest<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    speed: f32,
    response_format: &'a str,
}

/// Live client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.post(url);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {api_key}"));
        }

        request
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ProviderError::Status { status, body })
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ProviderError> {
        let url = self.url("/v1/chat/completions");

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.user_text),
                },
            ],
            temperature: request.temperature,
            stream: false,
        };

        let response = self
            .post(&url)
            .json(&chat_request)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                url: url.clone(),
                source,
            })?;

        let response = Self::check_status(response).await?;

        let completion: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Http {
                    url: url.clone(),
                    source,
                })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[async_trait]
impl SpeechClient for OpenAiClient {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, ProviderError> {
        let url = self.url("/v1/audio/speech");

        let speech_request = AudioSpeechRequest {
            model: &request.model,
            voice: &request.voice,
            input: &request.input,
            speed: request.speed,
            response_format: &request.response_format,
        };

        let response = self
            .post(&url)
            .json(&speech_request)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                url: url.clone(),
                source,
            })?;

        let response = Self::check_status(response).await?;

        let payload = response
            .bytes()
            .await
            .map_err(|source| ProviderError::Http { url, source })?;

        if payload.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(payload.to_vec())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = OpenAiClient::new("https://api.example.com/".to_string(), None);
        assert_eq!(
            client.url("/v1/chat/completions"),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_url_without_trailing_slash() {
        let client = OpenAiClient::new("http://localhost:8080".to_string(), None);
        assert_eq!(
            client.url("/v1/audio/speech"),
            "http://localhost:8080/v1/audio/speech"
        );
    }

    #[test]
    fn test_chat_request_serializes_two_messages() {
        let chat_request = ChatCompletionRequest {
            model: "gpt-4o",
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed("You are a translator."),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed("Hello"),
                },
            ],
            temperature: 0.3,
            stream: false,
        };

        let json = serde_json::to_value(&chat_request).unwrap();
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["stream"], false);
    }
}
