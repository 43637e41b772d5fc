use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ClientError, ModelBackend};

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Backend for the Anthropic Messages API.
///
/// Timeouts are whatever the underlying client defaults to; there is no
/// retry layer.
pub struct AnthropicBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnthropicBackend {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
        }
    }

    /// Point the backend at a different endpoint (test servers, proxies).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl ModelBackend for AnthropicBackend {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model_hint(&self) -> Option<&str> {
        Some(&self.model)
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ClientError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            model = %self.model,
            max_tokens,
            prompt_chars = prompt.chars().count(),
            "sending messages request"
        );

        let resp = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = resp.json().await?;
        match parsed.content.into_iter().next() {
            Some(block) if !block.text.is_empty() => Ok(block.text),
            _ => Err(ClientError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = AnthropicBackend::new("key".into(), DEFAULT_MODEL.into())
            .with_base_url("http://127.0.0.1:9999/");
        assert_eq!(backend.base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn name_and_model_hint() {
        let backend = AnthropicBackend::new("key".into(), DEFAULT_MODEL.into());
        assert_eq!(backend.name(), "anthropic");
        assert_eq!(backend.model_hint(), Some(DEFAULT_MODEL));
    }

    #[test]
    fn request_serializes_single_user_message() {
        let req = MessagesRequest {
            model: DEFAULT_MODEL,
            max_tokens: 2500,
            messages: vec![Message {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["max_tokens"], 2500);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn response_first_block_is_used() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"first"},{"type":"text","text":"second"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.content[0].text, "first");
    }

    #[test]
    fn error_body_message_is_extracted() {
        let parsed: ErrorResponse = serde_json::from_str(
            r#"{"type":"error","error":{"type":"rate_limit_error","message":"slow down"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.error.message, "slow down");
    }
}
