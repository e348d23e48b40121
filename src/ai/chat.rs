//! HTTP client for OpenAI-compatible chat completion APIs.
//!
//! The default endpoint is Groq, but any service exposing
//! `POST {base}/chat/completions` with bearer authentication works.

use crate::errors::{AIError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Message,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Client for a chat completion API.
pub struct ChatClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ChatClient {
    /// Creates a new chat client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://api.groq.com/openai/v1")
    /// * `api_key` - Bearer token sent with every request
    /// * `timeout` - Upper bound for a whole request
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AIError::Unreachable)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Sends a chat completion request and returns the first choice's text.
    ///
    /// # Arguments
    ///
    /// * `model` - Name of the chat model (e.g., "llama3-8b-8192")
    /// * `messages` - Conversation messages
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is not reachable or the request times out
    /// - The credentials are rejected
    /// - Model is not found
    /// - The response is not a well-formed completion
    pub fn chat(&self, model: &str, messages: &[Message]) -> AppResult<String> {
        debug!("Sending chat request with model: {}", model);

        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest { model, messages };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(AIError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => AIError::Unauthorized(status.as_u16()),
                404 => AIError::ModelNotFound(model.to_string()),
                _ => AIError::InvalidResponse(format!("HTTP {}: {}", status, error_text)),
            }
            .into());
        }

        // The timeout also bounds reading the body
        let chat_response: ChatResponse = response.json().map_err(|e| {
            if e.is_timeout() {
                AIError::Unreachable(e)
            } else {
                AIError::InvalidResponse(format!("Failed to parse chat response: {}", e))
            }
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AIError::InvalidResponse("Response contained no choices".to_string()))?;

        debug!("Received chat response ({} chars)", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let user = Message::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");
    }

    #[test]
    fn test_chat_client_creation_trims_trailing_slash() {
        let client =
            ChatClient::new("http://localhost:8080/v1/", "key", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_request_serialization() {
        let messages = vec![Message::user("hi")];
        let request = ChatRequest {
            model: "llama3-8b-8192",
            messages: &messages,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }
}
