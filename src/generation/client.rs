//! OpenAI-compatible chat completions client.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::generation::{GenerationError, TextGenerator};
use crate::models::config::OpenAiConfig;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice, if any.
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// Client for the `chat/completions` endpoint, always requesting a JSON
/// object reply.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(config: &OpenAiConfig) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(concat!("pushkind-wardrobe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
        })
    }

    async fn send_request(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(classify_status(status, body));
        }

        let response = res
            .json::<ChatResponse>()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        response.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

impl TextGenerator for OpenAiClient {
    async fn generate_json(&self, prompt: &str) -> Result<String, GenerationError> {
        self.send_request(prompt).await
    }
}

/// Map a non-success status onto a [`GenerationError`].
fn classify_status(status: StatusCode, body: String) -> GenerationError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited,
        StatusCode::UNAUTHORIZED => GenerationError::InvalidApiKey,
        s => GenerationError::Http {
            status: s.as_u16(),
            body,
        },
    }
}

fn map_reqwest_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Transport(e.to_string())
    }
}
