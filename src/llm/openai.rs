use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{http_client, send, ModelClient};
use crate::config::Config;
use crate::error::{Result, ReviewError};

const LABEL: &str = "ChatGPT";
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// OpenAI-compatible Chat Completions client (non-streaming)
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let api_key = cfg.require("OPENAI_API_KEY")?;
        let api_base_url = cfg.get("API_BASE_URL").unwrap_or_else(|| "default".into());
        let model = cfg.get("OPENAI_MODEL").unwrap_or_else(|| "gpt-5.1".into());
        Self::new(&api_base_url, &model, api_key, cfg.request_timeout())
    }

    /// `base_url` of `default` means the public OpenAI endpoint; `/v1` is
    /// appended when missing.
    pub fn new(base_url: &str, model: &str, api_key: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http_client(LABEL, timeout)?,
            base_url: normalize_base_url(base_url),
            model: model.to_string(),
            api_key,
            temperature: 0.0,
        })
    }
}

fn normalize_base_url(api_base_url: &str) -> String {
    if api_base_url == "default" {
        return "https://api.openai.com/v1".to_string();
    }
    let trimmed = api_base_url.trim_end_matches('/');
    if !trimmed.ends_with("/v1") && !trimmed.contains("/v1/") {
        format!("{}/v1", trimmed)
    } else {
        trimmed.to_string()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage { role: Role::System, content: SYSTEM_PROMPT.into() },
        ChatMessage { role: Role::User, content: prompt.to_string() },
    ]
}

/// `choices[0].message.content`, trimmed.
fn reply_text(body: &str) -> Result<String> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ReviewError::response_shape(LABEL, e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| ReviewError::response_shape(LABEL, "no content in choices[0].message"))
}

#[async_trait]
impl ModelClient for OpenAiClient {
    fn label(&self) -> &str {
        LABEL
    }

    async fn analyze(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, chars = prompt.len(), "sending chat completion request");
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: messages(prompt),
            temperature: self.temperature,
        };
        let request = self.http.post(url).bearer_auth(&self.api_key).json(&body);
        let body = send(LABEL, request).await?;
        reply_text(&body)
    }
}
