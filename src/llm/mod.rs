//! Reqwest-based model clients sharing one `analyze(prompt) -> text` contract.

mod gemini;
mod openai;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, ReviewError};

pub use gemini::GeminiClient;
pub use openai::{ChatMessage, OpenAiClient, Role};

/// One external language-model service.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Label written to the `LLM` column of the report
    fn label(&self) -> &str;

    /// Send `prompt` once and return the trimmed reply text.
    async fn analyze(&self, prompt: &str) -> Result<String>;
}

/// Gemini first, then ChatGPT; this order fixes the report row order.
pub fn clients_from_config(cfg: &Config) -> Result<Vec<Box<dyn ModelClient>>> {
    Ok(vec![
        Box::new(GeminiClient::from_config(cfg)?),
        Box::new(OpenAiClient::from_config(cfg)?),
    ])
}

fn http_client(service: &str, timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ReviewError::transport(service, e))
}

/// Send `request` and return the body of a 2xx response.
async fn send(service: &str, request: RequestBuilder) -> Result<String> {
    let resp = request
        .send()
        .await
        .map_err(|e| ReviewError::transport(service, e))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ReviewError::transport(service, e))?;
    debug!(service, %status, bytes = body.len(), "model response received");

    if !status.is_success() {
        return Err(ReviewError::Service {
            service: service.to_string(),
            status,
            body,
        });
    }
    Ok(body)
}
