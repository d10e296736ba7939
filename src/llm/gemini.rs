use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{http_client, send, ModelClient};
use crate::config::Config;
use crate::error::{Result, ReviewError};

const LABEL: &str = "Gemini";

/// Gemini `generateContent` client
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let api_key = cfg.require("GEMINI_API_KEY")?;
        let base_url = cfg
            .get("GEMINI_API_BASE")
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".into());
        let model = cfg
            .get("GEMINI_MODEL")
            .unwrap_or_else(|| "models/gemini-flash-latest".into());
        Self::new(&base_url, &model, api_key, cfg.request_timeout())
    }

    /// `model` may be given with or without the `models/` prefix.
    pub fn new(base_url: &str, model: &str, api_key: String, timeout: Duration) -> Result<Self> {
        let model = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        };
        Ok(Self {
            http: http_client(LABEL, timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

fn request_body(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
    }
}

/// `candidates[0].content.parts[0].text`, trimmed.
fn reply_text(body: &str) -> Result<String> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ReviewError::response_shape(LABEL, e.to_string()))?;

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text.trim().to_string())
        .ok_or_else(|| ReviewError::response_shape(LABEL, "no text in candidates[0].content.parts[0]"))
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn label(&self) -> &str {
        LABEL
    }

    async fn analyze(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, chars = prompt.len(), "sending Gemini request");
        let request = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt));
        let body = send(LABEL, request).await?;
        reply_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(model: &str) -> GeminiClient {
        GeminiClient::new(
            "https://example.test/v1beta/",
            model,
            "k".into(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn endpoint_adds_models_prefix() {
        assert_eq!(
            client("gemini-flash-latest").endpoint(),
            "https://example.test/v1beta/models/gemini-flash-latest:generateContent"
        );
        assert_eq!(
            client("models/gemini-flash-latest").endpoint(),
            "https://example.test/v1beta/models/gemini-flash-latest:generateContent"
        );
    }

    #[test]
    fn body_nests_prompt_in_contents_parts() {
        let value = serde_json::to_value(request_body("hello")).unwrap();
        assert_eq!(value, serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn unwraps_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  VERDETTO: ACCEPTED\nMOTIVO: ok \n"}],"role":"model"}}]}"#;
        assert_eq!(reply_text(body).unwrap(), "VERDETTO: ACCEPTED\nMOTIVO: ok");
    }

    #[test]
    fn empty_candidates_is_shape_error() {
        let err = reply_text(r#"{"candidates":[]}"#).unwrap_err();
        assert!(matches!(err, ReviewError::ResponseShape { .. }));
    }

    #[test]
    fn missing_envelope_is_shape_error() {
        let err = reply_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap_err();
        assert!(matches!(err, ReviewError::ResponseShape { .. }));
        assert!(reply_text("not json").is_err());
    }
}
