use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CLAUDE_MODEL;
use crate::error::{Error, Result};
use crate::llm::prompts::{AdviceRequest, SYSTEM_PROMPT};
use crate::llm::provider::{retry_after_secs, LLMProvider};

pub struct ClaudeProvider {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ClaudeMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    error: Option<ClaudeError>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ClaudeError {
    message: String,
}

impl ClaudeProvider {
    pub fn new(api_key: String, model: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string()),
        })
    }
}

fn extract_text(response: ClaudeResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(Error::LLMApi(error.message));
    }

    let text = response
        .content
        .into_iter()
        .filter(|c| c.content_type == "text")
        .filter_map(|c| c.text)
        .collect::<Vec<_>>()
        .join("");

    if text.trim().is_empty() {
        return Err(Error::ParseError("Empty response from Claude".to_string()));
    }

    Ok(text)
}

#[async_trait]
impl LLMProvider for ClaudeProvider {
    async fn generate_advice(&self, request: &AdviceRequest) -> Result<String> {
        let prompt = request.to_prompt();
        tracing::debug!("Sending ~{} tokens to Claude", request.estimate_tokens());

        let request_body = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: 2048,
            system: Some(SYSTEM_PROMPT.to_string()),
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited(retry_after_secs(response.headers())));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LLMApi(format!(
                "Claude API error ({}): {}",
                status, body
            )));
        }

        let result: ClaudeResponse = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("Failed to parse Claude response: {}", e)))?;

        extract_text(result)
    }

    fn name(&self) -> &str {
        "Claude"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_joins_text_blocks() {
        let response: ClaudeResponse = serde_json::from_str(
            r#"{"content": [
                {"type": "text", "text": "1. Data Engineer\n"},
                {"type": "tool_use"},
                {"type": "text", "text": "2. ML Engineer"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "1. Data Engineer\n2. ML Engineer");
    }

    #[test]
    fn test_extract_text_errors() {
        let response: ClaudeResponse =
            serde_json::from_str(r#"{"error": {"message": "invalid x-api-key"}}"#).unwrap();
        assert!(matches!(extract_text(response), Err(Error::LLMApi(m)) if m == "invalid x-api-key"));

        let response: ClaudeResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert!(matches!(extract_text(response), Err(Error::ParseError(_))));
    }

    #[test]
    fn test_request_serialization() {
        let body = ClaudeRequest {
            model: DEFAULT_CLAUDE_MODEL.to_string(),
            max_tokens: 2048,
            system: None,
            messages: vec![ClaudeMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("system").is_none());
        assert_eq!(json["messages"][0]["role"], "user");
    }
}
