use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_GEMINI_MODEL;
use crate::error::{Error, Result};
use crate::llm::prompts::{AdviceRequest, SYSTEM_PROMPT};
use crate::llm::provider::{retry_after_secs, LLMProvider};

pub struct GeminiProvider {
    client: Client,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

impl GeminiProvider {
    pub fn new(api_key: &str, model: Option<String>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert("x-goog-api-key", header::HeaderValue::from_str(api_key)?);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            model: model.unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

fn text_content(text: String, role: Option<&str>) -> GeminiContent {
    GeminiContent {
        role: role.map(str::to_string),
        parts: vec![GeminiPart { text: Some(text) }],
    }
}

fn extract_text(response: GeminiResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(Error::LLMApi(error.message));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::ParseError("Gemini returned no candidates".to_string()))?;

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(Error::ParseError(format!(
            "Empty response from Gemini (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn generate_advice(&self, request: &AdviceRequest) -> Result<String> {
        tracing::debug!("Sending ~{} tokens to Gemini", request.estimate_tokens());

        let body = GeminiRequest {
            contents: vec![text_content(request.to_prompt(), Some("user"))],
            system_instruction: Some(text_content(SYSTEM_PROMPT.to_string(), None)),
            generation_config: GenerationConfig {
                max_output_tokens: 2048,
                temperature: 0.7,
            },
        };

        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::RateLimited(retry_after_secs(response.headers())));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LLMApi(format!(
                "Gemini API error ({}): {}",
                status, body
            )));
        }

        let result: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::ParseError(format!("Failed to parse Gemini response: {}", e)))?;

        extract_text(result)
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_model() {
        let provider = GeminiProvider::new("key", None).unwrap();
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_invalid_api_key_header() {
        let err = GeminiProvider::new("bad\nkey", None).err().unwrap();
        assert!(matches!(err, Error::InvalidHeader(_)));
    }

    #[test]
    fn test_request_shape() {
        let body = GeminiRequest {
            contents: vec![text_content("prompt".to_string(), Some("user"))],
            system_instruction: None,
            generation_config: GenerationConfig {
                max_output_tokens: 10,
                temperature: 0.5,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 10);
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_extract_text() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "Roles: "}, {"text": "Data Engineer"}]}, "finishReason": "STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Roles: Data Engineer");
    }

    #[test]
    fn test_extract_text_failures() {
        let blocked: GeminiResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        match extract_text(blocked) {
            Err(Error::ParseError(msg)) => assert!(msg.contains("SAFETY")),
            other => panic!("unexpected: {:?}", other),
        }

        let empty: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(extract_text(empty), Err(Error::ParseError(_))));

        let error: GeminiResponse =
            serde_json::from_str(r#"{"error": {"code": 400, "message": "API key not valid"}}"#).unwrap();
        assert!(matches!(extract_text(error), Err(Error::LLMApi(_))));
    }
}
