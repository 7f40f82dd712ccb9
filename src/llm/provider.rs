use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::Result;
use crate::llm::prompts::AdviceRequest;

const DEFAULT_RETRY_AFTER_SECS: u64 = 5;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Free-text career advice for the request; returned as-is to the user.
    async fn generate_advice(&self, request: &AdviceRequest) -> Result<String>;
    fn name(&self) -> &str;
}

/// Seconds to wait according to a `Retry-After` header.
pub(crate) fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
