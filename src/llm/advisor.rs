use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{AdvisorConfig, ProviderKind};
use crate::error::{Error, Result};
use crate::llm::{AdviceRequest, ClaudeProvider, GeminiProvider, LLMProvider};
use crate::models::{Advice, AnalysisResult};

const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(10);

const NO_PROVIDER_HINT: &str =
    "AI insights unavailable: set GEMINI_API_KEY or ANTHROPIC_API_KEY to enable them";

// Never fails; problems become Advice::Unavailable.
pub struct CareerAdvisor {
    provider: Option<Arc<dyn LLMProvider>>,
    init_error: Option<String>,
    max_attempts: u32,
    prompt_char_limit: usize,
    backoff: Duration,
    max_backoff: Duration,
    show_progress: bool,
}

impl CareerAdvisor {
    pub fn new(provider: Option<Arc<dyn LLMProvider>>, config: &AdvisorConfig) -> Self {
        Self {
            provider,
            init_error: None,
            max_attempts: config.max_attempts.max(1),
            prompt_char_limit: config.prompt_char_limit,
            backoff: DEFAULT_BACKOFF,
            max_backoff: MAX_BACKOFF,
            show_progress: true,
        }
    }

    pub fn disabled() -> Self {
        Self::new(None, &AdvisorConfig::default())
    }

    pub fn from_config(config: &AdvisorConfig) -> Self {
        match build_provider(config) {
            Ok(provider) => Self::new(provider, config),
            Err(e) => {
                tracing::warn!("Could not initialize AI provider: {}", e);
                let mut advisor = Self::new(None, config);
                advisor.init_error = Some(unavailable_reason(&e));
                advisor
            }
        }
    }

    /// Linear backoff per attempt, never longer than `max_backoff`.
    pub fn with_backoff(mut self, backoff: Duration, max_backoff: Duration) -> Self {
        self.backoff = backoff;
        self.max_backoff = max_backoff;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    pub async fn advise(&self, analysis: &AnalysisResult, text: &str) -> Advice {
        let Some(provider) = self.provider.as_ref() else {
            return Advice::unavailable(self.init_error.as_deref().unwrap_or(NO_PROVIDER_HINT));
        };

        let request =
            AdviceRequest::with_limit(text, &analysis.matched_skills, self.prompt_char_limit);

        let pb = self.spinner(provider.name());
        let outcome = self.request_with_retry(provider.as_ref(), &request).await;
        pb.finish_and_clear();

        match outcome {
            Ok(text) => Advice::Insights {
                provider: provider.name().to_string(),
                text,
            },
            Err(e) => {
                tracing::warn!("AI advice failed: {}", e);
                Advice::unavailable(unavailable_reason(&e))
            }
        }
    }

    async fn request_with_retry(
        &self,
        provider: &dyn LLMProvider,
        request: &AdviceRequest,
    ) -> Result<String> {
        let mut attempt = 1;
        loop {
            match provider.generate_advice(request).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    let delay = self.backoff_for(&e, attempt);
                    tracing::info!(
                        "{} request failed ({}), retrying in {:?} (attempt {}/{})",
                        provider.name(),
                        e,
                        delay,
                        attempt + 1,
                        self.max_attempts
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn backoff_for(&self, error: &Error, attempt: u32) -> Duration {
        let linear = self.backoff * attempt;
        let wait = match error {
            Error::RateLimited(secs) => linear.max(Duration::from_secs(*secs)),
            _ => linear,
        };
        wait.min(self.max_backoff)
    }

    fn spinner(&self, provider_name: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Generating AI insights with {}...", provider_name));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

fn unavailable_reason(error: &Error) -> String {
    format!("AI insights unavailable: {}. {}", error, error.remediation())
}

fn build_provider(config: &AdvisorConfig) -> Result<Option<Arc<dyn LLMProvider>>> {
    let (Some(kind), Some(api_key)) = (config.provider, config.api_key.as_deref()) else {
        return Ok(None);
    };

    let model = config.model.clone();
    let provider: Arc<dyn LLMProvider> = match kind {
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(api_key, model)?),
        ProviderKind::Claude => Arc::new(ClaudeProvider::new(api_key.to_string(), model)?),
    };
    tracing::debug!("Using {} for AI insights", kind);
    Ok(Some(provider))
}
