use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_TOP_KEYWORDS: usize = 10;
pub const DEFAULT_PROMPT_CHAR_LIMIT: usize = 1500;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Claude,
}

impl ProviderKind {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "claude" | "anthropic" => Ok(ProviderKind::Claude),
            other => Err(Error::Config(format!(
                "AI_PROVIDER must be 'gemini' or 'claude', got '{}'",
                other
            ))),
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => DEFAULT_GEMINI_MODEL,
            ProviderKind::Claude => DEFAULT_CLAUDE_MODEL,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Gemini => write!(f, "Gemini"),
            ProviderKind::Claude => write!(f, "Claude"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub provider: Option<ProviderKind>,
    pub model: Option<String>,
    pub max_attempts: u32,
    pub prompt_char_limit: usize,
    pub top_keywords: usize,
    pub vocabulary_path: Option<PathBuf>,
    pub stop_words_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_api_key = non_empty("GEMINI_API_KEY");
        let anthropic_api_key = non_empty("ANTHROPIC_API_KEY");

        let provider = match non_empty("AI_PROVIDER") {
            Some(value) => Some(ProviderKind::parse(&value)?),
            None if gemini_api_key.is_some() => Some(ProviderKind::Gemini),
            None if anthropic_api_key.is_some() => Some(ProviderKind::Claude),
            None => None,
        };

        let model = non_empty("AI_MODEL");

        let max_attempts = non_empty("AI_MAX_ATTEMPTS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(2)
            .max(1);

        let prompt_char_limit = non_empty("PROMPT_CHAR_LIMIT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PROMPT_CHAR_LIMIT);

        let top_keywords = non_empty("TOP_KEYWORDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOP_KEYWORDS);

        let vocabulary_path = non_empty("VOCABULARY_PATH").map(PathBuf::from);
        let stop_words_path = non_empty("STOP_WORDS_PATH").map(PathBuf::from);

        Ok(Self {
            gemini_api_key,
            anthropic_api_key,
            provider,
            model,
            max_attempts,
            prompt_char_limit,
            top_keywords,
            vocabulary_path,
            stop_words_path,
        })
    }

    /// API key for the selected provider, if one is configured.
    pub fn provider_api_key(&self) -> Option<&str> {
        match self.provider? {
            ProviderKind::Gemini => self.gemini_api_key.as_deref(),
            ProviderKind::Claude => self.anthropic_api_key.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    pub vocabulary_path: Option<PathBuf>,
    pub stop_words_path: Option<PathBuf>,
}

impl From<&Config> for AnalyzerConfig {
    fn from(config: &Config) -> Self {
        Self {
            vocabulary_path: config.vocabulary_path.clone(),
            stop_words_path: config.stop_words_path.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub provider: Option<ProviderKind>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub max_attempts: u32,
    pub prompt_char_limit: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            provider: None,
            api_key: None,
            model: None,
            max_attempts: 2,
            prompt_char_limit: DEFAULT_PROMPT_CHAR_LIMIT,
        }
    }
}

impl From<&Config> for AdvisorConfig {
    fn from(config: &Config) -> Self {
        Self {
            provider: config.provider,
            api_key: config.provider_api_key().map(str::to_string),
            model: config.model.clone(),
            max_attempts: config.max_attempts,
            prompt_char_limit: config.prompt_char_limit,
        }
    }
}
