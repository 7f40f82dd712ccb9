use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("NLP engine error: {0}")]
    Nlp(String),

    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    #[error("Unsupported profile source: {0}")]
    UnsupportedSource(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited(_) | Error::Network(_))
    }

    /// Short hint telling the user what to do about the failure.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::LLMApi(_) | Error::ParseError(_) => {
                "Check the API key and model name, or rerun with --no-ai"
            }
            Error::RateLimited(_) => "Wait a moment and retry, or rerun with --no-ai",
            Error::Network(_) => "Check your internet connection",
            Error::Config(_) => "Fix the environment variable or CLI flag named above",
            Error::Nlp(_) => "Check STOP_WORDS_PATH / --stop-words points to a readable file",
            Error::PdfExtraction(_) => "Try a different file or paste the profile text manually",
            Error::UnsupportedSource(_) => {
                "Copy the profile text manually and pass it with --text or --file"
            }
            Error::Serialization(_) => "Check that the vocabulary file is valid JSON",
            Error::Io(_) => "Check the file path and permissions",
            Error::InvalidHeader(_) => "Check the API key for stray whitespace or control characters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(Error::RateLimited(5).is_retryable());
        assert!(!Error::LLMApi("bad key".to_string()).is_retryable());
        assert!(!Error::Config("missing".to_string()).is_retryable());
    }

    #[test]
    fn test_unsupported_source_hint_mentions_manual_paste() {
        let err = Error::UnsupportedSource("linkedin".to_string());
        assert!(err.remediation().contains("manually"));
    }
}
