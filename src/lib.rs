pub mod config;
pub mod error;
pub mod models;
pub mod nlp;
pub mod taxonomy;
pub mod analysis;
pub mod llm;
pub mod input;
pub mod report;

pub use config::{AdvisorConfig, AnalyzerConfig, Config, ProviderKind};
pub use error::{Error, Result};
pub use analysis::ProfileAnalyzer;
pub use input::{ProfileSource, SAMPLE_PROFILE};
pub use llm::{CareerAdvisor, ClaudeProvider, GeminiProvider, LLMProvider};
pub use models::{Advice, AnalysisResult, Tip};
pub use nlp::{NlpEngine, RuleBasedNlp};
pub use report::{OutputFormat, ProfileReport};
pub use taxonomy::Taxonomy;
