pub mod provider;
pub mod claude;
pub mod gemini;
pub mod prompts;
pub mod advisor;

pub use provider::LLMProvider;
pub use claude::ClaudeProvider;
pub use gemini::GeminiProvider;
pub use prompts::AdviceRequest;
pub use advisor::CareerAdvisor;
