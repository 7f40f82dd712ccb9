pub mod analyzer;
pub mod keywords;
pub mod scoring;

pub use analyzer::ProfileAnalyzer;
pub use keywords::KeywordExtractor;
pub use scoring::{ScoringEngine, ScoringRules};
