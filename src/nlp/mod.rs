pub mod lemma;
pub mod rule_based;
pub mod stopwords;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use rule_based::RuleBasedNlp;
pub use stopwords::StopWords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Product,
    Quantity,
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityLabel::Person => write!(f, "PERSON"),
            EntityLabel::Organization => write!(f, "ORG"),
            EntityLabel::Product => write!(f, "PRODUCT"),
            EntityLabel::Quantity => write!(f, "QUANTITY"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NlpDocument {
    /// Lemmatized, lowercased, alphabetic, non-stop-word tokens longer than
    /// two characters, in text order.
    pub content_tokens: Vec<String>,
    pub noun_phrases: Vec<String>,
    pub entities: Vec<Entity>,
}

// Built once at startup; a missing word list fails at construction.
pub trait NlpEngine: Send + Sync {
    fn process(&self, text: &str) -> Result<NlpDocument>;
    fn is_stop_word(&self, word: &str) -> bool;
    fn name(&self) -> &str;
}
