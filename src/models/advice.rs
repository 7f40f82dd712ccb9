use serde::{Deserialize, Serialize};

/// Outcome of the optional AI-advice stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Advice {
    Insights { provider: String, text: String },
    Unavailable { reason: String },
}

impl Advice {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Advice::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Advice::Insights { .. })
    }
}
