use serde::{Deserialize, Serialize};
use super::keyword::KeywordFrequency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tip {
    #[serde(rename = "Add more content")]
    AddMoreContent,
    #[serde(rename = "Include more skills")]
    IncludeMoreSkills,
    #[serde(rename = "Add achievements")]
    AddAchievements,
}

impl Tip {
    pub fn message(&self) -> &'static str {
        match self {
            Tip::AddMoreContent => "Add more content",
            Tip::IncludeMoreSkills => "Include more skills",
            Tip::AddAchievements => "Add achievements",
        }
    }
}

impl std::fmt::Display for Tip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub keyword_frequency: KeywordFrequency,
    /// Title-cased, one entry per distinct skill.
    pub matched_skills: Vec<String>,
    /// Always within 0..=100.
    pub score: u8,
    pub tips: Vec<Tip>,
    pub roles: Vec<String>,
    pub word_count: usize,
}

impl AnalysisResult {
    /// Result for empty or whitespace-only input.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_frequency.is_empty()
            && self.matched_skills.is_empty()
            && self.tips.is_empty()
            && self.roles.is_empty()
            && self.score == 0
    }

    pub fn top_keywords(&self, k: usize) -> Vec<String> {
        self.keyword_frequency.top_keywords(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_serializes_as_message() {
        let json = serde_json::to_string(&vec![Tip::AddMoreContent, Tip::AddAchievements]).unwrap();
        assert_eq!(json, r#"["Add more content","Add achievements"]"#);
        assert_eq!(Tip::IncludeMoreSkills.to_string(), "Include more skills");
    }

    #[test]
    fn test_empty_result() {
        let result = AnalysisResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.score, 0);
        assert!(result.top_keywords(10).is_empty());
    }
}
