use crate::models::analysis::Tip;

pub const MAX_SCORE: u8 = 100;

pub struct ScoringEngine {
    rules: ScoringRules,
}

#[derive(Debug, Clone)]
pub struct ScoringRules {
    pub words_per_point: usize,
    pub points_per_skill: usize,
    pub keywords_per_point: usize,
    pub min_words: usize,
    pub min_skills: usize,
    /// Lowercase phrases that count as evidence of concrete achievements.
    pub achievement_markers: Vec<String>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            words_per_point: 10,
            points_per_skill: 5,
            keywords_per_point: 5,
            min_words: 100,
            min_skills: 3,
            achievement_markers: vec![
                "achieved".to_string(),
                "led".to_string(),
                "improved".to_string(),
            ],
        }
    }
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::with_rules(ScoringRules::default())
    }

    pub fn with_rules(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Heuristic profile score, clamped to 0..=100.
    pub fn score(&self, word_count: usize, skill_count: usize, distinct_keywords: usize) -> u8 {
        let length_points = word_count.checked_div(self.rules.words_per_point).unwrap_or(0);
        let skill_points = skill_count.saturating_mul(self.rules.points_per_skill);
        let keyword_points = distinct_keywords
            .checked_div(self.rules.keywords_per_point)
            .unwrap_or(0);

        let total = length_points
            .saturating_add(skill_points)
            .saturating_add(keyword_points);

        total.min(MAX_SCORE as usize) as u8
    }

    /// Improvement tips in fixed order. `text_lower` must be lowercased.
    pub fn tips(&self, text_lower: &str, word_count: usize, skill_count: usize) -> Vec<Tip> {
        let mut tips = Vec::new();

        if word_count < self.rules.min_words {
            tips.push(Tip::AddMoreContent);
        }

        if skill_count < self.rules.min_skills {
            tips.push(Tip::IncludeMoreSkills);
        }

        let has_achievements = self
            .rules
            .achievement_markers
            .iter()
            .any(|marker| text_lower.contains(marker.as_str()));
        if !has_achievements {
            tips.push(Tip::AddAchievements);
        }

        tips
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
