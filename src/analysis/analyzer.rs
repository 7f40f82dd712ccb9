use std::sync::Arc;

use crate::analysis::keywords::KeywordExtractor;
use crate::analysis::scoring::{ScoringEngine, ScoringRules};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::models::analysis::AnalysisResult;
use crate::nlp::{NlpDocument, NlpEngine, RuleBasedNlp};
use crate::taxonomy::Taxonomy;

/// Turns raw profile text into keywords, skills, a score, tips and roles.
pub struct ProfileAnalyzer {
    nlp: Arc<dyn NlpEngine>,
    taxonomy: Arc<Taxonomy>,
    keyword_extractor: KeywordExtractor,
    scoring_engine: ScoringEngine,
}

impl ProfileAnalyzer {
    pub fn new(nlp: impl NlpEngine + 'static, taxonomy: Taxonomy) -> Self {
        Self::with_rules(nlp, taxonomy, ScoringRules::default())
    }

    pub fn with_rules(nlp: impl NlpEngine + 'static, taxonomy: Taxonomy, rules: ScoringRules) -> Self {
        Self {
            nlp: Arc::new(nlp),
            taxonomy: Arc::new(taxonomy),
            keyword_extractor: KeywordExtractor::new(),
            scoring_engine: ScoringEngine::with_rules(rules),
        }
    }

    // Fail fast: the analyzer cannot run without its word lists
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let nlp = match &config.stop_words_path {
            Some(path) => RuleBasedNlp::from_stop_words_file(path)?,
            None => RuleBasedNlp::new(),
        };

        let taxonomy = match &config.vocabulary_path {
            Some(path) => Taxonomy::with_extension_file(path)?,
            None => Taxonomy::new(),
        };

        tracing::info!("Profile analyzer ready ({} NLP engine)", nlp.name());
        Ok(Self::new(nlp, taxonomy))
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// `None` is treated like empty text.
    pub fn analyze_optional(&self, text: Option<&str>) -> AnalysisResult {
        text.map(|t| self.analyze(t)).unwrap_or_default()
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            tracing::debug!("Empty profile text, returning empty analysis");
            return AnalysisResult::empty();
        }

        let doc = match self.nlp.process(text) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("NLP processing failed, continuing without tokens: {}", e);
                NlpDocument::default()
            }
        };

        let text_lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();

        let keyword_frequency = self
            .keyword_extractor
            .extract(&doc, &self.taxonomy, self.nlp.as_ref());

        let matched_skills = self.taxonomy.match_skills(&text_lower);

        let score = self
            .scoring_engine
            .score(word_count, matched_skills.len(), keyword_frequency.len());

        let tips = self
            .scoring_engine
            .tips(&text_lower, word_count, matched_skills.len());

        let roles = self.taxonomy.suggest_roles(&text_lower);

        tracing::debug!(
            "Analyzed {} words: {} keywords, {} skills, score {}",
            word_count,
            keyword_frequency.len(),
            matched_skills.len(),
            score
        );

        AnalysisResult {
            keyword_frequency,
            matched_skills,
            score,
            tips,
            roles,
            word_count,
        }
    }
}

impl Default for ProfileAnalyzer {
    fn default() -> Self {
        Self::new(RuleBasedNlp::new(), Taxonomy::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::input::SAMPLE_PROFILE;
    use crate::models::analysis::Tip;

    struct BrokenNlp;

    impl NlpEngine for BrokenNlp {
        fn process(&self, _text: &str) -> Result<NlpDocument> {
            Err(Error::Nlp("model crashed".to_string()))
        }

        fn is_stop_word(&self, _word: &str) -> bool {
            false
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_and_missing_input() {
        let analyzer = ProfileAnalyzer::default();
        for result in [
            analyzer.analyze(""),
            analyzer.analyze("   \n\t "),
            analyzer.analyze_optional(None),
        ] {
            assert!(result.is_empty());
            assert_eq!(result, AnalysisResult::empty());
        }
    }

    #[test]
    fn test_sample_profile_end_to_end() {
        let analyzer = ProfileAnalyzer::default();
        let result = analyzer.analyze(SAMPLE_PROFILE);

        for skill in ["Python", "Aws", "Machine Learning", "Leadership", "Project Management"] {
            assert!(
                result.matched_skills.contains(&skill.to_string()),
                "missing skill {}",
                skill
            );
        }
        assert!(!result.tips.contains(&Tip::AddAchievements));
        assert_eq!(result.tips, vec![Tip::AddMoreContent]);
        assert_eq!(
            result.roles,
            vec!["Software Developer", "Data Scientist", "Project Manager"]
        );
        assert_eq!(result.word_count, 33);
        // 33 / 10 + 8 skills * 5, plus the keyword term
        assert!(result.score >= 43 && result.score <= 100);

        let top = result.top_keywords(3);
        assert_eq!(top[0], "Python");
        assert!(result.keyword_frequency.ranked()[0].technical);
    }

    #[test]
    fn test_skills_are_case_insensitive_and_deduplicated() {
        let analyzer = ProfileAnalyzer::default();
        let result = analyzer.analyze("Python python PYTHON developer");
        assert_eq!(result.matched_skills, vec!["Python"]);
    }

    #[test]
    fn test_roles_follow_triggers() {
        let analyzer = ProfileAnalyzer::default();
        let result = analyzer.analyze("I am a Python developer with leadership experience");
        assert!(result.roles.contains(&"Software Developer".to_string()));
        assert!(result.roles.contains(&"Project Manager".to_string()));
        assert!(!result.roles.contains(&"Data Scientist".to_string()));
    }

    #[test]
    fn test_content_tip_boundary() {
        let analyzer = ProfileAnalyzer::default();

        let short = analyzer.analyze(&words(99));
        assert_eq!(short.word_count, 99);
        assert!(short.tips.contains(&Tip::AddMoreContent));

        let long = analyzer.analyze(&words(100));
        assert_eq!(long.word_count, 100);
        assert!(!long.tips.contains(&Tip::AddMoreContent));
    }

    #[test]
    fn test_achievement_tip() {
        let analyzer = ProfileAnalyzer::default();
        for text in ["ACHIEVED record sales", "Improved uptime", "she LED the rollout"] {
            assert!(!analyzer.analyze(text).tips.contains(&Tip::AddAchievements), "{}", text);
        }
        assert!(analyzer
            .analyze("responsible for daily operations")
            .tips
            .contains(&Tip::AddAchievements));
    }

    #[test]
    fn test_score_is_bounded() {
        let analyzer = ProfileAnalyzer::default();
        let huge = format!("{} {}", SAMPLE_PROFILE, words(3_000));
        assert_eq!(analyzer.analyze(&huge).score, 100);
        assert_eq!(analyzer.analyze("hello").score, 0);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = ProfileAnalyzer::default();
        let first = analyzer.analyze(SAMPLE_PROFILE);
        let second = analyzer.analyze(SAMPLE_PROFILE);
        assert_eq!(first, second);
        assert_eq!(first.top_keywords(10), second.top_keywords(10));
    }

    #[test]
    fn test_technical_keywords_win_ties() {
        let analyzer = ProfileAnalyzer::default();
        let result = analyzer.analyze("mentoring docker");
        let ranked = result.keyword_frequency.ranked();

        for (i, a) in ranked.iter().enumerate() {
            for b in &ranked[i + 1..] {
                if a.count == b.count {
                    assert!(a.technical || !b.technical, "{} ranked above {}", a.keyword, b.keyword);
                }
            }
        }
        assert_eq!(result.top_keywords(1), vec!["Docker"]);
    }

    #[test]
    fn test_possessive_keywords_are_counted() {
        let result = ProfileAnalyzer::default()
            .analyze("Improved Python's test suite and Google's kubernetes platform");

        assert!(result.keyword_frequency.count("python") > 0);
        assert!(result.keyword_frequency.count("google") > 0);
        assert!(result.matched_skills.contains(&"Python".to_string()));
    }

    #[test]
    fn test_nlp_failure_degrades_to_no_keywords() {
        let analyzer = ProfileAnalyzer::new(BrokenNlp, Taxonomy::new());
        let result = analyzer.analyze("Python and leadership, led a team");
        assert!(result.keyword_frequency.is_empty());
        assert_eq!(result.matched_skills, vec!["Python", "Leadership"]);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_from_config_fails_fast_on_bad_paths() {
        let config = AnalyzerConfig {
            stop_words_path: Some("/missing/stop_words.txt".into()),
            vocabulary_path: None,
        };
        assert!(matches!(
            ProfileAnalyzer::from_config(&config),
            Err(Error::Nlp(_))
        ));

        let config = AnalyzerConfig {
            stop_words_path: None,
            vocabulary_path: Some("/missing/vocabulary.json".into()),
        };
        assert!(matches!(
            ProfileAnalyzer::from_config(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_analyzer_is_shareable_across_threads() {
        let analyzer = Arc::new(ProfileAnalyzer::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                std::thread::spawn(move || analyzer.analyze(SAMPLE_PROFILE).score)
            })
            .collect();

        let scores: Vec<u8> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(scores.windows(2).all(|w| w[0] == w[1]));
    }
}
