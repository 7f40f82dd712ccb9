use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::{Advice, AnalysisResult};

pub const NO_KEYWORDS: &str = "No technical keywords found";
pub const NO_SKILLS: &str = "No specific skills detected";
pub const NO_ROLES: &str = "Add more skills for suggestions";
pub const NO_TIPS: &str = "Profile looks good!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub source: String,
    pub analysis: AnalysisResult,
    pub top_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<Advice>,
    pub generated_at: DateTime<Utc>,
}

impl ProfileReport {
    pub fn new(
        source: impl Into<String>,
        analysis: AnalysisResult,
        top_k: usize,
        advice: Option<Advice>,
    ) -> Self {
        let top_keywords = analysis.top_keywords(top_k);
        Self {
            source: source.into(),
            analysis,
            top_keywords,
            advice,
            generated_at: Utc::now(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Markdown => Ok(self.to_markdown()),
            OutputFormat::Json => self.to_json(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let analysis = &self.analysis;
        let mut output = String::new();

        output.push_str(&format!("\n=== Profile Analysis: {} ===\n\n", self.source));
        output.push_str(&format!("Profile Score: {}/100\n", analysis.score));
        output.push_str(&format!("Skills Found: {}\n", analysis.matched_skills.len()));
        output.push_str(&format!("Word Count: {}\n", analysis.word_count));

        output.push_str("\nTop Keywords:\n");
        push_list(&mut output, &self.top_keywords, "  - ", NO_KEYWORDS);

        output.push_str("\nSkills:\n");
        push_list(&mut output, &analysis.matched_skills, "  - ", NO_SKILLS);

        output.push_str("\nSuggested Roles:\n");
        push_list(&mut output, &analysis.roles, "  - ", NO_ROLES);

        output.push_str("\nImprovement Tips:\n");
        let tips: Vec<String> = analysis.tips.iter().map(|t| t.to_string()).collect();
        push_list(&mut output, &tips, "  ! ", NO_TIPS);

        match &self.advice {
            Some(Advice::Insights { provider, text }) => {
                output.push_str(&format!("\nAI Insights ({}):\n", provider));
                output.push_str(text.trim_end());
                output.push('\n');
            }
            Some(Advice::Unavailable { reason }) => {
                output.push_str(&format!("\n{}\n", reason));
            }
            None => {}
        }

        output.push_str(&format!(
            "\nAnalyzed on: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output
    }

    pub fn to_markdown(&self) -> String {
        let analysis = &self.analysis;
        let mut output = String::new();

        output.push_str(&format!("# Profile Analysis: {}\n\n", self.source));

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!("| Profile Score | {}/100 |\n", analysis.score));
        output.push_str(&format!("| Skills Found | {} |\n", analysis.matched_skills.len()));
        output.push_str(&format!("| Word Count | {} |\n", analysis.word_count));

        output.push_str("\n## Top Keywords\n\n");
        push_list(&mut output, &self.top_keywords, "- ", NO_KEYWORDS);

        output.push_str("\n## Skills\n\n");
        push_list(&mut output, &analysis.matched_skills, "- ", NO_SKILLS);

        output.push_str("\n## Suggested Roles\n\n");
        let roles: Vec<String> = analysis.roles.iter().map(|r| format!("**{}**", r)).collect();
        push_list(&mut output, &roles, "- ", NO_ROLES);

        output.push_str("\n## Improvement Tips\n\n");
        let tips: Vec<String> = analysis.tips.iter().map(|t| t.to_string()).collect();
        push_list(&mut output, &tips, "- ", NO_TIPS);

        match &self.advice {
            Some(Advice::Insights { provider, text }) => {
                output.push_str(&format!("\n## AI Insights ({})\n\n", provider));
                output.push_str(text.trim_end());
                output.push('\n');
            }
            Some(Advice::Unavailable { reason }) => {
                output.push_str(&format!("\n> {}\n", reason));
            }
            None => {}
        }

        output.push_str(&format!(
            "\n---\n*Analyzed on {}*\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output
    }
}

fn push_list(output: &mut String, items: &[String], bullet: &str, fallback: &str) {
    if items.is_empty() {
        output.push_str(bullet);
        output.push_str(fallback);
        output.push('\n');
        return;
    }
    for item in items {
        output.push_str(bullet);
        output.push_str(item);
        output.push('\n');
    }
}
