use crate::config::DEFAULT_PROMPT_CHAR_LIMIT;

pub const SYSTEM_PROMPT: &str = "You are an experienced technical recruiter and career coach \
reviewing LinkedIn-style profiles. Give concrete, actionable advice in a professional tone.";

const INSTRUCTIONS: &str = r#"Analyze this LinkedIn profile and provide:
1. Top 3 suitable career roles based on skills and experience
2. Specific improvement suggestions for better recruiter visibility
3. Missing skills that would enhance career prospects
4. Industry trends relevant to this profile"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceRequest {
    pub profile_excerpt: String,
    pub skills: Vec<String>,
}

impl AdviceRequest {
    pub fn new(profile_text: &str, skills: &[String]) -> Self {
        Self::with_limit(profile_text, skills, DEFAULT_PROMPT_CHAR_LIMIT)
    }

    /// Keeps at most `char_limit` characters of the profile.
    pub fn with_limit(profile_text: &str, skills: &[String], char_limit: usize) -> Self {
        Self {
            profile_excerpt: truncate_chars(profile_text, char_limit).to_string(),
            skills: skills.to_vec(),
        }
    }

    pub fn to_prompt(&self) -> String {
        let mut prompt = String::from(INSTRUCTIONS);
        prompt.push_str("\n\n");
        prompt.push_str(&format!("Profile content: {}\n", self.profile_excerpt));
        prompt.push_str(&format!("Detected skills: {}\n\n", self.skills.join(", ")));
        prompt.push_str("Provide actionable, specific advice in a professional tone.");
        prompt
    }

    pub fn estimate_tokens(&self) -> usize {
        let char_count = INSTRUCTIONS.len()
            + self.profile_excerpt.len()
            + self.skills.iter().map(|s| s.len() + 2).sum::<usize>();
        // Rough estimate: ~4 characters per token
        char_count / 4
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
