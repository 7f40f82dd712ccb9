use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::keyword::title_case;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub label: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl VocabularyEntry {
    pub fn new(label: &str, aliases: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn matches(&self, text_lower: &str) -> bool {
        text_lower.contains(self.label.as_str())
            || self.aliases.iter().any(|a| text_lower.contains(a.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRule {
    pub role: String,
    pub triggers: Vec<String>,
}

impl RoleRule {
    pub fn new(role: &str, triggers: &[&str]) -> Self {
        Self {
            role: role.to_string(),
            triggers: triggers.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn matches(&self, text_lower: &str) -> bool {
        self.triggers.iter().any(|t| text_lower.contains(t.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub tech_terms: Vec<String>,
    #[serde(default)]
    pub skills: Vec<VocabularyEntry>,
    #[serde(default)]
    pub roles: Vec<RoleRule>,
}

impl Taxonomy {
    pub fn new() -> Self {
        let mut taxonomy = Self::empty();

        taxonomy.init_tech_terms();
        taxonomy.init_skills();
        taxonomy.init_roles();

        taxonomy
    }

    pub fn empty() -> Self {
        Self {
            tech_terms: Vec::new(),
            skills: Vec::new(),
            roles: Vec::new(),
        }
    }

    fn init_tech_terms(&mut self) {
        let terms = [
            "python", "java", "javascript", "react", "nodejs", "aws", "azure", "docker", "sql",
            "mongodb", "git", "machine learning", "data science", "analytics", "tensorflow",
            "pytorch", "kubernetes", "devops", "agile", "scrum", "artificial intelligence",
            "deep learning",
        ];

        self.tech_terms
            .extend(terms.iter().map(|s| s.to_string()));
    }

    fn init_skills(&mut self) {
        let skills: Vec<(&str, Vec<&str>)> = vec![
            // Languages
            ("python", vec![]),
            ("java", vec![]),
            ("javascript", vec![]),
            ("sql", vec![]),
            // Frameworks / platforms
            ("react", vec![]),
            ("aws", vec![]),
            // Domains
            ("machine learning", vec![]),
            ("data science", vec![]),
            // Soft skills
            ("project management", vec![]),
            ("leadership", vec![]),
            ("communication", vec![]),
            ("teamwork", vec![]),
            // Practices
            ("agile", vec![]),
            ("scrum", vec![]),
            // Tools
            ("docker", vec![]),
            ("kubernetes", vec![]),
        ];

        for (label, aliases) in skills {
            self.skills.push(VocabularyEntry::new(label, &aliases));
        }
    }

    fn init_roles(&mut self) {
        self.roles.push(RoleRule::new(
            "Software Developer",
            &["python", "java", "javascript"],
        ));
        self.roles
            .push(RoleRule::new("Data Scientist", &["data", "machine learning"]));
        self.roles
            .push(RoleRule::new("Project Manager", &["management", "leadership"]));
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read vocabulary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut taxonomy: Taxonomy = serde_json::from_str(&content)?;
        taxonomy.normalize();
        Ok(taxonomy)
    }

    pub fn with_extension_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = Self::from_json_file(&path)?;
        let mut taxonomy = Self::new();
        taxonomy.merge(extension);
        tracing::info!(
            "Vocabulary: {} tech terms, {} skills, {} role rules",
            taxonomy.tech_terms.len(),
            taxonomy.skills.len(),
            taxonomy.roles.len()
        );
        Ok(taxonomy)
    }

    // Entries whose label already exists are folded into the existing one
    pub fn merge(&mut self, other: Taxonomy) {
        for term in other.tech_terms {
            if !self.tech_terms.contains(&term) {
                self.tech_terms.push(term);
            }
        }

        for entry in other.skills {
            match self.skills.iter_mut().find(|s| s.label == entry.label) {
                Some(existing) => {
                    for alias in entry.aliases {
                        if !existing.aliases.contains(&alias) {
                            existing.aliases.push(alias);
                        }
                    }
                }
                None => self.skills.push(entry),
            }
        }

        for rule in other.roles {
            match self.roles.iter_mut().find(|r| r.role == rule.role) {
                Some(existing) => {
                    for trigger in rule.triggers {
                        if !existing.triggers.contains(&trigger) {
                            existing.triggers.push(trigger);
                        }
                    }
                }
                None => self.roles.push(rule),
            }
        }
    }

    fn normalize(&mut self) {
        for term in &mut self.tech_terms {
            *term = term.trim().to_lowercase();
        }
        self.tech_terms.retain(|t| !t.is_empty());

        for entry in &mut self.skills {
            entry.label = entry.label.trim().to_lowercase();
            for alias in &mut entry.aliases {
                *alias = alias.trim().to_lowercase();
            }
            entry.aliases.retain(|a| !a.is_empty());
        }
        self.skills.retain(|s| !s.label.is_empty());

        for rule in &mut self.roles {
            rule.role = rule.role.trim().to_string();
            for trigger in &mut rule.triggers {
                *trigger = trigger.trim().to_lowercase();
            }
            rule.triggers.retain(|t| !t.is_empty());
        }
    }

    pub fn is_technical(&self, candidate: &str) -> bool {
        self.tech_terms
            .iter()
            .any(|term| candidate.contains(term.as_str()))
    }

    pub fn match_skills(&self, text_lower: &str) -> Vec<String> {
        let mut seen = HashSet::new();

        self.skills
            .iter()
            .filter(|entry| entry.matches(text_lower))
            .map(|entry| title_case(&entry.label))
            .filter(|label| seen.insert(label.to_lowercase()))
            .collect()
    }

    pub fn suggest_roles(&self, text_lower: &str) -> Vec<String> {
        self.roles
            .iter()
            .filter(|rule| rule.matches(text_lower))
            .map(|rule| rule.role.clone())
            .collect()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new()
    }
}
