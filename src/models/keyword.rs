use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u32,
    pub technical: bool,
}

// First-seen order is the ranking tie-break
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    entries: Vec<KeywordCount>,
}

impl KeywordFrequency {
    pub fn from_pool<I>(pool: I) -> Self
    where
        I: IntoIterator<Item = (String, bool)>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<KeywordCount> = Vec::new();

        for (keyword, technical) in pool {
            match index.get(&keyword) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(keyword.clone(), entries.len());
                    entries.push(KeywordCount {
                        keyword,
                        count: 1,
                        technical,
                    });
                }
            }
        }

        Self { entries }
    }

    pub fn count(&self, keyword: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordCount> {
        self.entries.iter()
    }

    pub fn ranked(&self) -> Vec<&KeywordCount> {
        let mut ranked: Vec<&KeywordCount> = self.entries.iter().collect();
        // sort_by is stable, so ties stay in pool order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    pub fn top_keywords(&self, k: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(k)
            .map(|e| title_case(&e.keyword))
            .collect()
    }
}

// "ci/cd" -> "Ci/Cd"
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(items: &[(&str, bool)]) -> KeywordFrequency {
        KeywordFrequency::from_pool(items.iter().map(|(k, t)| (k.to_string(), *t)))
    }

    #[test]
    fn test_counts_and_distinct_len() {
        let freq = pool(&[("python", true), ("team", false), ("python", true)]);
        assert_eq!(freq.count("python"), 2);
        assert_eq!(freq.count("team"), 1);
        assert_eq!(freq.count("missing"), 0);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn test_ranking_breaks_ties_by_first_seen() {
        let freq = pool(&[
            ("docker", true),
            ("mentoring", false),
            ("design", false),
            ("design", false),
        ]);
        let ranked: Vec<_> = freq.ranked().into_iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(ranked, vec!["design", "docker", "mentoring"]);
    }

    #[test]
    fn test_top_keywords_truncates_and_title_cases() {
        let freq = pool(&[("machine learning", true), ("aws", true), ("team", false)]);
        assert_eq!(freq.top_keywords(2), vec!["Machine Learning", "Aws"]);
        assert_eq!(freq.top_keywords(10).len(), 3);
        assert!(freq.top_keywords(0).is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("ci/cd pipeline"), "Ci/Cd Pipeline");
        assert_eq!(title_case("JAVASCRIPT"), "Javascript");
        assert_eq!(title_case(""), "");
    }
}
