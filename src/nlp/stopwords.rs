use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};

/// English function words plus a handful of filler words common in profiles.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "also", "am", "an",
    "and", "any", "are", "aren", "as", "at", "be", "because", "been", "before", "being",
    "below", "between", "both", "but", "by", "can", "come", "could", "couldn", "d", "day",
    "did", "didn", "do", "does", "doesn", "doing", "don", "down", "during", "each", "etc",
    "even", "ever", "every", "few", "for", "from", "further", "get", "good", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself",
    "just", "know", "let", "like", "ll", "long", "m", "ma", "make", "many", "me", "might",
    "more", "most", "much", "must", "mustn", "my", "myself", "need", "needn", "new", "no",
    "nor", "not", "now", "o", "of", "off", "old", "on", "once", "one", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "per", "put", "re", "s",
    "same", "say", "see", "shan", "she", "should", "shouldn", "so", "some", "such", "t",
    "take", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "two", "under", "until", "up",
    "us", "use", "ve", "very", "via", "was", "wasn", "way", "we", "well", "were", "weren",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "won",
    "would", "wouldn", "y", "yet", "you", "your", "yours", "yourself", "yourselves",
];

static DEFAULT_STOP_WORDS: Lazy<HashSet<String>> =
    Lazy::new(|| STOP_WORDS.iter().map(|w| w.to_string()).collect());

#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self {
            words: DEFAULT_STOP_WORDS.clone(),
        }
    }

    /// Default list extended with the words in `path`: one per line, blank
    /// lines and `#` comments ignored.
    pub fn with_extra_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Nlp(format!(
                "failed to read stop-word list '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut stop_words = Self::new();
        let before = stop_words.words.len();
        stop_words.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        );
        tracing::debug!(
            "Loaded {} extra stop words from {}",
            stop_words.words.len() - before,
            path.display()
        );

        Ok(stop_words)
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        self.words
            .extend(words.into_iter().map(|w| w.to_lowercase()));
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Avoid allocating for the common already-lowercase case
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}
