use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::nlp::lemma::{is_verb_form, lemmatize};
use crate::nlp::stopwords::StopWords;
use crate::nlp::{Entity, EntityLabel, NlpDocument, NlpEngine};

const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "ltd", "llc", "gmbh", "university", "college", "institute",
    "labs", "technologies", "group", "company", "systems", "solutions", "bank",
];

pub struct RuleBasedNlp {
    stop_words: StopWords,
}

struct Word<'a> {
    text: &'a str,
    lower: String,
    start: usize,
    end: usize,
    // Text between the previous word and this one
    gap: &'a str,
    line_start: bool,
    sentence_start: bool,
}

impl Word<'_> {
    fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }

    fn is_number(&self) -> bool {
        self.text.chars().any(|c| c.is_ascii_digit())
            && self.text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    }

    fn is_capitalized(&self) -> bool {
        self.is_alpha() && self.text.chars().next().map_or(false, char::is_uppercase)
    }

    fn is_acronym(&self) -> bool {
        self.is_alpha() && self.text.chars().count() >= 2 && self.text.chars().all(char::is_uppercase)
    }
}

impl RuleBasedNlp {
    pub fn new() -> Self {
        Self::with_stop_words(StopWords::new())
    }

    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    pub fn from_stop_words_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_stop_words(StopWords::with_extra_file(path)?))
    }

    fn words<'a>(&self, text: &'a str) -> Vec<Word<'a>> {
        let mut words = Vec::new();
        let mut prev_end = 0;

        for (start, segment) in text.unicode_word_indices() {
            let word = strip_possessive(segment);
            let gap = &text[prev_end..start];
            let line_start = prev_end == 0 || gap.contains('\n');
            let sentence_start = line_start || gap.contains(['.', '!', '?']);
            let end = start + word.len();

            words.push(Word {
                text: word,
                lower: word.to_lowercase(),
                start,
                end,
                gap,
                line_start,
                sentence_start,
            });
            prev_end = end;
        }

        words
    }

    fn content_tokens(&self, words: &[Word<'_>]) -> Vec<String> {
        words
            .iter()
            .filter(|w| w.is_alpha() && !self.stop_words.contains(&w.lower) && w.text.chars().count() > 2)
            .map(|w| lemmatize(w.text))
            .collect()
    }

    fn noun_phrases(&self, text: &str, words: &[Word<'_>]) -> Vec<String> {
        let mut phrases = Vec::new();
        let mut run: Option<(usize, usize)> = None;

        for word in words {
            let chunkable = word.is_alpha()
                && !self.stop_words.contains(&word.lower)
                && !is_verb_form(&word.lower);
            let joinable = is_phrase_gap(word.gap);

            match (run, chunkable) {
                (Some((start, _)), true) if joinable => run = Some((start, word.end)),
                (current, true) => {
                    if let Some((start, end)) = current {
                        phrases.push(text[start..end].to_string());
                    }
                    run = Some((word.start, word.end));
                }
                (current, false) => {
                    if let Some((start, end)) = current {
                        phrases.push(text[start..end].to_string());
                    }
                    run = None;
                }
            }
        }

        if let Some((start, end)) = run {
            phrases.push(text[start..end].to_string());
        }

        phrases
    }

    fn entities(&self, text: &str, words: &[Word<'_>]) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut run: Vec<&Word<'_>> = Vec::new();

        for word in words {
            let candidate = word.is_capitalized() && !self.stop_words.contains(&word.lower);

            if candidate && !run.is_empty() && is_entity_gap(word.gap) {
                run.push(word);
                continue;
            }

            self.flush_entity(text, &mut run, &mut entities);

            if candidate {
                run.push(word);
            } else if word.is_number() {
                entities.push(Entity {
                    text: word.text.to_string(),
                    label: EntityLabel::Quantity,
                });
            }
        }

        self.flush_entity(text, &mut run, &mut entities);
        entities
    }

    fn flush_entity(&self, text: &str, run: &mut Vec<&Word<'_>>, entities: &mut Vec<Entity>) {
        let (first, last) = match (run.first(), run.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return,
        };

        let label = if run.iter().any(|w| ORG_SUFFIXES.contains(&w.lower.as_str())) {
            Some(EntityLabel::Organization)
        } else if run.len() > 1 {
            if first.line_start {
                Some(EntityLabel::Person)
            } else {
                Some(EntityLabel::Organization)
            }
        } else if first.is_acronym() {
            Some(EntityLabel::Organization)
        } else if !first.sentence_start {
            Some(EntityLabel::Product)
        } else {
            None
        };

        if let Some(label) = label {
            entities.push(Entity {
                text: text[first.start..last.end].to_string(),
                label,
            });
        }
        run.clear();
    }
}

impl Default for RuleBasedNlp {
    fn default() -> Self {
        Self::new()
    }
}

impl NlpEngine for RuleBasedNlp {
    fn process(&self, text: &str) -> Result<NlpDocument> {
        let words = self.words(text);

        let document = NlpDocument {
            content_tokens: self.content_tokens(&words),
            noun_phrases: self.noun_phrases(text, &words),
            entities: self.entities(text, &words),
        };

        tracing::debug!(
            "NLP: {} words, {} content tokens, {} noun phrases, {} entities",
            words.len(),
            document.content_tokens.len(),
            document.noun_phrases.len(),
            document.entities.len()
        );

        Ok(document)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

// "Python's" segments as one word
fn strip_possessive(segment: &str) -> &str {
    ["'s", "\u{2019}s", "'S", "\u{2019}S"]
        .iter()
        .find_map(|clitic| segment.strip_suffix(clitic))
        .filter(|base| !base.is_empty())
        .unwrap_or(segment)
}

/// Phrases continue across plain spaces on one line or a bare "/" or "-".
fn is_phrase_gap(gap: &str) -> bool {
    gap == "/" || gap == "-" || (!gap.is_empty() && gap.chars().all(|c| c.is_whitespace() && c != '\n'))
}

fn is_entity_gap(gap: &str) -> bool {
    !gap.is_empty() && gap.chars().all(|c| c.is_whitespace() && c != '\n')
}
