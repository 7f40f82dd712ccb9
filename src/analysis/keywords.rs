use crate::models::keyword::KeywordFrequency;
use crate::nlp::{EntityLabel, NlpDocument, NlpEngine};
use crate::taxonomy::Taxonomy;

// Technical candidates enter the pool first, so they win ties on count.
pub struct KeywordExtractor {
    max_phrase_words: usize,
    min_other_chars: usize,
    entity_labels: Vec<EntityLabel>,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            max_phrase_words: 3,
            min_other_chars: 4,
            entity_labels: vec![
                EntityLabel::Organization,
                EntityLabel::Product,
                EntityLabel::Person,
            ],
        }
    }

    pub fn candidates(&self, doc: &NlpDocument) -> Vec<String> {
        let phrases = doc
            .noun_phrases
            .iter()
            .filter(|p| p.split_whitespace().count() <= self.max_phrase_words)
            .map(|p| p.to_lowercase());

        let entities = doc
            .entities
            .iter()
            .filter(|e| self.entity_labels.contains(&e.label))
            .map(|e| e.text.to_lowercase());

        doc.content_tokens
            .iter()
            .cloned()
            .chain(phrases)
            .chain(entities)
            .collect()
    }

    pub fn extract(
        &self,
        doc: &NlpDocument,
        taxonomy: &Taxonomy,
        nlp: &dyn NlpEngine,
    ) -> KeywordFrequency {
        let technical = self
            .candidates(doc)
            .into_iter()
            .filter(|c| taxonomy.is_technical(c))
            .map(|c| (c, true));

        // Re-checked against the engine's stop-word list
        let other = doc
            .content_tokens
            .iter()
            .filter(|t| !nlp.is_stop_word(t))
            .filter(|t| t.chars().count() >= self.min_other_chars)
            .filter(|t| !taxonomy.is_technical(t))
            .map(|t| (t.clone(), false));

        let pool: Vec<(String, bool)> = technical.chain(other).collect();
        KeywordFrequency::from_pool(pool)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
