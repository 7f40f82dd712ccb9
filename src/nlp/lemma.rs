
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("led", "lead"),
        ("built", "build"),
        ("ran", "run"),
        ("wrote", "write"),
        ("written", "write"),
        ("taught", "teach"),
        ("made", "make"),
        ("brought", "bring"),
        ("grew", "grow"),
        ("grown", "grow"),
        ("won", "win"),
        ("drove", "drive"),
        ("driven", "drive"),
        ("began", "begin"),
        ("begun", "begin"),
        ("was", "be"),
        ("were", "be"),
        ("did", "do"),
        ("done", "do"),
        ("had", "have"),
        ("went", "go"),
        ("took", "take"),
        ("taken", "take"),
        ("gave", "give"),
        ("given", "give"),
        ("kept", "keep"),
        ("sold", "sell"),
        ("spent", "spend"),
        ("thought", "think"),
        ("met", "meet"),
        ("held", "hold"),
        ("found", "find"),
        ("became", "become"),
        ("chose", "choose"),
        ("chosen", "choose"),
        ("spoke", "speak"),
        ("oversaw", "oversee"),
        ("overseen", "oversee"),
        ("people", "person"),
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("analyses", "analysis"),
        ("criteria", "criterion"),
    ]
    .into_iter()
    .collect()
});

// Irregular forms that are nouns, not verbs
const IRREGULAR_NOUNS: &[&str] = &["people", "children", "men", "women", "analyses", "criteria"];

static PROTECTED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "kubernetes", "analytics", "aws", "jenkins", "devops", "nodejs", "pandas", "redis",
        "postgres", "windows", "sales", "series", "news", "always", "towards", "perhaps",
        "canvas", "atlas", "data", "express", "ops", "sass", "less", "ios", "macos",
    ]
    .into_iter()
    .collect()
});

// Stems that get their silent "e" back after "-ed" is removed
const E_RESTORING: &[&str] = &[
    "at", "iz", "ys", "v", "c", "g", "ur", "uir", "bl", "pl", "tl", "dl", "gl", "kl", "cl",
    "fl", "al", "ut", "id", "ud", "od", "os", "eas", "rv",
];

const NO_E_STEMS: &[&str] = &["treat", "repeat", "defeat", "heat", "seat", "float", "boat", "coat"];

/// Lowercased lemma for a surface word.
pub fn lemmatize(surface: &str) -> String {
    let lower = surface.to_lowercase();

    if let Some(base) = IRREGULAR.get(lower.as_str()) {
        return base.to_string();
    }

    if is_acronym(surface) || PROTECTED.contains(lower.as_str()) {
        return lower;
    }

    // "APIs", "CDs"
    if let Some(stem) = surface.strip_suffix('s') {
        if is_acronym(stem) {
            return stem.to_lowercase();
        }
    }

    if let Some(stem) = strip_plural(&lower) {
        return stem;
    }

    if let Some(stem) = strip_past_tense(&lower) {
        return stem;
    }

    lower
}

pub fn is_verb_form(lower: &str) -> bool {
    if IRREGULAR.contains_key(lower) {
        return !IRREGULAR_NOUNS.contains(&lower);
    }
    lower.chars().count() > 4 && lower.ends_with("ed") && !lower.ends_with("eed")
}

fn is_acronym(surface: &str) -> bool {
    surface.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && surface.chars().all(|c| !c.is_lowercase())
}

fn strip_plural(word: &str) -> Option<String> {
    if word.chars().count() <= 3 {
        return None;
    }
    if ["ss", "us", "is", "ics", "ous"].iter().any(|s| word.ends_with(s)) {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return Some(format!("{}y", stem));
        }
        return None;
    }

    if let Some(stem) = word.strip_suffix("es") {
        if ["ch", "sh", "x", "ss", "z"].iter().any(|s| stem.ends_with(s)) {
            return Some(stem.to_string());
        }
    }

    word.strip_suffix('s').map(str::to_string)
}

fn strip_past_tense(word: &str) -> Option<String> {
    if word.chars().count() <= 4 {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ied") {
        return Some(format!("{}y", stem));
    }

    if word.ends_with("eed") {
        return word.strip_suffix('d').map(str::to_string);
    }

    let stem = word.strip_suffix("ed")?;
    if stem.chars().count() < 3 {
        return None;
    }

    let mut tail = stem.chars().rev();
    let last = tail.next()?;
    let before = tail.next()?;
    if last == before && !"aeiouylsfz".contains(last) {
        let mut undoubled = stem.to_string();
        undoubled.pop();
        return Some(undoubled);
    }

    if E_RESTORING.iter().any(|s| stem.ends_with(s)) && !NO_E_STEMS.iter().any(|s| stem.ends_with(s)) {
        return Some(format!("{}e", stem));
    }

    Some(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plurals() {
        assert_eq!(lemmatize("applications"), "application");
        assert_eq!(lemmatize("pipelines"), "pipeline");
        assert_eq!(lemmatize("technologies"), "technology");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("business"), "business");
        assert_eq!(lemmatize("Years"), "year");
    }

    #[test]
    fn test_past_tense() {
        assert_eq!(lemmatize("managed"), "manage");
        assert_eq!(lemmatize("improved"), "improve");
        assert_eq!(lemmatize("developed"), "develop");
        assert_eq!(lemmatize("planned"), "plan");
        assert_eq!(lemmatize("installed"), "install");
        assert_eq!(lemmatize("created"), "create");
        assert_eq!(lemmatize("applied"), "apply");
        assert_eq!(lemmatize("Led"), "lead");
        assert_eq!(lemmatize("Built"), "build");
    }

    #[test]
    fn test_protected_and_acronyms() {
        assert_eq!(lemmatize("AWS"), "aws");
        assert_eq!(lemmatize("Kubernetes"), "kubernetes");
        assert_eq!(lemmatize("analytics"), "analytics");
        assert_eq!(lemmatize("APIs"), "api");
        assert_eq!(lemmatize("learning"), "learning");
    }

    #[test]
    fn test_verb_forms() {
        assert!(is_verb_form("managed"));
        assert!(is_verb_form("led"));
        assert!(!is_verb_form("people"));
        assert!(!is_verb_form("learning"));
        assert!(!is_verb_form("red"));
    }
}
