// Morphology rules applied to generated words.
//
// Words reach this layer as opaque strings plus a `WordClass` tag. The rules
// are plain affixation: a plural suffix for nouns, a negation circumfix for
// verbs, and definite articles that elide to "l'" before a vowel-initial
// word. The only thing this module needs from the inventory is its vowel
// set, for the elision check.

use crate::inventory::starts_with_vowel;
use crate::types::WordClass;
use lexiforge_prng::WordRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Articles that elide to `l'` before a vowel.
pub const ELIDING_ARTICLES: &[&str] = &["le", "la"];

/// A marker placed on both sides of a word, e.g. "ne ... pas".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circumfix {
    pub prefix: String,
    pub suffix: String,
}

impl Circumfix {
    /// Wrap `word`, separating each non-empty part with a space.
    pub fn wrap(&self, word: &str) -> String {
        [self.prefix.as_str(), word, self.suffix.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The configured morphology of a language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphologyRules {
    /// Appended to nouns.
    pub plural_suffix: Option<String>,
    /// Wrapped around verbs.
    pub negation: Option<Circumfix>,
    /// Definite articles, one chosen per use.
    pub articles: Vec<String>,
}

impl MorphologyRules {
    /// Apply the class-specific rule: plural for nouns, negation for verbs.
    /// Adjectives, and classes whose rule is not configured, pass through.
    pub fn apply(&self, word: &str, class: WordClass) -> String {
        match (class, &self.plural_suffix, &self.negation) {
            (WordClass::Noun, Some(suffix), _) => format!("{word}{suffix}"),
            (WordClass::Verb, _, Some(circumfix)) => circumfix.wrap(word),
            _ => word.to_string(),
        }
    }

    /// Attach a randomly chosen configured article. No articles, no change.
    pub fn with_random_article(
        &self,
        word: &str,
        vowels: &BTreeSet<String>,
        rng: &mut WordRng,
    ) -> String {
        match rng.choose(&self.articles) {
            Some(article) => with_article(word, article, vowels),
            None => word.to_string(),
        }
    }
}

/// Attach `article` to `word`, eliding "le"/"la" to "l'" before a vowel.
pub fn with_article(word: &str, article: &str, vowels: &BTreeSet<String>) -> String {
    let article = article.trim();
    if ELIDING_ARTICLES.contains(&article) && starts_with_vowel(word, vowels) {
        format!("l'{word}")
    } else {
        format!("{article} {word}")
    }
}
