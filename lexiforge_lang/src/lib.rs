// Lexiforge: procedural pseudo-word generation for invented languages.
//
// Builds words from a configurable phonological inventory under a small set
// of phonotactic constraints: syllable skeletons, permitted onset clusters
// and codas, vowel clusters, at most one accented vowel per word, and
// consonant insertion to break vowel-vowel syllable boundaries.
//
// Architecture:
// - `types.rs`: `Slot`, `SyllablePattern`, `WordClass`, `GeneratedWord`, accented vowels
// - `phonotactics.rs`: admission predicates for onset clusters, codas, vowel clusters
// - `inventory.rs`: `InventoryBuilder` (configuration phase) and frozen `Inventory`
// - `generator.rs`: `generate_word`, the constrained syllable expansion
// - `morphology.rs`: plural, negation circumfix, definite articles with elision
// - `syntax.rs`: word order and question marker
// - `vocabulary.rs`: generated words filed by class
// - `error.rs`: error enums
// - `lib.rs` (this file): `LanguageConfig` loaded from JSON, and `Language`
//   which ties inventory, morphology and syntax together
//
// The configuration is loaded with `LanguageConfig::from_json()` (JSON string
// in, typed struct out). Every inventory entry then goes through the
// builder's validating mutators; rejected entries are logged and returned,
// never fatal. `default_config()` embeds `data/default_language.json` at
// compile time.
//
// Determinism constraint: all randomness comes from a caller-supplied
// `lexiforge_prng::WordRng`, and all collections iterate in a fixed order.

pub mod error;
pub mod generator;
pub mod inventory;
pub mod morphology;
pub mod phonotactics;
pub mod syntax;
pub mod types;
pub mod vocabulary;

pub use error::{ConfigError, ConfigRejection, GenerateError, InvalidClusterCandidate, PatternError};
pub use generator::{generate_word, generate_words};
pub use inventory::{Inventory, InventoryBuilder, starts_with_vowel};
pub use morphology::{Circumfix, MorphologyRules};
pub use syntax::{SyntaxRules, WordOrder};
pub use types::{GeneratedWord, Slot, SyllablePattern, WordClass};
pub use vocabulary::Vocabulary;

use lexiforge_prng::WordRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw inventory entries as written in a configuration file. Nothing here is
/// validated until `build()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub consonants: Vec<String>,
    pub vowels: Vec<String>,
    pub syllable_patterns: Vec<String>,
    pub codas: Vec<String>,
    pub onset_clusters: Vec<String>,
    pub vowel_clusters: Vec<String>,
}

impl InventoryConfig {
    /// Run every entry through the builder and finish configuration.
    ///
    /// Base sets go in first so the cluster and coda checks see them. Rejected
    /// entries are skipped, logged at `warn`, and returned in input order.
    pub fn build(&self) -> (Inventory, Vec<ConfigRejection>) {
        let mut builder = InventoryBuilder::new();
        let mut rejected = Vec::new();

        for c in &self.consonants {
            record(&mut rejected, builder.add_consonant(c));
        }
        for v in &self.vowels {
            record(&mut rejected, builder.add_vowel(v));
        }
        for p in &self.syllable_patterns {
            record(&mut rejected, p.parse::<SyllablePattern>().map(|p| builder.add_pattern(p)));
        }
        for c in &self.codas {
            record(&mut rejected, builder.add_coda(c));
        }
        for c in &self.onset_clusters {
            record(&mut rejected, builder.add_onset_cluster(c));
        }
        for c in &self.vowel_clusters {
            record(&mut rejected, builder.add_vowel_cluster(c));
        }

        (builder.build(), rejected)
    }
}

fn record<E: Into<ConfigRejection>>(rejected: &mut Vec<ConfigRejection>, result: Result<(), E>) {
    if let Err(e) = result {
        let e = e.into();
        log::warn!("skipping config entry: {e}");
        rejected.push(e);
    }
}

/// A complete language description as stored in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub inventory: InventoryConfig,
    pub morphology: MorphologyRules,
    pub syntax: SyntaxRules,
}

impl LanguageConfig {
    /// Parse a configuration from a JSON string. Missing sections default.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate the inventory and assemble a `Language`.
    pub fn into_language(self) -> (Language, Vec<ConfigRejection>) {
        let (inventory, rejected) = self.inventory.build();
        let language = Language {
            inventory,
            morphology: self.morphology,
            syntax: self.syntax,
        };
        (language, rejected)
    }
}

/// Load the default configuration embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_config() -> LanguageConfig {
    let json = include_str!("../data/default_language.json");
    LanguageConfig::from_json(json).expect("embedded default_language.json is malformed")
}

/// A configured language: frozen inventory plus morphology and syntax rules.
#[derive(Debug, Clone)]
pub struct Language {
    pub inventory: Inventory,
    pub morphology: MorphologyRules,
    pub syntax: SyntaxRules,
}

/// One example clause in three forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    pub declarative: String,
    pub negative: String,
    pub question: String,
}

impl Language {
    pub fn generate_word(
        &self,
        syllable_count: Option<usize>,
        rng: &mut WordRng,
    ) -> Result<GeneratedWord, GenerateError> {
        generate_word(&self.inventory, syllable_count, rng)
    }

    /// Compose an example clause from the vocabulary: an article-marked noun
    /// subject, a verb, and (when there is more than one noun) an
    /// article-marked noun object. `None` without at least one noun and one
    /// verb.
    pub fn showcase(&self, vocabulary: &Vocabulary, rng: &mut WordRng) -> Option<Showcase> {
        let vowels = self.inventory.vowels();
        let subject = vocabulary.choose(WordClass::Noun, rng)?;
        let verb = vocabulary.choose(WordClass::Verb, rng)?;
        let subject = self.morphology.with_random_article(subject, vowels, rng);
        let object = if vocabulary.words(WordClass::Noun).len() > 1 {
            let noun = vocabulary.choose(WordClass::Noun, rng)?;
            Some(self.morphology.with_random_article(noun, vowels, rng))
        } else {
            None
        };

        let declarative = self.syntax.arrange(&subject, verb, object.as_deref());
        let negated = self.morphology.apply(verb, WordClass::Verb);
        let negative = self.syntax.arrange(&subject, &negated, object.as_deref());
        let question = self.syntax.question(&declarative);

        Some(Showcase {
            declarative,
            negative,
            question,
        })
    }
}
