// Error types for inventory configuration and word generation.
//
// Three families with different propagation rules:
// - `InvalidClusterCandidate`: a single rejected configuration entry. Always
//   recoverable; the caller reports it and moves on (or re-prompts).
// - `GenerateError`: fatal to one `generate_word` call. The generator never
//   returns a partial or empty word in place of one of these.
// - `ConfigError`: the language configuration file could not be read or parsed.

use thiserror::Error;

/// Why a configuration candidate was refused admission to the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidClusterCandidate {
    /// Clusters need at least two characters.
    #[error("'{candidate}' is too short for a cluster (need at least two characters)")]
    TooShort { candidate: String },
    /// A character of the cluster is not in the base set.
    #[error("'{candidate}' contains '{segment}', which is not in the inventory")]
    UnknownSegment { candidate: String, segment: char },
    /// A coda candidate that is not one of the inventory's consonants.
    #[error("'{candidate}' is not a consonant of this inventory")]
    NotAConsonant { candidate: String },
    /// A phoneme grapheme outside the allowed length range.
    #[error("'{candidate}' must be between 1 and {max} characters long")]
    BadGraphemeLength { candidate: String, max: usize },
    /// A vowel grapheme or cluster carrying more than one accented vowel.
    #[error("'{candidate}' has more than one accented vowel")]
    MultipleAccents { candidate: String },
}

/// Failure to parse a syllable pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("syllable pattern is empty")]
    Empty,
    #[error("syllable pattern '{pattern}' contains '{found}'; only C and V are allowed")]
    BadSlot { pattern: String, found: char },
    #[error("syllable pattern '{pattern}' has no vowel slot")]
    NoVowel { pattern: String },
}

/// One entry of a language configuration that was skipped while building
/// the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigRejection {
    #[error(transparent)]
    Candidate(#[from] InvalidClusterCandidate),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Conditions that make a single word generation impossible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("inventory has no consonants or no vowels")]
    EmptyInventory,
    #[error("inventory has no syllable patterns")]
    EmptyPatternSet,
    #[error("a word needs at least one syllable")]
    ZeroSyllables,
    /// The synthetic vowel-cluster fallback needs two distinct unaccented vowels.
    #[error("need two unaccented vowels to build a plain vowel cluster, found {available}")]
    InsufficientPlainVowels { available: usize },
    /// Every vowel was excluded by the repetition and single-stress filters.
    #[error("no vowel satisfies the repetition and stress constraints")]
    NoEligibleVowel,
    /// A vowel-vowel boundary needs a bridge, but every coda and consonant
    /// contains a vowel character.
    #[error("no consonant without a vowel character is available to break a hiatus")]
    NoHiatusBreaker,
}

/// Failure to load a language configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}
