// Core types shared by the inventory, the generator and the morphology layer.
//
// The type hierarchy is:
// - `Slot`: one position of a syllable skeleton (consonant or vowel)
// - `SyllablePattern`: a parsed skeleton such as "CVC", serialized as its string
// - `WordClass`: noun, verb, adjective; attached to words out of band
// - `GeneratedWord`: a synthesized word with its syllable breakdown
//
// `ACCENTED_VOWELS` is a fixed constant of the language model, not part of
// any user configuration.

use crate::error::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Diacritic-bearing vowels. At most one of these may appear in a word.
pub const ACCENTED_VOWELS: &[char] = &['à', 'è', 'ù', 'é', 'ê'];

/// True if any character of the grapheme (or cluster) is an accented vowel.
pub fn is_accented(unit: &str) -> bool {
    unit.chars().any(|c| ACCENTED_VOWELS.contains(&c))
}

/// Number of accented vowel characters in a grapheme, cluster or word.
pub fn accent_count(unit: &str) -> usize {
    unit.chars().filter(|c| ACCENTED_VOWELS.contains(c)).count()
}

/// One position in a syllable skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Consonant,
    Vowel,
}

impl Slot {
    fn letter(self) -> char {
        match self {
            Slot::Consonant => 'C',
            Slot::Vowel => 'V',
        }
    }
}

/// A syllable skeleton over {C, V}, e.g. "CV", "CCV", "V". Every pattern
/// has at least one vowel slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SyllablePattern {
    slots: Vec<Slot>,
}

impl SyllablePattern {
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Never true for a parsed pattern; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of consecutive consonant slots at the start of the pattern.
    pub fn leading_consonants(&self) -> usize {
        self.slots
            .iter()
            .take_while(|s| **s == Slot::Consonant)
            .count()
    }
}

impl FromStr for SyllablePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }
        let slots = s
            .chars()
            .map(|c| match c {
                'C' => Ok(Slot::Consonant),
                'V' => Ok(Slot::Vowel),
                other => Err(PatternError::BadSlot {
                    pattern: s.to_string(),
                    found: other,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if !slots.contains(&Slot::Vowel) {
            return Err(PatternError::NoVowel {
                pattern: s.to_string(),
            });
        }
        Ok(SyllablePattern { slots })
    }
}

impl TryFrom<String> for SyllablePattern {
    type Error = PatternError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SyllablePattern> for String {
    fn from(p: SyllablePattern) -> String {
        p.to_string()
    }
}

impl fmt::Display for SyllablePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.letter())?;
        }
        Ok(())
    }
}

/// Word class tag used by the morphology layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
}

impl WordClass {
    pub const ALL: [WordClass; 3] = [WordClass::Noun, WordClass::Verb, WordClass::Adjective];
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordClass::Noun => "noun",
            WordClass::Verb => "verb",
            WordClass::Adjective => "adjective",
        };
        f.write_str(name)
    }
}

/// A synthesized word with its syllable breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedWord {
    /// The full text of the word (all syllables concatenated).
    pub text: String,
    /// Text of each syllable, including any consonant inserted in front of
    /// it to break a vowel-vowel boundary.
    pub syllables: Vec<String>,
    /// Index of the syllable carrying the word's accented vowel, if any.
    pub stressed: Option<usize>,
}

impl fmt::Display for GeneratedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
