// Phonological inventory: the configuration phase and the frozen result.
//
// `InventoryBuilder` is the only way to populate an inventory. Its mutators
// gate every onset cluster, coda and vowel cluster through the predicates in
// `phonotactics.rs`, and report rejections to the caller without aborting.
// `build()` ends the configuration phase: it applies the coda default-fill
// rule (no codas configured means every consonant may close a syllable) and
// returns an immutable `Inventory` that the generator reads.
//
// All sets are `BTreeSet` so iteration order, and therefore the output for a
// given seed, is stable across runs.

use crate::error::InvalidClusterCandidate;
use crate::phonotactics::{
    check_single_accent, validate_coda_consonant, validate_onset_cluster, validate_vowel_cluster,
};
use crate::types::{SyllablePattern, is_accented};
use serde::Serialize;
use std::collections::BTreeSet;

/// Longest consonant grapheme accepted by `add_consonant` (e.g. "ch").
pub const MAX_CONSONANT_LEN: usize = 2;
/// Longest vowel grapheme accepted by `add_vowel` (e.g. "eau").
pub const MAX_VOWEL_LEN: usize = 3;

/// Mutable inventory used during configuration.
#[derive(Debug, Clone, Default)]
pub struct InventoryBuilder {
    consonants: BTreeSet<String>,
    vowels: BTreeSet<String>,
    syllable_patterns: Vec<SyllablePattern>,
    onset_clusters: BTreeSet<String>,
    coda_restrictions: BTreeSet<String>,
    vowel_clusters: BTreeSet<String>,
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a consonant grapheme of 1–2 characters.
    pub fn add_consonant(&mut self, consonant: &str) -> Result<(), InvalidClusterCandidate> {
        check_grapheme(consonant, MAX_CONSONANT_LEN)?;
        self.consonants.insert(consonant.to_string());
        Ok(())
    }

    /// Remove a consonant. Clusters and codas already admitted are kept.
    pub fn remove_consonant(&mut self, consonant: &str) -> bool {
        self.consonants.remove(consonant)
    }

    /// Add a vowel grapheme of 1–3 characters with at most one accent.
    pub fn add_vowel(&mut self, vowel: &str) -> Result<(), InvalidClusterCandidate> {
        check_grapheme(vowel, MAX_VOWEL_LEN)?;
        check_single_accent(vowel)?;
        self.vowels.insert(vowel.to_string());
        Ok(())
    }

    /// Remove a vowel. Vowel clusters already admitted are kept.
    pub fn remove_vowel(&mut self, vowel: &str) -> bool {
        self.vowels.remove(vowel)
    }

    pub fn add_pattern(&mut self, pattern: SyllablePattern) {
        self.syllable_patterns.push(pattern);
    }

    pub fn clear_patterns(&mut self) {
        self.syllable_patterns.clear();
    }

    pub fn add_onset_cluster(&mut self, cluster: &str) -> Result<(), InvalidClusterCandidate> {
        validate_onset_cluster(cluster, &self.consonants)?;
        self.onset_clusters.insert(cluster.to_string());
        Ok(())
    }

    pub fn add_coda(&mut self, consonant: &str) -> Result<(), InvalidClusterCandidate> {
        validate_coda_consonant(consonant, &self.consonants)?;
        self.coda_restrictions.insert(consonant.to_string());
        Ok(())
    }

    pub fn add_vowel_cluster(&mut self, cluster: &str) -> Result<(), InvalidClusterCandidate> {
        validate_vowel_cluster(cluster, &self.vowels)?;
        self.vowel_clusters.insert(cluster.to_string());
        Ok(())
    }

    pub fn consonants(&self) -> &BTreeSet<String> {
        &self.consonants
    }

    pub fn vowels(&self) -> &BTreeSet<String> {
        &self.vowels
    }

    /// Finish configuration. An empty coda set becomes the full consonant set.
    pub fn build(self) -> Inventory {
        let coda_restrictions = if self.coda_restrictions.is_empty() {
            log::debug!(
                "no codas configured; allowing all {} consonants in coda position",
                self.consonants.len()
            );
            self.consonants.clone()
        } else {
            self.coda_restrictions
        };
        Inventory {
            consonants: self.consonants,
            vowels: self.vowels,
            syllable_patterns: self.syllable_patterns,
            onset_clusters: self.onset_clusters,
            coda_restrictions,
            vowel_clusters: self.vowel_clusters,
        }
    }
}

fn check_grapheme(grapheme: &str, max: usize) -> Result<(), InvalidClusterCandidate> {
    let len = grapheme.chars().count();
    if len == 0 || len > max {
        return Err(InvalidClusterCandidate::BadGraphemeLength {
            candidate: grapheme.to_string(),
            max,
        });
    }
    Ok(())
}

/// A configured, read-only phonological inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    consonants: BTreeSet<String>,
    vowels: BTreeSet<String>,
    syllable_patterns: Vec<SyllablePattern>,
    onset_clusters: BTreeSet<String>,
    coda_restrictions: BTreeSet<String>,
    vowel_clusters: BTreeSet<String>,
}

impl Inventory {
    pub fn consonants(&self) -> &BTreeSet<String> {
        &self.consonants
    }

    pub fn vowels(&self) -> &BTreeSet<String> {
        &self.vowels
    }

    pub fn syllable_patterns(&self) -> &[SyllablePattern] {
        &self.syllable_patterns
    }

    pub fn onset_clusters(&self) -> &BTreeSet<String> {
        &self.onset_clusters
    }

    pub fn coda_restrictions(&self) -> &BTreeSet<String> {
        &self.coda_restrictions
    }

    pub fn vowel_clusters(&self) -> &BTreeSet<String> {
        &self.vowel_clusters
    }

    /// The vowels of this inventory that carry a diacritic.
    pub fn accented_vowels(&self) -> impl Iterator<Item = &str> {
        self.vowels.iter().map(String::as_str).filter(|v| is_accented(v))
    }

    /// True if the single character `c` is itself a vowel of this inventory.
    pub fn is_vowel_char(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.vowels.contains(&*c.encode_utf8(&mut buf))
    }

    pub fn starts_with_vowel(&self, word: &str) -> bool {
        starts_with_vowel(word, &self.vowels)
    }
}

/// True if `word` begins with one of `vowels`. Used for article elision.
pub fn starts_with_vowel(word: &str, vowels: &BTreeSet<String>) -> bool {
    vowels.iter().any(|v| word.starts_with(v.as_str()))
}
