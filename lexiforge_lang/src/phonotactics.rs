// Cluster configuration rules: admission predicates for onset clusters, coda
// consonants and vowel clusters.
//
// These are pure functions over a candidate string and the relevant base set.
// They do not mutate anything; `InventoryBuilder` calls them and inserts the
// candidate on success. Membership is checked per character, so a cluster
// "tr" needs both "t" and "r" in the consonant set. Once admitted, a cluster
// is frozen: later edits to the base sets do not re-validate it.

use crate::error::InvalidClusterCandidate;
use crate::types::accent_count;
use std::collections::BTreeSet;

/// Minimum length (in characters) of an onset or vowel cluster.
pub const MIN_CLUSTER_LEN: usize = 2;

/// Accept `candidate` as an onset cluster iff it has at least two characters
/// and each one is a consonant.
pub fn validate_onset_cluster(
    candidate: &str,
    consonants: &BTreeSet<String>,
) -> Result<(), InvalidClusterCandidate> {
    check_cluster(candidate, consonants)
}

/// Accept `candidate` as a vowel cluster iff it has at least two characters,
/// each one is a vowel, and at most one of them is accented.
pub fn validate_vowel_cluster(
    candidate: &str,
    vowels: &BTreeSet<String>,
) -> Result<(), InvalidClusterCandidate> {
    check_cluster(candidate, vowels)?;
    check_single_accent(candidate)
}

/// A word carries at most one accented vowel, so no single unit may bring two.
pub fn check_single_accent(candidate: &str) -> Result<(), InvalidClusterCandidate> {
    if accent_count(candidate) > 1 {
        return Err(InvalidClusterCandidate::MultipleAccents {
            candidate: candidate.to_string(),
        });
    }
    Ok(())
}

/// Accept `candidate` as a permitted coda iff it is one of the consonants.
pub fn validate_coda_consonant(
    candidate: &str,
    consonants: &BTreeSet<String>,
) -> Result<(), InvalidClusterCandidate> {
    if consonants.contains(candidate) {
        Ok(())
    } else {
        Err(InvalidClusterCandidate::NotAConsonant {
            candidate: candidate.to_string(),
        })
    }
}

fn check_cluster(candidate: &str, base: &BTreeSet<String>) -> Result<(), InvalidClusterCandidate> {
    if candidate.chars().count() < MIN_CLUSTER_LEN {
        return Err(InvalidClusterCandidate::TooShort {
            candidate: candidate.to_string(),
        });
    }
    let mut buf = [0u8; 4];
    for c in candidate.chars() {
        if !base.contains(&*c.encode_utf8(&mut buf)) {
            return Err(InvalidClusterCandidate::UnknownSegment {
                candidate: candidate.to_string(),
                segment: c,
            });
        }
    }
    Ok(())
}
