// Word generator: expands syllable patterns into phoneme strings under the
// inventory's phonotactic constraints.
//
// Algorithm per word:
// 1. For each syllable, pick a pattern uniformly and walk its slots:
//    - C at the start of a CC run may take a whole onset cluster; a final C
//      draws from the permitted codas; any other C draws from the consonants.
//    - V followed by V may take a whole vowel cluster; otherwise a single
//      vowel that differs from the syllable's previous single vowel.
// 2. If the word so far ends in a vowel and the new syllable starts with one,
//    prepend a consonant (codas first, then all consonants, never one that
//    contains a vowel character) to break the hiatus.
// 3. Concatenate.
//
// Generation state is explicit: `WordState` carries the word-scoped
// "accented vowel already used" flag across syllables, `SyllableState` the
// syllable-scoped last vowel. Every constrained draw filters its candidate
// pool first and samples once, so a call always terminates; an empty
// filtered pool is reported as a `GenerateError` instead of retried.
//
// All randomness comes from the caller's `WordRng`. The same inventory, count
// and seed always produce the same word.

use crate::error::GenerateError;
use crate::inventory::Inventory;
use crate::types::{GeneratedWord, Slot, SyllablePattern, is_accented};
use lexiforge_prng::WordRng;

/// Syllable count range used when the caller does not specify one.
pub const DEFAULT_SYLLABLES: (usize, usize) = (1, 3);

/// Word-scoped generation state.
#[derive(Debug, Default)]
struct WordState {
    stress_used: bool,
}

/// Syllable-scoped generation state, reset at every syllable.
#[derive(Debug, Default)]
struct SyllableState<'a> {
    last_vowel: Option<&'a str>,
}

/// Candidate pools flattened from the inventory's sets once per word, so each
/// draw is a uniform pick from a slice.
struct Pools<'a> {
    consonants: Vec<&'a str>,
    vowels: Vec<&'a str>,
    plain_vowels: Vec<&'a str>,
    codas: Vec<&'a str>,
    onset_clusters: Vec<&'a str>,
    vowel_clusters: Vec<&'a str>,
    plain_vowel_clusters: Vec<&'a str>,
    hiatus_breakers: Vec<&'a str>,
}

impl<'a> Pools<'a> {
    fn new(inventory: &'a Inventory) -> Self {
        let vowels: Vec<&str> = inventory.vowels().iter().map(String::as_str).collect();
        let vowel_clusters: Vec<&str> =
            inventory.vowel_clusters().iter().map(String::as_str).collect();
        Pools {
            hiatus_breakers: hiatus_breakers(inventory),
            consonants: inventory.consonants().iter().map(String::as_str).collect(),
            plain_vowels: vowels.iter().copied().filter(|v| !is_accented(v)).collect(),
            vowels,
            codas: inventory.coda_restrictions().iter().map(String::as_str).collect(),
            onset_clusters: inventory.onset_clusters().iter().map(String::as_str).collect(),
            plain_vowel_clusters: vowel_clusters
                .iter()
                .copied()
                .filter(|c| !is_accented(c))
                .collect(),
            vowel_clusters,
        }
    }
}

/// Consonants that may be inserted to break a vowel-vowel boundary: the
/// codas, or all consonants if no coda qualifies, minus any grapheme that
/// contains a character of the vowel set.
fn hiatus_breakers(inventory: &Inventory) -> Vec<&str> {
    let no_vowel_char = |c: &&str| !c.chars().any(|ch| inventory.is_vowel_char(ch));
    let codas: Vec<&str> = inventory
        .coda_restrictions()
        .iter()
        .map(String::as_str)
        .filter(no_vowel_char)
        .collect();
    if !codas.is_empty() {
        return codas;
    }
    inventory
        .consonants()
        .iter()
        .map(String::as_str)
        .filter(no_vowel_char)
        .collect()
}

/// Generate one word.
///
/// `syllable_count` of `None` draws uniformly from 1..=3. Fails without
/// producing any output if the inventory lacks consonants, vowels or
/// patterns, or if a constrained draw has no candidate left.
pub fn generate_word(
    inventory: &Inventory,
    syllable_count: Option<usize>,
    rng: &mut WordRng,
) -> Result<GeneratedWord, GenerateError> {
    if inventory.consonants().is_empty() || inventory.vowels().is_empty() {
        return Err(GenerateError::EmptyInventory);
    }
    if inventory.syllable_patterns().is_empty() {
        return Err(GenerateError::EmptyPatternSet);
    }
    let count = match syllable_count {
        Some(0) => return Err(GenerateError::ZeroSyllables),
        Some(n) => n,
        None => rng.range_usize_inclusive(DEFAULT_SYLLABLES.0, DEFAULT_SYLLABLES.1),
    };

    let pools = Pools::new(inventory);
    let mut word = WordState::default();
    let mut text = String::new();
    let mut syllables = Vec::with_capacity(count);
    let mut stressed = None;

    for index in 0..count {
        let pattern = rng
            .choose(inventory.syllable_patterns())
            .ok_or(GenerateError::EmptyPatternSet)?;

        let had_stress = word.stress_used;
        let mut syllable = build_syllable(pattern, &pools, &mut word, rng)?;
        if !had_stress && word.stress_used {
            stressed = Some(index);
        }

        if forms_hiatus(inventory, &text, &syllable) {
            let bridge = rng
                .choose(&pools.hiatus_breakers)
                .ok_or(GenerateError::NoHiatusBreaker)?;
            log::debug!("hiatus before '{syllable}', inserting '{bridge}'");
            syllable.insert_str(0, bridge);
        }

        text.push_str(&syllable);
        syllables.push(syllable);
    }

    Ok(GeneratedWord {
        text,
        syllables,
        stressed,
    })
}

/// Generate `n` words from one random stream.
pub fn generate_words(
    inventory: &Inventory,
    n: usize,
    syllable_count: Option<usize>,
    rng: &mut WordRng,
) -> Result<Vec<GeneratedWord>, GenerateError> {
    (0..n)
        .map(|_| generate_word(inventory, syllable_count, rng))
        .collect()
}

fn build_syllable<'a>(
    pattern: &SyllablePattern,
    pools: &Pools<'a>,
    word: &mut WordState,
    rng: &mut WordRng,
) -> Result<String, GenerateError> {
    let slots = pattern.slots();
    let mut state = SyllableState::default();
    let mut out = String::new();
    let mut i = 0;

    while i < slots.len() {
        let next = slots.get(i + 1).copied();
        let is_last = next.is_none();

        match slots[i] {
            Slot::Consonant => {
                if i == 0 && next == Some(Slot::Consonant) {
                    if let Some(cluster) =
                        pick_onset_cluster(&pools.onset_clusters, pattern.leading_consonants(), rng)
                    {
                        out.push_str(cluster);
                        i += cluster.chars().count();
                        continue;
                    }
                }
                let pool = if is_last && !pools.codas.is_empty() {
                    &pools.codas
                } else {
                    &pools.consonants
                };
                let consonant = rng.choose(pool).ok_or(GenerateError::EmptyInventory)?;
                out.push_str(consonant);
                i += 1;
            }
            Slot::Vowel => {
                if next == Some(Slot::Vowel) && !pools.vowel_clusters.is_empty() {
                    push_vowel_cluster(&mut out, pools, word, rng)?;
                    i += 2;
                    continue;
                }
                let vowel = pick_vowel(pools, &state, word, rng)?;
                if is_accented(vowel) {
                    word.stress_used = true;
                }
                out.push_str(vowel);
                state.last_vowel = Some(vowel);
                i += 1;
            }
        }
    }

    Ok(out)
}

/// Pick an onset cluster that fits inside the pattern's leading consonant run.
/// `None` means the slot falls back to a single consonant.
fn pick_onset_cluster<'a>(
    clusters: &[&'a str],
    leading_consonants: usize,
    rng: &mut WordRng,
) -> Option<&'a str> {
    if clusters.is_empty() {
        return None;
    }
    let fitting: Vec<&str> = clusters
        .iter()
        .copied()
        .filter(|c| c.chars().count() <= leading_consonants)
        .collect();
    rng.choose(&fitting).copied()
}

/// Append a vowel cluster. Once the word has its accented vowel, only plain
/// clusters are eligible; with none configured, two distinct plain vowels are
/// sampled to stand in for one.
fn push_vowel_cluster(
    out: &mut String,
    pools: &Pools<'_>,
    word: &mut WordState,
    rng: &mut WordRng,
) -> Result<(), GenerateError> {
    if !word.stress_used {
        let cluster = rng
            .choose(&pools.vowel_clusters)
            .ok_or(GenerateError::EmptyInventory)?;
        if is_accented(cluster) {
            word.stress_used = true;
        }
        out.push_str(cluster);
        return Ok(());
    }

    if let Some(cluster) = rng.choose(&pools.plain_vowel_clusters) {
        out.push_str(cluster);
        return Ok(());
    }

    let pair = rng.sample_distinct(&pools.plain_vowels, 2).ok_or(
        GenerateError::InsufficientPlainVowels {
            available: pools.plain_vowels.len(),
        },
    )?;
    log::debug!("no plain vowel cluster configured, using synthetic pair");
    for vowel in pair {
        out.push_str(vowel);
    }
    Ok(())
}

/// Draw a single vowel that is not the syllable's previous vowel and, once the
/// word has its accented vowel, is not accented.
fn pick_vowel<'a>(
    pools: &Pools<'a>,
    state: &SyllableState<'a>,
    word: &WordState,
    rng: &mut WordRng,
) -> Result<&'a str, GenerateError> {
    let eligible: Vec<&'a str> = pools
        .vowels
        .iter()
        .copied()
        .filter(|v| Some(*v) != state.last_vowel)
        .filter(|v| !(word.stress_used && is_accented(v)))
        .collect();
    rng.choose(&eligible)
        .copied()
        .ok_or(GenerateError::NoEligibleVowel)
}

fn forms_hiatus(inventory: &Inventory, word: &str, syllable: &str) -> bool {
    let ends_in_vowel = word.chars().last().is_some_and(|c| inventory.is_vowel_char(c));
    let starts_with_vowel = syllable
        .chars()
        .next()
        .is_some_and(|c| inventory.is_vowel_char(c));
    ends_in_vowel && starts_with_vowel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::InventoryBuilder;
    use crate::types::accent_count;

    fn inventory(consonants: &[&str], vowels: &[&str], patterns: &[&str]) -> InventoryBuilder {
        let mut b = InventoryBuilder::new();
        for c in consonants {
            b.add_consonant(c).unwrap();
        }
        for v in vowels {
            b.add_vowel(v).unwrap();
        }
        for p in patterns {
            b.add_pattern(p.parse().unwrap());
        }
        b
    }

    #[test]
    fn test_cv_alternation() {
        let inv = inventory(&["t", "r", "n"], &["a", "i"], &["CV"]).build();
        for seed in 0..200 {
            let mut rng = WordRng::new(seed);
            let word = generate_word(&inv, Some(2), &mut rng).unwrap();
            let chars: Vec<char> = word.text.chars().collect();
            assert_eq!(chars.len(), 4, "word '{}'", word.text);
            for (i, c) in chars.iter().enumerate() {
                let expected = if i % 2 == 0 { "trn" } else { "ai" };
                assert!(expected.contains(*c), "word '{}' at {}", word.text, i);
            }
            assert_eq!(word.syllables.len(), 2);
            assert_eq!(word.stressed, None);
        }
    }

    #[test]
    fn test_empty_consonants_fails() {
        let inv = inventory(&[], &["a"], &["CV"]).build();
        let mut rng = WordRng::new(1);
        assert_eq!(
            generate_word(&inv, Some(2), &mut rng),
            Err(GenerateError::EmptyInventory)
        );
    }

    #[test]
    fn test_empty_vowels_fails() {
        let inv = inventory(&["t"], &[], &["CV"]).build();
        let mut rng = WordRng::new(1);
        assert_eq!(
            generate_word(&inv, None, &mut rng),
            Err(GenerateError::EmptyInventory)
        );
    }

    #[test]
    fn test_empty_patterns_fails() {
        let inv = inventory(&["t"], &["a"], &[]).build();
        let mut rng = WordRng::new(1);
        assert_eq!(
            generate_word(&inv, Some(1), &mut rng),
            Err(GenerateError::EmptyPatternSet)
        );
    }

    #[test]
    fn test_zero_syllables_fails() {
        let inv = inventory(&["t"], &["a"], &["CV"]).build();
        let mut rng = WordRng::new(1);
        assert_eq!(
            generate_word(&inv, Some(0), &mut rng),
            Err(GenerateError::ZeroSyllables)
        );
    }

    #[test]
    fn test_default_syllable_count_in_range() {
        let inv = inventory(&["t", "k"], &["a", "o"], &["CV"]).build();
        let mut rng = WordRng::new(5);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let word = generate_word(&inv, None, &mut rng).unwrap();
            let n = word.syllables.len();
            assert!((1..=3).contains(&n));
            seen[n - 1] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_same_seed_same_word() {
        let mut b = inventory(&["t", "r", "n", "s"], &["a", "e", "é"], &["CV", "CVC", "CCV"]);
        b.add_onset_cluster("tr").unwrap();
        let inv = b.build();
        let a = generate_word(&inv, Some(3), &mut WordRng::new(99)).unwrap();
        let b = generate_word(&inv, Some(3), &mut WordRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_onset_cluster_used_for_cc() {
        let mut b = inventory(&["t", "r", "k"], &["a"], &["CCV"]);
        b.add_onset_cluster("tr").unwrap();
        let inv = b.build();
        let mut rng = WordRng::new(3);
        let word = generate_word(&inv, Some(3), &mut rng).unwrap();
        for syllable in &word.syllables {
            assert_eq!(syllable, "tra");
        }
    }

    #[test]
    fn test_onset_cluster_longer_than_pattern_is_skipped() {
        let mut b = inventory(&["s", "t", "r"], &["a"], &["CCV"]);
        b.add_onset_cluster("str").unwrap();
        let inv = b.build();
        for seed in 0..50 {
            let word = generate_word(&inv, Some(1), &mut WordRng::new(seed)).unwrap();
            assert_eq!(word.text.chars().count(), 3, "word '{}'", word.text);
            assert!(word.text.ends_with('a'));
        }
    }

    #[test]
    fn test_coda_restriction() {
        let mut b = inventory(&["t", "k", "n"], &["a", "o"], &["CVC"]);
        b.add_coda("n").unwrap();
        let inv = b.build();
        for seed in 0..50 {
            let word = generate_word(&inv, Some(2), &mut WordRng::new(seed)).unwrap();
            for syllable in &word.syllables {
                assert!(syllable.ends_with('n'), "syllable '{syllable}'");
            }
        }
    }

    #[test]
    fn test_vowel_cluster_used_for_vv() {
        let mut b = inventory(&["t"], &["a", "i"], &["CVV"]);
        b.add_vowel_cluster("ai").unwrap();
        let inv = b.build();
        let word = generate_word(&inv, Some(2), &mut WordRng::new(8)).unwrap();
        assert_eq!(word.text, "taitai");
    }

    #[test]
    fn test_accented_cluster_then_synthetic_pair() {
        let mut b = inventory(&["t"], &["a", "é", "i"], &["CVV"]);
        b.add_vowel_cluster("éa").unwrap();
        let inv = b.build();
        for seed in 0..50 {
            let word = generate_word(&inv, Some(2), &mut WordRng::new(seed)).unwrap();
            assert_eq!(word.syllables[0], "téa");
            let second = &word.syllables[1];
            assert!(second == "tai" || second == "tia", "syllable '{second}'");
            assert_eq!(word.stressed, Some(0));
            assert_eq!(accent_count(&word.text), 1);
        }
    }

    #[test]
    fn test_accented_cluster_prefers_plain_cluster() {
        let mut b = inventory(&["t"], &["a", "é", "o", "u"], &["CVV"]);
        b.add_vowel_cluster("éa").unwrap();
        b.add_vowel_cluster("ou").unwrap();
        let inv = b.build();
        for seed in 0..50 {
            let word = generate_word(&inv, Some(4), &mut WordRng::new(seed)).unwrap();
            assert!(accent_count(&word.text) <= 1, "word '{}'", word.text);
            let stressed = word.stressed.unwrap_or(usize::MAX);
            for (i, syllable) in word.syllables.iter().enumerate() {
                if i > stressed {
                    assert_eq!(syllable, "tou");
                }
            }
        }
    }

    #[test]
    fn test_synthetic_pair_needs_two_plain_vowels() {
        let mut b = inventory(&["t"], &["a", "é"], &["CVV"]);
        b.add_vowel_cluster("éa").unwrap();
        let inv = b.build();
        assert_eq!(
            generate_word(&inv, Some(2), &mut WordRng::new(0)),
            Err(GenerateError::InsufficientPlainVowels { available: 1 })
        );
    }

    #[test]
    fn test_single_vowel_cannot_repeat_within_syllable() {
        let inv = inventory(&["t"], &["a"], &["VV"]).build();
        assert_eq!(
            generate_word(&inv, Some(1), &mut WordRng::new(0)),
            Err(GenerateError::NoEligibleVowel)
        );

        let inv = inventory(&["t"], &["a", "o"], &["VCV", "VV"]).build();
        for seed in 0..100 {
            let word = generate_word(&inv, Some(1), &mut WordRng::new(seed)).unwrap();
            let vowels: Vec<char> = word.text.chars().filter(|c| *c != 't').collect();
            assert_ne!(vowels[0], vowels[1], "word '{}'", word.text);
        }
    }

    #[test]
    fn test_single_accent_across_syllables() {
        let inv = inventory(&["t", "m"], &["é", "ê", "a"], &["CV"]).build();
        for seed in 0..200 {
            let word = generate_word(&inv, Some(5), &mut WordRng::new(seed)).unwrap();
            assert!(accent_count(&word.text) <= 1, "word '{}'", word.text);
        }
    }

    #[test]
    fn test_accent_exhaustion_reports_no_vowel() {
        let inv = inventory(&["t"], &["é", "ê"], &["CV"]).build();
        assert_eq!(
            generate_word(&inv, Some(2), &mut WordRng::new(4)),
            Err(GenerateError::NoEligibleVowel)
        );
    }

    #[test]
    fn test_hiatus_repair() {
        let inv = inventory(&["t"], &["a"], &["V"]).build();
        let word = generate_word(&inv, Some(3), &mut WordRng::new(0)).unwrap();
        assert_eq!(word.text, "atata");
        assert_eq!(word.syllables, vec!["a", "ta", "ta"]);
    }

    #[test]
    fn test_hiatus_repair_prefers_codas() {
        let mut b = inventory(&["t", "n"], &["a"], &["V"]);
        b.add_coda("n").unwrap();
        let inv = b.build();
        let word = generate_word(&inv, Some(3), &mut WordRng::new(0)).unwrap();
        assert_eq!(word.text, "anana");
    }

    #[test]
    fn test_hiatus_bridge_skips_vowel_graphemes() {
        let inv = inventory(&["t", "y"], &["a", "y"], &["V"]).build();
        for seed in 0..100 {
            let word = generate_word(&inv, Some(3), &mut WordRng::new(seed)).unwrap();
            for syllable in &word.syllables[1..] {
                assert!(syllable.starts_with('t'), "word '{}'", word.text);
            }
        }
    }

    #[test]
    fn test_hiatus_without_breaker_fails() {
        let inv = inventory(&["y"], &["a", "y"], &["V"]).build();
        for seed in 0..20 {
            assert_eq!(
                generate_word(&inv, Some(3), &mut WordRng::new(seed)),
                Err(GenerateError::NoHiatusBreaker)
            );
        }
    }

    #[test]
    fn test_accented_cluster_counts_once() {
        let mut b = inventory(&["t"], &["é", "a", "o"], &["CVV"]);
        b.add_vowel_cluster("éa").unwrap();
        b.add_vowel_cluster("oa").unwrap();
        assert!(b.add_vowel_cluster("éé").is_err());
        let inv = b.build();
        for seed in 0..100 {
            let word = generate_word(&inv, Some(3), &mut WordRng::new(seed)).unwrap();
            assert!(accent_count(&word.text) <= 1, "word '{}'", word.text);
        }
    }

    #[test]
    fn test_generate_words_count() {
        let inv = inventory(&["t", "k"], &["a", "o"], &["CV", "CVC"]).build();
        let words = generate_words(&inv, 7, Some(2), &mut WordRng::new(11)).unwrap();
        assert_eq!(words.len(), 7);
        assert!(words.iter().all(|w| w.syllables.len() == 2));
    }
}
