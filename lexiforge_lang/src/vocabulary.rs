// Generated words filed by word class.
//
// Ordered map and vectors only, so iteration and seeded picks are stable.

use crate::error::GenerateError;
use crate::generator::generate_word;
use crate::inventory::Inventory;
use crate::types::WordClass;
use lexiforge_prng::WordRng;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: BTreeMap<WordClass, Vec<String>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class: WordClass, word: impl Into<String>) {
        self.words.entry(class).or_default().push(word.into());
    }

    /// Words of one class, in insertion order.
    pub fn words(&self, class: WordClass) -> &[String] {
        self.words.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn choose(&self, class: WordClass, rng: &mut WordRng) -> Option<&str> {
        rng.choose(self.words(class)).map(String::as_str)
    }

    /// Number of words per class, for every class (including empty ones).
    pub fn counts(&self) -> Vec<(WordClass, usize)> {
        WordClass::ALL
            .iter()
            .map(|&class| (class, self.words(class).len()))
            .collect()
    }

    /// Generate `n` fresh words and file them under `class`.
    pub fn fill(
        &mut self,
        inventory: &Inventory,
        class: WordClass,
        n: usize,
        syllable_count: Option<usize>,
        rng: &mut WordRng,
    ) -> Result<(), GenerateError> {
        for _ in 0..n {
            let word = generate_word(inventory, syllable_count, rng)?;
            self.add(class, word.text);
        }
        Ok(())
    }
}
