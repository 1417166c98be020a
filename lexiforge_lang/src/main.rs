// Lexiforge word generator: CLI entry point.
//
// Loads a language configuration (JSON, or the embedded default), validates
// its inventory, prints a list of generated words with their syllable
// breakdown, and optionally a few example sentences built from freshly
// generated nouns and verbs.
//
// Usage:
//   generate [OPTIONS]
//     --config <PATH>     Language configuration JSON (default: embedded)
//     --count <N>         Number of words to print (default: 5)
//     --syllables <N>     Syllables per word (default: random 1-3)
//     --seed <N>          RNG seed (default: from the clock)
//     --sentences <N>     Example sentences to print (default: 0)
//
// Set RUST_LOG=debug to see hiatus repairs and cluster fallbacks.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use lexiforge_lang::{LanguageConfig, Vocabulary, WordClass, default_config};
use lexiforge_prng::WordRng;

/// Parsed command-line options.
struct Options {
    config: Option<PathBuf>,
    count: usize,
    syllables: Option<usize>,
    seed: Option<u64>,
    sentences: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            config: None,
            count: 5,
            syllables: None,
            seed: None,
            sentences: 0,
        }
    }
}

fn main() {
    env_logger::init();
    let options = parse_args();

    let config = match &options.config {
        Some(path) => match LanguageConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => default_config(),
    };

    let (language, rejected) = config.into_language();
    if !rejected.is_empty() {
        println!("Skipped {} invalid configuration entries:", rejected.len());
        for r in &rejected {
            println!("  - {r}");
        }
        println!();
    }

    let seed = options.seed.unwrap_or_else(clock_seed);
    let mut rng = WordRng::new(seed);

    let inventory = &language.inventory;
    println!("=== Lexiforge ===");
    println!("Consonants: {}", join(inventory.consonants().iter()));
    println!("Vowels: {}", join(inventory.vowels().iter()));
    println!("Patterns: {}", join(inventory.syllable_patterns().iter()));
    println!("Seed: {seed}");
    println!();

    for i in 0..options.count {
        match language.generate_word(options.syllables, &mut rng) {
            Ok(word) => println!("{}. {} ({})", i + 1, word, word.syllables.join("·")),
            Err(e) => {
                eprintln!("Generation failed: {e}");
                std::process::exit(1);
            }
        }
    }

    if options.sentences == 0 {
        return;
    }

    let mut vocabulary = Vocabulary::new();
    for (class, n) in [(WordClass::Noun, 3), (WordClass::Verb, 2)] {
        if let Err(e) = vocabulary.fill(inventory, class, n, None, &mut rng) {
            eprintln!("Generation failed: {e}");
            std::process::exit(1);
        }
    }

    println!();
    let counts = vocabulary
        .counts()
        .into_iter()
        .map(|(class, n)| format!("{n} {class}"));
    println!("Vocabulary: {}", join(counts));
    println!("Nouns: {}", join(vocabulary.words(WordClass::Noun).iter()));
    println!("Verbs: {}", join(vocabulary.words(WordClass::Verb).iter()));
    for _ in 0..options.sentences {
        if let Some(showcase) = language.showcase(&vocabulary, &mut rng) {
            println!();
            println!("  Statement: {}", showcase.declarative);
            println!("  Negative:  {}", showcase.negative);
            println!("  Question:  {}", showcase.question);
        }
    }
}

/// Parse command-line arguments into `Options`. Uses simple
/// `std::env::args()` matching.
fn parse_args() -> Options {
    let mut options = Options::default();
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                options.config = Some(args.get(i).map(PathBuf::from).unwrap_or_else(|| {
                    eprintln!("--config requires a path");
                    std::process::exit(1);
                }));
            }
            "--count" => {
                i += 1;
                options.count = parse_number(&args, i, "--count");
            }
            "--syllables" => {
                i += 1;
                options.syllables = Some(parse_number(&args, i, "--syllables"));
            }
            "--seed" => {
                i += 1;
                options.seed = Some(parse_number(&args, i, "--seed"));
            }
            "--sentences" => {
                i += 1;
                options.sentences = parse_number(&args, i, "--sentences");
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("{flag} requires a valid number");
        std::process::exit(1);
    })
}

fn print_usage() {
    println!("Usage: generate [OPTIONS]");
    println!("  --config <PATH>     Language configuration JSON (default: embedded)");
    println!("  --count <N>         Number of words to print (default: 5)");
    println!("  --syllables <N>     Syllables per word (default: random 1-3)");
    println!("  --seed <N>          RNG seed (default: from the clock)");
    println!("  --sentences <N>     Example sentences to print (default: 0)");
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|x| x.to_string()).collect::<Vec<_>>().join(", ")
}
