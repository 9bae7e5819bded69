// Haiku generator — CLI entry point.
//
// Usage:
//   haiku "<PROMPT>" [--seed N] [--count N] [--save FILE]
//   haiku --themes
//
// Generates one or more haikus from the prompt and prints them. With
// --save, the haikus are also appended to a JSON collection file
// (created on first use). --themes lists the detectable theme tags.
//
// Input validation lives here, not in the engine: a blank prompt and an
// out-of-range count are rejected before the core is invoked.

use haiku_engine::{Theme, generate_batch};
use haiku_store::Collection;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--themes") {
        println!("Available theme tags:");
        for theme in Theme::ALL {
            println!("  {}", theme.name());
        }
        return;
    }

    let prompt = match args.get(1).filter(|s| !s.starts_with("--")) {
        Some(p) => p.clone(),
        None => {
            eprintln!("Usage: haiku \"<PROMPT>\" [--seed N] [--count N] [--save FILE]");
            std::process::exit(1);
        }
    };

    if prompt.trim().is_empty() {
        eprintln!("Prompt must not be blank.");
        std::process::exit(1);
    }

    let count: usize = parse_flag(&args, "--count").unwrap_or(1);
    if !(1..=10).contains(&count) {
        eprintln!("--count must be between 1 and 10");
        std::process::exit(1);
    }

    let seed: Option<u64> = parse_flag(&args, "--seed");
    let save_path: Option<String> = parse_flag(&args, "--save");

    let mut rng = if let Some(s) = seed {
        StdRng::seed_from_u64(s)
    } else {
        StdRng::from_os_rng()
    };

    let haikus = generate_batch(&prompt, count, &mut rng);

    for (i, haiku) in haikus.iter().enumerate() {
        if count > 1 {
            println!("--- {} of {} ---", i + 1, count);
        }
        println!("{}", haiku.clipboard_text());
        println!();
    }

    if let Some(path) = save_path {
        let path = Path::new(&path);
        let mut collection = match Collection::load_or_default(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to read collection {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        for haiku in haikus {
            collection.insert(haiku);
        }
        if let Err(e) = collection.save(path) {
            eprintln!("Failed to save collection {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!(
            "Saved {} haiku(s) to {} ({} total).",
            count,
            path.display(),
            collection.len()
        );
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
